use crate::api::error::internal_error;
use auth_client::AuthClient;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use models_notemon::UserContext;
use std::sync::Arc;

/// Pulls the token out of the `authorization` header. A header without the
/// `Bearer ` prefix is passed through as-is so validation rejects it, rather
/// than being reported as absent.
pub fn extract_bearer_token(headers: &axum::http::HeaderMap) -> Option<String> {
    let auth_header = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())?;

    Some(
        auth_header
            .strip_prefix("Bearer ")
            .unwrap_or(auth_header)
            .to_string(),
    )
}

/// Validates the bearer token against the external auth service and attaches
/// the resolved [UserContext] to the request. Every route behind this
/// middleware requires an authenticated caller.
pub async fn attach_user(
    State(auth): State<Arc<AuthClient>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let Some(access_token) = extract_bearer_token(req.headers()) else {
        tracing::trace!("no authorization header provided");
        return Err(internal_error("No authorization header"));
    };

    let user = auth.get_user(&access_token).await.map_err(|e| {
        tracing::error!(error = ?e, "unable to validate access token");
        internal_error("Invalid token")
    })?;

    req.extensions_mut().insert(UserContext {
        user_id: user.id,
        email: user.email,
    });

    Ok(next.run(req).await)
}
