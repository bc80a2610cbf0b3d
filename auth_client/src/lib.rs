pub mod error;
pub mod get_user;

/// Header carrying the project service key on every request to the auth service.
pub static SERVICE_KEY_HEADER: &str = "apikey";

#[derive(Clone)]
pub struct AuthClient {
    url: String,
    client: reqwest::Client,
}

impl AuthClient {
    pub fn new(service_key: String, url: String) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(SERVICE_KEY_HEADER, service_key.parse().unwrap());

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap();

        Self { url, client }
    }
}
