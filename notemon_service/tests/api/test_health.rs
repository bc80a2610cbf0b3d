use axum::Router;
use axum_test::TestServer;
use notemon_db_client::paths;
use notemon_service::api::health;

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let app = Router::new().nest(paths::HEALTH, health::router());
    let server = TestServer::new(app).unwrap();

    let response = server.get(paths::HEALTH).await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "notemon");
}
