// reef-admin/tests/dashboard_pipeline.rs
// Full load-and-aggregate pipeline against a mock backend, including the
// degraded path where a secondary fetch fails.

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

use reef_admin::views::dashboard;
use reef_client::ClientConfig;

async fn products_broken() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "products exploded" })),
    )
}

async fn orders() -> Json<Value> {
    Json(json!([
        {
            "id": 1,
            "user_id": 10,
            "user_name": "Budi",
            "status": "pending",
            "total_amount": 100.0,
            "created_at": "2024-03-01T08:00:00Z"
        },
        {
            "id": 2,
            "user_id": 11,
            "user_name": "Sari",
            "status": "completed",
            "total_amount": 200.0,
            "created_at": "2024-03-02T08:00:00Z"
        },
        {
            "id": 3,
            "user_id": 10,
            "user_name": "Budi",
            "status": "delivered",
            "total_amount": 300.0,
            "created_at": "2024-03-03T08:00:00Z"
        }
    ]))
}

async fn profiles() -> Json<Value> {
    Json(json!([
        { "id": 10, "name": "Budi", "phone": "0811" },
        { "id": 11, "name": "Sari", "phone": "0822" }
    ]))
}

async fn role_requests() -> Json<Value> {
    Json(json!({
        "data": [
            {
                "id": 1,
                "name": "Budi",
                "phone": "0811",
                "reason": "become seller",
                "status": "pending",
                "requested_at": "2024-03-01T08:00:00Z"
            },
            {
                "id": 2,
                "name": "Sari",
                "phone": "0822",
                "reason": "become seller",
                "status": "approved",
                "requested_at": "2024-02-01T08:00:00Z"
            }
        ]
    }))
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/api/products", get(products_broken))
        .route("/api/orders", get(orders))
        .route("/api/profiles", get(profiles))
        .route("/api/role-change/requests", get(role_requests));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/api", addr)
}

#[tokio::test]
async fn failed_secondary_fetch_degrades_to_defaults() {
    let base_url = spawn_backend().await;
    let client = ClientConfig::new(base_url)
        .with_token("test-token")
        .build_http_client();

    let snapshot = dashboard::load(&client).await;

    // Broken products endpoint falls back to an empty collection
    assert_eq!(snapshot.products, 0);

    // Everything else still renders
    assert_eq!(snapshot.orders, 3);
    assert_eq!(snapshot.users, 2);
    assert_eq!(snapshot.revenue, 500.0);
    assert_eq!(snapshot.pending_role_requests, 1);

    // Recent activity newest first
    let ids: Vec<i64> = snapshot.recent_activity.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[tokio::test]
async fn snapshot_is_stable_across_reloads() {
    let base_url = spawn_backend().await;
    let client = ClientConfig::new(base_url)
        .with_token("test-token")
        .build_http_client();

    let first = dashboard::load(&client).await;
    let second = dashboard::load(&client).await;

    assert_eq!(first.orders, second.orders);
    assert_eq!(first.revenue, second.revenue);
    assert_eq!(first.pending_role_requests, second.pending_role_requests);
}
