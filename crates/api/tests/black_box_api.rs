use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;

use storefront_api::app;
use storefront_demo::ChatProvider;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Spawn the real router (in-memory store) on an ephemeral port.
    async fn spawn() -> Self {
        let services = Arc::new(app::services::in_memory_services());
        Self::spawn_with_services(services).await
    }

    async fn spawn_with_services(services: Arc<app::services::AppServices>) -> Self {
        let router = app::app_with_services(services);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn list_items_projects_only_summary_fields() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/v1/items", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(
        items
            .iter()
            .map(|i| i["itemId"].as_str().unwrap())
            .collect::<Vec<_>>(),
        vec!["item-001", "item-002", "item-003"]
    );

    let mut keys: Vec<_> = items[0].as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, vec!["itemId", "name", "price"]);
}

#[tokio::test]
async fn get_item_returns_the_detail_shape() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/v1/items/item-001", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["itemId"], "item-001");
    assert_eq!(body["name"], "Classic T-Shirt");
    assert_eq!(body["price"], 29.99);
    assert_eq!(body["category"], "Apparel");
    assert!(body["brand"].is_string());
    assert!(body["sku"].is_string());
    assert!(body.get("createdAt").is_none());
}

#[tokio::test]
async fn unknown_item_is_a_structured_404() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/v1/items/item-999", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], 404);
    assert_eq!(body["error"], "Resource not found");
    assert_eq!(body["message"], "Item not found: item-999");
}

#[tokio::test]
async fn stock_lookup_round_trips_the_key() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/v1/stock/item-003", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["itemId"], "item-003");
    assert_eq!(body["inStock"], false);
    assert_eq!(body["quantity"], 0);
    assert_eq!(body["warehouse"], "Main Warehouse");

    let res = client
        .get(format!("{}/v1/stock/item-999", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Stock information not found for item: item-999");
}

#[tokio::test]
async fn tracking_join_returns_history_most_recent_first() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/v1/track/TRK-2025-001", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["trackingNo"], "TRK-2025-001");
    assert_eq!(body["status"], "In Transit");
    assert!(body["deliveryDate"].is_null());

    let history = body["history"].as_array().unwrap();
    assert_eq!(history.len(), 3);
    let timestamps: Vec<&str> = history
        .iter()
        .map(|e| e["timestamp"].as_str().unwrap())
        .collect();
    let mut sorted = timestamps.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(timestamps, sorted);
}

#[tokio::test]
async fn delivered_tracking_carries_a_delivery_date() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/v1/track/TRK-2025-002", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "Delivered");
    assert!(body["deliveryDate"].is_string());
}

#[tokio::test]
async fn unknown_tracking_number_is_a_structured_404() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/v1/track/TRK-0000-000", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Tracking number not found: TRK-0000-000");
}

#[tokio::test]
async fn function_endpoint_wraps_the_router_result() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!(
            "{}/api/demo/function/StockPlugin/checkAvailability?parameter=item-003",
            srv.base_url
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["plugin"], "StockPlugin");
    assert_eq!(body["function"], "checkAvailability");
    assert_eq!(body["parameter"], "item-003");
    assert_eq!(body["result"], "No, item-003 is currently out of stock");
}

#[tokio::test]
async fn unknown_plugin_is_a_successful_text_payload() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!(
            "{}/api/demo/function/Foo/getItemInfo?parameter=x",
            srv.base_url
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["result"], "Unknown plugin: Foo");
}

#[tokio::test]
async fn function_endpoint_requires_the_parameter_query() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!(
            "{}/api/demo/function/ItemPlugin/getItemInfo",
            srv.base_url
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn blank_chat_message_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for body in [json!({}), json!({ "message": "   " })] {
        let res = client
            .post(format!("{}/api/demo/chat", srv.base_url))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["error"], "Message is required");
    }
}

#[tokio::test]
async fn chat_replies_come_from_the_wired_provider() {
    struct Scripted;

    #[async_trait]
    impl ChatProvider for Scripted {
        async fn reply(&self, _system: &str, user_message: &str) -> anyhow::Result<String> {
            Ok(format!("you asked: {user_message}"))
        }
    }

    let services = Arc::new(app::services::in_memory_services_with_chat(Arc::new(
        Scripted,
    )));
    let srv = TestServer::spawn_with_services(services).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/demo/chat", srv.base_url))
        .json(&json!({ "message": "Tell me about item-001" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["userMessage"], "Tell me about item-001");
    assert_eq!(body["aiResponse"], "you asked: Tell me about item-001");
}

#[tokio::test]
async fn chat_without_a_provider_degrades_in_band() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/demo/chat", srv.base_url))
        .json(&json!({ "message": "hello" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert!(
        body["aiResponse"]
            .as_str()
            .unwrap()
            .starts_with("Error processing your request:")
    );
}

#[tokio::test]
async fn health_and_info_are_static() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/demo/health", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "UP");

    let res = client
        .get(format!("{}/api/demo/info", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let plugins = body["plugins"].as_object().unwrap();
    assert_eq!(plugins.len(), 3);
    assert_eq!(plugins["ItemPlugin"].as_array().unwrap().len(), 2);
}
