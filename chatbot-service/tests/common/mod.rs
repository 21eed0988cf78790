#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chatbot_service::config::{ChatbotConfig, GeminiSettings, ObservabilityConfig};
use chatbot_service::models::ModelDescriptor;
use chatbot_service::services::providers::GenerativeProvider;
use chatbot_service::startup::{build_router, AppState, Application};
use http_body_util::BodyExt;
use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use tower::ServiceExt;

pub const TEST_API_KEY: &str = "test-api-key-0123456789";

pub fn test_config(api_base: &str) -> ChatbotConfig {
    ChatbotConfig {
        common: CoreConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        gemini: GeminiSettings {
            api_key: Secret::new(TEST_API_KEY.to_string()),
            model: "models/gemini-2.0-flash-001".to_string(),
            api_base: api_base.to_string(),
            timeout_secs: 5,
        },
        observability: ObservabilityConfig {
            log_level: "info".to_string(),
            otlp_endpoint: None,
        },
    }
}

pub fn router_with(provider: Arc<dyn GenerativeProvider>) -> Router {
    build_router(AppState::new(provider))
}

/// POST a raw body to `/chatbot` and decode the JSON reply.
pub async fn post_chatbot(router: Router, body: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/chatbot")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub fn model(name: &str, methods: &[&str]) -> ModelDescriptor {
    ModelDescriptor {
        name: name.to_string(),
        display_name: name.trim_start_matches("models/").to_string(),
        description: format!("Description of {}", name),
        supported_generation_methods: methods.iter().map(|m| m.to_string()).collect(),
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    pub async fn spawn(provider: Arc<dyn GenerativeProvider>) -> Self {
        let app = Application::build_with_provider(test_config("http://127.0.0.1:9"), provider)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }
}
