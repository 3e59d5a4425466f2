//! # Routes
//!
//! Router setup with tracing, CORS and compression middleware.

use crate::api::rest::handlers::{self, AppState};
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds the service router.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/quote", post(handlers::create_quote))
        .route("/metrics", get(handlers::get_metrics))
        .route("/health", get(handlers::health_check))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::application::services::{MetricsService, QuoteService};
    use crate::domain::entities::{CarrierOffer, Quote, QuoteRequest};
    use crate::domain::value_objects::{QuoteId, Timestamp};
    use crate::infrastructure::carrier_api::{
        CarrierApiError, CarrierApiResult, CarrierQuoteGateway,
    };
    use crate::infrastructure::persistence::{InMemoryQuoteRepository, QuoteRepository};
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    #[derive(Debug)]
    struct StubGateway {
        response: CarrierApiResult<Value>,
    }

    #[async_trait]
    impl CarrierQuoteGateway for StubGateway {
        fn name(&self) -> &str {
            "stub"
        }

        async fn simulate(&self, _request: &QuoteRequest) -> CarrierApiResult<Value> {
            self.response.clone()
        }
    }

    fn app(response: CarrierApiResult<Value>) -> (Router, Arc<InMemoryQuoteRepository>) {
        let repo = Arc::new(InMemoryQuoteRepository::new());
        let gateway = Arc::new(StubGateway { response });
        let state = AppState::new(
            QuoteService::new(gateway, repo.clone()),
            MetricsService::new(repo.clone()),
        );
        (create_router(Arc::new(state)), repo)
    }

    fn quote_body() -> Value {
        json!({
            "shipper": {"registered_number": "25438296000158", "token": "token", "platform_code": "platform"},
            "recipient": {"type": 0, "country": "BRA", "zipcode": 1311000},
            "dispatchers": [{
                "registered_number": "25438296000158",
                "zipcode": 29161376,
                "volumes": [{
                    "amount": 1, "category": "7", "height": 0.2, "width": 0.2, "length": 0.2,
                    "unitary_price": 349, "unitary_weight": 5
                }]
            }],
            "simulation_type": [0]
        })
    }

    fn upstream_body() -> Value {
        json!({"dispatchers": [{"offers": [
            {"carrier": {"name": "CORREIOS"}, "service": "Normal", "delivery_time": {"days": 5}, "final_price": 20.5},
            {"carrier": {"name": "JADLOG"}, "service": ".PACKAGE", "delivery_time": {"minutes": 2880}, "final_price": 35}
        ]}]})
    }

    fn post_quote(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/quote")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn seed(repo: &InMemoryQuoteRepository, secs: i64, offers: &[(&str, i64)]) {
        let quote = Quote::from_parts(
            QuoteId::new_v4(),
            offers
                .iter()
                .map(|(name, price)| CarrierOffer::new(*name, "Normal", 2, Decimal::new(*price, 0)))
                .collect(),
            Timestamp::from_secs(secs).unwrap(),
        );
        repo.save(&quote).await.unwrap();
    }

    #[tokio::test]
    async fn health() {
        let (app, _) = app(Ok(upstream_body()));
        let response = app.oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn create_quote_returns_carriers() {
        let (app, repo) = app(Ok(upstream_body()));
        let response = app.oneshot(post_quote(quote_body().to_string())).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            json_body(response).await,
            json!({"carrier": [
                {"name": "CORREIOS", "service": "Normal", "deadline": 5, "price": 20.5},
                {"name": "JADLOG", "service": ".PACKAGE", "deadline": 2, "price": 35.0}
            ]})
        );
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn incomplete_request_is_bad_request() {
        let (app, repo) = app(Ok(upstream_body()));
        let mut body = quote_body();
        body["shipper"]["token"] = json!("");

        let response = app.oneshot(post_quote(body.to_string())).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({"error": "shipper information is incomplete"})
        );
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn negative_amount_is_bad_request() {
        let (app, repo) = app(Ok(upstream_body()));
        let mut body = quote_body();
        body["dispatchers"][0]["volumes"][0]["amount"] = json!(-1);

        let response = app.oneshot(post_quote(body.to_string())).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({"error": "volume information is incomplete or invalid"})
        );
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn malformed_json_uses_error_body() {
        let (app, _) = app(Ok(upstream_body()));
        let response = app.oneshot(post_quote("{not json".to_string())).await.unwrap();

        assert!(response.status().is_client_error());
        assert!(json_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn upstream_timeout_is_gateway_timeout() {
        let (app, _) = app(Err(CarrierApiError::timeout("10000ms")));
        let response = app.oneshot(post_quote(quote_body().to_string())).await.unwrap();

        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[tokio::test]
    async fn unexpected_upstream_shape_is_server_error() {
        let (app, _) = app(Ok(json!({"dispatchers": [{"offers": [{"service": "x"}]}]})));
        let response = app.oneshot(post_quote(quote_body().to_string())).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({"error": "missing carrier in offering"})
        );
    }

    #[tokio::test]
    async fn metrics_without_quotes_is_not_found() {
        let (app, _) = app(Ok(upstream_body()));
        let response = app.oneshot(get("/metrics")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await, json!({"error": "no quotes provided"}));
    }

    #[tokio::test]
    async fn metrics_report() {
        let (app, repo) = app(Ok(upstream_body()));
        seed(&repo, 1_700_000_000, &[("Carrier1", 10), ("Carrier2", 20)]).await;
        seed(&repo, 1_700_000_100, &[("Carrier1", 30), ("Carrier2", 40)]).await;

        let response = app.oneshot(get("/metrics?last_quotes=2")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["carriers"]["Carrier1"]["count"], 2);
        assert_eq!(body["carriers"]["Carrier1"]["total_price"], 40.0);
        assert_eq!(body["carriers"]["Carrier2"]["average_price"], 30.0);
        assert_eq!(body["cheapest_quote"]["name"], "Carrier1");
        assert_eq!(body["most_expensive_quote"]["price"], 40.0);
    }

    #[tokio::test]
    async fn metrics_window_and_bad_param() {
        let (app, repo) = app(Ok(upstream_body()));
        seed(&repo, 1_700_000_000, &[("Old", 1)]).await;
        seed(&repo, 1_700_000_100, &[("New", 2)]).await;

        let response = app
            .clone()
            .oneshot(get("/metrics?last_quotes=1"))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert!(body["carriers"].get("Old").is_none());
        assert_eq!(body["carriers"]["New"]["count"], 1);

        let response = app.oneshot(get("/metrics?last_quotes=abc")).await.unwrap();
        let body = json_body(response).await;
        assert_eq!(body["carriers"]["Old"]["count"], 1);
        assert_eq!(body["carriers"]["New"]["count"], 1);
    }
}
