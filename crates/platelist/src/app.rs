use std::time::Duration;

use axum::{http::Method, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::{livez, readyz},
        restaurants::list_restaurants,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for the listing endpoint
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(10)))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use platelist_core::restaurant::Restaurant;

    use crate::{config::Config, storage::InMemoryStore};

    fn sample(id: &str, name: &str) -> Restaurant {
        let mut restaurant = Restaurant::new();
        restaurant.set("id", id);
        restaurant.set("name", name);
        restaurant
    }

    fn seeded_state(restaurants: Vec<Restaurant>, default_results: u32) -> AppState {
        let store = Arc::new(InMemoryStore::with_restaurants(restaurants));
        let config = Config {
            default_results,
            table_name: None,
        };
        AppState::for_tests(store, config)
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_list_restaurants_empty() {
        let app = create_app(AppState::default());

        let (status, body) = get_body(app, "/restaurants").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"[]");
    }

    #[tokio::test]
    async fn test_list_restaurants_preserves_store_order() {
        let state = seeded_state(vec![sample("1", "A"), sample("2", "B")], 8);
        let app = create_app(state);

        let (status, body) = get_body(app, "/restaurants").await;

        assert_eq!(status, StatusCode::OK);
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([
                {"id": "1", "name": "A"},
                {"id": "2", "name": "B"}
            ])
        );
    }

    #[tokio::test]
    async fn test_list_restaurants_never_exceeds_count() {
        let restaurants = (0..20).map(|i| sample(&i.to_string(), "Diner")).collect();
        let state = seeded_state(restaurants, 8);
        let app = create_app(state);

        let (status, body) = get_body(app, "/restaurants").await;

        assert_eq!(status, StatusCode::OK);
        let parsed: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.len(), 8);
    }

    #[tokio::test]
    async fn test_list_restaurants_zero_count() {
        let state = seeded_state(vec![sample("1", "A")], 0);
        let app = create_app(state);

        let (status, body) = get_body(app, "/restaurants").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"[]");
    }

    #[tokio::test]
    async fn test_repeated_requests_are_byte_identical() {
        let state = seeded_state(vec![sample("1", "A"), sample("2", "B")], 8);
        let app = create_app(state);

        let (_, first) = get_body(app.clone(), "/restaurants").await;
        let (_, second) = get_body(app, "/restaurants").await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(AppState::default());

        let (status, _) = get_body(app, "/livez").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readyz_with_working_store() {
        let app = create_app(AppState::default());

        let (status, body) = get_body(app, "/readyz").await;

        assert_eq!(status, StatusCode::OK);
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["ready"], serde_json::json!(true));
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_as_bare_500() {
        use async_trait::async_trait;
        use platelist_core::storage::{RestaurantStore, Result, StoreError};

        struct FailingStore;

        #[async_trait]
        impl RestaurantStore for FailingStore {
            async fn list_restaurants(&self, _limit: u32) -> Result<Vec<Restaurant>> {
                Err(StoreError::QueryFailed("Table not found".to_string()))
            }
        }

        let config = Config {
            default_results: 8,
            table_name: None,
        };
        let app = create_app(AppState::for_tests(Arc::new(FailingStore), config));

        let (status, body) = get_body(app, "/restaurants").await;

        // No status-code distinction and no body detail on failure
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.is_empty());
    }
}
