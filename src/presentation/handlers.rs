// HTTP request handlers. Every route answers 200 with JSON, failures included.
use crate::domain::reading::parse_days;
use crate::presentation::app_state::AppState;
use crate::presentation::responses::{
    AverageResponse, HistoryResponse, LiveResponse, StatusResponse,
};
use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "API online with CORS enabled",
    })
}

/// Latest temperature and humidity
pub async fn live(State(state): State<Arc<AppState>>) -> Json<LiveResponse> {
    match state.weather_service.live().await {
        Ok(reading) => Json(reading.into()),
        Err(e) => {
            // The cause is only logged; the client gets a fixed message
            tracing::error!("Error fetching live data: {}", e);
            Json(LiveResponse::failed())
        }
    }
}

fn invalid_days(raw: &str) -> String {
    format!("Invalid days value: {}", raw)
}

/// Mean temperature over the last `days` days
pub async fn average(
    Path(raw_days): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<AverageResponse> {
    let Some(days) = parse_days(&raw_days) else {
        tracing::warn!("Rejected days path segment {:?}", raw_days);
        return Json(AverageResponse::failed(None, invalid_days(&raw_days)));
    };

    match state.weather_service.average(days).await {
        Ok(avg) => Json(avg.into()),
        Err(e) => {
            tracing::error!("Error fetching {}-day average: {}", days, e);
            Json(AverageResponse::failed(Some(days), e.to_string()))
        }
    }
}

/// Hourly temperature history over the last `days` days
pub async fn history(
    Path(raw_days): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<HistoryResponse> {
    let Some(days) = parse_days(&raw_days) else {
        tracing::warn!("Rejected days path segment {:?}", raw_days);
        return Json(HistoryResponse::failed(invalid_days(&raw_days)));
    };

    match state.weather_service.history(days).await {
        Ok(history) => Json(history.into()),
        Err(e) => {
            tracing::error!("Error fetching {}-day history: {}", days, e);
            Json(HistoryResponse::failed(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::application::weather_service::tests::{field_record, timed_record, MockRepository};
    use crate::application::weather_service::WeatherService;
    use crate::presentation::app_state::AppState;
    use crate::presentation::build_router;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn create_test_app(repo: MockRepository) -> axum::Router {
        let weather_service = WeatherService::new(Arc::new(repo), "weather".to_string());
        build_router(Arc::new(AppState { weather_service }))
    }

    async fn get_raw(app: axum::Router, uri: &str) -> (StatusCode, String, String) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string())
            .unwrap_or_default();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let (status, content_type, body) = get_raw(app, uri).await;
        assert_eq!(content_type, "application/json");
        (status, serde_json::from_str(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app(MockRepository::returning(vec![]));

        let (status, json) = get_json(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "API online with CORS enabled");
    }

    #[tokio::test]
    async fn test_live_success() {
        let app = create_test_app(MockRepository::returning(vec![
            field_record("temp", 21.34),
            field_record("hum", 57.0),
        ]));

        let (status, json) = get_json(app, "/data/live").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"temp": 21.3, "hum": 57}));
    }

    #[tokio::test]
    async fn test_live_missing_fields_are_null() {
        let app = create_test_app(MockRepository::returning(vec![field_record("temp", 18.0)]));

        let (_, json) = get_json(app, "/data/live").await;
        assert_eq!(json, json!({"temp": 18.0, "hum": null}));
    }

    #[tokio::test]
    async fn test_live_store_unreachable() {
        let app = create_test_app(MockRepository::failing(
            "error sending request for url (http://influxdb:8086/api/v2/query)",
        ));

        let (status, json) = get_json(app, "/data/live").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!({"error": "Database connection failed", "temp": null, "hum": null})
        );
    }

    #[tokio::test]
    async fn test_average_success() {
        let app = create_test_app(MockRepository::returning(vec![field_record("temp", 19.96)]));

        let (status, json) = get_json(app, "/data/average/7").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"days": 7, "temp_avg": 20.0}));
    }

    #[tokio::test]
    async fn test_average_failure_echoes_days() {
        let app = create_test_app(MockRepository::failing("unauthorized access"));

        let (status, json) = get_json(app, "/data/average/30").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["days"], 30);
        assert_eq!(json["temp_avg"], Value::Null);
        assert_eq!(
            json["error"],
            "InfluxDB request failed: unauthorized access"
        );
    }

    #[tokio::test]
    async fn test_average_days_beyond_i64_is_echoed() {
        let repo = Arc::new(MockRepository::failing("invalid duration"));
        let weather_service = WeatherService::new(repo.clone(), "weather".to_string());
        let app = build_router(Arc::new(AppState { weather_service }));

        let (status, content_type, body) =
            get_raw(app, "/data/average/99999999999999999999").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "application/json");
        assert_eq!(
            body,
            r#"{"error":"InfluxDB request failed: invalid duration","days":99999999999999999999,"temp_avg":null}"#
        );
        assert!(repo.queries.lock().unwrap()[0].contains("range(start: -99999999999999999999d)"));
    }

    #[tokio::test]
    async fn test_average_non_integer_days_is_json_failure() {
        let repo = Arc::new(MockRepository::returning(vec![]));
        let weather_service = WeatherService::new(repo.clone(), "weather".to_string());
        let app = build_router(Arc::new(AppState { weather_service }));

        let (status, json) = get_json(app, "/data/average/abc").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!({"error": "Invalid days value: abc", "days": null, "temp_avg": null})
        );
        assert!(repo.queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_history_non_integer_days_is_json_failure() {
        let app = create_test_app(MockRepository::returning(vec![]));

        let (status, json) = get_json(app, "/data/history/1.5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!({
                "error": "Invalid days value: 1.5",
                "timestamps": [],
                "temperatures": []
            })
        );
    }

    #[tokio::test]
    async fn test_history_success() {
        let app = create_test_app(MockRepository::returning(vec![
            timed_record("2024-06-05T00:00:00Z", 10.04),
            timed_record("2024-06-05T01:00:00Z", 11.55),
            timed_record("2024-06-05T02:00:00Z", 12.0),
        ]));

        let (status, json) = get_json(app, "/data/history/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!({
                "timestamps": ["05/06 00h", "05/06 01h", "05/06 02h"],
                "temperatures": [10.0, 11.6, 12.0]
            })
        );
    }

    #[tokio::test]
    async fn test_history_failure_is_empty() {
        let app = create_test_app(MockRepository::failing("timeout"));

        let (status, json) = get_json(app, "/data/history/3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!({
                "error": "InfluxDB request failed: timeout",
                "timestamps": [],
                "temperatures": []
            })
        );
    }

    #[tokio::test]
    async fn test_cors_allows_credentials_for_any_origin() {
        let app = create_test_app(MockRepository::returning(vec![]));

        let request = Request::builder()
            .method(Method::GET)
            .uri("/")
            .header(header::ORIGIN, "http://dashboard.local")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://dashboard.local"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
    }
}
