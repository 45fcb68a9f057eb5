//! Weather lookups against the backend's weather endpoints.

use serde_json::json;

use agrovista_core::Coordinates;
use agrovista_weather::WeatherReport;

use crate::api::ApiClient;
use crate::error::ApiResult;

#[derive(Clone)]
pub struct WeatherClient {
    api: ApiClient,
}

impl WeatherClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Current conditions for a city name. The backend resolves the name
    /// through its geocoding/fallback chain, so any non-empty string gets
    /// an answer.
    pub async fn by_city(&self, city: &str) -> ApiResult<WeatherReport> {
        self.api
            .get_json(&format!("/api/weather/{}", city.trim()))
            .await
    }

    /// Current conditions for explicit coordinates.
    pub async fn by_coordinates(&self, coordinates: Coordinates) -> ApiResult<WeatherReport> {
        self.api
            .post_json(
                "/api/weather/coordinates",
                &json!({
                    "latitude": coordinates.latitude,
                    "longitude": coordinates.longitude,
                }),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;
    use crate::error::ApiError;
    use crate::support::FakeTransport;
    use std::sync::Arc;

    const REPORT: &str = r#"{
        "city": "Tunja",
        "country": "Colombia",
        "latitude": 5.5353,
        "longitude": -73.3678,
        "current": {"temperature": 14.2, "is_day": 1, "weather_code": 3},
        "daily": {"max_temp": 18.0, "min_temp": 8.5, "precipitation": 0.0}
    }"#;

    #[tokio::test]
    async fn city_lookup_hits_the_city_endpoint() {
        let transport = Arc::new(FakeTransport::new());
        transport.push_response(200, REPORT);
        let client = WeatherClient::new(ApiClient::with_transport(transport.clone()));

        let report = client.by_city(" Tunja ").await.unwrap();

        assert_eq!(transport.requests()[0].path, "/api/weather/Tunja");
        assert_eq!(report.city.as_deref(), Some("Tunja"));
        assert_eq!(report.current.description(), Some("Nublado"));
    }

    #[tokio::test]
    async fn coordinate_lookup_posts_both_components() {
        let transport = Arc::new(FakeTransport::new());
        transport.push_response(
            200,
            r#"{"latitude": 4.711, "longitude": -74.0721, "current": {}, "daily": {}}"#,
        );
        let client = WeatherClient::new(ApiClient::with_transport(transport.clone()));

        let report = client
            .by_coordinates(Coordinates::new(4.711, -74.0721))
            .await
            .unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/api/weather/coordinates");
        assert_eq!(request.body.as_ref().unwrap()["latitude"], 4.711);
        assert!(report.city.is_none());
    }

    #[tokio::test]
    async fn provider_outage_is_a_status_error() {
        let transport = Arc::new(FakeTransport::new());
        transport.push_response(400, r#"{"msg": "Error al obtener datos del clima"}"#);
        let client = WeatherClient::new(ApiClient::with_transport(transport));

        let err = client.by_city("Tunja").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                message: "Error al obtener datos del clima".to_string()
            }
        );
    }
}
