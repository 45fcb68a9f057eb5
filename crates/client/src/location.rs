//! Location search for the field picker.
//!
//! Suggestion flow: the caller waits [`LocationSearch::debounce`] after the
//! last keystroke, then calls [`LocationSearch::search`]. Queries shorter
//! than two characters clear the suggestions without touching the network.
//! [`LocationSearch::resolve`] runs the full fallback chain and always
//! yields coordinates, even when the geocoder is down.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use agrovista_weather::{resolve_place, GeocodeResults, PlaceSuggestion, ResolvedPlace};

use crate::error::{ApiError, ApiResult};

/// Minimum query length before a request goes out.
pub const MIN_QUERY_LEN: usize = 2;

const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Geocoding provider seam.
#[async_trait]
pub trait GeocodeProvider: Send + Sync {
    async fn search(&self, query: &str, limit: u8) -> ApiResult<GeocodeResults>;
}

/// Open-Meteo geocoding search.
pub struct OpenMeteoGeocoder {
    http: reqwest::Client,
    endpoint: String,
}

impl OpenMeteoGeocoder {
    pub fn new() -> Self {
        Self::with_endpoint("https://geocoding-api.open-meteo.com/v1/search")
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for OpenMeteoGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GeocodeProvider for OpenMeteoGeocoder {
    async fn search(&self, query: &str, limit: u8) -> ApiResult<GeocodeResults> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("name", query),
                ("count", &limit.to_string()),
                ("language", "es"),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status().as_u16(),
                message: "Error al buscar ubicaciones".to_string(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// View model for the location picker's search box.
pub struct LocationSearch {
    geocoder: Arc<dyn GeocodeProvider>,
    debounce: Duration,
    query: String,
    suggestions: Vec<PlaceSuggestion>,
}

impl LocationSearch {
    pub fn new(geocoder: Arc<dyn GeocodeProvider>) -> Self {
        Self {
            geocoder,
            debounce: DEFAULT_DEBOUNCE,
            query: String::new(),
            suggestions: Vec::new(),
        }
    }

    /// Interval the caller should wait after the last keystroke before
    /// calling [`search`](Self::search).
    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn suggestions(&self) -> &[PlaceSuggestion] {
        &self.suggestions
    }

    /// Update the query. Returns `true` when a search is warranted; below
    /// the length threshold the suggestion list is cleared instead.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        self.query = query.into();
        if self.query.trim().len() < MIN_QUERY_LEN {
            self.suggestions.clear();
            return false;
        }
        true
    }

    /// Run the suggestion search for the current query.
    pub async fn search(&mut self) -> ApiResult<&[PlaceSuggestion]> {
        if self.query.trim().len() < MIN_QUERY_LEN {
            self.suggestions.clear();
            return Ok(&self.suggestions);
        }

        let results = self.geocoder.search(self.query.trim(), 5).await?;
        self.suggestions = results
            .results
            .into_iter()
            .map(PlaceSuggestion::from)
            .collect();
        Ok(&self.suggestions)
    }

    /// Resolve a city query to definite coordinates: geocoder first, then
    /// the known-city table, then the default location. Geocoder failures
    /// count as misses, so this never fails.
    pub async fn resolve(&self, query: &str) -> ResolvedPlace {
        let best_match = match self.geocoder.search(query.trim(), 1).await {
            Ok(results) => results.results.into_iter().next(),
            Err(err) => {
                tracing::warn!(error = %err, "geocoder unavailable, using fallbacks");
                None
            }
        };
        resolve_place(best_match, query)
    }
}
