//! Geocoding payloads and the place-resolution fallback chain.
//!
//! Resolution order: the geocoding provider's best match, then a built-in
//! table of known Colombian cities, and finally Bogotá as the last-resort
//! coordinate. The chain always produces coordinates.

use serde::{Deserialize, Serialize};

use agrovista_core::Coordinates;

/// Response body of the Open-Meteo geocoding search endpoint.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct GeocodeResults {
    #[serde(default)]
    pub results: Vec<GeoMatch>,
}

/// One geocoder hit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeoMatch {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// A suggestion for the location picker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceSuggestion {
    /// Full display line, e.g. "Tunja, Colombia".
    pub display_name: String,
    pub city: String,
    pub country: String,
    pub coordinates: Coordinates,
}

impl From<GeoMatch> for PlaceSuggestion {
    fn from(m: GeoMatch) -> Self {
        let country = m.country.unwrap_or_default();
        let display_name = if country.is_empty() {
            m.name.clone()
        } else {
            format!("{}, {}", m.name, country)
        };
        Self {
            display_name,
            city: m.name,
            country,
            coordinates: Coordinates::new(m.latitude, m.longitude),
        }
    }
}

/// Where the resolved coordinates came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceSource {
    Geocoder,
    KnownCity,
    DefaultLocation,
}

/// Outcome of the fallback chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlace {
    pub name: String,
    pub country: String,
    pub coordinates: Coordinates,
    pub source: PlaceSource,
}

/// Known Colombian cities used when the geocoder comes up empty.
const KNOWN_CITIES: &[(&str, &str, f64, f64)] = &[
    ("boyaca", "Boyacá", 5.5353, -73.3678),
    ("tunja", "Tunja", 5.5353, -73.3678),
    ("bogota", "Bogotá", 4.7110, -74.0721),
    ("medellin", "Medellín", 6.2442, -75.5812),
    ("cali", "Cali", 3.4516, -76.5319),
    ("barranquilla", "Barranquilla", 10.9639, -74.7964),
    ("cartagena", "Cartagena", 10.3910, -75.4794),
    ("bucaramanga", "Bucaramanga", 7.1253, -73.1198),
    ("pereira", "Pereira", 4.8133, -75.6961),
    ("cucuta", "Cúcuta", 7.8939, -72.5078),
    ("ibague", "Ibagué", 4.4389, -75.2322),
    ("villavicencio", "Villavicencio", 4.1505, -73.6367),
    ("valledupar", "Valledupar", 10.4634, -73.2532),
    ("monteria", "Montería", 8.7479, -75.8815),
    ("neiva", "Neiva", 2.9273, -75.2819),
    ("pasto", "Pasto", 1.2136, -77.2811),
    ("riohacha", "Riohacha", 11.5444, -72.9070),
    ("armenia", "Armenia", 4.5339, -75.6811),
    ("popayan", "Popayán", 2.4542, -76.6147),
    ("sincelejo", "Sincelejo", 9.3047, -75.3973),
];

const DEFAULT_COORDINATES: Coordinates = Coordinates::new(4.7110, -74.0721); // Bogotá

/// Resolve a city query to definite coordinates.
///
/// `best_match` is the geocoder's first hit, if any; `query` is the raw
/// user input, used for the table lookup and as the display name of the
/// last-resort fallback.
pub fn resolve_place(best_match: Option<GeoMatch>, query: &str) -> ResolvedPlace {
    if let Some(m) = best_match {
        return ResolvedPlace {
            country: m.country.clone().unwrap_or_default(),
            coordinates: Coordinates::new(m.latitude, m.longitude),
            name: m.name,
            source: PlaceSource::Geocoder,
        };
    }

    let normalized = query.trim().to_lowercase();
    if let Some((_, name, lat, lon)) = KNOWN_CITIES.iter().find(|(key, ..)| *key == normalized) {
        return ResolvedPlace {
            name: (*name).to_string(),
            country: "Colombia".to_string(),
            coordinates: Coordinates::new(*lat, *lon),
            source: PlaceSource::KnownCity,
        };
    }

    ResolvedPlace {
        name: if query.trim().is_empty() {
            "Ubicación".to_string()
        } else {
            query.trim().to_string()
        },
        country: "Colombia".to_string(),
        coordinates: DEFAULT_COORDINATES,
        source: PlaceSource::DefaultLocation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocoder_hit_wins() {
        let hit = GeoMatch {
            name: "Tunja".to_string(),
            country: Some("Colombia".to_string()),
            latitude: 5.54,
            longitude: -73.36,
        };
        let place = resolve_place(Some(hit), "tunja");
        assert_eq!(place.source, PlaceSource::Geocoder);
        assert_eq!(place.name, "Tunja");
    }

    #[test]
    fn known_city_table_catches_geocoder_misses() {
        let place = resolve_place(None, "  Medellin ");
        assert_eq!(place.source, PlaceSource::KnownCity);
        assert_eq!(place.name, "Medellín");
        assert_eq!(place.coordinates, Coordinates::new(6.2442, -75.5812));
    }

    #[test]
    fn unknown_city_falls_back_to_bogota() {
        let place = resolve_place(None, "Macondo");
        assert_eq!(place.source, PlaceSource::DefaultLocation);
        assert_eq!(place.name, "Macondo");
        assert_eq!(place.coordinates, DEFAULT_COORDINATES);
    }

    #[test]
    fn empty_query_gets_a_generic_name() {
        let place = resolve_place(None, "");
        assert_eq!(place.name, "Ubicación");
        assert_eq!(place.source, PlaceSource::DefaultLocation);
    }

    #[test]
    fn decodes_geocoder_payload_and_builds_suggestions() {
        let raw = r#"{
            "results": [
                {"name": "Tunja", "country": "Colombia", "latitude": 5.5353, "longitude": -73.3678}
            ]
        }"#;
        let payload: GeocodeResults = serde_json::from_str(raw).unwrap();
        let suggestion = PlaceSuggestion::from(payload.results[0].clone());
        assert_eq!(suggestion.display_name, "Tunja, Colombia");

        let empty: GeocodeResults = serde_json::from_str("{}").unwrap();
        assert!(empty.results.is_empty());
    }
}
