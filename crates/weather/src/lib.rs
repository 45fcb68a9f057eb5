//! Weather and geocoding domain module.
//!
//! Wire shapes for the weather endpoints and the geocoding provider, the
//! place-resolution fallback chain, and WMO weather-code descriptions.
//! Pure data and functions; the HTTP calls live in `agrovista-client`.

pub mod geocode;
pub mod report;

pub use geocode::{
    resolve_place, GeoMatch, GeocodeResults, PlaceSource, PlaceSuggestion, ResolvedPlace,
};
pub use report::{describe_weather_code, CurrentConditions, DailySummary, WeatherReport};
