//! Geographic value objects shared by the fields and weather domains.

use serde::{Deserialize, Serialize};

/// A WGS84 latitude/longitude pair.
///
/// Compared by value; two `Coordinates` with the same components are the
/// same place as far as the domain is concerned.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl core::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
