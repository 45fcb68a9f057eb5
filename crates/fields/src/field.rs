use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use agrovista_core::{Coordinates, DomainError, Entity, FieldId};

/// Lifecycle status of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldStatus {
    Activo,
    EnSiembra,
    EnCrecimiento,
    Inactivo,
    Other(String),
}

impl FieldStatus {
    pub fn label(&self) -> &str {
        match self {
            FieldStatus::Activo => "Activo",
            FieldStatus::EnSiembra => "En siembra",
            FieldStatus::EnCrecimiento => "En crecimiento",
            FieldStatus::Inactivo => "Inactivo",
            FieldStatus::Other(s) => s,
        }
    }
}

impl Default for FieldStatus {
    fn default() -> Self {
        FieldStatus::Activo
    }
}

impl From<String> for FieldStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Activo" => FieldStatus::Activo,
            "En siembra" => FieldStatus::EnSiembra,
            "En crecimiento" => FieldStatus::EnCrecimiento,
            "Inactivo" => FieldStatus::Inactivo,
            _ => FieldStatus::Other(value),
        }
    }
}

impl From<FieldStatus> for String {
    fn from(value: FieldStatus) -> Self {
        value.label().to_string()
    }
}

/// A field record as fetched from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    pub name: String,
    #[serde(default)]
    pub crop: Option<String>,
    /// Cultivated area in hectares.
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub status: FieldStatus,
    #[serde(default)]
    pub next_action: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Field {
    /// Coordinates, when both components are present.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }
}

impl Entity for Field {
    type Id = FieldId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Create/update payload for a field.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FieldDraft {
    pub name: String,
    pub crop: String,
    pub area: f64,
    pub location: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: FieldStatus,
    pub next_action: Option<String>,
}

impl FieldDraft {
    /// Name, crop and area are required by the backend.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::required("name"));
        }
        if self.crop.trim().is_empty() {
            return Err(DomainError::required("crop"));
        }
        if self.area <= 0.0 {
            return Err(DomainError::required("area"));
        }
        Ok(())
    }
}
