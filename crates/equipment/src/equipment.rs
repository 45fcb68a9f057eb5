use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use agrovista_core::{DomainError, Entity, EquipmentId, FieldId};

/// Operational status of a piece of equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EquipmentStatus {
    Activo,
    EnMantenimiento,
    Inactivo,
    EnReparacion,
    Other(String),
}

impl EquipmentStatus {
    pub fn label(&self) -> &str {
        match self {
            EquipmentStatus::Activo => "Activo",
            EquipmentStatus::EnMantenimiento => "En mantenimiento",
            EquipmentStatus::Inactivo => "Inactivo",
            EquipmentStatus::EnReparacion => "En reparación",
            EquipmentStatus::Other(s) => s,
        }
    }
}

impl Default for EquipmentStatus {
    fn default() -> Self {
        EquipmentStatus::Activo
    }
}

impl From<String> for EquipmentStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Activo" => EquipmentStatus::Activo,
            "En mantenimiento" => EquipmentStatus::EnMantenimiento,
            "Inactivo" => EquipmentStatus::Inactivo,
            "En reparación" => EquipmentStatus::EnReparacion,
            _ => EquipmentStatus::Other(value),
        }
    }
}

impl From<EquipmentStatus> for String {
    fn from(value: EquipmentStatus) -> Self {
        value.label().to_string()
    }
}

/// An equipment record as fetched from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: EquipmentId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: EquipmentStatus,
    #[serde(default)]
    pub last_maintenance: Option<DateTime<Utc>>,
    #[serde(default)]
    pub next_maintenance: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub field_id: Option<FieldId>,
}

impl Equipment {
    /// Case-insensitive search over name, type, brand and model.
    pub fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        let hit = |value: Option<&str>| {
            value.is_some_and(|v| v.to_lowercase().contains(&needle))
        };
        self.name.to_lowercase().contains(&needle)
            || hit(self.kind.as_deref())
            || hit(self.brand.as_deref())
            || hit(self.model.as_deref())
    }
}

impl Entity for Equipment {
    type Id = EquipmentId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Create/update payload for equipment.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EquipmentDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub serial_number: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub status: EquipmentStatus,
    pub last_maintenance: Option<DateTime<Utc>>,
    pub next_maintenance: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub field_id: Option<FieldId>,
}

impl EquipmentDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::required("name"));
        }
        Ok(())
    }
}
