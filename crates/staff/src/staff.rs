use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use agrovista_core::{DomainError, Entity, FieldId, StaffId};

/// Employment status of a staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StaffStatus {
    Activo,
    Vacaciones,
    Inactivo,
    Baja,
    Other(String),
}

impl StaffStatus {
    pub fn label(&self) -> &str {
        match self {
            StaffStatus::Activo => "Activo",
            StaffStatus::Vacaciones => "Vacaciones",
            StaffStatus::Inactivo => "Inactivo",
            StaffStatus::Baja => "Baja",
            StaffStatus::Other(s) => s,
        }
    }
}

impl Default for StaffStatus {
    fn default() -> Self {
        StaffStatus::Activo
    }
}

impl From<String> for StaffStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Activo" => StaffStatus::Activo,
            "Vacaciones" => StaffStatus::Vacaciones,
            "Inactivo" => StaffStatus::Inactivo,
            "Baja" => StaffStatus::Baja,
            _ => StaffStatus::Other(value),
        }
    }
}

impl From<StaffStatus> for String {
    fn from(value: StaffStatus) -> Self {
        value.label().to_string()
    }
}

/// A staff record as fetched from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub id: StaffId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub position: String,
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    #[serde(default)]
    pub salary: Option<f64>,
    #[serde(default)]
    pub status: StaffStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub field_id: Option<FieldId>,
}

impl Staff {
    /// Case-insensitive search over name, position and email.
    pub fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.position.to_lowercase().contains(&needle)
            || self.email.to_lowercase().contains(&needle)
    }
}

impl Entity for Staff {
    type Id = StaffId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Create/update payload for a staff member.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StaffDraft {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub position: String,
    pub hire_date: Option<NaiveDate>,
    pub salary: Option<f64>,
    pub status: StaffStatus,
    pub notes: Option<String>,
    pub field_id: Option<FieldId>,
}

impl StaffDraft {
    /// Name, email and position are required by the backend.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::required("name"));
        }
        if self.email.trim().is_empty() {
            return Err(DomainError::required("email"));
        }
        if self.position.trim().is_empty() {
            return Err(DomainError::required("position"));
        }
        Ok(())
    }
}
