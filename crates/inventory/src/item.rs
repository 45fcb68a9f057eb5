use serde::{Deserialize, Serialize};

use agrovista_core::{DomainError, Entity, FieldId, InventoryItemId};

/// Item category. The backend stores free text but the UI offers a fixed
/// set, so unknown values round-trip through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemCategory {
    General,
    Fertilizante,
    Semillas,
    Pesticida,
    Herramientas,
    Combustible,
    Other(String),
}

impl ItemCategory {
    pub fn label(&self) -> &str {
        match self {
            ItemCategory::General => "general",
            ItemCategory::Fertilizante => "fertilizante",
            ItemCategory::Semillas => "semillas",
            ItemCategory::Pesticida => "pesticida",
            ItemCategory::Herramientas => "herramientas",
            ItemCategory::Combustible => "combustible",
            ItemCategory::Other(s) => s,
        }
    }
}

impl Default for ItemCategory {
    fn default() -> Self {
        ItemCategory::General
    }
}

impl From<String> for ItemCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "general" => ItemCategory::General,
            "fertilizante" => ItemCategory::Fertilizante,
            "semillas" => ItemCategory::Semillas,
            "pesticida" => ItemCategory::Pesticida,
            "herramientas" => ItemCategory::Herramientas,
            "combustible" => ItemCategory::Combustible,
            _ => ItemCategory::Other(value),
        }
    }
}

impl From<ItemCategory> for String {
    fn from(value: ItemCategory) -> Self {
        value.label().to_string()
    }
}

/// An inventory item as fetched from the backend.
///
/// Immutable from the client's perspective; changes go through create or
/// update requests and a subsequent reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub name: String,
    /// Current stock level. The backend may send `null`; decoded as 0.
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: f64,
    /// Restock threshold. 0 (or absent) means "no threshold configured".
    #[serde(default, deserialize_with = "null_as_default")]
    pub min_quantity: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: ItemCategory,
    #[serde(default)]
    pub supplier: Option<String>,
    /// Field assignment; `None` means unassigned.
    #[serde(default)]
    pub field_id: Option<FieldId>,
    /// Display denormalization of the assigned field, when the backend
    /// populates it.
    #[serde(default)]
    pub field_name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl InventoryItem {
    /// Low stock: quantity at or below the restock threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_quantity
    }

    pub fn is_assigned(&self) -> bool {
        self.field_id.is_some()
    }
}

impl Entity for InventoryItem {
    type Id = InventoryItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Create/update payload for an inventory item.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ItemDraft {
    pub name: String,
    pub category: ItemCategory,
    pub quantity: f64,
    pub min_quantity: f64,
    pub unit: String,
    pub supplier: Option<String>,
    pub notes: Option<String>,
    pub field_id: Option<FieldId>,
}

impl ItemDraft {
    /// Pre-flight validation mirroring the backend's required fields, so
    /// obviously-bad submissions fail before a round trip.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::required("name"));
        }
        if self.unit.trim().is_empty() {
            return Err(DomainError::required("unit"));
        }
        if self.quantity < 0.0 || self.min_quantity < 0.0 {
            return Err(DomainError::validation("quantities cannot be negative"));
        }
        Ok(())
    }

    /// Seed a draft from an existing item (edit flow).
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.clone(),
            quantity: item.quantity,
            min_quantity: item.min_quantity,
            unit: item.unit.clone(),
            supplier: item.supplier.clone(),
            notes: item.notes.clone(),
            field_id: item.field_id,
        }
    }
}

/// `null` and absent both decode to the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_item_with_null_optionals() {
        let raw = r#"{
            "id": 3,
            "name": "Urea",
            "quantity": 10.0,
            "min_quantity": null,
            "unit": "kg",
            "category": "fertilizante",
            "supplier": null,
            "field_id": null,
            "field_name": null,
            "notes": null
        }"#;

        let item: InventoryItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.id, InventoryItemId::new(3));
        assert_eq!(item.min_quantity, 0.0);
        assert_eq!(item.category, ItemCategory::Fertilizante);
        assert!(item.supplier.is_none());
        assert!(!item.is_assigned());
    }

    #[test]
    fn unknown_category_round_trips_as_free_text() {
        let cat = ItemCategory::from("lubricantes".to_string());
        assert_eq!(cat, ItemCategory::Other("lubricantes".to_string()));
        assert_eq!(cat.label(), "lubricantes");
    }

    #[test]
    fn draft_requires_name_and_unit() {
        let draft = ItemDraft {
            name: "  ".to_string(),
            unit: "kg".to_string(),
            ..ItemDraft::default()
        };
        assert!(matches!(
            draft.validate(),
            Err(DomainError::Validation(msg)) if msg.contains("name")
        ));

        let draft = ItemDraft {
            name: "Urea".to_string(),
            unit: String::new(),
            ..ItemDraft::default()
        };
        assert!(matches!(draft.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn draft_rejects_negative_quantities() {
        let draft = ItemDraft {
            name: "Urea".to_string(),
            unit: "kg".to_string(),
            quantity: -1.0,
            ..ItemDraft::default()
        };
        assert!(draft.validate().is_err());
    }
}
