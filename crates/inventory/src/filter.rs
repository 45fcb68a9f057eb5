//! Client-side filter state for the inventory view.

use core::str::FromStr;

use agrovista_core::{DomainError, FieldId};

use crate::item::InventoryItem;

/// Field-assignment selector for the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldSelector {
    /// No field constraint.
    #[default]
    Any,
    /// Only items with no field assignment.
    Unassigned,
    /// Only items assigned to this field.
    Field(FieldId),
}

impl FieldSelector {
    /// Parse the raw value of the field selector widget: empty string for
    /// "all", the literal `"null"` for "unassigned", otherwise a field id.
    pub fn from_raw(raw: &str) -> Result<Self, DomainError> {
        match raw.trim() {
            "" => Ok(FieldSelector::Any),
            "null" => Ok(FieldSelector::Unassigned),
            s => Ok(FieldSelector::Field(FieldId::from_str(s)?)),
        }
    }

    fn matches(&self, item: &InventoryItem) -> bool {
        match self {
            FieldSelector::Any => true,
            FieldSelector::Unassigned => item.field_id.is_none(),
            FieldSelector::Field(id) => item.field_id == Some(*id),
        }
    }
}

/// Transient filter state; lives only for the view's session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventoryFilter {
    /// Case-insensitive substring matched against name and category.
    pub search_term: String,
    /// Case-insensitive substring matched against the supplier.
    pub supplier: String,
    pub field: FieldSelector,
}

impl InventoryFilter {
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty()
            && self.supplier.is_empty()
            && self.field == FieldSelector::Any
    }

    /// An item passes when all three predicates hold.
    pub fn matches(&self, item: &InventoryItem) -> bool {
        let matches_search = self.search_term.is_empty() || {
            let needle = self.search_term.to_lowercase();
            item.name.to_lowercase().contains(&needle)
                || item.category.label().to_lowercase().contains(&needle)
        };

        let matches_supplier = self.supplier.is_empty()
            || item
                .supplier
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(&self.supplier.to_lowercase()));

        matches_search && matches_supplier && self.field.matches(item)
    }

    /// Merge a partial update into the current state.
    pub fn apply(&mut self, patch: InventoryFilterPatch) {
        if let Some(search_term) = patch.search_term {
            self.search_term = search_term;
        }
        if let Some(supplier) = patch.supplier {
            self.supplier = supplier;
        }
        if let Some(field) = patch.field {
            self.field = field;
        }
    }

    /// Reset to the empty defaults.
    pub fn clear(&mut self) {
        *self = InventoryFilter::default();
    }
}

/// Partial filter update: only the `Some` fields change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventoryFilterPatch {
    pub search_term: Option<String>,
    pub supplier: Option<String>,
    pub field: Option<FieldSelector>,
}

impl InventoryFilterPatch {
    pub fn search_term(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            ..Self::default()
        }
    }

    pub fn supplier(supplier: impl Into<String>) -> Self {
        Self {
            supplier: Some(supplier.into()),
            ..Self::default()
        }
    }

    pub fn field(field: FieldSelector) -> Self {
        Self {
            field: Some(field),
            ..Self::default()
        }
    }
}
