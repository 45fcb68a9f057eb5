//! Derived, read-only projection of the inventory collection.

use crate::filter::InventoryFilter;
use crate::item::InventoryItem;

/// Summary counts over the *filtered* list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InventorySummary {
    pub total: usize,
    /// Items with `quantity <= min_quantity`.
    pub low_stock: usize,
    /// Items assigned to a field.
    pub assigned: usize,
    /// Items with no field assignment.
    pub unassigned: usize,
}

/// Recomputed-on-demand projection of (collection, filter).
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryView<'a> {
    pub items: Vec<&'a InventoryItem>,
    pub summary: InventorySummary,
    /// Distinct non-empty suppliers across the *unfiltered* collection,
    /// in first-seen order; feeds the supplier filter widget.
    pub supplier_options: Vec<&'a str>,
}

/// Derive the filtered view. Never mutates the collection.
pub fn derive_view<'a>(
    collection: &'a [InventoryItem],
    filter: &InventoryFilter,
) -> InventoryView<'a> {
    let items: Vec<&InventoryItem> = collection
        .iter()
        .filter(|item| filter.matches(item))
        .collect();

    let summary = InventorySummary {
        total: items.len(),
        low_stock: items.iter().filter(|i| i.is_low_stock()).count(),
        assigned: items.iter().filter(|i| i.is_assigned()).count(),
        unassigned: items.iter().filter(|i| !i.is_assigned()).count(),
    };

    let mut supplier_options: Vec<&str> = Vec::new();
    for supplier in collection.iter().filter_map(|i| i.supplier.as_deref()) {
        if !supplier.is_empty() && !supplier_options.contains(&supplier) {
            supplier_options.push(supplier);
        }
    }

    InventoryView {
        items,
        summary,
        supplier_options,
    }
}
