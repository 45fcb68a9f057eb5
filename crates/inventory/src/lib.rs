//! Inventory domain module.
//!
//! This crate contains the inventory read model and its derived
//! projections, implemented purely as deterministic domain logic (no IO,
//! no HTTP, no storage). The filtered view is always a pure function of
//! (collection, filter): filtering never mutates the collection, and an
//! empty filter reproduces it exactly.

pub mod filter;
pub mod item;
pub mod stock;
pub mod view;

pub use filter::{FieldSelector, InventoryFilter, InventoryFilterPatch};
pub use item::{InventoryItem, ItemCategory, ItemDraft};
pub use stock::{stock_level, stock_percentage, stock_severity, StockLevel, StockSeverity};
pub use view::{derive_view, InventorySummary, InventoryView};
