//! `agrovista-core` — shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no HTTP, no runtime
//! concerns): strongly-typed identifiers, the domain-level error model and
//! small shared value objects.

pub mod entity;
pub mod error;
pub mod geo;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use geo::Coordinates;
pub use id::{EquipmentId, FieldId, InventoryItemId, StaffId, UserId};
