//! Field (cultivated plot) domain module.
//!
//! Pure domain logic for the fields screen; the records feed both the
//! field-management list and the assignment selectors of the other
//! entities.

pub mod field;

pub use field::{Field, FieldDraft, FieldStatus};
