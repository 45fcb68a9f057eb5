//! Equipment (machinery) domain module.

pub mod equipment;

pub use equipment::{Equipment, EquipmentDraft, EquipmentStatus};
