//! Staff (farm personnel) domain module.

pub mod staff;

pub use staff::{Staff, StaffDraft, StaffStatus};
