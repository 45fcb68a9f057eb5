//! `agrovista-client` — HTTP client and view models for the dashboard.
//!
//! Everything that touches a socket lives here. Each screen gets a view
//! model that owns its fetched collection and transient filter state and
//! mediates create/update/delete against the backend. View models never
//! panic and never propagate transport errors past their boundary: failures
//! become user-visible notifications through the [`notify::Notifier`] seam.

pub mod api;
pub mod config;
pub mod confirm;
pub mod equipment;
pub mod error;
pub mod fields;
pub mod inventory;
pub mod location;
pub mod notify;
pub mod staff;
pub mod weather;

pub use api::{ApiClient, ApiRequest, ApiResponse, ApiTransport, HttpTransport, Method};
pub use config::ClientConfig;
pub use confirm::{AlwaysConfirm, ConfirmPrompt};
pub use error::{ApiError, ApiResult};
pub use notify::{Notifier, TracingNotifier};

#[cfg(test)]
pub(crate) mod support;
