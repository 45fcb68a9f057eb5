//! Destructive-action confirmation seam.

/// Yes/no decision point shown before a delete goes out.
pub trait ConfirmPrompt: Send + Sync {
    /// Returns `true` when the user confirms the action.
    fn confirm(&self, message: &str) -> bool;
}

/// Confirms everything; for non-interactive callers that gate deletion
/// elsewhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysConfirm;

impl ConfirmPrompt for AlwaysConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}
