//! Staff screen view model: collection + search/position filters + CRUD.

use std::sync::Arc;

use agrovista_core::StaffId;
use agrovista_staff::{Staff, StaffDraft};

use crate::api::ApiClient;
use crate::confirm::ConfirmPrompt;
use crate::notify::Notifier;

pub struct StaffViewModel {
    api: ApiClient,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn ConfirmPrompt>,
    staff: Vec<Staff>,
    search_term: String,
    /// Exact position filter; `None` means all positions.
    position: Option<String>,
    editing: Option<StaffId>,
    loading: bool,
}

impl StaffViewModel {
    pub fn new(
        api: ApiClient,
        notifier: Arc<dyn Notifier>,
        confirm: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        Self {
            api,
            notifier,
            confirm,
            staff: Vec::new(),
            search_term: String::new(),
            position: None,
            editing: None,
            loading: false,
        }
    }

    pub fn staff(&self) -> &[Staff] {
        &self.staff
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_position_filter(&mut self, position: Option<String>) {
        self.position = position;
    }

    /// Collection narrowed by the search term and the position filter.
    pub fn filtered(&self) -> Vec<&Staff> {
        self.staff
            .iter()
            .filter(|s| s.matches_search(&self.search_term))
            .filter(|s| {
                self.position
                    .as_deref()
                    .is_none_or(|p| s.position == p)
            })
            .collect()
    }

    pub async fn load(&mut self) {
        self.loading = true;
        match self.api.get_json::<Vec<Staff>>("/api/staff").await {
            Ok(staff) => {
                self.staff = staff;
            }
            Err(err) => {
                tracing::error!(error = %err, "staff load failed");
                self.staff.clear();
                self.notifier.error("Error al cargar el personal");
            }
        }
        self.loading = false;
    }

    pub fn start_edit(&mut self, id: StaffId) {
        self.editing = Some(id);
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub async fn submit(&mut self, draft: &StaffDraft) -> bool {
        if let Err(err) = draft.validate() {
            self.notifier.error(&err.to_string());
            return false;
        }

        let result = match self.editing {
            Some(id) => {
                self.api
                    .put_json::<_, serde_json::Value>(&format!("/api/staff/{id}"), draft)
                    .await
            }
            None => {
                self.api
                    .post_json::<_, serde_json::Value>("/api/staff", draft)
                    .await
            }
        };

        match result {
            Ok(_) => {
                let updated = self.editing.take().is_some();
                self.notifier.success(if updated {
                    "Personal actualizado"
                } else {
                    "Personal agregado"
                });
                self.load().await;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "staff submit failed");
                self.notifier.error(err.user_message());
                false
            }
        }
    }

    pub async fn remove(&mut self, id: StaffId) -> bool {
        if !self.confirm.confirm("¿Estás seguro de eliminar este personal?") {
            return false;
        }

        match self.api.delete(&format!("/api/staff/{id}")).await {
            Ok(()) => {
                self.notifier.success("Personal eliminado");
                self.load().await;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "staff delete failed");
                self.notifier.error("Error al eliminar el personal");
                false
            }
        }
    }
}
