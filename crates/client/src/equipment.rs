//! Equipment screen view model: collection + search term + CRUD.

use std::sync::Arc;

use agrovista_core::EquipmentId;
use agrovista_equipment::{Equipment, EquipmentDraft};

use crate::api::ApiClient;
use crate::confirm::ConfirmPrompt;
use crate::notify::Notifier;

pub struct EquipmentViewModel {
    api: ApiClient,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn ConfirmPrompt>,
    equipment: Vec<Equipment>,
    search_term: String,
    editing: Option<EquipmentId>,
    loading: bool,
}

impl EquipmentViewModel {
    pub fn new(
        api: ApiClient,
        notifier: Arc<dyn Notifier>,
        confirm: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        Self {
            api,
            notifier,
            confirm,
            equipment: Vec::new(),
            search_term: String::new(),
            editing: None,
            loading: false,
        }
    }

    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// The collection filtered by the current search term.
    pub fn filtered(&self) -> Vec<&Equipment> {
        self.equipment
            .iter()
            .filter(|e| e.matches_search(&self.search_term))
            .collect()
    }

    pub async fn load(&mut self) {
        self.loading = true;
        match self.api.get_json::<Vec<Equipment>>("/api/equipment").await {
            Ok(equipment) => {
                self.equipment = equipment;
            }
            Err(err) => {
                tracing::error!(error = %err, "equipment load failed");
                self.equipment.clear();
                self.notifier.error("Error al cargar los equipos");
            }
        }
        self.loading = false;
    }

    pub fn start_edit(&mut self, id: EquipmentId) {
        self.editing = Some(id);
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub async fn submit(&mut self, draft: &EquipmentDraft) -> bool {
        if let Err(err) = draft.validate() {
            self.notifier.error(&err.to_string());
            return false;
        }

        let result = match self.editing {
            Some(id) => {
                self.api
                    .put_json::<_, serde_json::Value>(&format!("/api/equipment/{id}"), draft)
                    .await
            }
            None => {
                self.api
                    .post_json::<_, serde_json::Value>("/api/equipment", draft)
                    .await
            }
        };

        match result {
            Ok(_) => {
                let updated = self.editing.take().is_some();
                self.notifier.success(if updated {
                    "Equipo actualizado"
                } else {
                    "Equipo agregado"
                });
                self.load().await;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "equipment submit failed");
                self.notifier.error(err.user_message());
                false
            }
        }
    }

    pub async fn remove(&mut self, id: EquipmentId) -> bool {
        if !self.confirm.confirm("¿Estás seguro de eliminar este equipo?") {
            return false;
        }

        match self.api.delete(&format!("/api/equipment/{id}")).await {
            Ok(()) => {
                self.notifier.success("Equipo eliminado");
                self.load().await;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "equipment delete failed");
                self.notifier.error("Error al eliminar el equipo");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::{FakeTransport, RecordingNotifier, ScriptedConfirm};

    const LIST: &str = r#"[
        {"id": 1, "name": "Tractor John Deere", "type": "Tractor", "brand": "John Deere"},
        {"id": 2, "name": "Sembradora", "type": "Implemento", "brand": "Agrometal"}
    ]"#;

    fn vm_with(transport: Arc<FakeTransport>) -> EquipmentViewModel {
        EquipmentViewModel::new(
            ApiClient::with_transport(transport),
            Arc::new(RecordingNotifier::default()),
            Arc::new(ScriptedConfirm::answering(true)),
        )
    }

    #[tokio::test]
    async fn search_narrows_the_list() {
        let transport = Arc::new(FakeTransport::new());
        transport.push_response(200, LIST);
        let mut vm = vm_with(transport);
        vm.load().await;

        assert_eq!(vm.filtered().len(), 2);

        vm.set_search_term("deere");
        let filtered = vm.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Tractor John Deere");

        vm.set_search_term("");
        assert_eq!(vm.filtered().len(), 2);
    }

    #[tokio::test]
    async fn load_failure_empties_and_keeps_no_stale_rows() {
        let transport = Arc::new(FakeTransport::new());
        transport.push_response(200, LIST);
        let mut vm = vm_with(transport.clone());
        vm.load().await;
        assert_eq!(vm.equipment().len(), 2);

        transport.push_network_error("timeout");
        vm.load().await;
        assert!(vm.equipment().is_empty());
    }
}
