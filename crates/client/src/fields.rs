//! Fields screen view model.
//!
//! Also the data source for the field-assignment selectors used by the
//! other screens, which is why the list decoding is deliberately lenient:
//! the endpoint has served both `{ "fields": [...] }` and a bare array.

use std::sync::Arc;

use serde::Deserialize;

use agrovista_core::FieldId;
use agrovista_fields::{Field, FieldDraft};

use crate::api::ApiClient;
use crate::confirm::ConfirmPrompt;
use crate::notify::Notifier;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FieldsPayload {
    Wrapped {
        #[serde(default)]
        fields: Vec<Field>,
    },
    Bare(Vec<Field>),
}

impl FieldsPayload {
    fn into_fields(self) -> Vec<Field> {
        match self {
            FieldsPayload::Wrapped { fields } => fields,
            FieldsPayload::Bare(fields) => fields,
        }
    }
}

pub struct FieldsViewModel {
    api: ApiClient,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn ConfirmPrompt>,
    fields: Vec<Field>,
    editing: Option<FieldId>,
    loading: bool,
}

impl FieldsViewModel {
    pub fn new(
        api: ApiClient,
        notifier: Arc<dyn Notifier>,
        confirm: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        Self {
            api,
            notifier,
            confirm,
            fields: Vec::new(),
            editing: None,
            loading: false,
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn editing(&self) -> Option<FieldId> {
        self.editing
    }

    /// Fetch the field list; any failure degrades to an empty list with a
    /// notification.
    pub async fn load(&mut self) {
        self.loading = true;
        match self.api.get_json::<FieldsPayload>("/api/fields").await {
            Ok(payload) => {
                self.fields = payload.into_fields();
            }
            Err(err) => {
                tracing::error!(error = %err, "fields load failed");
                self.fields.clear();
                self.notifier.error("Error al cargar los campos");
            }
        }
        self.loading = false;
    }

    pub fn start_edit(&mut self, id: FieldId) {
        self.editing = Some(id);
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub async fn submit(&mut self, draft: &FieldDraft) -> bool {
        if let Err(err) = draft.validate() {
            self.notifier.error(&err.to_string());
            return false;
        }

        let result = match self.editing {
            Some(id) => {
                self.api
                    .put_json::<_, serde_json::Value>(&format!("/api/fields/{id}"), draft)
                    .await
            }
            None => {
                self.api
                    .post_json::<_, serde_json::Value>("/api/fields", draft)
                    .await
            }
        };

        match result {
            Ok(_) => {
                let updated = self.editing.take().is_some();
                self.notifier.success(if updated {
                    "Campo actualizado"
                } else {
                    "Campo creado"
                });
                self.load().await;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "field submit failed");
                self.notifier.error(err.user_message());
                false
            }
        }
    }

    pub async fn remove(&mut self, id: FieldId) -> bool {
        if !self.confirm.confirm("¿Estás seguro de eliminar este campo?") {
            return false;
        }

        match self.api.delete(&format!("/api/fields/{id}")).await {
            Ok(()) => {
                self.notifier.success("Campo eliminado");
                self.load().await;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "field delete failed");
                self.notifier.error("Error al eliminar el campo");
                false
            }
        }
    }
}
