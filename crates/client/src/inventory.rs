//! Inventory screen view model.
//!
//! Owns the fetched collection and the transient filter state, exposes the
//! derived view, and mediates create/update/delete against the backend.
//! Transport failures never cross this boundary: they become notifications,
//! and only `load` clears state on failure (so the UI never shows stale
//! data next to a failure notice).

use std::sync::Arc;

use serde::Deserialize;

use agrovista_core::InventoryItemId;
use agrovista_inventory::{
    derive_view, InventoryFilter, InventoryFilterPatch, InventoryItem, InventoryView, ItemDraft,
};

use crate::api::ApiClient;
use crate::confirm::ConfirmPrompt;
use crate::notify::Notifier;

#[derive(Debug, Default, Deserialize)]
struct InventoryListPayload {
    #[serde(default)]
    inventory: Vec<InventoryItem>,
}

pub struct InventoryViewModel {
    api: ApiClient,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn ConfirmPrompt>,
    items: Vec<InventoryItem>,
    filter: InventoryFilter,
    editing: Option<InventoryItemId>,
    loading: bool,
}

impl InventoryViewModel {
    pub fn new(
        api: ApiClient,
        notifier: Arc<dyn Notifier>,
        confirm: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        Self {
            api,
            notifier,
            confirm,
            items: Vec::new(),
            filter: InventoryFilter::default(),
            editing: None,
            loading: false,
        }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn filter(&self) -> &InventoryFilter {
        &self.filter
    }

    pub fn editing(&self) -> Option<InventoryItemId> {
        self.editing
    }

    /// Derived projection of (collection, filter); pure, recomputed per call.
    pub fn view(&self) -> InventoryView<'_> {
        derive_view(&self.items, &self.filter)
    }

    /// Merge a partial filter update. No I/O.
    pub fn apply_filter(&mut self, patch: InventoryFilterPatch) {
        self.filter.apply(patch);
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    /// Fetch the full collection. On any failure the collection is
    /// emptied and the user is notified; this never returns an error.
    pub async fn load(&mut self) {
        self.loading = true;
        match self
            .api
            .get_json::<InventoryListPayload>("/api/inventory")
            .await
        {
            Ok(payload) => {
                self.items = payload.inventory;
            }
            Err(err) => {
                tracing::error!(error = %err, "inventory load failed");
                self.items.clear();
                self.notifier.error("Error al cargar el inventario");
            }
        }
        self.loading = false;
    }

    /// Begin editing: returns a draft seeded from the item, or `None` when
    /// the id is not in the current collection.
    pub fn start_edit(&mut self, id: InventoryItemId) -> Option<ItemDraft> {
        let item = agrovista_core::entity::find_by_id(&self.items, id)?;
        let draft = ItemDraft::from_item(item);
        self.editing = Some(id);
        Some(draft)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Create or update, depending on whether an edit is in progress.
    /// Returns `true` when the submission was accepted; on failure the
    /// server's message is surfaced verbatim and state is left untouched.
    pub async fn submit(&mut self, draft: &ItemDraft) -> bool {
        if let Err(err) = draft.validate() {
            self.notifier.error(&err.to_string());
            return false;
        }

        let result = match self.editing {
            Some(id) => {
                self.api
                    .put_json::<_, serde_json::Value>(&format!("/api/inventory/{id}"), draft)
                    .await
            }
            None => {
                self.api
                    .post_json::<_, serde_json::Value>("/api/inventory", draft)
                    .await
            }
        };

        match result {
            Ok(_) => {
                let updated = self.editing.take().is_some();
                self.notifier.success(if updated {
                    "Artículo actualizado"
                } else {
                    "Artículo agregado"
                });
                self.load().await;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "inventory submit failed");
                self.notifier.error(err.user_message());
                false
            }
        }
    }

    /// Delete an item, gated on explicit confirmation. Returns `true` when
    /// the item was deleted.
    pub async fn remove(&mut self, id: InventoryItemId) -> bool {
        if !self.confirm.confirm("¿Estás seguro de eliminar este item?") {
            return false;
        }

        match self.api.delete(&format!("/api/inventory/{id}")).await {
            Ok(()) => {
                self.notifier.success("Item eliminado");
                self.load().await;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "inventory delete failed");
                self.notifier.error("Error al eliminar");
                false
            }
        }
    }
}
