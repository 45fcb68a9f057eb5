//! Headless dashboard: loads the inventory and prints the stock summary.
//!
//! Configuration comes from the environment:
//! `AGROVISTA_API_URL` (default `http://localhost:5000`) and
//! `AGROVISTA_TOKEN` (the session's bearer token).

use std::sync::Arc;

use anyhow::Context;

use agrovista_client::inventory::InventoryViewModel;
use agrovista_client::{AlwaysConfirm, ApiClient, ClientConfig, TracingNotifier};
use agrovista_inventory::{stock_level, stock_percentage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    agrovista_observability::init();

    let base_url =
        std::env::var("AGROVISTA_API_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
    let token = std::env::var("AGROVISTA_TOKEN")
        .context("AGROVISTA_TOKEN must be set to the session's bearer token")?;

    let config = ClientConfig::new(base_url).with_token(token);
    let api = ApiClient::new(config);

    let mut inventory =
        InventoryViewModel::new(api, Arc::new(TracingNotifier), Arc::new(AlwaysConfirm));
    inventory.load().await;

    let view = inventory.view();
    println!(
        "items: {}  low stock: {}  assigned: {}  unassigned: {}",
        view.summary.total, view.summary.low_stock, view.summary.assigned, view.summary.unassigned
    );

    for item in &view.items {
        println!(
            "  {:<30} {:>8.1} {:<10} {:>5.0}%  {}",
            item.name,
            item.quantity,
            item.unit,
            stock_percentage(item),
            stock_level(item).message()
        );
    }

    Ok(())
}
