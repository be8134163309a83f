use std::sync::Arc;

use anyhow::Context;

use shelfview_web::app::AppState;
use shelfview_web::loader::{self, InventorySource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shelfview_observability::init();

    let configured = std::env::var("SHELFVIEW_INVENTORY").unwrap_or_else(|_| {
        tracing::warn!("SHELFVIEW_INVENTORY not set; using inventory.json");
        "inventory.json".to_string()
    });
    let addr = std::env::var("SHELFVIEW_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let state = Arc::new(AppState::new(InventorySource::parse(&configured)));

    // Initial load. Failure is logged inside load_into; the server still
    // starts with an empty view.
    let _ = loader::load_into(&state).await;

    let app = shelfview_web::app::build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
