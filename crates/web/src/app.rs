//! Router, handlers, and page assembly.

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::{Extension, Query},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use shelfview_inventory::{SortKey, find_by_id, fuzzy_search_name, search_by_category, search_by_name};
use shelfview_view::{HtmlBuffer, InventoryPanel};

use crate::loader::{self, InventorySource};

/// Best-hit cap for fuzzy name search.
const FUZZY_LIMIT: usize = 5;

/// Process-wide application state.
///
/// The panel is the only mutable piece; every handler takes the lock for
/// the duration of its (synchronous) mutation, so sort and render never
/// observe a half-applied load.
pub struct AppState {
    pub panel: RwLock<InventoryPanel<HtmlBuffer>>,
    pub source: InventorySource,
    pub last_loaded: RwLock<Option<DateTime<Utc>>>,
}

impl AppState {
    pub fn new(source: InventorySource) -> Self {
        Self {
            panel: RwLock::new(InventoryPanel::new(HtmlBuffer::new())),
            source,
            last_loaded: RwLock::new(None),
        }
    }
}

pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/inventory", get(inventory))
        .route("/search", get(search))
        .route("/reload", post(reload))
        .route("/status", get(status))
        .layer(Extension(state))
}

#[derive(Debug, Deserialize)]
pub struct SortParams {
    sort: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
    by: Option<String>,
}

pub async fn index(Extension(state): Extension<Arc<AppState>>) -> axum::response::Response {
    let panel = state.panel.read().unwrap();
    page(panel.target().rows(), panel.order(), panel.records().len()).into_response()
}

pub async fn inventory(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<SortParams>,
) -> axum::response::Response {
    let mut panel = state.panel.write().unwrap();

    if let Some(raw) = params.sort {
        let key: SortKey = match raw.parse() {
            Ok(k) => k,
            Err(e) => {
                return json_error(StatusCode::BAD_REQUEST, "unknown_sort_key", format!("{e}"));
            }
        };
        panel.sort_by(key);
    }

    page(panel.target().rows(), panel.order(), panel.records().len()).into_response()
}

pub async fn search(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> axum::response::Response {
    let query = match params.q.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => q.to_string(),
        _ => return json_error(StatusCode::BAD_REQUEST, "missing_query", "q must be non-empty"),
    };

    let mut panel = state.panel.write().unwrap();

    let results = match params.by.as_deref().unwrap_or("name") {
        "name" => search_by_name(panel.records(), &query),
        "category" => search_by_category(panel.records(), &query),
        "fuzzy" => fuzzy_search_name(panel.records(), &query, FUZZY_LIMIT),
        "id" => find_by_id(panel.records(), &query).cloned().into_iter().collect(),
        _ => {
            return json_error(
                StatusCode::BAD_REQUEST,
                "unknown_search_field",
                "by must be one of: name, category, id, fuzzy",
            );
        }
    };

    let count = results.len();
    // Search renders through the shared primitive but never touches the
    // stored sequence; the next sort shows the store's own records.
    panel.render_search_results(results);

    // Search results always display id-ordered, whatever the store order.
    page(panel.target().rows(), SortKey::Id, count).into_response()
}

pub async fn reload(Extension(state): Extension<Arc<AppState>>) -> axum::response::Response {
    match loader::load_into(&state).await {
        Ok(count) => (StatusCode::OK, Json(json!({ "records": count }))).into_response(),
        Err(e) => json_error(StatusCode::BAD_GATEWAY, "load_failed", e.to_string()),
    }
}

pub async fn status(Extension(state): Extension<Arc<AppState>>) -> axum::response::Response {
    let panel = state.panel.read().unwrap();
    let last_loaded = *state.last_loaded.read().unwrap();

    Json(json!({
        "records": panel.records().len(),
        "order": panel.order().as_str(),
        "last_loaded_at": last_loaded,
    }))
    .into_response()
}

fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Full page: header, sort links, search form, and the current rows.
fn page(rows: &str, order: SortKey, count: usize) -> Html<String> {
    Html(format!(
        r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>shelfview</title></head>
<body>
<h1>Inventory</h1>
<p>{count} row(s), ordered by {order}.</p>
<p>
  Sort:
  <a href="/inventory?sort=id">id</a>
  <a href="/inventory?sort=name">name</a>
  <a href="/inventory?sort=category">category</a>
  <a href="/inventory?sort=qty">qty</a>
</p>
<form action="/search" method="get">
  <input type="text" name="q" placeholder="search by name">
  <select name="by">
    <option value="name">name</option>
    <option value="category">category</option>
    <option value="id">id</option>
    <option value="fuzzy">fuzzy</option>
  </select>
  <button type="submit">Search</button>
</form>
<table>
  <thead>
    <tr><th>ID</th><th>Name</th><th>Category</th><th>Qty</th><th>Location</th></tr>
  </thead>
  <tbody id="table-body">
{rows}  </tbody>
</table>
</body>
</html>
"#
    ))
}
