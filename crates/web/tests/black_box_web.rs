use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use shelfview_inventory::InventoryRecord;
use shelfview_web::app::{AppState, build_app};
use shelfview_web::loader::{self, InventorySource};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
    // Keeps the fixture directory alive for the server's lifetime.
    _dir: Option<TempDir>,
}

impl TestServer {
    /// Build the real router around `source`, run the initial load (which
    /// may fail, as in production), and serve on an ephemeral port.
    async fn spawn(source: InventorySource, dir: Option<TempDir>) -> Self {
        let state = Arc::new(AppState::new(source));
        let _ = loader::load_into(&state).await;

        let app = build_app(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle, _dir: dir }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn record(id: &str, name: &str, category: &str, qty: i64) -> InventoryRecord {
    InventoryRecord {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        qty,
        location: "A-01".to_string(),
    }
}

fn fixture() -> Vec<InventoryRecord> {
    vec![
        record("B2", "Hex Bolt", "fasteners", 5),
        record("A1", "Wing Nut", "fasteners", 10),
    ]
}

/// Write `records` as the inventory document and return (dir, path).
fn write_fixture(records: &[InventoryRecord]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let path = dir.path().join("inventory.json");
    std::fs::write(&path, serde_json::to_vec(records).unwrap()).unwrap();
    (dir, path)
}

async fn spawn_with_fixture(records: &[InventoryRecord]) -> TestServer {
    let (dir, path) = write_fixture(records);
    TestServer::spawn(InventorySource::Path(path), Some(dir)).await
}

/// First-cell contents of every rendered row (cells render id-first).
fn row_ids(body: &str) -> Vec<String> {
    body.lines()
        .filter(|line| line.trim_start().starts_with("<tr><td>"))
        .filter_map(|line| {
            let start = line.find("<td>")? + 4;
            let end = line[start..].find("</td>")? + start;
            Some(line[start..end].to_string())
        })
        .collect()
}

#[tokio::test]
async fn initial_load_renders_rows_in_ascending_id_order() {
    let server = spawn_with_fixture(&fixture()).await;
    let body = reqwest::get(format!("{}/", server.base_url))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(row_ids(&body), vec!["A1", "B2"]);
}

#[tokio::test]
async fn sort_by_qty_reorders_numerically() {
    let server = spawn_with_fixture(&fixture()).await;
    let body = reqwest::get(format!("{}/inventory?sort=qty", server.base_url))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    // B2 has qty 5, A1 has qty 10.
    assert_eq!(row_ids(&body), vec!["B2", "A1"]);
}

#[tokio::test]
async fn unknown_sort_key_is_a_400_json_error() {
    let server = spawn_with_fixture(&fixture()).await;
    let res = reqwest::get(format!("{}/inventory?sort=location", server.base_url))
        .await
        .unwrap();

    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "unknown_sort_key");
}

#[tokio::test]
async fn search_renders_results_without_mutating_the_store() {
    let server = spawn_with_fixture(&fixture()).await;
    let client = reqwest::Client::new();

    let body = client
        .get(format!("{}/search?q=nut", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(row_ids(&body), vec!["A1"]);

    // The store's own data is intact; a following sort shows it all.
    let body = client
        .get(format!("{}/inventory?sort=id", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(row_ids(&body), vec!["A1", "B2"]);
}

#[tokio::test]
async fn fuzzy_search_tolerates_a_typo() {
    let server = spawn_with_fixture(&fixture()).await;
    let body = reqwest::get(format!("{}/search?q=hx%20blt&by=fuzzy", server.base_url))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(row_ids(&body), vec!["B2"]);
}

#[tokio::test]
async fn blank_query_is_a_400_json_error() {
    let server = spawn_with_fixture(&fixture()).await;
    let res = reqwest::get(format!("{}/search?q=%20", server.base_url))
        .await
        .unwrap();

    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "missing_query");
}

#[tokio::test]
async fn fetch_failure_keeps_an_empty_view_and_fails_reload() {
    let server =
        TestServer::spawn(InventorySource::Path(PathBuf::from("/nonexistent/inventory.json")), None)
            .await;
    let client = reqwest::Client::new();

    // The server came up despite the failed initial load, with zero rows.
    let body = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(row_ids(&body).is_empty());

    let res = client
        .post(format!("{}/reload", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::BAD_GATEWAY);
    let error: serde_json::Value = res.json().await.unwrap();
    assert_eq!(error["error"], "load_failed");

    let status: serde_json::Value = client
        .get(format!("{}/status", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(status["records"], 0);
    assert_eq!(status["last_loaded_at"], serde_json::Value::Null);
}

#[tokio::test]
async fn malformed_document_fails_reload_and_retains_prior_view() {
    let (dir, path) = write_fixture(&fixture());
    let server = TestServer::spawn(InventorySource::Path(path.clone()), Some(dir)).await;
    let client = reqwest::Client::new();

    std::fs::write(&path, b"{ not json ]").unwrap();

    let res = client
        .post(format!("{}/reload", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::BAD_GATEWAY);

    // Prior view is still served.
    let body = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(row_ids(&body), vec!["A1", "B2"]);
}

#[tokio::test]
async fn reload_replaces_the_view_wholesale() {
    let (dir, path) = write_fixture(&fixture());
    let server = TestServer::spawn(InventorySource::Path(path.clone()), Some(dir)).await;
    let client = reqwest::Client::new();

    let replacement = vec![record("C3", "Washer", "fasteners", 2)];
    std::fs::write(&path, serde_json::to_vec(&replacement).unwrap()).unwrap();

    let res = client
        .post(format!("{}/reload", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["records"], 1);

    let page = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(row_ids(&page), vec!["C3"]);
}

#[tokio::test]
async fn status_reports_count_and_order() {
    let server = spawn_with_fixture(&fixture()).await;
    let client = reqwest::Client::new();

    client
        .get(format!("{}/inventory?sort=name", server.base_url))
        .send()
        .await
        .unwrap();

    let status: serde_json::Value = client
        .get(format!("{}/status", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(status["records"], 2);
    assert_eq!(status["order"], "name");
    assert!(status["last_loaded_at"].is_string());
}
