//! Scripted search API shared by the integration tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use pixar_browse::{ApiError, FetchRequest, FetchResponse, Item, SearchApi};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Notify;

/// Serves `per_page` hits for any request
///
/// Each hit's ID is `page * 100 + index` and its `source` field names what
/// was searched (the text, else the category, else `all`). Requests for a
/// failing page get `success = false`; the first page of the held text waits
/// until [`ScriptedApi::release`].
pub struct ScriptedApi {
    per_page: u64,
    held_text: Option<String>,
    release: Notify,
    failing_pages: Mutex<Vec<u32>>,
    seen: Mutex<Vec<FetchRequest>>,
}

impl ScriptedApi {
    pub fn new(per_page: u64) -> Arc<Self> {
        Arc::new(Self {
            per_page,
            held_text: None,
            release: Notify::new(),
            failing_pages: Mutex::new(Vec::new()),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn holding(per_page: u64, text: &str) -> Arc<Self> {
        Arc::new(Self {
            per_page,
            held_text: Some(text.to_string()),
            release: Notify::new(),
            failing_pages: Mutex::new(Vec::new()),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn fail_page(&self, page: u32) {
        self.failing_pages.lock().push(page);
    }

    /// Let the held request answer
    pub fn release(&self) {
        self.release.notify_one();
    }

    pub fn requests(&self) -> Vec<FetchRequest> {
        self.seen.lock().clone()
    }
}

#[async_trait]
impl SearchApi for ScriptedApi {
    async fn search(&self, request: &FetchRequest) -> Result<FetchResponse, ApiError> {
        self.seen.lock().push(request.clone());

        if request.page == 1 && self.held_text.is_some() && request.q == self.held_text {
            self.release.notified().await;
        }

        if self.failing_pages.lock().contains(&request.page) {
            return Ok(FetchResponse::failed());
        }

        let source = request
            .q
            .clone()
            .or_else(|| request.category.clone())
            .unwrap_or_else(|| "all".to_string());
        let hits = (0..self.per_page)
            .map(|i| {
                let mut item = Item::new(
                    u64::from(request.page) * 100 + i,
                    1280,
                    853,
                    format!("https://cdn.example/{source}/{i}_640.jpg"),
                    format!("https://cdn.example/{source}/{i}_1280.jpg"),
                );
                item.extra.insert("source".into(), Value::from(source.clone()));
                item
            })
            .collect();

        Ok(FetchResponse::ok(hits))
    }
}

/// The `source` every item in the list came from
pub fn sources(items: &[Item]) -> Vec<String> {
    let mut sources: Vec<String> = items
        .iter()
        .filter_map(|item| item.extra.get("source")?.as_str().map(str::to_string))
        .collect();
    sources.dedup();
    sources
}
