use std::sync::Arc;

use axum::{Json, response::IntoResponse};
use serde::Serialize;
use tracing::info;

use crate::bookmarks::{BookmarkStore, IdGenerator, UrlValidator, UuidGenerator, WebUrlValidator};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<BookmarkStore>,
    pub ids: Arc<dyn IdGenerator>,
    pub urls: Arc<dyn UrlValidator>,
    pub public_url: Option<String>,
}

impl AppState {
    pub fn new(store: Arc<BookmarkStore>, public_url: Option<String>) -> Self {
        AppState {
            store,
            ids: Arc::new(UuidGenerator),
            urls: Arc::new(WebUrlValidator),
            public_url: public_url.map(|url| url.trim_end_matches('/').to_string()),
        }
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_url_validator(mut self, urls: Arc<dyn UrlValidator>) -> Self {
        self.urls = urls;
        self
    }

    /// Address of a single bookmark, absolute when a public url is configured.
    pub fn location_of(&self, id: &str) -> String {
        match &self.public_url {
            Some(base) => format!("{}/bookmarks/{}", base, id),
            None => format!("/bookmarks/{}", id),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn healthcheck() -> impl IntoResponse {
    info!("got healthcheck request");
    Json(HealthResponse { status: "ok" })
}
