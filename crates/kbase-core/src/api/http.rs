//! reqwest-backed client for the notes service.
//!
//! Works natively and in the browser: on `wasm32` reqwest delegates to
//! `fetch`, so no timeouts or TLS options are configured here.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::NotesBackend;
use crate::config::{normalize_base_url, ClientConfig};
use crate::error::{Error, Result};
use crate::models::{
    Category, CategoryDraft, CategoryList, ErrorBody, FavoriteToggle, Note, NoteDraft, NoteId,
    NoteList, SearchResults, Stats,
};
use crate::util::compact_text;

/// HTTP client for the notes service REST API.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.api_base_url)?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(|error| Error::Transport(format!("Failed to construct HTTP client: {error}")))?;
        Ok(Self { base_url, client })
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.client.get(self.url(path));
        let response = self.send(Method::GET, path, request).await?;
        decode(response).await
    }

    async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.client.request(method.clone(), self.url(path)).json(body);
        let response = self.send(method, path, request).await?;
        decode(response).await
    }

    async fn send(&self, method: Method, path: &str, request: RequestBuilder) -> Result<Response> {
        tracing::debug!("{} {}", method, path);
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|error| Error::Transport(error.to_string()))?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|parsed| parsed.message());
        tracing::warn!(
            "{} {} failed with HTTP {}: {}",
            method,
            path,
            status,
            compact_text(&body)
        );
        Err(Error::Http { status, detail })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response
        .text()
        .await
        .map_err(|error| Error::Transport(format!("Failed to read response body: {error}")))?;
    serde_json::from_str(&body).map_err(|error| Error::Decode(error.to_string()))
}

fn note_path(id: NoteId) -> String {
    format!("/api/notes/{id}")
}

fn notes_path(category: Option<&str>) -> String {
    match category {
        Some(name) => format!("/api/notes?category={}", urlencoding::encode(name)),
        None => "/api/notes".to_string(),
    }
}

fn search_path(query: &str) -> String {
    format!("/api/search?q={}", urlencoding::encode(query))
}

impl NotesBackend for HttpBackend {
    async fn stats(&self) -> Result<Stats> {
        self.get_json("/api/stats").await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let list: CategoryList = self.get_json("/api/categories").await?;
        Ok(list.categories)
    }

    async fn create_category(&self, draft: &CategoryDraft) -> Result<Category> {
        self.send_json(Method::POST, "/api/categories", draft).await
    }

    async fn update_category(&self, id: i64, draft: &CategoryDraft) -> Result<Category> {
        self.send_json(Method::PUT, &format!("/api/categories/{id}"), draft)
            .await
    }

    async fn delete_category(&self, id: i64) -> Result<()> {
        let path = format!("/api/categories/{id}");
        let request = self.client.delete(self.url(&path));
        self.send(Method::DELETE, &path, request).await?;
        Ok(())
    }

    async fn list_notes(&self, category: Option<&str>) -> Result<Vec<Note>> {
        let list: NoteList = self.get_json(&notes_path(category)).await?;
        Ok(list.notes)
    }

    async fn list_favorites(&self) -> Result<Vec<Note>> {
        let list: NoteList = self.get_json("/api/notes/favorites").await?;
        Ok(list.notes)
    }

    async fn get_note(&self, id: NoteId) -> Result<Note> {
        self.get_json(&note_path(id)).await
    }

    async fn create_note(&self, draft: &NoteDraft) -> Result<Note> {
        self.send_json(Method::POST, "/api/notes", draft).await
    }

    async fn update_note(&self, id: NoteId, draft: &NoteDraft) -> Result<Note> {
        self.send_json(Method::PUT, &note_path(id), draft).await
    }

    async fn delete_note(&self, id: NoteId) -> Result<()> {
        let path = note_path(id);
        let request = self.client.delete(self.url(&path));
        self.send(Method::DELETE, &path, request).await?;
        Ok(())
    }

    async fn toggle_favorite(&self, id: NoteId) -> Result<FavoriteToggle> {
        let path = format!("{}/favorite", note_path(id));
        let request = self.client.post(self.url(&path));
        let response = self.send(Method::POST, &path, request).await?;
        decode(response).await
    }

    async fn search(&self, query: &str) -> Result<Vec<Note>> {
        let results: SearchResults = self.get_json(&search_path(query)).await?;
        Ok(results.notes)
    }
}
