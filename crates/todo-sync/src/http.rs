//! HTTP Item Store
//!
//! `ItemStore` over the REST/JSON API using reqwest (fetch on wasm32).
//! Bodies are read as text and validated here, so a wrong shape is
//! reported as `StoreError::Shape` rather than coerced.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::models::{Item, TitleBody};
use crate::store::ItemStore;

#[derive(Debug, Clone)]
pub struct HttpItemStore {
    client: reqwest::Client,
    config: StoreConfig,
}

impl HttpItemStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // ========================
    // Requests
    // ========================

    /// `GET /api/todos`
    pub fn list_request(&self) -> reqwest::RequestBuilder {
        self.client.get(self.config.collection_url())
    }

    /// `POST /api/todos` with `{"title": ...}`
    pub fn create_request(&self, title: &str) -> reqwest::RequestBuilder {
        self.client.post(self.config.collection_url()).json(&TitleBody { title })
    }

    /// `PUT /api/todos/{id}` with `{"title": ...}`
    pub fn update_request(&self, id: u32, title: &str) -> reqwest::RequestBuilder {
        self.client.put(self.config.item_url(id)).json(&TitleBody { title })
    }

    /// `DELETE /api/todos/{id}`
    pub fn delete_request(&self, id: u32) -> reqwest::RequestBuilder {
        self.client.delete(self.config.item_url(id))
    }

    /// `PATCH /api/todos/{id}/toggle`, no body
    pub fn toggle_request(&self, id: u32) -> reqwest::RequestBuilder {
        self.client.patch(self.config.toggle_url(id))
    }

    /// Send a request and return the body of a success response
    async fn send(&self, request: reqwest::RequestBuilder) -> StoreResult<String> {
        let response = request.send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[async_trait(?Send)]
impl ItemStore for HttpItemStore {
    async fn list(&self) -> StoreResult<Vec<Item>> {
        log::debug!("[STORE] GET {}", self.config.collection_url());
        let body = self.send(self.list_request()).await?;
        decode_item_list(&body)
    }

    async fn create(&self, title: &str) -> StoreResult<Item> {
        log::debug!("[STORE] POST {}", self.config.collection_url());
        let body = self.send(self.create_request(title)).await?;
        decode_item(&body)
    }

    async fn update(&self, id: u32, title: &str) -> StoreResult<Item> {
        log::debug!("[STORE] PUT {}", self.config.item_url(id));
        let body = self.send(self.update_request(id, title)).await?;
        decode_item(&body)
    }

    async fn delete(&self, id: u32) -> StoreResult<()> {
        log::debug!("[STORE] DELETE {}", self.config.item_url(id));
        // Body ignored
        self.send(self.delete_request(id)).await?;
        Ok(())
    }

    async fn toggle(&self, id: u32) -> StoreResult<Item> {
        log::debug!("[STORE] PATCH {}", self.config.toggle_url(id));
        let body = self.send(self.toggle_request(id)).await?;
        decode_item(&body)
    }
}

// ========================
// Response Validation
// ========================

fn parse_json(body: &str) -> StoreResult<Value> {
    serde_json::from_str(body).map_err(|e| StoreError::Decode(e.to_string()))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn from_value<T: DeserializeOwned>(value: Value) -> StoreResult<T> {
    serde_json::from_value(value).map_err(|e| StoreError::Shape(e.to_string()))
}

/// Decode a list response: must be a JSON array of items
pub fn decode_item_list(body: &str) -> StoreResult<Vec<Item>> {
    match parse_json(body)? {
        value @ Value::Array(_) => from_value(value),
        other => Err(StoreError::Shape(format!(
            "expected an array of items, found {}",
            kind_of(&other)
        ))),
    }
}

/// Decode a single-item response: must be a JSON object with the item fields
pub fn decode_item(body: &str) -> StoreResult<Item> {
    match parse_json(body)? {
        value @ Value::Object(_) => from_value(value),
        other => Err(StoreError::Shape(format!(
            "expected an item object, found {}",
            kind_of(&other)
        ))),
    }
}
