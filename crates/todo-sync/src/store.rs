//! Item Store Trait
//!
//! Abstract interface to the backend that owns the todo collection.
//! `HttpItemStore` talks to the REST API; tests use an in-memory fake.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::Item;

/// The five calls the backend exposes.
///
/// Futures are `?Send` because the browser fetch futures are not.
#[async_trait(?Send)]
pub trait ItemStore {
    /// Fetch the full collection
    async fn list(&self) -> StoreResult<Vec<Item>>;

    /// Create an item; the store assigns the id
    async fn create(&self, title: &str) -> StoreResult<Item>;

    /// Replace an item's title
    async fn update(&self, id: u32, title: &str) -> StoreResult<Item>;

    /// Delete an item
    async fn delete(&self, id: u32) -> StoreResult<()>;

    /// Flip an item's completion flag
    async fn toggle(&self, id: u32) -> StoreResult<Item>;
}
