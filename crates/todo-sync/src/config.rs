//! Item Store Configuration
//!
//! Resolves the externally supplied base URL into endpoint URLs.

/// Path of the todo collection, relative to the base URL
pub const TODOS_PATH: &str = "/api/todos";

/// Where the item store lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    base_url: String,
}

impl StoreConfig {
    /// Use `base_url` as given (trailing slashes stripped)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the configured base URL, falling back to the page origin.
    ///
    /// There is no built-in default: with neither value set the base is
    /// empty and every request fails at the transport layer.
    pub fn resolve(configured: Option<&str>, origin: Option<&str>) -> Self {
        let base = configured
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .or(origin)
            .unwrap_or_default();
        Self::new(base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET` / `POST` target
    pub fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, TODOS_PATH)
    }

    /// `PUT` / `DELETE` target
    pub fn item_url(&self, id: u32) -> String {
        format!("{}{}/{}", self.base_url, TODOS_PATH, id)
    }

    /// `PATCH` target
    pub fn toggle_url(&self, id: u32) -> String {
        format!("{}{}/{}/toggle", self.base_url, TODOS_PATH, id)
    }
}
