//! Item Store Models
//!
//! Data structures matching the backend's JSON shapes.

use serde::{Deserialize, Serialize};

/// Todo item data structure (matches backend)
///
/// `id` is assigned by the store and `completed` only ever changes by
/// applying a store response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

impl Item {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }
}

/// Request body for create and update
#[derive(Debug, Serialize)]
pub struct TitleBody<'a> {
    pub title: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_ignores_extra_fields() {
        let item: Item = serde_json::from_str(
            r#"{"id":7,"title":"Walk dog","completed":true,"createdAt":"2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.title, "Walk dog");
        assert!(item.completed);
    }

    #[test]
    fn test_title_body_shape() {
        let json = serde_json::to_string(&TitleBody { title: "Buy milk" }).unwrap();
        assert_eq!(json, r#"{"title":"Buy milk"}"#);
    }
}
