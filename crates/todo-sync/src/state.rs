//! View State
//!
//! The local projection of the item store plus the interaction state of
//! the view. Every patch is a plain method on `TodoState`; the async
//! side lives in `sync.rs` and request ordering in `ticket.rs`.

use std::collections::{HashMap, HashSet};

use crate::models::Item;

/// Edit mode of the list: at most one row is an inline form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Idle,
    Editing(u32),
}

/// Local list and interaction state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoState {
    items: Vec<Item>,
    /// New item input
    draft: String,
    edit: EditMode,
    /// Inline edit input
    edit_draft: String,
    /// Last failure shown to the user
    notice: Option<String>,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Accessors
    // ========================

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn edit_mode(&self) -> EditMode {
        self.edit
    }

    pub fn is_editing(&self, id: u32) -> bool {
        self.edit == EditMode::Editing(id)
    }

    pub fn edit_draft(&self) -> &str {
        &self.edit_draft
    }

    pub fn set_edit_draft(&mut self, text: impl Into<String>) {
        self.edit_draft = text.into();
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    // ========================
    // Edit Mode
    // ========================

    /// Start editing `item`, silently dropping any other edit in progress
    pub fn begin_edit(&mut self, item: &Item) {
        self.edit = EditMode::Editing(item.id);
        self.edit_draft = item.title.clone();
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditMode::Idle;
        self.edit_draft.clear();
    }

    /// The rename a save should send, if any.
    ///
    /// Returns `None` when idle or when the trimmed draft is empty; in
    /// the latter case the edit is closed right away.
    pub fn pending_save(&mut self) -> Option<(u32, String)> {
        let EditMode::Editing(id) = self.edit else {
            return None;
        };
        let title = self.edit_draft.trim();
        if title.is_empty() {
            self.cancel_edit();
            return None;
        }
        Some((id, title.to_string()))
    }

    /// Close the edit of `id` once its save settled, unless the user has
    /// already moved on to another row.
    pub fn finish_edit(&mut self, id: u32) {
        if self.is_editing(id) {
            self.cancel_edit();
        }
    }

    // ========================
    // Patches
    // ========================

    /// Replace the whole list with a load result.
    ///
    /// Items in `keep` changed after the load was sent: their local version
    /// stays (or stays absent), and those the load did not know about are
    /// kept at the tail in local order.
    pub fn apply_loaded(&mut self, items: Vec<Item>, keep: &HashSet<u32>) {
        let mut local: HashMap<u32, Item> = self
            .items
            .iter()
            .filter(|item| keep.contains(&item.id))
            .map(|item| (item.id, item.clone()))
            .collect();

        let mut merged = Vec::with_capacity(items.len() + local.len());
        for item in items {
            if keep.contains(&item.id) {
                merged.extend(local.remove(&item.id));
            } else {
                merged.push(item);
            }
        }
        let leftover = self.items.iter().filter(|item| local.contains_key(&item.id));
        merged.extend(leftover.cloned());
        self.items = merged;
    }

    /// Append a created item at the tail.
    ///
    /// If the id is already present (a load got there first) the item is
    /// replaced in place instead.
    pub fn apply_created(&mut self, item: Item) {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
        self.draft.clear();
    }

    /// Replace the item with the same id by the store's version.
    ///
    /// Never inserts: an item deleted in the meantime stays deleted.
    pub fn apply_replaced(&mut self, item: Item) {
        if let Some(existing) = self.items.iter_mut().find(|existing| existing.id == item.id) {
            *existing = item;
        }
    }

    /// Remove the item with `id`
    pub fn apply_removed(&mut self, id: u32) {
        self.items.retain(|item| item.id != id);
    }
}
