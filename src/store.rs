//! View State Store
//!
//! Holds `TodoState` in a Leptos signal and lets the synchronizer patch it.

use leptos::prelude::*;
use todo_sync::{StateCell, TodoState};

/// Signal-backed state cell.
///
/// Once the owning view is disposed the signal is gone and every access
/// returns `None`, so late responses are dropped instead of panicking.
#[derive(Clone, Copy)]
pub struct SignalCell(pub RwSignal<TodoState>);

impl StateCell for SignalCell {
    fn update<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> Option<R> {
        self.0.try_update(f)
    }

    fn read<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }
}
