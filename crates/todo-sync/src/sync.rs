//! View-State Synchronizer
//!
//! Drives one store call per user action and patches `TodoState` with
//! the store's answer. The state lives behind a `StateCell` so the view
//! can keep it in a reactive signal while tests use a plain `RefCell`.
//! Request ordering is tracked by a `Sequencer` outside that state, so
//! taking a ticket never notifies the view.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures_util::future::{AbortHandle, Abortable};

use crate::error::{StoreResult, SyncError, SyncResult};
use crate::models::Item;
use crate::state::TodoState;
use crate::store::ItemStore;
use crate::ticket::{Sequencer, Ticket};

/// Shared, mutable home of the view state.
///
/// Both methods return `None` once the state is gone (view unmounted),
/// in which case the patch is dropped.
pub trait StateCell: Clone + 'static {
    fn update<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> Option<R>;

    fn read<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R>;
}

impl StateCell for Rc<RefCell<TodoState>> {
    fn update<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn read<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

/// How a call ended up affecting local state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Patch {
    /// The store's answer was applied
    Applied,
    /// The answer arrived but was superseded or the view is gone
    Discarded,
    /// Nothing to do; no request was sent
    Skipped,
}

/// Result of a load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// List replaced with this many items
    Loaded(usize),
    /// Load failed and the list was emptied
    Reset(SyncError),
    /// A newer load superseded this one, or the view is gone
    Discarded,
}

// ========================
// Lifecycle
// ========================

#[derive(Debug, Default)]
struct LifecycleInner {
    disposed: bool,
    next_id: u64,
    in_flight: HashMap<u64, AbortHandle>,
}

/// Tracks in-flight requests so they can be aborted when the view goes away.
///
/// Shared with the view's cleanup hook, which must be `Send + Sync`.
#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
    inner: Arc<Mutex<LifecycleInner>>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, LifecycleInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_disposed(&self) -> bool {
        self.lock().disposed
    }

    /// Abort every in-flight request; later patches become no-ops
    pub fn dispose(&self) {
        let mut inner = self.lock();
        inner.disposed = true;
        let aborted = inner.in_flight.len();
        for (_, handle) in inner.in_flight.drain() {
            handle.abort();
        }
        log::debug!("[SYNC] Disposed, aborted {} request(s)", aborted);
    }

    pub fn in_flight(&self) -> usize {
        self.lock().in_flight.len()
    }

    /// Run `fut` unless or until the lifecycle is disposed
    pub async fn run<T>(&self, fut: impl Future<Output = T>) -> SyncResult<T> {
        let (handle, registration) = AbortHandle::new_pair();
        let id = {
            let mut inner = self.lock();
            if inner.disposed {
                return Err(SyncError::Disposed);
            }
            inner.next_id += 1;
            let id = inner.next_id;
            inner.in_flight.insert(id, handle);
            id
        };

        let result = Abortable::new(fut, registration).await;

        self.lock().in_flight.remove(&id);
        result.map_err(|_| SyncError::Disposed)
    }
}

// ========================
// Synchronizer
// ========================

/// Keeps a `StateCell` in step with an `ItemStore`
pub struct Synchronizer<S, C> {
    store: Rc<S>,
    cell: C,
    seq: Rc<RefCell<Sequencer>>,
    lifecycle: Lifecycle,
}

impl<S, C: Clone> Clone for Synchronizer<S, C> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
            cell: self.cell.clone(),
            seq: Rc::clone(&self.seq),
            lifecycle: self.lifecycle.clone(),
        }
    }
}

impl<S: ItemStore, C: StateCell> Synchronizer<S, C> {
    pub fn new(store: S, cell: C) -> Self {
        Self {
            store: Rc::new(store),
            cell,
            seq: Rc::new(RefCell::new(Sequencer::new())),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn cell(&self) -> &C {
        &self.cell
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle.clone()
    }

    /// Tear down: abort in-flight requests and ignore late answers
    pub fn dispose(&self) {
        self.lifecycle.dispose();
    }

    /// Apply `f` unless the view is gone
    fn patch<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> Option<R> {
        if self.lifecycle.is_disposed() {
            return None;
        }
        self.cell.update(f)
    }

    /// Take a ticket for a request about to be sent
    fn issue(&self) -> SyncResult<Ticket> {
        if self.lifecycle.is_disposed() || self.cell.read(|_| ()).is_none() {
            return Err(SyncError::Disposed);
        }
        Ok(self.seq.borrow_mut().issue())
    }

    /// Log a failed mutation and surface it to the user
    fn fail(&self, action: &str, error: SyncError) -> SyncError {
        match &error {
            SyncError::Disposed => log::debug!("[SYNC] {} dropped: view disposed", action),
            SyncError::Store(e) => {
                log::error!("[SYNC] {} failed: {}", action, e);
                let message = format!("Could not {}: {}", action, e);
                self.patch(|state| state.set_notice(message));
            }
        }
        error
    }

    /// Apply a successful answer about item `id`, unless a newer answer
    /// for the same item got there first
    fn settle(
        &self,
        action: &str,
        id: u32,
        ticket: Ticket,
        apply: impl FnOnce(&mut TodoState),
    ) -> Patch {
        if self.lifecycle.is_disposed() {
            return Patch::Discarded;
        }
        if !self.seq.borrow_mut().accept(id, ticket) {
            log::debug!("[SYNC] {} #{}: stale response discarded", action, id);
            return Patch::Discarded;
        }
        let done = self.patch(|state| {
            apply(state);
            state.clear_notice();
        });
        match done {
            Some(()) => Patch::Applied,
            None => Patch::Discarded,
        }
    }

    /// Run a store call for item `id` under a fresh ticket and apply the
    /// answer with `apply`
    async fn mutate<T, F>(
        &self,
        action: &str,
        id: u32,
        call: impl Future<Output = StoreResult<T>>,
        apply: F,
    ) -> SyncResult<Patch>
    where
        F: FnOnce(&mut TodoState, T),
    {
        let ticket = self.issue()?;

        match self.lifecycle.run(call).await {
            Ok(Ok(value)) => Ok(self.settle(action, id, ticket, |state| apply(state, value))),
            Ok(Err(e)) => Err(self.fail(action, e.into())),
            Err(e) => Err(self.fail(action, e)),
        }
    }

    // ========================
    // Store Operations
    // ========================

    /// Fetch the whole collection and replace the local list.
    ///
    /// Never fails: on any error the list is emptied and the error logged.
    /// Items changed by an answer newer than this load keep their local
    /// version either way.
    pub async fn load(&self) -> LoadOutcome {
        let Ok(ticket) = self.issue() else {
            return LoadOutcome::Discarded;
        };

        let (items, failure) = match self.lifecycle.run(self.store.list()).await {
            Ok(Ok(items)) => (items, None),
            Ok(Err(e)) => {
                log::error!("[SYNC] Load failed, showing empty list: {}", e);
                (Vec::new(), Some(e))
            }
            Err(_) => return LoadOutcome::Discarded,
        };

        if self.lifecycle.is_disposed() || !self.seq.borrow_mut().accept_load(ticket) {
            log::debug!("[SYNC] Load superseded, discarded");
            return LoadOutcome::Discarded;
        }

        let keep = self.seq.borrow().newer_than(ticket);
        let answered: Vec<u32> = items
            .iter()
            .map(|item| item.id)
            .filter(|id| !keep.contains(id))
            .collect();
        let count = items.len();
        if self.patch(|state| state.apply_loaded(items, &keep)).is_none() {
            return LoadOutcome::Discarded;
        }
        self.seq.borrow_mut().record_load(ticket, answered);

        match failure {
            None => {
                log::info!("[SYNC] Loaded {} items", count);
                LoadOutcome::Loaded(count)
            }
            Some(e) => LoadOutcome::Reset(e.into()),
        }
    }

    /// Create an item from `title`; no-op when it is blank
    pub async fn add(&self, title: &str) -> SyncResult<Patch> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(Patch::Skipped);
        }
        let ticket = self.issue()?;

        match self.lifecycle.run(self.store.create(title)).await {
            Ok(Ok(item)) => {
                log::debug!("[SYNC] Created #{}", item.id);
                let id = item.id;
                let patch = self.settle("add item", id, ticket, |state| state.apply_created(item));
                if patch == Patch::Discarded {
                    // a newer load already shows the item
                    self.patch(|state| state.set_draft(String::new()));
                }
                Ok(patch)
            }
            Ok(Err(e)) => Err(self.fail("add item", e.into())),
            Err(e) => Err(self.fail("add item", e)),
        }
    }

    /// Add the current new-item draft
    pub async fn submit_draft(&self) -> SyncResult<Patch> {
        let draft = self.cell.read(|state| state.draft().to_string()).unwrap_or_default();
        self.add(&draft).await
    }

    pub async fn rename(&self, id: u32, title: &str) -> SyncResult<Patch> {
        self.mutate("rename item", id, self.store.update(id, title), |state, item: Item| {
            state.apply_replaced(item)
        })
        .await
    }

    pub async fn delete(&self, id: u32) -> SyncResult<Patch> {
        self.mutate("delete item", id, self.store.delete(id), |state, ()| state.apply_removed(id))
            .await
    }

    /// Ask the store to flip completion; the local copy takes whatever
    /// the store returns
    pub async fn toggle(&self, id: u32) -> SyncResult<Patch> {
        self.mutate("toggle item", id, self.store.toggle(id), |state, item: Item| {
            state.apply_replaced(item)
        })
        .await
    }

    // ========================
    // Edit Mode
    // ========================

    pub fn begin_edit(&self, item: &Item) {
        self.patch(|state| state.begin_edit(item));
    }

    pub fn cancel_edit(&self) {
        self.patch(|state| state.cancel_edit());
    }

    /// Rename the item under edit with the trimmed draft, then leave edit
    /// mode whatever the outcome
    pub async fn save_edit(&self) -> SyncResult<Patch> {
        let Some((id, title)) = self.patch(|state| state.pending_save()).flatten() else {
            return Ok(Patch::Skipped);
        };

        let result = self.rename(id, &title).await;
        self.patch(|state| state.finish_edit(id));
        result
    }

    // ========================
    // Input Buffers
    // ========================

    pub fn set_draft(&self, text: String) {
        self.patch(|state| state.set_draft(text));
    }

    pub fn set_edit_draft(&self, text: String) {
        self.patch(|state| state.set_edit_draft(text));
    }

    pub fn dismiss_notice(&self) {
        self.patch(|state| state.clear_notice());
    }
}
