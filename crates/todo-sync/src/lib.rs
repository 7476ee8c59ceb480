//! Todo Sync
//!
//! Client side of the todo item store:
//! - models / config: wire shapes and endpoint URLs
//! - store / http: the `ItemStore` trait and its REST implementation
//! - state: local list and edit mode
//! - ticket: ordering of store answers per item
//! - sync: async operations that reconcile state with store answers

mod config;
mod error;
mod http;
mod models;
mod state;
mod store;
mod sync;
mod ticket;


pub use config::{StoreConfig, TODOS_PATH};
pub use error::{StoreError, StoreResult, SyncError, SyncResult};
pub use http::{decode_item, decode_item_list, HttpItemStore};
pub use models::{Item, TitleBody};
pub use state::{EditMode, TodoState};
pub use store::ItemStore;
pub use sync::{Lifecycle, LoadOutcome, Patch, StateCell, Synchronizer};
pub use ticket::{Sequencer, Ticket};
