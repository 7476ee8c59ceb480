//! Item Store Configuration
//!
//! The base URL comes from the build environment (`TODO_API_BASE_URL`).

use leptos::prelude::*;
use todo_sync::StoreConfig;

/// Build-time base URL of the item store, if one was supplied
const CONFIGURED_BASE_URL: Option<&str> = option_env!("TODO_API_BASE_URL");

/// Resolve the store location, falling back to the page origin
pub fn store_config() -> StoreConfig {
    let origin = window().location().origin().ok();
    if CONFIGURED_BASE_URL.is_none() {
        log::warn!(
            "[CONFIG] TODO_API_BASE_URL not set at build time, using page origin {:?}",
            origin
        );
    }
    let config = StoreConfig::resolve(CONFIGURED_BASE_URL, origin.as_deref());
    log::info!("[CONFIG] Item store at '{}'", config.base_url());
    config
}
