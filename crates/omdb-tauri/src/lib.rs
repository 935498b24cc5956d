//! OMDb Browser Tauri Integration
//!
//! This crate exposes the query controller to a Tauri 2.0 frontend.
//! Input events arrive as commands; every view-model change is pushed to
//! the frontend as a `view-model` event.
//!
//! # Usage
//!
//! ```rust,ignore
//! use omdb_tauri::BrowserState;
//! use tauri::Manager;
//!
//! fn main() {
//!     tauri::Builder::default()
//!         .setup(|app| {
//!             let state = BrowserState::from_env()?;
//!             state.forward_views(app.handle().clone());
//!             app.manage(state);
//!             Ok(())
//!         })
//!         .invoke_handler(tauri::generate_handler![
//!             omdb_tauri::commands::current_view,
//!             omdb_tauri::commands::search_input,
//!             omdb_tauri::commands::filter_select,
//!             omdb_tauri::commands::page_next,
//!             omdb_tauri::commands::page_prev,
//!             omdb_tauri::commands::item_select,
//!             omdb_tauri::commands::detail_close,
//!         ])
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! # Commands
//! - `current_view` - Latest view model
//! - `search_input` - Search term changed
//! - `filter_select` - Type filter chosen
//! - `page_next` / `page_prev` - Pagination
//! - `item_select` / `detail_close` - Detail view

pub mod commands;

use tauri::{AppHandle, Emitter};

use omdb_core::{ClientConfig, OmdbCatalog, QueryController, QueryPolicy};

/// Event name carrying every published view model
pub const VIEW_MODEL_EVENT: &str = "view-model";

/// Controller managed by Tauri and shared by all commands.
///
/// The controller serializes its own writes, so no outer lock is needed.
pub struct BrowserState {
    controller: QueryController<OmdbCatalog>,
}

impl BrowserState {
    /// Create state from explicit client configuration and policy.
    ///
    /// # Errors
    /// Returns an error string if the catalog client cannot be created.
    pub fn new(config: ClientConfig, policy: QueryPolicy) -> Result<Self, String> {
        let catalog = OmdbCatalog::with_config(config).map_err(|e| e.to_string())?;
        Ok(Self {
            controller: QueryController::new(catalog, policy),
        })
    }

    /// Create state from `OMDB_*` environment variables and the default policy.
    pub fn from_env() -> Result<Self, String> {
        Self::new(ClientConfig::from_env(), QueryPolicy::default())
    }

    /// Get a reference to the inner controller.
    pub fn controller(&self) -> &QueryController<OmdbCatalog> {
        &self.controller
    }

    /// Push every view-model change to the frontend and run the initial
    /// evaluation.
    pub fn forward_views(&self, app: AppHandle) {
        let controller = self.controller.clone();
        let mut views = controller.subscribe();

        tauri::async_runtime::spawn(async move {
            while views.changed().await.is_ok() {
                let view = views.borrow_and_update().clone();
                if let Err(err) = app.emit(VIEW_MODEL_EVENT, view) {
                    tracing::warn!("failed to emit view model: {err}");
                }
            }
        });

        let controller = self.controller.clone();
        tauri::async_runtime::spawn(async move {
            controller.start().await;
        });
    }
}
