//! Tauri commands for the OMDb browser
//!
//! Each command forwards one input event to the controller and returns the
//! view model as it stands right after the event. Results of the request it
//! may have started arrive later through the `view-model` event.

use tauri::State;

use crate::BrowserState;
use omdb_core::{ContentType, ViewModel};

/// Latest view model.
#[tauri::command]
pub fn current_view(state: State<'_, BrowserState>) -> ViewModel {
    state.controller().view()
}

/// Search term changed.
///
/// # Arguments
/// * `text` - Raw text of the search box
#[tauri::command]
pub async fn search_input(
    state: State<'_, BrowserState>,
    text: String,
) -> Result<ViewModel, String> {
    let controller = state.controller();
    controller.on_search_input(text).await;
    Ok(controller.view())
}

/// Type filter chosen.
///
/// # Arguments
/// * `type_filter` - "all", "movie" or "series"
#[tauri::command]
pub async fn filter_select(
    state: State<'_, BrowserState>,
    type_filter: ContentType,
) -> Result<ViewModel, String> {
    let controller = state.controller();
    controller.on_filter_select(type_filter).await;
    Ok(controller.view())
}

/// Next page; no-op on the last page.
#[tauri::command]
pub async fn page_next(state: State<'_, BrowserState>) -> Result<ViewModel, String> {
    let controller = state.controller();
    controller.on_page_next().await;
    Ok(controller.view())
}

/// Previous page; no-op on the first page.
#[tauri::command]
pub async fn page_prev(state: State<'_, BrowserState>) -> Result<ViewModel, String> {
    let controller = state.controller();
    controller.on_page_prev().await;
    Ok(controller.view())
}

/// Open the detail view for a title.
///
/// # Arguments
/// * `imdb_id` - IMDb identifier of the selected result
#[tauri::command]
pub async fn item_select(
    state: State<'_, BrowserState>,
    imdb_id: String,
) -> Result<ViewModel, String> {
    let controller = state.controller();
    controller.on_item_select(&imdb_id).await;
    Ok(controller.view())
}

/// Close the detail view.
#[tauri::command]
pub async fn detail_close(state: State<'_, BrowserState>) -> Result<ViewModel, String> {
    let controller = state.controller();
    controller.on_detail_close().await;
    Ok(controller.view())
}
