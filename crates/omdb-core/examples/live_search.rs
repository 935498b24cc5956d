//! Live search against the real OMDb catalog.
//!
//! OMDB_API_KEY=... cargo run -p omdb-core --example live_search -- "batman begins"

use omdb_core::{ClientConfig, ContentType, LoadingState, OmdbCatalog, QueryController, QueryPolicy};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("omdb_core=debug")),
        )
        .init();

    let term = std::env::args().nth(1).unwrap_or_else(|| "Batman".to_string());
    let catalog = OmdbCatalog::with_config(ClientConfig::from_env())?;
    let controller = QueryController::new(catalog, QueryPolicy::default());

    println!("Searching for '{}'...\n", term);
    if let Some(request) = controller.on_search_input(term.as_str()).await {
        request.await?;
    }
    print_view(&controller.view());

    if controller.view().has_next_page {
        println!("\nNext page:");
        if let Some(request) = controller.on_page_next().await {
            request.await?;
        }
        print_view(&controller.view());
    }

    println!("\nSeries only:");
    if let Some(request) = controller.on_filter_select(ContentType::Series).await {
        request.await?;
    }
    print_view(&controller.view());

    let first_id = controller.view().items.first().map(|item| item.id.clone());
    if let Some(id) = first_id {
        if let Some(request) = controller.on_item_select(&id).await {
            request.await?;
        }
        println!("\nDetail: {:#?}", controller.view().detail);
    }

    Ok(())
}

fn print_view(view: &omdb_core::ViewModel) {
    match view.loading_state {
        LoadingState::Failed => {
            println!("Error: {}", view.error_message.as_deref().unwrap_or_default());
        }
        _ => {
            println!(
                "Page {} of {} ({} results, filter: {})",
                view.page,
                view.total_pages,
                view.total_results,
                view.type_filter.as_str()
            );
            for item in &view.items {
                println!("  {} ({}) - {}", item.title, item.year, item.id);
            }
        }
    }
}
