//! End-to-end controller tests through the real HTTP client

use std::time::Duration;

use omdb_core::{
    ClientConfig, ContentType, LoadingState, OmdbCatalog, QueryController, QueryPolicy,
    TRANSPORT_FAILURE_MESSAGE,
};
use serde_json::{json, Value};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page_body(title: &str, imdb_id: &str, total: u32) -> Value {
    json!({
        "Search": [
            {"Title": title, "Year": "2005", "imdbID": imdb_id, "Type": "movie", "Poster": "N/A"}
        ],
        "totalResults": total.to_string(),
        "Response": "True"
    })
}

fn controller_for(server: &MockServer, policy: QueryPolicy) -> QueryController<OmdbCatalog> {
    let catalog = OmdbCatalog::with_config(ClientConfig {
        api_key: "test-key".to_string(),
        base_url: format!("{}/", server.uri()),
        timeout_secs: 5,
    })
    .expect("catalog");
    QueryController::new(catalog, policy)
}

#[tokio::test]
async fn test_slow_stale_response_never_wins() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("s", "batman"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body("Batman", "tt0096895", 40))
                .set_delay(Duration::from_millis(400)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("s", "batman begins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
            "Batman Begins",
            "tt0372784",
            3,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let controller = controller_for(&server, QueryPolicy::default());
    let first = controller.on_search_input("batman").await.unwrap();
    let second = controller.on_search_input("batman begins").await.unwrap();

    second.await.unwrap();
    first.await.unwrap();

    let view = controller.view();
    assert_eq!(view.loading_state, LoadingState::Ready);
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].title, "Batman Begins");
    assert_eq!(view.total_results, 3);
    assert_eq!(view.total_pages, 1);
}

#[tokio::test]
async fn test_blank_term_never_hits_catalog() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body("x", "tt1", 1)))
        .expect(0)
        .mount(&server)
        .await;

    let controller = controller_for(
        &server,
        QueryPolicy {
            eager_initial_fetch: true,
            ..QueryPolicy::default()
        },
    );
    assert!(controller.start().await.is_none());
    assert!(controller.on_filter_select(ContentType::Movie).await.is_none());

    let view = controller.view();
    assert_eq!(view.loading_state, LoadingState::Idle);
    assert_eq!(view.total_results, 0);
}

#[tokio::test]
async fn test_catalog_not_found_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Response": "False",
            "Error": "Movie not found!"
        })))
        .mount(&server)
        .await;

    let controller = controller_for(&server, QueryPolicy::default());
    controller.on_search_input("qwertyuiop").await.unwrap().await.unwrap();

    let view = controller.view();
    assert_eq!(view.error_message.as_deref(), Some("Movie not found!"));
    assert!(view.items.is_empty());
    assert_eq!(view.total_results, 0);
}

#[tokio::test]
async fn test_malformed_body_is_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let controller = controller_for(&server, QueryPolicy::default());
    controller.on_search_input("batman").await.unwrap().await.unwrap();

    assert_eq!(
        controller.view().error_message.as_deref(),
        Some(TRANSPORT_FAILURE_MESSAGE)
    );
}

#[tokio::test]
async fn test_last_page_next_is_noop() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_body("Batman", "tt0096895", 23)),
        )
        .expect(3)
        .mount(&server)
        .await;

    let controller = controller_for(&server, QueryPolicy::default());
    controller.on_search_input("batman").await.unwrap().await.unwrap();
    controller.on_page_select(3).await.unwrap().await.unwrap();
    assert!(controller.on_page_next().await.is_none());
    controller.on_page_prev().await.unwrap().await.unwrap();

    let view = controller.view();
    assert_eq!(view.page, 2);
    assert_eq!(view.total_pages, 3);
}
