// Dioxus imports
use dioxus::prelude::*;

// General imports
use dioxus::logger::tracing::error;
use reqwest::{self, header::CONTENT_TYPE};

use super::backend::{addr_backend, SearchQuery, SearchResults};
use super::results_interface::document_list;
use super::search_interface::search_bar;
use super::search_state::{
    sync_search_results_state, SyncSearchResultsState, SEARCH_ERROR, SEARCH_GENERATION,
    SEARCH_LOADING, SEARCH_RESULTS,
};
use super::upload_interface::upload_area;

#[component]
pub fn title_bar() -> Element {
    rsx! {
        h1 { "DocMemory" }
        p { class: "tagline", "Semantic Document Memory System" }
    }
}

fn search_failure(generation: u64) -> SyncSearchResultsState {
    SyncSearchResultsState {
        generation,
        results: Vec::new(),
        error: Some("There was a problem searching documents. Please try again.".to_string()),
    }
}

/// Issues one search request and settles it into an update tagged
/// with the generation that was current when it was issued. Non-2xx
/// and malformed responses are the same generic failure.
async fn run_search(query: String, generation: u64) -> SyncSearchResultsState {
    let data = SearchQuery { query };
    let data_serialized = match serde_json::to_string(&data) {
        Ok(body) => body,
        Err(err) => {
            error!("There was an error serializing the search request {err:?}");
            return search_failure(generation);
        }
    };
    let addr = format!("{}/api/search", addr_backend());
    match reqwest::Client::new()
        .post(addr)
        .header(CONTENT_TYPE, "application/json")
        .body(data_serialized)
        .send()
        .await
    {
        Ok(response) => {
            if !response.status().is_success() {
                error!("Search request returned status {}", response.status());
                return search_failure(generation);
            }
            match response.json::<SearchResults>().await {
                Ok(body) => SyncSearchResultsState {
                    generation,
                    results: body.results,
                    error: None,
                },
                Err(err) => {
                    error!("There was an error parsing the search response {err:?}");
                    search_failure(generation)
                }
            }
        }
        Err(err) => {
            error!("There was an error searching documents {err:?}");
            search_failure(generation)
        }
    }
}

/// Top-level view. Owns the request lifecycle for searches: bumps the
/// generation, flips the loading flag, and hands the settled outcome
/// to the sync coroutine which discards stale generations.
#[component]
pub fn main_window() -> Element {
    // Intialize state and coroutines
    use_coroutine(sync_search_results_state);

    let sync_search_results = use_coroutine_handle::<SyncSearchResultsState>();
    let on_search = move |query: String| {
        spawn(async move {
            let generation = *SEARCH_GENERATION.read() + 1;
            *SEARCH_GENERATION.write() = generation;
            *SEARCH_LOADING.write() = true;
            (*SEARCH_ERROR.write()).clear();
            let update = run_search(query, generation).await;
            sync_search_results.send(update);
        });
    };

    rsx! {
        main {
            id: "docmemory_main",
            header {
                title_bar {}
            }
            search_bar { on_search: on_search }
            if !SEARCH_ERROR.read().is_empty() {
                p { class: "search_error", "{SEARCH_ERROR}" }
            }
            div {
                class: "content_grid",
                document_list { documents: SEARCH_RESULTS() }
                upload_area {}
            }
        }
    }
}
