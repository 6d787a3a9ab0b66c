// Dioxus imports
use dioxus::prelude::*;

// General imports
use futures::StreamExt;
use serde::{Deserialize, Serialize};

use super::backend::Document;

// Current search state
#[allow(clippy::redundant_closure)]
pub static SEARCH_RESULTS: GlobalSignal<Vec<Document>> = Signal::global(|| Vec::new());
pub static SEARCH_LOADING: GlobalSignal<bool> = Signal::global(|| false);
pub static SEARCH_GENERATION: GlobalSignal<u64> = Signal::global(|| 0);
#[allow(clippy::redundant_closure)]
pub static SEARCH_ERROR: GlobalSignal<String> = Signal::global(|| String::new());

/// A settled search request, tagged with the generation counter that
/// was current when the request was issued.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct SyncSearchResultsState {
    pub generation: u64,
    pub results: Vec<Document>,
    pub error: Option<String>,
}

/// Applies a settled search to the result state. A stale generation
/// (an earlier request settling after a newer one was issued) is
/// discarded entirely so it cannot clobber a newer result set. A
/// settled error leaves the prior result set in place.
///
/// # Returns
///
/// * whether the update was applied (i.e. was the latest generation)
pub fn settle_search(
    update: SyncSearchResultsState,
    current_generation: u64,
    results: &mut Vec<Document>,
    error: &mut String,
) -> bool {
    if update.generation != current_generation {
        return false;
    }
    error.clear();
    match update.error {
        Some(message) => error.push_str(message.as_str()),
        None => *results = update.results,
    }
    true
}

pub async fn sync_search_results_state(mut rx: UnboundedReceiver<SyncSearchResultsState>) {
    while let Some(updated_state) = rx.next().await {
        let current_generation = *SEARCH_GENERATION.read();
        if settle_search(
            updated_state,
            current_generation,
            &mut SEARCH_RESULTS.write(),
            &mut SEARCH_ERROR.write(),
        ) {
            *SEARCH_LOADING.write() = false;
        }
    }
}
