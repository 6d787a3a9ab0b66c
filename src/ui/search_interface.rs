use dioxus::prelude::*;

use super::search_state::SEARCH_LOADING;
use super::svg_icons::search_icon_svg;

/// Trim a raw query for submission. Whitespace-only input yields
/// `None` and must not reach the backend.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// View for submitting a semantic search query
#[component]
pub fn search_bar(on_search: EventHandler<String>) -> Element {
    #[allow(clippy::redundant_closure)]
    let mut query = use_signal(|| String::new());

    // Shared by the form's native submit and the button click. The
    // input keeps its text after submission.
    let submit = move || {
        if *SEARCH_LOADING.read() {
            return;
        }
        if let Some(normalized) = normalize_query(query.read().as_str()) {
            on_search.call(normalized);
        }
    };

    rsx! {
        div {
            class: "search_form",
            form {
                class: "search_form_input",
                onsubmit: move |_| submit(),
                input {
                    r#type: "text",
                    placeholder: "Search documents semantically...",
                    value: "{query}",
                    disabled: SEARCH_LOADING(),
                    oninput: move |evt| query.set(evt.value()),
                },
            },
            // This must be outside the form or it will be refreshed on each submit
            button {
                class: "search_form_button",
                disabled: SEARCH_LOADING(),
                onclick: move |_evt| submit(),
                if SEARCH_LOADING() {
                    "Searching..."
                } else {
                    svg { dangerous_inner_html: search_icon_svg() }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_query_trims_surrounding_whitespace() {
        assert_eq!(
            normalize_query("  test query  "),
            Some("test query".to_string())
        );
    }

    #[test]
    fn test_normalize_query_keeps_interior_whitespace() {
        assert_eq!(
            normalize_query("vector  memory"),
            Some("vector  memory".to_string())
        );
    }

    #[test]
    fn test_normalize_query_rejects_empty_input() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query("\t\n"), None);
    }
}
