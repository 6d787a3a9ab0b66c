use dioxus::prelude::*;

use super::backend::Document;

pub const EMPTY_RESULTS_MESSAGE: &str =
    "No documents found. Try searching or uploading documents.";

/// Relevance scores are displayed with a fixed precision no matter
/// what the backend sends.
pub fn format_score(score: f64) -> String {
    format!("{score:.3}")
}

/// View listing the current search results in the order received.
/// Sorting, filtering, and pagination are all backend concerns.
#[component]
pub fn document_list(documents: Vec<Document>) -> Element {
    rsx! {
        if documents.is_empty() {
            div {
                class: "results_list",
                p { "{EMPTY_RESULTS_MESSAGE}" },
            }
        } else {
            div {
                class: "results_list",
                h2 { "Search Results" },
                ul {
                    id: "search_results",
                    {documents.iter().map(|doc| {
                        rsx! {
                            li {
                                key: "{doc.id}",
                                class: "result_card",
                                h3 { "{doc.title}" },
                                {doc.score.map(|score| rsx! {
                                    p {
                                        class: "result_score",
                                        "Score: {format_score(score)}"
                                    }
                                })}
                                p { class: "result_content", "{doc.content}" },
                                {doc.tags.as_ref().filter(|tags| !tags.is_empty()).map(|tags| rsx! {
                                    div {
                                        class: "result_tags",
                                        {tags.iter().map(|tag| rsx! {
                                            span { class: "result_tag", "{tag}" }
                                        })}
                                    }
                                })}
                            }
                        }
                    })}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_documents() -> Vec<Document> {
        vec![
            Document {
                id: "1".to_string(),
                title: "Document 1".to_string(),
                content: "This is the first document.".to_string(),
                score: Some(0.9),
                tags: None,
            },
            Document {
                id: "2".to_string(),
                title: "Document 2".to_string(),
                content: "This is the second document.".to_string(),
                score: Some(0.8),
                tags: None,
            },
        ]
    }

    fn empty_list() -> Element {
        rsx! {
            document_list { documents: Vec::<Document>::new() }
        }
    }

    fn filled_list() -> Element {
        rsx! {
            document_list { documents: sample_documents() }
        }
    }

    fn render_to_html(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_document_list_empty_renders_only_the_fallback_text() {
        let html = render_to_html(empty_list);
        assert!(html.contains(EMPTY_RESULTS_MESSAGE));
        assert!(!html.contains("Search Results"));
        assert!(!html.contains("result_card"));
    }

    #[test]
    fn test_document_list_renders_one_block_per_document_in_order() {
        let html = render_to_html(filled_list);
        assert!(!html.contains(EMPTY_RESULTS_MESSAGE));
        assert!(html.contains("Search Results"));
        assert_eq!(html.matches("result_card").count(), 2);
        let first = html.find("Document 1").unwrap();
        let second = html.find("Document 2").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_document_list_score_line_only_when_present() {
        let html = render_to_html(filled_list);
        assert!(html.contains("Score: 0.900"));
        assert!(html.contains("Score: 0.800"));

        let html = render_to_html(|| {
            rsx! {
                document_list {
                    documents: vec![Document {
                        id: "3".to_string(),
                        title: "Unscored".to_string(),
                        content: "No ranking signal.".to_string(),
                        score: None,
                        tags: None,
                    }]
                }
            }
        });
        assert!(!html.contains("Score:"));
    }

    #[test]
    fn test_format_score_pads_to_three_decimals() {
        assert_eq!(format_score(0.9), "0.900");
        assert_eq!(format_score(1.0), "1.000");
    }

    #[test]
    fn test_format_score_truncates_extra_precision() {
        assert_eq!(format_score(0.123456), "0.123");
        assert_eq!(format_score(0.87651), "0.877");
        // The f64 nearest 0.8765 sits just below the midpoint.
        assert_eq!(format_score(0.8765), "0.876");
    }

    #[test]
    fn test_format_score_is_not_bounded() {
        // The backend makes no promise that scores fall in [0, 1].
        assert_eq!(format_score(12.5), "12.500");
        assert_eq!(format_score(-0.25), "-0.250");
    }
}
