use serde::{Deserialize, Serialize};

// Backend URL
// Resolved at build time so the wasm bundle stays in sync with the
// deployed server url.
pub fn addr_backend() -> &'static str {
    option_env!("DOCMEMORY_API_URL").unwrap_or("http://127.0.0.1:8000")
}

/// A single search result as returned by the server.
/// Display-only: never mutated after deserialization.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Search post request
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct SearchQuery {
    pub query: String,
}

/// Search response body. The server omits `results` on some error
/// paths, which is treated the same as an empty result set.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct SearchResults {
    #[serde(default)]
    pub results: Vec<Document>,
}

/// Upload response body
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct UploadOutcome {
    pub success: bool,
    pub count: Option<u64>,
    pub error: Option<String>,
}
