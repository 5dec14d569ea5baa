//! Literature search results returned by the PubMed proxy.

use serde::{Deserialize, Serialize};

/// One article summary from a literature search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    /// PubMed unique identifier.
    pub uid: String,
    /// Article title.
    pub title: String,
    /// Author names in byline order.
    #[serde(default)]
    pub authors: Vec<String>,
    /// Publication date as the proxy formats it.
    #[serde(rename = "pubdate", default)]
    pub pub_date: String,
    /// Journal or source name.
    #[serde(default)]
    pub source: String,
    /// Abstract text, when the proxy includes one.
    #[serde(rename = "abstract", default)]
    pub abstract_text: Option<String>,
}

/// A page of literature search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteratureSearch {
    /// Total matches on the server, not just this page.
    pub total: u64,
    /// Article summaries in relevance order.
    #[serde(default)]
    pub articles: Vec<ArticleSummary>,
}
