use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Missing means "match everything".
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct TopQuery {
    pub goal: Option<String>,
}
