use serde::{Deserialize, Serialize};

/// Request body for reporting a food the catalog does not have.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingFoodReport {
    pub name: String,
    /// Recorded as sent; not checked against the user table.
    #[serde(default)]
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
