use serde::{Deserialize, Serialize};

/// Url value marking a game that is not playable yet.
pub const PLACEHOLDER_URL: &str = "#";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub url: String,
    pub category: String,
}

impl GameEntry {
    /// False while the entry still points at the placeholder url.
    pub fn is_available(&self) -> bool {
        self.url != PLACEHOLDER_URL
    }
}
