use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub id: String,
    pub label: String,
    pub style: String,
    /// Reply character budget the draft must stay under.
    pub char_limit: u32,
}

impl Platform {
    pub fn new(id: &str, label: &str, style: &str, char_limit: u32) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            style: style.to_string(),
            char_limit,
        }
    }
}
