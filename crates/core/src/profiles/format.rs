use serde::{Deserialize, Serialize};

/// A user-defined release feature (e.g. "HDR", "x265") that a profile can score.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomFormat {
    pub id: i32,
    pub name: String,
}

impl CustomFormat {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Score a profile assigns to one custom format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFormatItem {
    pub format_id: i32,
    pub score: i32,
}

/// Comma separated format names, for log lines and messages.
pub fn format_names(formats: &[CustomFormat]) -> String {
    formats
        .iter()
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
