use serde::{Deserialize, Serialize};

/// Canonical column order of the persisted CSV file. Both the reader
/// (header validation) and the writer rely on this order.
pub const FIELDS: [&str; 4] = ["tool", "command", "description", "tags"];

/// One cheat sheet entry. All fields are free text; `command` acts as a
/// de-facto unique key, enforced only when adding (the table may already
/// contain duplicates from a hand-edited file).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub tool: String,
    pub command: String,
    pub description: String,
    pub tags: String,
}

impl Record {
    pub fn new(
        tool: impl Into<String>,
        command: impl Into<String>,
        description: impl Into<String>,
        tags: impl Into<String>,
    ) -> Self {
        Self {
            tool: tool.into(),
            command: command.into(),
            description: description.into(),
            tags: tags.into(),
        }
    }

    /// True if any field contains `needle` as a substring, case-insensitively.
    /// `needle` must already be lower-cased; the empty string matches everything.
    pub fn matches(&self, needle: &str) -> bool {
        self.tool.to_lowercase().contains(needle)
            || self.command.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.to_lowercase().contains(needle)
    }
}
