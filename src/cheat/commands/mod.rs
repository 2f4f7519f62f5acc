use crate::model::Record;

pub mod add;
pub mod delete;
pub mod search;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command, rendered by the CLI layer.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records to display (search results, delete candidates).
    pub listed_records: Vec<Record>,
    /// Table positions of `listed_records`, so delete removes by position
    /// rather than re-matching.
    pub matched_positions: Vec<usize>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_matched_positions(mut self, positions: Vec<usize>) -> Self {
        self.matched_positions = positions;
        self
    }
}
