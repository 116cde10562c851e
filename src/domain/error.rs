// Errors raised while encoding widget payloads
use std::fmt;
use thiserror::Error;

/// Maximum number of pages a text widget will cycle through.
pub const MAX_TEXT_PAGES: usize = 10;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("{0} is required.")]
    MissingSlot(RagSlot),
    #[error("Text widget support at most {max} entries.")]
    TooManyPages { count: usize, max: usize },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// The RAG slots that must be filled before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RagSlot {
    Red,
    Amber,
}

impl fmt::Display for RagSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RagSlot::Red => "Red",
            RagSlot::Amber => "Amber",
        };
        f.write_str(name)
    }
}
