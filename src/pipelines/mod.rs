pub mod folder;

use std::fmt;

/// What happened to one recipe file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// Stored under the contained slug
    Uploaded(String),
    /// The document has no `.recipe` container
    NotARecipe,
    /// The store did not accept the write
    UploadFailed,
    /// The file could not be read
    ReadFailed,
}

impl ItemOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ItemOutcome::Uploaded(_))
    }
}

impl fmt::Display for ItemOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemOutcome::Uploaded(slug) => write!(f, "OK -> {slug}"),
            ItemOutcome::NotARecipe => write!(f, "SKIP (no recipe div found)"),
            ItemOutcome::UploadFailed => write!(f, "UPLOAD FAILED"),
            ItemOutcome::ReadFailed => write!(f, "READ FAILED"),
        }
    }
}

/// Totals for a folder run. `failed` includes skipped documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub found: usize,
    pub uploaded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn record(&mut self, outcome: &ItemOutcome) {
        if outcome.is_success() {
            self.uploaded += 1;
        } else {
            self.failed += 1;
        }
    }
}
