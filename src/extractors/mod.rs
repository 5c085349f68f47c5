use crate::model::Recipe;
use scraper::Html;

pub mod metadata;
mod paprika;
pub mod text;

pub use metadata::{parse_metadata, Metadata};
pub use paprika::PaprikaExtractor;

pub struct ParsingContext {
    /// Used as the recipe name when the document has none, usually the file stem.
    pub fallback_name: String,
    pub document: Html,
}

impl ParsingContext {
    pub fn new(html: &str, fallback_name: impl Into<String>) -> Self {
        Self {
            fallback_name: fallback_name.into(),
            document: Html::parse_document(html),
        }
    }
}

pub trait Extractor {
    /// `None` means the document holds no recipe at all; a recipe with every
    /// field empty is still `Some`.
    fn parse(&self, context: &ParsingContext) -> Option<Recipe>;
}
