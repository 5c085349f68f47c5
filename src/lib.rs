pub mod cli;
pub mod config;
pub mod error;
pub mod extractors;
pub mod model;
pub mod pipelines;
pub mod publisher;
pub mod slug;
pub mod store;

use std::io::Write;
use std::path::Path;

pub use config::{ImportConfig, StoreBackend, StoreConfig};
pub use error::ImportError;
pub use extractors::{Extractor, PaprikaExtractor, ParsingContext};
pub use model::Recipe;
pub use pipelines::{BatchSummary, ItemOutcome};
pub use publisher::Publisher;
pub use slug::slugify;
pub use store::{KvStore, StoreFactory};

/// Parse one exported recipe page
///
/// `fallback_name` becomes the recipe name when the page has none, usually
/// the file name without extension. Returns `None` when the page holds no
/// recipe at all.
pub fn parse_recipe_html(html: &str, fallback_name: &str) -> Option<Recipe> {
    PaprikaExtractor.parse(&ParsingContext::new(html, fallback_name))
}

/// Upload every recipe page in `dir` to the store described by `config`
///
/// # Example
/// ```no_run
/// use paprika_kv::{import_folder, ImportConfig};
/// use std::path::Path;
///
/// # async fn demo() -> Result<(), paprika_kv::ImportError> {
/// let config = ImportConfig::load()?;
/// let summary = import_folder(Path::new("Recipes"), &config, &mut std::io::stdout()).await?;
/// println!("{} uploaded", summary.uploaded);
/// # Ok(())
/// # }
/// ```
pub async fn import_folder(
    dir: &Path,
    config: &ImportConfig,
    out: &mut dyn Write,
) -> Result<BatchSummary, ImportError> {
    let store = StoreFactory::create(&config.store)?;
    let publisher = Publisher::new(store);
    pipelines::folder::run(dir, &PaprikaExtractor, &publisher, out).await
}
