use crate::error::ImportError;
use crate::extractors::{Extractor, ParsingContext};
use crate::pipelines::{BatchSummary, ItemOutcome};
use crate::publisher::Publisher;
use log::{info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

/// List the recipe pages in an export folder
///
/// Picks `*.html` files directly inside `dir`, skipping hidden files and the
/// export's `index.html`, sorted by file name.
pub fn discover_recipe_files(dir: &Path) -> Result<Vec<PathBuf>, ImportError> {
    if !dir.is_dir() {
        return Err(ImportError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(".html") || name.starts_with('.') || name == "index.html" {
            continue;
        }
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Extract and upload a single file
pub async fn process_file(
    path: &Path,
    extractor: &dyn Extractor,
    publisher: &Publisher,
) -> ItemOutcome {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Could not read {}: {}", path.display(), e);
            return ItemOutcome::ReadFailed;
        }
    };
    let html = String::from_utf8_lossy(&bytes);

    let fallback_name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let parsed = {
        let context = ParsingContext::new(&html, fallback_name);
        extractor.parse(&context)
    };

    let Some(recipe) = parsed else {
        return ItemOutcome::NotARecipe;
    };

    if publisher.publish(&recipe.slug, &recipe).await {
        ItemOutcome::Uploaded(recipe.slug)
    } else {
        ItemOutcome::UploadFailed
    }
}

/// Process every recipe page in `dir`, one at a time
///
/// Progress goes to `out` as `[i/N] <file> ... <outcome>` lines. Individual
/// failures are counted, never returned; only a bad `dir` or a broken `out`
/// ends the run early.
pub async fn run(
    dir: &Path,
    extractor: &dyn Extractor,
    publisher: &Publisher,
    out: &mut dyn Write,
) -> Result<BatchSummary, ImportError> {
    let files = discover_recipe_files(dir)?;
    let total = files.len();
    info!("Importing {} files from {}", total, dir.display());

    writeln!(out, "Found {total} recipe files\n")?;

    let mut summary = BatchSummary {
        found: total,
        ..Default::default()
    };

    for (i, path) in files.iter().enumerate() {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        write!(out, "[{}/{}] {} ... ", i + 1, total, file_name)?;
        out.flush()?;

        let outcome = process_file(path, extractor, publisher).await;
        writeln!(out, "{outcome}")?;
        summary.record(&outcome);
    }

    writeln!(
        out,
        "\nDone: {} uploaded, {} failed/skipped",
        summary.uploaded, summary.failed
    )?;
    info!(
        "Finished {}: {} uploaded, {} failed/skipped",
        dir.display(),
        summary.uploaded,
        summary.failed
    );

    Ok(summary)
}
