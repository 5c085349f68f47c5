use std::path::PathBuf;

use crate::error::ImportError;

pub const USAGE: &str = "Usage: paprika-kv [--namespace-id <id>] [--dry-run] <path-to-Recipes-folder>";

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Import(Args),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub recipes_dir: PathBuf,
    /// Overrides `store.namespace_id`
    pub namespace_id: Option<String>,
    /// Use the in-memory store instead of the configured one
    pub dry_run: bool,
}

/// Parse arguments, program name excluded.
pub fn parse_args<I>(args: I) -> Result<Command, ImportError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut recipes_dir = None;
    let mut namespace_id = None;
    let mut dry_run = false;

    while let Some(a) = args.next() {
        match a.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--dry-run" => dry_run = true,
            "--namespace-id" => {
                let v = args
                    .next()
                    .ok_or_else(|| ImportError::Usage("Missing value for --namespace-id".into()))?;
                namespace_id = Some(v);
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(ImportError::Usage(format!("Unknown arg: {flag}\n{USAGE}")));
            }
            _ if recipes_dir.is_some() => {
                return Err(ImportError::Usage(format!("Unexpected argument: {a}\n{USAGE}")));
            }
            _ => recipes_dir = Some(PathBuf::from(&a)),
        }
    }

    let recipes_dir = recipes_dir.ok_or_else(|| ImportError::Usage(USAGE.to_string()))?;
    if !recipes_dir.is_dir() {
        return Err(ImportError::NotADirectory(recipes_dir));
    }

    Ok(Command::Import(Args {
        recipes_dir,
        namespace_id,
        dry_run,
    }))
}
