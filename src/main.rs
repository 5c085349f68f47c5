use log::debug;
use paprika_kv::cli::{parse_args, Command, USAGE};
use paprika_kv::{import_folder, ImportConfig, ImportError, StoreBackend};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ImportError> {
    let args = match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Command::Import(args) => args,
    };

    let mut config = ImportConfig::load()?;
    if let Some(namespace_id) = args.namespace_id {
        config.store.namespace_id = namespace_id;
    }
    if args.dry_run {
        config.store.backend = StoreBackend::Memory;
    }
    debug!("{:#?}", config.store.backend);

    let mut stdout = std::io::stdout();
    import_folder(&args.recipes_dir, &config, &mut stdout).await?;
    Ok(())
}
