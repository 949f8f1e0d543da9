use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use tracing::{error, info};

use configs::AppConfig;
use service::notice::Notice;
use service::profile::ProfileStore;
use service::{runtime, Directory, DirectorySettings};

use crate::args::Cli;
use crate::commands;

fn settings_from(cfg: &AppConfig) -> DirectorySettings {
    DirectorySettings {
        featured_limit: cfg.directory.featured_limit,
        skill_preview: cfg.directory.skill_preview,
    }
}

/// Open the persistent store named by `cfg` and wrap it in a directory.
pub async fn build_directory(cfg: &AppConfig) -> anyhow::Result<Directory> {
    runtime::ensure_env(&cfg.storage.data_dir).await?;
    let path = cfg.storage.file_path();
    let store = ProfileStore::open(&path, &cfg.storage.key)
        .await
        .with_context(|| format!("opening store {}", path.display()))?;
    info!(event = "store_open", path = %path.display(), key = %cfg.storage.key, "profile store ready");
    Ok(Directory::seeded(store, settings_from(cfg)))
}

/// Public entry: parse arguments, run one command and print its view.
/// Logging is set up by the binary before the runtime starts.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    let cfg = AppConfig::load_and_validate()?;

    let directory = build_directory(&cfg).await?;
    match commands::execute(&directory, cli.command).await {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            output.write_json(&mut stdout)?;
            stdout.flush()?;
            if let Some(notice) = output.notice {
                eprintln!("{}", notice.message());
            }
            Ok(())
        }
        Err(e) => {
            error!(event = "command_failed", error = %e, "command failed");
            eprintln!("{}", Notice::from(&e).message());
            Err(e.into())
        }
    }
}
