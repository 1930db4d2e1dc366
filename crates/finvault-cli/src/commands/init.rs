use std::path::PathBuf;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_storage_path, write_config, FinvaultConfig};
use crate::errors::CliError;

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path(ctx.cli())?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}. Pass --force to overwrite it.",
            config_path.display()
        ))
        .into());
    }

    let storage_path = match args.storage.as_deref() {
        Some(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => default_storage_path()?,
    };
    let config = FinvaultConfig::new(storage_path);
    write_config(&config_path, &config)?;
    tracing::debug!(path = %config_path.display(), "wrote config");

    if !ctx.quiet() {
        println!("Wrote config to {}", config_path.display());
        if let Some(path) = config.storage.path.as_deref() {
            println!("Store file: {}", path);
        }
    }
    Ok(())
}
