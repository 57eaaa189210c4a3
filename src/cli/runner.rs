use anyhow::{bail, Result};
use clap::Parser;

use super::{Cli, Commands};
use crate::backend::WallpaperBackend;
use crate::cli_cmds::*;
use crate::config::Config;
use crate::pywal::ColorBackend;

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    let image_dir = cli.image_dir.unwrap_or_else(|| config.image_dir());
    let db_path = cli.db_path.unwrap_or_else(|| config.db_path());
    let backend = match cli.backend {
        Some(backend) => backend,
        None => config.backend.wallpaper.parse::<WallpaperBackend>()?,
    };

    // Commands that scan need a real image directory up front.
    if matches!(cli.command, Commands::Change { .. } | Commands::Scan) && !image_dir.is_dir() {
        bail!(
            "image directory {} does not exist, pass --image-dir or set it in {}",
            image_dir.display(),
            Config::config_path().display()
        );
    }

    match cli.command {
        Commands::Change {
            rating,
            seasons,
            file,
            color_backend,
        } => {
            let color_backend = match color_backend {
                Some(backend) => backend,
                None => config.backend.color.parse::<ColorBackend>()?,
            };
            cmd_change(
                &image_dir,
                &db_path,
                backend,
                &rating,
                seasons,
                file.as_deref(),
                color_backend,
            )?;
        }
        Commands::Scan => {
            cmd_scan(&image_dir, &db_path)?;
        }
        Commands::Current => {
            cmd_current(backend)?;
        }
        Commands::Stats => {
            cmd_stats(&db_path)?;
        }
    }

    Ok(())
}
