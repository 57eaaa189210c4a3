use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::backend::WallpaperBackend;
use crate::pywal::ColorBackend;

#[derive(Parser)]
#[command(name = "seasonwall")]
#[command(version)]
#[command(about = "Seasonal wallpaper rotation with a persistent catalog and rating history")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Top-level directory to scan for images
    #[arg(short, long)]
    pub(crate) image_dir: Option<PathBuf>,

    /// Path to the SQLite catalog
    #[arg(short, long)]
    pub(crate) db_path: Option<PathBuf>,

    /// Backend used to read and set the wallpaper
    #[arg(short, long, value_enum)]
    pub(crate) backend: Option<WallpaperBackend>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Rate the current wallpaper and switch to a new one
    Change {
        /// Rating for the current wallpaper: o=ok, y=yesh, Y=fav, n=newp, N=never
        #[arg(default_value = "o")]
        rating: String,

        /// Bias selection towards images taken near today's date
        #[arg(short, long)]
        seasons: bool,

        /// Use this file instead of a random selection
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// pywal engine for color extraction
        #[arg(short, long, value_enum)]
        color_backend: Option<ColorBackend>,
    },
    /// Rescan the image directory and report new catalog entries
    Scan,
    /// Print the currently displayed wallpaper
    Current,
    /// Show catalog size and vote tallies
    Stats,
}
