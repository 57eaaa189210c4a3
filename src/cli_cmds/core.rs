use std::path::{Path, PathBuf};

use anyhow::{anyhow, ensure, Result};

use crate::backend::WallpaperBackend;
use crate::catalog::Store;
use crate::error::Error;
use crate::pywal::{self, ColorBackend};
use crate::scanner;
use crate::selector::{self, SelectionMode};
use crate::vote::Vote;

/// The full invocation cycle: reconcile the catalog, rate the current
/// wallpaper, pick the next one, apply it, and hand it to pywal.
pub fn cmd_change(
    image_dir: &Path,
    db_path: &Path,
    backend: WallpaperBackend,
    rating: &str,
    seasons: bool,
    file: Option<&Path>,
    color_backend: ColorBackend,
) -> Result<()> {
    let vote = Vote::from_shorthand(rating)
        .ok_or_else(|| anyhow!("invalid rating {rating:?}, must be one of o, y, Y, n, N"))?;

    let store = Store::open(db_path)?;
    scanner::reconcile(image_dir, &store)?;

    let current = backend.current()?;
    println!("{current}");

    // The current wallpaper may sit outside the catalog (e.g. applied
    // earlier with --file); the vote is then dropped with a warning
    // rather than aborting the cycle.
    match store.insert_vote(&current, vote) {
        Ok(()) => {}
        Err(Error::ImageNotFound(path)) => {
            eprintln!("Warning: {path} is not in the catalog, vote not recorded");
        }
        Err(e) => return Err(e.into()),
    }

    let next = match file {
        Some(path) => {
            ensure!(path.is_file(), "file {} does not exist", path.display());
            path.to_path_buf()
        }
        None => {
            let mode = if seasons {
                SelectionMode::Seasons
            } else {
                SelectionMode::Random
            };
            PathBuf::from(selector::choose(&store, mode)?)
        }
    };

    backend.set(&next)?;
    println!("{}", next.display());

    pywal::run(&next, color_backend)?;

    Ok(())
}

pub fn cmd_scan(image_dir: &Path, db_path: &Path) -> Result<()> {
    let store = Store::open(db_path)?;

    println!("Scanning {}...", image_dir.display());
    let added = scanner::reconcile(image_dir, &store)?;
    println!("Added {} images ({} total)", added, store.image_count()?);

    Ok(())
}

pub fn cmd_current(backend: WallpaperBackend) -> Result<()> {
    println!("{}", backend.current()?);
    Ok(())
}

pub fn cmd_stats(db_path: &Path) -> Result<()> {
    let store = Store::open(db_path)?;

    println!("Images: {}", store.image_count()?);

    if store.vote_count()? == 0 {
        println!("No votes recorded yet");
    } else {
        println!("Votes:");
        for (vote, count) in store.vote_counts()? {
            println!("  {:6} {}", vote.as_str(), count);
        }
    }

    Ok(())
}
