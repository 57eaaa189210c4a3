//! Wallpaper backends.
//!
//! Both backends are external programs: feh keeps its state in the
//! `~/.fehbg` restore script, swww answers `swww query`. The catalog core
//! treats the reported path as an opaque string and never parses it
//! further.

use std::fmt;
use std::path::Path;
use std::process::Command;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum WallpaperBackend {
    #[default]
    Feh,
    Swww,
}

impl WallpaperBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            WallpaperBackend::Feh => "feh",
            WallpaperBackend::Swww => "swww",
        }
    }

    /// Path of the wallpaper the backend is currently displaying.
    pub fn current(&self) -> Result<String> {
        match self {
            WallpaperBackend::Feh => current_feh(),
            WallpaperBackend::Swww => current_swww(),
        }
    }

    /// Hand `path` to the backend. The backend owns rendering from here;
    /// a non-zero exit is fatal with its stderr attached.
    pub fn set(&self, path: &Path) -> Result<()> {
        let output = match self {
            WallpaperBackend::Feh => Command::new("feh").arg("--bg-fill").arg(path).output(),
            WallpaperBackend::Swww => Command::new("swww").arg("img").arg(path).output(),
        }
        .with_context(|| format!("failed to launch {}", self.as_str()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "{} exited with {}: {}",
                self.as_str(),
                output.status,
                stderr.trim()
            );
        }

        Ok(())
    }
}

impl fmt::Display for WallpaperBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WallpaperBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feh" => Ok(WallpaperBackend::Feh),
            "swww" => Ok(WallpaperBackend::Swww),
            other => Err(Error::UnknownBackend(other.to_string())),
        }
    }
}

fn current_feh() -> Result<String> {
    let path = dirs::home_dir()
        .context("could not determine home directory")?
        .join(".fehbg");
    let script = std::fs::read_to_string(&path)
        .with_context(|| format!("could not read {}", path.display()))?;

    parse_fehbg(&script).context("could not parse wallpaper path from ~/.fehbg")
}

/// The restore script's last argument is the wallpaper, usually quoted:
/// `feh --no-fehbg --bg-fill '/home/user/pics/a.jpg'`
fn parse_fehbg(script: &str) -> Option<String> {
    let token = script.split_whitespace().last()?;
    let path = token.trim_matches(|c| c == '\'' || c == '"');
    if path.is_empty() {
        return None;
    }
    Some(path.to_string())
}

fn current_swww() -> Result<String> {
    let output = Command::new("swww")
        .arg("query")
        .output()
        .context("failed to launch swww")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("swww query exited with {}: {}", output.status, stderr.trim());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_swww_query(&stdout).context("could not parse current wallpaper from swww query")
}

/// `swww query` prints one line per output, e.g.
/// `eDP-1: 1920x1080, scale: 1, currently displaying: image: /pics/a.jpg`.
/// The first output's image path is taken.
fn parse_swww_query(stdout: &str) -> Option<String> {
    stdout.lines().find_map(|line| {
        let (_, path) = line.split_once("image:")?;
        let path = path.trim();
        if path.is_empty() {
            None
        } else {
            Some(path.to_string())
        }
    })
}
