//! Color-theme extraction via pywal.

use std::fmt;
use std::path::Path;
use std::process::Command;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::error::Error;

/// Color engines pywal can be told to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ColorBackend {
    #[default]
    Haishoku,
    Wal,
    Colorz,
    Colorthief,
    Schemer2,
}

impl ColorBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorBackend::Haishoku => "haishoku",
            ColorBackend::Wal => "wal",
            ColorBackend::Colorz => "colorz",
            ColorBackend::Colorthief => "colorthief",
            ColorBackend::Schemer2 => "schemer2",
        }
    }
}

impl fmt::Display for ColorBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "haishoku" => Ok(ColorBackend::Haishoku),
            "wal" => Ok(ColorBackend::Wal),
            "colorz" => Ok(ColorBackend::Colorz),
            "colorthief" => Ok(ColorBackend::Colorthief),
            "schemer2" => Ok(ColorBackend::Schemer2),
            other => Err(Error::UnknownBackend(other.to_string())),
        }
    }
}

/// Launch `wal` against the chosen wallpaper. The theme files it writes
/// are its own business; nothing is read back, and a failing run only
/// warns since the wallpaper itself has already been applied.
pub fn run(path: &Path, backend: ColorBackend) -> Result<()> {
    let status = Command::new("wal")
        .arg("-i")
        .arg(path)
        .arg("--backend")
        .arg(backend.as_str())
        .status()
        .context("failed to launch wal")?;

    if !status.success() {
        eprintln!("Warning: wal exited with {status}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_backend_from_str() {
        assert_eq!("haishoku".parse::<ColorBackend>().unwrap(), ColorBackend::Haishoku);
        assert_eq!("schemer2".parse::<ColorBackend>().unwrap(), ColorBackend::Schemer2);
        assert!(matches!(
            "magick".parse::<ColorBackend>(),
            Err(Error::UnknownBackend(name)) if name == "magick"
        ));
    }
}
