use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// User judgment about a wallpaper. Votes are append-only history; none of
/// them currently feeds back into selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vote {
    Ok,
    Yesh,
    Newp,
    Fav,
    Never,
}

impl Vote {
    /// Storage form, matches the check constraint on the votes table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Vote::Ok => "ok",
            Vote::Yesh => "yesh",
            Vote::Newp => "newp",
            Vote::Fav => "fav",
            Vote::Never => "never",
        }
    }

    /// Single-letter rating taken on the command line:
    /// o=ok, y=yesh, Y=fav, n=newp, N="never again".
    pub fn from_shorthand(s: &str) -> Option<Vote> {
        match s {
            "o" => Some(Vote::Ok),
            "y" => Some(Vote::Yesh),
            "Y" => Some(Vote::Fav),
            "n" => Some(Vote::Newp),
            "N" => Some(Vote::Never),
            _ => None,
        }
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vote {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ok" => Ok(Vote::Ok),
            "yesh" => Ok(Vote::Yesh),
            "newp" => Ok(Vote::Newp),
            "fav" => Ok(Vote::Fav),
            "never" => Ok(Vote::Never),
            other => Err(Error::UnknownVote(other.to_string())),
        }
    }
}
