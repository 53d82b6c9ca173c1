//! Mode selector: which pipelines a query runs through.

use catalog::MediaKind;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Invalid choice '{0}'. Please enter 'B', 'M', or 'BH'.")]
    InvalidMode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `B`
    Books,
    /// `M`
    Movies,
    /// `BH`: books first, then movies
    Both,
}

impl Mode {
    /// Pipelines to run, in order
    pub fn kinds(self) -> &'static [MediaKind] {
        match self {
            Mode::Books => &[MediaKind::Book],
            Mode::Movies => &[MediaKind::Movie],
            Mode::Both => &[MediaKind::Book, MediaKind::Movie],
        }
    }
}

impl FromStr for Mode {
    type Err = DispatchError;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "B" => Ok(Mode::Books),
            "M" => Ok(Mode::Movies),
            "BH" => Ok(Mode::Both),
            _ => Err(DispatchError::InvalidMode(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Books => write!(f, "B"),
            Mode::Movies => write!(f, "M"),
            Mode::Both => write!(f, "BH"),
        }
    }
}
