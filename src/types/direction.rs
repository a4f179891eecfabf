//! Definition for the [`Direction`] type, implemented by an enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Which way a weight update applies to a road.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Only the `from -> to` edge.
    Forward,
    /// `from -> to`, and `to -> from` if that edge already exists.
    #[default]
    Both,
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "forward" => Ok(Direction::Forward),
            "both" => Ok(Direction::Both),
            _ => Err(Error::InvalidDirection {
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Both => write!(f, "both"),
        }
    }
}
