use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Whether the product is placed as entered or with width and height swapped
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Normal,
    Rotated,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Normal, Orientation::Rotated];

    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Normal => "normal (not rotated)",
            Orientation::Rotated => "rotated",
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Normal => write!(f, "normal"),
            Orientation::Rotated => write!(f, "rotated"),
        }
    }
}

impl FromStr for Orientation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "n" | "h" => Ok(Orientation::Normal),
            "rotated" | "r" | "v" => Ok(Orientation::Rotated),
            other => bail!("unknown orientation: {other}, expected 'normal' or 'rotated'"),
        }
    }
}
