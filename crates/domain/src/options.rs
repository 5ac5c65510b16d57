// crates/domain/src/options.rs
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::row::{AdditiveRows, FactorialRows, RowSource};

/// How the entries of each row are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Every entry from `n! / (k! * (n - k)!)`.
    #[default]
    Factorial,
    /// Each row from pairwise sums of the previous one.
    Additive,
}

impl Strategy {
    pub fn source(self) -> Box<dyn RowSource> {
        match self {
            Self::Factorial => Box::new(FactorialRows),
            Self::Additive => Box::new(AdditiveRows::new()),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "factorial" => Ok(Self::Factorial),
            "additive" => Ok(Self::Additive),
            other => Err(format!("Unknown strategy: {other}")),
        }
    }
}

/// Output format options for the tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented rows, the classic layout.
    #[default]
    Text,
    Json,
    Jsonl,
    Yaml,
}
