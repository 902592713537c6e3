//! Enumerated style options for a task spec.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Register the model should write in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formality {
    /// Everyday language.
    #[default]
    Plain,
    /// Business register.
    Professional,
    /// Academic register.
    Scholarly,
}

/// Target length of the model's answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    /// A few sentences.
    Short,
    /// A few paragraphs.
    #[default]
    Medium,
    /// A full document.
    Long,
}

impl Formality {
    /// Lowercase name used in prompts and persisted JSON.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Professional => "professional",
            Self::Scholarly => "scholarly",
        }
    }
}

impl Length {
    /// Lowercase name used in prompts and persisted JSON.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

impl fmt::Display for Formality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Formality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "professional" => Ok(Self::Professional),
            "scholarly" => Ok(Self::Scholarly),
            other => Err(format!(
                "unknown formality '{other}' (expected plain, professional or scholarly)"
            )),
        }
    }
}

impl FromStr for Length {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            other => Err(format!("unknown length '{other}' (expected short, medium or long)")),
        }
    }
}
