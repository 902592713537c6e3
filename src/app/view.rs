//! Navigation state: which tab is open and which persona is selected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Top-level section of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Task spec intake form.
    #[default]
    Intake,
    /// Composed messages and the chat run.
    Compose,
    /// Data workbench.
    Work,
    /// Retrieval corpus and search.
    Rag,
    /// Integration notes.
    Admin,
}

/// Audience preset the user is working for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    /// Watershed and conservation groups.
    #[default]
    Conservation,
    /// General nonprofits.
    Nonprofit,
    /// Teen programs.
    Teen,
}

impl Tab {
    /// All tabs in navigation order.
    pub const ALL: [Self; 5] = [Self::Intake, Self::Compose, Self::Work, Self::Rag, Self::Admin];

    /// Lowercase identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Intake => "intake",
            Self::Compose => "compose",
            Self::Work => "work",
            Self::Rag => "rag",
            Self::Admin => "admin",
        }
    }
}

impl Persona {
    /// All personas in display order.
    pub const ALL: [Self; 3] = [Self::Conservation, Self::Nonprofit, Self::Teen];

    /// Lowercase identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Conservation => "conservation",
            Self::Nonprofit => "nonprofit",
            Self::Teen => "teen",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|tab| tab.as_str() == wanted).ok_or_else(|| {
            format!("unknown tab '{s}' (expected one of: intake, compose, work, rag, admin)")
        })
    }
}

impl FromStr for Persona {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|persona| persona.as_str() == wanted).ok_or_else(|| {
            format!("unknown persona '{s}' (expected one of: conservation, nonprofit, teen)")
        })
    }
}
