use serde::{Deserialize, Serialize};
use std::fmt;

/// Which stage of the fallback chain produced a logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoSourceKind {
    Clearbit,
    Brandfetch,
    Initials,
}

impl LogoSourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogoSourceKind::Clearbit => "clearbit",
            LogoSourceKind::Brandfetch => "brandfetch",
            LogoSourceKind::Initials => "initials",
        }
    }
}

impl fmt::Display for LogoSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoResult {
    pub url: String,
    pub source: LogoSourceKind,
    pub initials: String,
}

/// What a remote source reports back. Every failure mode collapses into
/// `Unavailable`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOutcome {
    Found(String),
    Unavailable,
}
