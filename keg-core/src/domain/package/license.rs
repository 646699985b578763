// keg-core/src/domain/package/license.rs

use serde::{Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;

/// Informational license tag. Unknown tokens are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum License {
    Mit,
    Apache2,
    Gpl,
    Lgpl,
    Bsd,
    Mpl,
    PublicDomain,
    Proprietary,
    Other(String),
}

impl License {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Mit => "mit",
            Self::Apache2 => "apache-2.0",
            Self::Gpl => "gpl",
            Self::Lgpl => "lgpl",
            Self::Bsd => "bsd",
            Self::Mpl => "mpl",
            Self::PublicDomain => "public-domain",
            Self::Proprietary => "proprietary",
            Self::Other(token) => token,
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for License {
    type Err = Infallible;

    // Cask-style symbols (`:gpl`) are accepted as well as plain tokens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().trim_start_matches(':');
        Ok(match token.to_lowercase().replace('_', "-").as_str() {
            "mit" => Self::Mit,
            "apache-2.0" | "apache2" | "apache" => Self::Apache2,
            "gpl" => Self::Gpl,
            "lgpl" => Self::Lgpl,
            "bsd" => Self::Bsd,
            "mpl" => Self::Mpl,
            "public-domain" => Self::PublicDomain,
            "proprietary" => Self::Proprietary,
            _ => Self::Other(token.to_string()),
        })
    }
}

impl Serialize for License {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
