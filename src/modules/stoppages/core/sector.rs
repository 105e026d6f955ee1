use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Production line or station that can be stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sector {
    #[serde(rename = "Box-01")]
    Box01,
    #[serde(rename = "Box-02")]
    Box02,
    #[serde(rename = "Packaging")]
    Packaging,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sector: {0:?}")]
pub struct UnknownSector(pub String);

impl Sector {
    pub const ALL: [Sector; 3] = [Sector::Box01, Sector::Box02, Sector::Packaging];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sector::Box01 => "Box-01",
            Sector::Box02 => "Box-02",
            Sector::Packaging => "Packaging",
        }
    }

    /// Accepts the spellings found in older rows of the backing table.
    /// Caller input goes through [`FromStr`] instead, which is strict.
    pub fn from_stored(value: &str) -> Result<Self, UnknownSector> {
        match value {
            "caixa01" | "Caixa 01" => Ok(Sector::Box01),
            "caixa02" | "Caixa 02" => Ok(Sector::Box02),
            "embalagem" | "Embalagem" => Ok(Sector::Packaging),
            other => other.parse(),
        }
    }
}

impl FromStr for Sector {
    type Err = UnknownSector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sector::ALL
            .into_iter()
            .find(|sector| sector.as_str() == s)
            .ok_or_else(|| UnknownSector(s.to_string()))
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
