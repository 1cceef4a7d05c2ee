//! Domain identifier types with proper encapsulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Classic league identifier - newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueId(u64);

impl LeagueId {
    /// Create a new `LeagueId`.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The upstream API only knows positive identifiers.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for LeagueId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl FromStr for LeagueId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Team entry identifier (one manager's team) - newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(u64);

impl TeamId {
    /// Create a new `TeamId`.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TeamId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

/// Gameweek (event) identifier.
///
/// Gameweeks are numbered from 1; [`GameweekId::FIRST`] is the fallback
/// whenever no gameweek is flagged as current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameweekId(u32);

impl GameweekId {
    pub const FIRST: Self = Self(1);

    /// Create a new `GameweekId`.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw identifier.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl Default for GameweekId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for GameweekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GW {}", self.0)
    }
}

impl From<u32> for GameweekId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}
