//! Search modes and the endpoint table used to build request URLs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Root of the public PokeAPI service
pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

/// Resource kind queried by a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Pokemon,
    Ability,
    Move,
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [SearchMode::Pokemon, SearchMode::Ability, SearchMode::Move];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Pokemon => "pokemon",
            SearchMode::Ability => "ability",
            SearchMode::Move => "move",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| Error::InvalidMode(s.to_string()))
    }
}

/// Base URL for every search mode
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pokemon: String,
    ability: String,
    moves: String,
}

impl Endpoints {
    pub fn new(api_base: &str) -> Self {
        let root = api_base.trim_end_matches('/');
        Self {
            pokemon: format!("{root}/pokemon"),
            ability: format!("{root}/ability"),
            moves: format!("{root}/move"),
        }
    }

    pub fn base_for(&self, mode: SearchMode) -> &str {
        match mode {
            SearchMode::Pokemon => &self.pokemon,
            SearchMode::Ability => &self.ability,
            SearchMode::Move => &self.moves,
        }
    }

    /// Build the request URL for one identifier
    ///
    /// Surrounding whitespace is removed, everything else is passed through.
    /// Identifiers are not validated; a bad one surfaces as a failed fetch.
    pub fn target_url(&self, mode: SearchMode, identifier: &str) -> String {
        format!("{}/{}", self.base_for(mode), identifier.trim())
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
