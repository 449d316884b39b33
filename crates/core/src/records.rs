//! Display records for pokemon, abilities, moves and stats.
//!
//! Nested references inside a [`Pokemon`] come in two shapes: a cheap summary
//! taken straight from the pokemon payload, or the expanded record fetched from
//! the reference's own URL. Both serialize without a tag so the rendered JSON
//! only shows the fields that were actually retrieved.

use serde::Serialize;
use std::fmt;

/// Fields shared by every record kind
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PokedexObject {
    pub name: String,
    pub id: u64,
}

/// Expanded stat record
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Stat {
    #[serde(flatten)]
    pub object: PokedexObject,
    pub is_battle_only: bool,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct StatSummary {
    pub name: String,
    pub base_value: u32,
}

/// Expanded stat plus the base value only the parent pokemon knows about
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ExpandedStat {
    #[serde(flatten)]
    pub stat: Stat,
    pub base_value: u32,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum StatEntry {
    Summary(StatSummary),
    Expanded(ExpandedStat),
}

/// Expanded ability record
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Ability {
    #[serde(flatten)]
    pub object: PokedexObject,
    pub generation: String,
    pub effect: String,
    pub short_effect: String,
    pub pokemon: Vec<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct AbilitySummary {
    pub name: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum AbilityEntry {
    Summary(AbilitySummary),
    Expanded(Ability),
}

/// Expanded move record
///
/// `accuracy`, `power` and `pp` are `None` for moves where the API reports
/// `null` (status moves and a few special cases).
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Move {
    #[serde(flatten)]
    pub object: PokedexObject,
    pub generation: String,
    pub accuracy: Option<u32>,
    pub power: Option<u32>,
    pub pp: Option<u32>,
    pub damage_class: String,
    #[serde(rename = "type")]
    pub move_type: String,
    pub short_effect: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct MoveSummary {
    pub move_name: String,
    pub level_required: u32,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum MoveEntry {
    Summary(MoveSummary),
    Expanded(Move),
}

/// Creature record
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Pokemon {
    #[serde(flatten)]
    pub object: PokedexObject,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    pub types: Vec<String>,
    pub stats: Vec<StatEntry>,
    pub abilities: Vec<AbilityEntry>,
    pub moves: Vec<MoveEntry>,
}

/// One record per search mode
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Record {
    Pokemon(Pokemon),
    Ability(Ability),
    Move(Move),
}

impl Record {
    pub fn object(&self) -> &PokedexObject {
        match self {
            Record::Pokemon(pokemon) => &pokemon.object,
            Record::Ability(ability) => &ability.object,
            Record::Move(mv) => &mv.object,
        }
    }

    /// Pretty JSON rendering of the record
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn optional(value: Option<u32>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

fn json_list<T: Serialize>(items: &[T]) -> Result<String, fmt::Error> {
    serde_json::to_string_pretty(items).map_err(|_| fmt::Error)
}

impl fmt::Display for Pokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pokemon: {}", self.object.name)?;
        writeln!(f, "ID: {}", self.object.id)?;
        writeln!(f, "Height: {} decimetres", self.height)?;
        writeln!(f, "Weight: {} hectograms", self.weight)?;
        writeln!(f, "Types: {}", self.types.join(", "))?;
        writeln!(f, "Stats: {}", json_list(&self.stats)?)?;
        writeln!(f, "Abilities: {}", json_list(&self.abilities)?)?;
        write!(f, "Moves: {}", json_list(&self.moves)?)
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.object.name)?;
        writeln!(f, "ID: {}", self.object.id)?;
        writeln!(f, "Generation: {}", self.generation)?;
        writeln!(f, "Effect: {}", self.effect)?;
        writeln!(f, "Short Effect: {}", self.short_effect)?;
        write!(f, "Pokemon: {}", self.pokemon.join(", "))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.object.name)?;
        writeln!(f, "ID: {}", self.object.id)?;
        writeln!(f, "Generation: {}", self.generation)?;
        writeln!(f, "Accuracy: {}", optional(self.accuracy))?;
        writeln!(f, "PP: {}", optional(self.pp))?;
        writeln!(f, "Power: {}", optional(self.power))?;
        writeln!(f, "Type: {}", self.move_type)?;
        writeln!(f, "Damage Class: {}", self.damage_class)?;
        write!(f, "Short Effect: {}", self.short_effect)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Pokemon(pokemon) => fmt::Display::fmt(pokemon, f),
            Record::Ability(ability) => fmt::Display::fmt(ability, f),
            Record::Move(mv) => fmt::Display::fmt(mv, f),
        }
    }
}
