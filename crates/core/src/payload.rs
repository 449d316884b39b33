//! PokeAPI response shapes and the pure transforms that turn them into records.
//!
//! Only the fields the records need are modelled; everything else in the
//! response is ignored. A missing field surfaces as [`Error::Shape`].

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::records::{
    Ability, AbilityEntry, AbilitySummary, ExpandedStat, Move, MoveEntry, MoveSummary,
    PokedexObject, Pokemon, Stat, StatEntry, StatSummary,
};
use crate::Error;

/// Language whose effect text is rendered
pub const EFFECT_LANGUAGE: &str = "en";

/// Decode a JSON body into one of the payload shapes below
pub fn parse<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, Error> {
    serde_json::from_value(value).map_err(|e| Error::Shape(e.to_string()))
}

#[derive(Debug, Deserialize, Clone)]
pub struct Named {
    pub name: String,
}

/// Reference to another resource, expandable through its `url`
#[derive(Debug, Deserialize, Clone)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EffectEntry {
    pub effect: String,
    pub short_effect: String,
    pub language: Named,
}

fn english_effect<'a>(entries: &'a [EffectEntry], owner: &str) -> Result<&'a EffectEntry, Error> {
    entries
        .iter()
        .find(|entry| entry.language.name == EFFECT_LANGUAGE)
        .ok_or_else(|| Error::Shape(format!("no English effect entry for {owner}")))
}

#[derive(Debug, Deserialize, Clone)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: Named,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

impl StatSlot {
    pub fn summary(&self) -> StatEntry {
        StatEntry::Summary(StatSummary {
            name: self.stat.name.clone(),
            base_value: self.base_stat,
        })
    }

    pub fn expanded(&self, payload: StatPayload) -> StatEntry {
        StatEntry::Expanded(ExpandedStat {
            stat: payload.into_stat(),
            base_value: self.base_stat,
        })
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

impl AbilitySlot {
    pub fn summary(&self) -> AbilityEntry {
        AbilityEntry::Summary(AbilitySummary {
            name: self.ability.name.clone(),
        })
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct VersionGroupDetail {
    pub level_learned_at: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub reference: NamedResource,
    pub version_group_details: Vec<VersionGroupDetail>,
}

impl MoveSlot {
    /// Level from the first listed version group
    pub fn level_required(&self) -> Result<u32, Error> {
        self.version_group_details
            .first()
            .map(|detail| detail.level_learned_at)
            .ok_or_else(|| {
                Error::Shape(format!(
                    "move {} has no version group details",
                    self.reference.name
                ))
            })
    }

    pub fn summary(&self) -> Result<MoveEntry, Error> {
        Ok(MoveEntry::Summary(MoveSummary {
            move_name: self.reference.name.clone(),
            level_required: self.level_required()?,
        }))
    }
}

/// Body of `GET /pokemon/{id or name}`
#[derive(Debug, Deserialize, Clone)]
pub struct PokemonPayload {
    pub id: u64,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatSlot>,
    pub abilities: Vec<AbilitySlot>,
    pub moves: Vec<MoveSlot>,
}

impl PokemonPayload {
    /// Number of references an expanded build resolves over the network
    pub fn nested_reference_count(&self) -> usize {
        self.stats.len() + self.abilities.len() + self.moves.len()
    }

    /// Build the pokemon with every nested reference in summary form
    pub fn into_summary_pokemon(self) -> Result<Pokemon, Error> {
        let stats = self.stats.iter().map(StatSlot::summary).collect();
        let abilities = self.abilities.iter().map(AbilitySlot::summary).collect();
        let moves = self
            .moves
            .iter()
            .map(MoveSlot::summary)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.into_pokemon(stats, abilities, moves))
    }

    /// Combine the payload's own fields with already resolved nested entries
    pub fn into_pokemon(
        self,
        stats: Vec<StatEntry>,
        abilities: Vec<AbilityEntry>,
        moves: Vec<MoveEntry>,
    ) -> Pokemon {
        Pokemon {
            object: PokedexObject {
                name: self.name,
                id: self.id,
            },
            height: self.height,
            weight: self.weight,
            types: self.types.into_iter().map(|slot| slot.kind.name).collect(),
            stats,
            abilities,
            moves,
        }
    }
}

/// Body of `GET /stat/{id}`
#[derive(Debug, Deserialize, Clone)]
pub struct StatPayload {
    pub id: u64,
    pub name: String,
    pub is_battle_only: bool,
}

impl StatPayload {
    pub fn into_stat(self) -> Stat {
        Stat {
            object: PokedexObject {
                name: self.name,
                id: self.id,
            },
            is_battle_only: self.is_battle_only,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AbilityPokemon {
    pub pokemon: Named,
}

/// Body of `GET /ability/{id or name}`
#[derive(Debug, Deserialize, Clone)]
pub struct AbilityPayload {
    pub id: u64,
    pub name: String,
    pub generation: Named,
    pub effect_entries: Vec<EffectEntry>,
    pub pokemon: Vec<AbilityPokemon>,
}

impl AbilityPayload {
    pub fn into_ability(self) -> Result<Ability, Error> {
        let entry = english_effect(&self.effect_entries, &self.name)?;
        let effect = entry.effect.clone();
        let short_effect = entry.short_effect.clone();

        Ok(Ability {
            object: PokedexObject {
                name: self.name,
                id: self.id,
            },
            generation: self.generation.name,
            effect,
            short_effect,
            pokemon: self
                .pokemon
                .into_iter()
                .map(|entry| entry.pokemon.name)
                .collect(),
        })
    }
}

/// Body of `GET /move/{id or name}`
#[derive(Debug, Deserialize, Clone)]
pub struct MovePayload {
    pub id: u64,
    pub name: String,
    pub generation: Named,
    pub accuracy: Option<u32>,
    pub power: Option<u32>,
    pub pp: Option<u32>,
    pub damage_class: Named,
    #[serde(rename = "type")]
    pub move_type: Named,
    pub effect_entries: Vec<EffectEntry>,
}

impl MovePayload {
    pub fn into_move(self) -> Result<Move, Error> {
        let short_effect = english_effect(&self.effect_entries, &self.name)?
            .short_effect
            .clone();

        Ok(Move {
            object: PokedexObject {
                name: self.name,
                id: self.id,
            },
            generation: self.generation.name,
            accuracy: self.accuracy,
            power: self.power,
            pp: self.pp,
            damage_class: self.damage_class.name,
            move_type: self.move_type.name,
            short_effect,
        })
    }
}
