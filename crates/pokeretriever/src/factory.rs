//! Turns a fetched JSON body into the record for the request's search mode.
//!
//! Top-level abilities and moves are always built in their full form since the
//! body already carries every field. The `expanded` flag only decides whether
//! the references nested in a pokemon are resolved over the network.

use crate::prelude::*;
use futures::future::join_all;
use pokeretriever_core::modes::SearchMode;
use pokeretriever_core::payload::{
    parse, AbilityPayload, AbilitySlot, MovePayload, MoveSlot, PokemonPayload, StatSlot,
};
use pokeretriever_core::records::{AbilityEntry, MoveEntry, Pokemon, Record, StatEntry};

use crate::fetch::fetch_json;
use crate::request::Request;

pub async fn build_record(
    client: &reqwest::Client,
    request: &Request,
    body: serde_json::Value,
) -> Result<Record, Error> {
    match request.mode {
        SearchMode::Pokemon => {
            let payload: PokemonPayload = parse(body)?;
            let pokemon = if request.expanded {
                build_expanded_pokemon(client, payload).await?
            } else {
                payload.into_summary_pokemon()?
            };
            Ok(Record::Pokemon(pokemon))
        }
        SearchMode::Ability => Ok(Record::Ability(
            parse::<AbilityPayload>(body)?.into_ability()?,
        )),
        SearchMode::Move => Ok(Record::Move(parse::<MovePayload>(body)?.into_move()?)),
    }
}

/// Resolve every stat, ability and move reference concurrently
///
/// One failed sub-fetch fails the whole pokemon.
async fn build_expanded_pokemon(
    client: &reqwest::Client,
    payload: PokemonPayload,
) -> Result<Pokemon, Error> {
    log::debug!(
        "Expanding {} nested references of {}",
        payload.nested_reference_count(),
        payload.name
    );

    let (stats, abilities, moves) = futures::join!(
        join_all(payload.stats.iter().map(|slot| expand_stat(client, slot))),
        join_all(payload.abilities.iter().map(|slot| expand_ability(client, slot))),
        join_all(payload.moves.iter().map(|slot| expand_move(client, slot)))
    );

    let stats = stats.into_iter().collect::<Result<Vec<_>, _>>()?;
    let abilities = abilities.into_iter().collect::<Result<Vec<_>, _>>()?;
    let moves = moves.into_iter().collect::<Result<Vec<_>, _>>()?;

    Ok(payload.into_pokemon(stats, abilities, moves))
}

async fn expand_stat(client: &reqwest::Client, slot: &StatSlot) -> Result<StatEntry, Error> {
    let body = fetch_json(client, &slot.stat.url).await?;
    Ok(slot.expanded(parse(body)?))
}

async fn expand_ability(
    client: &reqwest::Client,
    slot: &AbilitySlot,
) -> Result<AbilityEntry, Error> {
    let body = fetch_json(client, &slot.ability.url).await?;
    let ability = parse::<AbilityPayload>(body)?.into_ability()?;
    Ok(AbilityEntry::Expanded(ability))
}

async fn expand_move(client: &reqwest::Client, slot: &MoveSlot) -> Result<MoveEntry, Error> {
    let body = fetch_json(client, &slot.reference.url).await?;
    let mv = parse::<MovePayload>(body)?.into_move()?;
    Ok(MoveEntry::Expanded(mv))
}
