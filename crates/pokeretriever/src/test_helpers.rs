//! Fixtures and mock server setup shared by the HTTP tests.

use crate::request::{BatchSource, Request};
use pokeretriever_core::modes::SearchMode;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn create_test_request(mode: SearchMode, expanded: bool) -> Request {
    Request {
        mode,
        source: BatchSource::Single("25".to_string()),
        expanded,
        output: None,
        json: false,
    }
}

/// Pokemon payload whose nested URLs point at `base`
///
/// Holds two stats, one ability and one move.
pub fn pikachu_json(base: &str) -> Value {
    json!({
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "types": [
            { "slot": 1, "type": { "name": "electric", "url": format!("{base}/type/13/") } }
        ],
        "stats": [
            { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": format!("{base}/stat/1/") } },
            { "base_stat": 90, "effort": 2, "stat": { "name": "speed", "url": format!("{base}/stat/6/") } }
        ],
        "abilities": [
            { "is_hidden": false, "slot": 1, "ability": { "name": "static", "url": format!("{base}/ability/9/") } }
        ],
        "moves": [
            {
                "move": { "name": "thunder-shock", "url": format!("{base}/move/84/") },
                "version_group_details": [ { "level_learned_at": 1 } ]
            }
        ]
    })
}

pub const PIKACHU_NESTED_REFERENCES: usize = 4;

pub fn stat_json(id: u64, name: &str) -> Value {
    json!({ "id": id, "name": name, "is_battle_only": false })
}

pub fn ability_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "generation": { "name": "generation-iii", "url": "" },
        "effect_entries": [
            { "effect": format!("{name} effect"), "short_effect": format!("{name} short"), "language": { "name": "en", "url": "" } }
        ],
        "pokemon": [ { "is_hidden": false, "slot": 1, "pokemon": { "name": "pikachu", "url": "" } } ]
    })
}

pub fn move_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "accuracy": 100,
        "power": 40,
        "pp": 30,
        "generation": { "name": "generation-i", "url": "" },
        "damage_class": { "name": "special", "url": "" },
        "type": { "name": "electric", "url": "" },
        "effect_entries": [
            { "effect": "Inflicts regular damage.", "short_effect": format!("{name} short"), "language": { "name": "en", "url": "" } }
        ]
    })
}

pub async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount the pokemon payload and every sub-resource it references
pub async fn mount_pikachu(server: &MockServer) {
    let base = server.uri();
    mount_json(server, "/pokemon/25", pikachu_json(&base)).await;
    mount_json(server, "/stat/1/", stat_json(1, "hp")).await;
    mount_json(server, "/stat/6/", stat_json(6, "speed")).await;
    mount_json(server, "/ability/9/", ability_json(9, "static")).await;
    mount_json(server, "/move/84/", move_json(84, "thunder-shock")).await;
}

pub async fn received_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or(0)
}
