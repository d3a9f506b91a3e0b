//! Response payloads of the guide data service.
//!
//! List endpoints wrap their records in a single-key envelope
//! (`{ "bosses": [...] }`). Decoding is tolerant: a missing list field means
//! no records, unknown fields are ignored, and a record that does not decode
//! is logged and dropped without taking its siblings with it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use nightreign_domain::{
    Achievement, Boss, Build, Character, Creature, Secret, WeaponPassive, WeaponSkill,
};

/// Why a list envelope could not be read.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnvelopeError {
    #[error("Response has no '{0}' field")]
    MissingKey(String),

    #[error("Field '{key}' is malformed: {message}")]
    Malformed { key: String, message: String },
}

/// Pull the list stored under `key` out of an envelope.
///
/// Only the envelope shape is fatal. Individual records that fail to decode
/// are skipped.
pub fn extract_list<T: DeserializeOwned>(
    mut payload: Value,
    key: &str,
) -> Result<Vec<T>, EnvelopeError> {
    let list = payload
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| EnvelopeError::MissingKey(key.to_string()))?;

    match list {
        Value::Array(records) => Ok(decode_records(records, key)),
        Value::Null => Ok(Vec::new()),
        other => Err(EnvelopeError::Malformed {
            key: key.to_string(),
            message: format!("expected a list, got {other}"),
        }),
    }
}

/// Decode each record on its own, keeping the ones that fit `T`.
fn decode_records<T: DeserializeOwned>(records: Vec<Value>, key: &str) -> Vec<T> {
    records
        .into_iter()
        .filter_map(|record| {
            let id = record.get("id").map(Value::to_string);
            match serde_json::from_value(record) {
                Ok(decoded) => Some(decoded),
                Err(e) => {
                    tracing::warn!(key, id = ?id, error = %e, "Dropping undecodable record");
                    None
                }
            }
        })
        .collect()
}

/// `deserialize_with` helper for list fields inside a larger payload. A value
/// that is not a list counts as no records.
fn tolerant_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let key = record_kind::<T>();
    match Value::deserialize(deserializer)? {
        Value::Array(records) => Ok(decode_records(records, key)),
        Value::Null => Ok(Vec::new()),
        other => {
            tracing::warn!(key, value = %other, "Ignoring non-list field");
            Ok(Vec::new())
        }
    }
}

fn record_kind<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Cross-category search result.
///
/// Walkthroughs are not searchable. `total_results` is the sum of the list
/// lengths once [`SearchResult::normalize`] has run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub total_results: usize,
    #[serde(default, deserialize_with = "tolerant_list")]
    pub bosses: Vec<Boss>,
    #[serde(default, deserialize_with = "tolerant_list")]
    pub characters: Vec<Character>,
    #[serde(default, deserialize_with = "tolerant_list")]
    pub builds: Vec<Build>,
    #[serde(default, deserialize_with = "tolerant_list")]
    pub achievements: Vec<Achievement>,
    #[serde(default, deserialize_with = "tolerant_list")]
    pub creatures: Vec<Creature>,
    #[serde(default, deserialize_with = "tolerant_list")]
    pub secrets: Vec<Secret>,
    #[serde(default, deserialize_with = "tolerant_list")]
    pub weapon_skills: Vec<WeaponSkill>,
    #[serde(default, deserialize_with = "tolerant_list")]
    pub weapon_passives: Vec<WeaponPassive>,
}

impl SearchResult {
    pub fn computed_total(&self) -> usize {
        self.bosses.len()
            + self.characters.len()
            + self.builds.len()
            + self.achievements.len()
            + self.creatures.len()
            + self.secrets.len()
            + self.weapon_skills.len()
            + self.weapon_passives.len()
    }

    /// Overwrite `total_results` with the computed sum and fill in the query
    /// when the service left it out. Returns the service-reported total if it
    /// disagreed.
    pub fn normalize(&mut self, query: &str) -> Option<usize> {
        if self.query.is_empty() {
            self.query = query.to_string();
        }
        let computed = self.computed_total();
        let reported = self.total_results;
        self.total_results = computed;
        (reported != computed).then_some(reported)
    }

    pub fn is_empty(&self) -> bool {
        self.computed_total() == 0
    }
}

/// Response of `GET /api/boss-recommendations/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BossRecommendations {
    /// Echo of the boss; older services omit it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boss: Option<Boss>,
    #[serde(default, deserialize_with = "tolerant_list")]
    pub recommended_characters: Vec<Character>,
    #[serde(default, deserialize_with = "tolerant_list")]
    pub recommended_builds: Vec<Build>,
}

/// Read the created build from a `POST /api/custom-build` response, which may
/// be the bare record or wrapped as `{ "build": .. }` / `{ "custom_build": .. }`.
pub fn created_build(payload: Value) -> Result<Build, serde_json::Error> {
    match payload {
        Value::Object(mut map) if !map.contains_key("id") => {
            let inner = map
                .remove("build")
                .or_else(|| map.remove("custom_build"))
                .unwrap_or(Value::Object(map));
            serde_json::from_value(inner)
        }
        other => serde_json::from_value(other),
    }
}
