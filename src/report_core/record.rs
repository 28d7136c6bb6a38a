//! Roster players and provider-owned match stat-lines

use serde::{Deserialize, Deserializer, Serialize};

/// A tracked player. Identity is the provider-assigned `player_id`; the
/// nickname is display data and may drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub nickname: String,
    pub player_id: String,
}

/// One player's stat-line from one match, as reported by the provider.
///
/// The wire format encodes numeric stats as JSON strings
/// (`"Kills": "20"`), so the integer fields carry a string adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "Player Id")]
    pub player_id: String,
    #[serde(rename = "Nickname")]
    pub nickname: String,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Kills", deserialize_with = "stat_u32")]
    pub kills: u32,
    #[serde(rename = "Deaths", deserialize_with = "stat_u32")]
    pub deaths: u32,
    #[serde(rename = "Headshots", deserialize_with = "stat_u32")]
    pub headshots: u32,
    #[serde(rename = "Result", deserialize_with = "stat_u32")]
    pub result: u32,
}

impl MatchRecord {
    /// Result flag semantics: 1 = win, anything else = loss.
    pub fn is_win(&self) -> bool {
        self.result == 1
    }
}

/// Accepts either a string-encoded integer (the provider's usual shape) or
/// a bare JSON number.
fn stat_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        Text(String),
        Number(u32),
    }

    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
        StringOrNumber::Number(n) => Ok(n),
    }
}
