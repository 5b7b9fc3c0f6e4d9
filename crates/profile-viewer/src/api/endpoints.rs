use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, Map, serde_as};
use uuid::Uuid;

pub const PLAYER_PATH: (reqwest::Method, &str) = (reqwest::Method::GET, "/player");

/// Player summary. Profiles keep the order the API listed them in.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde_as(as = "DefaultOnNull<Map<_, _>>")]
    #[serde(default)]
    pub profiles: Vec<(String, ProfileMeta)>,
    #[serde(default)]
    pub active_profile_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileMeta {
    pub name: String,
}

pub const PROFILE_PATH: (reqwest::Method, &str) = (reqwest::Method::GET, "/profile");

#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileResponse {
    pub profile_id: String,
    #[serde_as(as = "DefaultOnNull<Map<_, _>>")]
    #[serde(default)]
    pub members: Vec<(String, MemberRecord)>,
    #[serde(default)]
    pub banking: Option<Banking>,
}

#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MemberRecord {
    /// Skill key to cumulative experience.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub skills: BTreeMap<String, f64>,
    /// Skill key to extra levels above the default cap.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub level_cap_bonuses: BTreeMap<String, u32>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub purse: f64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub playtime_minutes: u64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub fairy_souls: u32,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub collections: BTreeMap<String, u64>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub first_join: Option<DateTime<Utc>>,
}

#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Banking {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub history: Vec<BankTransaction>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BankTransaction {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub action: BankAction,
    pub amount: f64,
    #[serde(default)]
    pub initiator_name: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BankAction {
    Deposit,
    Withdraw,
}

pub const SKIN_PATH: (reqwest::Method, &str) = (reqwest::Method::GET, "/skin");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SkinResponse {
    /// Image reference handed to the avatar viewer.
    pub skin: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn deser_player_keeps_profile_order() {
        let json = r#"{
            "id": "3f0c1d2e-6b1a-4c3e-9d2f-0a1b2c3d4e5f",
            "name": "Steve",
            "rank": "MVP+",
            "profiles": {
                "zz-last-alphabetically": {"name": "Zucchini"},
                "aa-first-alphabetically": {"name": "Apple"}
            }
        }"#;

        let player: PlayerResponse = serde_json::from_str(json).unwrap();

        assert_eq!(player.name, "Steve");
        assert_eq!(player.rank.as_deref(), Some("MVP+"));
        assert_eq!(player.active_profile_id, None);
        assert_eq!(player.profiles[0].0, "zz-last-alphabetically");
        assert_eq!(player.profiles[1].1.name, "Apple");
    }

    #[test]
    fn deser_player_with_null_profiles() {
        let json = r#"{"id": "3f0c1d2e6b1a4c3e9d2f0a1b2c3d4e5f", "name": "Alex", "profiles": null}"#;

        let player: PlayerResponse = serde_json::from_str(json).unwrap();

        assert!(player.profiles.is_empty());
        assert_eq!(
            player.id,
            Uuid::parse_str("3f0c1d2e-6b1a-4c3e-9d2f-0a1b2c3d4e5f").unwrap()
        );
    }

    #[test]
    fn deser_profile_with_banking_and_sparse_member() {
        let json = r#"{
            "profile_id": "p1",
            "members": {
                "3f0c1d2e6b1a4c3e9d2f0a1b2c3d4e5f": {
                    "skills": {"farming": 100.5, "mining": 0},
                    "level_cap_bonuses": {"farming": 10},
                    "purse": null,
                    "first_join": 1600000000000
                }
            },
            "banking": {
                "balance": 1500.25,
                "tier": "Gold",
                "history": [
                    {"timestamp": 1700000000000, "action": "DEPOSIT", "amount": 250.0, "initiator_name": "Steve"},
                    {"timestamp": 1700000100000, "action": "WITHDRAW", "amount": 20.0}
                ]
            }
        }"#;

        let profile: ProfileResponse = serde_json::from_str(json).unwrap();
        let (member_id, member) = &profile.members[0];

        assert_eq!(member_id, "3f0c1d2e6b1a4c3e9d2f0a1b2c3d4e5f");
        assert_eq!(member.skills["farming"], 100.5);
        assert_eq!(member.level_cap_bonuses["farming"], 10);
        assert_eq!(member.purse, 0.0);
        assert_eq!(member.playtime_minutes, 0);
        assert_eq!(
            member.first_join.map(|dt| dt.timestamp()),
            Some(1_600_000_000)
        );

        let banking = profile.banking.unwrap();
        assert_eq!(banking.tier.as_deref(), Some("Gold"));
        assert_eq!(banking.history[0].action, BankAction::Deposit);
        assert_eq!(banking.history[1].initiator_name, None);
    }

    #[test]
    fn deser_skin() {
        let skin: SkinResponse =
            serde_json::from_str(r#"{"skin": "https://textures.example/abc.png"}"#).unwrap();

        assert_eq!(skin.skin, "https://textures.example/abc.png");
    }
}
