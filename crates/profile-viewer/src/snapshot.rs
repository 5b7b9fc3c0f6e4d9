//! The current player record and the fallback rules used to pick a profile and a member.

use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::api::endpoints::{MemberRecord, PlayerResponse};

/// One of the player's profiles, as offered in the profile picker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileOption {
    pub id: String,
    pub name: String,
}

/// Everything known about the selected player.
///
/// Replaced as a whole on every successful player fetch and reset to
/// [`PlayerSnapshot::default`] when a fetch fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayerSnapshot {
    pub id: Uuid,
    pub name: String,
    pub rank: Option<String>,
    /// In the order the player API listed them.
    pub profiles: Vec<ProfileOption>,
    pub active_profile_id: Option<String>,
}

impl PlayerSnapshot {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn profile(&self, profile_id: &str) -> Option<&ProfileOption> {
        self.profiles.iter().find(|profile| profile.id == profile_id)
    }

    pub fn active_profile(&self) -> Option<&ProfileOption> {
        self.active_profile_id
            .as_deref()
            .and_then(|id| self.profile(id))
    }

    /// A new snapshot with `profile_id` as the active profile.
    #[must_use]
    pub fn with_active_profile(&self, profile_id: &str) -> Self {
        Self {
            active_profile_id: Some(profile_id.to_string()),
            ..self.clone()
        }
    }
}

impl From<PlayerResponse> for PlayerSnapshot {
    fn from(response: PlayerResponse) -> Self {
        let profiles: Vec<ProfileOption> = response
            .profiles
            .into_iter()
            .map(|(id, meta)| ProfileOption {
                id,
                name: meta.name,
            })
            .collect();
        let active_profile_id =
            ActiveProfilePolicy::resolve(response.active_profile_id.as_deref(), &profiles)
                .map(|choice| choice.profile_id().to_string());

        Self {
            id: response.id,
            name: response.name,
            rank: response.rank,
            profiles,
            active_profile_id,
        }
    }
}

/// Which rule picked the active profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileChoice {
    /// The player API marked this profile as active.
    Marked(String),
    /// Nothing usable was marked, the first listed profile was taken.
    FirstListed(String),
}

impl ProfileChoice {
    pub fn profile_id(&self) -> &str {
        match self {
            Self::Marked(id) | Self::FirstListed(id) => id,
        }
    }
}

/// Prefer the profile the API marked active, else the first one listed.
///
/// A marked id that is not among the player's profiles counts as unmarked.
pub struct ActiveProfilePolicy;

impl ActiveProfilePolicy {
    pub fn resolve(marked: Option<&str>, profiles: &[ProfileOption]) -> Option<ProfileChoice> {
        if let Some(marked) = marked {
            if profiles.iter().any(|profile| profile.id == marked) {
                return Some(ProfileChoice::Marked(marked.to_string()));
            }
            warn!("active profile `{marked}` is not one of the player's profiles");
        }
        profiles
            .first()
            .map(|profile| ProfileChoice::FirstListed(profile.id.clone()))
    }
}

/// How the member record of a profile was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberMatch {
    /// The member id is the player's stable id.
    Exact,
    /// No member carried the player's id, the first listed member was taken.
    FirstListed,
}

/// Find the player's own member record, else fall back to the first member.
pub struct MemberPolicy;

impl MemberPolicy {
    pub fn select<'a>(
        player_id: &Uuid,
        members: &'a [(String, MemberRecord)],
    ) -> Option<(MemberMatch, &'a str, &'a MemberRecord)> {
        let exact = members
            .iter()
            .find(|(member_id, _)| Uuid::parse_str(member_id).is_ok_and(|id| id == *player_id));
        if let Some((member_id, member)) = exact {
            return Some((MemberMatch::Exact, member_id, member));
        }

        let (member_id, member) = members.first()?;
        warn!("player `{player_id}` is not a member, showing member `{member_id}` instead");
        Some((MemberMatch::FirstListed, member_id, member))
    }
}
