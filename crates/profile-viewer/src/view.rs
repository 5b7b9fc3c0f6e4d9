//! View model handed to the presentation layer. Free of any markup.

use chrono::{DateTime, Duration, Utc};
use progression::{
    Skill, SkillSheet, SkillState,
    format::{compact, grouped, long_progress, short_progress},
};
use serde::Serialize;

use crate::{
    api::endpoints::{BankAction, Banking, MemberRecord, ProfileResponse},
    snapshot::{MemberMatch, PlayerSnapshot},
};

/// Most recent bank transactions shown in the summary.
pub const RECENT_TRANSACTIONS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileOptionView {
    pub id: String,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub name: String,
    pub rank: Option<String>,
    pub active_profile: Option<String>,
    pub profiles: Vec<ProfileOptionView>,
}

impl From<&PlayerSnapshot> for HeaderView {
    fn from(player: &PlayerSnapshot) -> Self {
        let active_id = player.active_profile_id.as_deref();
        Self {
            name: player.name.clone(),
            rank: player.rank.clone(),
            active_profile: player.active_profile().map(|profile| profile.name.clone()),
            profiles: player
                .profiles
                .iter()
                .map(|profile| ProfileOptionView {
                    id: profile.id.clone(),
                    name: profile.name.clone(),
                    active: Some(profile.id.as_str()) == active_id,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionView {
    pub timestamp: DateTime<Utc>,
    pub action: BankAction,
    pub amount: f64,
    pub amount_text: String,
    pub initiator: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    pub playtime_minutes: u64,
    /// `"12h 05m"`
    pub playtime: String,
    pub first_join: Option<DateTime<Utc>>,
    pub purse: f64,
    pub purse_text: String,
    pub bank_balance: Option<f64>,
    pub bank_balance_text: Option<String>,
    pub bank_tier: Option<String>,
    /// Newest first.
    pub recent_transactions: Vec<TransactionView>,
    pub fairy_souls: u32,
    /// Collections with at least one item.
    pub collections_unlocked: usize,
    pub average_skill_level: f64,
}

impl SummaryView {
    pub fn build(member: &MemberRecord, banking: Option<&Banking>, sheet: &SkillSheet) -> Self {
        let mut history: Vec<_> = banking
            .map(|banking| banking.history.iter().collect())
            .unwrap_or_default();
        history.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Self {
            playtime_minutes: member.playtime_minutes,
            playtime: playtime_text(member.playtime_minutes),
            first_join: member.first_join,
            purse: member.purse,
            purse_text: compact(member.purse),
            bank_balance: banking.map(|banking| banking.balance),
            bank_balance_text: banking.map(|banking| compact(banking.balance)),
            bank_tier: banking.and_then(|banking| banking.tier.clone()),
            recent_transactions: history
                .into_iter()
                .take(RECENT_TRANSACTIONS)
                .map(|transaction| TransactionView {
                    timestamp: transaction.timestamp,
                    action: transaction.action,
                    amount: transaction.amount,
                    amount_text: compact(transaction.amount),
                    initiator: transaction.initiator_name.clone(),
                })
                .collect(),
            fairy_souls: member.fairy_souls,
            collections_unlocked: member
                .collections
                .values()
                .filter(|count| **count > 0)
                .count(),
            average_skill_level: sheet.average_level(),
        }
    }
}

fn playtime_text(minutes: u64) -> String {
    let playtime = i64::try_from(minutes)
        .ok()
        .and_then(Duration::try_minutes)
        .unwrap_or(Duration::MAX);
    format!(
        "{}h {:02}m",
        playtime.num_hours(),
        playtime.num_minutes() % 60
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillView {
    pub skill: Skill,
    pub name: &'static str,
    pub icon: &'static str,
    pub level: u32,
    pub level_cap: u32,
    /// `"1.2k/5k"` or `"MAX"`
    pub progress_short: String,
    /// `"1,234 / 5,000 XP"`
    pub progress_long: String,
    pub percent: f64,
    pub state: SkillState,
}

impl SkillView {
    pub fn from_sheet(sheet: &SkillSheet) -> Vec<Self> {
        sheet
            .entries()
            .iter()
            .map(|(skill, progress)| Self {
                skill: *skill,
                name: skill.display_name(),
                icon: skill.icon(),
                level: progress.level,
                level_cap: progress.level_cap,
                progress_short: short_progress(progress),
                progress_long: long_progress(progress),
                percent: progress.percent_to_next_level,
                state: progress.state(),
            })
            .collect()
    }
}

/// Everything shown for one profile of one player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub profile_id: String,
    pub member_id: String,
    pub member_match: MemberMatch,
    pub header: HeaderView,
    pub summary: SummaryView,
    pub skills: Vec<SkillView>,
}

impl ProfileView {
    pub fn build(
        player: &PlayerSnapshot,
        profile: &ProfileResponse,
        (member_match, member_id, member): (MemberMatch, &str, &MemberRecord),
    ) -> Self {
        let sheet = skill_sheet(member);
        Self {
            profile_id: profile.profile_id.clone(),
            member_id: member_id.to_string(),
            member_match,
            header: HeaderView::from(player),
            summary: SummaryView::build(member, profile.banking.as_ref(), &sheet),
            skills: SkillView::from_sheet(&sheet),
        }
    }
}

/// Progress of every skill of `member`. Missing skills count as no experience.
pub fn skill_sheet(member: &MemberRecord) -> SkillSheet {
    SkillSheet::compute(|skill| {
        let xp = member.skills.get(skill.key()).copied().unwrap_or_default();
        let bonus = member
            .level_cap_bonuses
            .get(skill.key())
            .copied()
            .unwrap_or_default();
        (xp, bonus)
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use std::collections::BTreeMap;

    use chrono::TimeZone;
    use progression::EXPERIENCE_TABLE;
    use uuid::Uuid;

    use super::*;
    use crate::{api::endpoints::BankTransaction, snapshot::ProfileOption};

    fn player() -> PlayerSnapshot {
        PlayerSnapshot {
            id: Uuid::new_v4(),
            name: "Steve".to_string(),
            rank: Some("MVP".to_string()),
            profiles: vec![
                ProfileOption {
                    id: "p1".to_string(),
                    name: "Apple".to_string(),
                },
                ProfileOption {
                    id: "p2".to_string(),
                    name: "Banana".to_string(),
                },
            ],
            active_profile_id: Some("p2".to_string()),
        }
    }

    fn member() -> MemberRecord {
        MemberRecord {
            skills: BTreeMap::from([
                ("farming".to_string(), 111_672_425.0),
                ("mining".to_string(), 100.0),
                ("combat".to_string(), 60_000_000.0),
                ("unknown".to_string(), 5_000.0),
            ]),
            level_cap_bonuses: BTreeMap::from([("farming".to_string(), 10)]),
            purse: 1_234_567.0,
            playtime_minutes: 725,
            fairy_souls: 42,
            collections: BTreeMap::from([
                ("wheat".to_string(), 10),
                ("cobblestone".to_string(), 0),
                ("log".to_string(), 3),
            ]),
            first_join: None,
        }
    }

    #[test]
    fn header_marks_active_profile() {
        let header = HeaderView::from(&player());

        assert_eq!(header.active_profile.as_deref(), Some("Banana"));
        assert_eq!(
            header.profiles.iter().map(|p| p.active).collect::<Vec<_>>(),
            vec![false, true]
        );
    }

    #[test]
    fn empty_player_header() {
        let header = HeaderView::from(&PlayerSnapshot::default());

        assert!(header.name.is_empty());
        assert!(header.active_profile.is_none());
        assert!(header.profiles.is_empty());
    }

    #[test]
    fn skills_follow_catalogue_order_and_state() {
        let skills = SkillView::from_sheet(&skill_sheet(&member()));

        assert_eq!(skills.len(), Skill::ALL.len());
        assert_eq!(skills[0].skill, Skill::Farming);
        assert_eq!(skills[0].level, 60);
        assert_eq!(skills[0].state, SkillState::Capped);
        assert_eq!(skills[0].progress_short, "MAX");
        assert_eq!(skills[1].level, 1);
        assert_eq!(skills[1].percent, 40.0);
        assert_eq!(skills[1].progress_long, "50 / 125 XP");
        assert_eq!(skills[1].state, SkillState::Active);
        // Combat has no bonus, so it stops at 50.
        assert_eq!(skills[2].level, 50);
        assert_eq!(skills[2].state, SkillState::Capped);
        assert_eq!(skills[3].state, SkillState::Empty);
        assert_eq!(skills[3].icon, "icons/skills/foraging.png");
    }

    #[test]
    fn summary_counts_and_average() {
        let banking = Banking {
            balance: 2_500_000.0,
            tier: Some("Gold".to_string()),
            history: (0..7)
                .map(|n| BankTransaction {
                    timestamp: Utc.timestamp_opt(1_700_000_000 + n * 60, 0).unwrap(),
                    action: BankAction::Deposit,
                    amount: 1_000.0 * (n as f64 + 1.0),
                    initiator_name: None,
                })
                .collect(),
        };
        let member = member();
        let sheet = skill_sheet(&member);

        let summary = SummaryView::build(&member, Some(&banking), &sheet);

        assert_eq!(summary.playtime, "12h 05m");
        assert_eq!(summary.purse_text, "1.2M");
        assert_eq!(summary.bank_balance_text.as_deref(), Some("2.5M"));
        assert_eq!(summary.recent_transactions.len(), RECENT_TRANSACTIONS);
        assert_eq!(summary.recent_transactions[0].amount, 7_000.0);
        assert_eq!(summary.collections_unlocked, 2);
        assert_eq!(summary.fairy_souls, 42);
        // (60 + 1 + 50) / 8
        assert_eq!(summary.average_skill_level, 13.9);
        assert_eq!(summary.average_skill_level, sheet.average_level());
    }

    #[test]
    fn summary_without_banking() {
        let member = MemberRecord {
            skills: Skill::AVERAGED
                .iter()
                .take(6)
                .map(|skill| (skill.key().to_string(), EXPERIENCE_TABLE[10]))
                .collect(),
            ..Default::default()
        };
        let sheet = skill_sheet(&member);

        let summary = SummaryView::build(&member, None, &sheet);

        assert_eq!(summary.bank_balance, None);
        assert!(summary.recent_transactions.is_empty());
        assert_eq!(summary.playtime, "0h 00m");
        // Six skills at 10 and two untouched, over the eight averaged skills.
        assert_eq!(summary.average_skill_level, 7.5);
    }

    #[test]
    fn profile_view_combines_everything() {
        let player = player();
        let profile = ProfileResponse {
            profile_id: "p2".to_string(),
            members: vec![("someone".to_string(), member())],
            banking: None,
        };
        let (member_id, member) = &profile.members[0];

        let view = ProfileView::build(&player, &profile, (MemberMatch::FirstListed, member_id, member));

        assert_eq!(view.profile_id, "p2");
        assert_eq!(view.member_id, "someone");
        assert_eq!(view.member_match, MemberMatch::FirstListed);
        assert_eq!(view.header.name, "Steve");
        assert_eq!(view.skills.len(), Skill::ALL.len());
    }
}
