//! The skill catalogue and a per-player sheet of computed progress.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    progress::{SkillProgress, average_level, compute_skill_progress},
    table::{DEFAULT_LEVEL_CAP, MAX_LEVEL},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
/// A skill tracked on a player's profile, in display order.
pub enum Skill {
    /// Farming.
    Farming,
    /// Mining.
    Mining,
    /// Combat.
    Combat,
    /// Foraging.
    Foraging,
    /// Fishing.
    Fishing,
    /// Enchanting.
    Enchanting,
    /// Alchemy.
    Alchemy,
    /// Taming.
    Taming,
    /// Carpentry, displayed but not part of the average.
    Carpentry,
}

impl Skill {
    /// Every skill, in display order.
    pub const ALL: [Self; 9] = [
        Self::Farming,
        Self::Mining,
        Self::Combat,
        Self::Foraging,
        Self::Fishing,
        Self::Enchanting,
        Self::Alchemy,
        Self::Taming,
        Self::Carpentry,
    ];

    /// The fixed set of skills the average level is taken over.
    pub const AVERAGED: [Self; 8] = [
        Self::Farming,
        Self::Mining,
        Self::Combat,
        Self::Foraging,
        Self::Fishing,
        Self::Enchanting,
        Self::Alchemy,
        Self::Taming,
    ];

    #[must_use]
    /// Key used by the profile API.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Farming => "farming",
            Self::Mining => "mining",
            Self::Combat => "combat",
            Self::Foraging => "foraging",
            Self::Fishing => "fishing",
            Self::Enchanting => "enchanting",
            Self::Alchemy => "alchemy",
            Self::Taming => "taming",
            Self::Carpentry => "carpentry",
        }
    }

    #[must_use]
    /// Human readable name.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Farming => "Farming",
            Self::Mining => "Mining",
            Self::Combat => "Combat",
            Self::Foraging => "Foraging",
            Self::Fishing => "Fishing",
            Self::Enchanting => "Enchanting",
            Self::Alchemy => "Alchemy",
            Self::Taming => "Taming",
            Self::Carpentry => "Carpentry",
        }
    }

    #[must_use]
    /// Relative reference to the skill's icon.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Farming => "icons/skills/farming.png",
            Self::Mining => "icons/skills/mining.png",
            Self::Combat => "icons/skills/combat.png",
            Self::Foraging => "icons/skills/foraging.png",
            Self::Fishing => "icons/skills/fishing.png",
            Self::Enchanting => "icons/skills/enchanting.png",
            Self::Alchemy => "icons/skills/alchemy.png",
            Self::Taming => "icons/skills/taming.png",
            Self::Carpentry => "icons/skills/carpentry.png",
        }
    }

    #[must_use]
    /// Level cap before any bonus.
    pub const fn default_cap(self) -> u32 {
        DEFAULT_LEVEL_CAP
    }

    #[must_use]
    /// Level cap once `bonus` extra levels are unlocked, never above [`MAX_LEVEL`].
    pub const fn effective_cap(self, bonus: u32) -> u32 {
        let cap = self.default_cap().saturating_add(bonus);
        if cap > MAX_LEVEL { MAX_LEVEL } else { cap }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// Progress of every skill for one player, computed once.
///
/// Both the skill grid and the average level read from the same entries.
pub struct SkillSheet {
    entries: Vec<(Skill, SkillProgress)>,
}

impl SkillSheet {
    #[must_use]
    /// Computes every skill in [`Skill::ALL`] order.
    ///
    /// `lookup` returns the skill's cumulative experience and its cap bonus.
    ///
    /// # Examples
    /// ```rust
    /// use progression::{Skill, SkillSheet};
    ///
    /// let sheet = SkillSheet::compute(|skill| match skill {
    ///     Skill::Farming => (111_672_425.0, 10),
    ///     _ => (0.0, 0),
    /// });
    ///
    /// let farming = sheet.get(Skill::Farming).unwrap();
    /// assert_eq!(farming.level, 60);
    /// assert!(farming.is_at_cap);
    /// assert_eq!(sheet.average_level(), 7.5);
    /// ```
    pub fn compute(mut lookup: impl FnMut(Skill) -> (f64, u32)) -> Self {
        let entries = Skill::ALL
            .into_iter()
            .map(|skill| {
                let (xp, bonus) = lookup(skill);
                (skill, compute_skill_progress(xp, skill.effective_cap(bonus)))
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    /// Every skill with its progress, in display order.
    pub fn entries(&self) -> &[(Skill, SkillProgress)] {
        &self.entries
    }

    #[must_use]
    /// Progress of a single skill.
    pub fn get(&self, skill: Skill) -> Option<&SkillProgress> {
        self.entries
            .iter()
            .find_map(|(entry, progress)| (*entry == skill).then_some(progress))
    }

    #[must_use]
    /// Average level over [`Skill::AVERAGED`], rounded to one decimal.
    pub fn average_level(&self) -> f64 {
        let averaged: Vec<SkillProgress> = self
            .entries
            .iter()
            .filter(|(skill, _)| Skill::AVERAGED.contains(skill))
            .map(|(_, progress)| *progress)
            .collect();
        average_level(&averaged)
    }
}
