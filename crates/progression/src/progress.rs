#![allow(clippy::float_cmp)]
//! Level and in-level progress for a cumulative experience total.
//!
//! # Quickstart
//!
//! ```rust
//! use progression::{DEFAULT_LEVEL_CAP, SkillState, compute_skill_progress};
//!
//! let fresh = compute_skill_progress(0.0, DEFAULT_LEVEL_CAP);
//! assert_eq!(fresh.level, 0);
//! assert_eq!(fresh.state(), SkillState::Empty);
//!
//! // Way past the threshold of level 50: the level stops at the cap.
//! let maxed = compute_skill_progress(80_000_000.0, DEFAULT_LEVEL_CAP);
//! assert_eq!(maxed.level, 50);
//! assert!(maxed.is_at_cap);
//! assert_eq!(maxed.percent_to_next_level, 100.0);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::table::{EXPERIENCE_TABLE, MAX_LEVEL, threshold};

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// Where a skill stands for a given cumulative experience and level cap.
pub struct SkillProgress {
    /// Experience the progress was computed from, never negative.
    pub cumulative_xp: f64,
    /// The effective level cap, at most [`MAX_LEVEL`].
    pub level_cap: u32,
    /// Highest level reached, in `0..=level_cap`.
    pub level: u32,
    /// Experience gained since reaching `level`.
    pub progress_in_level: f64,
    /// Experience between `level` and the next one, `0.0` at the cap.
    pub xp_to_next_level: f64,
    /// Progress towards the next level in percent, within `0.0..=100.0`.
    /// Always `100.0` at the cap.
    pub percent_to_next_level: f64,
    /// Whether `level` equals the effective cap.
    pub is_at_cap: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
/// How a skill should be presented. Has no effect on the numbers.
pub enum SkillState {
    /// No experience at all.
    Empty,
    /// The skill reached its level cap.
    Capped,
    /// Anything in between.
    Active,
}

impl SkillState {
    #[must_use]
    /// Lowercase name, as used by the presentation layer.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Capped => "capped",
            Self::Active => "active",
        }
    }
}

impl SkillProgress {
    #[must_use]
    /// Classifies the progress for display: `Empty`, then `Capped`, else `Active`.
    pub fn state(&self) -> SkillState {
        if self.cumulative_xp <= 0.0 {
            SkillState::Empty
        } else if self.is_at_cap {
            SkillState::Capped
        } else {
            SkillState::Active
        }
    }
}

#[must_use]
/// Computes the [`SkillProgress`] of `cumulative_xp` experience under `level_cap`.
///
/// Negative or `NaN` experience counts as zero and a cap above [`MAX_LEVEL`] is
/// lowered to it. The level is the highest one, up to the cap, whose threshold
/// does not exceed the experience.
///
/// # Examples
/// ```rust
/// use progression::compute_skill_progress;
///
/// let progress = compute_skill_progress(175.0, 50);
/// assert_eq!(progress.level, 2);
/// assert_eq!(progress.progress_in_level, 0.0);
/// assert_eq!(progress.xp_to_next_level, 200.0);
///
/// let just_below = compute_skill_progress(174.0, 50);
/// assert_eq!(just_below.level, 1);
/// ```
pub fn compute_skill_progress(cumulative_xp: f64, level_cap: u32) -> SkillProgress {
    let xp = if cumulative_xp.is_nan() {
        0.0
    } else {
        cumulative_xp.max(0.0)
    };
    let cap = level_cap.min(MAX_LEVEL);

    // Thresholds strictly increase, so the walk ends at the first one above `xp`.
    let level = EXPERIENCE_TABLE
        .iter()
        .take(cap as usize + 1)
        .skip(1)
        .take_while(|&&required| required <= xp)
        .count() as u32;

    let reached = EXPERIENCE_TABLE[level as usize];
    let progress_in_level = xp - reached;
    let is_at_cap = level == cap;

    let next = if is_at_cap { None } else { threshold(level + 1) };
    let Some(next) = next else {
        return SkillProgress {
            cumulative_xp: xp,
            level_cap: cap,
            level,
            progress_in_level,
            xp_to_next_level: 0.0,
            percent_to_next_level: 100.0,
            is_at_cap,
        };
    };

    let xp_to_next_level = next - reached;
    let percent_to_next_level = if xp_to_next_level <= 0.0 {
        100.0
    } else {
        (progress_in_level / xp_to_next_level * 100.0).clamp(0.0, 100.0)
    };

    SkillProgress {
        cumulative_xp: xp,
        level_cap: cap,
        level,
        progress_in_level,
        xp_to_next_level,
        percent_to_next_level,
        is_at_cap,
    }
}

#[must_use]
/// Mean level of `skills`, rounded to one decimal. `0.0` when empty.
///
/// Takes already computed progress so callers average the very levels they display.
///
/// # Examples
/// ```rust
/// use progression::{average_level, compute_skill_progress};
///
/// let skills = [
///     compute_skill_progress(9_925.0, 50),     // 10
///     compute_skill_progress(322_425.0, 50),   // 19
///     compute_skill_progress(0.0, 50),         // 0
/// ];
/// assert_eq!(average_level(&skills), 9.7);
/// ```
pub fn average_level(skills: &[SkillProgress]) -> f64 {
    if skills.is_empty() {
        return 0.0;
    }
    let total: u32 = skills.iter().map(|skill| skill.level).sum();
    let mean = f64::from(total) / skills.len() as f64;
    (mean * 10.0).round() / 10.0
}
