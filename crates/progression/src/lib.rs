#![deny(
    missing_docs,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    // `progression::progress::SkillProgress` reads fine
    clippy::module_name_repetitions,
    // Levels are tiny, table indices always fit in u32 and experience is tracked as f64.
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
)]
#![doc = include_str!("../README.md")]

pub mod format;
pub mod progress;
pub mod skill;
pub mod table;

pub use progress::{SkillProgress, SkillState, average_level, compute_skill_progress};
pub use skill::{Skill, SkillSheet};
pub use table::{DEFAULT_LEVEL_CAP, EXPERIENCE_TABLE, MAX_LEVEL};
