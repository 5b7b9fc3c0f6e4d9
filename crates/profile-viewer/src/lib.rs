//! Fetches a player's profile from the player, profile and skin APIs and turns it
//! into a view model for a presentation layer.
//!
//! Skill numbers come from the [`progression`] crate; this crate only decides which
//! player, profile and member they are computed for.

pub mod api;
pub mod collaborators;
pub mod internal_clients;
pub mod orchestrator;
pub mod route;
pub mod snapshot;
pub mod view;

pub use orchestrator::{AvatarLoad, PlayerLookup, ProfileLoad, ProfileOrchestrator};
