use tracing::{debug, error, info, warn};

use crate::{
    api::{
        self, ApiClient,
        endpoints::{ProfileResponse, SkinResponse},
    },
    collaborators::{AvatarRenderer, AvatarViewer, PresentationSink},
    route::{Route, is_path_segment},
    snapshot::{MemberPolicy, PlayerSnapshot},
    view::{HeaderView, ProfileView},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerLookup {
    Found,
    /// The player record was reset and the sink told.
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileLoad {
    Rendered,
    /// Nothing was sent to the sink; whatever was shown stays.
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarLoad {
    Shown,
    Unchanged,
}

/// Resolves which player, profile and member to show and feeds the sink.
///
/// Failures never leave this type: each fetch is handled on its own and
/// reported through the returned status and the logs.
pub struct ProfileOrchestrator<S, A: AvatarRenderer> {
    api: ApiClient,
    route: Route,
    player: PlayerSnapshot,
    sink: S,
    renderer: A,
    viewer: Option<A::Viewer>,
}

impl<S: PresentationSink, A: AvatarRenderer> ProfileOrchestrator<S, A> {
    pub fn new(api: ApiClient, route: Route, sink: S, renderer: A) -> Self {
        Self {
            api,
            route,
            player: PlayerSnapshot::default(),
            sink,
            renderer,
            viewer: None,
        }
    }

    pub const fn player(&self) -> &PlayerSnapshot {
        &self.player
    }

    pub const fn route(&self) -> &Route {
        &self.route
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub const fn renderer(&self) -> &A {
        &self.renderer
    }

    pub const fn viewer(&self) -> Option<&A::Viewer> {
        self.viewer.as_ref()
    }

    /// Loads the player, then their active profile and avatar.
    ///
    /// The profile and the avatar are fetched concurrently once the player is
    /// known, and each result is applied on its own.
    pub async fn open(&mut self, identifier: &str) -> PlayerLookup {
        self.route.navigate(identifier);
        let identifier = self.route.identifier().to_string();

        if self.select_player(&identifier).await == PlayerLookup::NotFound {
            return PlayerLookup::NotFound;
        }

        let Some(profile_id) = self.player.active_profile_id.clone() else {
            warn!("player `{identifier}` has no profiles");
            self.load_avatar(&identifier).await;
            return PlayerLookup::Found;
        };

        let (profile, skin) = tokio::join!(
            self.api.fetch_profile(&profile_id),
            self.api.fetch_skin(&identifier)
        );
        self.apply_profile(&profile_id, profile);
        self.apply_avatar(&identifier, skin);

        PlayerLookup::Found
    }

    /// Opens the player found at the current route.
    pub async fn open_current(&mut self) -> PlayerLookup {
        let identifier = self.route.identifier().to_string();
        self.open(&identifier).await
    }

    /// Opens the player typed into a search box.
    ///
    /// Blank input, or input that cannot stand as a single path segment, does nothing.
    pub async fn search(&mut self, input: &str) -> Option<PlayerLookup> {
        let identifier = input.trim();
        if identifier.is_empty() {
            return None;
        }
        if !is_path_segment(identifier) {
            warn!("`{identifier}` is not a player identifier");
            return None;
        }
        Some(self.open(identifier).await)
    }

    /// Fetches the player summary and replaces the current player with it.
    ///
    /// On any failure the current player is reset to an empty record, so nothing
    /// from a previously loaded player survives.
    pub async fn select_player(&mut self, identifier: &str) -> PlayerLookup {
        match self.api.fetch_player(identifier).await {
            Ok(response) => {
                self.player = PlayerSnapshot::from(response);
                info!(
                    "player `{}` ({}) loaded with {} profile(s)",
                    self.player.name,
                    self.player.id,
                    self.player.profiles.len()
                );
                self.sink.header(&HeaderView::from(&self.player));
                PlayerLookup::Found
            }
            Err(err) => {
                error!("player `{identifier}` not found: {err}");
                self.player = PlayerSnapshot::default();
                self.sink.not_found(identifier);
                PlayerLookup::NotFound
            }
        }
    }

    /// Fetches one of the current player's profiles and renders the player's member record.
    pub async fn select_profile(&mut self, profile_id: &str) -> ProfileLoad {
        if self.player.profile(profile_id).is_none() {
            warn!(
                "profile `{profile_id}` does not belong to player `{}`",
                self.player.name
            );
            return ProfileLoad::Unchanged;
        }

        let profile = self.api.fetch_profile(profile_id).await;
        self.apply_profile(profile_id, profile)
    }

    /// Fetches the skin of `identifier` and shows it in a fresh avatar viewer.
    pub async fn load_avatar(&mut self, identifier: &str) -> AvatarLoad {
        let skin = self.api.fetch_skin(identifier).await;
        self.apply_avatar(identifier, skin)
    }

    fn apply_profile(
        &mut self,
        profile_id: &str,
        profile: Result<ProfileResponse, api::Error>,
    ) -> ProfileLoad {
        let profile = match profile {
            Ok(profile) => profile,
            Err(err) => {
                error!("failed to load profile `{profile_id}`: {err}");
                return ProfileLoad::Unchanged;
            }
        };

        let Some(member) = MemberPolicy::select(&self.player.id, &profile.members) else {
            warn!("profile `{profile_id}` has no members");
            return ProfileLoad::Unchanged;
        };

        let player = self.player.with_active_profile(profile_id);
        let view = ProfileView::build(&player, &profile, member);
        self.player = player;
        debug!(
            "profile `{profile_id}` rendered for member `{}`",
            view.member_id
        );
        self.sink.profile(&view);

        ProfileLoad::Rendered
    }

    fn apply_avatar(
        &mut self,
        identifier: &str,
        skin: Result<SkinResponse, api::Error>,
    ) -> AvatarLoad {
        match skin {
            Ok(skin) => {
                if let Some(mut previous) = self.viewer.take() {
                    previous.dispose();
                }
                self.viewer = Some(self.renderer.create(&skin.skin));
                debug!("avatar for `{identifier}` shown from {}", skin.skin);
                AvatarLoad::Shown
            }
            Err(err) => {
                error!("failed to load avatar for `{identifier}`: {err}");
                AvatarLoad::Unchanged
            }
        }
    }
}
