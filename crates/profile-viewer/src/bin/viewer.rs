use std::{io::Write, str::FromStr};

use profile_viewer::{
    ProfileOrchestrator,
    collaborators::{AvatarRenderer, AvatarViewer, PresentationSink},
    internal_clients::InternalClients,
    route::Route,
    view::{HeaderView, ProfileView},
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

/// Writes every view as a JSON line on stdout.
struct JsonLinesSink;

impl JsonLinesSink {
    fn emit(kind: &str, value: &impl serde::Serialize) {
        let line = serde_json::json!({ "kind": kind, "data": value });
        let mut stdout = std::io::stdout().lock();
        if let Err(err) = writeln!(stdout, "{line}") {
            error!("failed to write {kind}: {err}");
        }
    }
}

impl PresentationSink for JsonLinesSink {
    fn header(&mut self, header: &HeaderView) {
        Self::emit("header", header);
    }

    fn profile(&mut self, profile: &ProfileView) {
        Self::emit("profile", profile);
    }

    fn not_found(&mut self, identifier: &str) {
        Self::emit("not_found", &identifier);
    }
}

/// Stands in for the 3D viewer: only records which skin is on screen.
struct LoggedAvatar {
    image_ref: String,
}

impl AvatarViewer for LoggedAvatar {
    fn dispose(&mut self) {
        info!("avatar disposed: {}", self.image_ref);
    }
}

struct LoggedAvatarRenderer;

impl AvatarRenderer for LoggedAvatarRenderer {
    type Viewer = LoggedAvatar;

    fn create(&mut self, image_ref: &str) -> Self::Viewer {
        info!("avatar created: {image_ref}");
        LoggedAvatar {
            image_ref: image_ref.to_string(),
        }
    }
}

/// One line typed on stdin.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    Profile(&'a str),
    /// `profile` without an id.
    Usage,
    Search(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        match line.split_once(' ') {
            _ if line == "quit" => Self::Quit,
            None if line == "profile" => Self::Usage,
            Some(("profile", profile_id)) => Self::Profile(profile_id.trim()),
            _ => Self::Search(line),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let log_level = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(to_log_level)
        .unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))?;

    let clients = InternalClients::try_from_env()?;
    let path = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    let mut orchestrator = ProfileOrchestrator::new(
        clients.api,
        Route::new(path, clients.default_player),
        JsonLinesSink,
        LoggedAvatarRenderer,
    );

    orchestrator.open_current().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Quit => break,
            Command::Profile(profile_id) => {
                orchestrator.select_profile(profile_id).await;
            }
            Command::Search(input) => {
                if orchestrator.search(input).await.is_none() {
                    warn!("type a player name, `profile <id>` or `quit`");
                }
            }
            Command::Usage => warn!("usage: `profile <id>`"),
        }
    }

    Ok(())
}

fn to_log_level(env: String) -> Option<tracing::Level> {
    tracing::Level::from_str(&env.to_uppercase()).ok()
}
