use tracing::debug;

use crate::api::{
    self, ApiClient,
    helpers::{
        get_env_default_player, get_env_player_api, get_env_profile_api,
        get_env_request_timeout, get_env_skin_api,
    },
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to load .env: {0}")]
    DotenvError(#[from] dotenv::Error),
    #[error("Failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("`REQUEST_TIMEOUT_SECS` must be a positive number of seconds, got `{0}`")]
    InvalidTimeout(String),
    #[error(transparent)]
    Api(#[from] api::Error),
}

#[derive(Debug, Clone)]
pub struct InternalClients {
    pub api: ApiClient,
    /// Shown when the page path carries no player.
    pub default_player: String,
}

impl InternalClients {
    pub fn try_from_env() -> Result<Self, Error> {
        match dotenv::dotenv() {
            Ok(path) => debug!("loaded {}", path.display()),
            Err(err) if err.not_found() => debug!("no .env file, reading the environment only"),
            Err(err) => return Err(err.into()),
        }

        let http_client = reqwest::Client::builder()
            .timeout(get_env_request_timeout()?)
            .build()?;
        let api = ApiClient::try_new(
            http_client,
            &get_env_player_api(),
            &get_env_profile_api(),
            &get_env_skin_api(),
        )?;

        Ok(Self {
            api,
            default_player: get_env_default_player(),
        })
    }
}
