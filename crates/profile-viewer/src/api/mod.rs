use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::endpoints::{
    PLAYER_PATH, PROFILE_PATH, PlayerResponse, ProfileResponse, SKIN_PATH, SkinResponse,
};

pub mod endpoints;
pub mod helpers;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid base url `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("base url `{0}` cannot carry a path")]
    CannotBeABase(String),
    #[error("request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("`{url}` answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// Client for the player, profile and skin APIs.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
    player_url: Url,
    profile_url: Url,
    skin_url: Url,
}

impl ApiClient {
    pub fn try_new(
        http_client: reqwest::Client,
        player_base: &str,
        profile_base: &str,
        skin_base: &str,
    ) -> Result<Self, Error> {
        Ok(Self {
            http_client,
            player_url: parse_base(player_base)?,
            profile_url: parse_base(profile_base)?,
            skin_url: parse_base(skin_base)?,
        })
    }

    /// `GET /player/{identifier}`
    pub async fn fetch_player(&self, identifier: &str) -> Result<PlayerResponse, Error> {
        self.get_json(&self.player_url, PLAYER_PATH, identifier).await
    }

    /// `GET /profile/{profile_id}`
    pub async fn fetch_profile(&self, profile_id: &str) -> Result<ProfileResponse, Error> {
        self.get_json(&self.profile_url, PROFILE_PATH, profile_id)
            .await
    }

    /// `GET /skin/{identifier}`
    pub async fn fetch_skin(&self, identifier: &str) -> Result<SkinResponse, Error> {
        self.get_json(&self.skin_url, SKIN_PATH, identifier).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        base: &Url,
        (method, path): (reqwest::Method, &str),
        key: &str,
    ) -> Result<T, Error> {
        let url = endpoint_url(base, path, key)?;
        debug!("{method} {url}");

        let response = self.http_client.request(method, url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn parse_base(base: &str) -> Result<Url, Error> {
    let url = Url::parse(base).map_err(|err| Error::InvalidBaseUrl {
        url: base.to_string(),
        reason: err.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(Error::CannotBeABase(base.to_string()));
    }
    Ok(url)
}

/// Appends `path` and the percent-encoded `key` to `base`.
fn endpoint_url(base: &Url, path: &str, key: &str) -> Result<Url, Error> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| Error::CannotBeABase(base.to_string()))?
        .pop_if_empty()
        .extend(path.split('/').filter(|segment| !segment.is_empty()))
        .push(key);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_keeps_base_path() {
        let base = parse_base("http://127.0.0.1:8080/api/v1/").unwrap();

        let url = endpoint_url(&base, PLAYER_PATH.1, "Steve").unwrap();

        assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/v1/player/Steve");
    }

    #[test]
    fn endpoint_escapes_identifier() {
        let base = parse_base("http://127.0.0.1:8080").unwrap();

        let url = endpoint_url(&base, SKIN_PATH.1, "Some Player/..").unwrap();

        assert_eq!(url.as_str(), "http://127.0.0.1:8080/skin/Some%20Player%2F..");
    }

    #[test]
    fn invalid_base_urls() {
        assert!(matches!(
            parse_base("not a url"),
            Err(Error::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            parse_base("mailto:someone@example.com"),
            Err(Error::CannotBeABase(_))
        ));
    }
}
