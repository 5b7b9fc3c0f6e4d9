use std::time::Duration;

use tracing::debug;

use crate::internal_clients::Error;

pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub(crate) fn get_env_player_api() -> String {
    match std::env::var("PLAYER_API_URL") {
        Ok(url) => url,
        Err(_) => {
            debug!(".env `PLAYER_API_URL` not found. Using default.");
            "http://127.0.0.1:8080".to_string()
        }
    }
}

pub(crate) fn get_env_profile_api() -> String {
    match std::env::var("PROFILE_API_URL") {
        Ok(url) => url,
        Err(_) => {
            debug!(".env `PROFILE_API_URL` not found. Using default.");
            "http://127.0.0.1:8080".to_string()
        }
    }
}

pub(crate) fn get_env_skin_api() -> String {
    match std::env::var("SKIN_API_URL") {
        Ok(url) => url,
        Err(_) => {
            debug!(".env `SKIN_API_URL` not found. Using default.");
            "http://127.0.0.1:8080".to_string()
        }
    }
}

pub(crate) fn get_env_default_player() -> String {
    match std::env::var("DEFAULT_PLAYER") {
        Ok(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => {
            debug!(".env `DEFAULT_PLAYER` not found. Using default.");
            "Steve".to_string()
        }
    }
}

pub(crate) fn get_env_request_timeout() -> Result<Duration, Error> {
    match std::env::var("REQUEST_TIMEOUT_SECS") {
        Ok(secs) => parse_timeout(&secs),
        Err(_) => {
            debug!(".env `REQUEST_TIMEOUT_SECS` not found. Using default.");
            Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        }
    }
}

fn parse_timeout(secs: &str) -> Result<Duration, Error> {
    match secs.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(Error::InvalidTimeout(secs.to_string())),
        Ok(secs) => Ok(Duration::from_secs(secs)),
    }
}
