use crate::errors::ConfigError;
use reqwest::Url;
use std::{env, time::Duration};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub timeout: Option<Duration>,
    pub color: bool,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = resolve_base_url(&lookup)?;

        let timeout = match lookup("SENTIMENT_TIMEOUT_SECS") {
            Some(value) => {
                let secs = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidTimeout {
                        key: "SENTIMENT_TIMEOUT_SECS",
                        value: value.clone(),
                    })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        // https://no-color.org: any non-empty value disables color
        let color = lookup("NO_COLOR").is_none_or(|value| value.is_empty());

        Ok(Self {
            base_url,
            timeout,
            color,
        })
    }
}

fn resolve_base_url(lookup: &impl Fn(&str) -> Option<String>) -> Result<Url, ConfigError> {
    if let Some(value) = lookup("SENTIMENT_API_URL") {
        return parse_base_url("SENTIMENT_API_URL", &value);
    }

    if let Some(port) = lookup("PORT").and_then(|value| value.parse::<u16>().ok()) {
        return parse_base_url("PORT", &format!("http://127.0.0.1:{port}/"));
    }

    parse_base_url("SENTIMENT_API_URL", DEFAULT_API_URL)
}

fn parse_base_url(key: &'static str, value: &str) -> Result<Url, ConfigError> {
    let mut raw = value.trim().to_string();
    if !raw.ends_with('/') {
        raw.push('/');
    }

    let url = Url::parse(&raw).map_err(|err| ConfigError::InvalidUrl {
        key,
        value: value.to_string(),
        reason: err.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl {
            key,
            value: value.to_string(),
            reason: "not a base URL".to_string(),
        });
    }

    Ok(url)
}
