use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("no text to analyze")]
    Validation,
    #[error("server rejected the request: {0}")]
    Application(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("an analysis is already in progress")]
    Busy,
    #[error("no sample text at index {0}")]
    UnknownSample(usize),
}

impl ClientError {
    pub fn notice(&self) -> String {
        match self {
            Self::Validation => "Please enter some text to analyze!".to_string(),
            Self::Application(message) => format!("Error: {message}"),
            Self::Transport(message) => format!("Error analyzing text: {message}"),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key} {value:?}: {reason}")]
    InvalidUrl {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("invalid {key} {value:?}: expected a whole number of seconds")]
    InvalidTimeout { key: &'static str, value: String },
}
