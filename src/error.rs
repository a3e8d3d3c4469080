// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure or non-success HTTP status.
    #[error("Fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The expected table, header row or column was not found.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The directions service returned no usable route.
    #[error("Geocode failed: {0}")]
    Geocode(String),

    /// A route was returned but a required field is missing.
    #[error("Malformed directions response: missing {0}")]
    MalformedResponse(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn fetch(url: &str, reason: impl ToString) -> Self {
        Error::Fetch { url: url.to_string(), reason: reason.to_string() }
    }
}
