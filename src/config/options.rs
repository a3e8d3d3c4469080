// src/config/options.rs
use std::fmt;

use super::consts::*;
use crate::error::{Error, Result};

/// Directions API key. Redacted in `Debug`/`Display` so it cannot leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Read the key from `DIRECTIONS_API_KEY`, honouring a `.env` file.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        match std::env::var(API_KEY_ENV) {
            Ok(v) if !v.trim().is_empty() => Ok(Self(v.trim().to_string())),
            _ => Err(Error::Config(format!("{API_KEY_ENV} is not set"))),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// How stadium and club are combined into the destination query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DestinationStyle {
    /// `"{stadium}, {club}"`
    #[default]
    Separated,
    /// `"{stadium}{club}"` with no separator. Kept for comparison with older runs;
    /// tends to confuse the geocoder.
    Concatenated,
}

#[derive(Clone, Debug)]
pub struct RunOptions {
    pub source_url: String,
    pub origin: String,
    pub endpoint: String,
    pub api_key: ApiKey,
    pub destination_style: DestinationStyle,
    workers: usize,
    pub pause_ms: u64,
}

impl RunOptions {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            source_url: SOURCE_URL.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            endpoint: DIRECTIONS_ENDPOINT.to_string(),
            api_key,
            destination_style: DestinationStyle::default(),
            workers: DEFAULT_WORKERS,
            pause_ms: REQUEST_PAUSE_MS,
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Clamp to `1..=MAX_WORKERS`.
    pub fn set_workers(&mut self, n: usize) {
        self.workers = n.clamp(1, MAX_WORKERS);
    }

    pub fn with_workers(mut self, n: usize) -> Self {
        self.set_workers(n);
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_destination_style(mut self, style: DestinationStyle) -> Self {
        self.destination_style = style;
        self
    }

    pub fn with_pause_ms(mut self, ms: u64) -> Self {
        self.pause_ms = ms;
        self
    }
}
