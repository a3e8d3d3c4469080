// src/geocode/directions.rs
use crate::config::ApiKey;
use crate::core::net;
use crate::error::{Error, Result};

use super::route::RouteResult;

/// A directions service. `origin` and `destination` arrive query-encoded
/// (see `plus_encode`).
pub trait Directions: Send + Sync {
    fn route(&self, origin: &str, destination: &str) -> Result<RouteResult>;
}

/// Google Directions JSON API.
pub struct GoogleDirections {
    agent: ureq::Agent,
    endpoint: String,
    key: ApiKey,
}

impl GoogleDirections {
    pub fn new(agent: ureq::Agent, endpoint: impl Into<String>, key: ApiKey) -> Self {
        Self { agent, endpoint: endpoint.into(), key }
    }

    fn url(&self, origin: &str, destination: &str, key: &str) -> String {
        format!("{}?origin={origin}&destination={destination}&key={key}", self.endpoint)
    }
}

impl Directions for GoogleDirections {
    fn route(&self, origin: &str, destination: &str) -> Result<RouteResult> {
        let url = self.url(origin, destination, self.key.expose());
        let shown = self.url(origin, destination, "<redacted>");

        let body = net::http_get_logged(&self.agent, &url, &shown)?;
        serde_json::from_str(&body)
            .map_err(|e| Error::Geocode(format!("not a directions response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_url_hides_key() {
        let d = GoogleDirections::new(net::agent(), "https://example.test/json", ApiKey::new("SECRET"));
        let shown = d.url("NG13AA", "City+Ground", "<redacted>");
        assert_eq!(
            shown,
            "https://example.test/json?origin=NG13AA&destination=City+Ground&key=<redacted>"
        );
        assert!(!shown.contains("SECRET"));
    }
}
