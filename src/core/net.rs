// src/core/net.rs
// Blocking HTTP GET helpers (ureq).

use std::time::Duration;

use crate::config::consts::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

pub fn agent() -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout_connect(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout_read(Duration::from_secs(READ_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
}

/// GET `url` and return the body as text.
/// Non-2xx statuses and transport failures become `Error::Fetch`.
pub fn http_get(agent: &ureq::Agent, url: &str) -> Result<String> {
    http_get_logged(agent, url, url)
}

/// Like `http_get`, but errors and logs name `shown_url` instead of `url`
/// (used when the real URL carries a secret).
pub fn http_get_logged(agent: &ureq::Agent, url: &str, shown_url: &str) -> Result<String> {
    log::debug!("GET {shown_url}");
    let resp = match agent.get(url).call() {
        Ok(resp) => resp,
        Err(ureq::Error::Status(code, resp)) => {
            return Err(Error::fetch(shown_url, format!("HTTP {code} {}", resp.status_text())));
        }
        Err(ureq::Error::Transport(t)) => {
            // Transport errors echo the request URL; keep only the kind.
            return Err(Error::fetch(shown_url, t.kind()));
        }
    };
    resp.into_string().map_err(|e| Error::fetch(shown_url, e))
}
