use crate::cli::credentials::Credentials;
use anyhow::Context;
use log::{debug, info};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::StatusCode;
use std::error::Error;
use std::time::Duration;
use url::Url;

pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Result of the reachability check against the REST root
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// any HTTP response, whatever its status
    Reachable(StatusCode),
    /// transport failure or timeout, rendered as text
    Failed(String),
}

#[cfg_attr(test, mockall::automock)]
pub trait ConnectionCheck {
    fn check(&self) -> ProbeOutcome;
}

/// Blocking client carrying the project's api key on every request
pub struct RestClient {
    client: reqwest::blocking::Client,
    root: Url,
}

impl RestClient {
    pub fn new(credentials: &Credentials, timeout: Duration) -> Result<RestClient, anyhow::Error> {
        let client = reqwest::blocking::Client::builder()
            .default_headers(Self::headers(&credentials.key)?)
            .timeout(timeout)
            .build()
            .context("couldn't build the http client")?;

        Ok(RestClient {
            client,
            root: credentials.rest_root(),
        })
    }

    fn headers(key: &str) -> Result<HeaderMap, anyhow::Error> {
        let mut api_key = HeaderValue::from_str(key).context("api key is not a valid header")?;
        api_key.set_sensitive(true);

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", key))
            .context("api key is not a valid header")?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", api_key);
        headers.insert(header::AUTHORIZATION, bearer);
        Ok(headers)
    }

    pub(crate) fn root(&self) -> &Url {
        &self.root
    }
}

impl ConnectionCheck for RestClient {
    fn check(&self) -> ProbeOutcome {
        debug!("GET {}", self.root);

        match self.client.get(self.root.clone()).send() {
            Ok(res) => {
                info!("{} answered with {}", self.root, res.status());
                ProbeOutcome::Reachable(res.status())
            }
            Err(e) => ProbeOutcome::Failed(describe(&e)),
        }
    }
}

// reqwest's own message hides the cause (refused, dns, timeout) in the source chain
fn describe(err: &reqwest::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !msg.contains(&text) {
            msg.push_str(": ");
            msg.push_str(&text);
        }
        source = cause.source();
    }
    msg
}
