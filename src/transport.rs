// SPDX-License-Identifier: MPL-2.0
//! HTTP collaborators for the locale document fetch and form submission.
//!
//! The core never talks to the network directly: it consumes the
//! [`LocaleTransport`] and [`crate::forms::FormTransport`] traits, and this
//! module provides the `reqwest`-backed production implementations. Both
//! are single-request, fire-and-forget adapters — no retry, no
//! cancellation; errors surface as [`crate::error::Error::Transport`] and
//! are degraded by the callers.

use crate::config::ConsoleConfig;
use crate::error::Result;
use crate::forms::{FormResponse, FormTransport};

/// Fetches the locale description document.
pub trait LocaleTransport {
    fn fetch_document(&self) -> Result<String>;
}

/// Production fetcher for `<base>/static/page/languages.xml?v=<version>`.
pub struct HttpLocaleTransport {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpLocaleTransport {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            url: config.language_document_url(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// The fully-qualified document URL, version cache-buster included.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl LocaleTransport for HttpLocaleTransport {
    fn fetch_document(&self) -> Result<String> {
        let response = self.client.get(&self.url).send()?.error_for_status()?;
        Ok(response.text()?)
    }
}

/// Production form poster decoding the console's `{status, msg}` payload.
#[derive(Default)]
pub struct HttpFormTransport {
    client: reqwest::blocking::Client,
}

impl HttpFormTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormTransport for HttpFormTransport {
    fn post(&self, url: &str, fields: &[(String, String)]) -> Result<FormResponse> {
        let response = self
            .client
            .post(url)
            .form(fields)
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }
}
