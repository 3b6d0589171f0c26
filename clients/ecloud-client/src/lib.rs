// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! eCloud API Client Library
//!
//! This client provides typed access to the eCloud REST API. Requests are
//! authenticated with an API key sent verbatim in the `Authorization`
//! header.
//!
//! ## Usage
//!
//! ```ignore
//! use ecloud_client::{Client, ClientConfig, Filter, Parameters};
//!
//! let client = Client::new(ClientConfig::new("my-api-key"))?;
//!
//! // Collection calls follow pagination and return every page
//! let params = Parameters::new().with_filter(Filter::eq("region_id", "reg-abcd1234"));
//! let vpcs = client.list_vpcs(&params).await?;
//!
//! // v2 mutations return a task that can be polled
//! let task = client.delete_instance("i-abcd1234").await?;
//! ```

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

pub mod error;
pub mod params;
mod v1;
mod v2;

pub use ecloud_api as types;
pub use error::Error;
pub use params::{Filter, FilterOperator, Parameters, Sort};
pub use v1::{TagOwner, TemplateOwner};

use ecloud_api::{ErrorResponse, Response};

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.ukfast.io";

/// Default number of items requested per page
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
    /// Skip TLS certificate verification
    pub insecure: bool,
    pub per_page: u32,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
            insecure: false,
            per_page: DEFAULT_PER_PAGE,
            user_agent: format!("ecloud-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// eCloud API client
///
/// Resource methods are grouped per API generation in the `v1` and `v2`
/// modules; this type only carries the transport.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    per_page: u32,
}

impl Client {
    /// Create a new client
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] if the base URL cannot be parsed or
    /// the API key is not a valid header value.
    ///
    /// Installs the rustls `ring` provider unless the process already has one.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let _ = rustls::crypto::ring::default_provider().install_default();

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| Error::InvalidConfig(format!("invalid base URL '{}': {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidConfig(format!(
                "base URL '{}' cannot carry a path",
                config.base_url
            )));
        }

        let mut auth = HeaderValue::from_str(&config.api_key)
            .map_err(|e| Error::InvalidConfig(format!("invalid API key: {}", e)))?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.insecure)
            .build()?;

        Ok(Self {
            http,
            base_url,
            per_page: config.per_page.max(1),
        })
    }

    /// Build an endpoint URL from path segments, percent-encoding each one
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                Error::InvalidConfig(format!("base URL '{}' cannot carry a path", self.base_url))
            })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        query: &[(String, String)],
        body: Option<serde_json::Value>,
    ) -> Result<String, Error> {
        tracing::debug!(%method, %url, ?query, "sending request");

        let mut req = self.http.request(method, url.clone());
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(body) = body {
            req = req.json(&body);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        tracing::debug!(%url, status = status.as_u16(), "received response");

        if status.is_success() {
            return Ok(text);
        }

        let errors = serde_json::from_str::<ErrorResponse>(&text)
            .map(|e| e.errors)
            .unwrap_or_default();

        if status == StatusCode::NOT_FOUND {
            let detail = errors
                .first()
                .map(|e| e.to_string())
                .unwrap_or_else(|| url.path().to_string());
            return Err(Error::NotFound {
                path: url.path().to_string(),
                detail,
            });
        }

        Err(Error::Api {
            status: status.as_u16(),
            errors,
        })
    }

    /// GET a single resource and unwrap its envelope
    pub(crate) async fn get_data<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        let text = self.send(Method::GET, url, &[], None).await?;
        let resp: Response<T> = serde_json::from_str(&text)?;
        Ok(resp.data)
    }

    /// GET one page of a collection
    pub(crate) async fn get_page<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &Parameters,
    ) -> Result<Response<Vec<T>>, Error> {
        let text = self.send(Method::GET, url, &params.to_query(), None).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// GET a collection, following pagination unless a page was requested
    pub(crate) async fn get_all<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &Parameters,
    ) -> Result<Vec<T>, Error> {
        let mut params = params.clone();
        if params.per_page.is_none() {
            params.per_page = Some(self.per_page);
        }

        if params.page.is_some() {
            return Ok(self.get_page(url, &params).await?.data);
        }

        let mut items = Vec::new();
        let mut page: u32 = 1;
        loop {
            params.page = Some(page);
            let resp = self.get_page::<T>(url.clone(), &params).await?;
            let fetched = resp.data.len();
            items.extend(resp.data);

            match resp.meta.pagination {
                Some(p) if u64::from(page) < p.total_pages && fetched > 0 => page += 1,
                _ => break,
            }
        }
        Ok(items)
    }

    /// Send a request whose response carries a `data` payload
    pub(crate) async fn call<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<T, Error> {
        let body = body.map(serde_json::to_value).transpose()?;
        let text = self.send(method, url, &[], body).await?;
        let resp: Response<T> = serde_json::from_str(&text)?;
        Ok(resp.data)
    }

    /// Send a request whose response body is ignored
    pub(crate) async fn call_empty<B: Serialize>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<(), Error> {
        let body = body.map(serde_json::to_value).transpose()?;
        self.send(method, url, &[], body).await?;
        Ok(())
    }

    /// Send a request that may answer with a task reference
    ///
    /// Some v2 actions reply `202 {"data": {"task_id": ...}}`, others
    /// `204` with no body; the latter yields `None`.
    pub(crate) async fn call_task<B: Serialize>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<Option<String>, Error> {
        let body = body.map(serde_json::to_value).transpose()?;
        let text = self.send(method, url, &[], body).await?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        let value: serde_json::Value = serde_json::from_str(&text)?;
        Ok(value
            .get("data")
            .and_then(|d| d.get("task_id"))
            .and_then(|t| t.as_str())
            .map(str::to_string))
    }
}

/// Marker body for requests that send nothing
pub(crate) const NO_BODY: Option<&()> = None;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = Client::new(ClientConfig::new("key").with_base_url("https://api.example.com/")).unwrap();
        let url = client
            .endpoint(&["ecloud", "v1", "solutions", "123", "templates", "CentOS 7/64"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/ecloud/v1/solutions/123/templates/CentOS%207%2F64"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = Client::new(ClientConfig::new("key").with_base_url("http://127.0.0.1:8080/proxy")).unwrap();
        let url = client.endpoint(&["ecloud", "v2", "vpcs"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/proxy/ecloud/v2/vpcs");
    }

    #[test]
    fn test_invalid_config() {
        let err = Client::new(ClientConfig::new("key").with_base_url("not a url")).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));

        let err = Client::new(ClientConfig::new("bad\nkey")).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
