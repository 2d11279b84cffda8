//! HTTP client for the Overpass interpreter.
//!
//! Holds an ordered list of redundant interpreter endpoints. Each logical
//! query is offered to the endpoints in priority order, exactly once each,
//! and the first successful response wins. Timeouts, network errors, non-2xx
//! statuses, undecodable bodies, and interpreter runtime errors all count as
//! an endpoint failure.

use std::time::Duration;

use reqwest::{Client, Url};
use stationfinder_core::AppConfig;

use crate::error::OverpassError;
use crate::types::OverpassResponse;

/// One interpreter endpoint in the failover list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub url: Url,
}

impl Endpoint {
    /// Parses an endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`OverpassError::InvalidEndpoint`] if `raw` is not an absolute
    /// `http` or `https` URL.
    pub fn parse(raw: &str) -> Result<Self, OverpassError> {
        let url = Url::parse(raw.trim()).map_err(|e| OverpassError::InvalidEndpoint {
            url: raw.to_owned(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(OverpassError::InvalidEndpoint {
                url: raw.to_owned(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        Ok(Self { url })
    }
}

/// Client for the Overpass interpreter API with ordered endpoint failover.
pub struct OverpassClient {
    client: Client,
    endpoints: Vec<Endpoint>,
    timeout_secs: u64,
}

impl OverpassClient {
    /// Creates a client for the given endpoints, tried in slice order.
    ///
    /// `timeout_secs` bounds every single endpoint attempt, including
    /// reading the body.
    ///
    /// # Errors
    ///
    /// - [`OverpassError::NoEndpoints`] if `endpoints` is empty.
    /// - [`OverpassError::InvalidEndpoint`] if any URL fails to parse.
    /// - [`OverpassError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    pub fn new<S: AsRef<str>>(
        endpoints: &[S],
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, OverpassError> {
        if endpoints.is_empty() {
            return Err(OverpassError::NoEndpoints);
        }
        let endpoints = endpoints
            .iter()
            .map(|e| Endpoint::parse(e.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoints,
            timeout_secs,
        })
    }

    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`OverpassClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, OverpassError> {
        Self::new(
            config.overpass_endpoints.as_slice(),
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    #[must_use]
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// Per-attempt timeout, also written into the QL `[timeout:..]` setting.
    #[must_use]
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// Runs `query` against the endpoints in priority order and returns the
    /// first successful response.
    ///
    /// # Errors
    ///
    /// Returns [`OverpassError::Unavailable`] carrying the last endpoint's
    /// error when every endpoint fails.
    pub async fn execute(&self, query: &str) -> Result<OverpassResponse, OverpassError> {
        let mut last_err = None;

        for (index, endpoint) in self.endpoints.iter().enumerate() {
            match self.execute_at(endpoint, query).await {
                Ok(response) => {
                    if index > 0 {
                        tracing::info!(
                            endpoint = %endpoint.url,
                            attempt = index + 1,
                            "Overpass query served by fallback endpoint"
                        );
                    }
                    return Ok(response);
                }
                Err(err) => {
                    tracing::warn!(
                        endpoint = %endpoint.url,
                        attempt = index + 1,
                        total = self.endpoints.len(),
                        error = %err,
                        "Overpass endpoint failed"
                    );
                    last_err = Some(err);
                }
            }
        }

        Err(OverpassError::Unavailable {
            attempts: self.endpoints.len(),
            last: Box::new(last_err.unwrap_or(OverpassError::NoEndpoints)),
        })
    }

    /// Sends one POST to one endpoint, asserts a 2xx status, and parses the
    /// body.
    async fn execute_at(
        &self,
        endpoint: &Endpoint,
        query: &str,
    ) -> Result<OverpassResponse, OverpassError> {
        let response = self
            .client
            .post(endpoint.url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&[("data", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OverpassError::Status {
                status: status.as_u16(),
                url: endpoint.url.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: OverpassResponse =
            serde_json::from_str(&body).map_err(|e| OverpassError::Deserialize {
                context: endpoint.url.to_string(),
                source: e,
            })?;

        if let Some(remark) = parsed.remark.as_deref() {
            if parsed.elements.is_empty() && remark.contains("runtime error") {
                return Err(OverpassError::Runtime {
                    url: endpoint.url.to_string(),
                    remark: remark.to_owned(),
                });
            }
            tracing::debug!(endpoint = %endpoint.url, remark, "Overpass returned a remark");
        }

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_endpoint_list_is_rejected() {
        let result = OverpassClient::new::<&str>(&[], 25, "test/0.1");
        assert!(matches!(result, Err(OverpassError::NoEndpoints)));
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        let result = OverpassClient::new(&["not a url"], 25, "test/0.1");
        assert!(matches!(result, Err(OverpassError::InvalidEndpoint { .. })));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let result = Endpoint::parse("ftp://overpass.example/api/interpreter");
        assert!(
            matches!(result, Err(OverpassError::InvalidEndpoint { ref reason, .. }) if reason.contains("ftp"))
        );
    }

    #[test]
    fn endpoints_keep_priority_order() {
        let client = OverpassClient::new(
            &["https://primary.example/api", "https://backup.example/api"],
            25,
            "test/0.1",
        )
        .expect("client construction should not fail");
        let hosts: Vec<_> = client
            .endpoints()
            .iter()
            .map(|e| e.url.host_str().unwrap_or_default().to_owned())
            .collect();
        assert_eq!(hosts, vec!["primary.example", "backup.example"]);
        assert_eq!(client.timeout_secs(), 25);
    }
}
