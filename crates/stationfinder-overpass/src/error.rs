use thiserror::Error;

/// Errors returned by the Overpass client.
#[derive(Debug, Error)]
pub enum OverpassError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body could not be deserialized.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The interpreter reported a runtime error (e.g. a server-side timeout)
    /// and returned no elements.
    #[error("Overpass runtime error from {url}: {remark}")]
    Runtime { url: String, remark: String },

    /// Every configured endpoint failed for one logical query.
    #[error("Overpass unavailable after {attempts} endpoint(s); last error: {last}")]
    Unavailable {
        attempts: usize,
        #[source]
        last: Box<OverpassError>,
    },

    #[error("no Overpass endpoints configured")]
    NoEndpoints,

    #[error("invalid Overpass endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}
