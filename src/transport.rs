//! HTTP transport used to execute geocode requests.

use crate::error::Result;

/// Executes a GET request and returns the raw response body.
///
/// Closures of the shape `Fn(&str) -> Result<Vec<u8>>` implement this trait,
/// which makes it easy to plug in canned responses.
///
/// # Example
///
/// ```rust
/// use geocode_rs::{Fetch, Result};
///
/// let fetcher = |_url: &str| -> Result<Vec<u8>> { Ok(br#"{"status":"ZERO_RESULTS"}"#.to_vec()) };
/// let body = fetcher.fetch("http://example.invalid")?;
/// assert!(!body.is_empty());
/// # Ok::<(), geocode_rs::Error>(())
/// ```
pub trait Fetch: Send + Sync {
    /// Fetch `url` and return the body bytes.
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

impl<F> Fetch for F
where
    F: Fn(&str) -> Result<Vec<u8>> + Send + Sync,
{
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self(url)
    }
}

#[cfg(feature = "http")]
pub use http::HttpFetcher;

#[cfg(feature = "http")]
mod http {
    use std::time::Duration;

    use super::Fetch;
    use crate::error::{Error, Result};

    /// Blocking HTTP transport backed by reqwest.
    #[derive(Debug, Clone)]
    pub struct HttpFetcher {
        client: reqwest::blocking::Client,
    }

    impl HttpFetcher {
        /// Create a fetcher with the given timeout and user agent.
        ///
        /// # Errors
        ///
        /// Returns an error if the underlying HTTP client cannot be built,
        /// for example when no TLS backend is available.
        pub fn new(timeout_seconds: u64, user_agent: &str) -> Result<Self> {
            let client = reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(timeout_seconds))
                .user_agent(user_agent)
                .build()
                .map_err(|e| Error::config_error(format!("Failed to build HTTP client: {e}")))?;

            Ok(Self { client })
        }
    }

    impl Fetch for HttpFetcher {
        fn fetch(&self, url: &str) -> Result<Vec<u8>> {
            let response = self
                .client
                .get(url)
                .send()
                .map_err(|e| Error::transport_error(format!("Request failed: {e}")))?;

            let status = response.status();
            if !status.is_success() {
                return Err(Error::transport_error(format!(
                    "Request failed with status: {status}"
                )));
            }

            let body = response
                .bytes()
                .map_err(|e| Error::transport_error(format!("Failed to read response: {e}")))?;

            tracing::trace!(bytes = body.len(), "geocode response received");
            Ok(body.to_vec())
        }
    }

}
