//! Request URL construction.

use url::form_urlencoded;

use crate::error::{Error, Result};
use crate::types::Region;

/// Default geocode JSON endpoint, without scheme.
pub const DEFAULT_ENDPOINT: &str = "maps.googleapis.com/maps/api/geocode/json";

/// Builds geocode request URLs.
///
/// The API key is baked into the service URL when the builder is configured,
/// so [`RequestBuilder::build_url`] only appends per-request parameters.
///
/// # Example
///
/// ```rust
/// use geocode_rs::RequestBuilder;
///
/// let request = RequestBuilder::new().with_region("us");
/// let url = request.build_url("1600 Amphitheatre Parkway")?;
/// assert_eq!(
///     url,
///     "http://maps.googleapis.com/maps/api/geocode/json?address=1600+Amphitheatre+Parkway&region=us"
/// );
/// # Ok::<(), geocode_rs::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    endpoint: String,
    api_key: Option<String>,
    region: Option<String>,
    service_url: String,
}

impl RequestBuilder {
    /// Create a builder for the default endpoint with no key and no region.
    pub fn new() -> Self {
        let mut builder = Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            region: None,
            service_url: String::new(),
        };
        builder.rebuild_service_url();
        builder
    }

    /// Set the API key and region in one go. Empty strings count as unset.
    pub fn configure(&mut self, api_key: Option<&str>, region: Option<&str>) {
        self.api_key = non_empty(api_key);
        self.region = non_empty(region);
        self.rebuild_service_url();
    }

    /// Set the API key. Switches the scheme to https.
    ///
    /// The key is appended as given, without URL encoding.
    pub fn with_api_key(mut self, api_key: impl AsRef<str>) -> Self {
        self.api_key = non_empty(Some(api_key.as_ref()));
        self.rebuild_service_url();
        self
    }

    /// Set the region hint.
    pub fn with_region(mut self, region: impl AsRef<str>) -> Self {
        self.region = non_empty(Some(region.as_ref()));
        self
    }

    /// Set the region hint from a [`Region`].
    pub fn with_region_hint(self, region: &Region) -> Self {
        self.with_region(region.as_str())
    }

    /// Override the endpoint (host and path, no scheme).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self.rebuild_service_url();
        self
    }

    /// Whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// The configured region, if any.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Base URL including scheme and, when configured, the key parameter.
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Build the full request URL for `address`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the address is empty or blank.
    pub fn build_url(&self, address: &str) -> Result<String> {
        if address.trim().is_empty() {
            return Err(Error::invalid_argument(
                "Address is required in order to process",
            ));
        }

        let mut url = self.service_url.clone();
        if self.api_key.is_some() {
            url.push('&');
        }
        url.push_str("address=");
        url.extend(form_urlencoded::byte_serialize(address.as_bytes()));

        if let Some(ref region) = self.region {
            url.push_str("&region=");
            url.extend(form_urlencoded::byte_serialize(region.as_bytes()));
        }

        Ok(url)
    }

    fn rebuild_service_url(&mut self) {
        self.service_url = match self.api_key {
            Some(ref key) => format!("https://{}?key={key}", self.endpoint),
            None => format!("http://{}?", self.endpoint),
        };
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
