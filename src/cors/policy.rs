use http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN};
use http::{HeaderMap, HeaderName, HeaderValue};

/// Response headers that relax the browser's cross-origin restrictions for a single endpoint.
///
/// A policy is built once and never mutated afterwards, so it can be shared by every request
/// the endpoint serves.
#[derive(Debug, Clone, PartialEq)]
pub struct CorsPolicy {
    allow_origin: HeaderValue,
    allow_headers: HeaderValue,
}

impl CorsPolicy {
    pub fn builder() -> CorsPolicyBuilder {
        CorsPolicyBuilder::default()
    }

    /// Value of the `Access-Control-Allow-Origin` header.
    pub fn allow_origin(&self) -> &HeaderValue {
        &self.allow_origin
    }

    /// Value of the `Access-Control-Allow-Headers` header, names joined by `", "`.
    pub fn allow_headers(&self) -> &HeaderValue {
        &self.allow_headers
    }

    /// The full header mapping this policy contributes to a response.
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::with_capacity(2);
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, self.allow_origin.clone());
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, self.allow_headers.clone());
        headers
    }
}

#[derive(Debug, Default, Clone)]
pub struct CorsPolicyBuilder {
    allow_origin: Option<String>,
    allowed_headers: Vec<String>,
}

impl CorsPolicyBuilder {
    pub fn allow_origin(mut self, origin: &str) -> Self {
        self.allow_origin = Some(origin.to_string());
        self
    }

    pub fn allow_header(mut self, name: &str) -> Self {
        self.allowed_headers.push(name.to_string());
        self
    }

    pub fn build(self) -> Result<CorsPolicy, CorsPolicyError> {
        let origin = self.allow_origin.ok_or(CorsPolicyError::NoOrigin)?;
        let allow_origin = HeaderValue::from_str(&origin)
            .map_err(|_| CorsPolicyError::InvalidOrigin(origin.clone()))?;

        let mut allowed_headers: Vec<HeaderName> = Vec::with_capacity(self.allowed_headers.len());
        for name in self.allowed_headers {
            // `HeaderName` lower-cases on parse, so duplicates compare case-insensitively.
            let header = HeaderName::from_bytes(name.trim().as_bytes())
                .map_err(|_| CorsPolicyError::InvalidHeaderName(name.clone()))?;
            if !allowed_headers.contains(&header) {
                allowed_headers.push(header);
            }
        }

        let joined = allowed_headers
            .iter()
            .map(HeaderName::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let allow_headers = HeaderValue::from_str(&joined)
            .map_err(|_| CorsPolicyError::InvalidHeaderName(joined.clone()))?;

        Ok(CorsPolicy {
            allow_origin,
            allow_headers,
        })
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CorsPolicyError {
    #[error("a CORS policy needs an allowed origin")]
    NoOrigin,
    #[error("`{0}` is not a valid `Access-Control-Allow-Origin` value")]
    InvalidOrigin(String),
    #[error("`{0}` is not a valid header name")]
    InvalidHeaderName(String),
}
