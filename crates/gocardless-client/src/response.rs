//! Response wrapper exposing rate-limit bookkeeping.

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use crate::error::ClientError;

/// Maximum requests allowed in the current window.
pub const RATE_LIMIT_HEADER: &str = "RateLimit-Limit";

/// Requests left in the current window.
pub const RATE_LIMIT_REMAINING_HEADER: &str = "RateLimit-Remaining";

/// HTTP date at which the window resets.
pub const RATE_LIMIT_RESET_HEADER: &str = "RateLimit-Reset";

/// A response received from the GoCardless API.
///
/// The rate-limit accessors read the headers on every call.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// HTTP status of the response.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    /// Value of `RateLimit-Limit`, or 0 when absent or not a number.
    #[must_use]
    pub fn rate_limit(&self) -> u64 {
        header_u64(self.headers(), RATE_LIMIT_HEADER)
    }

    /// Value of `RateLimit-Remaining`, or 0 when absent or not a number.
    #[must_use]
    pub fn rate_limit_remaining(&self) -> u64 {
        header_u64(self.headers(), RATE_LIMIT_REMAINING_HEADER)
    }

    /// Value of `RateLimit-Reset`, or the Unix epoch when absent or unparsable.
    #[must_use]
    pub fn rate_reset(&self) -> DateTime<Utc> {
        header_http_date(self.headers(), RATE_LIMIT_RESET_HEADER)
    }

    /// Read the full body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be read from the connection.
    pub async fn bytes(self) -> Result<Vec<u8>, ClientError> {
        Ok(self.inner.bytes().await?.to_vec())
    }

    /// Unwrap the underlying `reqwest` response.
    #[must_use]
    pub fn into_inner(self) -> reqwest::Response {
        self.inner
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

fn header_u64(headers: &HeaderMap, name: &str) -> u64 {
    header_str(headers, name)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0)
}

fn header_http_date(headers: &HeaderMap, name: &str) -> DateTime<Utc> {
    header_str(headers, name)
        .and_then(|value| DateTime::parse_from_rfc2822(value.trim()).ok())
        .map_or_else(DateTime::<Utc>::default, |date| date.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use reqwest::header::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(*value));
        }
        map
    }

    #[test]
    fn numeric_headers_parse() {
        let map = headers(&[
            ("ratelimit-limit", "1000"),
            ("ratelimit-remaining", "998"),
        ]);
        assert_eq!(header_u64(&map, RATE_LIMIT_HEADER), 1000);
        assert_eq!(header_u64(&map, RATE_LIMIT_REMAINING_HEADER), 998);
    }

    #[test]
    fn missing_or_garbage_numbers_are_zero() {
        let map = headers(&[("ratelimit-limit", "lots")]);
        assert_eq!(header_u64(&map, RATE_LIMIT_HEADER), 0);
        assert_eq!(header_u64(&map, RATE_LIMIT_REMAINING_HEADER), 0);
    }

    #[test]
    fn reset_parses_http_date() {
        let map = headers(&[("ratelimit-reset", "Mon, 02 Jan 2006 15:04:05 GMT")]);
        assert_eq!(
            header_http_date(&map, RATE_LIMIT_RESET_HEADER),
            Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap()
        );
    }

    #[test]
    fn reset_defaults_to_epoch() {
        let epoch = Utc.timestamp_opt(0, 0).unwrap();
        assert_eq!(header_http_date(&HeaderMap::new(), RATE_LIMIT_RESET_HEADER), epoch);

        let map = headers(&[("ratelimit-reset", "tomorrow-ish")]);
        assert_eq!(header_http_date(&map, RATE_LIMIT_RESET_HEADER), epoch);
    }
}
