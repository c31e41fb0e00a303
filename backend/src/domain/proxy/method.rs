//! HTTP methods the proxy forwards.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Method accepted by at least one proxied route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProxyMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

/// Raised for methods the proxy never forwards, such as `HEAD`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported method: {0}")]
pub struct UnsupportedMethod(pub String);

impl ProxyMethod {
    /// Canonical upper-case method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Whether the raw request body is forwarded. GET and DELETE forward the
    /// query string instead.
    #[must_use]
    pub const fn carries_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for ProxyMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProxyMethod {
    type Err = UnsupportedMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            other => Err(UnsupportedMethod(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("GET", ProxyMethod::Get, false)]
    #[case("POST", ProxyMethod::Post, true)]
    #[case("PUT", ProxyMethod::Put, true)]
    #[case("PATCH", ProxyMethod::Patch, true)]
    #[case("DELETE", ProxyMethod::Delete, false)]
    fn parses_known_methods(#[case] raw: &str, #[case] expected: ProxyMethod, #[case] body: bool) {
        let method: ProxyMethod = raw.parse().expect("known method");
        assert_eq!(method, expected);
        assert_eq!(method.carries_body(), body);
        assert_eq!(method.to_string(), raw);
    }

    #[rstest]
    #[case("HEAD")]
    #[case("OPTIONS")]
    #[case("get")]
    fn rejects_other_methods(#[case] raw: &str) {
        assert_eq!(
            raw.parse::<ProxyMethod>(),
            Err(UnsupportedMethod(raw.to_owned()))
        );
    }
}
