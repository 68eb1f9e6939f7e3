//! Transport seam between the service functions and an HTTP stack.

use async_trait::async_trait;
use std::fmt;

use super::error::TransportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        })
    }
}

/// A fully resolved request. `body`, when present, is serialized JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues one HTTP request and hands back the raw response.
///
/// Futures are not required to be `Send`: the browser transport lives on
/// the single UI thread.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        let ok = HttpResponse { status: 204, body: String::new() };
        let redirect = HttpResponse { status: 302, body: String::new() };
        let missing = HttpResponse { status: 404, body: String::new() };

        assert!(ok.is_success());
        assert!(!redirect.is_success());
        assert!(!missing.is_success());
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Put.to_string(), "PUT");
        assert_eq!(Method::Get.to_string(), "GET");
    }
}
