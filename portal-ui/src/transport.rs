//! Fetch-backed transport for the browser.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use hospital_portal::{HttpRequest, HttpResponse, Method, Transport, TransportError};

/// Sends requests with the browser's `fetch` through gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
        };

        let response = build(builder, request.body)?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(format!("Failed to read body: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}

fn build(builder: RequestBuilder, body: Option<String>) -> Result<Request, TransportError> {
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(body),
        None => builder.build(),
    };
    request.map_err(|e| TransportError::Network(format!("Request build error: {}", e)))
}
