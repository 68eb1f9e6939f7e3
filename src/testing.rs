//! Test doubles for the transport seam.

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;
use tokio::sync::oneshot;

use crate::client::{HttpRequest, HttpResponse, Transport, TransportError};

pub fn status(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        body: body.to_string(),
    }
}

pub fn json_ok(value: serde_json::Value) -> HttpResponse {
    status(200, &value.to_string())
}

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, response: HttpResponse) -> Self {
        self.responses.borrow_mut().push_back(Ok(response));
        self
    }

    pub fn fail(self, error: TransportError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no response queued".to_string())))
    }
}

/// Holds each request open until the test releases its response, so
/// overlapping invocations can complete in any order.
#[derive(Default)]
pub struct PendingTransport {
    pending: RefCell<VecDeque<oneshot::Receiver<HttpResponse>>>,
}

impl PendingTransport {
    /// Returns the sender that will complete the next request issued.
    pub fn enqueue(&self) -> oneshot::Sender<HttpResponse> {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().push_back(rx);
        tx
    }
}

#[async_trait(?Send)]
impl Transport for PendingTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let rx = self
            .pending
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| TransportError::Network("no response queued".to_string()))?;

        rx.await
            .map_err(|_| TransportError::Network("response dropped".to_string()))
    }
}
