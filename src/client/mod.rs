//! Hospital REST API Client
//!
//! One async service function per backend resource. Each issues a single
//! request through a [`Transport`] and decodes the JSON body. Unlike the
//! bare pass-through of a raw fetch, the status is checked: non-2xx
//! responses surface as [`ClientError::Server`].

mod error;
#[cfg(not(target_arch = "wasm32"))]
mod reqwest_transport;
mod transport;

pub use error::{ClientError, ClientResult, TransportError};
#[cfg(not(target_arch = "wasm32"))]
pub use reqwest_transport::ReqwestTransport;
pub use transport::{HttpRequest, HttpResponse, Method, Transport};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;

use crate::models::{Appointment, AppointmentUpdate, Doctor, Patient, PatientRecord, Prescription};

/// Longest server error body carried into [`ClientError::Server`]
const MAX_ERROR_MESSAGE: usize = 200;

/// Service client bound to one backend base URL
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /doctors`
    pub async fn fetch_doctors(&self) -> ClientResult<Vec<Doctor>> {
        self.get("/doctors").await
    }

    /// `GET /appointments`
    pub async fn fetch_appointments(&self) -> ClientResult<Vec<Appointment>> {
        self.get("/appointments").await
    }

    /// `PUT /appointments/{id}` with `{date, status}`.
    ///
    /// The backend answers with either the updated appointment or a
    /// `{"message": ..}` acknowledgement, so the body is returned as is.
    pub async fn update_appointment(
        &self,
        id: impl Display,
        update: &AppointmentUpdate,
    ) -> ClientResult<serde_json::Value> {
        let path = format!("/appointments/{}", encode_segment(id));
        self.send_json(Method::Put, &path, update).await
    }

    /// `GET /patients`
    pub async fn fetch_patients(&self) -> ClientResult<Vec<Patient>> {
        self.get("/patients").await
    }

    /// `GET /patients/{id}/records`
    pub async fn fetch_patient_records(&self, id: impl Display) -> ClientResult<Vec<PatientRecord>> {
        let path = format!("/patients/{}/records", encode_segment(id));
        self.get(&path).await
    }

    /// `POST /prescriptions`, returning whatever representation the
    /// backend echoes back
    pub async fn add_prescription(
        &self,
        prescription: &Prescription,
    ) -> ClientResult<serde_json::Value> {
        self.send_json(Method::Post, "/prescriptions", prescription)
            .await
    }

    async fn get<R: DeserializeOwned>(&self, path: &str) -> ClientResult<R> {
        self.execute(HttpRequest {
            method: Method::Get,
            url: self.url(path),
            body: None,
        })
        .await
    }

    async fn send_json<B, R>(&self, method: Method, path: &str, body: &B) -> ClientResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_string(body).map_err(ClientError::Encode)?;

        self.execute(HttpRequest {
            method,
            url: self.url(path),
            body: Some(body),
        })
        .await
    }

    async fn execute<R: DeserializeOwned>(&self, request: HttpRequest) -> ClientResult<R> {
        tracing::debug!(method = %request.method, url = %request.url, "Sending request");

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            return Err(ClientError::Server {
                status: response.status,
                message: error_message(&response.body),
            });
        }

        serde_json::from_str(&response.body).map_err(ClientError::Parse)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn encode_segment(id: impl Display) -> String {
    urlencoding::encode(&id.to_string()).into_owned()
}

/// Pull a readable message out of an error body.
///
/// Spring-style `{"message": ..}` and `{"error": ..}` bodies are unwrapped;
/// anything else is passed through, truncated.
fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response".to_string();
    }

    trimmed.chars().take(MAX_ERROR_MESSAGE).collect()
}
