//! # Hospital Portal
//!
//! Client core for the hospital management web application: service calls
//! against the REST backend, escaped HTML rendering, and the page
//! controllers that tie them to a document.
//!
//! ## Modules
//!
//! - [`client`]: one async service function per backend resource
//! - [`render`]: escaped templates and the list renderer
//! - [`widgets`]: modal, loader and date formatting
//! - [`controllers`]: per-page logic
//! - [`dom`]: the document seam, with an in-memory implementation
//!
//! The browser bindings live in the `portal-ui` crate.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hospital_portal::{ApiClient, ReqwestTransport};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = ReqwestTransport::new(Duration::from_secs(30))?;
//!     let client = ApiClient::new("http://localhost:8080/api", transport);
//!
//!     for doctor in client.fetch_doctors().await? {
//!         println!("Dr. {} ({})", doctor.name, doctor.specialization);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod controllers;
pub mod dom;
pub mod models;
pub mod render;
pub mod widgets;

#[cfg(test)]
mod testing;

pub use client::{
    ApiClient, ClientError, ClientResult, HttpRequest, HttpResponse, Method, Transport,
    TransportError,
};

#[cfg(not(target_arch = "wasm32"))]
pub use client::ReqwestTransport;

pub use config::{ApiConfig, Config, ConfigError, LoadedConfig, LoggingConfig};

pub use controllers::{
    render_header, AddPrescription, DoctorDashboard, Outcome, PatientAppointments,
    PatientRecords, Phase, UpdateAppointment,
};

pub use dom::{Dom, DomError, MemoryDom, Target};

pub use models::{
    Appointment, AppointmentUpdate, Doctor, Patient, PatientRecord, Prescription, RecordId,
};

pub use render::{render_list, Html};

pub use widgets::{close_modal, format_date, hide_loader, show_loader, show_modal};
