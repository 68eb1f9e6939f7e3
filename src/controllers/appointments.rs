//! Appointment pages: the patient's appointment table and the update form.

use std::rc::Rc;

use super::{await_current, load_list, report_failure, Lifecycle, Outcome, Phase};
use crate::client::{ApiClient, Transport};
use crate::dom::{require, Dom, DomError, Target};
use crate::models::AppointmentUpdate;
use crate::render::appointment_row;
use crate::widgets::show_modal;

pub const APPOINTMENT_ROWS: Target<'static> = Target::Id("appointmentRows");

pub const UPDATE_FORM: &str = "updateForm";
const APPOINTMENT_ID: &str = "appointmentId";
const DATE: &str = "date";
const STATUS: &str = "status";

const LOAD_FAILED: &str = "Failed to load appointments.";
const UPDATED: &str = "Appointment updated successfully!";
const UPDATE_FAILED: &str = "Failed to update appointment.";

/// Appointment table, filled on page load
pub struct PatientAppointments<T> {
    client: Rc<ApiClient<T>>,
    lifecycle: Lifecycle,
}

impl<T: Transport> PatientAppointments<T> {
    pub fn new<D: Dom + ?Sized>(dom: &D, client: Rc<ApiClient<T>>) -> Result<Self, DomError> {
        require(dom, &[APPOINTMENT_ROWS])?;
        Ok(Self {
            client,
            lifecycle: Lifecycle::default(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    pub async fn load<D: Dom + ?Sized>(&self, dom: &D) -> Result<Outcome, DomError> {
        load_list(
            dom,
            &self.lifecycle,
            APPOINTMENT_ROWS,
            self.client.fetch_appointments(),
            appointment_row,
            LOAD_FAILED,
        )
        .await
    }
}

/// Appointment update form. The new state is only visible after a reload.
pub struct UpdateAppointment<T> {
    client: Rc<ApiClient<T>>,
    lifecycle: Lifecycle,
}

impl<T: Transport> UpdateAppointment<T> {
    pub fn new<D: Dom + ?Sized>(dom: &D, client: Rc<ApiClient<T>>) -> Result<Self, DomError> {
        require(
            dom,
            &[
                Target::Id(UPDATE_FORM),
                Target::Id(APPOINTMENT_ID),
                Target::Id(DATE),
                Target::Id(STATUS),
            ],
        )?;
        Ok(Self {
            client,
            lifecycle: Lifecycle::default(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    /// Runs on form submit, after the browser's own submission is prevented
    pub async fn submit<D: Dom + ?Sized>(&self, dom: &D) -> Result<Outcome, DomError> {
        let id = dom.input_value(APPOINTMENT_ID)?;
        let update = AppointmentUpdate {
            date: dom.input_value(DATE)?,
            status: dom.input_value(STATUS)?,
        };

        let call = self.client.update_appointment(&id, &update);
        let Some(result) = await_current(dom, &self.lifecycle, call).await? else {
            return Ok(Outcome::Stale);
        };

        let outcome = match result {
            Ok(_) => {
                tracing::info!(appointment = %id, status = %update.status, "Appointment updated");
                show_modal(dom, UPDATED)?;
                Outcome::Rendered
            }
            Err(e) => report_failure(dom, UPDATE_FAILED, &e)?,
        };

        Ok(self.lifecycle.finish(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{Method, TransportError};
    use crate::dom::MemoryDom;
    use crate::testing::{json_ok, MockTransport};
    use crate::widgets::OVERLAY_CLASS;
    use serde_json::json;

    const BASE: &str = "http://localhost:8080/api";

    fn update_page() -> MemoryDom {
        let dom = MemoryDom::new().with_form(UPDATE_FORM, &[APPOINTMENT_ID, DATE, STATUS]);
        dom.set_value(APPOINTMENT_ID, "7");
        dom.set_value(DATE, "2024-01-01");
        dom.set_value(STATUS, "Confirmed");
        dom
    }

    #[tokio::test]
    async fn test_load_renders_rows() {
        let dom = MemoryDom::new().with_container(APPOINTMENT_ROWS);
        let transport = MockTransport::new().respond(json_ok(json!([
            { "id": 1, "patientId": 4, "date": "2024-01-01", "status": "Scheduled" },
            { "id": 2, "patientId": 4, "date": "2024-02-15", "status": "Completed" }
        ])));
        let page = PatientAppointments::new(&dom, Rc::new(ApiClient::new(BASE, transport))).unwrap();

        assert_eq!(page.load(&dom).await.unwrap(), Outcome::Rendered);

        let html = dom.inner_html(APPOINTMENT_ROWS).unwrap();
        assert_eq!(html.matches("<tr>").count(), 2);
        assert!(html.contains("<td>1/1/2024</td><td>Scheduled</td>"));
        assert!(html.contains("<td>2/15/2024</td><td>Completed</td>"));
    }

    #[tokio::test]
    async fn test_load_failure() {
        let dom = MemoryDom::new().with_container(APPOINTMENT_ROWS);
        let transport = MockTransport::new().fail(TransportError::Timeout);
        let page = PatientAppointments::new(&dom, Rc::new(ApiClient::new(BASE, transport))).unwrap();

        assert_eq!(page.load(&dom).await.unwrap(), Outcome::Failed);
        assert_eq!(page.phase(), Phase::Failed);
        assert_eq!(dom.inner_html(APPOINTMENT_ROWS).as_deref(), Some(""));
        assert_eq!(dom.body_html(OVERLAY_CLASS).len(), 1);
    }

    #[test]
    fn test_update_requires_form_fields() {
        let dom = MemoryDom::new().with_form(UPDATE_FORM, &[APPOINTMENT_ID, DATE]);
        let client = Rc::new(ApiClient::new(BASE, MockTransport::new()));

        let err = UpdateAppointment::new(&dom, client).err().unwrap();
        assert_eq!(err, DomError::missing(Target::Id(STATUS)));
    }

    #[tokio::test]
    async fn test_submit_sends_put_and_confirms() {
        let dom = update_page();
        let transport = MockTransport::new().respond(json_ok(json!({
            "id": 7, "patientId": 1, "date": "2024-01-01", "status": "Confirmed"
        })));
        let client = Rc::new(ApiClient::new(BASE, transport));
        let form = UpdateAppointment::new(&dom, Rc::clone(&client)).unwrap();

        assert_eq!(form.submit(&dom).await.unwrap(), Outcome::Rendered);

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(requests[0].url, format!("{}/appointments/7", BASE));
        let body: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({ "date": "2024-01-01", "status": "Confirmed" }));

        let overlays = dom.body_html(OVERLAY_CLASS);
        assert_eq!(overlays.len(), 1);
        assert!(overlays[0].contains(UPDATED));
        // the update form keeps its values
        assert_eq!(dom.value(STATUS).as_deref(), Some("Confirmed"));
    }

    #[tokio::test]
    async fn test_submit_accepts_message_reply() {
        let dom = update_page();
        let transport = MockTransport::new().respond(json_ok(json!({
            "message": "Appointment updated successfully."
        })));
        let form = UpdateAppointment::new(&dom, Rc::new(ApiClient::new(BASE, transport))).unwrap();

        assert_eq!(form.submit(&dom).await.unwrap(), Outcome::Rendered);
        assert_eq!(form.phase(), Phase::Rendered);

        let overlays = dom.body_html(OVERLAY_CLASS);
        assert_eq!(overlays.len(), 1);
        assert!(overlays[0].contains(UPDATED));
    }

    #[tokio::test]
    async fn test_submit_failure_shows_failure_modal() {
        let dom = update_page();
        let transport =
            MockTransport::new().fail(TransportError::Network("connection reset".to_string()));
        let form = UpdateAppointment::new(&dom, Rc::new(ApiClient::new(BASE, transport))).unwrap();

        assert_eq!(form.submit(&dom).await.unwrap(), Outcome::Failed);

        let overlays = dom.body_html(OVERLAY_CLASS);
        assert_eq!(overlays.len(), 1);
        assert!(overlays[0].contains(UPDATE_FAILED));
    }
}
