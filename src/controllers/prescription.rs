//! Prescription form

use std::rc::Rc;

use super::{await_current, report_failure, Lifecycle, Outcome, Phase};
use crate::client::{ApiClient, Transport};
use crate::dom::{require, Dom, DomError, Target};
use crate::models::Prescription;
use crate::widgets::show_modal;

pub const PRESCRIPTION_FORM: &str = "prescriptionForm";
const PATIENT_ID: &str = "patientId";
const MEDICINE: &str = "medicine";
const DOSAGE: &str = "dosage";
const INSTRUCTIONS: &str = "instructions";

const ADDED: &str = "Prescription added successfully!";
const ADD_FAILED: &str = "Error adding prescription.";

pub struct AddPrescription<T> {
    client: Rc<ApiClient<T>>,
    lifecycle: Lifecycle,
}

impl<T: Transport> AddPrescription<T> {
    pub fn new<D: Dom + ?Sized>(dom: &D, client: Rc<ApiClient<T>>) -> Result<Self, DomError> {
        require(
            dom,
            &[
                Target::Id(PRESCRIPTION_FORM),
                Target::Id(PATIENT_ID),
                Target::Id(MEDICINE),
                Target::Id(DOSAGE),
                Target::Id(INSTRUCTIONS),
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

    /// Post the form's prescription; on success confirm and clear the form
    pub async fn submit<D: Dom + ?Sized>(&self, dom: &D) -> Result<Outcome, DomError> {
        let prescription = Prescription {
            patient_id: dom.input_value(PATIENT_ID)?,
            medicine: dom.input_value(MEDICINE)?,
            dosage: dom.input_value(DOSAGE)?,
            instructions: dom.input_value(INSTRUCTIONS)?,
        };

        let call = self.client.add_prescription(&prescription);
        let Some(result) = await_current(dom, &self.lifecycle, call).await? else {
            return Ok(Outcome::Stale);
        };

        let outcome = match result {
            Ok(_) => {
                tracing::info!(patient = %prescription.patient_id, "Prescription added");
                show_modal(dom, ADDED)?;
                dom.reset_form(PRESCRIPTION_FORM)?;
                Outcome::Rendered
            }
            Err(e) => report_failure(dom, ADD_FAILED, &e)?,
        };

        Ok(self.lifecycle.finish(outcome))
    }
}
