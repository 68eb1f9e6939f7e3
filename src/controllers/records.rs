//! Patient records table

use std::rc::Rc;

use super::{load_list, Lifecycle, Outcome, Phase};
use crate::client::{ApiClient, Transport};
use crate::dom::{require, Dom, DomError, Target};
use crate::render::patient_record_row;

pub const PATIENT_RECORD_ROWS: Target<'static> = Target::Id("patientRecordRows");

/// Patient shown when the page does not name one
pub const DEFAULT_PATIENT_ID: &str = "1";

const LOAD_FAILED: &str = "Failed to load patient records.";

pub struct PatientRecords<T> {
    client: Rc<ApiClient<T>>,
    patient_id: String,
    lifecycle: Lifecycle,
}

impl<T: Transport> PatientRecords<T> {
    pub fn new<D: Dom + ?Sized>(
        dom: &D,
        client: Rc<ApiClient<T>>,
        patient_id: impl Into<String>,
    ) -> Result<Self, DomError> {
        require(dom, &[PATIENT_RECORD_ROWS])?;
        Ok(Self {
            client,
            patient_id: patient_id.into(),
            lifecycle: Lifecycle::default(),
        })
    }

    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    pub async fn load<D: Dom + ?Sized>(&self, dom: &D) -> Result<Outcome, DomError> {
        load_list(
            dom,
            &self.lifecycle,
            PATIENT_RECORD_ROWS,
            self.client.fetch_patient_records(&self.patient_id),
            patient_record_row,
            LOAD_FAILED,
        )
        .await
    }
}
