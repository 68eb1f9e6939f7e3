//! Doctor dashboard: list every doctor as a card.

use std::rc::Rc;

use super::{load_list, Lifecycle, Outcome, Phase};
use crate::client::{ApiClient, Transport};
use crate::dom::{require, Dom, DomError, Target};
use crate::render::doctor_card;

pub const DOCTOR_GRID: Target<'static> = Target::Class("card-grid");

const LOAD_FAILED: &str = "Failed to load doctors.";

pub struct DoctorDashboard<T> {
    client: Rc<ApiClient<T>>,
    lifecycle: Lifecycle,
}

impl<T: Transport> DoctorDashboard<T> {
    pub fn new<D: Dom + ?Sized>(dom: &D, client: Rc<ApiClient<T>>) -> Result<Self, DomError> {
        require(dom, &[DOCTOR_GRID])?;
        Ok(Self {
            client,
            lifecycle: Lifecycle::default(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    /// Runs on page load
    pub async fn load<D: Dom + ?Sized>(&self, dom: &D) -> Result<Outcome, DomError> {
        load_list(
            dom,
            &self.lifecycle,
            DOCTOR_GRID,
            self.client.fetch_doctors(),
            doctor_card,
            LOAD_FAILED,
        )
        .await
    }
}
