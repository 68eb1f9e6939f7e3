//! Page Controllers
//!
//! One controller per page. Each checks its element contract when built,
//! then on every trigger reads the page, awaits exactly one service call
//! and reflects the result: a rendered list, a confirmation modal, or a
//! generic failure modal.
//!
//! Overlapping triggers are allowed. Each invocation takes a ticket from
//! the controller's [`Lifecycle`]; a response that arrives after a newer
//! invocation started is dropped without touching the page.

mod appointments;
mod dashboard;
mod header;
mod prescription;
mod records;

pub use appointments::{PatientAppointments, UpdateAppointment, APPOINTMENT_ROWS, UPDATE_FORM};
pub use dashboard::{DoctorDashboard, DOCTOR_GRID};
pub use header::{render_header, HEADER};
pub use prescription::{AddPrescription, PRESCRIPTION_FORM};
pub use records::{PatientRecords, DEFAULT_PATIENT_ID, PATIENT_RECORD_ROWS};

use std::cell::Cell;
use std::future::Future;

use crate::client::{ClientError, ClientResult};
use crate::dom::{Dom, DomError, Target};
use crate::render::{render_list, Html};
use crate::widgets::{hide_loader, show_loader, show_modal};

/// Where a controller stands after its latest trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Awaiting,
    Rendered,
    Failed,
}

/// Result of one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response was reflected in the page
    Rendered,
    /// A failure modal was shown
    Failed,
    /// A newer invocation superseded this one; the page was left alone
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Generation counter plus the phase of the latest invocation
#[derive(Debug, Default)]
pub struct Lifecycle {
    generation: Cell<u64>,
    phase: Cell<Phase>,
}

impl Lifecycle {
    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub fn begin(&self) -> Ticket {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        self.phase.set(Phase::Awaiting);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.get() == ticket.0
    }

    fn finish(&self, outcome: Outcome) -> Outcome {
        match outcome {
            Outcome::Rendered => self.phase.set(Phase::Rendered),
            Outcome::Failed => self.phase.set(Phase::Failed),
            Outcome::Stale => {}
        }
        outcome
    }
}

/// Await one service call with the loader up.
///
/// Returns `None` when a newer invocation began while this one was in
/// flight; the loader then stays up for the newer one to clear. If the
/// loader cannot be shown the call is never issued and the phase ends
/// `Failed`.
async fn await_current<D, R, F>(
    dom: &D,
    lifecycle: &Lifecycle,
    call: F,
) -> Result<Option<ClientResult<R>>, DomError>
where
    D: Dom + ?Sized,
    F: Future<Output = ClientResult<R>>,
{
    let ticket = lifecycle.begin();
    if let Err(e) = show_loader(dom) {
        lifecycle.finish(Outcome::Failed);
        return Err(e);
    }

    let result = call.await;

    if !lifecycle.is_current(ticket) {
        tracing::debug!("Discarding stale response");
        return Ok(None);
    }

    hide_loader(dom);
    Ok(Some(result))
}

/// Fetch a list and render it into `target`
async fn load_list<D, R, F, M>(
    dom: &D,
    lifecycle: &Lifecycle,
    target: Target<'_>,
    call: F,
    template: M,
    failure: &str,
) -> Result<Outcome, DomError>
where
    D: Dom + ?Sized,
    F: Future<Output = ClientResult<Vec<R>>>,
    M: Fn(&R) -> Html,
{
    let Some(result) = await_current(dom, lifecycle, call).await? else {
        return Ok(Outcome::Stale);
    };

    let outcome = match result {
        Ok(items) => {
            tracing::debug!(count = items.len(), container = %target, "Rendering list");
            render_list(dom, target, &items, template)?;
            Outcome::Rendered
        }
        Err(e) => report_failure(dom, failure, &e)?,
    };

    Ok(lifecycle.finish(outcome))
}

fn report_failure<D: Dom + ?Sized>(
    dom: &D,
    message: &str,
    error: &ClientError,
) -> Result<Outcome, DomError> {
    tracing::warn!(kind = error.kind(), error = %error, "{}", message);
    show_modal(dom, message)?;
    Ok(Outcome::Failed)
}
