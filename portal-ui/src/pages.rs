//! Page entry points exported to the static pages.
//!
//! Each `start_*` function checks the page's element contract, then wires
//! its controller to page load or form submit. A broken contract surfaces
//! in JavaScript as an error naming the missing element.

use std::future::Future;
use std::rc::Rc;

use hospital_portal::controllers::{DEFAULT_PATIENT_ID, PRESCRIPTION_FORM, UPDATE_FORM};
use hospital_portal::{
    AddPrescription, DoctorDashboard, DomError, Outcome, PatientAppointments, PatientRecords,
    Target, UpdateAppointment,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Event;

use crate::api::client;
use crate::dom::BrowserDom;

pub(crate) fn to_js(error: DomError) -> JsValue {
    js_sys::Error::new(&error.to_string()).into()
}

fn report(page: &str, result: Result<Outcome, DomError>) {
    if let Err(e) = result {
        web_sys::console::error_1(&format!("{}: {}", page, e).into());
    }
}

/// Prevent the browser's own submission and run `handler` instead
fn on_submit<F, Fut>(dom: &BrowserDom, form_id: &str, handler: F) -> Result<(), JsValue>
where
    F: Fn(BrowserDom) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let form = dom
        .document()
        .get_element_by_id(form_id)
        .ok_or_else(|| to_js(DomError::missing(Target::Id(form_id))))?;

    let dom = dom.clone();
    let listener = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        spawn_local(handler(dom.clone()));
    }) as Box<dyn FnMut(Event)>);
    form.add_event_listener_with_callback("submit", listener.as_ref().unchecked_ref())?;
    listener.forget();
    Ok(())
}

#[wasm_bindgen]
pub fn render_header() -> Result<(), JsValue> {
    let dom = BrowserDom::new().map_err(to_js)?;
    hospital_portal::render_header(&dom).map_err(to_js)
}

#[wasm_bindgen]
pub fn start_doctor_dashboard() -> Result<(), JsValue> {
    let dom = BrowserDom::new().map_err(to_js)?;
    let page = DoctorDashboard::new(&dom, client()).map_err(to_js)?;

    spawn_local(async move {
        report("Doctor dashboard", page.load(&dom).await);
    });
    Ok(())
}

#[wasm_bindgen]
pub fn start_patient_appointments() -> Result<(), JsValue> {
    let dom = BrowserDom::new().map_err(to_js)?;
    let page = PatientAppointments::new(&dom, client()).map_err(to_js)?;

    spawn_local(async move {
        report("Patient appointments", page.load(&dom).await);
    });
    Ok(())
}

/// Show one patient's records; without an id the default patient is shown
#[wasm_bindgen]
pub fn start_patient_records(patient_id: Option<String>) -> Result<(), JsValue> {
    let dom = BrowserDom::new().map_err(to_js)?;
    let patient_id = patient_id.unwrap_or_else(|| DEFAULT_PATIENT_ID.to_string());
    let page = PatientRecords::new(&dom, client(), patient_id).map_err(to_js)?;

    spawn_local(async move {
        report("Patient records", page.load(&dom).await);
    });
    Ok(())
}

#[wasm_bindgen]
pub fn start_update_appointment() -> Result<(), JsValue> {
    let dom = BrowserDom::new().map_err(to_js)?;
    let page = Rc::new(UpdateAppointment::new(&dom, client()).map_err(to_js)?);

    on_submit(&dom, UPDATE_FORM, move |dom| {
        let page = Rc::clone(&page);
        async move { report("Update appointment", page.submit(&dom).await) }
    })
}

#[wasm_bindgen]
pub fn start_add_prescription() -> Result<(), JsValue> {
    let dom = BrowserDom::new().map_err(to_js)?;
    let page = Rc::new(AddPrescription::new(&dom, client()).map_err(to_js)?);

    on_submit(&dom, PRESCRIPTION_FORM, move |dom| {
        let page = Rc::clone(&page);
        async move { report("Add prescription", page.submit(&dom).await) }
    })
}
