//! Hospital Portal Browser Bindings
//!
//! WASM glue between the static hospital pages and the `hospital-portal`
//! controllers. Each page loads this module and calls its `start_*`
//! function; the shared header calls [`render_header`].
//!
//! # Architecture
//!
//! The controllers, templates and service calls all live in
//! `hospital-portal` and are written against two seams. This crate fills
//! them for the browser: [`BrowserDom`] over web-sys and [`GlooTransport`]
//! over `fetch`.

use hospital_portal::widgets::{close_modal, CLOSE_CLASS};
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event};

mod api;
mod dom;
mod pages;
mod transport;

pub use api::{get_api_base, set_api_base, DEFAULT_API_BASE};
pub use dom::BrowserDom;
pub use pages::{
    render_header, start_add_prescription, start_doctor_dashboard, start_patient_appointments,
    start_patient_records, start_update_appointment,
};
pub use transport::GlooTransport;

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let dom = BrowserDom::new().map_err(pages::to_js)?;
    install_modal_close(&dom)
}

/// One document-level click listener closes whichever modal is open, so
/// modals added later need no wiring of their own.
fn install_modal_close(dom: &BrowserDom) -> Result<(), JsValue> {
    let target_dom = dom.clone();
    let on_click = Closure::wrap(Box::new(move |event: Event| {
        let hit_close = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .map(|element| {
                element
                    .class_name()
                    .split_whitespace()
                    .any(|class| class == CLOSE_CLASS)
            })
            .unwrap_or(false);

        if hit_close {
            close_modal(&target_dom);
        }
    }) as Box<dyn FnMut(Event)>);

    dom.document()
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}
