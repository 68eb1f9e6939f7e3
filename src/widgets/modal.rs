//! Modal dialog
//!
//! At most one overlay is open at a time: showing a message replaces
//! whatever modal is already up.

use crate::dom::{Dom, DomError};
use crate::render::templates::modal_body;

pub const OVERLAY_CLASS: &str = "modal-overlay";
pub const CLOSE_CLASS: &str = "modal-close";

pub fn show_modal<D: Dom + ?Sized>(dom: &D, message: &str) -> Result<(), DomError> {
    while dom.remove_first(OVERLAY_CLASS) {}
    dom.append_to_body(OVERLAY_CLASS, &modal_body(message, CLOSE_CLASS))
}

/// Remove the open modal. Returns `false` when there was none.
pub fn close_modal<D: Dom + ?Sized>(dom: &D) -> bool {
    dom.remove_first(OVERLAY_CLASS)
}
