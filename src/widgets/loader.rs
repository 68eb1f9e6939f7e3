//! Loading indicator

use crate::dom::{Dom, DomError};
use crate::render::Html;

pub const LOADER_CLASS: &str = "loader";

/// Show the loader. Idempotent.
pub fn show_loader<D: Dom + ?Sized>(dom: &D) -> Result<(), DomError> {
    if dom.count(LOADER_CLASS) > 0 {
        return Ok(());
    }
    dom.append_to_body(LOADER_CLASS, &Html::text("Loading..."))
}

pub fn hide_loader<D: Dom + ?Sized>(dom: &D) {
    dom.remove_first(LOADER_CLASS);
}
