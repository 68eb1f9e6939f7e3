//! Rendering
//!
//! Turns records into escaped HTML fragments and swaps them into page
//! containers. Each render is a full replace; nothing is diffed.

mod html;
pub mod templates;

pub use html::{escape, Html};
pub use templates::{appointment_row, doctor_card, patient_record_row, site_header};

use crate::dom::{Dom, DomError, Target};

/// Replace the content of `target` with `template(item)` for every item,
/// in input order.
pub fn render_list<D, T, F>(
    dom: &D,
    target: Target<'_>,
    items: &[T],
    template: F,
) -> Result<(), DomError>
where
    D: Dom + ?Sized,
    F: Fn(&T) -> Html,
{
    let html: Html = items.iter().map(template).collect();
    dom.set_inner_html(target, &html)
}
