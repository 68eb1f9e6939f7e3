//! DOM Access
//!
//! The handful of document operations the page controllers need, behind a
//! trait so the same controllers drive a real browser document
//! (`portal-ui`) or the in-memory [`MemoryDom`].
//!
//! Every method takes `&self`: a DOM handle is a cheap shared reference
//! to one document, mutated only from the UI thread.

mod memory;

pub use memory::MemoryDom;

use std::fmt;
use thiserror::Error;

use crate::render::Html;

/// Element lookup, by id or by the first element carrying a class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target<'a> {
    Id(&'a str),
    Class(&'a str),
}

impl fmt::Display for Target<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Id(id) => write!(f, "#{}", id),
            Target::Class(class) => write!(f, ".{}", class),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("Missing element: {selector}")]
    MissingElement { selector: String },

    #[error("Browser error: {0}")]
    Browser(String),
}

impl DomError {
    pub fn missing(target: Target<'_>) -> Self {
        DomError::MissingElement {
            selector: target.to_string(),
        }
    }
}

pub trait Dom {
    fn exists(&self, target: Target<'_>) -> bool;

    /// Replace the whole content of `target`
    fn set_inner_html(&self, target: Target<'_>, html: &Html) -> Result<(), DomError>;

    /// Current value of the input, select or textarea with this id
    fn input_value(&self, id: &str) -> Result<String, DomError>;

    fn reset_form(&self, id: &str) -> Result<(), DomError>;

    /// Append a `<div class="{class}">` holding `html` to the body
    fn append_to_body(&self, class: &str, html: &Html) -> Result<(), DomError>;

    /// Remove the first element carrying `class`. Returns whether one was found.
    fn remove_first(&self, class: &str) -> bool;

    fn count(&self, class: &str) -> usize;
}

/// Check a page's element contract up front, naming the first element that
/// is absent.
pub fn require<D: Dom + ?Sized>(dom: &D, targets: &[Target<'_>]) -> Result<(), DomError> {
    match targets.iter().find(|target| !dom.exists(**target)) {
        Some(target) => Err(DomError::missing(*target)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_display() {
        assert_eq!(Target::Id("updateForm").to_string(), "#updateForm");
        assert_eq!(Target::Class("card-grid").to_string(), ".card-grid");
    }

    #[test]
    fn test_require_names_missing_element() {
        let dom = MemoryDom::new().with_container(Target::Id("appointmentRows"));

        assert!(require(&dom, &[Target::Id("appointmentRows")]).is_ok());

        let err = require(
            &dom,
            &[Target::Id("appointmentRows"), Target::Class("card-grid")],
        )
        .unwrap_err();
        assert_eq!(
            err,
            DomError::MissingElement {
                selector: ".card-grid".to_string()
            }
        );
    }
}
