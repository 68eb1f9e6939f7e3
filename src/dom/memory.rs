//! In-memory document
//!
//! Models just enough of a page for the controllers: named containers,
//! forms with their fields, and nodes appended to the body. Used by the
//! CLI to render fragments and by tests to observe DOM effects.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::{Dom, DomError, Target};
use crate::render::Html;

/// Shared handle; clones observe the same document.
#[derive(Debug, Clone, Default)]
pub struct MemoryDom {
    inner: Rc<RefCell<Document>>,
}

#[derive(Debug, Default)]
struct Document {
    /// Keyed by selector text (`#id` / `.class`)
    containers: BTreeMap<String, String>,
    /// Form id to the ids of its fields
    forms: BTreeMap<String, Vec<String>>,
    fields: BTreeMap<String, String>,
    body: Vec<BodyNode>,
}

#[derive(Debug, Clone)]
struct BodyNode {
    class: String,
    html: String,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty container element
    pub fn with_container(self, target: Target<'_>) -> Self {
        self.inner
            .borrow_mut()
            .containers
            .insert(target.to_string(), String::new());
        self
    }

    /// Add a form whose fields start (and reset to) empty
    pub fn with_form(self, form_id: &str, field_ids: &[&str]) -> Self {
        {
            let mut doc = self.inner.borrow_mut();
            for id in field_ids {
                doc.fields.insert(id.to_string(), String::new());
            }
            doc.forms.insert(
                form_id.to_string(),
                field_ids.iter().map(|id| id.to_string()).collect(),
            );
        }
        self
    }

    /// Simulate the user typing into a field
    pub fn set_value(&self, id: &str, value: &str) {
        self.inner
            .borrow_mut()
            .fields
            .insert(id.to_string(), value.to_string());
    }

    pub fn value(&self, id: &str) -> Option<String> {
        self.inner.borrow().fields.get(id).cloned()
    }

    pub fn inner_html(&self, target: Target<'_>) -> Option<String> {
        self.inner
            .borrow()
            .containers
            .get(&target.to_string())
            .cloned()
    }

    /// Markup of every body-level node carrying `class`, in document order
    pub fn body_html(&self, class: &str) -> Vec<String> {
        self.inner
            .borrow()
            .body
            .iter()
            .filter(|node| node.class == class)
            .map(|node| node.html.clone())
            .collect()
    }
}

impl Dom for MemoryDom {
    fn exists(&self, target: Target<'_>) -> bool {
        let doc = self.inner.borrow();
        if doc.containers.contains_key(&target.to_string()) {
            return true;
        }

        match target {
            Target::Id(id) => doc.forms.contains_key(id) || doc.fields.contains_key(id),
            Target::Class(class) => doc.body.iter().any(|node| node.class == class),
        }
    }

    fn set_inner_html(&self, target: Target<'_>, html: &Html) -> Result<(), DomError> {
        let mut doc = self.inner.borrow_mut();
        let content = doc
            .containers
            .get_mut(&target.to_string())
            .ok_or_else(|| DomError::missing(target))?;
        *content = html.as_str().to_string();
        Ok(())
    }

    fn input_value(&self, id: &str) -> Result<String, DomError> {
        self.value(id).ok_or_else(|| DomError::missing(Target::Id(id)))
    }

    fn reset_form(&self, id: &str) -> Result<(), DomError> {
        let mut doc = self.inner.borrow_mut();
        let field_ids = doc
            .forms
            .get(id)
            .cloned()
            .ok_or_else(|| DomError::missing(Target::Id(id)))?;

        for field in field_ids {
            doc.fields.insert(field, String::new());
        }
        Ok(())
    }

    fn append_to_body(&self, class: &str, html: &Html) -> Result<(), DomError> {
        self.inner.borrow_mut().body.push(BodyNode {
            class: class.to_string(),
            html: html.as_str().to_string(),
        });
        Ok(())
    }

    fn remove_first(&self, class: &str) -> bool {
        let mut doc = self.inner.borrow_mut();
        match doc.body.iter().position(|node| node.class == class) {
            Some(index) => {
                doc.body.remove(index);
                true
            }
            None => false,
        }
    }

    fn count(&self, class: &str) -> usize {
        self.inner
            .borrow()
            .body
            .iter()
            .filter(|node| node.class == class)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_inner_html_replaces_content() {
        let dom = MemoryDom::new().with_container(Target::Id("appointmentRows"));

        dom.set_inner_html(Target::Id("appointmentRows"), &Html::text("first"))
            .unwrap();
        dom.set_inner_html(Target::Id("appointmentRows"), &Html::text("second"))
            .unwrap();

        assert_eq!(
            dom.inner_html(Target::Id("appointmentRows")).as_deref(),
            Some("second")
        );
    }

    #[test]
    fn test_set_inner_html_on_missing_container() {
        let dom = MemoryDom::new();
        let err = dom
            .set_inner_html(Target::Class("card-grid"), &Html::text("x"))
            .unwrap_err();
        assert_eq!(err, DomError::missing(Target::Class("card-grid")));
    }

    #[test]
    fn test_reset_form_clears_fields() {
        let dom = MemoryDom::new().with_form("prescriptionForm", &["medicine", "dosage"]);
        dom.set_value("medicine", "Aspirin");
        dom.set_value("dosage", "500mg");

        dom.reset_form("prescriptionForm").unwrap();

        assert_eq!(dom.value("medicine").as_deref(), Some(""));
        assert_eq!(dom.value("dosage").as_deref(), Some(""));
        assert!(dom.reset_form("otherForm").is_err());
    }

    #[test]
    fn test_clones_share_document() {
        let dom = MemoryDom::new();
        let handle = dom.clone();

        handle.append_to_body("loader", &Html::text("Loading...")).unwrap();

        assert_eq!(dom.count("loader"), 1);
        assert!(dom.remove_first("loader"));
        assert!(!handle.remove_first("loader"));
    }
}
