//! Document access through web-sys

use hospital_portal::{Dom, DomError, Html, Target};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
};

/// The page's live document
#[derive(Debug, Clone)]
pub struct BrowserDom {
    document: Document,
}

impl BrowserDom {
    pub fn new() -> Result<Self, DomError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| DomError::Browser("No document".to_string()))?;
        Ok(Self { document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn find(&self, target: Target<'_>) -> Option<Element> {
        match target {
            Target::Id(id) => self.document.get_element_by_id(id),
            Target::Class(class) => self.first_with_class(class),
        }
    }

    fn first_with_class(&self, class: &str) -> Option<Element> {
        self.document.get_elements_by_class_name(class).item(0)
    }
}

fn browser_error(error: JsValue) -> DomError {
    DomError::Browser(error.as_string().unwrap_or_else(|| format!("{:?}", error)))
}

impl Dom for BrowserDom {
    fn exists(&self, target: Target<'_>) -> bool {
        self.find(target).is_some()
    }

    fn set_inner_html(&self, target: Target<'_>, html: &Html) -> Result<(), DomError> {
        let element = self.find(target).ok_or_else(|| DomError::missing(target))?;
        element.set_inner_html(html.as_str());
        Ok(())
    }

    fn input_value(&self, id: &str) -> Result<String, DomError> {
        let element = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| DomError::missing(Target::Id(id)))?;

        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            Ok(input.value())
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            Ok(select.value())
        } else if let Some(text) = element.dyn_ref::<HtmlTextAreaElement>() {
            Ok(text.value())
        } else {
            Err(DomError::Browser(format!("#{} is not a form field", id)))
        }
    }

    fn reset_form(&self, id: &str) -> Result<(), DomError> {
        let form = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| DomError::missing(Target::Id(id)))?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| DomError::Browser(format!("#{} is not a form", id)))?;
        form.reset();
        Ok(())
    }

    fn append_to_body(&self, class: &str, html: &Html) -> Result<(), DomError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| DomError::Browser("No body".to_string()))?;

        let element = self.document.create_element("div").map_err(browser_error)?;
        element.set_class_name(class);
        element.set_inner_html(html.as_str());
        body.append_child(&element).map_err(browser_error)?;
        Ok(())
    }

    fn remove_first(&self, class: &str) -> bool {
        match self.first_with_class(class) {
            Some(element) => {
                element.remove();
                true
            }
            None => false,
        }
    }

    fn count(&self, class: &str) -> usize {
        self.document.get_elements_by_class_name(class).length() as usize
    }
}
