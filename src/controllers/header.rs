//! Shared site header

use crate::dom::{Dom, DomError, Target};
use crate::render::site_header;

pub const HEADER: Target<'static> = Target::Id("header");

pub fn render_header<D: Dom + ?Sized>(dom: &D) -> Result<(), DomError> {
    dom.set_inner_html(HEADER, &site_header())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDom;

    #[test]
    fn test_render_header() {
        let dom = MemoryDom::new().with_container(HEADER);

        render_header(&dom).unwrap();

        assert!(dom
            .inner_html(HEADER)
            .unwrap()
            .contains(r#"<ul class="nav">"#));
    }

    #[test]
    fn test_render_header_without_slot() {
        assert_eq!(
            render_header(&MemoryDom::new()),
            Err(DomError::missing(HEADER))
        );
    }
}
