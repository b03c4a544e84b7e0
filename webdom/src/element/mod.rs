mod attributes;
mod content;
mod node;

pub use attributes::{is_valid_attribute_name, AttrValue, Attributes};
pub use content::Content;
pub use node::Element;

/// Elements that never have content or a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Find an element by its `id` attribute.
pub fn find_element<'a>(elements: &'a [Element], id: &str) -> Option<&'a Element> {
    elements.iter().find(|el| el.dom_id() == id)
}
