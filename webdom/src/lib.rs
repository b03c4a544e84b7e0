pub mod document;
pub mod element;
pub mod node_ref;
pub mod render;

pub use document::{Document, MountError};
pub use element::{find_element, is_valid_attribute_name, AttrValue, Attributes, Content, Element};
pub use node_ref::{NodeHandle, NodeRef, RefCallback, RefObject};
pub use render::render_to_string;
