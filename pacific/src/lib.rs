pub mod logging;
pub mod widgets;

pub use webdom;

pub mod prelude {
    pub use crate::widgets::{InputType, TextInput, TextInputConfig, Width};
    pub use webdom::{Document, Element, NodeHandle, NodeRef, RefObject};
}
