//! Reference handles for imperative access to mounted elements.
//!
//! A [`NodeRef`] travels with an [`Element`](crate::Element) description and is
//! attached by the [`Document`](crate::Document) when the element is mounted.
//! How it is attached depends on the variant.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::document::MountError;
use crate::element::{AttrValue, Element};

/// Callback invoked with `Some(node)` on mount and `None` on unmount.
pub type RefCallback = Arc<dyn Fn(Option<&NodeHandle>) + Send + Sync>;

/// How a caller wants to reach the element once it exists.
#[derive(Clone, Default)]
pub enum NodeRef {
    #[default]
    None,
    /// A shared slot the document fills on mount and clears on unmount.
    Handle(RefObject),
    /// Legacy string reference, resolved through [`Document::named_ref`](crate::Document::named_ref).
    Named(String),
    Callback(RefCallback),
}

impl NodeRef {
    pub fn callback(f: impl Fn(Option<&NodeHandle>) + Send + Sync + 'static) -> Self {
        Self::Callback(Arc::new(f))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl From<RefObject> for NodeRef {
    fn from(value: RefObject) -> Self {
        Self::Handle(value)
    }
}

impl From<&RefObject> for NodeRef {
    fn from(value: &RefObject) -> Self {
        Self::Handle(value.clone())
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Handle(r) => write!(f, "Handle(attached: {})", r.current().is_some()),
            Self::Named(name) => write!(f, "Named({name:?})"),
            Self::Callback(_) => write!(f, "Callback(...)"),
        }
    }
}

/// Shared slot holding the mounted node, if any.
///
/// Clones share the same slot.
#[derive(Clone, Default)]
pub struct RefObject {
    slot: Arc<RwLock<Option<NodeHandle>>>,
}

impl RefObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// The node this reference currently points at.
    pub fn current(&self) -> Option<NodeHandle> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn set(&self, node: Option<NodeHandle>) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = node;
    }
}

impl fmt::Debug for RefObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefObject")
            .field("attached", &self.current().is_some())
            .finish()
    }
}

/// Live, shared access to a mounted element.
#[derive(Clone)]
pub struct NodeHandle {
    inner: Arc<RwLock<Element>>,
}

impl NodeHandle {
    pub(crate) fn new(element: Element) -> Self {
        Self {
            inner: Arc::new(RwLock::new(element)),
        }
    }

    fn read<T>(&self, f: impl FnOnce(&Element) -> T) -> T {
        f(&self.inner.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn write<T>(&self, f: impl FnOnce(&mut Element) -> T) -> T {
        f(&mut self.inner.write().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn dom_id(&self) -> String {
        self.read(|el| el.dom_id().to_string())
    }

    pub fn tag(&self) -> String {
        self.read(|el| el.tag.clone())
    }

    pub fn attribute(&self, name: &str) -> Option<AttrValue> {
        self.read(|el| el.attributes.get(name).cloned())
    }

    /// Set an attribute on the mounted element.
    ///
    /// The `id` is the element's identity in its document and cannot be
    /// changed while mounted.
    pub fn set_attribute(&self, name: &str, value: impl Into<AttrValue>) -> Result<(), MountError> {
        self.check_mutable(name)?;
        let value = value.into();
        log::trace!("[ref] set {name}={value} on {}", self.dom_id());
        self.write(|el| el.attributes.set(name, value));
        Ok(())
    }

    pub fn remove_attribute(&self, name: &str) -> Result<Option<AttrValue>, MountError> {
        self.check_mutable(name)?;
        Ok(self.write(|el| el.attributes.remove(name)))
    }

    fn check_mutable(&self, name: &str) -> Result<(), MountError> {
        if name.eq_ignore_ascii_case("id") {
            let id = self.dom_id();
            log::warn!("[ref] refusing to change id of mounted element {id}");
            return Err(MountError::IdChange(id));
        }
        Ok(())
    }

    /// Current `value` attribute as text.
    pub fn value(&self) -> Option<String> {
        self.attribute("value").map(|v| v.to_string())
    }

    pub fn set_value(&self, value: impl Into<String>) {
        let value = value.into();
        log::trace!("[ref] set value={value} on {}", self.dom_id());
        self.write(|el| el.attributes.set("value", value));
    }

    pub fn is_disabled(&self) -> bool {
        self.read(|el| el.is_disabled())
    }

    /// Copy of the element as it currently stands.
    pub fn snapshot(&self) -> Element {
        self.read(Element::clone)
    }

    pub fn ptr_eq(&self, other: &NodeHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.read(|el| f.debug_tuple("NodeHandle").field(el).finish())
    }
}
