use std::sync::atomic::{AtomicU64, Ordering};

use super::{AttrValue, Attributes, Content};
use crate::node_ref::NodeRef;

static NEXT_KEY: AtomicU64 = AtomicU64::new(0);

fn generate_key(prefix: &str) -> String {
    let id = NEXT_KEY.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Declarative description of a single native element.
///
/// Built once per render and handed to a [`Document`](crate::Document) to mount.
#[derive(Debug, Clone)]
pub struct Element {
    /// Generated identity, used when the element carries no `id` attribute.
    pub key: String,
    pub tag: String,
    pub attributes: Attributes,
    pub content: Content,
    /// Detached from the element when it is mounted.
    pub node_ref: NodeRef,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            key: generate_key(&tag),
            tag,
            attributes: Attributes::new(),
            content: Content::None,
            node_ref: NodeRef::None,
        }
    }

    pub fn input() -> Self {
        Self::new("input")
    }

    // Identity
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id.into())
    }

    /// The `id` attribute if set, otherwise the generated key.
    pub fn dom_id(&self) -> &str {
        self.attributes
            .get("id")
            .and_then(AttrValue::as_str)
            .unwrap_or(self.key.as_str())
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }

    pub fn attrs<K, V>(mut self, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        self.attributes.extend(attrs);
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class.into())
    }

    pub fn disabled(self, disabled: bool) -> Self {
        self.attr("disabled", disabled)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn node_ref(mut self, node_ref: impl Into<NodeRef>) -> Self {
        self.node_ref = node_ref.into();
        self
    }

    // Accessors
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    pub fn class_list(&self) -> Vec<&str> {
        self.attributes
            .get("class")
            .and_then(AttrValue::as_str)
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn is_disabled(&self) -> bool {
        self.attributes
            .get("disabled")
            .and_then(AttrValue::as_bool)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_id_falls_back_to_key() {
        let el = Element::input();
        assert!(el.dom_id().starts_with("input-"));

        let el = el.id("email");
        assert_eq!(el.dom_id(), "email");
    }

    #[test]
    fn test_class_list_splits_on_whitespace() {
        let el = Element::input().class("a  b c");
        assert_eq!(el.class_list(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_is_disabled_defaults_false() {
        assert!(!Element::input().is_disabled());
        assert!(Element::input().disabled(true).is_disabled());
    }
}
