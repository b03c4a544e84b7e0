//! Text input widget - a styled native `<input>` element.

mod config;
pub mod styles;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use webdom::{is_valid_attribute_name, AttrValue, Attributes, Element, NodeRef};

pub use config::TextInputConfig;
pub use styles::{class_string, compose_classes};

use super::ParseError;

/// Value of the `data-testid` attribute on every rendered text input.
pub const TEST_ID: &str = "textInput";

/// Attribute names the widget owns. Pass-through values under these names,
/// in any ASCII case, are dropped so they cannot override or duplicate the
/// computed ones.
pub const RESERVED_ATTRIBUTES: &[&str] = &[
    "className",
    "width",
    "isDisabled",
    "inputRef",
    "class",
    "ref",
    "data-testid",
    "disabled",
    "id",
    "name",
    "type",
];

/// Whether `name` collides with an attribute the widget owns.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_ATTRIBUTES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(name))
}

/// The `type` of a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Email,
    Number,
    Password,
    Search,
    Tel,
    Text,
    Url,
}

impl InputType {
    pub const ALL: [InputType; 7] = [
        Self::Email,
        Self::Number,
        Self::Password,
        Self::Search,
        Self::Tel,
        Self::Text,
        Self::Url,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Number => "number",
            Self::Password => "password",
            Self::Search => "search",
            Self::Tel => "tel",
            Self::Text => "text",
            Self::Url => "url",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseError::InputType(s.to_string()))
    }
}

/// Width variant of a text input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Width {
    /// Intrinsic width, no modifier class.
    #[default]
    Default,
    /// Fill the container (`w-full`).
    Full,
}

impl Width {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Width {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "full" => Ok(Self::Full),
            other => Err(ParseError::Width(other.to_string())),
        }
    }
}

/// A text input widget builder.
///
/// `id`, `name` and the input type are constructor arguments; everything
/// else is optional.
///
/// # Example
///
/// ```
/// use pacific::widgets::{InputType, TextInput, Width};
///
/// let el = TextInput::new("q", "q", InputType::Search)
///     .width(Width::Full)
///     .attr("placeholder", "Search")
///     .build();
///
/// assert_eq!(el.attribute("data-testid").and_then(|v| v.as_str()), Some("textInput"));
/// assert!(!el.is_disabled());
/// ```
#[derive(Clone, Debug)]
pub struct TextInput {
    id: String,
    name: String,
    kind: InputType,
    class_name: Option<String>,
    width: Width,
    disabled: bool,
    node_ref: NodeRef,
    attributes: Attributes,
}

impl TextInput {
    /// Create a new text input builder.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: InputType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            class_name: None,
            width: Width::Default,
            disabled: false,
            node_ref: NodeRef::None,
            attributes: Attributes::new(),
        }
    }

    /// Extra classes, placed ahead of all computed classes.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Reference attached to the rendered element on mount.
    pub fn node_ref(mut self, node_ref: impl Into<NodeRef>) -> Self {
        self.node_ref = node_ref.into();
        self
    }

    /// Pass a native attribute through to the element.
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

    pub fn placeholder(self, placeholder: impl Into<String>) -> Self {
        self.attr("placeholder", placeholder.into())
    }

    pub fn value(self, value: impl Into<String>) -> Self {
        self.attr("value", value.into())
    }

    pub fn classes(&self) -> String {
        class_string(self.class_name.as_deref(), self.width, self.disabled)
    }

    /// Build the input element.
    pub fn build(self) -> Element {
        let class = self.classes();
        log::trace!(
            "[text_input] build {} (type={}, width={}, disabled={})",
            self.id,
            self.kind,
            self.width,
            self.disabled
        );

        let mut el = Element::input()
            .attr("data-testid", TEST_ID)
            .class(class)
            .disabled(self.disabled)
            .id(self.id)
            .attr("name", self.name)
            .attr("type", self.kind.as_str())
            .node_ref(self.node_ref);

        for (name, value) in self.attributes {
            if is_reserved(&name) {
                log::warn!("[text_input] dropping reserved pass-through attribute {name}={value}");
                continue;
            }
            if !is_valid_attribute_name(&name) {
                log::warn!("[text_input] dropping invalid pass-through attribute name {name:?}");
                continue;
            }
            el.attributes.set(name, value);
        }

        el
    }
}

impl From<TextInput> for Element {
    fn from(input: TextInput) -> Self {
        input.build()
    }
}
