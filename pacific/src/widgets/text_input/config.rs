use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use webdom::{AttrValue, Element, NodeRef};

use super::{InputType, TextInput, Width};

/// Deserializable text input configuration.
///
/// Keys follow the camelCase names used by front-end templates. Any key not
/// listed here is collected into `attributes` and passed through; `null`
/// values are omitted.
///
/// ```json
/// { "id": "q", "name": "q", "type": "search", "width": "full", "placeholder": "Search" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInputConfig {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: InputType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default)]
    pub width: Width,
    #[serde(default)]
    pub is_disabled: bool,
    /// Legacy string reference name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_ref: Option<String>,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Option<AttrValue>>,
}

impl TextInputConfig {
    pub fn into_widget(self) -> TextInput {
        let mut input = TextInput::new(self.id, self.name, self.kind)
            .width(self.width)
            .disabled(self.is_disabled)
            .attrs(
                self.attributes
                    .into_iter()
                    .filter_map(|(name, value)| Some((name, value?))),
            );
        if let Some(class_name) = self.class_name {
            input = input.class_name(class_name);
        }
        if let Some(name) = self.input_ref {
            input = input.node_ref(NodeRef::Named(name));
        }
        input
    }

    pub fn render(self) -> Element {
        self.into_widget().build()
    }
}

impl From<TextInputConfig> for TextInput {
    fn from(config: TextInputConfig) -> Self {
        config.into_widget()
    }
}
