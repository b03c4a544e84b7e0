//! Utility-class tables for the text input and their composition order.

use super::Width;

pub const BASE_STYLES: &[&str] = &[
    "text-black",
    "p-2",
    "leading-[normal]",
    "border",
    "border-gray-60",
];

pub const HOVER_STYLES: &[&str] = &[
    "hover:border-pacific",
    "hover:outline-1",
    "hover:outline-pacific",
    "hover:outline",
];

pub const FOCUS_STYLES: &[&str] = &[
    "focus:outline-1",
    "focus:outline-pacific",
    "focus:outline-dotted",
    "focus:box-shadow-glow",
];

pub const FULL_WIDTH_STYLES: &[&str] = &["w-full"];

pub const DISABLED_STYLES: &[&str] = &[
    "bg-gray-20",
    "text-gray",
    "cursor-not-allowed",
    "outline-0",
    "border-gray-60",
];

impl Width {
    pub fn styles(self) -> &'static [&'static str] {
        match self {
            Width::Default => &[],
            Width::Full => FULL_WIDTH_STYLES,
        }
    }
}

/// Ordered class tokens for a text input.
///
/// Order: caller class, disabled (when disabled), base, hover, focus, width.
/// Disabled tokens sit ahead of the base tokens; `border-gray-60` therefore
/// appears twice for a disabled input.
pub fn compose_classes(class_name: Option<&str>, width: Width, disabled: bool) -> Vec<&str> {
    let mut classes = Vec::with_capacity(
        1 + DISABLED_STYLES.len() + BASE_STYLES.len() + HOVER_STYLES.len() + FOCUS_STYLES.len() + 1,
    );

    if let Some(class_name) = class_name.filter(|c| !c.is_empty()) {
        classes.push(class_name);
    }
    if disabled {
        classes.extend_from_slice(DISABLED_STYLES);
    }
    classes.extend_from_slice(BASE_STYLES);
    classes.extend_from_slice(HOVER_STYLES);
    classes.extend_from_slice(FOCUS_STYLES);
    classes.extend_from_slice(width.styles());
    classes
}

/// The `class` attribute string: [`compose_classes`] joined by single spaces.
pub fn class_string(class_name: Option<&str>, width: Width, disabled: bool) -> String {
    compose_classes(class_name, width, disabled).join(" ")
}
