//! Default content and styles for newly created elements.

use crate::element::{ElementType, Styles};
use serde::{Deserialize, Serialize};

/// Primary color used when the theme does not provide one.
pub const DEFAULT_PRIMARY_COLOR: &str = "#4a90e2";

/// Theme input supplied by the template collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    pub primary_color: Option<String>,
}

impl Theme {
    pub fn with_primary_color(color: impl Into<String>) -> Self {
        Self {
            primary_color: Some(color.into()),
        }
    }

    /// The primary color, or [`DEFAULT_PRIMARY_COLOR`] when unset or blank.
    pub fn primary(&self) -> &str {
        match self.primary_color.as_deref() {
            Some(color) if !color.trim().is_empty() => color,
            _ => DEFAULT_PRIMARY_COLOR,
        }
    }
}

/// Style set shared by every element type.
fn base_styles() -> Styles {
    Styles::new()
        .with("width", "100%")
        .with("padding", "10px")
        .with("color", "#333")
        .with("backgroundColor", "transparent")
}

/// Default content for a new element of the given type.
pub fn default_content(element_type: ElementType) -> &'static str {
    match element_type {
        ElementType::Text => "Add your text here",
        ElementType::Heading => "Heading",
        ElementType::Button => "Click Me",
        _ => "",
    }
}

/// Default styles for a new element of the given type.
pub fn default_styles(element_type: ElementType, theme: &Theme) -> Styles {
    let primary = theme.primary();
    let base = base_styles();
    match element_type {
        ElementType::Text => base.with("fontSize", "16px"),
        ElementType::Heading => base
            .with("fontSize", "24px")
            .with("fontWeight", "bold")
            .with("color", primary),
        ElementType::Button => base
            .with("width", "auto")
            .with("backgroundColor", primary)
            .with("color", "white")
            .with("borderRadius", "4px")
            .with("cursor", "pointer"),
        ElementType::Image => base.with("height", "200px"),
        ElementType::Form
        | ElementType::Video
        | ElementType::Gallery
        | ElementType::Map
        | ElementType::Default => base,
    }
}

/// Content and styles for a new element. Total over every type.
pub fn create_defaults(element_type: ElementType, theme: &Theme) -> (String, Styles) {
    (
        default_content(element_type).to_string(),
        default_styles(element_type, theme),
    )
}
