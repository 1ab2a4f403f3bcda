//! Read-side helpers for the properties panel.
//!
//! The panel shows a handful of well-known style properties. Values are
//! free-form strings, so each accessor documents the fallback used when a
//! property is missing or unparsable.

use crate::element::{Element, ElementPatch, ElementType};

/// Fallback font size in pixels.
pub const DEFAULT_FONT_SIZE_PX: i64 = 16;

/// Hex shown for transparent, missing or unrecognized colors.
const FALLBACK_HEX: &str = "#ffffff";

/// Named colors the editor's own defaults use, plus the CSS basics.
const NAMED_COLORS: &[(&str, &str)] = &[
    ("black", "#000000"),
    ("white", "#ffffff"),
    ("red", "#ff0000"),
    ("green", "#008000"),
    ("blue", "#0000ff"),
    ("yellow", "#ffff00"),
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("orange", "#ffa500"),
    ("purple", "#800080"),
];

/// Which editor the panel shows for an element's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEditor {
    /// Single-line image URL input.
    ImageUrl,
    /// Multi-line text area.
    Text,
}

/// Display name for an element type.
pub fn type_display_name(element_type: ElementType) -> &'static str {
    match element_type {
        ElementType::Text => "Text Block",
        ElementType::Heading => "Heading",
        ElementType::Button => "Button",
        ElementType::Image => "Image",
        other => other.tag(),
    }
}

/// Parse the leading integer of a CSS length the way `parseInt` does
/// (`"24px"` → 24, `"12px 24px"` → 12, `"auto"` → none).
///
/// Digit runs too long for `i64` saturate instead of failing.
pub fn leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return None;
    }
    let signed = if negative { format!("-{}", digits) } else { digits.to_string() };
    Some(signed.parse::<i64>().unwrap_or(if negative { i64::MIN } else { i64::MAX }))
}

/// Normalize a CSS color to `#rrggbb` for color pickers.
pub fn color_to_hex(color: Option<&str>) -> String {
    let Some(color) = color.map(str::trim) else {
        return FALLBACK_HEX.to_string();
    };
    if color.is_empty() || color.eq_ignore_ascii_case("transparent") {
        return FALLBACK_HEX.to_string();
    }
    if color.starts_with('#') {
        return color.to_string();
    }
    if let Some(hex) = rgb_to_hex(color) {
        return hex;
    }
    let lower = color.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, hex)| hex.to_string())
        .unwrap_or_else(|| FALLBACK_HEX.to_string())
}

/// `rgb()` / `rgba()` to hex, in comma or space separated form. Channels are
/// clamped to 0..=255 and percentages scaled; alpha is ignored.
fn rgb_to_hex(color: &str) -> Option<String> {
    let lower = color.to_ascii_lowercase();
    let inner = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    // Space separated syntax puts alpha after a slash.
    let rgb = inner.split('/').next()?;
    let channels: Vec<u8> = rgb
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .take(3)
        .map(parse_channel)
        .collect::<Option<_>>()?;
    if channels.len() < 3 {
        return None;
    }
    Some(format!("#{:02x}{:02x}{:02x}", channels[0], channels[1], channels[2]))
}

fn parse_channel(part: &str) -> Option<u8> {
    let value = match part.strip_suffix('%') {
        Some(percent) => percent.parse::<f64>().ok()? * 255.0 / 100.0,
        None => part.parse::<f64>().ok()?,
    };
    if !value.is_finite() {
        return None;
    }
    Some(value.round().clamp(0.0, 255.0) as u8)
}

/// A read-only view of an element's properties with the panel's fallbacks.
#[derive(Debug, Clone, Copy)]
pub struct PropertiesView<'a> {
    element: &'a Element,
}

impl<'a> PropertiesView<'a> {
    pub fn new(element: &'a Element) -> Self {
        Self { element }
    }

    pub fn title(&self) -> String {
        format!("Properties: {}", type_display_name(self.element.element_type))
    }

    pub fn content_editor(&self) -> ContentEditor {
        match self.element.element_type {
            ElementType::Image => ContentEditor::ImageUrl,
            _ => ContentEditor::Text,
        }
    }

    /// Buttons get an extra section with border radius.
    pub fn has_button_section(&self) -> bool {
        self.element.element_type == ElementType::Button
    }

    /// Raw width value; empty when unset.
    pub fn width(&self) -> &'a str {
        self.element.styles.get("width").unwrap_or("")
    }

    pub fn background_hex(&self) -> String {
        color_to_hex(self.element.styles.get("backgroundColor"))
    }

    pub fn color_hex(&self) -> String {
        color_to_hex(self.element.styles.get("color"))
    }

    /// Font size in pixels; zero and unparsable values fall back to 16.
    pub fn font_size_px(&self) -> i64 {
        self.int_style("fontSize", DEFAULT_FONT_SIZE_PX)
    }

    pub fn padding_px(&self) -> i64 {
        self.int_style("padding", 0)
    }

    pub fn border_radius_px(&self) -> i64 {
        self.int_style("borderRadius", 0)
    }

    fn int_style(&self, property: &str, fallback: i64) -> i64 {
        self.element
            .styles
            .get(property)
            .and_then(leading_int)
            .filter(|&n| n != 0)
            .unwrap_or(fallback)
    }
}

/// Patch setting a pixel-valued style from a numeric input.
pub fn px_style_patch(property: &str, value: i64) -> ElementPatch {
    ElementPatch::new().with_style(property, format!("{}px", value))
}
