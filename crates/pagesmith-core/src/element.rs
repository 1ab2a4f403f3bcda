//! Page element definitions.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an element.
///
/// Freshly created ids are backed by a v4 UUID so two elements created in
/// quick succession never collide. Ids read back from persisted documents
/// are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Generate a new, never before seen id.
    pub fn generate() -> Self {
        Self(format!("element-{}", Uuid::new_v4()))
    }

    /// Wrap an existing id (e.g. one loaded from storage).
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(raw: &str) -> Self {
        Self::from_raw(raw)
    }
}

/// Kind of element that can be placed on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ElementType {
    Heading,
    Text,
    Image,
    Button,
    Form,
    Video,
    Gallery,
    Map,
    /// Generic fallback for tags the editor does not know about.
    #[default]
    Default,
}

impl ElementType {
    /// Every type offered by the palette, in palette order.
    pub const PALETTE: [ElementType; 8] = [
        ElementType::Heading,
        ElementType::Text,
        ElementType::Image,
        ElementType::Button,
        ElementType::Form,
        ElementType::Video,
        ElementType::Gallery,
        ElementType::Map,
    ];

    /// The wire tag for this type.
    pub fn tag(self) -> &'static str {
        match self {
            ElementType::Heading => "heading",
            ElementType::Text => "text",
            ElementType::Image => "image",
            ElementType::Button => "button",
            ElementType::Form => "form",
            ElementType::Video => "video",
            ElementType::Gallery => "gallery",
            ElementType::Map => "map",
            ElementType::Default => "default",
        }
    }

    /// Parse a wire tag. Returns `None` for anything that is not an exact tag.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "heading" => Some(ElementType::Heading),
            "text" => Some(ElementType::Text),
            "image" => Some(ElementType::Image),
            "button" => Some(ElementType::Button),
            "form" => Some(ElementType::Form),
            "video" => Some(ElementType::Video),
            "gallery" => Some(ElementType::Gallery),
            "map" => Some(ElementType::Map),
            "default" => Some(ElementType::Default),
            _ => None,
        }
    }

    /// Parse a wire tag, falling back to [`ElementType::Default`].
    pub fn from_tag_lossy(tag: &str) -> Self {
        Self::parse(tag).unwrap_or_default()
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<String> for ElementType {
    fn from(tag: String) -> Self {
        Self::from_tag_lossy(&tag)
    }
}

impl From<ElementType> for String {
    fn from(ty: ElementType) -> Self {
        ty.tag().to_string()
    }
}

/// Style properties of an element, keyed by camelCase CSS property name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Styles(BTreeMap<String, String>);

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    /// Set a property, returning the previous value.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(property.into(), value.into())
    }

    /// Builder-style variant of [`Styles::set`].
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        self.0.remove(property)
    }

    /// Shallow merge: keys in `other` override, everything else is kept.
    pub fn merge(&mut self, other: &Styles) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Styles {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A single element on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub element_type: ElementType,
    /// Canvas-relative position of the top-left corner, in pixels.
    pub position: Point,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub styles: Styles,
}

impl Element {
    /// Create an element with a freshly generated id.
    pub fn new(element_type: ElementType, position: Point, content: String, styles: Styles) -> Self {
        Self {
            id: ElementId::generate(),
            element_type,
            position,
            content,
            styles,
        }
    }

    /// Create an element with an explicit id.
    pub fn with_id(
        id: ElementId,
        element_type: ElementType,
        position: Point,
        content: String,
        styles: Styles,
    ) -> Self {
        Self {
            id,
            element_type,
            position,
            content,
            styles,
        }
    }
}

/// A partial update to an element. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementPatch {
    pub element_type: Option<ElementType>,
    pub position: Option<Point>,
    pub content: Option<String>,
    /// Merged into the existing styles rather than replacing them.
    pub styles: Option<Styles>,
}

impl ElementPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// A patch that only moves the element.
    pub fn moved_to(position: Point) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_type(mut self, element_type: ElementType) -> Self {
        self.element_type = Some(element_type);
        self
    }

    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles
            .get_or_insert_with(Styles::new)
            .set(property, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.element_type.is_none()
            && self.position.is_none()
            && self.content.is_none()
            && self.styles.is_none()
    }

    /// Produce the patched copy of `element`. The id never changes.
    pub fn apply(&self, element: &Element) -> Element {
        let mut patched = element.clone();
        if let Some(element_type) = self.element_type {
            patched.element_type = element_type;
        }
        if let Some(position) = self.position {
            patched.position = position;
        }
        if let Some(content) = &self.content {
            patched.content = content.clone();
        }
        if let Some(styles) = &self.styles {
            patched.styles.merge(styles);
        }
        patched
    }
}
