//! Immutable document snapshots and the operations deriving them.

use crate::element::{Element, ElementId, ElementPatch, ElementType};
use crate::factory::{Theme, create_defaults};
use kurbo::Point;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

/// Document errors.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Element not found: {0}")]
    NotFound(ElementId),
    #[error("Duplicate element id: {0}")]
    DuplicateId(ElementId),
    #[error("Element {0} has a non-finite position")]
    NonFinitePosition(ElementId),
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

fn is_finite(point: Point) -> bool {
    point.x.is_finite() && point.y.is_finite()
}

/// Replace non-finite coordinates with zero so positions stay finite.
fn finite_or_zero(point: Point) -> Point {
    let fix = |v: f64| if v.is_finite() { v } else { 0.0 };
    Point::new(fix(point.x), fix(point.y))
}

/// The ordered element collection at one point in time.
///
/// Snapshots never change after creation. Every operation derives a new
/// snapshot that shares the untouched elements with its parent, so keeping
/// many of them in the undo history only costs a pointer per element.
/// Order is paint order: later elements are drawn on top.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<Element>")]
pub struct Snapshot {
    elements: Arc<[Arc<Element>]>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl Snapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self {
            elements: Arc::from(Vec::new()),
        }
    }

    fn from_entries(entries: Vec<Arc<Element>>) -> Self {
        Self {
            elements: Arc::from(entries),
        }
    }

    /// Build a snapshot from loaded elements, checking id uniqueness and
    /// position finiteness.
    pub fn from_elements(elements: Vec<Element>) -> DocumentResult<Self> {
        let mut seen = HashSet::with_capacity(elements.len());
        for element in &elements {
            if !seen.insert(&element.id) {
                return Err(DocumentError::DuplicateId(element.id.clone()));
            }
            if !is_finite(element.position) {
                return Err(DocumentError::NonFinitePosition(element.id.clone()));
            }
        }
        Ok(Self::from_entries(elements.into_iter().map(Arc::new).collect()))
    }

    /// Add a new element of the given type, appended on top of the others.
    ///
    /// Returns the derived snapshot together with the created element.
    pub fn add_element(&self, element_type: ElementType, position: Point, theme: &Theme) -> (Self, Element) {
        let position = if is_finite(position) {
            position
        } else {
            log::warn!("Non-finite position {:?} for new {} element, using zero", position, element_type);
            finite_or_zero(position)
        };
        let (content, styles) = create_defaults(element_type, theme);
        let element = Element::new(element_type, position, content, styles);

        let mut entries = self.elements.to_vec();
        entries.push(Arc::new(element.clone()));
        log::debug!("Added {} element {}", element_type, element.id);
        (Self::from_entries(entries), element)
    }

    /// Append a pre-built element. A duplicate id leaves the snapshot unchanged.
    pub fn insert_element(&self, mut element: Element) -> Self {
        if self.contains(&element.id) {
            log::warn!("Refusing to insert duplicate element id {}", element.id);
            return self.clone();
        }
        element.position = finite_or_zero(element.position);
        let mut entries = self.elements.to_vec();
        entries.push(Arc::new(element));
        Self::from_entries(entries)
    }

    /// Merge `patch` into the element with the given id.
    ///
    /// An unknown id is a no-op: the returned snapshot is equal to `self`.
    /// Order never changes.
    pub fn update_element(&self, id: &ElementId, patch: &ElementPatch) -> Self {
        self.try_update_element(id, patch).unwrap_or_else(|_| {
            log::debug!("Update of unknown element {} ignored", id);
            self.clone()
        })
    }

    /// Strict variant of [`Snapshot::update_element`].
    pub fn try_update_element(&self, id: &ElementId, patch: &ElementPatch) -> DocumentResult<Self> {
        let index = self
            .index_of(id)
            .ok_or_else(|| DocumentError::NotFound(id.clone()))?;

        let mut patched = patch.apply(&self.elements[index]);
        if !is_finite(patched.position) {
            log::warn!("Non-finite position for element {}, keeping previous position", id);
            patched.position = self.elements[index].position;
        }

        let mut entries = self.elements.to_vec();
        entries[index] = Arc::new(patched);
        Ok(Self::from_entries(entries))
    }

    /// Remove the element with the given id. An unknown id is a no-op.
    pub fn delete_element(&self, id: &ElementId) -> Self {
        self.try_delete_element(id).unwrap_or_else(|_| {
            log::debug!("Delete of unknown element {} ignored", id);
            self.clone()
        })
    }

    /// Strict variant of [`Snapshot::delete_element`].
    pub fn try_delete_element(&self, id: &ElementId) -> DocumentResult<Self> {
        if !self.contains(id) {
            return Err(DocumentError::NotFound(id.clone()));
        }
        let entries = self
            .elements
            .iter()
            .filter(|element| element.id != *id)
            .cloned()
            .collect();
        Ok(Self::from_entries(entries))
    }

    /// Get an element by id.
    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements
            .iter()
            .find(|element| element.id == *id)
            .map(Arc::as_ref)
    }

    /// Position of an element in paint order.
    pub fn index_of(&self, id: &ElementId) -> Option<usize> {
        self.elements.iter().position(|element| element.id == *id)
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.index_of(id).is_some()
    }

    /// Elements in paint order (back to front).
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().map(Arc::as_ref)
    }

    pub fn ids(&self) -> impl Iterator<Item = &ElementId> {
        self.iter().map(|element| &element.id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Serialize to the flat JSON array used for persistence.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from a flat JSON array of elements.
    pub fn from_json(json: &str) -> DocumentResult<Self> {
        let elements: Vec<Element> = serde_json::from_str(json)?;
        Self::from_elements(elements)
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl TryFrom<Vec<Element>> for Snapshot {
    type Error = DocumentError;

    fn try_from(elements: Vec<Element>) -> DocumentResult<Self> {
        Self::from_elements(elements)
    }
}
