//! Pointer and keyboard events forwarded by the rendering layer.
//!
//! All coordinates are in screen space. The host resolves what sits under
//! the pointer (an element body, one of its control affordances, or bare
//! canvas) and reports the relevant bounding origins, so the engine never
//! has to query layout.

use crate::element::ElementId;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// What the pointer was over when it went down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerTarget {
    /// The body of an element.
    Element {
        id: ElementId,
        /// Screen-space top-left of the element's bounding box.
        bounds_origin: Point,
    },
    /// A control affordance of an element (resize handle, toolbar button).
    Control { id: ElementId },
    /// Empty canvas.
    Canvas,
}

/// Pointer event type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
        target: PointerTarget,
    },
    Move {
        position: Point,
        /// Screen-space top-left of the element's parent (the canvas).
        parent_origin: Point,
    },
    Up {
        position: Point,
    },
    /// Pointer capture was lost (window blur, capture release) without an up event.
    Cancel,
}

/// Keyboard event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
}

impl KeyEvent {
    /// The key name, for either press or release.
    pub fn key(&self) -> &str {
        match self {
            KeyEvent::Pressed(key) | KeyEvent::Released(key) => key,
        }
    }
}
