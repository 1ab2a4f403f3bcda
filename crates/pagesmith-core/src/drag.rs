//! Drag and drop: palette drops and in-canvas reposition drags.
//!
//! Two independent gestures end in a document mutation:
//! - dragging a palette item onto the canvas creates an element where it lands;
//! - dragging an element body moves it, tracked by [`DragController`].

use crate::document::Snapshot;
use crate::element::{ElementId, ElementType};
use crate::input::{MouseButton, PointerEvent, PointerTarget};
use kurbo::{Point, Vec2};
use std::collections::BTreeMap;

/// Transfer-channel key under which palette drags carry their type tag.
/// Drops without it were not started by our palette and are ignored.
pub const PALETTE_TRANSFER_KEY: &str = "application/websitesbuilder";

/// An entry of the element palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteItem {
    pub element_type: ElementType,
    pub label: &'static str,
    pub icon: &'static str,
}

/// The palette offered to the user, in display order.
pub const PALETTE: [PaletteItem; 8] = [
    PaletteItem { element_type: ElementType::Heading, label: "Heading", icon: "T" },
    PaletteItem { element_type: ElementType::Text, label: "Text Block", icon: "¶" },
    PaletteItem { element_type: ElementType::Image, label: "Image", icon: "🖼️" },
    PaletteItem { element_type: ElementType::Button, label: "Button", icon: "⬜" },
    PaletteItem { element_type: ElementType::Form, label: "Form", icon: "📋" },
    PaletteItem { element_type: ElementType::Video, label: "Video", icon: "▶️" },
    PaletteItem { element_type: ElementType::Gallery, label: "Gallery", icon: "🖼️🖼️" },
    PaletteItem { element_type: ElementType::Map, label: "Map", icon: "🗺️" },
];

/// Drop effect advertised to the platform while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Move,
}

/// Key/value payload carried by a platform drag, modelled on the browser's
/// `DataTransfer`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    entries: BTreeMap<String, String>,
    pub effect_allowed: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn clear_data(&mut self) {
        self.entries.clear();
    }
}

/// Build the transfer payload for dragging `element_type` out of the palette.
pub fn start_palette_drag(element_type: ElementType) -> DataTransfer {
    let mut transfer = DataTransfer::new();
    transfer.set_data(PALETTE_TRANSFER_KEY, element_type.tag());
    transfer.effect_allowed = DropEffect::Copy;
    transfer
}

/// Read the element type carried by a palette drag, if any.
pub fn palette_type(transfer: &DataTransfer) -> Option<ElementType> {
    let tag = transfer.get_data(PALETTE_TRANSFER_KEY)?;
    let element_type = ElementType::parse(tag.trim()).filter(|ty| ElementType::PALETTE.contains(ty));
    if element_type.is_none() {
        log::debug!("Unrecognized palette tag {:?}", tag);
    }
    element_type
}

/// Drop effect to show while a drag hovers over the canvas.
pub fn drag_over(transfer: &DataTransfer) -> DropEffect {
    if palette_type(transfer).is_some() {
        DropEffect::Copy
    } else {
        DropEffect::None
    }
}

/// A resolved palette drop: create `element_type` at `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropIntent {
    pub element_type: ElementType,
    /// Canvas-relative position.
    pub position: Point,
}

/// Resolve a drop at screen point `pointer` over a canvas whose screen-space
/// top-left is `canvas_origin`.
///
/// Returns `None` when the transfer was not produced by the palette.
pub fn resolve_drop(transfer: &DataTransfer, pointer: Point, canvas_origin: Point) -> Option<DropIntent> {
    let element_type = palette_type(transfer)?;
    let offset = pointer - canvas_origin;
    let position = Point::new(offset.x, offset.y);
    if !(position.x.is_finite() && position.y.is_finite()) {
        log::warn!("Ignoring drop at non-finite position {:?}", position);
        return None;
    }
    Some(DropIntent { element_type, position })
}

/// State of a reposition drag.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// An element is following the pointer.
    Dragging {
        id: ElementId,
        /// Pointer position relative to the element's top-left at grab time.
        offset: Vec2,
        /// Element position when the drag started.
        start_position: Point,
        /// Latest position computed from a move, if any.
        current_position: Option<Point>,
    },
}

/// Result of feeding a pointer event to the [`DragController`].
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// Event did not apply in the current state.
    Ignored,
    /// A drag began on this element; it should become the selection.
    Started { id: ElementId },
    /// The element should move to `position`.
    Moved { id: ElementId, position: Point },
    /// Pointer released; `position` is the last computed one (`None` if it never moved).
    Finished { id: ElementId, position: Option<Point> },
    /// Gesture aborted without a release (capture lost, element gone).
    Cancelled { id: ElementId, position: Option<Point> },
}

/// Idle/Dragging state machine for moving elements around the canvas.
///
/// Every pointer event goes through [`DragController::handle_pointer`];
/// events that make no sense in the current state are ignored, and every
/// exit path lands back in [`DragState::Idle`].
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Id of the element being dragged.
    pub fn dragged_id(&self) -> Option<&ElementId> {
        match &self.state {
            DragState::Dragging { id, .. } => Some(id),
            DragState::Idle => None,
        }
    }

    /// Advance the state machine with one pointer event.
    ///
    /// A press while a drag is still open (its release was lost) finishes
    /// that drag first. If the press starts a new drag the result is
    /// `Started`, otherwise the stale drag's `Finished`.
    pub fn handle_pointer(&mut self, event: &PointerEvent, snapshot: &Snapshot) -> DragOutcome {
        match event {
            PointerEvent::Down { position, button, target } => self.begin(*position, *button, target, snapshot),
            PointerEvent::Move { position, parent_origin } => self.update(*position, *parent_origin, snapshot),
            PointerEvent::Up { .. } => self.end(),
            PointerEvent::Cancel => self.cancel(),
        }
    }

    fn begin(&mut self, pointer: Point, button: MouseButton, target: &PointerTarget, snapshot: &Snapshot) -> DragOutcome {
        if self.is_dragging() {
            // The release of the previous gesture never arrived; close it out
            // and treat this press as a fresh one.
            log::warn!("Pointer down while dragging, finishing stale drag");
            let stale = self.end();
            return match self.begin(pointer, button, target, snapshot) {
                DragOutcome::Ignored => stale,
                started => started,
            };
        }
        if button != MouseButton::Left {
            return DragOutcome::Ignored;
        }
        let PointerTarget::Element { id, bounds_origin } = target else {
            return DragOutcome::Ignored;
        };
        let Some(element) = snapshot.get(id) else {
            log::debug!("Pointer down on unknown element {}", id);
            return DragOutcome::Ignored;
        };

        log::debug!("Drag started on {}", id);
        self.state = DragState::Dragging {
            id: id.clone(),
            offset: pointer - *bounds_origin,
            start_position: element.position,
            current_position: None,
        };
        DragOutcome::Started { id: id.clone() }
    }

    fn update(&mut self, pointer: Point, parent_origin: Point, snapshot: &Snapshot) -> DragOutcome {
        let DragState::Dragging { id, offset, current_position, .. } = &mut self.state else {
            return DragOutcome::Ignored;
        };
        if !snapshot.contains(id) {
            log::debug!("Dragged element {} disappeared", id);
            return self.cancel();
        }

        let position = pointer - (parent_origin.to_vec2() + *offset);
        if !(position.x.is_finite() && position.y.is_finite()) {
            return DragOutcome::Ignored;
        }
        *current_position = Some(position);
        DragOutcome::Moved {
            id: id.clone(),
            position,
        }
    }

    fn end(&mut self) -> DragOutcome {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { id, current_position, .. } => {
                log::debug!("Drag finished on {}", id);
                DragOutcome::Finished {
                    id,
                    position: current_position,
                }
            }
            DragState::Idle => DragOutcome::Ignored,
        }
    }

    /// Abort any drag in progress.
    pub fn cancel(&mut self) -> DragOutcome {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { id, current_position, .. } => {
                log::debug!("Drag cancelled on {}", id);
                DragOutcome::Cancelled {
                    id,
                    position: current_position,
                }
            }
            DragState::Idle => DragOutcome::Ignored,
        }
    }
}
