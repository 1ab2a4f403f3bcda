//! Single-element selection and keyboard nudging.

use crate::document::Snapshot;
use crate::element::{ElementId, ElementPatch};
use kurbo::{Point, Vec2};

/// Distance in pixels an arrow key moves the selected element.
pub const DEFAULT_NUDGE_STEP: f64 = 10.0;

/// Direction of an arrow-key nudge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NudgeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl NudgeDirection {
    /// Map a key name (as reported by the browser) to a direction.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(NudgeDirection::Up),
            "ArrowDown" => Some(NudgeDirection::Down),
            "ArrowLeft" => Some(NudgeDirection::Left),
            "ArrowRight" => Some(NudgeDirection::Right),
            _ => None,
        }
    }

    /// Position delta for a nudge of `step` pixels. Screen y grows downwards.
    pub fn delta(self, step: f64) -> Vec2 {
        match self {
            NudgeDirection::Up => Vec2::new(0.0, -step),
            NudgeDirection::Down => Vec2::new(0.0, step),
            NudgeDirection::Left => Vec2::new(-step, 0.0),
            NudgeDirection::Right => Vec2::new(step, 0.0),
        }
    }
}

/// Tracks at most one selected element.
///
/// A selected id always names an element of the snapshot it was checked
/// against; callers re-check with [`Selection::retain_valid`] whenever the
/// present snapshot is replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<ElementId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&ElementId> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    /// Select `id` if it exists in `snapshot`.
    /// Returns true if the selection changed.
    pub fn select(&mut self, id: &ElementId, snapshot: &Snapshot) -> bool {
        if !snapshot.contains(id) {
            log::debug!("Ignoring selection of unknown element {}", id);
            return false;
        }
        if self.is_selected(id) {
            return false;
        }
        self.selected = Some(id.clone());
        true
    }

    /// Clear the selection. Returns true if something was selected.
    pub fn clear(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Drop the selection if it no longer names an element of `snapshot`.
    /// Returns true if the selection was cleared.
    pub fn retain_valid(&mut self, snapshot: &Snapshot) -> bool {
        match &self.selected {
            Some(id) if !snapshot.contains(id) => self.clear(),
            _ => false,
        }
    }

    /// Compute the move for nudging the selected element.
    ///
    /// Returns `None` when nothing is selected or the selected element is
    /// missing from `snapshot`.
    pub fn nudge(&self, direction: NudgeDirection, step: f64, snapshot: &Snapshot) -> Option<(ElementId, ElementPatch)> {
        let id = self.selected.as_ref()?;
        let element = snapshot.get(id)?;
        let position: Point = element.position + direction.delta(step);
        Some((id.clone(), ElementPatch::moved_to(position)))
    }
}
