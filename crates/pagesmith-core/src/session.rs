//! The editing session: one intake for every user event.
//!
//! [`EditorSession`] owns the undo history, the selection and the drag state
//! machine. Hosts forward pointer, keyboard and drop events to it and react
//! to the returned [`Action`] (re-render, persist). Nothing else mutates the
//! document.

use crate::config::{DragHistoryPolicy, EditorConfig};
use crate::document::Snapshot;
use crate::drag::{DataTransfer, DragController, DragOutcome, DragState, resolve_drop};
use crate::element::{Element, ElementId, ElementPatch, ElementType};
use crate::factory::Theme;
use crate::history::History;
use crate::input::{KeyEvent, PointerEvent};
use crate::selection::{NudgeDirection, Selection};
use crate::template::{SiteProfile, TemplateKind, seed_snapshot};
use kurbo::Point;

/// What changed as the result of an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Nothing changed.
    None,
    /// An element was created (and selected).
    ElementAdded(ElementId),
    /// An element's fields changed.
    ElementUpdated(ElementId),
    ElementDeleted(ElementId),
    /// The selection changed without touching the document.
    SelectionChanged(Option<ElementId>),
    /// The present snapshot was replaced by undo, redo, reset or a drag commit.
    HistoryChanged,
}

impl Action {
    /// Whether the document itself changed.
    pub fn is_document_change(&self) -> bool {
        !matches!(self, Action::None | Action::SelectionChanged(_))
    }
}

/// Editing session over one page.
#[derive(Debug, Clone)]
pub struct EditorSession {
    config: EditorConfig,
    history: History<Snapshot>,
    selection: Selection,
    drag: DragController,
    /// Uncommitted drag positions, shown in place of the history present
    /// while a coalesced drag is in flight.
    preview: Option<Snapshot>,
    template: TemplateKind,
    /// Bumped whenever [`EditorSession::present`] changes.
    revision: u64,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorSession {
    /// Create a session over an empty page.
    pub fn new(config: EditorConfig) -> Self {
        Self::with_snapshot(config, Snapshot::new())
    }

    /// Create a session over an existing page (e.g. one restored from storage).
    pub fn with_snapshot(config: EditorConfig, snapshot: Snapshot) -> Self {
        let history = History::with_limit(snapshot, config.max_history);
        Self {
            config,
            history,
            selection: Selection::new(),
            drag: DragController::new(),
            preview: None,
            template: TemplateKind::default(),
            revision: 0,
        }
    }

    /// Create a session seeded from a site profile. The profile's primary
    /// color, when set, overrides the configured theme.
    pub fn from_profile(mut config: EditorConfig, profile: &SiteProfile) -> Self {
        if profile.primary_color.is_some() {
            config.theme = profile.theme();
        }
        let mut session = Self::with_snapshot(config, seed_snapshot(profile));
        session.template = profile.template();
        log::info!(
            "Seeded {} elements for {:?} ({})",
            session.present().len(),
            profile.business_name,
            session.template.id()
        );
        session
    }

    // --- Queries ---

    /// The snapshot to render, including any in-flight drag.
    pub fn present(&self) -> &Snapshot {
        self.preview.as_ref().unwrap_or_else(|| self.history.present())
    }

    pub fn selection(&self) -> Option<&ElementId> {
        self.selection.selected()
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selection.selected().and_then(|id| self.present().get(id))
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo() || self.has_pending_drag()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo() && !self.has_pending_drag()
    }

    /// Committed history. The in-flight drag preview is not part of it.
    pub fn history(&self) -> &History<Snapshot> {
        &self.history
    }

    pub fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    pub fn template(&self) -> TemplateKind {
        self.template
    }

    pub fn theme(&self) -> &Theme {
        &self.config.theme
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn has_pending_drag(&self) -> bool {
        self.preview
            .as_ref()
            .is_some_and(|preview| preview != self.history.present())
    }

    // --- Settings ---

    pub fn set_template(&mut self, template: TemplateKind) {
        self.template = template;
    }

    /// Change the theme used for elements created from now on.
    pub fn set_theme(&mut self, theme: Theme) {
        self.config.theme = theme;
    }

    // --- Mutations ---

    /// Add an element and select it.
    pub fn add_element(&mut self, element_type: ElementType, position: Point) -> Action {
        self.settle_drag();
        let (next, element) = self
            .history
            .present()
            .add_element(element_type, position, &self.config.theme);
        self.commit(next);
        self.selection.select(&element.id, self.history.present());
        Action::ElementAdded(element.id)
    }

    /// Apply `patch` to an element. Unknown ids and patches that change
    /// nothing leave the history untouched.
    pub fn update_element(&mut self, id: &ElementId, patch: &ElementPatch) -> Action {
        self.settle_drag();
        let current = self.history.present();
        if !current.contains(id) {
            log::debug!("Update of unknown element {} ignored", id);
            return Action::None;
        }
        let next = current.update_element(id, patch);
        if next == *current {
            return Action::None;
        }
        self.commit(next);
        Action::ElementUpdated(id.clone())
    }

    /// Delete an element, clearing the selection if it was selected.
    pub fn delete_element(&mut self, id: &ElementId) -> Action {
        self.settle_drag();
        let current = self.history.present();
        if !current.contains(id) {
            log::debug!("Delete of unknown element {} ignored", id);
            return Action::None;
        }
        let next = current.delete_element(id);
        self.commit(next);
        Action::ElementDeleted(id.clone())
    }

    pub fn select(&mut self, id: &ElementId) -> Action {
        let snapshot = self.present().clone();
        if self.selection.select(id, &snapshot) {
            Action::SelectionChanged(Some(id.clone()))
        } else {
            Action::None
        }
    }

    pub fn clear_selection(&mut self) -> Action {
        if self.selection.clear() {
            Action::SelectionChanged(None)
        } else {
            Action::None
        }
    }

    pub fn undo(&mut self) -> Action {
        self.settle_drag();
        if !self.history.undo() {
            return Action::None;
        }
        self.after_history_jump();
        Action::HistoryChanged
    }

    pub fn redo(&mut self) -> Action {
        self.settle_drag();
        if !self.history.redo() {
            return Action::None;
        }
        self.after_history_jump();
        Action::HistoryChanged
    }

    /// Replace the page and forget all history. Any drag in flight is dropped.
    pub fn reset(&mut self, snapshot: Snapshot) -> Action {
        self.drag.cancel();
        self.preview = None;
        self.history.reset(snapshot);
        self.after_history_jump();
        Action::HistoryChanged
    }

    // --- Events ---

    /// Handle a drop on the canvas whose screen-space top-left is `canvas_origin`.
    pub fn handle_drop(&mut self, transfer: &DataTransfer, pointer: Point, canvas_origin: Point) -> Action {
        match resolve_drop(transfer, pointer, canvas_origin) {
            Some(intent) => self.add_element(intent.element_type, intent.position),
            None => Action::None,
        }
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Action {
        // A press while a drag is open means its release was lost: record the
        // stale drag before the press is handled as a new gesture.
        let settled = if matches!(event, PointerEvent::Down { .. }) && self.drag.is_dragging() {
            self.drag.cancel();
            self.commit_preview()
        } else {
            false
        };
        let snapshot = self.present().clone();
        match self.drag.handle_pointer(event, &snapshot) {
            DragOutcome::Ignored if settled => Action::HistoryChanged,
            DragOutcome::Ignored => Action::None,
            DragOutcome::Started { id } => {
                self.preview = None;
                if self.selection.select(&id, &snapshot) {
                    Action::SelectionChanged(Some(id))
                } else if settled {
                    Action::HistoryChanged
                } else {
                    Action::None
                }
            }
            DragOutcome::Moved { id, position } => self.apply_drag_move(id, position),
            DragOutcome::Finished { .. } | DragOutcome::Cancelled { .. } => {
                if self.commit_preview() {
                    Action::HistoryChanged
                } else {
                    Action::None
                }
            }
        }
    }

    /// Arrow keys nudge the selected element by the configured step.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Action {
        let KeyEvent::Pressed(key) = event else {
            return Action::None;
        };
        let Some(direction) = NudgeDirection::from_key(key) else {
            return Action::None;
        };
        self.settle_drag();
        match self
            .selection
            .nudge(direction, self.config.nudge_step, self.history.present())
        {
            Some((id, patch)) => self.update_element(&id, &patch),
            None => Action::None,
        }
    }

    // --- Internals ---

    fn apply_drag_move(&mut self, id: ElementId, position: Point) -> Action {
        let patch = ElementPatch::moved_to(position);
        match self.config.drag_history {
            DragHistoryPolicy::Coalesce => {
                let base = self.present();
                let next = base.update_element(&id, &patch);
                if next == *base {
                    return Action::None;
                }
                self.preview = Some(next);
                self.revision += 1;
            }
            DragHistoryPolicy::PerMove => {
                let next = self.history.present().update_element(&id, &patch);
                if next == *self.history.present() {
                    return Action::None;
                }
                self.commit(next);
            }
        }
        Action::ElementUpdated(id)
    }

    /// Push the drag preview as one history entry. Returns true if an
    /// entry was recorded.
    fn commit_preview(&mut self) -> bool {
        let Some(preview) = self.preview.take() else {
            return false;
        };
        if preview == *self.history.present() {
            return false;
        }
        log::debug!("Committing drag as one history entry");
        // The preview is already what `present` showed, so the revision stays.
        self.history.push(preview);
        self.selection.retain_valid(self.history.present());
        true
    }

    /// Close out a drag in flight before an unrelated change.
    fn settle_drag(&mut self) {
        if self.drag.is_dragging() {
            self.drag.cancel();
        }
        self.commit_preview();
    }

    fn commit(&mut self, next: Snapshot) {
        self.history.push(next);
        self.revision += 1;
        self.selection.retain_valid(self.history.present());
    }

    fn after_history_jump(&mut self) {
        self.revision += 1;
        self.selection.retain_valid(self.history.present());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::{PALETTE_TRANSFER_KEY, start_palette_drag};
    use crate::input::{MouseButton, PointerTarget};

    fn session() -> EditorSession {
        EditorSession::default()
    }

    fn per_move_session() -> EditorSession {
        EditorSession::new(EditorConfig {
            drag_history: DragHistoryPolicy::PerMove,
            ..Default::default()
        })
    }

    fn added(action: Action) -> ElementId {
        match action {
            Action::ElementAdded(id) => id,
            other => panic!("expected ElementAdded, got {:?}", other),
        }
    }

    fn position_of(session: &EditorSession, id: &ElementId) -> Point {
        session.present().get(id).unwrap().position
    }

    fn grab(session: &mut EditorSession, id: &ElementId) -> Action {
        // Canvas at the screen origin; grab the element 5px inside its corner.
        let origin = position_of(session, id);
        session.handle_pointer(&PointerEvent::Down {
            position: origin + kurbo::Vec2::new(5.0, 5.0),
            button: MouseButton::Left,
            target: PointerTarget::Element {
                id: id.clone(),
                bounds_origin: origin,
            },
        })
    }

    fn move_to(session: &mut EditorSession, x: f64, y: f64) -> Action {
        session.handle_pointer(&PointerEvent::Move {
            position: Point::new(x + 5.0, y + 5.0),
            parent_origin: Point::ZERO,
        })
    }

    fn release(session: &mut EditorSession) -> Action {
        session.handle_pointer(&PointerEvent::Up { position: Point::ZERO })
    }

    #[test]
    fn test_add_undo_redo_heading() {
        let mut session = session();
        let id = added(session.add_element(ElementType::Heading, Point::new(20.0, 20.0)));

        let element = session.present().get(&id).unwrap().clone();
        assert_eq!(session.present().len(), 1);
        assert_eq!(element.element_type, ElementType::Heading);
        assert_eq!(element.content, "Heading");

        assert_eq!(session.undo(), Action::HistoryChanged);
        assert!(session.present().is_empty());
        assert_eq!(session.selection(), None);

        assert_eq!(session.redo(), Action::HistoryChanged);
        assert_eq!(session.present().get(&id), Some(&element));
    }

    #[test]
    fn test_add_selects_new_element() {
        let mut session = session();
        let id = added(session.add_element(ElementType::Text, Point::ZERO));
        assert_eq!(session.selection(), Some(&id));
        assert_eq!(session.selected_element().unwrap().content, "Add your text here");
    }

    #[test]
    fn test_arrow_right_nudges_selected() {
        let mut session = session();
        let id = added(session.add_element(ElementType::Heading, Point::new(20.0, 20.0)));
        let before = session.history().past_len();

        let action = session.handle_key(&KeyEvent::Pressed("ArrowRight".to_string()));

        assert_eq!(action, Action::ElementUpdated(id.clone()));
        assert_eq!(position_of(&session, &id), Point::new(30.0, 20.0));
        assert_eq!(session.history().past_len(), before + 1);
    }

    #[test]
    fn test_nudge_uses_configured_step() {
        let mut session = EditorSession::new(EditorConfig {
            nudge_step: 1.0,
            ..Default::default()
        });
        let id = added(session.add_element(ElementType::Text, Point::new(5.0, 5.0)));
        session.handle_key(&KeyEvent::Pressed("ArrowUp".to_string()));
        assert_eq!(position_of(&session, &id), Point::new(5.0, 4.0));
    }

    #[test]
    fn test_keys_without_selection_or_non_arrow() {
        let mut session = session();
        let id = added(session.add_element(ElementType::Text, Point::ZERO));
        let revision = session.revision();

        assert_eq!(session.handle_key(&KeyEvent::Pressed("Enter".to_string())), Action::None);
        assert_eq!(session.handle_key(&KeyEvent::Released("ArrowLeft".to_string())), Action::None);
        session.clear_selection();
        assert_eq!(session.handle_key(&KeyEvent::Pressed("ArrowLeft".to_string())), Action::None);

        assert_eq!(position_of(&session, &id), Point::ZERO);
        assert_eq!(session.revision(), revision);
    }

    #[test]
    fn test_palette_drop_position() {
        let mut session = session();
        let transfer = start_palette_drag(ElementType::Button);
        let id = added(session.handle_drop(&transfer, Point::new(100.0, 50.0), Point::new(10.0, 10.0)));

        let element = session.present().get(&id).unwrap();
        assert_eq!(element.element_type, ElementType::Button);
        assert_eq!(element.position, Point::new(90.0, 40.0));
    }

    #[test]
    fn test_unrecognized_drop_is_ignored() {
        let mut session = session();
        let mut transfer = DataTransfer::new();
        transfer.set_data(PALETTE_TRANSFER_KEY, "marquee");

        assert_eq!(session.handle_drop(&transfer, Point::new(5.0, 5.0), Point::ZERO), Action::None);
        assert!(session.present().is_empty());
        assert!(!session.can_undo());
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut session = session();
        let id = added(session.add_element(ElementType::Heading, Point::ZERO));
        let present = session.present().clone();
        let (past, future) = (session.history().past_len(), session.history().future_len());

        let action = session.update_element(
            &ElementId::from_raw("nonexistent-id"),
            &ElementPatch::new().with_content("x"),
        );

        assert_eq!(action, Action::None);
        assert_eq!(*session.present(), present);
        assert_eq!(session.history().past_len(), past);
        assert_eq!(session.history().future_len(), future);
        assert_eq!(session.selection(), Some(&id));
    }

    #[test]
    fn test_delete_then_undo_restores_order() {
        let mut session = session();
        let first = added(session.add_element(ElementType::Heading, Point::new(0.0, 0.0)));
        let second = added(session.add_element(ElementType::Text, Point::new(0.0, 50.0)));
        let two = session.present().clone();

        assert_eq!(session.delete_element(&first), Action::ElementDeleted(first.clone()));
        session.undo();

        assert_eq!(*session.present(), two);
        let ids: Vec<_> = session.present().ids().cloned().collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let mut session = session();
        let id = added(session.add_element(ElementType::Image, Point::ZERO));
        assert_eq!(session.selection(), Some(&id));

        session.delete_element(&id);
        assert_eq!(session.selection(), None);
        assert!(session.selected_element().is_none());
    }

    #[test]
    fn test_delete_other_keeps_selection() {
        let mut session = session();
        let first = added(session.add_element(ElementType::Text, Point::ZERO));
        let second = added(session.add_element(ElementType::Text, Point::ZERO));
        session.select(&first);

        session.delete_element(&second);
        assert_eq!(session.selection(), Some(&first));
    }

    #[test]
    fn test_inverse_law() {
        let mut session = session();
        let a = added(session.add_element(ElementType::Heading, Point::ZERO));
        let initial = session.present().clone();

        session.update_element(&a, &ElementPatch::new().with_content("Title"));
        let b = added(session.add_element(ElementType::Button, Point::new(10.0, 10.0)));
        session.update_element(&b, &ElementPatch::new().with_style("color", "red"));
        session.delete_element(&a);
        let last = session.present().clone();

        for _ in 0..4 {
            assert_eq!(session.undo(), Action::HistoryChanged);
        }
        assert_eq!(*session.present(), initial);
        for _ in 0..4 {
            assert_eq!(session.redo(), Action::HistoryChanged);
        }
        assert_eq!(*session.present(), last);
    }

    #[test]
    fn test_redo_truncated_by_new_change() {
        let mut session = session();
        session.add_element(ElementType::Text, Point::ZERO);
        session.add_element(ElementType::Text, Point::ZERO);
        session.undo();
        assert!(session.can_redo());

        session.add_element(ElementType::Map, Point::ZERO);
        assert!(!session.can_redo());
        assert_eq!(session.redo(), Action::None);
    }

    #[test]
    fn test_undo_redo_at_boundaries() {
        let mut session = session();
        let revision = session.revision();

        assert_eq!(session.undo(), Action::None);
        assert_eq!(session.redo(), Action::None);
        assert!(session.present().is_empty());
        assert_eq!(session.revision(), revision);
    }

    #[test]
    fn test_ids_unique_under_rapid_adds() {
        let mut session = session();
        let ids: std::collections::HashSet<_> = (0..200)
            .map(|_| added(session.add_element(ElementType::Text, Point::ZERO)))
            .collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn test_coalesced_drag_is_one_entry() {
        let mut session = session();
        let id = added(session.add_element(ElementType::Text, Point::new(50.0, 50.0)));
        let before = session.history().past_len();

        assert_eq!(grab(&mut session, &id), Action::None);
        assert!(matches!(session.drag_state(), DragState::Dragging { .. }));
        for step in 1..=5 {
            let offset = step as f64 * 10.0;
            assert_eq!(move_to(&mut session, 50.0 + offset, 50.0), Action::ElementUpdated(id.clone()));
        }
        assert_eq!(position_of(&session, &id), Point::new(100.0, 50.0));
        assert_eq!(session.history().past_len(), before);

        assert_eq!(release(&mut session), Action::HistoryChanged);
        assert_eq!(*session.drag_state(), DragState::Idle);
        assert_eq!(session.history().past_len(), before + 1);
        assert_eq!(position_of(&session, &id), Point::new(100.0, 50.0));

        session.undo();
        assert_eq!(position_of(&session, &id), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_click_without_move_records_nothing() {
        let mut session = session();
        let id = added(session.add_element(ElementType::Text, Point::new(50.0, 50.0)));
        let before = session.history().past_len();

        grab(&mut session, &id);
        assert_eq!(release(&mut session), Action::None);
        assert_eq!(session.history().past_len(), before);
    }

    #[test]
    fn test_per_move_drag_records_every_move() {
        let mut session = per_move_session();
        let id = added(session.add_element(ElementType::Text, Point::new(0.0, 0.0)));
        let before = session.history().past_len();

        grab(&mut session, &id);
        for step in 1..=3 {
            move_to(&mut session, step as f64, 0.0);
        }
        assert_eq!(release(&mut session), Action::None);

        assert_eq!(session.history().past_len(), before + 3);
        assert_eq!(position_of(&session, &id), Point::new(3.0, 0.0));
    }

    #[test]
    fn test_drag_start_selects() {
        let mut session = session();
        let first = added(session.add_element(ElementType::Text, Point::ZERO));
        let second = added(session.add_element(ElementType::Text, Point::new(100.0, 0.0)));
        assert_eq!(session.selection(), Some(&second));

        assert_eq!(grab(&mut session, &first), Action::SelectionChanged(Some(first.clone())));
        assert_eq!(session.selection(), Some(&first));
    }

    #[test]
    fn test_control_affordance_does_not_drag() {
        let mut session = session();
        let id = added(session.add_element(ElementType::Button, Point::ZERO));

        let action = session.handle_pointer(&PointerEvent::Down {
            position: Point::new(1.0, 1.0),
            button: MouseButton::Left,
            target: PointerTarget::Control { id },
        });
        assert_eq!(action, Action::None);
        assert_eq!(*session.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_cancel_commits_last_preview() {
        let mut session = session();
        let id = added(session.add_element(ElementType::Text, Point::ZERO));
        let before = session.history().past_len();

        grab(&mut session, &id);
        move_to(&mut session, 40.0, 30.0);
        assert_eq!(session.handle_pointer(&PointerEvent::Cancel), Action::HistoryChanged);

        assert_eq!(*session.drag_state(), DragState::Idle);
        assert_eq!(session.history().past_len(), before + 1);
        assert_eq!(position_of(&session, &id), Point::new(40.0, 30.0));
    }

    #[test]
    fn test_press_after_lost_release_grabs_new_element() {
        let mut session = session();
        let first = added(session.add_element(ElementType::Text, Point::ZERO));
        let second = added(session.add_element(ElementType::Text, Point::new(100.0, 0.0)));
        let before = session.history().past_len();

        grab(&mut session, &first);
        move_to(&mut session, 20.0, 20.0);
        // No release arrives; the user presses on the other element.
        assert_eq!(grab(&mut session, &second), Action::SelectionChanged(Some(second.clone())));
        assert_eq!(session.drag_state(), &DragState::Dragging {
            id: second.clone(),
            offset: kurbo::Vec2::new(5.0, 5.0),
            start_position: Point::new(100.0, 0.0),
            current_position: None,
        });
        assert_eq!(session.selection(), Some(&second));
        assert_eq!(session.history().past_len(), before + 1);
        assert_eq!(position_of(&session, &first), Point::new(20.0, 20.0));

        assert_eq!(move_to(&mut session, 150.0, 40.0), Action::ElementUpdated(second.clone()));
        assert_eq!(release(&mut session), Action::HistoryChanged);
        assert_eq!(position_of(&session, &second), Point::new(150.0, 40.0));
        assert_eq!(session.history().past_len(), before + 2);
    }

    #[test]
    fn test_default_tag_drop_is_ignored() {
        let mut session = session();
        let mut transfer = DataTransfer::new();
        transfer.set_data(PALETTE_TRANSFER_KEY, "default");

        assert_eq!(session.handle_drop(&transfer, Point::new(5.0, 5.0), Point::ZERO), Action::None);
        assert!(session.present().is_empty());
        assert!(!session.can_undo());
    }

    #[test]
    fn test_undo_during_drag_settles_first() {
        let mut session = session();
        let id = added(session.add_element(ElementType::Text, Point::ZERO));

        grab(&mut session, &id);
        move_to(&mut session, 25.0, 0.0);
        assert!(session.can_undo());

        assert_eq!(session.undo(), Action::HistoryChanged);
        assert_eq!(*session.drag_state(), DragState::Idle);
        assert_eq!(position_of(&session, &id), Point::ZERO);
        assert_eq!(session.redo(), Action::HistoryChanged);
        assert_eq!(position_of(&session, &id), Point::new(25.0, 0.0));
    }

    #[test]
    fn test_revision_tracks_present_changes() {
        let mut session = session();
        let r0 = session.revision();
        let id = added(session.add_element(ElementType::Text, Point::ZERO));
        assert!(session.revision() > r0);

        let r1 = session.revision();
        session.select(&id);
        session.clear_selection();
        assert_eq!(session.revision(), r1);

        grab(&mut session, &id);
        move_to(&mut session, 10.0, 10.0);
        assert!(session.revision() > r1);
    }

    #[test]
    fn test_reset_forgets_history() {
        let mut session = session();
        session.add_element(ElementType::Text, Point::ZERO);
        session.add_element(ElementType::Text, Point::ZERO);

        assert_eq!(session.reset(Snapshot::new()), Action::HistoryChanged);
        assert!(session.present().is_empty());
        assert!(!session.can_undo());
        assert!(!session.can_redo());
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn test_history_limit_from_config() {
        let mut session = EditorSession::new(EditorConfig {
            max_history: Some(2),
            ..Default::default()
        });
        for _ in 0..5 {
            session.add_element(ElementType::Text, Point::ZERO);
        }
        assert_eq!(session.history().past_len(), 2);
    }

    #[test]
    fn test_from_profile_seeds_and_themes() {
        let profile = SiteProfile::from_json(
            r##"{"businessName":"Acme","businessType":"portfolio","primaryColor":"#123456"}"##,
        )
        .unwrap();
        let mut session = EditorSession::from_profile(EditorConfig::default(), &profile);

        assert_eq!(session.template(), TemplateKind::Portfolio);
        assert_eq!(session.present().len(), 2);
        assert!(!session.can_undo());
        assert_eq!(session.theme().primary(), "#123456");

        let id = added(session.add_element(ElementType::Heading, Point::ZERO));
        assert_eq!(session.present().get(&id).unwrap().styles.get("color"), Some("#123456"));

        session.set_template(TemplateKind::Blog);
        assert_eq!(session.template(), TemplateKind::Blog);
    }

    #[test]
    fn test_action_classification() {
        assert!(!Action::None.is_document_change());
        assert!(!Action::SelectionChanged(None).is_document_change());
        assert!(Action::HistoryChanged.is_document_change());
    }
}
