//! Pagesmith Core Library
//!
//! Platform-agnostic document state for the Pagesmith page builder: elements,
//! immutable snapshots with undo/redo, selection, and drag/drop gestures.

pub mod config;
pub mod document;
pub mod drag;
pub mod element;
pub mod factory;
pub mod history;
pub mod input;
pub mod properties;
pub mod selection;
pub mod session;
pub mod storage;
pub mod template;

pub use config::{ConfigError, DragHistoryPolicy, EditorConfig};
pub use document::{DocumentError, DocumentResult, Snapshot};
pub use drag::{DataTransfer, DragController, DragOutcome, DragState, DropIntent, PALETTE_TRANSFER_KEY};
pub use element::{Element, ElementId, ElementPatch, ElementType, Styles};
pub use factory::{DEFAULT_PRIMARY_COLOR, Theme, create_defaults};
pub use history::History;
pub use input::{KeyEvent, MouseButton, PointerEvent, PointerTarget};
pub use properties::PropertiesView;
pub use selection::{NudgeDirection, Selection};
pub use session::{Action, EditorSession};
pub use storage::{AutoSaveManager, MemoryStorage, Storage, StorageError, StorageResult};
pub use template::{SiteProfile, TemplateKind};
