//! Client hooks for a server-rendered kanban board.
//!
//! The drag-and-drop adapter turns HTML5 drag gestures on cards and columns
//! into `drop_batch` / `drop_unbatched` events for the server, which owns the
//! board and re-renders it. A command palette hook maps keyboard shortcuts to
//! palette events, and a timezone hook fills a form input with the browser's
//! time zone. All three are exported to JavaScript from [`hooks`].

pub mod components;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod hooks;
pub mod models;
pub mod web;

pub use config::{BoardConfig, PaletteConfig};
pub use error::HookError;
pub use features::kanban::{AttachSummary, DragDropAdapter};
pub use hooks::{CommandPalette, KanbanDragDrop, TimezoneInput};
pub use models::{Card, CardKind, Column, DragPayload, Notification};
