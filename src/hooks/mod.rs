//! Classes exported to JavaScript, one per LiveView hook.
//!
//! ```js
//! import init, { KanbanDragDrop, CommandPalette, TimezoneInput } from "./pkg/kanban_hooks.js";
//!
//! const Hooks = {
//!   KanbanDragDrop: {
//!     mounted() { this.board = new KanbanDragDrop(this); this.board.mounted(); },
//!     updated() { this.board.updated(); },
//!     destroyed() { this.board.destroyed(); this.board.free(); },
//!   },
//!   TimezoneInput: {
//!     mounted() { new TimezoneInput(this).mounted(); },
//!   },
//!   CommandPalette: {
//!     mounted() { this.palette = new CommandPalette(this); this.palette.mounted(); },
//!     destroyed() { this.palette.destroyed(); this.palette.free(); },
//!   },
//! };
//! ```

pub mod command_palette;
pub mod kanban_drag_drop;
pub mod timezone_input;

pub use command_palette::CommandPalette;
pub use kanban_drag_drop::KanbanDragDrop;
pub use timezone_input::TimezoneInput;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}
