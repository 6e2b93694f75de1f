pub mod keymap;

pub use keymap::{Direction, KeyPress, Keymap, Modifier, PaletteCommand};
