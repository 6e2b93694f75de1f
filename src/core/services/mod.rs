pub mod board_owner;
pub mod logging;

pub use board_owner::*;
pub use logging::*;
