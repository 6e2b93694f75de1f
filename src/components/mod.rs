//! Leptos components rendering the markup contract the board hooks read.

pub mod board;
pub mod card;
pub mod column;

pub use board::KanbanBoard;
pub use card::KanbanCard;
pub use column::KanbanColumn;
