pub mod card;
pub mod notification;
pub mod payload;

// Transient board entities, read from markup and never persisted
pub use card::{Card, CardKind, Column};
pub use notification::Notification;
pub use payload::DragPayload;
