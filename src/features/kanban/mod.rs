pub mod adapter;
pub mod gesture;
pub mod listeners;

pub use adapter::{AttachSummary, DragDropAdapter};
pub use gesture::{ClassMark, Gesture, GestureOutcome, GesturePhase};
pub use listeners::ListenerRegistry;
