use std::fmt;

use crate::core::BoardElement;
use crate::models::DragPayload;

/// A CSS class held on an element for as long as the mark lives.
pub struct ClassMark<E: BoardElement> {
    element: E,
    class: String,
}

impl<E: BoardElement> ClassMark<E> {
    pub fn apply(element: E, class: &str) -> Self {
        element.add_class(class);
        Self { element, class: class.to_string() }
    }

    pub fn element(&self) -> &E {
        &self.element
    }
}

impl<E: BoardElement> Drop for ClassMark<E> {
    fn drop(&mut self) {
        self.element.remove_class(&self.class);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Dragging,
    Dropped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    Dropped,
    /// Drag ended without any column accepting the drop.
    Cancelled,
}

impl fmt::Display for GestureOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureOutcome::Dropped => f.write_str("dropped"),
            GestureOutcome::Cancelled => f.write_str("cancelled"),
        }
    }
}

/// One drag gesture: `Idle -> Dragging -> (Dropped | Cancelled) -> Idle`.
///
/// The dragged card's visual mark lives inside the active states, so leaving
/// them by any path clears it.
pub enum Gesture<E: BoardElement> {
    Idle,
    Dragging { payload: DragPayload, mark: ClassMark<E> },
    Dropped { payload: DragPayload, mark: ClassMark<E> },
}

impl<E: BoardElement> Default for Gesture<E> {
    fn default() -> Self {
        Gesture::Idle
    }
}

impl<E: BoardElement> Gesture<E> {
    /// Starts a gesture on `card`, discarding any stale one first.
    pub fn start(&mut self, payload: DragPayload, card: E, dragging_class: &str) {
        *self = Gesture::Idle;
        let mark = ClassMark::apply(card, dragging_class);
        *self = Gesture::Dragging { payload, mark };
    }

    /// Records that a column received the drop. Returns false outside a drag.
    pub fn land(&mut self) -> bool {
        match std::mem::take(self) {
            Gesture::Dragging { payload, mark } => {
                *self = Gesture::Dropped { payload, mark };
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }

    /// Ends the gesture and clears the card's mark.
    pub fn finish(&mut self) -> Option<GestureOutcome> {
        match std::mem::take(self) {
            Gesture::Idle => None,
            Gesture::Dragging { .. } => Some(GestureOutcome::Cancelled),
            Gesture::Dropped { .. } => Some(GestureOutcome::Dropped),
        }
    }

    pub fn phase(&self) -> GesturePhase {
        match self {
            Gesture::Idle => GesturePhase::Idle,
            Gesture::Dragging { .. } => GesturePhase::Dragging,
            Gesture::Dropped { .. } => GesturePhase::Dropped,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.phase() == GesturePhase::Dragging
    }

    #[cfg(test)]
    pub fn payload(&self) -> Option<&DragPayload> {
        match self {
            Gesture::Idle => None,
            Gesture::Dragging { payload, .. } | Gesture::Dropped { payload, .. } => Some(payload),
        }
    }

    pub fn dragged(&self) -> Option<&E> {
        match self {
            Gesture::Idle => None,
            Gesture::Dragging { mark, .. } | Gesture::Dropped { mark, .. } => Some(mark.element()),
        }
    }
}
