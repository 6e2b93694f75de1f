//! The slice of the DOM the board hooks touch.
//!
//! Hooks are written against these traits so the gesture logic runs the same
//! over `web_sys` in the browser and over an in-memory tree in unit tests.

use crate::error::HookError;

/// An element carrying board attributes and visual state classes.
pub trait BoardElement: Clone + 'static {
    fn attribute(&self, name: &str) -> Option<String>;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    /// Identity, not structural equality.
    fn is_same(&self, other: &Self) -> bool;
}

/// The drag data channel of one gesture (`DataTransfer` in the browser).
pub trait DragData {
    fn set_data(&self, format: &str, data: &str);
    fn data(&self, format: &str) -> Option<String>;
    fn set_effect_allowed(&self, effect: &str);
    fn set_drop_effect(&self, effect: &str);
}

/// A dispatched gesture event.
pub trait GestureInput {
    type Element: BoardElement;
    type Data: DragData;

    /// `None` for events without a data channel, such as clicks.
    fn drag_data(&self) -> Option<Self::Data>;
    fn target(&self) -> Option<Self::Element>;
    fn prevent_default(&self);
    fn stop_propagation(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    DragStart,
    DragEnd,
    Click,
    DragOver,
    DragLeave,
    Drop,
}

impl GestureKind {
    pub const CARD: [GestureKind; 3] = [GestureKind::DragStart, GestureKind::DragEnd, GestureKind::Click];
    pub const COLUMN: [GestureKind; 3] = [GestureKind::DragOver, GestureKind::DragLeave, GestureKind::Drop];

    /// DOM event type the gesture is dispatched as.
    pub fn event_type(self) -> &'static str {
        match self {
            GestureKind::DragStart => "dragstart",
            GestureKind::DragEnd => "dragend",
            GestureKind::Click => "click",
            GestureKind::DragOver => "dragover",
            GestureKind::DragLeave => "dragleave",
            GestureKind::Drop => "drop",
        }
    }
}

/// Element lookup and listener registration.
///
/// A `Listener` is a registration handle: dropping it removes the listener
/// from its element.
pub trait BoardHost: 'static {
    type Element: BoardElement;
    type Input: GestureInput<Element = Self::Element>;
    type Listener;

    fn query_all(&self, root: &Self::Element, selector: &str) -> Result<Vec<Self::Element>, HookError>;

    fn listen(
        &self,
        element: &Self::Element,
        kind: GestureKind,
        handler: Box<dyn Fn(&Self::Input)>,
    ) -> Result<Self::Listener, HookError>;
}
