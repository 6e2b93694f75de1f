use std::cell::RefCell;
use std::rc::Rc;

use super::gesture::{Gesture, GestureOutcome, GesturePhase};
use super::listeners::ListenerRegistry;
use crate::config::BoardConfig;
use crate::core::{BoardElement, BoardHost, BoardOwner, DragData, GestureInput, GestureKind, ObservabilitySink};
use crate::error::HookError;
use crate::models::{Card, Column, DragPayload, Notification};

const MOVE_EFFECT: &str = "move";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttachSummary {
    pub cards: usize,
    pub columns: usize,
}

/// Turns drag gestures on a rendered board into notifications for the
/// board owner. It never moves cards itself; the owner re-renders.
pub struct DragDropAdapter<H: BoardHost> {
    host: H,
    board: Rc<Board<H::Element>>,
    listeners: ListenerRegistry<H::Listener>,
}

/// State shared by every listener of one adapter.
struct Board<E: BoardElement> {
    config: BoardConfig,
    owner: Rc<dyn BoardOwner>,
    sink: Rc<dyn ObservabilitySink>,
    gesture: RefCell<Gesture<E>>,
}

impl<H: BoardHost> DragDropAdapter<H> {
    pub fn new(host: H, config: BoardConfig, owner: Rc<dyn BoardOwner>, sink: Rc<dyn ObservabilitySink>) -> Self {
        Self {
            host,
            board: Rc::new(Board { config, owner, sink, gesture: RefCell::new(Gesture::Idle) }),
            listeners: ListenerRegistry::default(),
        }
    }

    /// Binds every card and column under `root`, replacing earlier bindings.
    ///
    /// The gesture in flight survives when its card node is still rendered, so
    /// a drag can cross a re-render. If the node was replaced, its `dragend`
    /// will never reach us and the gesture is dropped.
    pub fn attach(&mut self, root: &H::Element) -> Result<AttachSummary, HookError> {
        self.detach();
        match self.bind_all(root) {
            Ok(summary) => {
                self.board.sink.trace(&format!(
                    "attached {} cards and {} columns ({} listeners)",
                    summary.cards,
                    summary.columns,
                    self.listeners.len()
                ));
                Ok(summary)
            }
            Err(err) => {
                self.detach();
                Err(err)
            }
        }
    }

    /// Removes every listener from the last `attach`. No-op when detached.
    pub fn detach(&mut self) -> usize {
        let released = self.listeners.release();
        if released > 0 {
            self.board.sink.trace(&format!("released {} listeners", released));
        }
        released
    }

    /// Abandons the gesture in flight, clearing the dragged card's mark.
    pub fn cancel_gesture(&mut self) -> Option<GestureOutcome> {
        let outcome = self.board.gesture.borrow_mut().finish();
        if let Some(outcome) = outcome {
            self.board.sink.trace(&format!("gesture abandoned: {}", outcome));
        }
        outcome
    }

    pub fn is_attached(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub fn phase(&self) -> GesturePhase {
        self.board.gesture.borrow().phase()
    }

    pub fn config(&self) -> &BoardConfig {
        &self.board.config
    }

    fn bind_all(&mut self, root: &H::Element) -> Result<AttachSummary, HookError> {
        let cards = self.host.query_all(root, &self.board.config.card_selector)?;
        let columns = self.host.query_all(root, &self.board.config.column_selector)?;

        let orphaned = self
            .board
            .gesture
            .borrow()
            .dragged()
            .is_some_and(|dragged| !cards.iter().any(|card| card.is_same(dragged)));
        if orphaned {
            self.cancel_gesture();
        }

        for card in &cards {
            for kind in GestureKind::CARD {
                self.bind(card, kind)?;
            }
        }
        for column in &columns {
            for kind in GestureKind::COLUMN {
                self.bind(column, kind)?;
            }
        }

        Ok(AttachSummary { cards: cards.len(), columns: columns.len() })
    }

    fn bind(&mut self, element: &H::Element, kind: GestureKind) -> Result<(), HookError> {
        let board = Rc::clone(&self.board);
        let target = element.clone();
        let handler: Box<dyn Fn(&H::Input)> = match kind {
            GestureKind::DragStart => Box::new(move |input: &H::Input| board.drag_start(&target, input)),
            GestureKind::DragEnd => Box::new(move |_: &H::Input| board.drag_end()),
            GestureKind::Click => Box::new(move |input: &H::Input| board.click(&target, input)),
            GestureKind::DragOver => Box::new(move |input: &H::Input| board.drag_over(&target, input)),
            GestureKind::DragLeave => Box::new(move |input: &H::Input| board.drag_leave(&target, input)),
            GestureKind::Drop => Box::new(move |input: &H::Input| board.receive_drop(&target, input)),
        };
        let listener = self.host.listen(element, kind, handler)?;
        self.listeners.push(listener);
        Ok(())
    }
}

impl<E: BoardElement> Board<E> {
    fn drag_start<I: GestureInput<Element = E>>(&self, card: &E, input: &I) {
        let payload = match Card::read(card, &self.config) {
            Ok(card) => DragPayload::from(card),
            Err(err) => {
                self.sink.report(&err);
                return;
            }
        };
        let encoded = match payload.encode() {
            Ok(encoded) => encoded,
            Err(err) => {
                self.sink.report(&err);
                return;
            }
        };

        if let Some(data) = input.drag_data() {
            data.set_effect_allowed(MOVE_EFFECT);
            data.set_data(&self.config.payload_format, &encoded);
        }
        self.sink.trace(&format!("drag started: {} {}", payload.kind().as_str(), payload.identifier()));
        self.gesture.borrow_mut().start(payload, card.clone(), &self.config.dragging_class);
    }

    fn drag_end(&self) {
        let outcome = self.gesture.borrow_mut().finish();
        if let Some(outcome) = outcome {
            self.sink.trace(&format!("drag ended: {}", outcome));
        }
    }

    // A click fired by the end of a drag must not open the card
    fn click<I: GestureInput<Element = E>>(&self, card: &E, input: &I) {
        if card.has_class(&self.config.dragging_class) {
            input.stop_propagation();
            input.prevent_default();
        }
    }

    fn drag_over<I: GestureInput<Element = E>>(&self, column: &E, input: &I) {
        if !self.gesture.borrow().is_dragging() {
            return;
        }
        input.prevent_default();
        if let Some(data) = input.drag_data() {
            data.set_drop_effect(MOVE_EFFECT);
        }
        column.add_class(&self.config.drop_target_class);
    }

    fn drag_leave<I: GestureInput<Element = E>>(&self, column: &E, input: &I) {
        // Leaving into a child of the column still counts as over it
        if input.target().is_some_and(|target| target.is_same(column)) {
            column.remove_class(&self.config.drop_target_class);
        }
    }

    fn receive_drop<I: GestureInput<Element = E>>(&self, column: &E, input: &I) {
        input.prevent_default();
        column.remove_class(&self.config.drop_target_class);
        self.gesture.borrow_mut().land();

        let notification = match self.resolve_drop(column, input) {
            Ok(Some(notification)) => notification,
            Ok(None) => {
                self.sink.trace("dropped onto its own column, nothing to report");
                return;
            }
            Err(err) => {
                self.sink.report(&err);
                return;
            }
        };

        self.sink.trace(&format!("notifying {}", notification.event_name()));
        if let Err(err) = self.owner.notify(&notification) {
            self.sink.report(&err);
        }
    }

    fn resolve_drop<I: GestureInput<Element = E>>(
        &self,
        column: &E,
        input: &I,
    ) -> Result<Option<Notification>, HookError> {
        let raw = input
            .drag_data()
            .and_then(|data| data.data(&self.config.payload_format))
            .ok_or_else(|| HookError::MalformedPayload("drop carried no drag data".to_string()))?;
        let payload = DragPayload::decode(&raw)?;
        let column = Column::read(column, &self.config)?;
        Ok(Notification::for_drop(payload, &column))
    }
}
