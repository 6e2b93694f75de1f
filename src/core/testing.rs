//! In-memory stand-ins for the DOM, the board owner and the console.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::{Rc, Weak};

use super::dom::{BoardElement, BoardHost, DragData, GestureInput, GestureKind};
use super::services::{BoardOwner, ObservabilitySink};
use crate::error::HookError;
use crate::models::Notification;

thread_local! {
    static NEXT_NODE: Cell<usize> = const { Cell::new(0) };
}

struct Node {
    id: usize,
    attributes: RefCell<HashMap<String, String>>,
    classes: RefCell<BTreeSet<String>>,
    children: RefCell<Vec<FakeElement>>,
}

#[derive(Clone)]
pub struct FakeElement(Rc<Node>);

impl FakeElement {
    pub fn new(class: &str) -> Self {
        let id = NEXT_NODE.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        let element = FakeElement(Rc::new(Node {
            id,
            attributes: RefCell::new(HashMap::new()),
            classes: RefCell::new(BTreeSet::new()),
            children: RefCell::new(Vec::new()),
        }));
        if !class.is_empty() {
            element.add_class(class);
        }
        element
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.0.attributes.borrow_mut().insert(name.to_string(), value.to_string());
        self
    }

    pub fn append(&self, child: &FakeElement) {
        self.0.children.borrow_mut().push(child.clone());
    }

    /// Drops the whole subtree, the way a re-render replaces it.
    pub fn clear_children(&self) {
        self.0.children.borrow_mut().clear();
    }

    pub fn id(&self) -> usize {
        self.0.id
    }

    fn descendants(&self) -> Vec<FakeElement> {
        let mut found = Vec::new();
        for child in self.0.children.borrow().iter() {
            found.push(child.clone());
            found.extend(child.descendants());
        }
        found
    }
}

impl BoardElement for FakeElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.attributes.borrow().get(name).cloned()
    }

    fn add_class(&self, class: &str) {
        self.0.classes.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.0.classes.borrow_mut().remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().contains(class)
    }

    fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Default)]
struct DataState {
    entries: HashMap<String, String>,
    effect_allowed: Option<String>,
    drop_effect: Option<String>,
}

/// Shared between every event of one simulated gesture.
#[derive(Clone, Default)]
pub struct FakeDragData(Rc<RefCell<DataState>>);

impl FakeDragData {
    pub fn with(format: &str, data: &str) -> Self {
        let channel = FakeDragData::default();
        channel.set_data(format, data);
        channel
    }

    pub fn effect_allowed(&self) -> Option<String> {
        self.0.borrow().effect_allowed.clone()
    }

    pub fn drop_effect(&self) -> Option<String> {
        self.0.borrow().drop_effect.clone()
    }
}

impl DragData for FakeDragData {
    fn set_data(&self, format: &str, data: &str) {
        self.0.borrow_mut().entries.insert(format.to_string(), data.to_string());
    }

    fn data(&self, format: &str) -> Option<String> {
        self.0.borrow().entries.get(format).cloned()
    }

    fn set_effect_allowed(&self, effect: &str) {
        self.0.borrow_mut().effect_allowed = Some(effect.to_string());
    }

    fn set_drop_effect(&self, effect: &str) {
        self.0.borrow_mut().drop_effect = Some(effect.to_string());
    }
}

#[derive(Default)]
pub struct FakeInput {
    pub data: Option<FakeDragData>,
    pub target: Option<FakeElement>,
    pub default_prevented: Cell<bool>,
    pub propagation_stopped: Cell<bool>,
}

impl FakeInput {
    pub fn drag(data: &FakeDragData, target: &FakeElement) -> Self {
        FakeInput { data: Some(data.clone()), target: Some(target.clone()), ..FakeInput::default() }
    }

    pub fn click(target: &FakeElement) -> Self {
        FakeInput { target: Some(target.clone()), ..FakeInput::default() }
    }
}

impl GestureInput for FakeInput {
    type Element = FakeElement;
    type Data = FakeDragData;

    fn drag_data(&self) -> Option<FakeDragData> {
        self.data.clone()
    }

    fn target(&self) -> Option<FakeElement> {
        self.target.clone()
    }

    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }
}

struct Registration {
    id: usize,
    element: usize,
    kind: GestureKind,
    handler: Rc<dyn Fn(&FakeInput)>,
}

#[derive(Default)]
struct Registry {
    next_id: usize,
    registrations: Vec<Registration>,
}

#[derive(Clone, Default)]
pub struct FakeHost {
    registry: Rc<RefCell<Registry>>,
}

impl FakeHost {
    /// Runs every listener bound to `element` for `kind`; returns how many ran.
    pub fn dispatch(&self, element: &FakeElement, kind: GestureKind, input: &FakeInput) -> usize {
        let handlers: Vec<Rc<dyn Fn(&FakeInput)>> = self
            .registry
            .borrow()
            .registrations
            .iter()
            .filter(|r| r.element == element.id() && r.kind == kind)
            .map(|r| Rc::clone(&r.handler))
            .collect();
        for handler in &handlers {
            handler(input);
        }
        handlers.len()
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().registrations.len()
    }
}

pub struct FakeListener {
    id: usize,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for FakeListener {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().registrations.retain(|r| r.id != self.id);
        }
    }
}

impl BoardHost for FakeHost {
    type Element = FakeElement;
    type Input = FakeInput;
    type Listener = FakeListener;

    fn query_all(&self, root: &FakeElement, selector: &str) -> Result<Vec<FakeElement>, HookError> {
        let class = selector
            .strip_prefix('.')
            .ok_or_else(|| HookError::Bridge(format!("unsupported selector `{}`", selector)))?;
        Ok(root.descendants().into_iter().filter(|e| e.has_class(class)).collect())
    }

    fn listen(
        &self,
        element: &FakeElement,
        kind: GestureKind,
        handler: Box<dyn Fn(&FakeInput)>,
    ) -> Result<FakeListener, HookError> {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.registrations.push(Registration { id, element: element.id(), kind, handler: Rc::from(handler) });
        Ok(FakeListener { id, registry: Rc::downgrade(&self.registry) })
    }
}

#[derive(Default)]
pub struct RecordingOwner {
    pub sent: RefCell<Vec<Notification>>,
}

impl BoardOwner for RecordingOwner {
    fn notify(&self, notification: &Notification) -> Result<(), HookError> {
        self.sent.borrow_mut().push(notification.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub errors: RefCell<Vec<HookError>>,
    pub traces: RefCell<Vec<String>>,
}

impl ObservabilitySink for RecordingSink {
    fn report(&self, error: &HookError) {
        self.errors.borrow_mut().push(error.clone());
    }

    fn trace(&self, message: &str) {
        self.traces.borrow_mut().push(message.to_string());
    }
}
