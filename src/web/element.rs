use wasm_bindgen::JsCast;
use web_sys::{DataTransfer, DragEvent, Element, Event};

use crate::core::{BoardElement, DragData, GestureInput};

#[derive(Debug, Clone)]
pub struct WebElement(pub Element);

impl From<Element> for WebElement {
    fn from(element: Element) -> Self {
        WebElement(element)
    }
}

impl From<web_sys::HtmlElement> for WebElement {
    fn from(element: web_sys::HtmlElement) -> Self {
        WebElement(element.into())
    }
}

impl BoardElement for WebElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn is_same(&self, other: &Self) -> bool {
        let other: &web_sys::Node = &other.0;
        self.0.is_same_node(Some(other))
    }
}

pub struct WebDragData(pub DataTransfer);

impl DragData for WebDragData {
    fn set_data(&self, format: &str, data: &str) {
        let _ = self.0.set_data(format, data);
    }

    // The browser hides drag data outside dragstart/drop and returns ""
    fn data(&self, format: &str) -> Option<String> {
        self.0.get_data(format).ok().filter(|data| !data.is_empty())
    }

    fn set_effect_allowed(&self, effect: &str) {
        self.0.set_effect_allowed(effect);
    }

    fn set_drop_effect(&self, effect: &str) {
        self.0.set_drop_effect(effect);
    }
}

pub struct WebInput(pub Event);

impl GestureInput for WebInput {
    type Element = WebElement;
    type Data = WebDragData;

    fn drag_data(&self) -> Option<WebDragData> {
        self.0
            .dyn_ref::<DragEvent>()
            .and_then(|event| event.data_transfer())
            .map(WebDragData)
    }

    fn target(&self) -> Option<WebElement> {
        self.0.target().and_then(|target| target.dyn_into::<Element>().ok()).map(WebElement)
    }

    fn prevent_default(&self) {
        self.0.prevent_default();
    }

    fn stop_propagation(&self) {
        self.0.stop_propagation();
    }
}
