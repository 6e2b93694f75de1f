use wasm_bindgen::JsCast;
use web_sys::Element;

use super::element::{WebElement, WebInput};
use super::listener::WebListener;
use crate::core::{BoardHost, GestureKind};
use crate::error::HookError;

/// The live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebHost;

impl BoardHost for WebHost {
    type Element = WebElement;
    type Input = WebInput;
    type Listener = WebListener;

    fn query_all(&self, root: &WebElement, selector: &str) -> Result<Vec<WebElement>, HookError> {
        let nodes = root.0.query_selector_all(selector).map_err(HookError::from_js)?;
        Ok((0..nodes.length())
            .filter_map(|index| nodes.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(WebElement)
            .collect())
    }

    fn listen(
        &self,
        element: &WebElement,
        kind: GestureKind,
        handler: Box<dyn Fn(&WebInput)>,
    ) -> Result<WebListener, HookError> {
        WebListener::new(&element.0, kind.event_type(), move |event| handler(&WebInput(event)))
    }
}
