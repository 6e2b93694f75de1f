use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::BoardConfig;
use crate::core::ConsoleSink;
use crate::features::kanban::DragDropAdapter;
use crate::web::{LiveViewHook, LiveViewOwner, WebElement, WebHost};

#[wasm_bindgen]
pub struct KanbanDragDrop {
    root: WebElement,
    adapter: DragDropAdapter<WebHost>,
}

#[wasm_bindgen]
impl KanbanDragDrop {
    /// `hook` is the LiveView hook object; `config` an optional partial `BoardConfig`.
    #[wasm_bindgen(constructor)]
    pub fn new(hook: JsValue, config: JsValue) -> Result<KanbanDragDrop, JsValue> {
        let config = BoardConfig::from_js(config)?;
        let hook = LiveViewHook::new(hook);
        let root = WebElement::from(hook.element()?);
        let sink = Rc::new(ConsoleSink::new("KanbanDragDrop", config.debug));
        let owner = Rc::new(LiveViewOwner::new(hook));
        Ok(KanbanDragDrop { root, adapter: DragDropAdapter::new(WebHost, config, owner, sink) })
    }

    pub fn mounted(&mut self) -> Result<(), JsValue> {
        self.adapter.attach(&self.root)?;
        Ok(())
    }

    /// The server re-rendered the board; rebind to the new elements.
    pub fn updated(&mut self) -> Result<(), JsValue> {
        self.adapter.attach(&self.root)?;
        Ok(())
    }

    pub fn destroyed(&mut self) {
        self.adapter.detach();
        self.adapter.cancel_gesture();
    }
}
