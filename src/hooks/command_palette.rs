use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement, KeyboardEvent};

use crate::config::PaletteConfig;
use crate::core::{ConsoleSink, ObservabilitySink};
use crate::error::HookError;
use crate::features::command_palette::{KeyPress, Keymap, Modifier, PaletteCommand};
use crate::web::{LiveViewHook, WebListener};

#[wasm_bindgen]
pub struct CommandPalette {
    hook: LiveViewHook,
    config: PaletteConfig,
    sink: Rc<ConsoleSink>,
    listener: Option<WebListener>,
}

#[wasm_bindgen]
impl CommandPalette {
    #[wasm_bindgen(constructor)]
    pub fn new(hook: JsValue, config: JsValue) -> Result<CommandPalette, JsValue> {
        let config = PaletteConfig::from_js(config)?;
        let sink = Rc::new(ConsoleSink::new("CommandPalette", config.debug));
        Ok(CommandPalette { hook: LiveViewHook::new(hook), config, sink, listener: None })
    }

    /// Starts listening for shortcuts on the whole document.
    pub fn mounted(&mut self) -> Result<(), JsValue> {
        self.listener = None;

        let window = web_sys::window().ok_or_else(|| HookError::Bridge("no window".to_string()))?;
        let document = window.document().ok_or_else(|| HookError::Bridge("no document".to_string()))?;
        let platform = window.navigator().platform().unwrap_or_default();
        let keymap = Keymap::new(Modifier::for_platform(&platform), &self.config.shortcut_key);

        let element = self.hook.element()?;
        let hook = self.hook.clone();
        let open_attribute = self.config.open_attribute.clone();
        let sink = Rc::clone(&self.sink);

        let listener = WebListener::new(&document, "keydown", move |event: Event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let press = KeyPress { key: key_event.key(), meta: key_event.meta_key(), ctrl: key_event.ctrl_key() };
            let is_open = element.get_attribute(&open_attribute).as_deref() == Some("true");

            if let Some(command) = keymap.resolve(&press, is_open) {
                event.prevent_default();
                sink.trace(&format!("dispatching {}", command.event_name()));
                if let Err(err) = push_command(&hook, &element, command) {
                    sink.report(&err);
                }
            }
        })?;

        self.listener = Some(listener);
        Ok(())
    }

    pub fn destroyed(&mut self) {
        self.listener = None;
    }
}

// Targets the live component that rendered the palette element
fn push_command(hook: &LiveViewHook, element: &HtmlElement, command: PaletteCommand) -> Result<(), HookError> {
    let target = format!("#{}", element.id());
    hook.push_event_to(&target, command.event_name(), &command.payload())
}
