use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use crate::core::BoardOwner;
use crate::error::HookError;
use crate::models::Notification;

/// The LiveView hook object (`this` inside `mounted()` and friends).
#[derive(Debug, Clone)]
pub struct LiveViewHook {
    this: JsValue,
}

impl LiveViewHook {
    pub fn new(this: JsValue) -> Self {
        Self { this }
    }

    pub fn element(&self) -> Result<HtmlElement, HookError> {
        Reflect::get(&self.this, &JsValue::from_str("el"))
            .map_err(HookError::from_js)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| HookError::Bridge("hook has no `el` element".to_string()))
    }

    pub fn push_event<T: Serialize>(&self, event: &str, payload: &T) -> Result<(), HookError> {
        let payload = to_js(payload)?;
        self.call("pushEvent", &[JsValue::from_str(event), payload])
    }

    /// Pushes to the component behind `target` instead of the parent view.
    pub fn push_event_to<T: Serialize>(&self, target: &str, event: &str, payload: &T) -> Result<(), HookError> {
        let payload = to_js(payload)?;
        self.call("pushEventTo", &[JsValue::from_str(target), JsValue::from_str(event), payload])
    }

    fn call(&self, method: &str, args: &[JsValue]) -> Result<(), HookError> {
        let function = Reflect::get(&self.this, &JsValue::from_str(method))
            .map_err(HookError::from_js)?
            .dyn_into::<Function>()
            .map_err(|_| HookError::Bridge(format!("hook has no `{}` function", method)))?;
        let args: Array = args.iter().collect();
        function.apply(&self.this, &args).map_err(HookError::from_js)?;
        Ok(())
    }
}

// Maps become plain objects, which is what LiveView sends over the socket
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, HookError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| HookError::Bridge(e.to_string()))
}

/// Forwards board notifications to the server through `pushEvent`.
#[derive(Debug, Clone)]
pub struct LiveViewOwner {
    hook: LiveViewHook,
}

impl LiveViewOwner {
    pub fn new(hook: LiveViewHook) -> Self {
        Self { hook }
    }
}

impl BoardOwner for LiveViewOwner {
    fn notify(&self, notification: &Notification) -> Result<(), HookError> {
        self.hook.push_event(notification.event_name(), notification)
    }
}
