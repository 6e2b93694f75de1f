use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::error::HookError;
use crate::web::LiveViewHook;

/// Fills the hook's input with the browser's IANA time zone on mount.
#[wasm_bindgen]
pub struct TimezoneInput {
    hook: LiveViewHook,
}

#[wasm_bindgen]
impl TimezoneInput {
    #[wasm_bindgen(constructor)]
    pub fn new(hook: JsValue) -> TimezoneInput {
        TimezoneInput { hook: LiveViewHook::new(hook) }
    }

    pub fn mounted(&self) -> Result<(), JsValue> {
        let element = self.hook.element()?;
        let time_zone = resolved_time_zone()?;
        Reflect::set(&element, &JsValue::from_str("value"), &JsValue::from_str(&time_zone))
            .map_err(HookError::from_js)?;
        Ok(())
    }
}

/// `Intl.DateTimeFormat().resolvedOptions().timeZone`
pub fn resolved_time_zone() -> Result<String, HookError> {
    let options = js_sys::Intl::DateTimeFormat::new(&Array::new(), &Object::new()).resolved_options();
    Reflect::get(&options, &JsValue::from_str("timeZone"))
        .map_err(HookError::from_js)?
        .as_string()
        .filter(|zone| !zone.is_empty())
        .ok_or_else(|| HookError::Bridge("Intl did not resolve a time zone".to_string()))
}
