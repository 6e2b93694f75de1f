use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::error::HookError;

/// Markup contract and visual classes used by the drag-and-drop board.
///
/// JavaScript may pass a partial object (camelCase keys) as the hook's
/// second constructor argument; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    pub card_selector: String,
    pub column_selector: String,
    /// Presence of this attribute makes a card a batch card.
    pub batch_code_attribute: String,
    pub product_id_attribute: String,
    pub status_attribute: String,
    pub dragging_class: String,
    pub drop_target_class: String,
    /// Format the drag payload is stored under in the data transfer.
    pub payload_format: String,
    pub debug: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            card_selector: ".kanban-card".to_string(),
            column_selector: ".kanban-column".to_string(),
            batch_code_attribute: "data-batch-code".to_string(),
            product_id_attribute: "data-product-id".to_string(),
            status_attribute: "data-status".to_string(),
            dragging_class: "dragging".to_string(),
            drop_target_class: "drag-over".to_string(),
            payload_format: "application/json".to_string(),
            debug: false,
        }
    }
}

impl BoardConfig {
    pub fn from_js(value: JsValue) -> Result<Self, HookError> {
        let config: Self = from_js_or_default(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), HookError> {
        let fields = [
            ("cardSelector", &self.card_selector),
            ("columnSelector", &self.column_selector),
            ("batchCodeAttribute", &self.batch_code_attribute),
            ("productIdAttribute", &self.product_id_attribute),
            ("statusAttribute", &self.status_attribute),
            ("draggingClass", &self.dragging_class),
            ("dropTargetClass", &self.drop_target_class),
            ("payloadFormat", &self.payload_format),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(HookError::InvalidConfig(format!("`{}` must not be empty", name))),
            None => Ok(()),
        }
    }
}

/// Settings for the command palette hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaletteConfig {
    /// Key that opens the palette together with Cmd (macOS) or Ctrl.
    pub shortcut_key: String,
    /// Attribute on the hook element holding `"true"` while the palette is open.
    pub open_attribute: String,
    pub debug: bool,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            shortcut_key: "k".to_string(),
            open_attribute: "data-open".to_string(),
            debug: false,
        }
    }
}

impl PaletteConfig {
    pub fn from_js(value: JsValue) -> Result<Self, HookError> {
        let config: Self = from_js_or_default(value)?;
        if config.shortcut_key.is_empty() {
            return Err(HookError::InvalidConfig("`shortcutKey` must not be empty".to_string()));
        }
        Ok(config)
    }
}

fn from_js_or_default<T: DeserializeOwned + Default>(value: JsValue) -> Result<T, HookError> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| HookError::InvalidConfig(e.to_string()))
}
