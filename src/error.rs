use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong inside a hook.
///
/// None of these are fatal: drag handlers report them to the
/// [`ObservabilitySink`](crate::core::ObservabilitySink) and keep their
/// listeners attached. Only hook construction and (re)attachment hand
/// them back to JavaScript.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HookError {
    /// The drag data channel was empty, not JSON, or lacked required fields.
    #[error("malformed drag payload: {0}")]
    MalformedPayload(String),

    #[error("element is missing required attribute `{attribute}`")]
    MissingAttribute { attribute: String },

    #[error("invalid hook configuration: {0}")]
    InvalidConfig(String),

    /// A call across the JavaScript boundary failed.
    #[error("javascript bridge call failed: {0}")]
    Bridge(String),
}

impl HookError {
    pub fn missing_attribute(attribute: &str) -> Self {
        HookError::MissingAttribute { attribute: attribute.to_string() }
    }

    pub fn from_js(value: JsValue) -> Self {
        match value.as_string() {
            Some(message) => HookError::Bridge(message),
            None => HookError::Bridge(format!("{:?}", value)),
        }
    }
}

impl From<HookError> for JsValue {
    fn from(err: HookError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
