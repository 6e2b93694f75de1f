use crate::error::HookError;

/// Where hooks send the errors they recover from.
pub trait ObservabilitySink {
    fn report(&self, error: &HookError);

    fn trace(&self, _message: &str) {}
}

/// Writes to the browser developer console.
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    scope: &'static str,
    debug: bool,
}

impl ConsoleSink {
    pub fn new(scope: &'static str, debug: bool) -> Self {
        Self { scope, debug }
    }
}

impl ObservabilitySink for ConsoleSink {
    fn report(&self, error: &HookError) {
        web_sys::console::error_1(&format!("[{}] {}", self.scope, error).into());
    }

    fn trace(&self, message: &str) {
        if self.debug {
            web_sys::console::debug_1(&format!("[{}] {}", self.scope, message).into());
        }
    }
}
