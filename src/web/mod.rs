//! `web_sys` implementations of the board traits and the LiveView bridge.

pub mod element;
pub mod host;
pub mod listener;
pub mod live_view;

pub use element::{WebDragData, WebElement, WebInput};
pub use host::WebHost;
pub use listener::WebListener;
pub use live_view::{LiveViewHook, LiveViewOwner};
