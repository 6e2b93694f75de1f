use crate::error::HookError;
use crate::models::Notification;

/// The authority that owns board state.
///
/// Notifications are fire and forget: the owner validates the transition,
/// persists it and re-renders the board. An `Err` only means the message
/// could not be handed over.
pub trait BoardOwner {
    fn notify(&self, notification: &Notification) -> Result<(), HookError>;
}
