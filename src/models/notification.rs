use serde::Serialize;

use super::card::Column;
use super::payload::DragPayload;

/// Status change request sent to the board owner after a drop.
///
/// Serializes to the flat key/value map the owner expects; the event name
/// travels separately, see [`Notification::event_name`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Notification {
    DropBatch { batch_code: String, from: String, to: String },
    DropUnbatched { product_id: String, to: String },
}

impl Notification {
    pub const DROP_BATCH: &'static str = "drop_batch";
    pub const DROP_UNBATCHED: &'static str = "drop_unbatched";

    /// `None` when the card was dropped back onto the column it came from.
    pub fn for_drop(payload: DragPayload, column: &Column) -> Option<Self> {
        if payload.current_status() == column.status {
            return None;
        }
        let to = column.status.clone();
        Some(match payload {
            DragPayload::Batch { batch_code, current_status } => {
                Notification::DropBatch { batch_code, from: current_status, to }
            }
            DragPayload::Unbatched { product_id, .. } => Notification::DropUnbatched { product_id, to },
        })
    }

    pub fn event_name(&self) -> &'static str {
        match self {
            Notification::DropBatch { .. } => Self::DROP_BATCH,
            Notification::DropUnbatched { .. } => Self::DROP_UNBATCHED,
        }
    }
}
