use serde::{Deserialize, Serialize};

use super::card::{Card, CardKind};
use crate::error::HookError;

/// Snapshot of the dragged card, carried in the data transfer for one gesture.
///
/// The variant fixes which identifier travels with it, so a batch payload can
/// never carry a product id and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum DragPayload {
    Batch { batch_code: String, current_status: String },
    Unbatched { product_id: String, current_status: String },
}

impl DragPayload {
    pub fn kind(&self) -> CardKind {
        match self {
            DragPayload::Batch { .. } => CardKind::Batch,
            DragPayload::Unbatched { .. } => CardKind::Unbatched,
        }
    }

    pub fn identifier(&self) -> &str {
        match self {
            DragPayload::Batch { batch_code, .. } => batch_code,
            DragPayload::Unbatched { product_id, .. } => product_id,
        }
    }

    pub fn current_status(&self) -> &str {
        match self {
            DragPayload::Batch { current_status, .. } | DragPayload::Unbatched { current_status, .. } => {
                current_status
            }
        }
    }

    pub fn encode(&self) -> Result<String, HookError> {
        serde_json::to_string(self).map_err(|e| HookError::MalformedPayload(e.to_string()))
    }

    pub fn decode(raw: &str) -> Result<Self, HookError> {
        if raw.trim().is_empty() {
            return Err(HookError::MalformedPayload("drag data is empty".to_string()));
        }
        let payload: DragPayload =
            serde_json::from_str(raw).map_err(|e| HookError::MalformedPayload(e.to_string()))?;
        if payload.identifier().is_empty() || payload.current_status().is_empty() {
            return Err(HookError::MalformedPayload(format!(
                "{} payload has an empty identifier or status",
                payload.kind().as_str()
            )));
        }
        Ok(payload)
    }
}

impl From<Card> for DragPayload {
    fn from(card: Card) -> Self {
        match card.kind {
            CardKind::Batch => DragPayload::Batch {
                batch_code: card.identifier,
                current_status: card.current_status,
            },
            CardKind::Unbatched => DragPayload::Unbatched {
                product_id: card.identifier,
                current_status: card.current_status,
            },
        }
    }
}
