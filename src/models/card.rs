use serde::{Deserialize, Serialize};

use crate::config::BoardConfig;
use crate::core::BoardElement;
use crate::error::HookError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Batch,
    Unbatched,
}

impl CardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardKind::Batch => "batch",
            CardKind::Unbatched => "unbatched",
        }
    }
}

/// A draggable unit of work as described by its element's attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub kind: CardKind,
    /// Batch code for batch cards, product id otherwise.
    pub identifier: String,
    pub current_status: String,
}

impl Card {
    pub fn read<E: BoardElement>(element: &E, config: &BoardConfig) -> Result<Self, HookError> {
        let current_status = required(element, &config.status_attribute)?;
        // Presence of the batch code attribute decides the kind, even if it is empty
        let (kind, identifier) = if element.attribute(&config.batch_code_attribute).is_some() {
            (CardKind::Batch, required(element, &config.batch_code_attribute)?)
        } else {
            (CardKind::Unbatched, required(element, &config.product_id_attribute)?)
        };
        Ok(Card { kind, identifier, current_status })
    }
}

/// A drop target holding every card of one workflow status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub status: String,
}

impl Column {
    pub fn read<E: BoardElement>(element: &E, config: &BoardConfig) -> Result<Self, HookError> {
        Ok(Column { status: required(element, &config.status_attribute)? })
    }
}

fn required<E: BoardElement>(element: &E, attribute: &str) -> Result<String, HookError> {
    element
        .attribute(attribute)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| HookError::missing_attribute(attribute))
}
