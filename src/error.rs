//! Error types.
//!
//! - `ResolveError`: why a move could not be resolved
//! - `BuildError`: why a card could not be assembled
//!
//! Every resolution error is raised before any state is touched, so a failed
//! resolution never leaves a card half-updated.

use crate::core::AttributeId;

/// Errors returned by move resolution.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ResolveError {
    /// The move index does not address a move on the source card.
    #[error("move index {index} out of range (card has {len} moves)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The move has been used up.
    #[error("move {move_index} has no uses remaining")]
    NoUsesRemaining { move_index: usize },

    /// A requirement on the target was not satisfied.
    #[error("requirement on {attribute} not met: {current} is outside [{min}, {max}]")]
    RequirementNotMet {
        attribute: AttributeId,
        current: f32,
        min: f32,
        max: f32,
    },

    /// The target card was never provisioned with an attribute the move uses.
    #[error("target has no {attribute} attribute")]
    UnknownAttribute { attribute: AttributeId },
}

impl ResolveError {
    /// True for the recoverable gate failures (`NoUsesRemaining`,
    /// `RequirementNotMet`).
    ///
    /// The other variants indicate caller misuse or badly provisioned cards.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            ResolveError::NoUsesRemaining { .. } | ResolveError::RequirementNotMet { .. }
        )
    }
}

/// Errors returned while assembling a card.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum BuildError {
    /// A requirement or effect referenced a move that was not added yet.
    #[error("move index {index} out of range (builder has {len} moves)")]
    IndexOutOfRange { index: usize, len: usize },

    /// State bounds are inverted or not numbers.
    #[error("invalid bounds for {attribute}: [{min}, {max}]")]
    InvalidBounds {
        attribute: AttributeId,
        min: f32,
        max: f32,
    },

    /// The same attribute was registered twice.
    #[error("attribute {attribute} registered more than once")]
    DuplicateAttribute { attribute: AttributeId },
}
