//! Move requirements.
//!
//! A requirement is an inclusive range check on one of the target's
//! attributes. All of a move's requirements must hold before any of its
//! effects are applied.

use serde::{Deserialize, Serialize};

use crate::core::AttributeId;

/// Inclusive range precondition on one target attribute.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    /// Attribute read from the target.
    pub attribute: AttributeId,
    /// Smallest accepted value.
    pub min: f32,
    /// Largest accepted value.
    pub max: f32,
}

impl Requirement {
    /// Require `attribute` to lie within `[min, max]`.
    #[must_use]
    pub const fn between(attribute: AttributeId, min: f32, max: f32) -> Self {
        Self { attribute, min, max }
    }

    /// Require `attribute >= min`.
    #[must_use]
    pub const fn at_least(attribute: AttributeId, min: f32) -> Self {
        Self::between(attribute, min, f32::MAX)
    }

    /// Require `attribute <= max`.
    #[must_use]
    pub const fn at_most(attribute: AttributeId, max: f32) -> Self {
        Self::between(attribute, f32::MIN, max)
    }

    /// Check a value against this requirement.
    #[must_use]
    pub fn is_met(&self, current: f32) -> bool {
        !(current < self.min || current > self.max)
    }
}
