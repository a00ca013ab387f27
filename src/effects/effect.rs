//! Effect definitions.
//!
//! An effect is a single mutation of one attribute: an operator combines the
//! effect's value with the attribute's current value. Damage and healing are
//! not separate effect kinds; they are additive effects with a negative or
//! positive value.

use serde::{Deserialize, Serialize};

use crate::core::AttributeId;

/// How an effect's value combines with the current attribute value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectOperator {
    /// Replace the current value.
    Specified,
    /// Add to the current value.
    Additive,
    /// Multiply the current value.
    Multiplicative,
    /// Raise the current value to a power.
    Exponential,
}

impl EffectOperator {
    /// Combine `current` with `value`. The result is not clamped.
    #[must_use]
    pub fn combine(self, current: f32, value: f32) -> f32 {
        match self {
            EffectOperator::Specified => value,
            EffectOperator::Additive => current + value,
            EffectOperator::Multiplicative => current * value,
            EffectOperator::Exponential => current.powf(value),
        }
    }
}

/// A single operator-based mutation of one attribute.
///
/// ## Example
///
/// ```
/// use ccg_moves::core::AttributeId;
/// use ccg_moves::effects::{Effect, EffectOperator};
///
/// let hit = Effect::damage(AttributeId::Health, 30.0);
/// assert_eq!(hit.operator, EffectOperator::Additive);
/// assert_eq!(hit.value, -30.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    /// Attribute on the target that this effect mutates.
    pub attribute: AttributeId,
    /// How `value` is combined with the current value.
    pub operator: EffectOperator,
    /// Operand.
    pub value: f32,
}

impl Effect {
    /// Create an effect.
    #[must_use]
    pub const fn new(attribute: AttributeId, operator: EffectOperator, value: f32) -> Self {
        Self {
            attribute,
            operator,
            value,
        }
    }

    /// Set the attribute to `value`.
    #[must_use]
    pub const fn set(attribute: AttributeId, value: f32) -> Self {
        Self::new(attribute, EffectOperator::Specified, value)
    }

    /// Add a signed `delta` to the attribute.
    #[must_use]
    pub const fn add(attribute: AttributeId, delta: f32) -> Self {
        Self::new(attribute, EffectOperator::Additive, delta)
    }

    /// Multiply the attribute by `factor`.
    #[must_use]
    pub const fn multiply(attribute: AttributeId, factor: f32) -> Self {
        Self::new(attribute, EffectOperator::Multiplicative, factor)
    }

    /// Raise the attribute to `exponent`.
    #[must_use]
    pub const fn pow(attribute: AttributeId, exponent: f32) -> Self {
        Self::new(attribute, EffectOperator::Exponential, exponent)
    }

    /// Subtract `amount` from the attribute.
    #[must_use]
    pub fn damage(attribute: AttributeId, amount: f32) -> Self {
        Self::add(attribute, -amount)
    }

    /// Add `amount` to the attribute.
    #[must_use]
    pub const fn heal(attribute: AttributeId, amount: f32) -> Self {
        Self::add(attribute, amount)
    }
}
