//! Attribute identifiers.
//!
//! Every bounded numeric axis of a card (health, energy, ...) is named by an
//! `AttributeId`. The set is closed: new axes are added as new variants.

use serde::{Deserialize, Serialize};

/// Identifies one semantic axis of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AttributeId {
    /// Current hit points.
    Health,
    /// Upper reference for health, usable as a plain attribute.
    MaxHealth,
    /// Resource spent by moves.
    Energy,
    /// Damage-over-time stacks.
    Bleeding,
}

impl AttributeId {
    /// Every attribute, in declaration order.
    pub const ALL: [AttributeId; 4] = [
        AttributeId::Health,
        AttributeId::MaxHealth,
        AttributeId::Energy,
        AttributeId::Bleeding,
    ];

    /// Human-readable label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            AttributeId::Health => "Health",
            AttributeId::MaxHealth => "Max Health",
            AttributeId::Energy => "Energy",
            AttributeId::Bleeding => "Bleeding",
        }
    }
}

impl std::fmt::Display for AttributeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
