//! Cards: bounded attribute states plus an ordered list of moves.
//!
//! A card owns its states and moves outright. Moves are addressed by index,
//! and indices never shift once a card is built.

use rustc_hash::FxHashMap;

use super::moves::Move;
use crate::core::{AttributeId, BoundedState};

/// Attribute states of a card, one per attribute.
pub type States = FxHashMap<AttributeId, BoundedState>;

/// A card taking part in move resolution.
///
/// Build cards with [`CardBuilder`](super::CardBuilder) or from a
/// [`CardDefinition`](super::CardDefinition).
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    /// Card name (for display/debugging).
    pub name: String,

    pub(crate) moves: Vec<Move>,

    pub(crate) states: States,
}

impl Card {
    pub(crate) fn from_parts(name: String, moves: Vec<Move>, states: States) -> Self {
        Self {
            name,
            moves,
            states,
        }
    }

    /// Get the state for an attribute.
    #[must_use]
    pub fn state(&self, attribute: AttributeId) -> Option<&BoundedState> {
        self.states.get(&attribute)
    }

    /// Get the current value of an attribute.
    #[must_use]
    pub fn current(&self, attribute: AttributeId) -> Option<f32> {
        self.state(attribute).map(BoundedState::current)
    }

    /// Check whether the card was provisioned with an attribute.
    #[must_use]
    pub fn has_attribute(&self, attribute: AttributeId) -> bool {
        self.states.contains_key(&attribute)
    }

    /// Attributes registered on this card, sorted.
    #[must_use]
    pub fn attributes(&self) -> Vec<AttributeId> {
        let mut attributes: Vec<_> = self.states.keys().copied().collect();
        attributes.sort();
        attributes
    }

    /// All moves, by index.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Get a move by index.
    #[must_use]
    pub fn get_move(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    /// Number of moves on this card.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }
}
