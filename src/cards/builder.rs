//! Fluent card assembly.
//!
//! `CardBuilder` collects states and moves by value and hands out the finished
//! card from [`CardBuilder::build`], which consumes the builder. Index-based
//! calls refer to moves added earlier in the same chain.
//!
//! Mistakes do not break the chain: the first error is remembered, later
//! calls become no-ops, and `build` reports it.
//!
//! ## Example
//!
//! ```
//! use ccg_moves::cards::CardBuilder;
//! use ccg_moves::core::AttributeId;
//! use ccg_moves::effects::{Effect, Requirement};
//!
//! let card = CardBuilder::new("Medic")
//!     .with_state(AttributeId::Health, 0.0, 100.0, 20.0)
//!     .with_state(AttributeId::Energy, 0.0, 100.0, 40.0)
//!     .with_move(2)
//!     .with_requirement(0, Requirement::at_least(AttributeId::Energy, 11.0))
//!     .with_effect(0, Effect::heal(AttributeId::Health, 20.0))
//!     .with_effect(0, Effect::damage(AttributeId::Energy, 10.0))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(card.move_count(), 1);
//! assert_eq!(card.current(AttributeId::Health), Some(20.0));
//! ```

use super::card::{Card, States};
use super::moves::{Move, UNLIMITED_USES};
use crate::core::{AttributeId, BoundedState};
use crate::effects::{Effect, Requirement};
use crate::error::BuildError;

/// By-value assembler for [`Card`].
#[derive(Clone, Debug)]
pub struct CardBuilder {
    name: String,
    moves: Vec<Move>,
    states: States,
    error: Option<BuildError>,
}

impl CardBuilder {
    /// Start assembling a card.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            moves: Vec::new(),
            states: States::default(),
            error: None,
        }
    }

    /// Register a bounded state for `attribute`.
    #[must_use]
    pub fn with_state(mut self, attribute: AttributeId, min: f32, max: f32, initial: f32) -> Self {
        if self.error.is_some() {
            return self;
        }

        if self.states.contains_key(&attribute) {
            return self.fail(BuildError::DuplicateAttribute { attribute });
        }

        match BoundedState::new(min, max, initial) {
            Some(state) => {
                self.states.insert(attribute, state);
                self
            }
            None => self.fail(BuildError::InvalidBounds { attribute, min, max }),
        }
    }

    /// Append an empty move with `uses` remaining. Its index is the number of
    /// moves added before it.
    #[must_use]
    pub fn with_move(mut self, uses: u32) -> Self {
        if self.error.is_none() {
            self.moves.push(Move::new(uses));
        }
        self
    }

    /// Append an empty move with unlimited uses.
    #[must_use]
    pub fn with_unlimited_move(self) -> Self {
        self.with_move(UNLIMITED_USES)
    }

    /// Append a fully assembled move.
    #[must_use]
    pub fn with_prepared_move(mut self, mv: Move) -> Self {
        if self.error.is_none() {
            self.moves.push(mv);
        }
        self
    }

    /// Append a requirement to the move at `move_index`.
    #[must_use]
    pub fn with_requirement(mut self, move_index: usize, requirement: Requirement) -> Self {
        let pushed = self
            .move_mut(move_index)
            .map(|mv| mv.map(|mv| mv.push_requirement(requirement)));
        match pushed {
            Ok(_) => self,
            Err(err) => self.fail(err),
        }
    }

    /// Append an effect to the move at `move_index`.
    #[must_use]
    pub fn with_effect(mut self, move_index: usize, effect: Effect) -> Self {
        let pushed = self
            .move_mut(move_index)
            .map(|mv| mv.map(|mv| mv.push_effect(effect)));
        match pushed {
            Ok(_) => self,
            Err(err) => self.fail(err),
        }
    }

    /// Number of moves added so far.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Finish assembly.
    ///
    /// # Errors
    ///
    /// Returns the first error recorded during assembly.
    pub fn build(self) -> Result<Card, BuildError> {
        if let Some(err) = self.error {
            return Err(err);
        }

        tracing::debug!(
            card = %self.name,
            states = self.states.len(),
            moves = self.moves.len(),
            "card assembled"
        );

        Ok(Card::from_parts(self.name, self.moves, self.states))
    }

    /// `Ok(None)` once an earlier error has been latched.
    fn move_mut(&mut self, index: usize) -> Result<Option<&mut Move>, BuildError> {
        if self.error.is_some() {
            return Ok(None);
        }

        let len = self.moves.len();
        self.moves
            .get_mut(index)
            .map(Some)
            .ok_or(BuildError::IndexOutOfRange { index, len })
    }

    fn fail(mut self, err: BuildError) -> Self {
        if self.error.is_none() {
            self.error = Some(err);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_empty_card() {
        let card = CardBuilder::new("Empty").build().unwrap();
        assert_eq!(card.name, "Empty");
        assert_eq!(card.move_count(), 0);
        assert!(card.attributes().is_empty());
    }

    #[test]
    fn test_with_state_clamps_initial() {
        let card = CardBuilder::new("Test")
            .with_state(AttributeId::Health, 0.0, 100.0, 120.0)
            .build()
            .unwrap();
        assert_eq!(card.current(AttributeId::Health), Some(100.0));
    }

    #[test]
    fn test_invalid_bounds() {
        let err = CardBuilder::new("Test")
            .with_state(AttributeId::Energy, 10.0, 0.0, 5.0)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::InvalidBounds {
                attribute: AttributeId::Energy,
                min: 10.0,
                max: 0.0
            }
        );
    }

    #[test]
    fn test_duplicate_attribute() {
        let err = CardBuilder::new("Test")
            .with_state(AttributeId::Health, 0.0, 100.0, 50.0)
            .with_state(AttributeId::Health, 0.0, 10.0, 5.0)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::DuplicateAttribute {
                attribute: AttributeId::Health
            }
        );
    }

    #[test]
    fn test_effect_on_missing_move() {
        let err = CardBuilder::new("Test")
            .with_move(1)
            .with_effect(1, Effect::heal(AttributeId::Health, 5.0))
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::IndexOutOfRange { index: 1, len: 1 });
    }

    #[test]
    fn test_requirement_before_any_move() {
        let err = CardBuilder::new("Test")
            .with_requirement(0, Requirement::at_least(AttributeId::Energy, 1.0))
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::IndexOutOfRange { index: 0, len: 0 });
    }

    #[test]
    fn test_first_error_wins() {
        let err = CardBuilder::new("Test")
            .with_effect(3, Effect::heal(AttributeId::Health, 5.0))
            .with_state(AttributeId::Health, 5.0, 0.0, 1.0)
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::IndexOutOfRange { index: 3, len: 0 });
    }

    #[test]
    fn test_effects_attach_to_addressed_move() {
        let card = CardBuilder::new("Test")
            .with_move(2)
            .with_unlimited_move()
            .with_effect(1, Effect::damage(AttributeId::Health, 30.0))
            .with_effect(0, Effect::heal(AttributeId::Health, 20.0))
            .with_effect(1, Effect::damage(AttributeId::Energy, 20.0))
            .build()
            .unwrap();

        assert_eq!(card.moves()[0].effects().len(), 1);
        assert_eq!(card.moves()[1].effects().len(), 2);
        assert_eq!(card.moves()[1].effects()[1].attribute, AttributeId::Energy);
        assert!(card.moves()[1].is_unlimited());
    }

    #[test]
    fn test_with_prepared_move() {
        let mv = Move::new(4).with_effect(Effect::set(AttributeId::Bleeding, 0.0));
        let card = CardBuilder::new("Test")
            .with_prepared_move(mv.clone())
            .build()
            .unwrap();
        assert_eq!(card.moves(), &[mv]);
    }
}
