//! Card definitions - declarative card data.
//!
//! A `CardDefinition` describes a card as plain data: its states and its
//! moves. Games can keep these in their content files and turn them into
//! live cards with [`CardDefinition::build`], which goes through
//! [`CardBuilder`] so the same validation applies.
//!
//! ## Example
//!
//! ```
//! use ccg_moves::cards::{CardDefinition, MoveDefinition, StateDefinition};
//! use ccg_moves::core::AttributeId;
//! use ccg_moves::effects::{Effect, Requirement};
//!
//! let def = CardDefinition::new("Brawler")
//!     .with_state(StateDefinition::new(AttributeId::Health, 0.0, 100.0, 80.0))
//!     .with_move(
//!         MoveDefinition::unlimited()
//!             .with_requirement(Requirement::at_least(AttributeId::Health, 1.0))
//!             .with_effect(Effect::damage(AttributeId::Health, 5.0)),
//!     );
//!
//! let card = def.build().unwrap();
//! assert_eq!(card.current(AttributeId::Health), Some(80.0));
//! ```

use serde::{Deserialize, Serialize};

use super::builder::CardBuilder;
use super::card::Card;
use super::moves::UNLIMITED_USES;
use crate::core::AttributeId;
use crate::effects::{Effect, Requirement};
use crate::error::BuildError;

/// Initial bounds and value for one attribute.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateDefinition {
    pub attribute: AttributeId,
    pub min: f32,
    pub max: f32,
    pub initial: f32,
}

impl StateDefinition {
    #[must_use]
    pub const fn new(attribute: AttributeId, min: f32, max: f32, initial: f32) -> Self {
        Self {
            attribute,
            min,
            max,
            initial,
        }
    }
}

/// A move as data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveDefinition {
    /// Use cap. `None` means unlimited.
    #[serde(default)]
    pub uses: Option<u32>,

    #[serde(default)]
    pub requirements: Vec<Requirement>,

    #[serde(default)]
    pub effects: Vec<Effect>,
}

impl MoveDefinition {
    /// Create a move definition with a use cap.
    #[must_use]
    pub fn new(uses: u32) -> Self {
        Self {
            uses: Some(uses),
            ..Self::default()
        }
    }

    /// Create a move definition with unlimited uses.
    #[must_use]
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Add a requirement (builder pattern).
    #[must_use]
    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirements.push(requirement);
        self
    }

    /// Add an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Declarative description of a card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Card name (for display/debugging).
    pub name: String,

    #[serde(default)]
    pub states: Vec<StateDefinition>,

    /// Moves, in index order.
    #[serde(default)]
    pub moves: Vec<MoveDefinition>,
}

impl CardDefinition {
    /// Create an empty card definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            states: Vec::new(),
            moves: Vec::new(),
        }
    }

    /// Add a state (builder pattern).
    #[must_use]
    pub fn with_state(mut self, state: StateDefinition) -> Self {
        self.states.push(state);
        self
    }

    /// Add a move (builder pattern).
    #[must_use]
    pub fn with_move(mut self, mv: MoveDefinition) -> Self {
        self.moves.push(mv);
        self
    }

    /// Assemble a live card from this definition.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBounds` or `DuplicateAttribute` for bad state entries.
    pub fn build(&self) -> Result<Card, BuildError> {
        let mut builder = CardBuilder::new(self.name.clone());

        for state in &self.states {
            builder = builder.with_state(state.attribute, state.min, state.max, state.initial);
        }

        for mv in &self.moves {
            let index = builder.move_count();
            builder = builder.with_move(mv.uses.unwrap_or(UNLIMITED_USES));

            for requirement in &mv.requirements {
                builder = builder.with_requirement(index, *requirement);
            }
            for effect in &mv.effects {
                builder = builder.with_effect(index, *effect);
            }
        }

        builder.build()
    }
}
