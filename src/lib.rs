//! # ccg-moves
//!
//! A move-resolution engine for turn-based card entities.
//!
//! A card carries bounded numeric attributes (health, energy, ...) and a list
//! of moves. Each move bundles requirements, ordered effects, and a use
//! counter. Resolving a move checks its requirements against a target card,
//! applies its effects in order, and spends one use.
//!
//! ## Design Principles
//!
//! 1. **Atomic Resolution**: Every check runs before the first mutation.
//!    A rejected move changes nothing.
//!
//! 2. **Clamped State**: Attribute values never leave their bounds; every
//!    write is clamped.
//!
//! 3. **Effects as Data**: Damage and healing are signed additive effects,
//!    not separate effect types.
//!
//! ## Modules
//!
//! - `core`: Attribute identifiers, bounded state, clamping
//! - `effects`: Effects, requirements, and the move resolver
//! - `cards`: Cards, moves, the card builder, and card definitions
//! - `error`: Resolution and assembly errors
//!
//! ## Example
//!
//! ```
//! use ccg_moves::{AttributeId, CardBuilder, Effect, MoveResolver, Requirement};
//!
//! let mut card = CardBuilder::new("Medic")
//!     .with_state(AttributeId::Health, 0.0, 100.0, 20.0)
//!     .with_state(AttributeId::Energy, 0.0, 100.0, 40.0)
//!     .with_move(2)
//!     .with_requirement(0, Requirement::at_least(AttributeId::Energy, 11.0))
//!     .with_effect(0, Effect::heal(AttributeId::Health, 20.0))
//!     .with_effect(0, Effect::damage(AttributeId::Energy, 10.0))
//!     .build()
//!     .unwrap();
//!
//! MoveResolver::resolve_on_self(&mut card, 0).unwrap();
//!
//! assert_eq!(card.current(AttributeId::Health), Some(40.0));
//! assert_eq!(card.current(AttributeId::Energy), Some(30.0));
//! ```

pub mod cards;
pub mod core;
pub mod effects;
pub mod error;

// Re-export commonly used types
pub use crate::core::{clamp, AttributeId, BoundedState};

pub use crate::cards::{
    Card, CardBuilder, CardDefinition, Move, MoveDefinition, StateDefinition, UNLIMITED_USES,
};

pub use crate::effects::{Effect, EffectOperator, MoveResolver, Requirement, Resolution};

pub use crate::error::{BuildError, ResolveError};
