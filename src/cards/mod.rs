//! Card system: cards, moves, assembly, and definitions.
//!
//! ## Key Types
//!
//! - `Card`: Bounded attribute states plus an ordered list of moves
//! - `Move`: Use-limited bundle of requirements and effects
//! - `CardBuilder`: Fluent, index-addressed card assembly
//! - `CardDefinition`: Serializable card data, built through `CardBuilder`

pub mod builder;
pub mod card;
pub mod definition;
pub mod moves;

pub use builder::CardBuilder;
pub use card::{Card, States};
pub use definition::{CardDefinition, MoveDefinition, StateDefinition};
pub use moves::{Move, UNLIMITED_USES};
