//! Effect system for card moves.
//!
//! - `Effect`: One operator-based mutation of one attribute
//! - `Requirement`: Range gate on one target attribute
//! - `MoveResolver`: Validates and executes a move against a target
//!
//! ## Design Philosophy
//!
//! Effects are data, not behavior. Damage, healing, buffs and resets are all
//! expressed as an `EffectOperator` plus a signed value, so the resolver
//! needs a single `match` instead of per-effect dispatch.

mod effect;
mod requirement;
mod resolver;

pub use effect::{Effect, EffectOperator};
pub use requirement::Requirement;
pub use resolver::{MoveResolver, Resolution};
