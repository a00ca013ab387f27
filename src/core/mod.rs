//! Core engine types: attribute identifiers and bounded numeric state.

pub mod attribute;
pub mod bounded;

pub use attribute::AttributeId;
pub use bounded::{clamp, BoundedState};
