//! Moves: use-limited bundles of requirements and effects.

use smallvec::SmallVec;

use crate::effects::{Effect, Requirement};

/// Use cap treated as "unlimited". Still decremented on each use.
pub const UNLIMITED_USES: u32 = u32::MAX;

/// An ordered, use-limited bundle of requirements and effects.
///
/// Effects apply in the order they were added. Requirements form a single
/// conjunctive gate.
///
/// SmallVec keeps the typical handful of entries inline.
#[derive(Clone, Debug, PartialEq)]
pub struct Move {
    effects: SmallVec<[Effect; 4]>,
    requirements: SmallVec<[Requirement; 4]>,
    remaining_uses: u32,
}

impl Move {
    /// Create an empty move with `uses` remaining.
    #[must_use]
    pub fn new(uses: u32) -> Self {
        Self {
            effects: SmallVec::new(),
            requirements: SmallVec::new(),
            remaining_uses: uses,
        }
    }

    /// Create an empty move with [`UNLIMITED_USES`].
    #[must_use]
    pub fn unlimited() -> Self {
        Self::new(UNLIMITED_USES)
    }

    /// Add an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.push_effect(effect);
        self
    }

    /// Add a requirement (builder pattern).
    #[must_use]
    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.push_requirement(requirement);
        self
    }

    pub(crate) fn push_effect(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    pub(crate) fn push_requirement(&mut self, requirement: Requirement) {
        self.requirements.push(requirement);
    }

    /// Effects in application order.
    #[must_use]
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Requirements in declaration order.
    #[must_use]
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// Uses left before the move is exhausted.
    #[must_use]
    pub const fn remaining_uses(&self) -> u32 {
        self.remaining_uses
    }

    /// Check whether the move can no longer be used.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining_uses < 1
    }

    /// Check whether the move still carries the unlimited cap.
    #[must_use]
    pub const fn is_unlimited(&self) -> bool {
        self.remaining_uses == UNLIMITED_USES
    }

    /// Spend one use. Callers check `is_exhausted` first.
    pub(crate) fn consume_use(&mut self) {
        self.remaining_uses = self.remaining_uses.saturating_sub(1);
    }
}
