//! Move resolution - executing a move's effects on a target card.
//!
//! Resolution is all-or-nothing. Every gate (index, remaining uses,
//! requirements, attribute provisioning) is checked before the first effect
//! touches the target, so a rejected move leaves both cards unchanged.
//!
//! ## Order of Operations
//!
//! 1. Look up the move on the source card
//! 2. Reject if it has no uses left
//! 3. Reject if any requirement fails against the target
//! 4. Apply effects in declared order, each against the live value
//! 5. Spend one use

use crate::cards::{Card, Move, States};
use crate::core::BoundedState;
use crate::error::ResolveError;

use super::Effect;

/// Result of a successful resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Index of the resolved move on the source card.
    pub move_index: usize,
    /// Number of effects applied to the target.
    pub effects_applied: usize,
    /// Uses left on the move after this resolution.
    pub remaining_uses: u32,
}

/// Resolves moves between cards.
pub struct MoveResolver;

impl MoveResolver {
    /// Resolve `source`'s move at `move_index` against `target`.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfRange` if `move_index` is not a move on `source`
    /// - `NoUsesRemaining` if the move is exhausted
    /// - `RequirementNotMet` if any requirement fails on `target`
    /// - `UnknownAttribute` if `target` lacks an attribute the move uses
    ///
    /// Nothing is mutated when an error is returned.
    pub fn resolve(
        source: &mut Card,
        move_index: usize,
        target: &mut Card,
    ) -> Result<Resolution, ResolveError> {
        let len = source.moves.len();
        let mv = source
            .moves
            .get_mut(move_index)
            .ok_or(ResolveError::IndexOutOfRange { index: move_index, len })?;

        let result = Self::resolve_parts(mv, move_index, &mut target.states);
        Self::log_outcome(&source.name, &target.name, move_index, &result);
        result
    }

    /// Resolve a card's move against the card itself.
    ///
    /// # Errors
    ///
    /// Same as [`MoveResolver::resolve`].
    pub fn resolve_on_self(card: &mut Card, move_index: usize) -> Result<Resolution, ResolveError> {
        let len = card.moves.len();
        let mv = card
            .moves
            .get_mut(move_index)
            .ok_or(ResolveError::IndexOutOfRange { index: move_index, len })?;

        let result = Self::resolve_parts(mv, move_index, &mut card.states);
        Self::log_outcome(&card.name, &card.name, move_index, &result);
        result
    }

    /// Run every gate of a resolution without applying anything.
    ///
    /// Returns `Ok(())` exactly when [`MoveResolver::resolve`] would succeed.
    /// Pass the same card twice to check a self-targeted move.
    ///
    /// # Errors
    ///
    /// Same as [`MoveResolver::resolve`].
    pub fn check(source: &Card, move_index: usize, target: &Card) -> Result<(), ResolveError> {
        let mv = source.moves.get(move_index).ok_or(ResolveError::IndexOutOfRange {
            index: move_index,
            len: source.moves.len(),
        })?;

        Self::check_gates(mv, move_index, &target.states)
    }

    /// Apply a single effect to a bounded state, returning the new value.
    ///
    /// The result is clamped into the state's bounds.
    pub fn apply_effect(effect: &Effect, state: &mut BoundedState) -> f32 {
        let before = state.current();
        let after = state.set(effect.operator.combine(before, effect.value));

        tracing::trace!(
            attribute = %effect.attribute,
            operator = ?effect.operator,
            value = effect.value,
            before,
            after,
            "effect applied"
        );

        after
    }

    fn resolve_parts(
        mv: &mut Move,
        move_index: usize,
        states: &mut States,
    ) -> Result<Resolution, ResolveError> {
        Self::check_gates(mv, move_index, states)?;

        for effect in mv.effects() {
            // Provisioning was verified by check_gates
            if let Some(state) = states.get_mut(&effect.attribute) {
                Self::apply_effect(effect, state);
            }
        }

        mv.consume_use();

        Ok(Resolution {
            move_index,
            effects_applied: mv.effects().len(),
            remaining_uses: mv.remaining_uses(),
        })
    }

    fn check_gates(mv: &Move, move_index: usize, states: &States) -> Result<(), ResolveError> {
        if mv.is_exhausted() {
            return Err(ResolveError::NoUsesRemaining { move_index });
        }

        for requirement in mv.requirements() {
            let state = states
                .get(&requirement.attribute)
                .ok_or(ResolveError::UnknownAttribute {
                    attribute: requirement.attribute,
                })?;

            let current = state.current();
            if !requirement.is_met(current) {
                return Err(ResolveError::RequirementNotMet {
                    attribute: requirement.attribute,
                    current,
                    min: requirement.min,
                    max: requirement.max,
                });
            }
        }

        if let Some(effect) = mv
            .effects()
            .iter()
            .find(|effect| !states.contains_key(&effect.attribute))
        {
            return Err(ResolveError::UnknownAttribute {
                attribute: effect.attribute,
            });
        }

        Ok(())
    }

    fn log_outcome(
        source: &str,
        target: &str,
        move_index: usize,
        result: &Result<Resolution, ResolveError>,
    ) {
        match result {
            Ok(resolution) => tracing::debug!(
                source_card = source,
                target_card = target,
                move_index,
                remaining_uses = resolution.remaining_uses,
                "move resolved"
            ),
            Err(err) => tracing::debug!(
                source_card = source,
                target_card = target,
                move_index,
                error = %err,
                "move rejected"
            ),
        }
    }
}
