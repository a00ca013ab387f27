//! Bounded numeric state.
//!
//! A `BoundedState` is a float confined to a closed range `[min, max]`.
//! The bounds are fixed at creation; only the current value moves, and every
//! write goes through [`BoundedState::set`], which clamps.
//!
//! ```
//! use ccg_moves::core::BoundedState;
//!
//! let mut health = BoundedState::new(0.0, 100.0, 20.0).unwrap();
//! health.set(140.0);
//! assert_eq!(health.current(), 100.0);
//! ```

/// Constrain `value` into `[min, max]`.
///
/// Returns `min` if `value < min`, `max` if `value > max`, otherwise `value`.
/// Unlike `f32::clamp` this never panics; a NaN `value` is returned as-is.
#[must_use]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// A float value held within fixed inclusive bounds.
///
/// Invariant: `min <= current <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundedState {
    min: f32,
    max: f32,
    current: f32,
}

impl BoundedState {
    /// Create a bounded state, clamping `initial` into range.
    ///
    /// Returns `None` if `min > max` or either bound is NaN. A NaN `initial`
    /// starts at `min`.
    #[must_use]
    pub fn new(min: f32, max: f32, initial: f32) -> Option<Self> {
        if min.is_nan() || max.is_nan() || min > max {
            return None;
        }

        let current = if initial.is_nan() {
            min
        } else {
            clamp(initial, min, max)
        };

        Some(Self { min, max, current })
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> f32 {
        self.max
    }

    /// Current value.
    #[must_use]
    pub const fn current(&self) -> f32 {
        self.current
    }

    /// Check whether `value` lies inside this state's bounds.
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Store `value`, clamped into range, and return the stored value.
    ///
    /// A NaN `value` is discarded and the current value kept.
    pub fn set(&mut self, value: f32) -> f32 {
        if value.is_nan() {
            tracing::warn!(current = self.current, "discarding NaN write to bounded state");
            return self.current;
        }

        self.current = clamp(value, self.min, self.max);
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(7.5, 0.0, 10.0), 7.5);
        assert_eq!(clamp(3, 3, 3), 3);
    }

    #[test]
    fn test_new_clamps_initial() {
        let state = BoundedState::new(0.0, 100.0, 150.0).unwrap();
        assert_eq!(state.current(), 100.0);

        let state = BoundedState::new(0.0, 100.0, -1.0).unwrap();
        assert_eq!(state.current(), 0.0);
    }

    #[test]
    fn test_new_rejects_bad_bounds() {
        assert!(BoundedState::new(10.0, 0.0, 5.0).is_none());
        assert!(BoundedState::new(f32::NAN, 1.0, 0.5).is_none());
        assert!(BoundedState::new(0.0, f32::NAN, 0.5).is_none());
    }

    #[test]
    fn test_degenerate_range() {
        let mut state = BoundedState::new(5.0, 5.0, 0.0).unwrap();
        assert_eq!(state.current(), 5.0);
        state.set(100.0);
        assert_eq!(state.current(), 5.0);
    }

    #[test]
    fn test_set_clamps() {
        let mut state = BoundedState::new(0.0, 100.0, 50.0).unwrap();
        assert_eq!(state.set(-20.0), 0.0);
        assert_eq!(state.set(250.0), 100.0);
        assert_eq!(state.set(42.0), 42.0);
    }

    #[test]
    fn test_set_nan_is_discarded() {
        let mut state = BoundedState::new(0.0, 100.0, 50.0).unwrap();
        assert_eq!(state.set(f32::NAN), 50.0);
        assert_eq!(state.current(), 50.0);
    }

    #[test]
    fn test_infinite_bounds() {
        let mut state = BoundedState::new(0.0, f32::MAX, 10.0).unwrap();
        state.set(f32::INFINITY);
        assert_eq!(state.current(), f32::MAX);
        assert!(state.contains(f32::MAX));
        assert!(!state.contains(-0.5));
    }
}
