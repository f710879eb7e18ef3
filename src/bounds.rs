//! Bounded ring arithmetic.

/// An integer constrained to `[min, max)` with wrap-around arithmetic.
///
/// Used for the eye's fixpoint: an angular reference into a ring template.
/// Deltas of any magnitude and sign wrap correctly into the range.
#[derive(Debug, Clone, Copy)]
pub struct BoundedInt {
    min: i32,
    max: i32,
    value: i32,
}

impl BoundedInt {
    /// Create a new bounded integer starting at `min`. `max` is exclusive
    /// and must be greater than `min`.
    pub const fn new(min: i32, max: i32) -> Self {
        debug_assert!(min < max);
        Self { min, max, value: min }
    }

    pub const fn value(&self) -> i32 {
        self.value
    }

    const fn range(&self) -> i32 {
        self.max - self.min
    }

    /// The value `delta` away from the current one, wrapped into `[min, max)`.
    /// Does not mutate the stored value.
    pub fn relative_to(&self, delta: i32) -> i32 {
        self.min + (self.value - self.min + delta).rem_euclid(self.range())
    }

    /// Move the stored value by `delta`, wrapping. Returns the new value.
    pub fn add(&mut self, delta: i32) -> i32 {
        self.value = self.relative_to(delta);
        self.value
    }

    /// Set the stored value to `absolute`, wrapped into `[min, max)`.
    pub fn set(&mut self, absolute: i32) {
        self.value = self.min + (absolute - self.min).rem_euclid(self.range());
    }
}
