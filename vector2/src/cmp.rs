//! Comparisons that hold only when both component pairs satisfy them.

use crate::vector::Vector2;

impl<T: PartialOrd> Vector2<T> {
    #[inline]
    pub fn all_gt(&self, other: &Self) -> bool {
        self.x > other.x && self.y > other.y
    }

    #[inline]
    pub fn all_lt(&self, other: &Self) -> bool {
        self.x < other.x && self.y < other.y
    }

    #[inline]
    pub fn all_gt_scalar(&self, s: T) -> bool {
        self.x > s && self.y > s
    }

    #[inline]
    pub fn all_lt_scalar(&self, s: T) -> bool {
        self.x < s && self.y < s
    }
}

impl<T: PartialEq> Vector2<T> {
    #[inline]
    pub fn equals_both_components(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// `true` when at least one pair of matching components is equal.
    ///
    /// Note this is not the logical OR of two vectors: `(1, 2)` and `(1, 5)`
    /// match because their `x` components do.
    #[inline]
    pub fn equals_either_component(&self, other: &Self) -> bool {
        self.x == other.x || self.y == other.y
    }
}
