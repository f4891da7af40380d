//! Per-lane access to packed values

use super::{LaneMask, Packet};
use crate::pbrt::Float;

/// Access to individual lanes of a packed value so that batches can be split
/// into scalar queries and the results packed back.
pub trait Gather {
    /// Type of a single lane.
    type Lane;

    /// Returns lane `lane`.
    ///
    /// * `lane` - Lane index.
    fn extract(&self, lane: usize) -> Self::Lane;

    /// Overwrites lane `lane`.
    ///
    /// * `lane`  - Lane index.
    /// * `value` - New lane value.
    fn insert(&mut self, lane: usize, value: Self::Lane);
}

impl<const N: usize> Gather for Packet<N> {
    type Lane = Float;

    #[inline(always)]
    fn extract(&self, lane: usize) -> Float {
        self.0[lane]
    }

    #[inline(always)]
    fn insert(&mut self, lane: usize, value: Float) {
        self.0[lane] = value;
    }
}

impl<const N: usize> Gather for LaneMask<N> {
    type Lane = bool;

    #[inline(always)]
    fn extract(&self, lane: usize) -> bool {
        self.0[lane]
    }

    #[inline(always)]
    fn insert(&mut self, lane: usize, value: bool) {
        self.0[lane] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_insert() {
        let mut p = Packet([1.0, 2.0, 3.0]);
        p.insert(1, 5.0);
        assert_eq!(p.extract(1), 5.0);
        assert_eq!(p, Packet([1.0, 5.0, 3.0]));

        let mut m = LaneMask([false; 3]);
        m.insert(2, true);
        assert_eq!(m, LaneMask([false, false, true]));
    }
}
