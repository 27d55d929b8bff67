//! Interval arithmetic for ray parameter ranges.
//!
//! Provides closed intervals [min, max] used for ray t-values and bounds checking.

/// Closed interval [min, max] for range checking.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f32,
    /// Maximum value of the interval
    pub max: f32,
}

impl Interval {
    /// Empty interval: both containment predicates are always false.
    pub const EMPTY: Interval = Interval {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    /// Interval containing all real numbers.
    pub const UNIVERSE: Interval = Interval {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };

    /// Create a new interval with given min and max values
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Calculate the size (width) of the interval
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// Check if the interval contains the given value (inclusive bounds)
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Check if the interval surrounds the given value (exclusive bounds)
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamp the given value to be within this interval's bounds
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_closed() {
        let i = Interval::new(1.0, 2.0);

        assert!(i.contains(1.0));
        assert!(i.contains(2.0));
        assert!(i.contains(1.5));
        assert!(!i.contains(0.999));
        assert!(!i.contains(2.001));
    }

    #[test]
    fn test_surrounds_is_open() {
        let i = Interval::new(1.0, 2.0);

        assert!(!i.surrounds(1.0));
        assert!(!i.surrounds(2.0));
        assert!(i.surrounds(1.5));
    }

    #[test]
    fn test_empty_rejects_everything() {
        for x in [f32::NEG_INFINITY, -1.0, 0.0, 1.0, f32::INFINITY] {
            assert!(!Interval::EMPTY.contains(x));
            assert!(!Interval::EMPTY.surrounds(x));
        }
    }

    #[test]
    fn test_universe_contains_everything() {
        for x in [-1e30, 0.0, 1e30] {
            assert!(Interval::UNIVERSE.contains(x));
            assert!(Interval::UNIVERSE.surrounds(x));
        }
    }

    #[test]
    fn test_clamp_saturates() {
        let i = Interval::new(-1.0, 1.0);

        assert_eq!(i.clamp(-2.0), -1.0);
        assert_eq!(i.clamp(0.25), 0.25);
        assert_eq!(i.clamp(7.0), 1.0);
    }
}
