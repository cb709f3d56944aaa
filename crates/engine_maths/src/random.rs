//! Uniform random draws over inclusive ranges.

use rand::Rng;

/// Types that [`random`] can sample.
pub trait Random: PartialOrd + Copy {
    fn random(a: Self, b: Self) -> Self;
}

impl Random for i32 {
    fn random(a: Self, b: Self) -> Self {
        rand::thread_rng().gen_range(a..=b)
    }
}

impl Random for f32 {
    fn random(a: Self, b: Self) -> Self {
        rand::thread_rng().gen_range(a..=b)
    }
}

impl Random for f64 {
    fn random(a: Self, b: Self) -> Self {
        rand::thread_rng().gen_range(a..=b)
    }
}

/// Uniform random value in `[a, b]`, both ends inclusive.
///
/// Panics if `a > b`.
pub fn random<T: Random>(a: T, b: T) -> T {
    T::random(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_stay_in_range() {
        // Range wider than a 15-bit generator could cover directly.
        for _ in 0..1_000 {
            let value = random(-50_000, 100_000);
            assert!((-50_000..=100_000).contains(&value));
        }
    }

    #[test]
    fn floats_stay_in_range() {
        for _ in 0..1_000 {
            let value = random(-1.5f32, 2.5f32);
            assert!((-1.5..=2.5).contains(&value));
        }
        for _ in 0..1_000 {
            let value = random(0.0f64, 1.0e9f64);
            assert!((0.0..=1.0e9).contains(&value));
        }
    }

    #[test]
    fn degenerate_range_returns_the_bound() {
        assert_eq!(random(7, 7), 7);
        assert_eq!(random(2.5f64, 2.5f64), 2.5);
    }
}
