//! Math helpers shared by the noise implementations.

/// Floor an `f64` to an `i32`, rounding toward negative infinity.
///
/// Unlike `x as i32` (which truncates toward zero), this matches the
/// mathematical floor for negative inputs: `floor(-0.5) == -1`.
#[inline]
#[must_use]
pub fn floor(x: f64) -> i32 {
    let i = x as i32;
    if x < f64::from(i) { i.saturating_sub(1) } else { i }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_rounds_toward_negative_infinity() {
        assert_eq!(floor(1.9), 1);
        assert_eq!(floor(1.0), 1);
        assert_eq!(floor(0.0), 0);
        assert_eq!(floor(-0.5), -1);
        assert_eq!(floor(-2.0), -2);
        assert_eq!(floor(-2.0001), -3);
    }
}
