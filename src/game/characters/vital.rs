// Damage percent counter

use crate::core::math::clamp;

/// Clamped accumulator in `[0, max]`
///
/// `increment` adds and `decrement` subtracts; neither interprets the amount
/// as damage or healing, so callers pick the sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VitalCounter {
    current: i32,
    max: i32,
}

impl VitalCounter {
    pub fn new(max: i32) -> Self {
        Self {
            current: 0,
            max: max.max(0),
        }
    }

    pub fn increment(&mut self, amount: i32) {
        self.current = clamp(self.current.saturating_add(amount), 0, self.max);
    }

    pub fn decrement(&mut self, amount: i32) {
        self.current = clamp(self.current.saturating_sub(amount), 0, self.max);
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }

    pub fn value(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let vital = VitalCounter::new(999);
        assert_eq!(vital.value(), 0);
        assert_eq!(vital.max(), 999);
    }

    #[test]
    fn test_increment_clamps_to_max() {
        let mut vital = VitalCounter::new(100);
        vital.increment(60);
        vital.increment(60);
        assert_eq!(vital.value(), 100);
    }

    #[test]
    fn test_decrement_clamps_to_zero() {
        let mut vital = VitalCounter::new(100);
        vital.increment(30);
        vital.decrement(50);
        assert_eq!(vital.value(), 0);
    }

    #[test]
    fn test_negative_amounts_flip_direction() {
        let mut vital = VitalCounter::new(100);
        vital.decrement(-40);
        assert_eq!(vital.value(), 40);
        vital.increment(-15);
        assert_eq!(vital.value(), 25);
    }

    #[test]
    fn test_extreme_amounts_stay_in_range() {
        let mut vital = VitalCounter::new(999);
        let amounts = [i32::MAX, i32::MIN, 500, -700, 1, i32::MAX, -1];
        for amount in amounts {
            vital.increment(amount);
            assert!((0..=999).contains(&vital.value()));
            vital.decrement(amount);
            assert!((0..=999).contains(&vital.value()));
        }
    }

    #[test]
    fn test_reset() {
        let mut vital = VitalCounter::new(200);
        vital.increment(50);
        assert_eq!(vital.value(), 50);
        vital.reset();
        assert_eq!(vital.value(), 0);
    }
}
