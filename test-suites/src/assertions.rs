/// Round a fixed point number with `decimals` decimals to `places` decimal places, half away from
/// zero, and return it scaled by 10^places
pub fn round_to(value: i128, decimals: u32, places: u32) -> i128 {
    if decimals <= places {
        return value * 10i128.pow(places - decimals);
    }
    let scalar = 10i128.pow(decimals - places);
    let half = scalar / 2;
    if value >= 0 {
        (value + half) / scalar
    } else {
        (value - half) / scalar
    }
}

/// Assert `a` (with `a_decimals` decimals) and `b` (with `b_decimals` decimals) are equal once
/// both are rounded to `places` decimal places
pub fn assert_rounded_eq(a: i128, a_decimals: u32, b: i128, b_decimals: u32, places: u32) {
    let rounded_a = round_to(a, a_decimals, places);
    let rounded_b = round_to(b, b_decimals, places);
    assert_eq!(
        rounded_a, rounded_b,
        "{} ({} decimals) != {} ({} decimals) at {} places",
        a, a_decimals, b, b_decimals, places
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0_0920000, 7, 10), 0_0920000000);
        assert_eq!(round_to(92_000_000_000_000_004, 18, 10), 0_0920000000);
        assert_eq!(round_to(91_999_999_950_000_000, 18, 10), 0_0920000000);
        assert_eq!(round_to(91_999_999_940_000_000, 18, 10), 0_0919999999);
        assert_eq!(round_to(-1_500_000, 6, 0), -2);
    }

    #[test]
    fn test_assert_rounded_eq() {
        assert_rounded_eq(0_0920000, 7, 92_000_000_000_000_000, 18, 10);
        assert_rounded_eq(
            92_000_000_000_000_000,
            18,
            92_000_004_000_000_000,
            18,
            5,
        );
    }

    #[test]
    #[should_panic]
    fn test_assert_rounded_eq_mismatch() {
        assert_rounded_eq(0_0920001, 7, 92_000_000_000_000_000, 18, 10);
    }
}
