//! Naive recursive Fibonacci, kept deliberately slow: it exists to burn CPU
//! in a predictable way, not to compute large terms.

/// Compute the n-th Fibonacci number by naive recursion.
///
/// Returns `n` itself for `n < 2`, so negative input returns immediately.
/// Values of `n` large enough to overflow `i32` are out of scope; the first
/// overflowing term (n = 47) is already far beyond practical runtime here.
pub fn calculate(n: i32) -> i32 {
    if n < 2 {
        n
    } else {
        calculate(n - 1) + calculate(n - 2)
    }
}

/// Run `calculate(n)` once per cycle and sum the results.
///
/// The sum wraps per two's complement, matching the i32 accumulator width.
pub fn accumulate(n: i32, cycles: u32) -> i32 {
    (0..cycles).fold(0i32, |sum, _| sum.wrapping_add(calculate(n)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn base_cases() {
        assert_eq!(calculate(0), 0);
        assert_eq!(calculate(1), 1);
        assert_eq!(calculate(2), 1);
        assert_eq!(calculate(10), 55);
    }

    #[test]
    fn zero_cycles_sum_to_zero() {
        assert_eq!(accumulate(10, 0), 0);
        assert_eq!(accumulate(0, 0), 0);
    }

    #[test]
    fn cycles_amplify_the_sum() {
        assert_eq!(accumulate(10, 3), 3 * 55);
    }

    proptest! {
        #[test]
        fn recurrence_holds(n in 2i32..=20) {
            prop_assert_eq!(calculate(n), calculate(n - 1) + calculate(n - 2));
        }

        // Repeated wrapping addition is wrapping multiplication mod 2^32.
        #[test]
        fn accumulate_is_wrapping_multiplication(n in 0i32..=15, cycles in 0u32..=64) {
            prop_assert_eq!(accumulate(n, cycles), calculate(n).wrapping_mul(cycles as i32));
        }
    }
}
