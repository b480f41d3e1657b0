//! Arithmetic series

/// Sum of the arithmetic series `a_1, a_1 + d, ..., a_n`
///
/// `a_n` is expected to be reachable from `a_1` in steps of `d`; an empty
/// series (`a_n < a_1`) sums to 0. The sum of any series of `u64` terms fits
/// in a `u128`.
pub fn arithmetic_sum(a_1: u64, a_n: u64, d: u64) -> u128 {
    if a_n < a_1 || d == 0 {
        return 0;
    }
    let n = u128::from((a_n - a_1) / d + 1);
    let ends = u128::from(a_1) + u128::from(a_n);
    // one of the two factors is even; halve it before multiplying
    if n % 2 == 0 { n / 2 * ends } else { n * (ends / 2) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_sum() {
        assert_eq!(arithmetic_sum(1, 100, 1), 5050);
        assert_eq!(arithmetic_sum(0, 999, 3), 166_833);
        assert_eq!(arithmetic_sum(5, 4, 1), 0);
        assert_eq!(arithmetic_sum(3, 3, 3), 3);
    }

    #[test]
    fn test_arithmetic_sum_of_full_range() {
        let max = u128::from(u64::MAX);
        assert_eq!(arithmetic_sum(0, u64::MAX, 1), max * (max + 1) / 2);
        assert_eq!(arithmetic_sum(1, u64::MAX, 2), (max + 1) / 2 * ((max + 1) / 2));
    }
}
