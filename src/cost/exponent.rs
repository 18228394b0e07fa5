use super::OpCount;

/// Operations a binary square-and-multiply spends raising an element to `n`.
///
/// The leading one bit only seeds the accumulator. Every later bit costs a
/// squaring, and every later one bit costs a multiplication on top. An
/// exponent of zero yields the neutral element for free.
pub fn exponentiation_cost(n: u64) -> OpCount {
    if n == 0 {
        return OpCount::ZERO;
    }
    let bit_length = u64::from(u64::BITS - n.leading_zeros());
    let ones = u64::from(n.count_ones());
    OpCount::new(bit_length - 1, ones.saturating_sub(1))
}
