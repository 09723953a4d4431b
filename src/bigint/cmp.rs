//! Comparison and bit-query operations on [`BigInt`].

use super::BigInt;
use std::cmp::Ordering;

impl BigInt {
    /// Magnitude compare: length first, then segments top-down.
    pub fn cmp_abs(a: &BigInt, b: &BigInt) -> Ordering {
        if a.data.len() != b.data.len() {
            return a.data.len().cmp(&b.data.len());
        }
        for i in (0..a.data.len()).rev() {
            match a.data[i].cmp(&b.data[i]) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        Ordering::Equal
    }

    /// Signed compare. Negative values are always less than non-negative
    /// ones; within equal signs, delegates to [`Self::cmp_abs`], negated for
    /// two negative operands.
    pub fn cmp(a: &BigInt, b: &BigInt) -> Ordering {
        match (a.sign, b.sign) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => Self::cmp_abs(a, b),
            (true, true) => Self::cmp_abs(a, b).reverse(),
        }
    }

    /// Bit length: 0 for zero, otherwise `(live-1)*W + floor(log2(top)) + 1`.
    pub fn bit_len(&self) -> u32 {
        match self.data.last() {
            None => 0,
            Some(&top) => {
                let high = (self.data.len() as u32 - 1) * super::SEGMENT_BITS;
                high + (super::SEGMENT_BITS - top.leading_zeros())
            }
        }
    }

    /// Trailing-zero bit count. 0 for the zero value.
    pub fn bit0(&self) -> u32 {
        for (i, &seg) in self.data.iter().enumerate() {
            if seg != 0 {
                return i as u32 * super::SEGMENT_BITS + seg.trailing_zeros();
            }
        }
        0
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        BigInt::cmp(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmp_respects_sign() {
        let neg = BigInt::from_i64(-5);
        let pos = BigInt::from_i64(3);
        assert!(neg < pos);
        assert!(BigInt::from_i64(-10) < BigInt::from_i64(-5));
    }

    #[test]
    fn cmp_abs_ignores_sign() {
        let a = BigInt::from_i64(-7);
        let b = BigInt::from_i64(7);
        assert_eq!(BigInt::cmp_abs(&a, &b), Ordering::Equal);
    }

    #[test]
    fn bit_len_matches_textbook_definition() {
        assert_eq!(BigInt::zero().bit_len(), 0);
        assert_eq!(BigInt::one().bit_len(), 1);
        assert_eq!(BigInt::from_i64(2).bit_len(), 2);
        assert_eq!(BigInt::from_i64(255).bit_len(), 8);
        assert_eq!(BigInt::from_i64(256).bit_len(), 9);
    }

    #[test]
    fn bit0_counts_trailing_zeros() {
        assert_eq!(BigInt::zero().bit0(), 0);
        assert_eq!(BigInt::from_i64(1).bit0(), 0);
        assert_eq!(BigInt::from_i64(8).bit0(), 3);
        let shifted = BigInt::shl(&BigInt::one(), 130);
        assert_eq!(shifted.bit0(), 130);
    }
}
