//! Read-only embedded Bernoulli constant table (C3).
//!
//! Indexed by `i = k/2 - 1` for an even Bernoulli index `k`. Backed by
//! [`table_data`], which stores [`CBigInt`] views as offset/length slices
//! into flat segment arrays rather than owned `BigInt`s — lookup never
//! allocates beyond the fresh `Vec` needed to hand the caller an owned
//! value.

use super::table_data::{TableSlice, BERN_TABLE_LEN, DEN_INDEX, DEN_SEGMENTS, NUM_INDEX, NUM_SEGMENTS};
use crate::bigint::BigInt;

/// A borrowed view of a big-integer constant: reduced, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct CBigInt<'a> {
    segments: &'a [u64],
    neg: bool,
}

impl<'a> CBigInt<'a> {
    fn from_slice(all: &'a [u64], slice: &TableSlice) -> Self {
        let start = slice.offset as usize;
        let end = start + slice.len as usize;
        CBigInt {
            segments: &all[start..end],
            neg: slice.neg,
        }
    }

    /// Copy this view into an owned, mutable [`BigInt`].
    pub fn to_owned_bigint(self) -> BigInt {
        BigInt::from_segments(self.segments, self.neg)
    }
}

/// Highest even Bernoulli index directly satisfied by the embedded table.
pub const MAX_TABLE_INDEX: usize = BERN_TABLE_LEN * 2;

/// Look up `B_k` for even `k`, per spec §4.3:
/// - `k = 0` → `(1, 1)`
/// - `k = 1` → `(-1, 2)`
/// - odd `k > 1` → `(0, 1)` (all odd Bernoulli numbers beyond B1 are zero)
/// - `k` out of range of the embedded table → `(0, 1)`
/// - otherwise, the table entry for `i = k/2 - 1`
pub fn lookup(k: i64) -> (BigInt, BigInt) {
    if k == 0 {
        return (BigInt::one(), BigInt::one());
    }
    if k == 1 {
        return (BigInt::from_i64(-1), BigInt::from_i64(2));
    }
    if k < 0 || k % 2 != 0 {
        return (BigInt::zero(), BigInt::one());
    }
    let i = (k / 2 - 1) as usize;
    if i >= BERN_TABLE_LEN {
        return (BigInt::zero(), BigInt::one());
    }
    let num = CBigInt::from_slice(NUM_SEGMENTS, &NUM_INDEX[i]).to_owned_bigint();
    let den = CBigInt::from_slice(DEN_SEGMENTS, &DEN_INDEX[i]).to_owned_bigint();
    (num, den)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn k_zero_and_one_are_special_cased() {
        assert_eq!(lookup(0), (BigInt::one(), BigInt::one()));
        assert_eq!(lookup(1), (BigInt::from_i64(-1), BigInt::from_i64(2)));
    }

    #[test]
    fn odd_k_above_one_is_zero() {
        assert_eq!(lookup(3), (BigInt::zero(), BigInt::one()));
        assert_eq!(lookup(99), (BigInt::zero(), BigInt::one()));
    }

    #[test]
    fn out_of_range_k_is_zero() {
        assert_eq!(lookup(-4), (BigInt::zero(), BigInt::one()));
        assert_eq!(lookup(MAX_TABLE_INDEX as i64 + 2), (BigInt::zero(), BigInt::one()));
    }

    #[test]
    fn table_matches_seed_scenarios() {
        assert_eq!(lookup(2), (BigInt::from_i64(1), BigInt::from_i64(6)));
        let (n4, d4) = lookup(4);
        assert_eq!((n4, d4), (BigInt::from_i64(-1), BigInt::from_i64(30)));
        let (n6, d6) = lookup(6);
        assert_eq!((n6, d6), (BigInt::from_i64(1), BigInt::from_i64(42)));
    }
}
