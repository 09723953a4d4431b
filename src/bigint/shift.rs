//! Bit-shift operations on [`BigInt`].

use super::{BigInt, Segment, SEGMENT_BITS};

impl BigInt {
    /// Shift one bit left (multiply by 2). Grows by one segment only if the
    /// top bit was set.
    pub fn shl1(&self) -> BigInt {
        let mut out = Vec::with_capacity(self.data.len() + 1);
        let mut carry: Segment = 0;
        for &seg in &self.data {
            out.push((seg << 1) | carry);
            carry = seg >> (SEGMENT_BITS - 1);
        }
        if carry != 0 {
            out.push(carry);
        }
        BigInt::from_raw(out, self.sign)
    }

    /// Shift one bit right (divide by 2, truncating toward zero in magnitude).
    pub fn shr1(&self) -> BigInt {
        let mut out = vec![0 as Segment; self.data.len()];
        let mut carry: Segment = 0;
        for i in (0..self.data.len()).rev() {
            out[i] = (self.data[i] >> 1) | (carry << (SEGMENT_BITS - 1));
            carry = self.data[i] & 1;
        }
        BigInt::from_raw(out, self.sign)
    }

    /// Shift `k` bits left: `q = k / W` whole segments, then `r = k % W`
    /// bits across segments.
    pub fn shl(a: &BigInt, k: u32) -> BigInt {
        if a.is_zero() || k == 0 {
            return a.clone();
        }
        let q = (k / SEGMENT_BITS) as usize;
        let r = k % SEGMENT_BITS;
        let mut out = vec![0 as Segment; q];
        if r == 0 {
            out.extend_from_slice(&a.data);
        } else {
            let mut carry: Segment = 0;
            for &seg in &a.data {
                out.push((seg << r) | carry);
                carry = seg >> (SEGMENT_BITS - r);
            }
            if carry != 0 {
                out.push(carry);
            }
        }
        BigInt::from_raw(out, a.sign)
    }

    /// Shift `k` bits right. `k >= bit_len` collapses to zero.
    pub fn shr(a: &BigInt, k: u32) -> BigInt {
        if a.is_zero() {
            return BigInt::zero();
        }
        if k >= a.bit_len() {
            return BigInt::zero();
        }
        let q = (k / SEGMENT_BITS) as usize;
        let r = k % SEGMENT_BITS;
        let src = &a.data[q..];
        let mut out = vec![0 as Segment; src.len()];
        if r == 0 {
            out.copy_from_slice(src);
        } else {
            for i in 0..src.len() {
                let lo = src[i] >> r;
                let hi = if i + 1 < src.len() {
                    src[i + 1] << (SEGMENT_BITS - r)
                } else {
                    0
                };
                out[i] = lo | hi;
            }
        }
        BigInt::from_raw(out, a.sign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shl1_grows_on_top_bit_carry() {
        let top = BigInt::shl(&BigInt::one(), 63);
        let shifted = top.shl1();
        assert_eq!(shifted, BigInt::shl(&BigInt::one(), 64));
    }

    #[test]
    fn shl_shr_roundtrip_never_loses_bits() {
        let a = BigInt::from_i64(0x1234_5678_9abc);
        for k in 0..200u32 {
            let shifted = BigInt::shl(&a, k);
            let back = BigInt::shr(&shifted, k);
            assert_eq!(back, a, "k={k}");
        }
    }

    #[test]
    fn shr_past_bit_len_collapses_to_zero() {
        let a = BigInt::from_i64(12345);
        assert_eq!(BigInt::shr(&a, a.bit_len()), BigInt::zero());
        assert_eq!(BigInt::shr(&a, a.bit_len() + 50), BigInt::zero());
    }

    #[test]
    fn shl_preserves_sign() {
        let a = BigInt::from_i64(-3);
        let shifted = BigInt::shl(&a, 70);
        assert!(shifted.is_negative());
    }
}
