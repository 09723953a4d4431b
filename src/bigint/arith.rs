//! Add, subtract, multiply, divide, modulo and GCD for [`BigInt`].

use super::{check_nonzero_divisor, BigInt, Segment};
use crate::error::Result;
use std::cmp::Ordering;

impl BigInt {
    /// `this = a + b`.
    pub fn add(a: &BigInt, b: &BigInt) -> BigInt {
        add_sub(a, b, false)
    }

    /// `this = a - b`.
    pub fn sub(a: &BigInt, b: &BigInt) -> BigInt {
        add_sub(a, b, true)
    }

    /// `this = a * b`, grade-school segment multiplication.
    pub fn mul(a: &BigInt, b: &BigInt) -> BigInt {
        if a.is_zero() || b.is_zero() {
            return BigInt::zero();
        }
        let mut temp = vec![0 as Segment; a.data.len() + b.data.len()];

        for (i, &ai) in a.data.iter().enumerate() {
            if ai == 0 {
                continue;
            }
            let mut carry: u128 = 0;
            for (j, &bj) in b.data.iter().enumerate() {
                let idx = i + j;
                let product = (ai as u128) * (bj as u128) + temp[idx] as u128 + carry;
                temp[idx] = product as u64;
                carry = product >> 64;
            }
            let mut k = i + b.data.len();
            while carry != 0 {
                let sum = temp[k] as u128 + carry;
                temp[k] = sum as u64;
                carry = sum >> 64;
                k += 1;
            }
        }

        let sign = a.sign ^ b.sign;
        BigInt::from_raw(temp, sign)
    }

    /// `(q, r)` such that `a = q*b + r`, `|r| < |b|`, `sign(r) == sign(a)`
    /// (or `r` is zero). Errors if `b` is zero.
    pub fn div_rem(a: &BigInt, b: &BigInt) -> Result<(BigInt, BigInt)> {
        check_nonzero_divisor(b)?;

        let sign_a = a.sign;
        let sign_q = a.sign ^ b.sign;

        match BigInt::cmp_abs(a, b) {
            Ordering::Less => return Ok((BigInt::zero(), a.clone())),
            Ordering::Equal => {
                let mut q = BigInt::one();
                q.sign = sign_q;
                return Ok((q, BigInt::zero()));
            }
            Ordering::Greater => {}
        }

        // Fast path: divisor fits in one segment.
        if b.data.len() == 1 {
            let divisor = b.data[0];
            let mut quotient = vec![0 as Segment; a.data.len()];
            let mut rem: u128 = 0;
            for i in (0..a.data.len()).rev() {
                let acc = (rem << 64) | a.data[i] as u128;
                quotient[i] = (acc / divisor as u128) as u64;
                rem = acc % divisor as u128;
            }
            let q = BigInt::from_raw(quotient, sign_q);
            let mut r = BigInt::from_raw(vec![rem as u64], sign_a);
            r.reduce();
            return Ok((q, r));
        }

        let (q, r) = long_divide(&a.abs(), &b.abs());
        let mut q = q;
        let mut r = r;
        q.sign = sign_q;
        r.sign = sign_a;
        q.reduce();
        r.reduce();
        Ok((q, r))
    }

    /// `self mod m`, always nonnegative, for `m != 0`.
    pub fn modulo(a: &BigInt, m: &BigInt) -> Result<BigInt> {
        check_nonzero_divisor(m)?;
        let a_abs = a.abs();
        let m_abs = m.abs();

        // Fast path: power-of-two modulus fits in one segment (only the
        // low bits of `a` matter).
        if m_abs.data.len() == 1 && m_abs.data[0].is_power_of_two() {
            let mask = m_abs.data[0] - 1;
            let low = a_abs.data.first().copied().unwrap_or(0) & mask;
            return Ok(BigInt::from_raw(vec![low], false));
        }

        // Fast path: single-segment modulus, schoolbook reduction.
        if m_abs.data.len() == 1 {
            let divisor = m_abs.data[0];
            let mut rem: u128 = 0;
            for i in (0..a_abs.data.len()).rev() {
                let acc = (rem << 64) | a_abs.data[i] as u128;
                rem = acc % divisor as u128;
            }
            return Ok(BigInt::from_raw(vec![rem as u64], false));
        }

        if BigInt::cmp_abs(&a_abs, &m_abs) == Ordering::Less {
            return Ok(a_abs);
        }
        let (_, r) = long_divide(&a_abs, &m_abs);
        let mut r = r;
        r.reduce();
        Ok(r)
    }

    /// Euclidean GCD. Matches the original implementation's convention:
    /// if either operand is zero the result is 1 (see DESIGN.md — this
    /// differs from the naive "gcd(0,x) = |x|" one might expect, but it's
    /// what the source this crate is grounded on actually does, and the
    /// Bernoulli reduction loop never feeds a zero operand to GCD).
    pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
        if a.is_zero() || b.is_zero() {
            return BigInt::one();
        }
        let mut x = a.abs();
        let mut y = b.abs();
        while !x.is_zero() {
            let r = BigInt::modulo(&y, &x).expect("x checked nonzero above");
            y = x;
            x = r;
        }
        y
    }

    /// Least common multiple, implemented via GCD: `lcm(a,b) = |a*b| / gcd(a,b)`.
    pub fn lcm(a: &BigInt, b: &BigInt) -> BigInt {
        if a.is_zero() || b.is_zero() {
            return BigInt::zero();
        }
        let g = BigInt::gcd(a, b);
        let product = BigInt::mul(a, b).abs();
        BigInt::div_rem(&product, &g)
            .expect("gcd of nonzero operands is nonzero")
            .0
    }
}

/// `this = |a| +- |b|` with carry/borrow propagation via widening 128-bit
/// arithmetic, and two's-complement renegotiation of the sign when a
/// subtraction borrows past the top.
fn add_sub(a: &BigInt, b: &BigInt, subtract: bool) -> BigInt {
    if b.is_zero() {
        return a.clone();
    }
    if a.is_zero() {
        let mut r = b.clone();
        if subtract {
            r.negate();
        }
        return r;
    }

    let sign_a = a.sign;
    let sign_b = b.sign ^ subtract;

    if sign_a == sign_b {
        let (sum, carry) = magnitude_add(&a.data, &b.data);
        let mut data = sum;
        if carry {
            data.push(1);
        }
        BigInt::from_raw(data, sign_a)
    } else {
        // |a| - |b'|, where b' has the effective sign sign_b.
        match BigInt::cmp_abs(a, b) {
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => {
                let diff = magnitude_sub(&a.data, &b.data);
                BigInt::from_raw(diff, sign_a)
            }
            Ordering::Less => {
                let diff = magnitude_sub(&b.data, &a.data);
                BigInt::from_raw(diff, sign_b)
            }
        }
    }
}

/// `a + b` at the magnitude level (both nonnegative segment vectors).
/// Returns the sum and whether a final carry grew the result by one segment.
fn magnitude_add(a: &[Segment], b: &[Segment]) -> (Vec<Segment>, bool) {
    let n = a.len().max(b.len());
    let mut out = Vec::with_capacity(n);
    let mut carry: u128 = 0;
    for i in 0..n {
        let av = a.get(i).copied().unwrap_or(0) as u128;
        let bv = b.get(i).copied().unwrap_or(0) as u128;
        let sum = av + bv + carry;
        out.push(sum as u64);
        carry = sum >> 64;
    }
    (out, carry != 0)
}

/// `a - b` at the magnitude level, where `|a| >= |b|` (caller's precondition).
fn magnitude_sub(a: &[Segment], b: &[Segment]) -> Vec<Segment> {
    let mut out = Vec::with_capacity(a.len());
    let mut borrow: i128 = 0;
    for i in 0..a.len() {
        let av = a[i] as i128;
        let bv = b.get(i).copied().unwrap_or(0) as i128;
        let mut diff = av - bv - borrow;
        if diff < 0 {
            diff += 1i128 << 64;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(diff as u64);
    }
    out
}

/// Binary long division of two nonnegative magnitudes, `a >= b > 0`.
/// Returns `(quotient, remainder)`, both nonnegative and unreduced (callers
/// reduce and apply signs).
fn long_divide(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    let len_a = a.bit_len();
    let len_b = b.bit_len();
    let s = len_a - len_b;

    let mut shifted_b = BigInt::shl(b, s);
    let mut remainder = a.clone();
    let mut quotient = BigInt::zero();

    let mut i = s;
    loop {
        if BigInt::cmp_abs(&remainder, &shifted_b) != Ordering::Less {
            remainder = BigInt::sub(&remainder, &shifted_b);
            quotient = BigInt::add(&quotient, &BigInt::shl(&BigInt::one(), i));
        }
        shifted_b = shifted_b.shr1();
        if i == 0 {
            break;
        }
        i -= 1;
    }

    (quotient, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(v: i64) -> BigInt {
        BigInt::from_i64(v)
    }

    #[test]
    fn add_sub_identity() {
        let a = b(123456789);
        let c = b(-987654321);
        assert_eq!(BigInt::sub(&BigInt::add(&a, &c), &c), a);
        assert_eq!(BigInt::sub(&a, &a), BigInt::zero());
    }

    #[test]
    fn add_is_associative_and_commutative() {
        let a = b(11);
        let c = b(-37);
        let d = b(4096);
        let lhs = BigInt::add(&BigInt::add(&a, &c), &d);
        let rhs = BigInt::add(&a, &BigInt::add(&c, &d));
        assert_eq!(lhs, rhs);
        assert_eq!(BigInt::add(&a, &c), BigInt::add(&c, &a));
    }

    #[test]
    fn mul_identities() {
        let a = b(-12345);
        assert_eq!(BigInt::mul(&a, &BigInt::zero()), BigInt::zero());
        assert_eq!(BigInt::mul(&a, &BigInt::one()), a);
        assert_eq!(
            BigInt::mul(&a, &b(6)),
            BigInt::mul(&b(6), &a)
        );
    }

    #[test]
    fn mul_wide_values() {
        let a: BigInt = "123456789012345678901234567890".parse().unwrap();
        let c: BigInt = "998877665544332211".parse().unwrap();
        let product = BigInt::mul(&a, &c);
        let (q, r) = BigInt::div_rem(&product, &c).unwrap();
        assert_eq!(q, a);
        assert!(r.is_zero());
    }

    #[test]
    fn div_rem_known_seed() {
        let a: BigInt = "1000000000000000000000".parse().unwrap();
        let c = b(7);
        let (q, r) = BigInt::div_rem(&a, &c).unwrap();
        assert_eq!(q.to_string(), "142857142857142857142");
        assert_eq!(r.to_string(), "6");
    }

    #[test]
    fn div_rem_identity_holds() {
        let cases = [(100, 7), (-100, 7), (100, -7), (-100, -7), (7, 100), (0, 5)];
        for (x, y) in cases {
            let (q, r) = BigInt::div_rem(&b(x), &b(y)).unwrap();
            let recombined = BigInt::add(&BigInt::mul(&q, &b(y)), &r);
            assert_eq!(recombined, b(x), "x={x} y={y}");
            assert!(BigInt::cmp_abs(&r, &b(y)) == Ordering::Less);
            assert!(r.is_zero() || r.is_negative() == (x < 0));
        }
    }

    #[test]
    fn modulo_is_in_range() {
        let a = b(-1234567);
        let m = b(1000);
        let r = BigInt::modulo(&a, &m).unwrap();
        assert!(!r.is_negative());
        assert!(BigInt::cmp_abs(&r, &m) == Ordering::Less);
    }

    #[test]
    fn modulo_power_of_two_fast_path() {
        let a = b(-13);
        let m = b(8);
        let r = BigInt::modulo(&a, &m).unwrap();
        assert_eq!(r, b(3)); // -13 mod 8 == 3
    }

    #[test]
    fn gcd_known_seed() {
        let a: BigInt = "462".parse().unwrap();
        let c: BigInt = "1071".parse().unwrap();
        assert_eq!(BigInt::gcd(&a, &c).to_string(), "21");
    }

    #[test]
    fn gcd_zero_convention_returns_one() {
        assert_eq!(BigInt::gcd(&BigInt::zero(), &b(5)), BigInt::one());
        assert_eq!(BigInt::gcd(&BigInt::zero(), &BigInt::zero()), BigInt::one());
    }

    #[test]
    fn gcd_lcm_identity() {
        let a = b(462);
        let c = b(1071);
        let lhs = BigInt::mul(&BigInt::gcd(&a, &c), &BigInt::lcm(&a, &c));
        let rhs = BigInt::mul(&a, &c).abs();
        assert_eq!(lhs, rhs);
    }
}
