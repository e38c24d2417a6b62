//! Extended nonnegative integers: `{0, 1, 2, ...} ∪ {∞}`, saturating on
//! overflow by promoting to an arbitrary-precision representation rather
//! than wrapping.

use crate::error::SizeError;
use std::cmp::Ordering;

const LIMB_BASE: u64 = 1_000_000_000;

/// Arbitrary-precision nonnegative integer, base 10^9 limbs, little-endian.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Nat(Vec<u32>);

impl Nat {
    fn zero() -> Self {
        Nat(vec![0])
    }

    fn one() -> Self {
        Nat(vec![1])
    }

    fn from_u64(mut n: u64) -> Self {
        if n == 0 {
            return Nat::zero();
        }
        let mut limbs = Vec::new();
        while n > 0 {
            limbs.push((n % LIMB_BASE) as u32);
            n /= LIMB_BASE;
        }
        Nat(limbs)
    }

    fn is_zero(&self) -> bool {
        self.0.len() == 1 && self.0[0] == 0
    }

    fn trim(mut limbs: Vec<u32>) -> Self {
        while limbs.len() > 1 && *limbs.last().unwrap() == 0 {
            limbs.pop();
        }
        Nat(limbs)
    }

    fn add(&self, other: &Nat) -> Nat {
        let mut out = Vec::with_capacity(self.0.len().max(other.0.len()) + 1);
        let mut carry = 0u64;
        for i in 0..self.0.len().max(other.0.len()) {
            let a = *self.0.get(i).unwrap_or(&0) as u64;
            let b = *other.0.get(i).unwrap_or(&0) as u64;
            let sum = a + b + carry;
            out.push((sum % LIMB_BASE) as u32);
            carry = sum / LIMB_BASE;
        }
        if carry > 0 {
            out.push(carry as u32);
        }
        Nat::trim(out)
    }

    fn mul(&self, other: &Nat) -> Nat {
        if self.is_zero() || other.is_zero() {
            return Nat::zero();
        }
        let mut out = vec![0u64; self.0.len() + other.0.len()];
        for (i, &a) in self.0.iter().enumerate() {
            let mut carry = 0u64;
            for (j, &b) in other.0.iter().enumerate() {
                let idx = i + j;
                let prod = out[idx] + a as u64 * b as u64 + carry;
                out[idx] = prod % LIMB_BASE;
                carry = prod / LIMB_BASE;
            }
            let mut k = i + other.0.len();
            while carry > 0 {
                let sum = out[k] + carry;
                out[k] = sum % LIMB_BASE;
                carry = sum / LIMB_BASE;
                k += 1;
            }
        }
        Nat::trim(out.into_iter().map(|limb| limb as u32).collect())
    }

    fn to_decimal_string(&self) -> String {
        let mut s = self.0.last().unwrap().to_string();
        for limb in self.0.iter().rev().skip(1) {
            s.push_str(&format!("{limb:09}"));
        }
        s
    }
}

impl PartialOrd for Nat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Nat {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.iter().rev().cmp(other.0.iter().rev()))
    }
}

/// `{0, 1, 2, ...} ∪ {∞}` with saturating `+`/`×` and `0 × ∞ = 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Size {
    Finite(Nat),
    Infinite,
}

impl Size {
    pub fn zero() -> Self {
        Size::Finite(Nat::zero())
    }

    pub fn one() -> Self {
        Size::Finite(Nat::one())
    }

    pub fn infinite() -> Self {
        Size::Infinite
    }

    pub fn from_u64(n: u64) -> Self {
        Size::Finite(Nat::from_u64(n))
    }

    /// Fails on negative input, per the "constructing a `Size` from a
    /// negative integer" precondition violation.
    pub fn try_from_i64(n: i64) -> Result<Self, SizeError> {
        if n < 0 {
            Err(SizeError::Negative)
        } else {
            Ok(Size::from_u64(n as u64))
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Size::Infinite)
    }

    pub fn add(&self, other: &Size) -> Size {
        match (self, other) {
            (Size::Infinite, _) | (_, Size::Infinite) => Size::Infinite,
            (Size::Finite(a), Size::Finite(b)) => Size::Finite(a.add(b)),
        }
    }

    /// `0 × ∞ = 0`: the multiplicative annihilation of zero wins even
    /// against an infinite operand.
    pub fn mul(&self, other: &Size) -> Size {
        let self_zero = matches!(self, Size::Finite(n) if n.is_zero());
        let other_zero = matches!(other, Size::Finite(n) if n.is_zero());
        if self_zero || other_zero {
            return Size::zero();
        }
        match (self, other) {
            (Size::Infinite, _) | (_, Size::Infinite) => Size::Infinite,
            (Size::Finite(a), Size::Finite(b)) => Size::Finite(a.mul(b)),
        }
    }

    pub fn pow(&self, mut exponent: u32) -> Size {
        let mut result = Size::one();
        let mut base = self.clone();
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            exponent >>= 1;
        }
        result
    }

    /// Finite values below 10^6 render as plain decimal; larger values as a
    /// three-significant-digit mantissa times a power of ten, followed by
    /// the exact decimal in parentheses.
    pub fn approx_string(&self) -> String {
        match self {
            Size::Infinite => "∞".to_string(),
            Size::Finite(n) => {
                if *n < Nat::from_u64(1_000_000) {
                    return n.to_decimal_string();
                }
                let digits = n.to_decimal_string();
                let exponent = digits.len() - 1;
                let mantissa_digits: String = digits.chars().take(3).collect();
                let mantissa = format!(
                    "{}.{}",
                    &mantissa_digits[..1],
                    &mantissa_digits[1..mantissa_digits.len().min(3)]
                );
                format!("{mantissa}e{exponent} ({digits})")
            }
        }
    }
}

impl PartialOrd for Size {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Size {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Size::Infinite, Size::Infinite) => Ordering::Equal,
            (Size::Infinite, _) => Ordering::Greater,
            (_, Size::Infinite) => Ordering::Less,
            (Size::Finite(a), Size::Finite(b)) => a.cmp(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn additive_identity() {
        let a = Size::from_u64(42);
        assert_eq!(a.add(&Size::zero()), a);
    }

    #[test]
    fn multiplicative_identity() {
        let a = Size::from_u64(42);
        assert_eq!(a.mul(&Size::one()), a);
    }

    #[test]
    fn zero_annihilates_infinity() {
        assert_eq!(Size::zero().mul(&Size::Infinite), Size::zero());
        assert_eq!(Size::Infinite.mul(&Size::zero()), Size::zero());
    }

    #[test]
    fn infinity_absorbs_addition() {
        assert_eq!(Size::Infinite.add(&Size::from_u64(7)), Size::Infinite);
    }

    #[test]
    fn pow_matches_repeated_multiplication() {
        let base = Size::from_u64(3);
        let mut expected = Size::one();
        for _ in 0..5 {
            expected = expected.mul(&base);
        }
        assert_eq!(base.pow(5), expected);
    }

    #[test]
    fn total_order_with_infinity_as_max() {
        assert!(Size::from_u64(1_000_000) < Size::Infinite);
        assert!(Size::from_u64(3) < Size::from_u64(4));
    }

    #[test]
    fn negative_precondition_is_rejected() {
        assert!(matches!(Size::try_from_i64(-1), Err(SizeError::Negative)));
        assert!(Size::try_from_i64(5).is_ok());
    }

    #[test]
    fn big_multiplication_beyond_u64() {
        let a = Size::from_u64(u64::MAX);
        let big = a.mul(&a);
        assert!(big > Size::from_u64(u64::MAX));
    }

    #[test]
    fn approx_string_small_values_are_exact() {
        assert_eq!(Size::from_u64(42).approx_string(), "42");
    }

    #[test]
    fn approx_string_large_values_carry_mantissa_and_exact() {
        let s = Size::from_u64(123_456_789).approx_string();
        assert!(s.starts_with("1.23e8"));
        assert!(s.ends_with("(123456789)"));
    }
}
