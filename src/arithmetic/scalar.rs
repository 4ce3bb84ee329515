//! Scalar field arithmetic modulo the group order
//! n = 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141

use alloc::string::String;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use rand_core::{OsRng, RngCore};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroize;

use super::util::{adc, mac, sbb};
use crate::{Error, Result};

/// Constant representing the modulus
/// n = FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE BAAEDCE6 AF48A03B BFD25E8C D0364141
const MODULUS: [u64; 4] = [
    0xBFD2_5E8C_D036_4141,
    0xBAAE_DCE6_AF48_A03B,
    0xFFFF_FFFF_FFFF_FFFE,
    0xFFFF_FFFF_FFFF_FFFF,
];

/// R = 2^256 mod n
const R: Scalar = Scalar([
    0x402D_A173_2FC9_BEBF,
    0x4551_2319_50B7_5FC4,
    0x0000_0000_0000_0001,
    0x0000_0000_0000_0000,
]);

/// R^2 = 2^512 mod n
const R2: Scalar = Scalar([
    0x896C_F214_67D7_D140,
    0x7414_96C2_0E7C_F878,
    0xE697_F5E4_5BCD_07C6,
    0x9D67_1CD5_81C6_9BC5,
]);

/// INV = -(n^-1 mod 2^64) mod 2^64
const INV: u64 = 0x4B0D_FF66_5588_B13F;

/// 2^192 mod n in Montgomery form, the radix of the 48-byte wide reduction.
const F_2_192: Scalar = Scalar([
    0x8F56_4D66_7EC7_EB3C,
    0x9509_B0B0_74EC_0AEA,
    0x9D67_1CD5_81C6_9BC5,
    0x402D_A173_2FC9_BEC0,
]);

fn bytes_to_words(bytes: &[u8; 32]) -> [u64; 4] {
    let mut words = [0u64; 4];
    for (w, chunk) in words.iter_mut().zip(bytes.chunks_exact(8).rev()) {
        *w = u64::from_be_bytes(chunk.try_into().unwrap());
    }
    words
}

/// An element in the finite field modulo the group order n.
// The internal representation is in little-endian order. Elements are always
// in Montgomery form; i.e., Scalar(a) = aR mod n, with R = 2^256.
#[derive(Clone, Copy, Debug)]
pub struct Scalar(pub(crate) [u64; 4]);

impl Scalar {
    /// Zero scalar (additive identity).
    pub const ZERO: Self = Self([0, 0, 0, 0]);

    /// Multiplicative identity.
    pub const ONE: Self = R;

    /// n - 1, the largest canonical scalar.
    pub const MINUS_ONE: Self = Self([
        0x7FA4_BD19_A06C_8282,
        0x755D_B9CD_5E91_4077,
        0xFFFF_FFFF_FFFF_FFFD,
        0xFFFF_FFFF_FFFF_FFFF,
    ]);

    /// Returns the scalar for the given integer, reduced modulo n.
    pub fn from_u64(value: u64) -> Self {
        Self([value, 0, 0, 0]).mul(&R2)
    }

    /// Attempts to parse the given byte array as a big-endian scalar.
    ///
    /// Returns None if the byte array does not contain an integer in the
    /// range [0, n).
    pub fn from_bytes(bytes: &[u8; 32]) -> CtOption<Self> {
        let words = bytes_to_words(bytes);

        // If w is in the range [0, n) then w - n will overflow, resulting in a
        // borrow value of 2^64 - 1.
        let (_, borrow) = sbb(words[0], MODULUS[0], 0);
        let (_, borrow) = sbb(words[1], MODULUS[1], borrow);
        let (_, borrow) = sbb(words[2], MODULUS[2], borrow);
        let (_, borrow) = sbb(words[3], MODULUS[3], borrow);
        let is_some = (borrow as u8) & 1;

        CtOption::new(Self(words).mul(&R2), Choice::from(is_some))
    }

    /// Parses the given byte array as a big-endian integer and reduces it
    /// modulo n. The input is below 2n, so a single conditional subtraction
    /// suffices. Constant time.
    fn from_bytes_reduced(bytes: &[u8; 32]) -> Self {
        let words = bytes_to_words(bytes);

        let (w0, borrow) = sbb(words[0], MODULUS[0], 0);
        let (w1, borrow) = sbb(words[1], MODULUS[1], borrow);
        let (w2, borrow) = sbb(words[2], MODULUS[2], borrow);
        let (w3, borrow) = sbb(words[3], MODULUS[3], borrow);

        // If the subtraction underflowed, the input was already reduced.
        let needs_reduction = !Choice::from((borrow as u8) & 1);
        let reduced = Self([
            u64::conditional_select(&words[0], &w0, needs_reduction),
            u64::conditional_select(&words[1], &w1, needs_reduction),
            u64::conditional_select(&words[2], &w2, needs_reduction),
            u64::conditional_select(&words[3], &w3, needs_reduction),
        ]);

        reduced.mul(&R2)
    }

    /// Parses a scalar from its canonical byte encoding.
    ///
    /// Accepts exactly 32 big-endian bytes encoding an integer below n;
    /// anything else is rejected with the matching error.
    pub fn decode(input: &[u8]) -> Result<Self> {
        match input.len() {
            0 => Err(Error::EmptyScalarEncoding),
            32 => {
                let mut bytes = [0u8; 32];
                bytes.copy_from_slice(input);
                Option::<Self>::from(Self::from_bytes(&bytes)).ok_or(Error::ScalarTooBig)
            }
            _ => Err(Error::ScalarLength),
        }
    }

    /// Returns the canonical big-endian encoding of this scalar.
    pub fn to_bytes(&self) -> [u8; 32] {
        let w = self.to_canonical_words();
        let mut ret = [0u8; 32];
        ret[0..8].copy_from_slice(&w[3].to_be_bytes());
        ret[8..16].copy_from_slice(&w[2].to_be_bytes());
        ret[16..24].copy_from_slice(&w[1].to_be_bytes());
        ret[24..32].copy_from_slice(&w[0].to_be_bytes());
        ret
    }

    /// Returns the fixed-size hexadecimal encoding of this scalar.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Parses a scalar from its hexadecimal encoding.
    pub fn from_hex(input: &str) -> Result<Self> {
        let bytes = hex::decode(input).map_err(|_| Error::HexEncoding)?;
        Self::decode(&bytes)
    }

    /// Returns a uniformly-random non-zero scalar drawn from the system
    /// CSPRNG, reduced modulo n; zero is rejected by resampling.
    pub fn random() -> Self {
        let mut bytes = [0u8; 32];

        loop {
            OsRng.fill_bytes(&mut bytes);
            let scalar = Self::from_bytes_reduced(&bytes);
            if !bool::from(scalar.is_zero()) {
                return scalar;
            }
        }
    }

    /// Checks if the scalar is zero.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Checks if the scalar is one.
    pub fn is_one(&self) -> Choice {
        self.ct_eq(&Self::ONE)
    }

    /// Returns self + rhs mod n.
    pub fn add(&self, rhs: &Self) -> Self {
        // Bit 256 of n is set, so addition can result in five words.
        let (w0, carry) = adc(self.0[0], rhs.0[0], 0);
        let (w1, carry) = adc(self.0[1], rhs.0[1], carry);
        let (w2, carry) = adc(self.0[2], rhs.0[2], carry);
        let (w3, w4) = adc(self.0[3], rhs.0[3], carry);

        Self::sub_inner(w0, w1, w2, w3, w4)
    }

    /// Returns 2 * self.
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Returns self - rhs mod n.
    pub fn subtract(&self, rhs: &Self) -> Self {
        let (w0, borrow) = sbb(self.0[0], rhs.0[0], 0);
        let (w1, borrow) = sbb(self.0[1], rhs.0[1], borrow);
        let (w2, borrow) = sbb(self.0[2], rhs.0[2], borrow);
        let (w3, borrow) = sbb(self.0[3], rhs.0[3], borrow);

        // If underflow occurred, borrow = 0xfff...fff; use it as a mask to
        // conditionally add the modulus.
        let (w0, carry) = adc(w0, MODULUS[0] & borrow, 0);
        let (w1, carry) = adc(w1, MODULUS[1] & borrow, carry);
        let (w2, carry) = adc(w2, MODULUS[2] & borrow, carry);
        let (w3, _) = adc(w3, MODULUS[3] & borrow, carry);

        Self([w0, w1, w2, w3])
    }

    /// Returns -self mod n.
    pub fn negate(&self) -> Self {
        Self::ZERO.subtract(self)
    }

    /// Subtracts the modulus if the five-word value is no smaller than it.
    #[inline]
    fn sub_inner(l0: u64, l1: u64, l2: u64, l3: u64, l4: u64) -> Self {
        let (w0, borrow) = sbb(l0, MODULUS[0], 0);
        let (w1, borrow) = sbb(l1, MODULUS[1], borrow);
        let (w2, borrow) = sbb(l2, MODULUS[2], borrow);
        let (w3, borrow) = sbb(l3, MODULUS[3], borrow);
        let (_, borrow) = sbb(l4, 0, borrow);

        // If underflow occurred on the final limb, borrow = 0xfff...fff,
        // otherwise borrow = 0x000...000. Use it as a mask to conditionally
        // add the modulus back.
        let (w0, carry) = adc(w0, MODULUS[0] & borrow, 0);
        let (w1, carry) = adc(w1, MODULUS[1] & borrow, carry);
        let (w2, carry) = adc(w2, MODULUS[2] & borrow, carry);
        let (w3, _) = adc(w3, MODULUS[3] & borrow, carry);

        Self([w0, w1, w2, w3])
    }

    /// Schoolbook multiplication producing the eight-word double-width
    /// product.
    #[inline]
    fn mul_wide(&self, rhs: &Self) -> [u64; 8] {
        let a = &self.0;
        let b = &rhs.0;

        let (r0, carry) = mac(0, a[0], b[0], 0);
        let (r1, carry) = mac(0, a[0], b[1], carry);
        let (r2, carry) = mac(0, a[0], b[2], carry);
        let (r3, r4) = mac(0, a[0], b[3], carry);

        let (r1, carry) = mac(r1, a[1], b[0], 0);
        let (r2, carry) = mac(r2, a[1], b[1], carry);
        let (r3, carry) = mac(r3, a[1], b[2], carry);
        let (r4, r5) = mac(r4, a[1], b[3], carry);

        let (r2, carry) = mac(r2, a[2], b[0], 0);
        let (r3, carry) = mac(r3, a[2], b[1], carry);
        let (r4, carry) = mac(r4, a[2], b[2], carry);
        let (r5, r6) = mac(r5, a[2], b[3], carry);

        let (r3, carry) = mac(r3, a[3], b[0], 0);
        let (r4, carry) = mac(r4, a[3], b[1], carry);
        let (r5, carry) = mac(r5, a[3], b[2], carry);
        let (r6, r7) = mac(r6, a[3], b[3], carry);

        [r0, r1, r2, r3, r4, r5, r6, r7]
    }

    /// Montgomery Reduction
    ///
    /// References:
    /// - Handbook of Applied Cryptography, Chapter 14
    ///   Algorithm 14.32
    ///   <http://cacr.uwaterloo.ca/hac/about/chap14.pdf>
    #[inline]
    fn montgomery_reduce(t: [u64; 8]) -> Self {
        let [t0, t1, t2, t3, t4, t5, t6, t7] = t;

        let k = t0.wrapping_mul(INV);
        let (_, carry) = mac(t0, k, MODULUS[0], 0);
        let (r1, carry) = mac(t1, k, MODULUS[1], carry);
        let (r2, carry) = mac(t2, k, MODULUS[2], carry);
        let (r3, carry) = mac(t3, k, MODULUS[3], carry);
        let (r4, r5) = adc(t4, 0, carry);

        let k = r1.wrapping_mul(INV);
        let (_, carry) = mac(r1, k, MODULUS[0], 0);
        let (r2, carry) = mac(r2, k, MODULUS[1], carry);
        let (r3, carry) = mac(r3, k, MODULUS[2], carry);
        let (r4, carry) = mac(r4, k, MODULUS[3], carry);
        let (r5, r6) = adc(t5, r5, carry);

        let k = r2.wrapping_mul(INV);
        let (_, carry) = mac(r2, k, MODULUS[0], 0);
        let (r3, carry) = mac(r3, k, MODULUS[1], carry);
        let (r4, carry) = mac(r4, k, MODULUS[2], carry);
        let (r5, carry) = mac(r5, k, MODULUS[3], carry);
        let (r6, r7) = adc(t6, r6, carry);

        let k = r3.wrapping_mul(INV);
        let (_, carry) = mac(r3, k, MODULUS[0], 0);
        let (r4, carry) = mac(r4, k, MODULUS[1], carry);
        let (r5, carry) = mac(r5, k, MODULUS[2], carry);
        let (r6, carry) = mac(r6, k, MODULUS[3], carry);
        let (r7, r8) = adc(t7, r7, carry);

        Self::sub_inner(r4, r5, r6, r7, r8)
    }

    /// Returns self * rhs mod n.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self::montgomery_reduce(self.mul_wide(rhs))
    }

    /// Returns self * self mod n.
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Raises the scalar to the power `2^k`.
    fn pow2k(&self, k: usize) -> Self {
        let mut x = *self;
        for _j in 0..k {
            x = x.square();
        }
        x
    }

    /// Returns the multiplicative inverse of self, if self is non-zero.
    pub fn invert(&self) -> CtOption<Self> {
        // Using an addition chain from
        // https://briansmith.org/ecc-inversion-addition-chains-01#secp256k1_scalar_inversion
        let x_1 = *self;
        let x_10 = self.pow2k(1);
        let x_11 = x_10.mul(&x_1);
        let x_101 = x_10.mul(&x_11);
        let x_111 = x_10.mul(&x_101);
        let x_1001 = x_10.mul(&x_111);
        let x_1011 = x_10.mul(&x_1001);
        let x_1101 = x_10.mul(&x_1011);

        let x6 = x_1101.pow2k(2).mul(&x_1011);
        let x8 = x6.pow2k(2).mul(&x_11);
        let x14 = x8.pow2k(6).mul(&x6);
        let x28 = x14.pow2k(14).mul(&x14);
        let x56 = x28.pow2k(28).mul(&x28);

        #[rustfmt::skip]
        let res = x56
            .pow2k(56).mul(&x56)
            .pow2k(14).mul(&x14)
            .pow2k(3).mul(&x_101)
            .pow2k(4).mul(&x_111)
            .pow2k(4).mul(&x_101)
            .pow2k(5).mul(&x_1011)
            .pow2k(4).mul(&x_1011)
            .pow2k(4).mul(&x_111)
            .pow2k(5).mul(&x_111)
            .pow2k(6).mul(&x_1101)
            .pow2k(4).mul(&x_101)
            .pow2k(3).mul(&x_111)
            .pow2k(5).mul(&x_1001)
            .pow2k(6).mul(&x_101)
            .pow2k(10).mul(&x_111)
            .pow2k(4).mul(&x_111)
            .pow2k(9).mul(&x8)
            .pow2k(5).mul(&x_1001)
            .pow2k(6).mul(&x_1011)
            .pow2k(4).mul(&x_1101)
            .pow2k(5).mul(&x_11)
            .pow2k(6).mul(&x_1101)
            .pow2k(10).mul(&x_1101)
            .pow2k(4).mul(&x_1001)
            .pow2k(6).mul(&x_1)
            .pow2k(8).mul(&x6);

        CtOption::new(res, !self.is_zero())
    }

    /// Returns `self^exp mod n`.
    ///
    /// **This operation is variable time with respect to the exponent.** It
    /// must not be used with secret exponents.
    pub fn pow_vartime(&self, exp: &Self) -> Self {
        let e = exp.to_canonical_words();
        let mut res = Self::ONE;

        for word in e.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((word >> i) & 1) == 1 {
                    res = res.mul(self);
                }
            }
        }

        res
    }

    /// Returns the 256 bits of the canonical representation, least
    /// significant first.
    pub fn bits(&self) -> [u8; 256] {
        let w = self.to_canonical_words();
        let mut out = [0u8; 256];
        for (i, bit) in out.iter_mut().enumerate() {
            *bit = ((w[i / 64] >> (i % 64)) & 1) as u8;
        }
        out
    }

    /// Returns 1 if self <= rhs (as canonical integers), and 0 otherwise.
    /// Constant time.
    pub fn less_or_equal(&self, rhs: &Self) -> Choice {
        let a = self.to_canonical_words();
        let b = rhs.to_canonical_words();

        let (d0, borrow) = sbb(a[0], b[0], 0);
        let (d1, borrow) = sbb(a[1], b[1], borrow);
        let (d2, borrow) = sbb(a[2], b[2], borrow);
        let (d3, borrow) = sbb(a[3], b[3], borrow);

        let is_less = Choice::from((borrow as u8) & 1);
        let is_equal = (d0 | d1 | d2 | d3).ct_eq(&0);

        is_less | is_equal
    }

    /// Reduces a 48-byte uniform string into a scalar, interpreting the bytes
    /// as a big-endian integer d0 * 2^192 + d1.
    pub(crate) fn from_okm(data: &[u8; 48]) -> Self {
        let mut d0_bytes = [0u8; 32];
        d0_bytes[8..].copy_from_slice(&data[..24]);
        let d0 = Self(bytes_to_words(&d0_bytes)).mul(&R2);

        let mut d1_bytes = [0u8; 32];
        d1_bytes[8..].copy_from_slice(&data[24..]);
        let d1 = Self(bytes_to_words(&d1_bytes)).mul(&R2);

        d0.mul(&F_2_192).add(&d1)
    }

    /// Converts out of Montgomery form into canonical little-endian words.
    fn to_canonical_words(self) -> [u64; 4] {
        Self::montgomery_reduce([self.0[0], self.0[1], self.0[2], self.0[3], 0, 0, 0, 0]).0
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
        ])
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl Default for Scalar {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl Add<Scalar> for Scalar {
    type Output = Scalar;

    fn add(self, other: Scalar) -> Scalar {
        Scalar::add(&self, &other)
    }
}

impl Add<&Scalar> for Scalar {
    type Output = Scalar;

    fn add(self, other: &Scalar) -> Scalar {
        Scalar::add(&self, other)
    }
}

impl Add<&Scalar> for &Scalar {
    type Output = Scalar;

    fn add(self, other: &Scalar) -> Scalar {
        Scalar::add(self, other)
    }
}

impl AddAssign<Scalar> for Scalar {
    fn add_assign(&mut self, rhs: Scalar) {
        *self = Scalar::add(self, &rhs);
    }
}

impl Sub<Scalar> for Scalar {
    type Output = Scalar;

    fn sub(self, other: Scalar) -> Scalar {
        Scalar::subtract(&self, &other)
    }
}

impl Sub<&Scalar> for Scalar {
    type Output = Scalar;

    fn sub(self, other: &Scalar) -> Scalar {
        Scalar::subtract(&self, other)
    }
}

impl Sub<&Scalar> for &Scalar {
    type Output = Scalar;

    fn sub(self, other: &Scalar) -> Scalar {
        Scalar::subtract(self, other)
    }
}

impl SubAssign<Scalar> for Scalar {
    fn sub_assign(&mut self, rhs: Scalar) {
        *self = Scalar::subtract(self, &rhs);
    }
}

impl Mul<Scalar> for Scalar {
    type Output = Scalar;

    fn mul(self, other: Scalar) -> Scalar {
        Scalar::mul(&self, &other)
    }
}

impl Mul<&Scalar> for Scalar {
    type Output = Scalar;

    fn mul(self, other: &Scalar) -> Scalar {
        Scalar::mul(&self, other)
    }
}

impl Mul<&Scalar> for &Scalar {
    type Output = Scalar;

    fn mul(self, other: &Scalar) -> Scalar {
        Scalar::mul(self, other)
    }
}

impl MulAssign<Scalar> for Scalar {
    fn mul_assign(&mut self, rhs: Scalar) {
        *self = Scalar::mul(self, &rhs);
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        self.negate()
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::{Scalar, MODULUS};
    use crate::arithmetic::util::u64_array_to_biguint;
    use crate::Error;
    use hex_literal::hex;
    use num_bigint::BigUint;
    use proptest::prelude::*;

    fn order() -> BigUint {
        u64_array_to_biguint(&MODULUS)
    }

    fn to_biguint(s: &Scalar) -> BigUint {
        BigUint::from_bytes_be(&s.to_bytes())
    }

    fn from_biguint(x: &BigUint) -> Scalar {
        let reduced = x % order();
        let bytes = reduced.to_bytes_be();
        let mut padded = [0u8; 32];
        padded[32 - bytes.len()..].copy_from_slice(&bytes);
        Scalar::from_bytes(&padded).unwrap()
    }

    #[test]
    fn zero_is_additive_identity() {
        let zero = Scalar::ZERO;
        let one = Scalar::ONE;
        assert_eq!(zero.add(&zero), zero);
        assert_eq!(one.add(&zero), one);
    }

    #[test]
    fn one_is_multiplicative_identity() {
        let one = Scalar::ONE;
        assert_eq!(one.mul(&one), one);
    }

    #[test]
    fn minus_one() {
        assert_eq!(Scalar::ZERO.subtract(&Scalar::ONE), Scalar::MINUS_ONE);
        assert_eq!(Scalar::MINUS_ONE.add(&Scalar::ONE), Scalar::ZERO);
        assert_eq!(
            to_biguint(&Scalar::MINUS_ONE),
            order() - BigUint::from(1u32)
        );
    }

    #[test]
    fn bytes_roundtrip() {
        let one = Scalar::ONE;
        assert_eq!(Scalar::from_bytes(&one.to_bytes()).unwrap(), one);

        let bytes = hex!("000000000000000000000000000000000000000000000000000000000000002a");
        let s = Scalar::from_bytes(&bytes).unwrap();
        assert_eq!(s, Scalar::from_u64(42));
        assert_eq!(s.to_bytes(), bytes);
    }

    #[test]
    fn decode_rejects_bad_inputs() {
        assert_eq!(Scalar::decode(&[]), Err(Error::EmptyScalarEncoding));
        assert_eq!(Scalar::decode(&[0u8; 31]), Err(Error::ScalarLength));
        assert_eq!(Scalar::decode(&[0u8; 33]), Err(Error::ScalarLength));

        // n itself is out of range
        let n_bytes = hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");
        assert_eq!(Scalar::decode(&n_bytes), Err(Error::ScalarTooBig));
        assert_eq!(Scalar::decode(&[0xff; 32]), Err(Error::ScalarTooBig));

        // n - 1 is accepted
        let n_minus_1 = hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140");
        assert_eq!(Scalar::decode(&n_minus_1).unwrap(), Scalar::MINUS_ONE);
    }

    #[test]
    fn invert() {
        assert!(bool::from(Scalar::ZERO.invert().is_none()));

        let one = Scalar::ONE;
        assert_eq!(one.invert().unwrap(), one);

        let s = Scalar::from_u64(0xdead_beef);
        assert_eq!(s.invert().unwrap().mul(&s), one);

        assert_eq!(
            Scalar::MINUS_ONE.invert().unwrap(),
            Scalar::MINUS_ONE
        );
    }

    #[test]
    fn pow_vartime_matches_modpow() {
        let base = Scalar::from_u64(0x1234_5678_9abc_def0);
        let exp = Scalar::from_u64(0xfedc_ba98);
        let expected = to_biguint(&base).modpow(&to_biguint(&exp), &order());
        assert_eq!(to_biguint(&base.pow_vartime(&exp)), expected);

        // Edge exponents
        assert_eq!(base.pow_vartime(&Scalar::ZERO), Scalar::ONE);
        assert_eq!(base.pow_vartime(&Scalar::ONE), base);
        let expected = to_biguint(&base).modpow(&(order() - BigUint::from(1u32)), &order());
        assert_eq!(to_biguint(&base.pow_vartime(&Scalar::MINUS_ONE)), expected);
    }

    #[test]
    fn bits_of_small_scalars() {
        let five = Scalar::from_u64(5);
        let bits = five.bits();
        assert_eq!(bits[0], 1);
        assert_eq!(bits[1], 0);
        assert_eq!(bits[2], 1);
        assert!(bits[3..].iter().all(|&b| b == 0));

        // The group order occupies all 256 bits, so n - 1 has bit 255 set.
        assert_eq!(Scalar::MINUS_ONE.bits()[255], 1);
    }

    #[test]
    fn less_or_equal() {
        let two = Scalar::from_u64(2);
        let three = Scalar::from_u64(3);
        assert!(bool::from(two.less_or_equal(&three)));
        assert!(bool::from(two.less_or_equal(&two)));
        assert!(!bool::from(three.less_or_equal(&two)));
        assert!(bool::from(Scalar::ZERO.less_or_equal(&Scalar::MINUS_ONE)));
        assert!(!bool::from(Scalar::MINUS_ONE.less_or_equal(&Scalar::ZERO)));
    }

    #[test]
    fn from_okm_matches_wide_reduction() {
        let data = [0x5au8; 48];
        let expected = BigUint::from_bytes_be(&data) % order();
        assert_eq!(to_biguint(&Scalar::from_okm(&data)), expected);
    }

    #[test]
    fn random_is_nonzero() {
        for _ in 0..16 {
            assert!(!bool::from(Scalar::random().is_zero()));
        }
    }

    proptest! {
        #[test]
        fn add_matches_reference(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
            let x = BigUint::from_bytes_be(&a) % order();
            let y = BigUint::from_bytes_be(&b) % order();
            let lhs = from_biguint(&x).add(&from_biguint(&y));
            prop_assert_eq!(to_biguint(&lhs), (x + y) % order());
        }

        #[test]
        fn sub_matches_reference(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
            let x = BigUint::from_bytes_be(&a) % order();
            let y = BigUint::from_bytes_be(&b) % order();
            let lhs = from_biguint(&x).subtract(&from_biguint(&y));
            prop_assert_eq!(to_biguint(&lhs), (order() + x - y) % order());
        }

        #[test]
        fn mul_matches_reference(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
            let x = BigUint::from_bytes_be(&a) % order();
            let y = BigUint::from_bytes_be(&b) % order();
            let lhs = from_biguint(&x).mul(&from_biguint(&y));
            prop_assert_eq!(to_biguint(&lhs), (x * y) % order());
        }

        #[test]
        fn invert_then_mul_is_one(a in any::<[u8; 32]>()) {
            let x = BigUint::from_bytes_be(&a) % order();
            let s = from_biguint(&x);
            if bool::from(s.is_zero()) {
                prop_assert!(bool::from(s.invert().is_none()));
            } else {
                prop_assert_eq!(s.invert().unwrap().mul(&s), Scalar::ONE);
            }
        }

        #[test]
        fn from_okm_reference(data in any::<[u8; 48]>()) {
            let expected = BigUint::from_bytes_be(&data) % order();
            prop_assert_eq!(to_biguint(&Scalar::from_okm(&data)), expected);
        }
    }
}
