//! Field arithmetic modulo p = 2^256 - 2^32 - 977

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroize;

use super::util::{adc, mac, mac_typemax, sbb};

const fn bytes_to_u64(b: &[u8; 8]) -> u64 {
    ((b[0] as u64) << 56)
        | ((b[1] as u64) << 48)
        | ((b[2] as u64) << 40)
        | ((b[3] as u64) << 32)
        | ((b[4] as u64) << 24)
        | ((b[5] as u64) << 16)
        | ((b[6] as u64) << 8)
        | (b[7] as u64)
}

const fn bytes_to_words(b: &[u8; 32]) -> [u64; 4] {
    let w3 = bytes_to_u64(&[b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]);
    let w2 = bytes_to_u64(&[b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15]]);
    let w1 = bytes_to_u64(&[b[16], b[17], b[18], b[19], b[20], b[21], b[22], b[23]]);
    let w0 = bytes_to_u64(&[b[24], b[25], b[26], b[27], b[28], b[29], b[30], b[31]]);
    [w0, w1, w2, w3]
}

/// Constant representing the modulus
/// p = 2^256 - 2^32 - 977
const MODULUS: FieldElement = FieldElement([
    0xFFFF_FFFE_FFFF_FC2F,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
]);

/// R = 2^256 mod p
const R: FieldElement = FieldElement([0x0000_0001_0000_03d1, 0, 0, 0]);

/// R^2 = 2^512 mod p
const R2: FieldElement = FieldElement([0x0000_07a2_000e_90a1, 0x0000_0000_0000_0001, 0, 0]);

/// INV = -(p^-1 mod 2^64) mod 2^64
const INV: u64 = 0xd838_091d_d225_3531;

/// c2 = sqrt(11) mod p, the principal square root of -Z for the SSWU
/// constant Z = -11 (RFC 9380 F.2.1.2).
const C2: FieldElement = FieldElement::from_bytes_unchecked(&[
    0x31, 0xfd, 0xf3, 0x02, 0x72, 0x40, 0x13, 0xe5, 0x7a, 0xd1, 0x3f, 0xb3, 0x8f, 0x84, 0x2a,
    0xfe, 0xec, 0x18, 0x4f, 0x00, 0xa7, 0x47, 0x89, 0xdd, 0x28, 0x67, 0x29, 0xc8, 0x30, 0x3c,
    0x4a, 0x59,
]);

/// 2^192 in Montgomery form, the radix of the 48-byte wide reduction.
const F_2_192: FieldElement = FieldElement::from_bytes_unchecked(&[
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
]);

/// An element in the finite field modulo p = 2^256 - 2^32 - 977.
// The internal representation is in little-endian order. Elements are always in
// Montgomery form; i.e., FieldElement(a) = aR mod p, with R = 2^256.
#[derive(Clone, Copy, Debug)]
pub struct FieldElement(pub(crate) [u64; 4]);

impl FieldElement {
    /// Zero element (additive identity).
    pub const ZERO: Self = Self([0, 0, 0, 0]);

    /// Multiplicative identity.
    pub const ONE: Self = R;

    /// Parses the given byte array as a field element without checking that it
    /// encodes an integer smaller than the modulus.
    pub(crate) const fn from_bytes_unchecked(bytes: &[u8; 32]) -> Self {
        Self::mul(&Self(bytes_to_words(bytes)), &R2)
    }

    /// Attempts to parse the given byte array as an SEC1-encoded field element.
    ///
    /// Returns None if the byte array does not contain a big-endian integer in
    /// the range [0, p).
    pub fn from_bytes(bytes: &[u8; 32]) -> CtOption<Self> {
        let words = bytes_to_words(bytes);

        // If w is in the range [0, p) then w - p will overflow, resulting in a
        // borrow value of 2^64 - 1.
        let (_, borrow) = sbb(words[0], MODULUS.0[0], 0);
        let (_, borrow) = sbb(words[1], MODULUS.0[1], borrow);
        let (_, borrow) = sbb(words[2], MODULUS.0[2], borrow);
        let (_, borrow) = sbb(words[3], MODULUS.0[3], borrow);
        let is_some = (borrow as u8) & 1;

        // Convert w to Montgomery form: w * R^2 * R^-1 mod p = wR mod p
        CtOption::new(Self(words).mul(&R2), Choice::from(is_some))
    }

    /// Returns the SEC1 encoding of this field element.
    pub fn to_bytes(self) -> [u8; 32] {
        let res = Self::montgomery_reduce(self.0[0], self.0[1], self.0[2], self.0[3], 0, 0, 0, 0);
        let mut ret = [0u8; 32];
        ret[0..8].copy_from_slice(&res.0[3].to_be_bytes());
        ret[8..16].copy_from_slice(&res.0[2].to_be_bytes());
        ret[16..24].copy_from_slice(&res.0[1].to_be_bytes());
        ret[24..32].copy_from_slice(&res.0[0].to_be_bytes());
        ret
    }

    /// Determine if this `FieldElement` is zero.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Determine if this `FieldElement` is odd in the SEC1 sense: `self mod 2 == 1`.
    ///
    /// This is the `sgn0` function of RFC 9380: the parity of the canonical
    /// (non-Montgomery) representative.
    pub fn is_odd(&self) -> Choice {
        let bytes = self.to_bytes();
        (bytes[31] & 1).into()
    }

    /// Returns self + rhs mod p.
    pub const fn add(&self, rhs: &Self) -> Self {
        // Bit 256 of p is set, so addition can result in five words.
        let (w0, carry) = adc(self.0[0], rhs.0[0], 0);
        let (w1, carry) = adc(self.0[1], rhs.0[1], carry);
        let (w2, carry) = adc(self.0[2], rhs.0[2], carry);
        let (w3, w4) = adc(self.0[3], rhs.0[3], carry);

        // Attempt to subtract the modulus, to ensure the result is in the field.
        Self::sub_inner(
            w0,
            w1,
            w2,
            w3,
            w4,
            MODULUS.0[0],
            MODULUS.0[1],
            MODULUS.0[2],
            MODULUS.0[3],
            0,
        )
    }

    /// Returns 2 * self.
    pub const fn double(&self) -> Self {
        self.add(self)
    }

    /// Returns self - rhs mod p.
    pub const fn subtract(&self, rhs: &Self) -> Self {
        Self::sub_inner(
            self.0[0], self.0[1], self.0[2], self.0[3], 0, rhs.0[0], rhs.0[1], rhs.0[2], rhs.0[3],
            0,
        )
    }

    /// Returns -self mod p.
    pub const fn negate(&self) -> Self {
        Self::ZERO.subtract(self)
    }

    #[inline]
    #[allow(clippy::too_many_arguments)]
    const fn sub_inner(
        l0: u64,
        l1: u64,
        l2: u64,
        l3: u64,
        l4: u64,
        r0: u64,
        r1: u64,
        r2: u64,
        r3: u64,
        r4: u64,
    ) -> Self {
        let (w0, borrow) = sbb(l0, r0, 0);
        let (w1, borrow) = sbb(l1, r1, borrow);
        let (w2, borrow) = sbb(l2, r2, borrow);
        let (w3, borrow) = sbb(l3, r3, borrow);
        let (_, borrow) = sbb(l4, r4, borrow);

        // If underflow occurred on the final limb, borrow = 0xfff...fff, otherwise
        // borrow = 0x000...000. Thus, we use it as a mask to conditionally add the
        // modulus.
        let (w0, carry) = adc(w0, MODULUS.0[0] & borrow, 0);
        let (w1, carry) = adc(w1, MODULUS.0[1] & borrow, carry);
        let (w2, carry) = adc(w2, MODULUS.0[2] & borrow, carry);
        let (w3, _) = adc(w3, MODULUS.0[3] & borrow, carry);

        Self([w0, w1, w2, w3])
    }

    /// Montgomery Multiplication
    ///
    /// For secp256k1, all of the limbs of p (except the first!) are 2^64 - 1.
    /// Thus, all multiplications by these limbs can be simplified to a shift
    /// and subtraction:
    /// ```text
    ///     a_i * (2^64 - 1) = a_i * 2^64 - a_i = (a_i << 64) - a_i
    /// ```
    ///
    /// References:
    /// - Handbook of Applied Cryptography, Chapter 14
    ///   Algorithm 14.36
    ///   <http://cacr.uwaterloo.ca/hac/about/chap14.pdf>
    #[inline]
    #[allow(clippy::too_many_arguments)]
    const fn montgomery_mulmod(
        x0: u64,
        x1: u64,
        x2: u64,
        x3: u64,
        y0: u64,
        y1: u64,
        y2: u64,
        y3: u64,
    ) -> Self {
        let u = ((x0 as u128) * (y0 as u128)).wrapping_mul(INV as u128) as u64;
        let (a0, carry) = mac(0, u, MODULUS.0[0], 0);
        let (a1, carry) = mac_typemax(0, u, carry);
        let (a2, carry) = mac_typemax(0, u, carry);
        let (a3, carry) = mac_typemax(0, u, carry);
        let (a4, carry2) = adc(0, 0, carry);

        let (_, carry) = mac(a0, x0, y0, 0);
        let (a1, carry) = mac(a1, x0, y1, carry);
        let (a2, carry) = mac(a2, x0, y2, carry);
        let (a3, carry) = mac(a3, x0, y3, carry);
        let (a4, a5) = adc(a4, carry2, carry);

        let u = ((a1 as u128) + (x1 as u128) * (y0 as u128)).wrapping_mul(INV as u128) as u64;
        let (a1, carry) = mac(a1, u, MODULUS.0[0], 0);
        let (a2, carry) = mac_typemax(a2, u, carry);
        let (a3, carry) = mac_typemax(a3, u, carry);
        let (a4, carry) = mac_typemax(a4, u, carry);
        let (a5, carry2) = adc(a5, 0, carry);

        let (_, carry) = mac(a1, x1, y0, 0);
        let (a2, carry) = mac(a2, x1, y1, carry);
        let (a3, carry) = mac(a3, x1, y2, carry);
        let (a4, carry) = mac(a4, x1, y3, carry);
        let (a5, a6) = adc(a5, carry2, carry);

        let u = ((a2 as u128) + (x2 as u128) * (y0 as u128)).wrapping_mul(INV as u128) as u64;
        let (a2, carry) = mac(a2, u, MODULUS.0[0], 0);
        let (a3, carry) = mac_typemax(a3, u, carry);
        let (a4, carry) = mac_typemax(a4, u, carry);
        let (a5, carry) = mac_typemax(a5, u, carry);
        let (a6, carry2) = adc(a6, 0, carry);

        let (_, carry) = mac(a2, x2, y0, 0);
        let (a3, carry) = mac(a3, x2, y1, carry);
        let (a4, carry) = mac(a4, x2, y2, carry);
        let (a5, carry) = mac(a5, x2, y3, carry);
        let (a6, a7) = adc(a6, carry2, carry);

        let u = ((a3 as u128) + (x3 as u128) * (y0 as u128)).wrapping_mul(INV as u128) as u64;
        let (a3, carry) = mac(a3, u, MODULUS.0[0], 0);
        let (a4, carry) = mac_typemax(a4, u, carry);
        let (a5, carry) = mac_typemax(a5, u, carry);
        let (a6, carry) = mac_typemax(a6, u, carry);
        let (a7, carry2) = adc(a7, 0, carry);

        let (_, carry) = mac(a3, x3, y0, 0);
        let (a4, carry) = mac(a4, x3, y1, carry);
        let (a5, carry) = mac(a5, x3, y2, carry);
        let (a6, carry) = mac(a6, x3, y3, carry);
        let (a7, a8) = adc(a7, carry2, carry);

        // Result may be within MODULUS of the correct value
        Self::sub_inner(
            a4,
            a5,
            a6,
            a7,
            a8,
            MODULUS.0[0],
            MODULUS.0[1],
            MODULUS.0[2],
            MODULUS.0[3],
            0,
        )
    }

    /// Montgomery Reduction
    ///
    /// References:
    /// - Handbook of Applied Cryptography, Chapter 14
    ///   Algorithm 14.32
    ///   <http://cacr.uwaterloo.ca/hac/about/chap14.pdf>
    #[inline]
    #[allow(clippy::too_many_arguments)]
    const fn montgomery_reduce(
        t0: u64,
        t1: u64,
        t2: u64,
        t3: u64,
        t4: u64,
        t5: u64,
        t6: u64,
        t7: u64,
    ) -> Self {
        let k = t0.wrapping_mul(INV);
        let (_, carry) = mac(t0, k, MODULUS.0[0], 0);
        let (r1, carry) = mac_typemax(t1, k, carry);
        let (r2, carry) = mac_typemax(t2, k, carry);
        let (r3, carry) = mac_typemax(t3, k, carry);
        let (r4, r5) = adc(t4, 0, carry);

        let k = r1.wrapping_mul(INV);
        let (_, carry) = mac(r1, k, MODULUS.0[0], 0);
        let (r2, carry) = mac_typemax(r2, k, carry);
        let (r3, carry) = mac_typemax(r3, k, carry);
        let (r4, carry) = mac_typemax(r4, k, carry);
        let (r5, r6) = adc(t5, r5, carry);

        let k = r2.wrapping_mul(INV);
        let (_, carry) = mac(r2, k, MODULUS.0[0], 0);
        let (r3, carry) = mac_typemax(r3, k, carry);
        let (r4, carry) = mac_typemax(r4, k, carry);
        let (r5, carry) = mac_typemax(r5, k, carry);
        let (r6, r7) = adc(t6, r6, carry);

        let k = r3.wrapping_mul(INV);
        let (_, carry) = mac(r3, k, MODULUS.0[0], 0);
        let (r4, carry) = mac_typemax(r4, k, carry);
        let (r5, carry) = mac_typemax(r5, k, carry);
        let (r6, carry) = mac_typemax(r6, k, carry);
        let (r7, r8) = adc(t7, r7, carry);

        // Result may be within MODULUS of the correct value
        Self::sub_inner(
            r4,
            r5,
            r6,
            r7,
            r8,
            MODULUS.0[0],
            MODULUS.0[1],
            MODULUS.0[2],
            MODULUS.0[3],
            0,
        )
    }

    /// Returns self * rhs mod p.
    pub const fn mul(&self, rhs: &Self) -> Self {
        Self::montgomery_mulmod(
            self.0[0], self.0[1], self.0[2], self.0[3], rhs.0[0], rhs.0[1], rhs.0[2], rhs.0[3],
        )
    }

    /// Returns self * self mod p.
    pub const fn square(&self) -> Self {
        Self::montgomery_mulmod(
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[0], self.0[1], self.0[2], self.0[3],
        )
    }

    /// Raises the element to the power `2^k`.
    fn pow2k(&self, k: usize) -> Self {
        let mut x = *self;
        for _j in 0..k {
            x = x.square();
        }
        x
    }

    /// Returns the multiplicative inverse of self, if self is non-zero.
    pub fn invert(&self) -> CtOption<Self> {
        // The binary representation of (p - 2) has 5 blocks of 1s, with lengths in
        // { 1, 2, 22, 223 }. Use an addition chain to calculate 2^n - 1 for each block:
        // [1], [2], 3, 6, 9, 11, [22], 44, 88, 176, 220, [223]

        let x2 = self.pow2k(1).mul(self);
        let x3 = x2.pow2k(1).mul(self);
        let x6 = x3.pow2k(3).mul(&x3);
        let x9 = x6.pow2k(3).mul(&x3);
        let x11 = x9.pow2k(2).mul(&x2);
        let x22 = x11.pow2k(11).mul(&x11);
        let x44 = x22.pow2k(22).mul(&x22);
        let x88 = x44.pow2k(44).mul(&x44);
        let x176 = x88.pow2k(88).mul(&x88);
        let x220 = x176.pow2k(44).mul(&x44);
        let x223 = x220.pow2k(3).mul(&x3);

        // The final result is then assembled using a sliding window over the blocks.
        let t1 = x223
            .pow2k(23)
            .mul(&x22)
            .pow2k(5)
            .mul(self)
            .pow2k(3)
            .mul(&x2)
            .pow2k(2)
            .mul(self);

        CtOption::new(t1, !self.is_zero())
    }

    /// Raises the element to the power (p - 3) / 4, the fixed exponent of the
    /// `sqrt_ratio` computation for p = 3 mod 4.
    fn pow_p_minus_3_div_4(&self) -> Self {
        // (p - 3) / 4 = (2^223 - 1) * 2^31 + (2^22 - 1) * 2^8 + 11, so the same
        // 1s-blocks as the inversion chain apply, with a different tail.
        let x2 = self.pow2k(1).mul(self);
        let x3 = x2.pow2k(1).mul(self);
        let x6 = x3.pow2k(3).mul(&x3);
        let x9 = x6.pow2k(3).mul(&x3);
        let x11 = x9.pow2k(2).mul(&x2);
        let x22 = x11.pow2k(11).mul(&x11);
        let x44 = x22.pow2k(22).mul(&x22);
        let x88 = x44.pow2k(44).mul(&x44);
        let x176 = x88.pow2k(88).mul(&x88);
        let x220 = x176.pow2k(44).mul(&x44);
        let x223 = x220.pow2k(3).mul(&x3);

        x223.pow2k(23)
            .mul(&x22)
            .pow2k(5)
            .mul(self)
            .pow2k(3)
            .mul(&x2)
    }

    /// Computes the square root of the ratio u / v (RFC 9380 F.2.1.2,
    /// optimized for q = 3 mod 4).
    ///
    /// Returns `(Choice(1), sqrt(u / v))` if u / v is a quadratic residue, and
    /// `(Choice(0), sqrt(Z * u / v))` otherwise, with Z = -11. Constant time.
    pub fn sqrt_ratio(u: &Self, v: &Self) -> (Choice, Self) {
        let tv1 = v.square(); // 1. tv1 = v^2
        let tv2 = u.mul(v); // 2. tv2 = u * v
        let tv1 = tv1.mul(&tv2); // 3. tv1 = tv1 * tv2
        let y1 = tv1.pow_p_minus_3_div_4(); // 4. y1 = tv1^c1
        let y1 = y1.mul(&tv2); // 5. y1 = y1 * tv2
        let y2 = y1.mul(&C2); // 6. y2 = y1 * c2
        let tv3 = y1.square(); // 7. tv3 = y1^2
        let tv3 = tv3.mul(v); // 8. tv3 = tv3 * v
        let is_qr = tv3.ct_eq(u); // 9. isQR = tv3 == u
        let y = Self::conditional_select(&y2, &y1, is_qr); // 10. y = CMOV(y2, y1, isQR)
        (is_qr, y)
    }

    /// Returns the square root of self mod p, or `None` if no square root exists.
    pub fn sqrt(&self) -> CtOption<Self> {
        let (is_qr, root) = Self::sqrt_ratio(self, &Self::ONE);
        CtOption::new(root, is_qr)
    }

    /// Reduces a 48-byte uniform string into a field element, interpreting the
    /// bytes as a big-endian integer d0 * 2^192 + d1.
    pub(crate) fn from_okm(data: &[u8; 48]) -> Self {
        let mut d0_bytes = [0u8; 32];
        d0_bytes[8..].copy_from_slice(&data[..24]);
        let d0 = Self::from_bytes_unchecked(&d0_bytes);

        let mut d1_bytes = [0u8; 32];
        d1_bytes[8..].copy_from_slice(&data[24..]);
        let d1 = Self::from_bytes_unchecked(&d1_bytes);

        d0.mul(&F_2_192).add(&d1)
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
        ])
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Default for FieldElement {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Add<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn add(self, other: FieldElement) -> FieldElement {
        FieldElement::add(&self, &other)
    }
}

impl Add<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        FieldElement::add(&self, other)
    }
}

impl Add<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        FieldElement::add(self, other)
    }
}

impl AddAssign<FieldElement> for FieldElement {
    fn add_assign(&mut self, rhs: FieldElement) {
        *self = FieldElement::add(self, &rhs);
    }
}

impl Sub<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn sub(self, other: FieldElement) -> FieldElement {
        FieldElement::subtract(&self, &other)
    }
}

impl Sub<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        FieldElement::subtract(&self, other)
    }
}

impl Sub<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        FieldElement::subtract(self, other)
    }
}

impl SubAssign<FieldElement> for FieldElement {
    fn sub_assign(&mut self, rhs: FieldElement) {
        *self = FieldElement::subtract(self, &rhs);
    }
}

impl Mul<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn mul(self, other: FieldElement) -> FieldElement {
        FieldElement::mul(&self, &other)
    }
}

impl Mul<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        FieldElement::mul(&self, other)
    }
}

impl Mul<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        FieldElement::mul(self, other)
    }
}

impl MulAssign<FieldElement> for FieldElement {
    fn mul_assign(&mut self, rhs: FieldElement) {
        *self = FieldElement::mul(self, &rhs);
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        self.negate()
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        self.negate()
    }
}
