//! Projective points

#![allow(clippy::op_ref)]

use alloc::{string::String, vec::Vec};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::{AffinePoint, FieldElement, Scalar, CURVE_EQUATION_B, CURVE_EQUATION_B3};
use crate::{Error, Result};

const TAG_IDENTITY: u8 = 0x00;
const TAG_COMPRESSED_EVEN: u8 = 0x02;
const TAG_COMPRESSED_ODD: u8 = 0x03;
const TAG_UNCOMPRESSED: u8 = 0x04;

/// A point on the secp256k1 curve in projective coordinates.
///
/// The triple `(X, Y, Z)` represents the affine point `(X/Z, Y/Z)` when
/// `Z ≠ 0`, and the point at infinity when `Z = 0`.
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

impl ProjectivePoint {
    /// Additive identity of the group: the point at infinity.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ZERO,
    };

    /// Base point of secp256k1.
    pub const GENERATOR: Self = Self {
        x: AffinePoint::GENERATOR.x,
        y: AffinePoint::GENERATOR.y,
        z: FieldElement::ONE,
    };

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Returns the affine representation of this point, with the `(0, 1)`
    /// sentinel for the identity.
    pub fn to_affine(&self) -> AffinePoint {
        self.z
            .invert()
            .map(|zinv| AffinePoint::new(self.x.mul(&zinv), self.y.mul(&zinv)))
            .unwrap_or(AffinePoint::IDENTITY)
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        Self {
            x: self.x,
            y: self.y.negate(),
            z: self.z,
        }
    }

    /// Returns `self + other`.
    ///
    /// Implements the complete addition formula from Renes-Costello-Batina
    /// 2015 (<https://eprint.iacr.org/2015/1060> Algorithm 7, a = 0), which
    /// is valid for all inputs including doubling and the identity.
    pub fn add(&self, other: &Self) -> Self {
        let xx = self.x * &other.x;
        let yy = self.y * &other.y;
        let zz = self.z * &other.z;

        let xy_pairs = ((self.x + &self.y) * &(other.x + &other.y)) - &(xx + &yy);
        let yz_pairs = ((self.y + &self.z) * &(other.y + &other.z)) - &(yy + &zz);
        let xz_pairs = ((self.x + &self.z) * &(other.x + &other.z)) - &(xx + &zz);

        let bzz3 = zz * &CURVE_EQUATION_B3;
        let yy_m_bzz3 = yy - &bzz3;
        let yy_p_bzz3 = yy + &bzz3;

        let byz3 = yz_pairs * &CURVE_EQUATION_B3;

        let xx3 = xx.double() + &xx;
        let bxx9 = (xx3.double() + &xx3) * &CURVE_EQUATION_B;

        Self {
            x: (xy_pairs * &yy_m_bzz3) - &(byz3 * &xz_pairs),
            y: (yy_p_bzz3 * &yy_m_bzz3) + &(bxx9 * &xz_pairs),
            z: (yz_pairs * &yy_p_bzz3) + &(xx3 * &xy_pairs),
        }
    }

    /// Doubles this point.
    ///
    /// Implements the exception-free doubling formula from
    /// Renes-Costello-Batina 2015 (Algorithm 9, a = 0).
    pub fn double(&self) -> Self {
        let yy = self.y.square();
        let zz = self.z.square();
        let xy2 = (self.x * &self.y).double();

        let bzz3 = zz * &CURVE_EQUATION_B3;
        let bzz9 = bzz3.double() + &bzz3;

        let yy_m_bzz9 = yy - &bzz9;
        let yy_p_bzz3 = yy + &bzz3;

        let yy_zz = yy * &zz;
        let yy_zz8 = yy_zz.double().double().double();
        let t = (yy_zz8.double() + &yy_zz8) * &CURVE_EQUATION_B;

        Self {
            x: xy2 * &yy_m_bzz9,
            y: (yy_m_bzz9 * &yy_p_bzz3) + &t,
            z: ((yy * &self.y) * &self.z).double().double().double(),
        }
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Returns `self * k`, using the Montgomery ladder over all 256 bits of
    /// the scalar. Constant time with respect to `k`: the bit pattern only
    /// drives `conditional_swap` calls, never a branch, so `k = 0` and
    /// `k = 1` take the same path as any other scalar (and yield the
    /// identity and `self`, respectively).
    pub fn mul(&self, k: &Scalar) -> Self {
        let bits = k.bits();
        let mut r0 = Self::IDENTITY;
        let mut r1 = *self;
        let mut swap = Choice::from(0u8);

        for i in (0..256).rev() {
            let bit = Choice::from(bits[i]);
            Self::conditional_swap(&mut r0, &mut r1, swap ^ bit);
            swap = bit;

            r1 = r0.add(&r1);
            r0 = r0.double();
        }

        Self::conditional_swap(&mut r0, &mut r1, swap);
        r0
    }

    /// Returns the compressed SEC1 encoding: a single `0x00` byte for the
    /// identity, otherwise `0x02 | sgn0(y)` followed by the x-coordinate.
    pub fn encode(&self) -> Vec<u8> {
        let affine = self.to_affine();
        let is_identity = self.is_identity();

        let sign = TAG_COMPRESSED_EVEN | affine.y.is_odd().unwrap_u8();
        let tag = u8::conditional_select(&sign, &TAG_IDENTITY, is_identity);

        let mut out = Vec::with_capacity(33);
        out.push(tag);

        // The encoding length itself reveals identity-ness; it is public.
        if !bool::from(is_identity) {
            out.extend_from_slice(&affine.x.to_bytes());
        }

        out
    }

    /// Returns the uncompressed SEC1 encoding `0x04 || x || y`.
    pub fn encode_uncompressed(&self) -> [u8; 65] {
        let affine = self.to_affine();
        let mut out = [0u8; 65];
        out[0] = TAG_UNCOMPRESSED;
        out[1..33].copy_from_slice(&affine.x.to_bytes());
        out[33..].copy_from_slice(&affine.y.to_bytes());
        out
    }

    /// Returns the encoded affine x-coordinate, which equals the compressed
    /// encoding without its tag byte.
    pub fn x_coordinate(&self) -> [u8; 32] {
        self.to_affine().x.to_bytes()
    }

    /// Parses a point from any of the SEC1 encodings, dispatching on length:
    /// 1 (identity), 33 (compressed) or 65 (uncompressed) bytes. Branches on
    /// public data only.
    pub fn decode(input: &[u8]) -> Result<Self> {
        match input.len() {
            1 => {
                if input[0] != TAG_IDENTITY {
                    return Err(Error::PointEncoding);
                }

                Ok(Self::IDENTITY)
            }
            33 => {
                let tag = input[0];
                if tag != TAG_COMPRESSED_EVEN && tag != TAG_COMPRESSED_ODD {
                    return Err(Error::PointEncoding);
                }

                let mut x_bytes = [0u8; 32];
                x_bytes.copy_from_slice(&input[1..]);

                Option::<AffinePoint>::from(AffinePoint::decompress(&x_bytes, Choice::from(tag & 1)))
                    .map::<ProjectivePoint, _>(Self::from)
                    .ok_or(Error::PointEncoding)
            }
            65 => {
                if input[0] != TAG_UNCOMPRESSED {
                    return Err(Error::PointEncoding);
                }

                let mut x_bytes = [0u8; 32];
                x_bytes.copy_from_slice(&input[1..33]);
                let mut y_bytes = [0u8; 32];
                y_bytes.copy_from_slice(&input[33..]);

                Self::decode_coordinates(&x_bytes, &y_bytes)
            }
            _ => Err(Error::PointEncoding),
        }
    }

    /// Parses a point from a pair of canonical affine coordinate encodings,
    /// verifying the curve equation.
    pub fn decode_coordinates(x_bytes: &[u8; 32], y_bytes: &[u8; 32]) -> Result<Self> {
        Option::<AffinePoint>::from(AffinePoint::from_coordinates(x_bytes, y_bytes))
            .map::<ProjectivePoint, _>(Self::from)
            .ok_or(Error::PointEncoding)
    }

    /// Returns the fixed-size hexadecimal form of the compressed encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.encode())
    }

    /// Parses a point from the hexadecimal form of any SEC1 encoding.
    pub fn from_hex(input: &str) -> Result<Self> {
        let bytes = hex::decode(input).map_err(|_| Error::HexEncoding)?;
        Self::decode(&bytes)
    }
}

impl From<AffinePoint> for ProjectivePoint {
    fn from(p: AffinePoint) -> Self {
        let projective = ProjectivePoint {
            x: p.x,
            y: p.y,
            z: FieldElement::ONE,
        };
        Self::conditional_select(&projective, &Self::IDENTITY, p.is_identity())
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl ConstantTimeEq for ProjectivePoint {
    /// Compares the points as projective classes: `(X₁, Y₁, Z₁)` and
    /// `(X₂, Y₂, Z₂)` are the same point iff `X₁Z₂ = X₂Z₁` and `Y₁Z₂ = Y₂Z₁`.
    fn ct_eq(&self, other: &Self) -> Choice {
        let x1z2 = self.x.mul(&other.z);
        let x2z1 = other.x.mul(&self.z);
        let y1z2 = self.y.mul(&other.z);
        let y2z1 = other.y.mul(&self.z);

        x1z2.ct_eq(&x2z1) & y1z2.ct_eq(&y2z1)
    }
}

impl PartialEq for ProjectivePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for ProjectivePoint {}

impl Default for ProjectivePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add<ProjectivePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn add(self, other: ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::add(&self, &other)
    }
}

impl Add<&ProjectivePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn add(self, other: &ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::add(&self, other)
    }
}

impl Add<&ProjectivePoint> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn add(self, other: &ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::add(self, other)
    }
}

impl AddAssign<ProjectivePoint> for ProjectivePoint {
    fn add_assign(&mut self, rhs: ProjectivePoint) {
        *self = ProjectivePoint::add(self, &rhs);
    }
}

impl Sub<ProjectivePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn sub(self, other: ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::sub(&self, &other)
    }
}

impl Sub<&ProjectivePoint> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn sub(self, other: &ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::sub(&self, other)
    }
}

impl Sub<&ProjectivePoint> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn sub(self, other: &ProjectivePoint) -> ProjectivePoint {
        ProjectivePoint::sub(self, other)
    }
}

impl SubAssign<ProjectivePoint> for ProjectivePoint {
    fn sub_assign(&mut self, rhs: ProjectivePoint) {
        *self = ProjectivePoint::sub(self, &rhs);
    }
}

impl Mul<Scalar> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, scalar: Scalar) -> ProjectivePoint {
        ProjectivePoint::mul(&self, &scalar)
    }
}

impl Mul<&Scalar> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, scalar: &Scalar) -> ProjectivePoint {
        ProjectivePoint::mul(&self, scalar)
    }
}

impl Mul<&Scalar> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, scalar: &Scalar) -> ProjectivePoint {
        ProjectivePoint::mul(self, scalar)
    }
}

impl MulAssign<Scalar> for ProjectivePoint {
    fn mul_assign(&mut self, rhs: Scalar) {
        *self = ProjectivePoint::mul(self, &rhs);
    }
}

impl Neg for ProjectivePoint {
    type Output = ProjectivePoint;

    fn neg(self) -> ProjectivePoint {
        ProjectivePoint::neg(&self)
    }
}

impl Neg for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn neg(self) -> ProjectivePoint {
        ProjectivePoint::neg(self)
    }
}
