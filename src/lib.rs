//! Prime-order group operations over the secp256k1 elliptic curve.
//!
//! This crate exposes the group abstraction needed by higher-level protocols
//! (OPRFs, VRFs, signatures, threshold schemes): constant-time scalar and
//! point arithmetic, canonical SEC1 byte encodings, and the RFC 9380
//! `secp256k1_XMD:SHA-256_SSWU_RO_` and `secp256k1_XMD:SHA-256_SSWU_NU_`
//! hash-to-curve suites.
//!
//! All arithmetic on secret data is branch-free; the only variable-time
//! operation is [`Scalar::pow_vartime`], which is documented as such and must
//! not be used with secret exponents.
//!
//! ```
//! use secp256k1_group::{base, hash_to_scalar};
//!
//! let g = base();
//! assert_eq!(
//!     g.to_hex(),
//!     "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
//! );
//!
//! let s = hash_to_scalar(b"input data", b"domain separation tag");
//! assert_eq!(
//!     s.to_hex(),
//!     "782a63d48eace435ac06468208d9a62e3680e4ddc3977c4345b2c6de08258b69",
//! );
//! ```

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod arithmetic;

mod error;
mod xmd;

pub use crate::{
    arithmetic::{AffinePoint, ProjectivePoint, Scalar},
    error::{Error, Result},
};

/// The hash-to-curve ciphersuite identifier (random-oracle variant).
pub const CIPHERSUITE_RO: &str = "secp256k1_XMD:SHA-256_SSWU_RO_";

/// The encode-to-curve ciphersuite identifier (nonuniform variant).
pub const CIPHERSUITE_NU: &str = "secp256k1_XMD:SHA-256_SSWU_NU_";

/// Byte size of an encoded scalar.
const SCALAR_LENGTH: usize = 32;

/// Byte size of a compressed point encoding.
const ELEMENT_LENGTH: usize = 33;

/// Security length dictating the XMD block size of the hash-to-field
/// operations (L = 48 for a 128-bit security level).
const SEC_LENGTH: usize = 48;

/// The group order n, big-endian:
/// fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141.
const GROUP_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xfe, 0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36,
    0x41, 0x41,
];

/// Returns the group's base point a.k.a. canonical generator.
pub fn base() -> ProjectivePoint {
    ProjectivePoint::GENERATOR
}

/// Maps the arbitrary `input` to a uniform [`Scalar`]: a single 48-byte XMD
/// expansion reduced into the scalar field (RFC 9380 `hash_to_field` with
/// count = 1).
///
/// The DST must not be empty, and is recommended to be longer than 16 bytes.
///
/// # Panics
///
/// Panics if `dst` is empty.
pub fn hash_to_scalar(input: &[u8], dst: &[u8]) -> Scalar {
    let mut okm = [0u8; SEC_LENGTH];
    xmd::expand_message_xmd(input, dst, &mut okm);
    Scalar::from_okm(&okm)
}

/// Maps the arbitrary `input` to a uniformly-distributed group element with
/// the `secp256k1_XMD:SHA-256_SSWU_RO_` suite.
///
/// The DST must not be empty, and is recommended to be longer than 16 bytes.
///
/// # Panics
///
/// Panics if `dst` is empty.
pub fn hash_to_group(input: &[u8], dst: &[u8]) -> ProjectivePoint {
    arithmetic::hash2curve::hash_to_curve(input, dst)
}

/// Maps the arbitrary `input` to a group element with the nonuniform
/// `secp256k1_XMD:SHA-256_SSWU_NU_` suite. The output distribution is
/// distinguishable from uniform; use [`hash_to_group`] where a random oracle
/// is required.
///
/// The DST must not be empty, and is recommended to be longer than 16 bytes.
///
/// # Panics
///
/// Panics if `dst` is empty.
pub fn encode_to_group(input: &[u8], dst: &[u8]) -> ProjectivePoint {
    arithmetic::hash2curve::encode_to_curve(input, dst)
}

/// Returns the hash-to-curve ciphersuite identifier.
pub const fn ciphersuite() -> &'static str {
    CIPHERSUITE_RO
}

/// Returns the byte size of an encoded scalar.
pub const fn scalar_length() -> usize {
    SCALAR_LENGTH
}

/// Returns the byte size of a compressed point encoding.
pub const fn element_length() -> usize {
    ELEMENT_LENGTH
}

/// Returns the big-endian byte encoding of the group order.
pub const fn order() -> [u8; 32] {
    GROUP_ORDER
}
