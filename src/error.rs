//! Error types.

/// Result type with the `secp256k1-group` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors surfaced by scalar and point codecs.
///
/// Arithmetic itself never fails; only parsing of untrusted encodings does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An empty byte string was supplied where a scalar encoding was
    /// expected.
    EmptyScalarEncoding,
    /// A scalar encoding did not have the expected 32-byte length.
    ScalarLength,
    /// A scalar encoding held an integer no smaller than the group order.
    ScalarTooBig,
    /// A point encoding had the wrong length or tag, a non-canonical
    /// coordinate, or described a point that is not on the curve.
    PointEncoding,
    /// A hexadecimal string failed to parse.
    HexEncoding,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::EmptyScalarEncoding => write!(f, "nil or empty scalar"),
            Error::ScalarLength => write!(f, "invalid scalar length"),
            Error::ScalarTooBig => write!(f, "scalar too big"),
            Error::PointEncoding => write!(f, "invalid point encoding"),
            Error::HexEncoding => write!(f, "invalid hex encoding"),
        }
    }
}

impl core::error::Error for Error {}
