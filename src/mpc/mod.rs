//! Threshold secret sharing of images over GF(251).
//!
//! Every channel byte of every pixel is the constant term of its own polynomial
//! of degree `k-1`. The higher coefficients are drawn once per 2x2 pixel block
//! and shared by the sixteen channel polynomials of that block.
//!
//! # Components
//! - `share`: a share image paired with its public x-coordinate.
//! - `params`: the immutable coefficient/key bundle of one sharing pass.
//! - `polynomial`: evaluation of a block polynomial mod q.
//! - `split`: the encryption step that turns a secret into share images.
//! - `reconstruct`: Lagrange interpolation at x = 0 over codec buffers.
//!
//! # Security
//! - **Zeroization**: shares and coefficient tables are wiped on drop.
//! - **Clamping**: channel values above 250 are clamped before encoding and cannot
//!   be recovered exactly.

pub mod params;
pub(crate) mod polynomial;
pub mod reconstruct;
pub mod share;
pub mod split;

use core::fmt;

use crate::codec::CodecError;
use crate::entropy::EntropyError;

/// Errors for sharing and reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MpcError {
    /// Threshold configuration error (k = 0 or k > n).
    InvalidThreshold,
    /// Share count is zero or leaves no room for distinct non-zero keys.
    InvalidShareCount,
    /// Share key outside the field.
    InvalidShareKey,
    /// Share or secret image has no pixels.
    EmptyImage,
    /// No secret image has been loaded.
    MissingSecret,
    /// Fewer shares than the threshold.
    InsufficientShares,
    /// Two shares carry the same key, so interpolation would divide by zero.
    DegenerateShareSet,
    /// Shares differ in dimensions.
    ShareDimensionMismatch,
    /// Coefficient table does not match the image block layout.
    CoefficientTableMismatch,
    /// The random source kept producing unusable keys.
    KeyGenerationFailed,
    /// Encoding or decoding a share buffer failed.
    Codec(CodecError),
    /// Random number generator failure.
    Entropy(EntropyError),
}

impl fmt::Display for MpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MpcError::InvalidThreshold => write!(f, "threshold k must satisfy 0 < k <= n"),
            MpcError::InvalidShareCount => write!(f, "share count n must satisfy 0 < n < 251"),
            MpcError::InvalidShareKey => write!(f, "share key must lie in [0, 251)"),
            MpcError::EmptyImage => write!(f, "image has no pixels"),
            MpcError::MissingSecret => write!(f, "no secret image loaded"),
            MpcError::InsufficientShares => write!(f, "not enough shares to reconstruct"),
            MpcError::DegenerateShareSet => write!(f, "shares with duplicate keys cannot be interpolated"),
            MpcError::ShareDimensionMismatch => write!(f, "shares differ in dimensions"),
            MpcError::CoefficientTableMismatch => write!(f, "coefficient table does not match image blocks"),
            MpcError::KeyGenerationFailed => write!(f, "could not draw enough distinct share keys"),
            MpcError::Codec(e) => write!(f, "codec failure: {}", e),
            MpcError::Entropy(e) => write!(f, "entropy failure: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MpcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MpcError::Codec(e) => Some(e),
            MpcError::Entropy(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CodecError> for MpcError {
    fn from(err: CodecError) -> Self {
        MpcError::Codec(err)
    }
}

impl From<EntropyError> for MpcError {
    fn from(err: EntropyError) -> Self {
        MpcError::Entropy(err)
    }
}
