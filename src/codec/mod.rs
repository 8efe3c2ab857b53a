//! Image codec seam.
//!
//! Reconstruction and the error metric work on the codec's flat byte buffer rather
//! than on pixels: a fixed-size header followed by four bytes per pixel. The
//! header is carried over verbatim during reconstruction; everything after it is
//! treated as secret-shared payload.

extern crate alloc;
use alloc::vec::Vec;
use core::fmt;

use crate::core::image::PixelImage;

pub mod bmp;

pub use bmp::BmpCodec;

/// Header length of the raster format understood by the sharing scheme.
pub const HEADER_LEN: usize = 54;

/// Errors produced while encoding or decoding an image buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Buffer shorter than the fixed header.
    Truncated,
    /// Missing format signature.
    BadMagic,
    /// Header layout not supported (offset or info header size).
    UnsupportedHeader,
    /// Pixel depth other than 32 bits.
    UnsupportedDepth,
    /// Compressed pixel data.
    Compressed,
    /// Zero, negative or overflowing dimensions.
    InvalidDimensions,
    /// Payload length does not match the declared dimensions.
    PayloadMismatch,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Truncated => write!(f, "image buffer shorter than header"),
            CodecError::BadMagic => write!(f, "missing image format signature"),
            CodecError::UnsupportedHeader => write!(f, "unsupported image header layout"),
            CodecError::UnsupportedDepth => write!(f, "unsupported pixel depth"),
            CodecError::Compressed => write!(f, "compressed pixel data is not supported"),
            CodecError::InvalidDimensions => write!(f, "invalid image dimensions"),
            CodecError::PayloadMismatch => write!(f, "pixel payload length does not match dimensions"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CodecError {}

/// Converts between [`PixelImage`]s and a raster byte buffer.
///
/// Implementations must round-trip pixel data exactly and emit exactly
/// [`header_len`](ImageCodec::header_len) header bytes followed by four bytes per
/// pixel.
pub trait ImageCodec {
    /// Serializes an image into a header plus pixel payload.
    fn encode(&self, image: &PixelImage) -> Result<Vec<u8>, CodecError>;

    /// Parses a buffer produced by [`encode`](ImageCodec::encode) (or any
    /// compatible writer).
    fn decode(&self, bytes: &[u8]) -> Result<PixelImage, CodecError>;

    /// Number of leading bytes that are format header rather than pixel payload.
    fn header_len(&self) -> usize {
        HEADER_LEN
    }
}

impl<C: ImageCodec + ?Sized> ImageCodec for &C {
    fn encode(&self, image: &PixelImage) -> Result<Vec<u8>, CodecError> {
        (**self).encode(image)
    }

    fn decode(&self, bytes: &[u8]) -> Result<PixelImage, CodecError> {
        (**self).decode(bytes)
    }

    fn header_len(&self) -> usize {
        (**self).header_len()
    }
}
