//! Pixel-domain error metric.
//!
//! Compares two images through their encoded buffers, four bytes at a time. Each
//! stride is read as one big-endian packed 32-bit two's-complement value and the
//! absolute differences are summed. The total is not divided by the pixel count.

use core::fmt;

use crate::codec::{CodecError, ImageCodec};
use crate::config::MetricWindow;
use crate::core::image::PixelImage;
use crate::core::pixel::pack;

/// Errors for metric computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricError {
    /// The encoded buffers differ in length.
    SizeMismatch,
    /// Encoding one of the images failed.
    Codec(CodecError),
}

impl fmt::Display for MetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricError::SizeMismatch => write!(f, "images encode to buffers of different length"),
            MetricError::Codec(e) => write!(f, "codec failure: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MetricError {}

impl From<CodecError> for MetricError {
    fn from(err: CodecError) -> Self {
        MetricError::Codec(err)
    }
}

/// Sum of absolute packed-pixel differences between `a` and `b`.
///
/// With [`MetricWindow::PixelData`] only the pixel payload is compared. With
/// [`MetricWindow::WholeBuffer`] strides start at offset 0, so header bytes are
/// compared as if they were pixels, and the final stride is skipped.
pub fn mean_average_error<C: ImageCodec + ?Sized>(
    a: &PixelImage,
    b: &PixelImage,
    codec: &C,
    window: MetricWindow,
) -> Result<u64, MetricError> {
    let bytes_a = codec.encode(a)?;
    let bytes_b = codec.encode(b)?;
    if bytes_a.len() != bytes_b.len() {
        return Err(MetricError::SizeMismatch);
    }

    // Offsets of the 4-byte strides to compare.
    let len = bytes_a.len();
    let (start, last_exclusive) = match window {
        MetricWindow::PixelData => (codec.header_len(), (len + 1).saturating_sub(4)),
        MetricWindow::WholeBuffer => (0, len.saturating_sub(4)),
    };

    let total: u64 = (start..last_exclusive.max(start))
        .step_by(4)
        .map(|i| {
            let va = pack([bytes_a[i], bytes_a[i + 1], bytes_a[i + 2], bytes_a[i + 3]]) as i64;
            let vb = pack([bytes_b[i], bytes_b[i + 1], bytes_b[i + 2], bytes_b[i + 3]]) as i64;
            (va - vb).unsigned_abs()
        })
        .sum();

    Ok(total)
}
