//! Secret reconstruction from shares.
//!
//! Implements Lagrange interpolation over GF(251) at x = 0. Every share is first
//! encoded through the image codec; the header of the first share is copied
//! verbatim and each later byte position is interpolated independently:
//!
//! `s = Σ_i y_i · Π_{j≠i} (-x_j) / (x_i - x_j)  (mod q)`
//!
//! For two shares this is `y1(-x2)/(x1-x2) + y2(-x1)/(x2-x1)`.
//!
//! # Validation
//! Checks share count, matching dimensions and duplicate keys before touching any
//! pixel data.

extern crate alloc;
use alloc::vec::Vec;

use super::{share::Share, MpcError};
use crate::codec::{CodecError, ImageCodec};
use crate::core::image::PixelImage;
use crate::core::modular::{checked_inverse_mod, floor_mod};
use crate::core::pixel::{symbol_from_u8, u8_from_symbol};
use crate::core::PRIME_FIELD;

/// Outcome of a reconstruction whose interpolation succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconstruction {
    /// The codec decoded the interpolated buffer.
    Image(PixelImage),
    /// The interpolated buffer could not be decoded. `blank` is an all-zero image of
    /// the shares' dimensions.
    DecodeFailed { blank: PixelImage, error: CodecError },
}

impl Reconstruction {
    pub fn is_image(&self) -> bool {
        matches!(self, Reconstruction::Image(_))
    }

    /// The decoded image, if decoding succeeded.
    pub fn image(&self) -> Option<&PixelImage> {
        match self {
            Reconstruction::Image(image) => Some(image),
            Reconstruction::DecodeFailed { .. } => None,
        }
    }

    /// The decoded image, or the blank fallback when decoding failed.
    pub fn into_image(self) -> PixelImage {
        match self {
            Reconstruction::Image(image) => image,
            Reconstruction::DecodeFailed { blank, .. } => blank,
        }
    }
}

/// Lagrange basis values at x = 0: `λ_i = Π_{j≠i} (-x_j) · (x_i - x_j)^{-1} mod q`.
///
/// Fails with [`MpcError::DegenerateShareSet`] if two keys coincide mod `q`.
pub fn lagrange_weights(keys: &[i64], q: i64) -> Result<Vec<i64>, MpcError> {
    let mut weights = Vec::with_capacity(keys.len());
    for (i, &xi) in keys.iter().enumerate() {
        let mut weight = 1i64;
        for (j, &xj) in keys.iter().enumerate() {
            if i == j {
                continue;
            }
            let inverse = checked_inverse_mod(xi - xj, q).ok_or(MpcError::DegenerateShareSet)?;
            weight = floor_mod(weight * floor_mod(-xj, q), q);
            weight = floor_mod(weight * inverse, q);
        }
        weights.push(weight);
    }
    Ok(weights)
}

/// Interpolates equally sized codec buffers byte by byte, keeping the first
/// `header_len` bytes of `buffers[0]`.
pub fn interpolate_buffers(
    buffers: &[Vec<u8>],
    keys: &[i64],
    header_len: usize,
) -> Result<Vec<u8>, MpcError> {
    if buffers.is_empty() || buffers.len() != keys.len() {
        return Err(MpcError::InsufficientShares);
    }
    let len = buffers[0].len();
    if buffers.iter().any(|b| b.len() != len) {
        return Err(MpcError::ShareDimensionMismatch);
    }

    let q = PRIME_FIELD;
    let weights = lagrange_weights(keys, q)?;
    let header_len = header_len.min(len);

    let mut out = Vec::with_capacity(len);
    out.extend_from_slice(&buffers[0][..header_len]);
    for pos in header_len..len {
        let mut sum = 0i64;
        for (buffer, &weight) in buffers.iter().zip(weights.iter()) {
            sum = floor_mod(sum + symbol_from_u8(buffer[pos]) * weight, q);
        }
        out.push(u8_from_symbol(sum));
    }

    Ok(out)
}

/// Reconstructs the secret image from at least `k` shares (the first `k` are used).
///
/// Codec encode failures propagate as [`MpcError::Codec`]; a failure to decode the
/// interpolated buffer is reported as [`Reconstruction::DecodeFailed`].
pub fn reconstruct_secret<C: ImageCodec + ?Sized>(
    shares: &[Share],
    k: usize,
    codec: &C,
) -> Result<Reconstruction, MpcError> {
    if k == 0 || shares.len() < k {
        return Err(MpcError::InsufficientShares);
    }
    let shares = &shares[..k];

    let dimensions = shares[0].image().dimensions();
    if shares.iter().any(|s| s.image().dimensions() != dimensions) {
        return Err(MpcError::ShareDimensionMismatch);
    }

    let keys: Vec<i64> = shares.iter().map(|s| s.key() as i64).collect();
    for i in 0..keys.len() {
        for j in (i + 1)..keys.len() {
            if floor_mod(keys[i] - keys[j], PRIME_FIELD) == 0 {
                return Err(MpcError::DegenerateShareSet);
            }
        }
    }

    let buffers = shares
        .iter()
        .map(|s| codec.encode(s.image()))
        .collect::<Result<Vec<_>, _>>()?;

    let decrypted = interpolate_buffers(&buffers, &keys, codec.header_len())?;

    match codec.decode(&decrypted) {
        Ok(image) => Ok(Reconstruction::Image(image)),
        Err(error) => {
            log::warn!("Reconstructed buffer failed to decode: {}", error);
            let (width, height) = dimensions;
            Ok(Reconstruction::DecodeFailed {
                blank: PixelImage::new(width, height),
                error,
            })
        }
    }
}
