//! Share generation.
//!
//! For every 2x2 block `l` of the secret and every channel value `v` in it, share
//! `i` stores `f_l(x_i) mod q` where `f_l(x) = min(v, 250) + Σ coeff[l][r-1] x^r`.
//! Blocks on a trailing odd row or column are partial but still get their own
//! coefficient row, so the whole image is covered.

extern crate alloc;
use alloc::vec::Vec;

use super::params::SharingParameters;
use super::polynomial::evaluate_polynomial;
use super::{share::Share, MpcError};
use crate::core::image::PixelImage;
use crate::core::pixel::{clamp_channel, pack, unpack};
use crate::core::CLAMP_CEILING;

/// Encodes `secret` into the share image for `key`.
///
/// Fails with [`MpcError::CoefficientTableMismatch`] if `params` was drawn for a
/// different block layout.
pub fn encrypt_share(
    secret: &PixelImage,
    params: &SharingParameters,
    key: u8,
) -> Result<PixelImage, MpcError> {
    if params.block_count() != secret.block_count() {
        return Err(MpcError::CoefficientTableMismatch);
    }

    let (width, height) = secret.dimensions();
    let q = params.prime();
    let x = key as i64;
    let mut share = PixelImage::new(width, height);

    for block_row in (0..height).step_by(2) {
        for block_col in (0..width).step_by(2) {
            let l = secret.block_index(block_row, block_col);
            let coefficients = params.coefficient_row(l);

            for row in block_row..(block_row + 2).min(height) {
                for col in block_col..(block_col + 2).min(width) {
                    let mut channels = unpack(secret.get(row, col));
                    for channel in channels.iter_mut() {
                        let v = clamp_channel(*channel) as i64;
                        *channel = evaluate_polynomial(v, coefficients, x, q) as u8;
                    }
                    share.set(row, col, pack(channels));
                }
            }
        }
    }

    Ok(share)
}

/// Produces one [`Share`] per key in `params`.
pub fn split_image(secret: &PixelImage, params: &SharingParameters) -> Result<Vec<Share>, MpcError> {
    if secret.is_empty() {
        return Err(MpcError::EmptyImage);
    }
    params
        .keys()
        .iter()
        .map(|&key| Share::new(key, encrypt_share(secret, params, key)?))
        .collect()
}

/// Number of channel values above the clamp ceiling, i.e. values that will not
/// survive a round trip exactly.
pub fn clamped_channels(image: &PixelImage) -> usize {
    image
        .pixels()
        .iter()
        .flat_map(|&p| unpack(p))
        .filter(|&c| c > CLAMP_CEILING)
        .count()
}
