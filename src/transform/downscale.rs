//! 2x2 block-averaging downscale.
//!
//! Each output channel is `floor((c0 + c1 + c2 + c3) / 4) mod q` over the four
//! corner values of a source block, each clamped to 250 first. Because
//! reconstruction is linear in the share symbols, averaging the shares and then
//! reconstructing agrees with reconstructing and then averaging whenever no
//! contributing channel was clamped and the floor division loses nothing.

use crate::core::image::PixelImage;
use crate::core::modular::floor_mod;
use crate::core::pixel::{clamp_channel, pack, unpack};
use crate::core::PRIME_FIELD;

/// Halves both dimensions (floor division), dropping a trailing odd row/column.
///
/// Images narrower or shorter than 2 pixels are already at the floor and are
/// returned unchanged.
pub fn downscale(source: &PixelImage) -> PixelImage {
    let (width, height) = source.dimensions();
    if width < 2 || height < 2 {
        return source.clone();
    }

    PixelImage::from_fn(width / 2, height / 2, |row, col| {
        let (i, j) = (row * 2, col * 2);
        let corners = [
            unpack(source.get(i, j)),
            unpack(source.get(i, j + 1)),
            unpack(source.get(i + 1, j)),
            unpack(source.get(i + 1, j + 1)),
        ];

        let mut averaged = [0u8; 4];
        for (channel, out) in averaged.iter_mut().enumerate() {
            let sum: i64 = corners
                .iter()
                .map(|c| clamp_channel(c[channel]) as i64)
                .sum();
            *out = floor_mod(sum >> 2, PRIME_FIELD) as u8;
        }
        pack(averaged)
    })
}
