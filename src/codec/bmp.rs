//! Uncompressed 32 bpp BMP.
//!
//! Layout: 14-byte file header, 40-byte `BITMAPINFOHEADER`, then pixels as
//! `B, G, R, A` byte quads with rows stored bottom-up. No row padding is needed at
//! 4 bytes per pixel. Decoding also accepts top-down files (negative height).

extern crate alloc;
use alloc::vec::Vec;

use super::{CodecError, ImageCodec, HEADER_LEN};
use crate::core::image::PixelImage;
use crate::core::pixel::{pack, unpack, ALPHA, BLUE, GREEN, RED};

const FILE_HEADER_LEN: usize = 14;
const INFO_HEADER_LEN: u32 = 40;
const BITS_PER_PIXEL: u16 = 32;
const BI_RGB: u32 = 0;
/// 72 DPI.
const PIXELS_PER_METRE: u32 = 2835;

/// BMP codec for ARGB images.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BmpCodec;

impl BmpCodec {
    pub fn new() -> Self {
        Self
    }
}

#[inline]
fn le_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

#[inline]
fn le_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([bytes[offset], bytes[offset + 1], bytes[offset + 2], bytes[offset + 3]])
}

#[inline]
fn le_i32(bytes: &[u8], offset: usize) -> i32 {
    le_u32(bytes, offset) as i32
}

impl ImageCodec for BmpCodec {
    fn encode(&self, image: &PixelImage) -> Result<Vec<u8>, CodecError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(CodecError::InvalidDimensions);
        }
        let width_field = i32::try_from(width).map_err(|_| CodecError::InvalidDimensions)?;
        let height_field = i32::try_from(height).map_err(|_| CodecError::InvalidDimensions)?;
        let payload_len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(CodecError::InvalidDimensions)?;
        let file_len = u32::try_from(HEADER_LEN + payload_len).map_err(|_| CodecError::InvalidDimensions)?;

        let mut out = Vec::with_capacity(HEADER_LEN + payload_len);

        // File header
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&file_len.to_le_bytes());
        out.extend_from_slice(&[0u8; 4]); // reserved
        out.extend_from_slice(&(HEADER_LEN as u32).to_le_bytes());

        // Info header
        out.extend_from_slice(&INFO_HEADER_LEN.to_le_bytes());
        out.extend_from_slice(&width_field.to_le_bytes());
        out.extend_from_slice(&height_field.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // planes
        out.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
        out.extend_from_slice(&BI_RGB.to_le_bytes());
        out.extend_from_slice(&(payload_len as u32).to_le_bytes());
        out.extend_from_slice(&PIXELS_PER_METRE.to_le_bytes());
        out.extend_from_slice(&PIXELS_PER_METRE.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes()); // palette colours
        out.extend_from_slice(&0u32.to_le_bytes()); // important colours
        debug_assert_eq!(out.len(), HEADER_LEN);

        for row in (0..height).rev() {
            for col in 0..width {
                let channels = unpack(image.get(row, col));
                out.extend_from_slice(&[channels[BLUE], channels[GREEN], channels[RED], channels[ALPHA]]);
            }
        }

        Ok(out)
    }

    fn decode(&self, bytes: &[u8]) -> Result<PixelImage, CodecError> {
        if bytes.len() < HEADER_LEN {
            return Err(CodecError::Truncated);
        }
        if &bytes[0..2] != b"BM" {
            return Err(CodecError::BadMagic);
        }
        if le_u32(bytes, 10) as usize != HEADER_LEN || le_u32(bytes, FILE_HEADER_LEN) != INFO_HEADER_LEN {
            return Err(CodecError::UnsupportedHeader);
        }
        if le_u16(bytes, 28) != BITS_PER_PIXEL {
            return Err(CodecError::UnsupportedDepth);
        }
        if le_u32(bytes, 30) != BI_RGB {
            return Err(CodecError::Compressed);
        }

        let width_field = le_i32(bytes, 18);
        let height_field = le_i32(bytes, 22);
        if width_field <= 0 || height_field == 0 || height_field == i32::MIN {
            return Err(CodecError::InvalidDimensions);
        }
        let top_down = height_field < 0;
        let width = width_field as usize;
        let height = height_field.unsigned_abs() as usize;

        let payload_len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(CodecError::InvalidDimensions)?;
        let payload = &bytes[HEADER_LEN..];
        if payload.len() != payload_len {
            return Err(CodecError::PayloadMismatch);
        }

        let mut image = PixelImage::new(width, height);
        for (stored_row, chunk) in payload.chunks_exact(width * 4).enumerate() {
            let row = if top_down { stored_row } else { height - 1 - stored_row };
            for (col, quad) in chunk.chunks_exact(4).enumerate() {
                image.set(row, col, pack([quad[3], quad[2], quad[1], quad[0]]));
            }
        }

        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(width: usize, height: usize) -> PixelImage {
        PixelImage::from_fn(width, height, |r, c| {
            pack([(200 + r) as u8, (c * 37) as u8, (r * 91 + c) as u8, 255 - c as u8])
        })
    }

    #[test]
    fn test_header_layout() {
        let bytes = BmpCodec.encode(&sample(3, 2)).unwrap();
        assert_eq!(bytes.len(), HEADER_LEN + 3 * 2 * 4);
        assert_eq!(&bytes[0..2], b"BM");
        assert_eq!(le_u32(&bytes, 2) as usize, bytes.len());
        assert_eq!(le_u32(&bytes, 10) as usize, HEADER_LEN);
        assert_eq!(le_i32(&bytes, 18), 3);
        assert_eq!(le_i32(&bytes, 22), 2);
        assert_eq!(le_u16(&bytes, 28), 32);
    }

    #[test]
    fn test_pixel_byte_order_bottom_up() {
        let mut img = PixelImage::new(1, 2);
        img.set(0, 0, pack([0xA0, 0x01, 0x02, 0x03])); // top
        img.set(1, 0, pack([0xB0, 0x11, 0x12, 0x13])); // bottom
        let bytes = BmpCodec.encode(&img).unwrap();
        assert_eq!(&bytes[HEADER_LEN..], &[0x13, 0x12, 0x11, 0xB0, 0x03, 0x02, 0x01, 0xA0]);
    }

    #[test]
    fn test_round_trip_preserves_alpha() {
        let img = sample(5, 3);
        let decoded = BmpCodec.decode(&BmpCodec.encode(&img).unwrap()).unwrap();
        assert_eq!(decoded, img);
    }

    #[test]
    fn test_decode_top_down() {
        let img = sample(2, 2);
        let mut bytes = BmpCodec.encode(&img).unwrap();
        bytes[22..26].copy_from_slice(&(-2i32).to_le_bytes());
        // Swap the two stored rows so the buffer is now top-down.
        let payload = &mut bytes[HEADER_LEN..];
        let (first, second) = payload.split_at_mut(8);
        first.swap_with_slice(second);
        assert_eq!(BmpCodec.decode(&bytes).unwrap(), img);
    }

    #[test]
    fn test_decode_rejects_malformed() {
        let good = BmpCodec.encode(&sample(2, 2)).unwrap();

        assert_eq!(BmpCodec.decode(&good[..20]), Err(CodecError::Truncated));

        let mut bad = good.clone();
        bad[0] = b'X';
        assert_eq!(BmpCodec.decode(&bad), Err(CodecError::BadMagic));

        let mut bad = good.clone();
        bad[28] = 24;
        assert_eq!(BmpCodec.decode(&bad), Err(CodecError::UnsupportedDepth));

        let mut bad = good.clone();
        bad[30] = 1;
        assert_eq!(BmpCodec.decode(&bad), Err(CodecError::Compressed));

        let mut bad = good.clone();
        bad[18..22].copy_from_slice(&0i32.to_le_bytes());
        assert_eq!(BmpCodec.decode(&bad), Err(CodecError::InvalidDimensions));

        let mut bad = good.clone();
        bad[14] = 12;
        assert_eq!(BmpCodec.decode(&bad), Err(CodecError::UnsupportedHeader));

        assert_eq!(BmpCodec.decode(&good[..good.len() - 1]), Err(CodecError::PayloadMismatch));
    }

    #[test]
    fn test_encode_rejects_empty() {
        assert_eq!(BmpCodec.encode(&PixelImage::new(0, 4)), Err(CodecError::InvalidDimensions));
    }
}
