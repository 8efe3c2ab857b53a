//! Packed-pixel conversion.
//!
//! Pixels travel through the crate as 32-bit two's-complement integers holding four
//! 8-bit channels in ARGB order (alpha in the top byte). Codec byte buffers hold the
//! same channel bytes as signed values. Every place that splits or assembles a pixel
//! goes through this module so the sign convention lives in one spot:
//!
//! - a packed magnitude above `i32::MAX` is stored as that magnitude minus 2^32;
//! - a negative signed byte `b` stands for the field symbol `b + 256`;
//! - a field symbol above 127 is written back as the negative byte `-(256 - v)`.

use super::CLAMP_CEILING;

/// A packed ARGB pixel.
pub type PackedPixel = i32;

/// Channel positions within [`unpack`]'s output.
pub const ALPHA: usize = 0;
pub const RED: usize = 1;
pub const GREEN: usize = 2;
pub const BLUE: usize = 3;

/// Splits a packed pixel into its `[A, R, G, B]` channel bytes.
#[inline(always)]
pub fn unpack(pixel: PackedPixel) -> [u8; 4] {
    pixel.to_be_bytes()
}

/// Assembles `[A, R, G, B]` channel bytes into a packed pixel.
///
/// Any alpha value of 128 or more produces a negative pixel, exactly as if the
/// unsigned magnitude had 2^32 subtracted from it.
#[inline(always)]
pub fn pack(channels: [u8; 4]) -> PackedPixel {
    PackedPixel::from_be_bytes(channels)
}

/// Field symbol for a signed codec byte, biasing negatives by 256.
#[inline(always)]
pub fn symbol_from_byte(byte: i8) -> i64 {
    let value = byte as i64;
    if value < 0 {
        value + 256
    } else {
        value
    }
}

/// Signed codec byte for a field symbol in `[0, 256)`.
#[inline(always)]
pub fn byte_from_symbol(symbol: i64) -> i8 {
    debug_assert!((0..256).contains(&symbol), "symbol out of byte range: {}", symbol);
    if symbol > 127 {
        // -(256 - v), computed wide so -128 does not overflow
        (symbol - 256) as i8
    } else {
        symbol as i8
    }
}

/// Field symbol for an unsigned buffer byte.
#[inline(always)]
pub fn symbol_from_u8(byte: u8) -> i64 {
    symbol_from_byte(byte as i8)
}

/// Unsigned buffer byte for a field symbol in `[0, 256)`.
#[inline(always)]
pub fn u8_from_symbol(symbol: i64) -> u8 {
    byte_from_symbol(symbol) as u8
}

/// Clamps a channel value to the encoding ceiling (250).
#[inline(always)]
pub fn clamp_channel(value: u8) -> u8 {
    value.min(CLAMP_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack_channel_order() {
        let pixel = pack([0x11, 0x22, 0x33, 0x44]);
        assert_eq!(pixel, 0x1122_3344);
        let channels = unpack(pixel);
        assert_eq!(channels[ALPHA], 0x11);
        assert_eq!(channels[RED], 0x22);
        assert_eq!(channels[GREEN], 0x33);
        assert_eq!(channels[BLUE], 0x44);
    }

    #[test]
    fn test_pack_overflow_goes_negative() {
        // 0xFA000000 exceeds i32::MAX and must map to 0xFA000000 - 2^32.
        let pixel = pack([0xFA, 0x00, 0x00, 0x00]);
        assert_eq!(pixel as i64, 0xFA00_0000i64 - (1i64 << 32));
        assert!(pixel < 0);
        assert_eq!(pixel as u32, 0xFA00_0000);

        let opaque_white = pack([0xFF; 4]);
        assert_eq!(opaque_white, -1);
        assert_eq!(opaque_white as u32, 0xFFFF_FFFF);
    }

    #[test]
    fn test_pack_unpack_boundaries() {
        let samples = [0, 1, -1, i32::MAX, i32::MIN, 0x7F00_0000, -0x0100_0000, 0x00FA_FAFA];
        for &pixel in samples.iter() {
            assert_eq!(pack(unpack(pixel)), pixel);
        }
        for alpha in 0..=255u8 {
            let pixel = pack([alpha, 250, 0, 127]);
            assert_eq!(unpack(pixel), [alpha, 250, 0, 127]);
            assert_eq!(pixel as u32, ((alpha as u32) << 24) | (250 << 16) | 127);
        }
    }

    #[test]
    fn test_byte_symbol_exhaustive() {
        for byte in i8::MIN..=i8::MAX {
            let symbol = symbol_from_byte(byte);
            assert!((0..256).contains(&symbol));
            assert_eq!(symbol, byte as u8 as i64);
            assert_eq!(byte_from_symbol(symbol), byte);
        }
        for symbol in 0..256i64 {
            assert_eq!(symbol_from_u8(u8_from_symbol(symbol)), symbol);
        }
    }

    #[test]
    fn test_byte_from_symbol_negative_range() {
        assert_eq!(byte_from_symbol(127), 127);
        assert_eq!(byte_from_symbol(128), -128);
        assert_eq!(byte_from_symbol(200), -56);
        assert_eq!(byte_from_symbol(250), -6);
    }

    #[test]
    fn test_clamp_channel() {
        assert_eq!(clamp_channel(0), 0);
        assert_eq!(clamp_channel(250), 250);
        assert_eq!(clamp_channel(251), 250);
        assert_eq!(clamp_channel(255), 250);
    }
}
