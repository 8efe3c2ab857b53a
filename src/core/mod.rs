//! Field arithmetic and pixel primitives shared by every other module.

pub mod image;
pub mod modular;
pub mod pixel;

/// Size of the prime field GF(q). The largest prime that fits a byte.
pub const PRIME_FIELD: i64 = 251;

/// Channel values above this are clamped before encoding or averaging.
pub const CLAMP_CEILING: u8 = 250;

/// Coefficients are drawn as `floor_mod(r, COEFFICIENT_SPAN) + 1`, i.e. from `[1, 249]`.
pub const COEFFICIENT_SPAN: i64 = 249;
