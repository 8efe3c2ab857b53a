//! Shamir's Secret Sharing for raster images.
//!
//! A secret ARGB image is split into `n` share images such that any `k` of them
//! reconstruct it, while fewer reveal nothing about a pixel beyond its 2x2 block
//! structure. Arithmetic happens over the prime field GF(251), one symbol per
//! channel byte.
//!
//! The crate also provides a 2x2 block-averaging [`transform::downscale`].
//! Because every pixel of a block shares one polynomial, downscaling the shares
//! and then reconstructing matches reconstructing first and downscaling
//! afterwards whenever the block averages are exact (uniform 2x2 blocks with no
//! channel above the clamp ceiling). Otherwise the two paths agree only
//! approximately, which [`metrics::mean_average_error`] quantifies.
//!
//! # Layout
//! - `core`: modular arithmetic, packed-pixel conversion, the pixel grid type.
//! - `codec`: the image codec seam and a 32 bpp BMP implementation.
//! - `entropy`: random sources used to draw coefficients and share keys.
//! - `mpc`: shares, sharing parameters, share generation and reconstruction.
//! - `transform`: the downscale transform.
//! - `metrics`: pixel-domain error metric.
//! - `engine`: [`engine::SecretSharingEngine`], the high level entry point.
//! - `storage`: atomic file persistence (requires `std`).

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod codec;
pub mod config;
pub mod core;
pub mod engine;
pub mod entropy;
pub mod metrics;
pub mod mpc;
#[cfg(feature = "std")]
pub mod storage;
pub mod transform;

pub use crate::codec::{BmpCodec, CodecError, ImageCodec};
pub use crate::config::SchemeConfig;
pub use crate::core::image::PixelImage;
pub use crate::engine::SecretSharingEngine;
pub use crate::mpc::{reconstruct::Reconstruction, share::Share, MpcError};
