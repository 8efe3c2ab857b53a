//! Share definition.
//!
//! A share is the image of the secret's block polynomials evaluated at one public
//! x-coordinate (the key).
//!
//! # Security
//! - Implements `Zeroize` and `ZeroizeOnDrop` to wipe pixel data from memory.
//! - `Debug` redacts the pixels and prints a BLAKE3 fingerprint instead.

extern crate alloc;
use alloc::string::String;
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::MpcError;
use crate::core::image::PixelImage;
use crate::core::PRIME_FIELD;
use crate::transform::downscale;

/// Length of [`Share::fingerprint`] in bytes (before hex encoding).
const FINGERPRINT_LEN: usize = 8;

/// One share of a secret image.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Share {
    /// The x-coordinate in `[0, 251)`. Public.
    #[zeroize(skip)]
    key: u8,

    /// Share pixels, same dimensions as the secret.
    image: PixelImage,
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("key", &self.key)
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .field("fingerprint", &self.fingerprint())
            .field("image", &"***SENSITIVE***")
            .finish()
    }
}

impl Share {
    /// Creates a share with validation.
    ///
    /// # Returns
    /// * `Err(MpcError::InvalidShareKey)` if `key >= 251`.
    /// * `Err(MpcError::EmptyImage)` if the image has no pixels.
    pub fn new(key: u8, image: PixelImage) -> Result<Self, MpcError> {
        if key as i64 >= PRIME_FIELD {
            return Err(MpcError::InvalidShareKey);
        }
        if image.is_empty() {
            return Err(MpcError::EmptyImage);
        }
        Ok(Self { key, image })
    }

    /// The public x-coordinate.
    pub fn key(&self) -> u8 {
        self.key
    }

    pub fn image(&self) -> &PixelImage {
        &self.image
    }

    /// Halves the share image with the 2x2 block average, keeping the key.
    pub fn downscale(&self) -> Share {
        Share {
            key: self.key,
            image: downscale::downscale(&self.image),
        }
    }

    /// Short hex digest of key and pixels, for telling shares apart without
    /// exposing them.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&[self.key]);
        hasher.update(&(self.image.width() as u64).to_le_bytes());
        hasher.update(&(self.image.height() as u64).to_le_bytes());
        for pixel in self.image.pixels() {
            hasher.update(&pixel.to_be_bytes());
        }
        let digest = hasher.finalize();
        hex::encode(&digest.as_bytes()[..FINGERPRINT_LEN])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pixel::pack;

    fn image() -> PixelImage {
        PixelImage::from_fn(2, 2, |r, c| pack([250, (r * 2 + c) as u8, 7, 0xEE]))
    }

    #[test]
    fn test_share_creation() {
        let s = Share::new(10, image()).unwrap();
        assert_eq!(s.key(), 10);
        assert_eq!(s.image().dimensions(), (2, 2));
    }

    #[test]
    fn test_share_validation() {
        assert_eq!(Share::new(251, image()), Err(MpcError::InvalidShareKey));
        assert_eq!(Share::new(1, PixelImage::new(0, 0)), Err(MpcError::EmptyImage));
        assert!(Share::new(0, image()).is_ok());
    }

    #[test]
    fn test_fingerprint_distinguishes_key_and_pixels() {
        let a = Share::new(3, image()).unwrap();
        let b = Share::new(4, image()).unwrap();
        let c = Share::new(3, PixelImage::new(2, 2)).unwrap();
        assert_eq!(a.fingerprint().len(), FINGERPRINT_LEN * 2);
        assert_eq!(a.fingerprint(), a.clone().fingerprint());
        assert_ne!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn test_debug_redaction() {
        let s = Share::new(5, image()).unwrap();
        let debug_str = alloc::format!("{:?}", s);
        assert!(debug_str.contains("key: 5"));
        assert!(debug_str.contains("***SENSITIVE***"));
        assert!(debug_str.contains(&s.fingerprint()));
    }

    #[test]
    fn test_downscale_keeps_key() {
        let s = Share::new(9, image()).unwrap();
        let small = s.downscale();
        assert_eq!(small.key(), 9);
        assert_eq!(small.image().dimensions(), (1, 1));
    }
}
