//! Random sources for share generation.
//!
//! Coefficients and share keys are drawn from signed 32-bit integers reduced into
//! the required ranges with `floor_mod`, so a source only has to deliver
//! uniformly distributed bytes.
//!
//! # Sources
//! - `seeded`: deterministic ChaCha-based generator, seedable from a `u64`.
//! - `os`: operating-system randomness (requires `std`).
//! - `custom`: caller-supplied byte buffer, mostly for scripted tests.

pub mod custom;
#[cfg(feature = "std")]
pub mod os;
pub mod seeded;

use core::fmt;

pub use custom::CustomSource;
#[cfg(feature = "std")]
pub use os::OsSource;
pub use seeded::SeededSource;

/// Error types for entropy collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// Source initialization failed.
    InitFailed,
    /// Failed to collect the requested bytes.
    CollectionFailed,
    /// Source is exhausted (e.g., fixed buffer).
    Exhausted,
}

impl fmt::Display for EntropyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntropyError::InitFailed => write!(f, "entropy source initialization failed"),
            EntropyError::CollectionFailed => write!(f, "entropy collection failed"),
            EntropyError::Exhausted => write!(f, "entropy source exhausted"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EntropyError {}

/// A trait for entropy sources.
pub trait EntropySource {
    /// Returns a unique identifier for the source.
    fn name(&self) -> &'static str;

    /// Fills `dest` with random bytes from the source.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;

    /// Returns the estimated entropy per byte (in bits, 0.0-8.0).
    fn entropy_estimate(&self) -> f64;

    /// Draws one signed 32-bit integer (big-endian over four filled bytes).
    fn next_i32(&mut self) -> Result<i32, EntropyError> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf)?;
        Ok(i32::from_be_bytes(buf))
    }
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill(dest)
    }

    fn entropy_estimate(&self) -> f64 {
        (**self).entropy_estimate()
    }

    fn next_i32(&mut self) -> Result<i32, EntropyError> {
        (**self).next_i32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_i32_big_endian() {
        let mut source = CustomSource::new();
        source.add_bytes(&[0xFF, 0xFF, 0xFF, 0xFE, 0x00, 0x00, 0x01, 0x00]);
        assert_eq!(source.next_i32(), Ok(-2));
        assert_eq!(source.next_i32(), Ok(256));
        assert_eq!(source.next_i32(), Err(EntropyError::Exhausted));
    }

    #[test]
    fn test_entropy_estimates_in_range() {
        let seeded = SeededSource::new(9);
        assert_eq!(seeded.entropy_estimate(), 8.0);

        let custom = CustomSource::new();
        assert!(custom.entropy_estimate() > 0.0 && custom.entropy_estimate() < 8.0);

        #[cfg(feature = "std")]
        assert_eq!(OsSource::new().entropy_estimate(), 8.0);

        let mut inner = SeededSource::new(9);
        let by_ref: &mut SeededSource = &mut inner;
        assert_eq!(EntropySource::entropy_estimate(&by_ref), 8.0);
    }
}
