//! Operating-system randomness.

use rand_core::{OsRng, RngCore};

use super::{EntropyError, EntropySource};

/// Reads from the OS CSPRNG (`getrandom`).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSource;

impl OsSource {
    pub fn new() -> Self {
        Self
    }

    /// Draws a fresh 64-bit seed, e.g. for a [`super::SeededSource`].
    pub fn seed(&mut self) -> Result<u64, EntropyError> {
        let mut buf = [0u8; 8];
        self.fill(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }
}

impl EntropySource for OsSource {
    fn name(&self) -> &'static str {
        "OsRng"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|_| EntropyError::CollectionFailed)
    }

    fn entropy_estimate(&self) -> f64 {
        8.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_source_fill() {
        let mut source = OsSource::new();
        let mut buf = [0u8; 32];
        source.fill(&mut buf).expect("OsRng failed");
        assert!(buf.iter().any(|&x| x != 0), "OsRng produced all zeros");
    }
}
