//! Sharing parameters.
//!
//! One [`SharingParameters`] bundle is drawn per sharing pass: a coefficient table
//! with `k-1` values per 2x2 block, `n` share keys and the prime field. It is
//! immutable once built and only borrowed by the encryption step, so blocks can be
//! encoded independently.

extern crate alloc;
use alloc::vec::Vec;
use zeroize::Zeroizing;

use super::MpcError;
use crate::core::image::PixelImage;
use crate::core::modular::floor_mod;
use crate::core::{COEFFICIENT_SPAN, PRIME_FIELD};
use crate::entropy::EntropySource;

/// Upper bound on key draws before giving up on a misbehaving source.
const MAX_KEY_DRAWS: usize = 1 << 16;

/// Coefficients, keys and field for one sharing pass.
pub struct SharingParameters {
    threshold: usize,
    block_count: usize,
    /// Row-major `block_count x (threshold - 1)` table, wiped on drop.
    coefficients: Zeroizing<Vec<u8>>,
    keys: Vec<u8>,
    prime: i64,
}

impl SharingParameters {
    /// Draws fresh parameters for sharing `secret` with threshold `k` into `n` shares.
    ///
    /// Each coefficient is `floor_mod(r, 249) + 1` for a random `r`, so it lies in
    /// `[1, 249]`. Each key is `floor_mod(r, 251)`; zero and repeated keys are
    /// redrawn so every key is distinct and non-zero.
    pub fn generate<R: EntropySource + ?Sized>(
        secret: &PixelImage,
        k: u8,
        n: u8,
        rng: &mut R,
    ) -> Result<Self, MpcError> {
        if n == 0 || n as i64 >= PRIME_FIELD {
            return Err(MpcError::InvalidShareCount);
        }
        if k == 0 || k > n {
            return Err(MpcError::InvalidThreshold);
        }
        if secret.is_empty() {
            return Err(MpcError::EmptyImage);
        }

        let threshold = k as usize;
        let block_count = secret.block_count();
        let table_len = block_count * (threshold - 1);

        let mut coefficients = Zeroizing::new(Vec::with_capacity(table_len));
        for _ in 0..table_len {
            let r = rng.next_i32()? as i64;
            coefficients.push((floor_mod(r, COEFFICIENT_SPAN) + 1) as u8);
        }

        let mut keys: Vec<u8> = Vec::with_capacity(n as usize);
        let mut draws = 0usize;
        while keys.len() < n as usize {
            if draws == MAX_KEY_DRAWS {
                return Err(MpcError::KeyGenerationFailed);
            }
            draws += 1;

            let key = floor_mod(rng.next_i32()? as i64, PRIME_FIELD) as u8;
            if key == 0 || keys.contains(&key) {
                log::debug!("Redrawing share key {} (zero or duplicate)", key);
                continue;
            }
            keys.push(key);
        }

        Ok(Self {
            threshold,
            block_count,
            coefficients,
            keys,
            prime: PRIME_FIELD,
        })
    }

    /// Builds parameters from an explicit table and key set.
    ///
    /// `coefficients` is row-major with `k - 1` entries per block. Keys must be
    /// below 251 and pairwise distinct.
    pub fn from_parts(
        k: u8,
        block_count: usize,
        coefficients: Vec<u8>,
        keys: Vec<u8>,
    ) -> Result<Self, MpcError> {
        if keys.is_empty() || keys.len() as i64 >= PRIME_FIELD {
            return Err(MpcError::InvalidShareCount);
        }
        if k == 0 || k as usize > keys.len() {
            return Err(MpcError::InvalidThreshold);
        }
        let threshold = k as usize;
        if coefficients.len() != block_count * (threshold - 1) {
            return Err(MpcError::CoefficientTableMismatch);
        }
        if keys.iter().any(|&key| key as i64 >= PRIME_FIELD) {
            return Err(MpcError::InvalidShareKey);
        }
        for (i, key) in keys.iter().enumerate() {
            if keys[i + 1..].contains(key) {
                return Err(MpcError::DegenerateShareSet);
            }
        }

        Ok(Self {
            threshold,
            block_count,
            coefficients: Zeroizing::new(coefficients),
            keys,
            prime: PRIME_FIELD,
        })
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn block_count(&self) -> usize {
        self.block_count
    }

    pub fn keys(&self) -> &[u8] {
        &self.keys
    }

    pub fn prime(&self) -> i64 {
        self.prime
    }

    /// The `k - 1` coefficients of block `l`, lowest degree first.
    ///
    /// # Panics
    /// Panics if `l >= block_count`.
    pub fn coefficient_row(&self, l: usize) -> &[u8] {
        let width = self.threshold - 1;
        &self.coefficients[l * width..(l + 1) * width]
    }
}
