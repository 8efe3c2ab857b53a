//! High level sharing session.
//!
//! [`SecretSharingEngine`] owns the scheme configuration, the codec, the secret
//! image and the shares produced from it. A typical session:
//!
//! 1. load a secret with [`SecretSharingEngine::load_secret`];
//! 2. [`create_shares`](SecretSharingEngine::create_shares);
//! 3. hand any `k` shares to [`decrypt_secret`](SecretSharingEngine::decrypt_secret).
//!
//! Shares or images may also be halved with
//! [`downscale`](SecretSharingEngine::downscale) and compared with
//! [`mean_average_error`](SecretSharingEngine::mean_average_error).

extern crate alloc;
use alloc::vec::Vec;
use zeroize::Zeroize;

use crate::codec::{BmpCodec, ImageCodec};
use crate::config::SchemeConfig;
use crate::core::image::PixelImage;
use crate::entropy::{EntropySource, SeededSource};
use crate::metrics::{self, MetricError};
use crate::mpc::params::SharingParameters;
use crate::mpc::reconstruct::{self, Reconstruction};
use crate::mpc::share::Share;
use crate::mpc::split;
use crate::mpc::MpcError;
use crate::transform::downscale;

/// Bits per byte of a source indistinguishable from uniform.
const FULL_ENTROPY: f64 = 8.0;

/// A (k, n) sharing session over one secret image.
pub struct SecretSharingEngine<C = BmpCodec> {
    config: SchemeConfig,
    codec: C,
    secret: Option<PixelImage>,
    shares: Vec<Share>,
}

impl SecretSharingEngine<BmpCodec> {
    /// Creates an engine using the BMP codec.
    pub fn new(config: SchemeConfig) -> Result<Self, MpcError> {
        Self::with_codec(config, BmpCodec)
    }
}

impl<C: ImageCodec> SecretSharingEngine<C> {
    /// Creates an engine with a custom codec. Fails fast on an invalid (k, n).
    pub fn with_codec(config: SchemeConfig, codec: C) -> Result<Self, MpcError> {
        config.validate()?;
        if config.threshold == 1 {
            log::warn!("Threshold k=1 makes every share a copy of the clamped secret");
        }
        Ok(Self {
            config,
            codec,
            secret: None,
            shares: Vec::new(),
        })
    }

    pub fn config(&self) -> &SchemeConfig {
        &self.config
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Replaces the secret image. Previously produced shares are discarded.
    pub fn load_secret(&mut self, secret: PixelImage) {
        if let Some(old) = self.secret.as_mut() {
            old.zeroize();
        }
        self.secret = Some(secret);
        self.shares.clear();
    }

    pub fn secret(&self) -> Option<&PixelImage> {
        self.secret.as_ref()
    }

    /// Splits the secret into `n` shares using a generator seeded from the
    /// configured seed, or from the operating system when none is set.
    pub fn create_shares(&mut self) -> Result<&[Share], MpcError> {
        let seed = match self.config.seed {
            Some(seed) => seed,
            None => Self::os_seed()?,
        };
        let mut rng = SeededSource::new(seed);
        self.create_shares_with(&mut rng)
    }

    #[cfg(feature = "std")]
    fn os_seed() -> Result<u64, MpcError> {
        Ok(crate::entropy::OsSource::new().seed()?)
    }

    #[cfg(not(feature = "std"))]
    fn os_seed() -> Result<u64, MpcError> {
        Err(MpcError::Entropy(crate::entropy::EntropyError::InitFailed))
    }

    /// Splits the secret into `n` shares drawing coefficients and keys from `rng`.
    pub fn create_shares_with<R: EntropySource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&[Share], MpcError> {
        let secret = self.secret.as_ref().ok_or(MpcError::MissingSecret)?;
        let params = SharingParameters::generate(
            secret,
            self.config.threshold,
            self.config.share_count,
            rng,
        )?;

        log::info!(
            "Creating {} shares (k={}, q={}, blocks={}) with {} ({:.1} bits/byte)",
            self.config.share_count,
            self.config.threshold,
            params.prime(),
            params.block_count(),
            rng.name(),
            rng.entropy_estimate()
        );
        if rng.entropy_estimate() < FULL_ENTROPY {
            log::warn!("Entropy source {} is below full entropy", rng.name());
        }
        let clamped = split::clamped_channels(secret);
        if clamped > 0 {
            log::debug!("{} channel values above the clamp ceiling will not round-trip", clamped);
        }

        self.shares = split::split_image(secret, &params)?;
        Ok(&self.shares)
    }

    /// Shares produced by the last successful [`create_shares`](Self::create_shares).
    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    /// Reconstructs a secret from at least `k` shares.
    pub fn decrypt_secret(&self, shares: &[Share]) -> Result<Reconstruction, MpcError> {
        log::debug!(
            "Reconstructing from keys {:?}",
            shares.iter().map(Share::key).collect::<Vec<_>>()
        );
        reconstruct::reconstruct_secret(shares, self.config.threshold as usize, &self.codec)
    }

    /// Halves an image with the 2x2 block average.
    pub fn downscale(&self, image: &PixelImage) -> PixelImage {
        downscale::downscale(image)
    }

    /// Downscaled copies of the current shares, keys preserved.
    pub fn downscale_shares(&self) -> Vec<Share> {
        self.shares.iter().map(Share::downscale).collect()
    }

    /// Error metric between two images using the configured window.
    pub fn mean_average_error(&self, a: &PixelImage, b: &PixelImage) -> Result<u64, MetricError> {
        metrics::mean_average_error(a, b, &self.codec, self.config.metric_window)
    }
}

impl<C> Drop for SecretSharingEngine<C> {
    fn drop(&mut self) {
        if let Some(secret) = self.secret.as_mut() {
            secret.zeroize();
        }
    }
}
