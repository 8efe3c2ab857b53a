//! Configuration for the sharing scheme.
//!
//! Populated by the host application (CLI/GUI) and handed to
//! [`crate::engine::SecretSharingEngine`].

use crate::core::PRIME_FIELD;
use crate::mpc::MpcError;

/// Which part of the encoded buffers the error metric walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricWindow {
    /// Pixel payload only, every 4-byte stride after the header.
    #[default]
    PixelData,
    /// Whole encoded buffer from offset 0, header included, stopping one stride
    /// short of the end. Matches figures produced by earlier tooling.
    WholeBuffer,
}

/// Main configuration structure for a sharing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeConfig {
    /// Minimum number of shares needed to reconstruct (k).
    pub threshold: u8,

    /// Total number of shares to generate (n).
    pub share_count: u8,

    /// Seed for the coefficient/key generator.
    /// If None, a fresh seed is drawn from the operating system.
    pub seed: Option<u64>,

    /// Buffer window used by the mean average error metric.
    pub metric_window: MetricWindow,
}

impl Default for SchemeConfig {
    fn default() -> Self {
        Self {
            threshold: 2,
            share_count: 5,
            seed: None,
            metric_window: MetricWindow::default(),
        }
    }
}

impl SchemeConfig {
    /// A (k, n) configuration with default seeding and metric window.
    pub fn new(threshold: u8, share_count: u8) -> Self {
        Self {
            threshold,
            share_count,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_metric_window(mut self, window: MetricWindow) -> Self {
        self.metric_window = window;
        self
    }

    /// Checks `1 <= k <= n` and that `n` distinct non-zero keys exist in GF(q).
    pub fn validate(&self) -> Result<(), MpcError> {
        if self.share_count == 0 || self.share_count as i64 >= PRIME_FIELD {
            return Err(MpcError::InvalidShareCount);
        }
        if self.threshold == 0 || self.threshold > self.share_count {
            return Err(MpcError::InvalidThreshold);
        }
        Ok(())
    }
}
