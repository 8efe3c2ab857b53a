//! Caller-supplied entropy.
//!
//! Replays bytes handed in by the caller. Useful to script exact coefficient and
//! key draws, or to feed randomness gathered elsewhere.

extern crate alloc;
use alloc::collections::VecDeque;
use super::{EntropyError, EntropySource};

/// Source that buffers user-injected entropy.
#[derive(Debug, Clone, Default)]
pub struct CustomSource {
    buffer: VecDeque<u8>,
}

impl CustomSource {
    /// Creates a new empty CustomSource.
    pub fn new() -> Self {
        Self { buffer: VecDeque::new() }
    }

    /// Add entropy bytes to the pool.
    pub fn add_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend(bytes.iter().copied());
    }

    /// Queues a signed integer so that the next [`EntropySource::next_i32`] returns it.
    pub fn push_i32(&mut self, value: i32) {
        self.add_bytes(&value.to_be_bytes());
    }

    /// Bytes still available.
    pub fn remaining(&self) -> usize {
        self.buffer.len()
    }
}

impl EntropySource for CustomSource {
    fn name(&self) -> &'static str {
        "CustomInput"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if self.buffer.len() < dest.len() {
            return Err(EntropyError::Exhausted);
        }

        let n = dest.len();
        for (slot, byte) in dest.iter_mut().zip(self.buffer.drain(..n)) {
            *slot = byte;
        }
        Ok(())
    }

    fn entropy_estimate(&self) -> f64 {
        // Quality of injected bytes is unknown.
        2.0
    }
}
