// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::{CascadeError, Result};

/// Bytes requested from the source per read unless configured otherwise.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// How a driver reads from its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Upper bound on the bytes requested per read
    pub chunk_size: usize,
}

impl ReadOptions {
    #[must_use]
    pub const fn with_chunk_size(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    /// # Errors
    /// [`CascadeError::ConfigurationError`] if `chunk_size` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(CascadeError::configuration("chunk size must be positive"));
        }
        Ok(())
    }
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self::with_chunk_size(DEFAULT_CHUNK_SIZE)
    }
}

/// What a driver fed into a chain before finalizing it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriveReport {
    /// Units pushed into the head stage
    pub chunks: usize,
    /// Raw bytes read from the source; zero for sources that are not byte oriented
    pub bytes: usize,
}
