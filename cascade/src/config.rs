// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::{CascadeError, Result};
use cascade_exec::{ReadOptions, DEFAULT_CHUNK_SIZE};
use cascade_stages::DEFAULT_DELIMITER;

/// Settings for the line-numbering pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Separator between lines; never part of an emitted line
    pub delimiter: String,
    /// Number given to the first line
    pub start: usize,
    /// Bytes requested from the source per read
    pub chunk_size: usize,
}

impl PipelineConfig {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    #[must_use]
    pub const fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    #[must_use]
    pub const fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Reject settings no pipeline could run with.
    ///
    /// # Errors
    /// [`CascadeError::ConfigurationError`] for an empty delimiter or a zero
    /// chunk size.
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(CascadeError::configuration("delimiter must not be empty"));
        }
        self.read_options().validate()
    }

    #[must_use]
    pub const fn read_options(&self) -> ReadOptions {
        ReadOptions::with_chunk_size(self.chunk_size)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            start: 0,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
