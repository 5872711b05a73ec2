// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::Result;
use cascade_stages::{Emit, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug)]
struct Recorded<T> {
    units: Vec<T>,
    flushes: usize,
}

/// Emit target that keeps every unit it receives.
///
/// Clones share the same record, so one clone can go into a stage factory
/// while the test keeps another to look at the results.
#[derive(Debug)]
pub struct RecordingEmitter<T> {
    inner: Arc<Mutex<Recorded<T>>>,
}

impl<T> RecordingEmitter<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Recorded {
                units: Vec::new(),
                flushes: 0,
            })),
        }
    }

    /// A sink stage writing into this record.
    #[must_use]
    pub fn sink(&self) -> Sink<Self> {
        Sink::new(self.clone())
    }

    /// Number of units received so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many times end of stream reached the emitter.
    #[must_use]
    pub fn flushes(&self) -> usize {
        self.inner.lock().flushes
    }
}

impl<T: Clone> RecordingEmitter<T> {
    /// Copy of everything received so far, in order.
    #[must_use]
    pub fn units(&self) -> Vec<T> {
        self.inner.lock().units.clone()
    }
}

impl<T> Clone for RecordingEmitter<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for RecordingEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Emit<T> for RecordingEmitter<T> {
    fn emit(&mut self, unit: T) -> Result<()> {
        self.inner.lock().units.push(unit);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.lock().flushes += 1;
        Ok(())
    }
}
