// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::{CascadeError, Downstream, Result, ResultExt, Stage};

/// Applies a fallible closure to every unit and emits the result.
///
/// A closure error aborts the push and comes back to the driver as a
/// [`CascadeError::TransformationError`] carrying this stage's name.
pub struct Map<F> {
    name: String,
    transform: F,
}

impl<F> Map<F> {
    pub fn new(transform: F) -> Self {
        Self::named("map", transform)
    }

    /// Give the stage a name of its own, used in errors and logs.
    pub fn named(name: impl Into<String>, transform: F) -> Self {
        Self {
            name: name.into(),
            transform,
        }
    }
}

impl<T, F, E> Stage<T> for Map<F>
where
    F: FnMut(T) -> std::result::Result<T, E> + Send,
    E: std::error::Error + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn on_push(&mut self, unit: T, downstream: &mut Downstream<'_, T>) -> Result<()> {
        let mapped = (self.transform)(unit)
            .map_err(CascadeError::user_error)
            .in_stage(&self.name)?;
        downstream.emit(mapped)
    }
}
