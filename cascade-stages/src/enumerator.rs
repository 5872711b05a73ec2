// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::{CascadeError, Downstream, Result, Stage};

/// Prefixes each unit with a running number: `"<n>: <unit>"`.
///
/// Numbering starts at zero unless set with [`Enumerator::starting_at`], and
/// the counter lives as long as the stage does.
#[derive(Debug, Clone, Default)]
pub struct Enumerator {
    next: usize,
}

impl Enumerator {
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    #[must_use]
    pub const fn starting_at(first: usize) -> Self {
        Self { next: first }
    }

    /// Number the next unit will receive.
    #[must_use]
    pub const fn next_number(&self) -> usize {
        self.next
    }
}

impl Stage<String> for Enumerator {
    fn name(&self) -> &str {
        "enumerator"
    }

    fn on_push(&mut self, unit: String, downstream: &mut Downstream<'_, String>) -> Result<()> {
        let number = self.next;
        self.next = number
            .checked_add(1)
            .ok_or_else(|| CascadeError::transformation("enumerator", "line counter overflowed"))?;
        downstream.emit(format!("{number}: {unit}"))
    }
}
