// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pass-through stages that record what happens to them.

use cascade_core::{CascadeError, Downstream, Result, Stage};
use parking_lot::Mutex;
use std::fmt::Debug;
use std::sync::Arc;

/// Something a [`Probe`] observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeEvent {
    /// A unit arrived, rendered with `{:?}`
    Push { stage: String, unit: String },
    /// End of stream arrived
    Finalize { stage: String },
}

impl ProbeEvent {
    pub fn push(stage: &str, unit: impl Debug) -> Self {
        Self::Push {
            stage: stage.to_string(),
            unit: format!("{unit:?}"),
        }
    }

    pub fn finalize(stage: &str) -> Self {
        Self::Finalize {
            stage: stage.to_string(),
        }
    }
}

/// Shared, ordered record of probe events across a whole chain.
#[derive(Debug, Clone, Default)]
pub struct ProbeLog {
    events: Arc<Mutex<Vec<ProbeEvent>>>,
}

impl ProbeLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A probe stage named `name` writing into this log.
    #[must_use]
    pub fn probe(&self, name: &str) -> Probe {
        Probe {
            name: name.to_string(),
            log: self.clone(),
        }
    }

    #[must_use]
    pub fn events(&self) -> Vec<ProbeEvent> {
        self.events.lock().clone()
    }

    /// Names of the stages that saw end of stream, in the order they saw it.
    #[must_use]
    pub fn finalized(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                ProbeEvent::Finalize { stage } => Some(stage.clone()),
                ProbeEvent::Push { .. } => None,
            })
            .collect()
    }

    fn record(&self, event: ProbeEvent) {
        self.events.lock().push(event);
    }
}

/// Forwards every unit unchanged and logs pushes and finalization.
///
/// When placed last in a chain it simply records and drops units.
#[derive(Debug)]
pub struct Probe {
    name: String,
    log: ProbeLog,
}

impl<T: Debug + Send> Stage<T> for Probe {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_push(&mut self, unit: T, downstream: &mut Downstream<'_, T>) -> Result<()> {
        self.log.record(ProbeEvent::push(&self.name, &unit));
        if downstream.is_terminal() {
            return Ok(());
        }
        downstream.emit(unit)
    }

    fn on_finalize(&mut self, _downstream: &mut Downstream<'_, T>) -> Result<()> {
        self.log.record(ProbeEvent::finalize(&self.name));
        Ok(())
    }
}

/// Forwards units until the `fail_at`-th push (zero-based), which fails with
/// a [`CascadeError::TransformationError`].
#[derive(Debug)]
pub struct FailingStage {
    fail_at: usize,
    count: usize,
}

impl FailingStage {
    #[must_use]
    pub const fn new(fail_at: usize) -> Self {
        Self { fail_at, count: 0 }
    }
}

impl<T: Send> Stage<T> for FailingStage {
    fn name(&self) -> &str {
        "failing"
    }

    fn on_push(&mut self, unit: T, downstream: &mut Downstream<'_, T>) -> Result<()> {
        let position = self.count;
        self.count += 1;
        if position == self.fail_at {
            return Err(CascadeError::transformation(
                "failing",
                format!("injected failure at push {position}"),
            ));
        }
        downstream.emit(unit)
    }
}
