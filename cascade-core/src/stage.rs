// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stage abstraction and lifecycle enforcement.
//!
//! A [`Stage`] only describes *what* a step of the pipeline does with a unit.
//! The [`StageCell`] that owns it decides *whether* the step may run: it tracks
//! the lifecycle state, owns the single downstream cell and turns every
//! out-of-order call into a [`CascadeError::InvalidState`].
//!
//! ```text
//!   Created --prime--> Primed --push--> Running --finalize--> Finished
//!                         |                |
//!                         +--- error ------+-----------------> Failed
//! ```

use core::fmt;
use std::iter;

use crate::error::{CascadeError, Operation, Result};
use crate::{debug, trace};

/// Lifecycle state of a stage inside a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageState {
    /// Constructed but not yet ready for input
    Created,
    /// Ready to accept its first unit
    Primed,
    /// Has accepted at least one unit
    Running,
    /// Finalized; accepts nothing further
    Finished,
    /// A push or finalize failed; the stage cannot be resumed
    Failed,
}

impl StageState {
    /// Returns `true` if the stage may receive a unit in this state.
    #[must_use]
    pub const fn accepts_input(self) -> bool {
        matches!(self, Self::Primed | Self::Running)
    }
}

impl fmt::Display for StageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "not primed"),
            Self::Primed => write!(f, "primed"),
            Self::Running => write!(f, "running"),
            Self::Finished => write!(f, "finished"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// One step of a push-based pipeline.
///
/// Implementors keep whatever state they need between calls (partial input,
/// counters) as fields, and hand fully formed units on through the
/// [`Downstream`] they are given. They never see their successor directly.
pub trait Stage<T>: Send {
    /// Label used in errors and log output.
    fn name(&self) -> &str;

    /// One-time preparation run by the chain builder before the first push.
    ///
    /// # Errors
    /// Returns an error if the stage cannot operate with its current parameters.
    fn prime(&mut self) -> Result<()> {
        Ok(())
    }

    /// Consume one unit, emitting zero or more units downstream.
    ///
    /// # Errors
    /// Returns an error if the transformation fails or a downstream stage fails.
    fn on_push(&mut self, unit: T, downstream: &mut Downstream<'_, T>) -> Result<()>;

    /// Flush buffered partial input. Called exactly once, before the
    /// end-of-stream signal moves on to the next stage.
    ///
    /// # Errors
    /// Returns an error if flushing fails.
    fn on_finalize(&mut self, downstream: &mut Downstream<'_, T>) -> Result<()> {
        let _ = downstream;
        Ok(())
    }
}

/// Handle through which a stage emits units to its successor.
pub struct Downstream<'a, T> {
    from: &'a str,
    target: Option<&'a mut StageCell<T>>,
}

impl<'a, T> Downstream<'a, T> {
    fn new(from: &'a str, target: Option<&'a mut StageCell<T>>) -> Self {
        Self { from, target }
    }

    /// Push `unit` into the next stage and run its cascade to completion.
    ///
    /// # Errors
    /// Returns [`CascadeError::ConfigurationError`] when called from the
    /// terminal stage, otherwise whatever the downstream push returns.
    pub fn emit(&mut self, unit: T) -> Result<()> {
        match self.target.as_deref_mut() {
            Some(next) => next.push(unit),
            None => Err(CascadeError::configuration(format!(
                "stage '{}' is terminal and has no downstream to emit to",
                self.from
            ))),
        }
    }

    /// Returns `true` if there is no stage after this one.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.target.is_none()
    }
}

/// Lifecycle node owning one stage and, unless terminal, its successor.
pub struct StageCell<T> {
    name: String,
    state: StageState,
    stage: Box<dyn Stage<T>>,
    downstream: Option<Box<StageCell<T>>>,
}

impl<T> StageCell<T> {
    /// Wrap `stage`, linking it to `downstream`. The cell starts out
    /// [`StageState::Created`] and must be primed before use.
    pub fn new(stage: Box<dyn Stage<T>>, downstream: Option<StageCell<T>>) -> Self {
        Self {
            name: stage.name().to_owned(),
            state: StageState::Created,
            stage,
            downstream: downstream.map(Box::new),
        }
    }

    /// Name of the wrapped stage.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> StageState {
        self.state
    }

    /// The successor cell, absent for the terminal stage.
    #[must_use]
    pub fn downstream(&self) -> Option<&StageCell<T>> {
        self.downstream.as_deref()
    }

    /// Iterate over this cell and every cell after it, head to tail.
    pub fn cells(&self) -> impl Iterator<Item = &StageCell<T>> {
        iter::successors(Some(self), |cell| cell.downstream())
    }

    /// Number of stages from this one to the terminal stage inclusive.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.cells().count()
    }

    /// Make the stage ready for input.
    ///
    /// # Errors
    /// [`CascadeError::InvalidState`] unless the cell is freshly created, or the
    /// stage's own priming error.
    pub fn prime(&mut self) -> Result<()> {
        if self.state != StageState::Created {
            return Err(CascadeError::invalid_state(
                &self.name,
                Operation::Prime,
                self.state,
            ));
        }

        if let Err(err) = self.stage.prime() {
            self.state = StageState::Failed;
            return Err(err);
        }

        self.state = StageState::Primed;
        trace!("stage '{}' primed", self.name);
        Ok(())
    }

    /// Deliver one unit. Runs the whole downstream cascade before returning.
    ///
    /// # Errors
    /// [`CascadeError::InvalidState`] if the stage is not primed, finished or
    /// failed (nothing is emitted), otherwise the first error raised by this
    /// stage or any stage after it. A failed push leaves the cell
    /// [`StageState::Failed`].
    pub fn push(&mut self, unit: T) -> Result<()> {
        match self.state {
            StageState::Primed => self.state = StageState::Running,
            StageState::Running => {}
            state => {
                return Err(CascadeError::invalid_state(&self.name, Operation::Push, state));
            }
        }

        let mut downstream = Downstream::new(&self.name, self.downstream.as_deref_mut());
        let result = self.stage.on_push(unit, &mut downstream);

        if result.is_err() {
            self.state = StageState::Failed;
        }
        result
    }

    /// Flush this stage, then propagate end-of-stream to every later stage.
    ///
    /// Calling it again on a finished cell is a no-op.
    ///
    /// # Errors
    /// [`CascadeError::InvalidState`] if the cell was never primed or has
    /// failed, otherwise the first error raised while flushing.
    pub fn finalize(&mut self) -> Result<()> {
        match self.state {
            state if state.accepts_input() => {}
            StageState::Finished => {
                debug!("stage '{}' already finalized, ignoring", self.name);
                return Ok(());
            }
            state => {
                return Err(CascadeError::invalid_state(
                    &self.name,
                    Operation::Finalize,
                    state,
                ));
            }
        }

        let flushed = {
            let mut downstream = Downstream::new(&self.name, self.downstream.as_deref_mut());
            self.stage.on_finalize(&mut downstream)
        };
        let result = flushed.and_then(|()| match self.downstream.as_deref_mut() {
            Some(next) => next.finalize(),
            None => Ok(()),
        });

        self.state = if result.is_ok() {
            StageState::Finished
        } else {
            StageState::Failed
        };
        trace!("stage '{}' is now {}", self.name, self.state);
        result
    }
}

impl<T> fmt::Debug for StageCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StageCell")
            .field("name", &self.name)
            .field("state", &self.state)
            .field("downstream", &self.downstream)
            .finish()
    }
}
