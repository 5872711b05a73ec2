// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Chain construction.
//!
//! [`chain`] takes one factory per stage, in head-to-tail order, and wires
//! them back to front: the terminal stage is instantiated and primed first,
//! then every predecessor is built around the already-primed successor and
//! primed in turn. The caller only ever holds the head.
//!
//! ```
//! use cascade_core::{chain, factory, Chain, Downstream, Result, Stage};
//!
//! struct Upper;
//!
//! impl Stage<String> for Upper {
//!     fn name(&self) -> &str {
//!         "upper"
//!     }
//!
//!     fn on_push(&mut self, unit: String, downstream: &mut Downstream<'_, String>) -> Result<()> {
//!         downstream.emit(unit.to_uppercase())
//!     }
//! }
//!
//! struct Discard;
//!
//! impl Stage<String> for Discard {
//!     fn name(&self) -> &str {
//!         "discard"
//!     }
//!
//!     fn on_push(&mut self, _unit: String, _downstream: &mut Downstream<'_, String>) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let mut head: Chain<String> = chain(vec![factory(|| Upper), factory(|| Discard)])?;
//! head.push("hello".to_string())?;
//! head.finalize()?;
//! assert!(head.is_finished());
//! # Ok(())
//! # }
//! ```

use core::fmt;

use crate::error::{CascadeError, Result};
use crate::stage::{Stage, StageCell, StageState};
use crate::{debug, warn};

/// Deferred constructor for one stage of a chain.
pub type StageFactory<T> = Box<dyn FnOnce() -> Box<dyn Stage<T>> + Send>;

/// Box a stage constructor into a [`StageFactory`].
pub fn factory<T, S, F>(make: F) -> StageFactory<T>
where
    F: FnOnce() -> S + Send + 'static,
    S: Stage<T> + 'static,
{
    Box::new(move || Box::new(make()) as Box<dyn Stage<T>>)
}

/// Build a chain from stage factories given in head-to-tail order.
///
/// # Errors
/// [`CascadeError::ConfigurationError`] if `factories` is empty (nothing is
/// constructed), or the first error returned while priming a stage.
pub fn chain<T>(factories: Vec<StageFactory<T>>) -> Result<Chain<T>> {
    let mut factories = factories.into_iter().rev();
    let Some(make_terminal) = factories.next() else {
        return Err(CascadeError::configuration(
            "a chain needs at least one stage",
        ));
    };

    let mut cell = StageCell::new(make_terminal(), None);
    cell.prime()?;

    for make in factories {
        let mut predecessor = StageCell::new(make(), Some(cell));
        predecessor.prime()?;
        cell = predecessor;
    }

    let head = Chain { head: cell };
    debug!("built chain [{}]", head.stage_names().join(" -> "));
    Ok(head)
}

/// Fluent alternative to [`chain`].
pub struct ChainBuilder<T> {
    factories: Vec<StageFactory<T>>,
}

impl<T> ChainBuilder<T> {
    /// Start an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    /// Append a stage after the ones added so far.
    #[must_use]
    pub fn stage<S, F>(mut self, make: F) -> Self
    where
        F: FnOnce() -> S + Send + 'static,
        S: Stage<T> + 'static,
    {
        self.factories.push(factory(make));
        self
    }

    /// Number of stages added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns `true` if no stage has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Wire and prime the stages.
    ///
    /// # Errors
    /// See [`chain`].
    pub fn build(self) -> Result<Chain<T>> {
        chain(self.factories)
    }
}

impl<T> Default for ChainBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A built pipeline, accessed through its head stage.
///
/// The chain owns every stage; dropping it releases them all together.
pub struct Chain<T> {
    head: StageCell<T>,
}

impl<T> Chain<T> {
    /// Push one unit into the head stage.
    ///
    /// # Errors
    /// See [`StageCell::push`]. After an error the chain is unusable.
    pub fn push(&mut self, unit: T) -> Result<()> {
        self.head.push(unit)
    }

    /// Signal end of input. Flushes every stage, head first.
    ///
    /// # Errors
    /// See [`StageCell::finalize`].
    pub fn finalize(&mut self) -> Result<()> {
        self.head.finalize()
    }

    /// State of the head stage.
    #[must_use]
    pub const fn state(&self) -> StageState {
        self.head.state()
    }

    /// Returns `true` once end-of-stream has propagated through the chain.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.head.state() == StageState::Finished
    }

    /// Number of stages in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.head.depth()
    }

    /// Always `false`: a chain holds at least one stage.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Stage names, head to tail.
    #[must_use]
    pub fn stage_names(&self) -> Vec<&str> {
        self.head.cells().map(StageCell::name).collect()
    }

    /// States of every stage, head to tail.
    #[must_use]
    pub fn states(&self) -> Vec<StageState> {
        self.head.cells().map(StageCell::state).collect()
    }

    /// The head cell.
    #[must_use]
    pub const fn head(&self) -> &StageCell<T> {
        &self.head
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        if self.head.state() == StageState::Running {
            warn!(
                "chain [{}] dropped without being finalized; buffered input is lost",
                self.stage_names().join(" -> ")
            );
        }
    }
}

impl<T> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("stages", &self.stage_names())
            .field("state", &self.state())
            .finish()
    }
}
