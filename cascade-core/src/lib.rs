// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core of the Cascade push-based pipeline.
//!
//! A pipeline is a linear chain of [`Stage`]s. A driver pushes units into the
//! head; each stage transforms them and pushes zero or more units into its
//! single successor; the terminal stage performs a side effect. Everything runs
//! synchronously inside the caller's `push`, and `finalize` flushes buffered
//! input from head to tail exactly once.

pub mod chain;
pub mod error;
mod logging;
pub mod stage;

pub use self::chain::{chain, factory, Chain, ChainBuilder, StageFactory};
pub use self::error::{CascadeError, Operation, Result, ResultExt};
pub use self::stage::{Downstream, Stage, StageCell, StageState};
