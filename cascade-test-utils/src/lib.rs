// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for Cascade pipelines.
//!
//! This crate is meant for development and testing only, not for production code.
//!
//! # Key Types
//!
//! ## `RecordingEmitter<T>`
//!
//! An emit target that keeps what it receives, shared between the sink inside
//! the chain and the test that inspects it:
//!
//! ```rust
//! use cascade_core::ChainBuilder;
//! use cascade_stages::{Enumerator, Splitter};
//! use cascade_test_utils::RecordingEmitter;
//!
//! # fn main() -> cascade_core::Result<()> {
//! let recorded = RecordingEmitter::<String>::new();
//! let sink = recorded.sink();
//!
//! let mut head = ChainBuilder::<String>::new()
//!     .stage(Splitter::new)
//!     .stage(Enumerator::new)
//!     .stage(move || sink)
//!     .build()?;
//!
//! head.push("a\nb".to_string())?;
//! head.finalize()?;
//!
//! assert_eq!(recorded.units(), vec!["0: a", "1: b"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## `ProbeLog` and `Probe`
//!
//! Pass-through stages recording pushes and finalization order.
//!
//! ## `FailingStage`
//!
//! Injects a transformation error at a chosen push.
//!
//! # Module Organization
//!
//! - `recording` - `RecordingEmitter<T>`
//! - `probe` - `Probe`, `ProbeLog`, `ProbeEvent`, `FailingStage`
//! - `chunks` - chunk segmentation helpers

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod chunks;
pub mod probe;
pub mod recording;

pub use chunks::{chunk_every, segmentations};
pub use probe::{FailingStage, Probe, ProbeEvent, ProbeLog};
pub use recording::RecordingEmitter;

/// `lines` numbered from zero, the way the line pipeline prints them.
#[must_use]
pub fn numbered(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .enumerate()
        .map(|(number, line)| format!("{number}: {line}"))
        .collect()
}
