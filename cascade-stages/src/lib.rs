// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Ready-made stages for Cascade pipelines.
//!
//! - [`Splitter`] - text chunks in, delimiter-separated units out
//! - [`Enumerator`] - prefixes each unit with a running number
//! - [`Map`] - applies a fallible closure to each unit
//! - [`Sink`] - terminal stage handing units to an [`Emit`] target

pub mod enumerator;
pub mod map;
pub mod sink;
pub mod splitter;

pub use enumerator::Enumerator;
pub use map::Map;
pub use sink::{Emit, Sink, StdoutEmitter, WriterEmitter};
pub use splitter::{Splitter, DEFAULT_DELIMITER};
