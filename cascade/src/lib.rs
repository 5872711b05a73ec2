// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! # Cascade
//!
//! Push-based processing pipelines built from a linear chain of stages.
//!
//! ## Overview
//!
//! A driver pushes raw chunks into the head of a chain. Each stage buffers or
//! transforms what it receives and pushes zero or more units into the next
//! stage; the last stage performs a side effect. When the source runs dry the
//! driver calls `finalize` once, which flushes every buffer in order from head
//! to tail.
//!
//! - `cascade-core`: the [`Stage`] trait, lifecycle and [`ChainBuilder`]
//! - `cascade-stages`: [`Splitter`], [`Enumerator`], [`Map`] and [`Sink`]
//! - `cascade-exec`: drivers for readers, streams and files
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cascade::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> cascade::Result<()> {
//!     let mut head = ChainBuilder::<String>::new()
//!         .stage(Splitter::new)
//!         .stage(Enumerator::new)
//!         .stage(Sink::stdout)
//!         .build()?;
//!
//!     read_file("notes.txt", &mut head, &ReadOptions::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod pipeline;

pub use config::PipelineConfig;
#[cfg(feature = "runtime-tokio")]
pub use pipeline::number_file;
pub use pipeline::{line_numbering_chain, number_file_blocking};

// Re-export the pipeline building blocks
pub use cascade_core::{
    chain, factory, CascadeError, Chain, ChainBuilder, Downstream, Result, ResultExt, Stage,
    StageFactory, StageState,
};
pub use cascade_exec::{
    feed_reader, feed_stream, read_file_blocking, DriveReport, ReadOptions, DEFAULT_CHUNK_SIZE,
};
#[cfg(feature = "runtime-tokio")]
pub use cascade_exec::{feed_async_reader, read_file};
pub use cascade_stages::{
    Emit, Enumerator, Map, Sink, Splitter, StdoutEmitter, WriterEmitter, DEFAULT_DELIMITER,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CascadeError, Chain, ChainBuilder, Downstream, Emit, Enumerator, Map, PipelineConfig,
        ReadOptions, ResultExt, Sink, Splitter, Stage, StageState,
    };
    #[cfg(feature = "runtime-tokio")]
    pub use crate::{feed_async_reader, read_file};
    pub use crate::{feed_reader, feed_stream, line_numbering_chain};
}
