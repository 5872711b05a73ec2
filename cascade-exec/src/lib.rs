// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Drivers for Cascade pipelines.
//!
//! A driver owns the source side: it pulls data from somewhere, pushes it into
//! the head of a [`Chain`](cascade_core::Chain) and calls `finalize` exactly
//! once when the source is exhausted. Byte sources go through a
//! [`Utf8ChunkDecoder`] so characters cut by a read boundary arrive intact.
//!
//! - [`feed_reader`] / [`read_file_blocking`] - any [`std::io::Read`]
//! - [`feed_stream`] - any [`futures::Stream`]
//! - [`feed_async_reader`] / [`read_file`] - tokio, behind `runtime-tokio`

pub mod decoder;
#[cfg(feature = "runtime-tokio")]
pub mod file;
mod logging;
pub mod options;
pub mod reader;
pub mod stream;

pub use decoder::{Utf8ChunkDecoder, DECODER_NAME};
#[cfg(feature = "runtime-tokio")]
pub use file::{feed_async_reader, read_file};
pub use options::{DriveReport, ReadOptions, DEFAULT_CHUNK_SIZE};
pub use reader::{feed_reader, read_file_blocking};
pub use stream::feed_stream;
