// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The ready-made line-numbering pipeline: split, enumerate, emit.

use std::path::Path;

use cascade_core::{Chain, ChainBuilder, Result};
use cascade_exec::DriveReport;
use cascade_stages::{Emit, Enumerator, Sink, Splitter};

use crate::config::PipelineConfig;

/// Build `Splitter -> Enumerator -> Sink(emitter)` from `config`.
///
/// ```
/// use std::sync::mpsc;
///
/// use cascade::{line_numbering_chain, CascadeError, PipelineConfig};
///
/// # fn main() -> cascade::Result<()> {
/// let (tx, rx) = mpsc::channel();
/// let config = PipelineConfig::default().with_start(1);
/// let mut head = line_numbering_chain(&config, move |line: String| {
///     tx.send(line).map_err(CascadeError::user_error)
/// })?;
///
/// head.push("one\ntw".to_string())?;
/// head.push("o".to_string())?;
/// head.finalize()?;
/// drop(head);
///
/// assert_eq!(rx.iter().collect::<Vec<_>>(), ["1: one", "2: two"]);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// [`cascade_core::CascadeError::ConfigurationError`] if `config` is invalid.
pub fn line_numbering_chain<E>(config: &PipelineConfig, emitter: E) -> Result<Chain<String>>
where
    E: Emit<String> + Send + 'static,
{
    config.validate()?;
    let delimiter = config.delimiter.clone();
    let start = config.start;

    ChainBuilder::new()
        .stage(move || Splitter::with_delimiter(delimiter))
        .stage(move || Enumerator::starting_at(start))
        .stage(move || Sink::new(emitter))
        .build()
}

/// Number every line of the file at `path`, handing each to `emitter`.
///
/// # Errors
/// Configuration, source, decoding and emitter errors, in that order of
/// occurrence.
#[cfg(feature = "runtime-tokio")]
pub async fn number_file<E>(
    path: impl AsRef<Path>,
    config: &PipelineConfig,
    emitter: E,
) -> Result<DriveReport>
where
    E: Emit<String> + Send + 'static,
{
    let mut head = line_numbering_chain(config, emitter)?;
    cascade_exec::read_file(path, &mut head, &config.read_options()).await
}

/// Number every line of the file at `path` on the calling thread, reading it
/// with [`cascade_exec::read_file_blocking`].
///
/// # Errors
/// Configuration, source, decoding and emitter errors, in that order of
/// occurrence.
pub fn number_file_blocking<E>(
    path: impl AsRef<Path>,
    config: &PipelineConfig,
    emitter: E,
) -> Result<DriveReport>
where
    E: Emit<String> + Send + 'static,
{
    let mut head = line_numbering_chain(config, emitter)?;
    cascade_exec::read_file_blocking(path, &mut head, &config.read_options())
}
