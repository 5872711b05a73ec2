// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Async drivers on the tokio runtime.

use std::path::Path;

use cascade_core::{Chain, Result};
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::debug;
use crate::options::{DriveReport, ReadOptions};
use crate::reader::TextFeed;

/// Async counterpart of [`feed_reader`](crate::feed_reader).
///
/// Every chunk is pushed as soon as it has been read; the pipeline itself
/// never awaits.
///
/// # Errors
/// [`cascade_core::CascadeError::SourceError`] if reading fails, otherwise
/// any decoding or pipeline error. The chain is not finalized on error.
pub async fn feed_async_reader<R>(
    mut reader: R,
    chain: &mut Chain<String>,
    options: &ReadOptions,
) -> Result<DriveReport>
where
    R: AsyncRead + Unpin,
{
    options.validate()?;
    let mut buffer = vec![0_u8; options.chunk_size];
    let mut feed = TextFeed::new(chain);

    loop {
        let read = reader.read(&mut buffer).await?;
        if read == 0 {
            break;
        }
        feed.feed(&buffer[..read])?;
    }

    feed.finish()
}

/// Stream the file at `path` through `chain`, finalizing it at end of file.
///
/// ```no_run
/// use cascade_core::ChainBuilder;
/// use cascade_exec::{read_file, ReadOptions};
/// use cascade_stages::{Enumerator, Sink, Splitter};
///
/// # #[tokio::main]
/// # async fn main() -> cascade_core::Result<()> {
/// let mut head = ChainBuilder::<String>::new()
///     .stage(Splitter::new)
///     .stage(Enumerator::new)
///     .stage(Sink::stdout)
///     .build()?;
///
/// read_file("notes.txt", &mut head, &ReadOptions::default()).await?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// See [`feed_async_reader`]; opening the file can also fail with a source error.
pub async fn read_file(
    path: impl AsRef<Path>,
    chain: &mut Chain<String>,
    options: &ReadOptions,
) -> Result<DriveReport> {
    let path = path.as_ref();
    debug!("reading {}", path.display());
    let file = File::open(path).await?;
    feed_async_reader(file, chain, options).await
}
