// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Blocking drivers over [`std::io::Read`].

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use cascade_core::{Chain, Result};

use crate::debug;
use crate::decoder::Utf8ChunkDecoder;
use crate::options::{DriveReport, ReadOptions};

/// Decodes byte chunks and pushes the resulting text into a chain.
pub(crate) struct TextFeed<'a> {
    chain: &'a mut Chain<String>,
    decoder: Utf8ChunkDecoder,
    report: DriveReport,
}

impl<'a> TextFeed<'a> {
    pub(crate) fn new(chain: &'a mut Chain<String>) -> Self {
        Self {
            chain,
            decoder: Utf8ChunkDecoder::new(),
            report: DriveReport::default(),
        }
    }

    pub(crate) fn feed(&mut self, bytes: &[u8]) -> Result<()> {
        self.report.bytes += bytes.len();
        let text = self.decoder.decode(bytes)?;
        if text.is_empty() {
            return Ok(());
        }
        self.report.chunks += 1;
        self.chain.push(text)
    }

    pub(crate) fn finish(mut self) -> Result<DriveReport> {
        self.decoder.finish()?;
        self.chain.finalize()?;
        debug!(
            "source exhausted after {} bytes in {} chunks",
            self.report.bytes, self.report.chunks
        );
        Ok(self.report)
    }
}

/// Read `reader` to the end in chunks of at most `options.chunk_size` bytes,
/// pushing the decoded text into `chain`, then finalize the chain once.
///
/// On error the chain is left as it is and not finalized.
///
/// # Errors
/// [`cascade_core::CascadeError::SourceError`] if reading fails, otherwise
/// any decoding or pipeline error.
pub fn feed_reader<R: Read>(
    mut reader: R,
    chain: &mut Chain<String>,
    options: &ReadOptions,
) -> Result<DriveReport> {
    options.validate()?;
    let mut buffer = vec![0_u8; options.chunk_size];
    let mut feed = TextFeed::new(chain);

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };
        feed.feed(&buffer[..read])?;
    }

    feed.finish()
}

/// Blocking counterpart of [`read_file`](crate::read_file).
///
/// # Errors
/// See [`feed_reader`]; opening the file can also fail with a source error.
pub fn read_file_blocking(
    path: impl AsRef<Path>,
    chain: &mut Chain<String>,
    options: &ReadOptions,
) -> Result<DriveReport> {
    let path = path.as_ref();
    debug!("reading {}", path.display());
    let file = File::open(path)?;
    feed_reader(file, chain, options)
}
