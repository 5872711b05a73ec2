// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::{CascadeError, Result};

/// Name reported in errors raised while decoding.
pub const DECODER_NAME: &str = "utf8-decoder";

/// Turns raw byte chunks into UTF-8 text chunks.
///
/// A read of fixed size can stop in the middle of a multi-byte character. The
/// decoder hands out the longest valid prefix of what it has seen and keeps the
/// incomplete tail (at most three bytes) for the next chunk.
///
/// ```
/// use cascade_exec::Utf8ChunkDecoder;
///
/// # fn main() -> cascade_core::Result<()> {
/// let mut decoder = Utf8ChunkDecoder::new();
/// let bytes = "né".as_bytes();
///
/// assert_eq!(decoder.decode(&bytes[..2])?, "n");
/// assert_eq!(decoder.decode(&bytes[2..])?, "é");
/// decoder.finish()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Utf8ChunkDecoder {
    pending: Vec<u8>,
    decoded: usize,
}

impl Utf8ChunkDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `bytes` together with any tail left over from the previous call.
    ///
    /// # Errors
    /// [`CascadeError::TransformationError`] if the input is not valid UTF-8.
    pub fn decode(&mut self, bytes: &[u8]) -> Result<String> {
        let mut input = std::mem::take(&mut self.pending);
        input.extend_from_slice(bytes);

        let text = match String::from_utf8(input) {
            Ok(text) => text,
            Err(err) => {
                let utf8 = err.utf8_error();
                let valid = utf8.valid_up_to();
                if utf8.error_len().is_some() {
                    return Err(CascadeError::transformation(
                        DECODER_NAME,
                        format!("invalid UTF-8 at byte {}", self.decoded + valid),
                    ));
                }

                let mut complete = err.into_bytes();
                self.pending = complete.split_off(valid);
                String::from_utf8(complete)
                    .map_err(|e| CascadeError::transformation(DECODER_NAME, e.to_string()))?
            }
        };

        self.decoded += text.len();
        Ok(text)
    }

    /// Number of bytes held back waiting for the rest of a character.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Check that the input did not stop inside a character.
    ///
    /// # Errors
    /// [`CascadeError::TransformationError`] if bytes are still pending.
    pub fn finish(&mut self) -> Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        Err(CascadeError::transformation(
            DECODER_NAME,
            format!(
                "input ends inside a multi-byte character at byte {}",
                self.decoded
            ),
        ))
    }
}
