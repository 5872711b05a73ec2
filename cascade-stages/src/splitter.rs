// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::{CascadeError, Downstream, Result, Stage};

/// Delimiter used by [`Splitter::new`].
pub const DEFAULT_DELIMITER: &str = "\n";

/// Turns a sequence of text chunks into a sequence of delimiter-separated units.
///
/// Text is accumulated until a delimiter shows up; everything before it is
/// emitted as one unit and the delimiter itself is dropped. Whatever follows
/// the last delimiter stays buffered and is emitted on finalize, if non-empty.
/// Chunk boundaries are irrelevant, including ones that cut a delimiter in two.
///
/// ```
/// use cascade_core::ChainBuilder;
/// use cascade_stages::{Sink, Splitter};
///
/// # fn main() -> cascade_core::Result<()> {
/// let mut head = ChainBuilder::<String>::new()
///     .stage(Splitter::new)
///     .stage(|| Sink::new(|line: String| -> cascade_core::Result<()> {
///         println!("{line}");
///         Ok(())
///     }))
///     .build()?;
///
/// head.push("a\nb".to_string())?;
/// head.push("\nc".to_string())?;
/// head.finalize()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Splitter {
    delimiter: String,
    buffer: String,
    // Bytes at the front of `buffer` already known not to start a delimiter.
    scanned: usize,
}

impl Splitter {
    /// Split on newlines.
    #[must_use]
    pub fn new() -> Self {
        Self::with_delimiter(DEFAULT_DELIMITER)
    }

    /// Split on `delimiter`. An empty delimiter is rejected when the stage is primed.
    #[must_use]
    pub fn with_delimiter(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            buffer: String::new(),
            scanned: 0,
        }
    }

    /// The delimiter this stage splits on.
    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Text received but not yet emitted.
    #[must_use]
    pub fn buffered(&self) -> &str {
        &self.buffer
    }

    fn rescan_point(&self) -> usize {
        let mut point = self
            .buffer
            .len()
            .saturating_sub(self.delimiter.len().saturating_sub(1));
        while !self.buffer.is_char_boundary(point) {
            point -= 1;
        }
        point
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage<String> for Splitter {
    fn name(&self) -> &str {
        "splitter"
    }

    fn prime(&mut self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(CascadeError::configuration(
                "splitter delimiter must not be empty",
            ));
        }
        Ok(())
    }

    fn on_push(&mut self, unit: String, downstream: &mut Downstream<'_, String>) -> Result<()> {
        self.buffer.push_str(&unit);

        let mut consumed = 0;
        let mut search_from = self.scanned;
        while let Some(offset) = self.buffer[search_from..].find(self.delimiter.as_str()) {
            let end = search_from + offset;
            let piece = self.buffer[consumed..end].to_owned();
            consumed = end + self.delimiter.len();
            search_from = consumed;
            downstream.emit(piece)?;
        }

        self.buffer.drain(..consumed);
        self.scanned = self.rescan_point();
        Ok(())
    }

    fn on_finalize(&mut self, downstream: &mut Downstream<'_, String>) -> Result<()> {
        self.scanned = 0;
        if self.buffer.is_empty() {
            return Ok(());
        }
        downstream.emit(std::mem::take(&mut self.buffer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rescan_point_keeps_room_for_split_delimiter() {
        let mut splitter = Splitter::with_delimiter("\r\n");
        splitter.buffer.push_str("abc\r");

        assert_eq!(splitter.rescan_point(), 3);
    }

    #[test]
    fn test_rescan_point_lands_on_char_boundary() {
        let mut splitter = Splitter::with_delimiter("--");
        splitter.buffer.push_str("é");

        // "é" is two bytes; stepping back one byte would split it
        assert_eq!(splitter.rescan_point(), 0);
    }
}
