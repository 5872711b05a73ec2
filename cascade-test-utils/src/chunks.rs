// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Ways of cutting a text into chunks, for checking that stage output does not
//! depend on where the driver's chunk boundaries fall.

/// Longest text (in chars) accepted by [`segmentations`].
pub const MAX_SEGMENTED_CHARS: usize = 16;

/// Cut `text` into chunks of `size` chars (the last one may be shorter).
///
/// # Panics
/// Panics if `size` is zero.
#[must_use]
pub fn chunk_every(text: &str, size: usize) -> Vec<String> {
    assert!(size > 0, "chunk size must be positive");
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(size)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Every way of cutting `text` into non-empty chunks at char boundaries.
///
/// A text of `n` chars has `2^(n-1)` segmentations; the empty text has exactly
/// one, with no chunks.
///
/// # Panics
/// Panics if `text` is longer than [`MAX_SEGMENTED_CHARS`] chars.
#[must_use]
pub fn segmentations(text: &str) -> Vec<Vec<String>> {
    let boundaries: Vec<usize> = text.char_indices().map(|(index, _)| index).skip(1).collect();
    let cut_points = boundaries.len();
    assert!(
        cut_points < MAX_SEGMENTED_CHARS,
        "text too long to enumerate every segmentation"
    );

    if text.is_empty() {
        return vec![Vec::new()];
    }

    (0..1_u32 << cut_points)
        .map(|mask| {
            let mut chunks = Vec::new();
            let mut start = 0;
            for (bit, &boundary) in boundaries.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    chunks.push(text[start..boundary].to_string());
                    start = boundary;
                }
            }
            chunks.push(text[start..].to_string());
            chunks
        })
        .collect()
}
