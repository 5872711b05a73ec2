// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_test_utils::{chunk_every, numbered, segmentations};

#[test]
fn test_chunk_every_splits_on_chars() {
    assert_eq!(chunk_every("abcde", 2), vec!["ab", "cd", "e"]);
    assert_eq!(chunk_every("héé", 1), vec!["h", "é", "é"]);
    assert!(chunk_every("", 3).is_empty());
}

#[test]
#[should_panic(expected = "chunk size must be positive")]
fn test_chunk_every_rejects_zero() {
    let _ = chunk_every("abc", 0);
}

#[test]
fn test_segmentations_cover_every_cut() {
    let all = segmentations("abc");

    assert_eq!(all.len(), 4);
    assert!(all.contains(&vec!["abc".to_string()]));
    assert!(all.contains(&vec!["a".to_string(), "bc".to_string()]));
    assert!(all.contains(&vec!["ab".to_string(), "c".to_string()]));
    assert!(all.contains(&vec!["a".to_string(), "b".to_string(), "c".to_string()]));
    assert!(all.iter().all(|chunks| chunks.concat() == "abc"));
}

#[test]
fn test_segmentations_respect_char_boundaries() {
    let all = segmentations("éa");

    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|chunks| chunks.concat() == "éa"));
}

#[test]
fn test_segmentations_of_empty_text() {
    assert_eq!(segmentations(""), vec![Vec::<String>::new()]);
}

#[test]
fn test_numbered_starts_at_zero() {
    assert_eq!(numbered(&["a", "b"]), vec!["0: a", "1: b"]);
}
