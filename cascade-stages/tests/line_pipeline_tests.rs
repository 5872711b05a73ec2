// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::{CascadeError, Chain, ChainBuilder, StageState};
use cascade_stages::{Enumerator, Splitter};
use cascade_test_utils::{
    chunk_every, numbered, segmentations, FailingStage, ProbeLog, RecordingEmitter,
};

fn line_pipeline() -> anyhow::Result<(Chain<String>, RecordingEmitter<String>)> {
    let recorded = RecordingEmitter::<String>::new();
    let sink = recorded.sink();
    let head = ChainBuilder::<String>::new()
        .stage(Splitter::new)
        .stage(Enumerator::new)
        .stage(move || sink)
        .build()?;
    Ok((head, recorded))
}

#[test]
fn test_numbered_lines_end_to_end() -> anyhow::Result<()> {
    // Arrange
    let (mut head, recorded) = line_pipeline()?;

    // Act
    head.push("line1\nline2\nline3".to_string())?;

    // Assert: the unterminated last line waits for finalize
    assert_eq!(recorded.units(), vec!["0: line1", "1: line2"]);

    head.finalize()?;
    assert_eq!(recorded.units(), vec!["0: line1", "1: line2", "2: line3"]);
    assert!(head.is_finished());
    Ok(())
}

#[test]
fn test_output_does_not_depend_on_chunking() -> anyhow::Result<()> {
    let expected = numbered(&["ab", "", "cd"]);

    for chunks in segmentations("ab\n\ncd\n") {
        let (mut head, recorded) = line_pipeline()?;

        for chunk in chunks {
            head.push(chunk)?;
        }
        head.finalize()?;

        assert_eq!(recorded.units(), expected);
    }
    Ok(())
}

#[test]
fn test_large_input_in_fixed_chunks() -> anyhow::Result<()> {
    let lines: Vec<String> = (0..500).map(|i| format!("entry {i}")).collect();
    let text = lines.join("\n");
    let (mut head, recorded) = line_pipeline()?;

    for chunk in chunk_every(&text, 37) {
        head.push(chunk)?;
    }
    head.finalize()?;

    let units = recorded.units();
    assert_eq!(units.len(), 500);
    assert_eq!(units[0], "0: entry 0");
    assert_eq!(units[499], "499: entry 499");
    Ok(())
}

#[test]
fn test_finalize_travels_head_to_tail() -> anyhow::Result<()> {
    // Arrange
    let log = ProbeLog::new();
    let (first, second, last) = (log.probe("s1"), log.probe("s2"), log.probe("s3"));
    let mut head = ChainBuilder::<String>::new()
        .stage(move || first)
        .stage(Splitter::new)
        .stage(move || second)
        .stage(Enumerator::new)
        .stage(move || last)
        .build()?;

    // Act
    head.push("a\nb".to_string())?;
    head.finalize()?;
    head.finalize()?;

    // Assert
    assert_eq!(log.finalized(), vec!["s1", "s2", "s3"]);
    assert!(head.states().iter().all(|s| *s == StageState::Finished));
    Ok(())
}

#[test]
fn test_injected_failure_stops_the_pipeline() -> anyhow::Result<()> {
    // Arrange
    let recorded = RecordingEmitter::<String>::new();
    let sink = recorded.sink();
    let mut head = ChainBuilder::<String>::new()
        .stage(Splitter::new)
        .stage(|| FailingStage::new(1))
        .stage(Enumerator::new)
        .stage(move || sink)
        .build()?;

    // Act
    let err = head.push("one\ntwo\nthree\n".to_string()).unwrap_err();

    // Assert
    assert!(matches!(err, CascadeError::TransformationError { ref stage, .. } if stage == "failing"));
    assert_eq!(recorded.units(), vec!["0: one"]);
    assert!(matches!(
        head.finalize().unwrap_err(),
        CascadeError::InvalidState { .. }
    ));
    assert_eq!(recorded.flushes(), 0);
    Ok(())
}
