// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::{CascadeError, ChainBuilder, StageState};
use cascade_stages::{Enumerator, Map, Splitter};
use cascade_test_utils::RecordingEmitter;
use std::convert::Infallible;

#[derive(Debug, thiserror::Error)]
#[error("line is not valid: {0:?}")]
struct InvalidLine(String);

#[test]
fn test_map_transforms_each_unit() -> anyhow::Result<()> {
    let recorded = RecordingEmitter::<String>::new();
    let sink = recorded.sink();
    let mut head = ChainBuilder::<String>::new()
        .stage(Splitter::new)
        .stage(|| Map::new(|line: String| Ok::<_, Infallible>(line.trim_end().to_string())))
        .stage(Enumerator::new)
        .stage(move || sink)
        .build()?;

    head.push("padded   \r\nplain".to_string())?;
    head.finalize()?;

    assert_eq!(recorded.units(), vec!["0: padded", "1: plain"]);
    Ok(())
}

#[test]
fn test_map_error_is_a_transformation_error() -> anyhow::Result<()> {
    // Arrange
    let recorded = RecordingEmitter::<String>::new();
    let sink = recorded.sink();
    let mut head = ChainBuilder::<String>::new()
        .stage(Splitter::new)
        .stage(|| {
            Map::named("validate", |line: String| {
                if line.contains('\0') {
                    Err(InvalidLine(line))
                } else {
                    Ok(line)
                }
            })
        })
        .stage(move || sink)
        .build()?;

    // Act
    let first = head.push("good\nb\0d\n".to_string()).unwrap_err();
    let second = head.push("more\n".to_string()).unwrap_err();

    // Assert
    assert!(matches!(first, CascadeError::TransformationError { .. }));
    assert!(matches!(
        second,
        CascadeError::InvalidState {
            state: StageState::Failed,
            ..
        }
    ));
    assert_eq!(recorded.units(), vec!["good"]);
    Ok(())
}

#[test]
fn test_map_error_names_the_stage() -> anyhow::Result<()> {
    let recorded = RecordingEmitter::<String>::new();
    let sink = recorded.sink();
    let mut head = ChainBuilder::<String>::new()
        .stage(|| Map::named("validate", |line: String| Err::<String, _>(InvalidLine(line))))
        .stage(move || sink)
        .build()?;

    let err = head.push("x".to_string()).unwrap_err();

    assert!(matches!(
        err,
        CascadeError::TransformationError { ref stage, ref context }
            if stage == "validate" && context.contains("not valid")
    ));
    assert!(recorded.is_empty());
    Ok(())
}
