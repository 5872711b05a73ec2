// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::path::PathBuf;

use cascade_core::{CascadeError, Chain, ChainBuilder};
use cascade_exec::{read_file, read_file_blocking, ReadOptions, DEFAULT_CHUNK_SIZE};
use cascade_stages::{Enumerator, Sink, Splitter};
use cascade_test_utils::RecordingEmitter;

/// A file under the system temp directory, removed on drop.
struct Scratch(PathBuf);

impl Scratch {
    fn with_contents(name: &str, contents: &str) -> std::io::Result<Self> {
        let path = std::env::temp_dir().join(format!(
            "cascade-exec-{}-{name}.txt",
            std::process::id()
        ));
        std::fs::write(&path, contents)?;
        Ok(Self(path))
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

fn numbering(sink: &RecordingEmitter<String>) -> cascade_core::Result<Chain<String>> {
    let sink = sink.clone();
    ChainBuilder::<String>::new()
        .stage(Splitter::new)
        .stage(Enumerator::new)
        .stage(move || Sink::new(sink))
        .build()
}

fn many_lines(count: usize) -> String {
    (0..count).map(|i| format!("entry number {i}\n")).collect()
}

#[tokio::test]
async fn test_read_file_numbers_every_line() -> anyhow::Result<()> {
    // Arrange
    let contents = many_lines(300);
    let file = Scratch::with_contents("async", &contents)?;
    let sink = RecordingEmitter::<String>::new();
    let mut chain = numbering(&sink)?;

    // Act
    let report = read_file(&file.0, &mut chain, &ReadOptions::default()).await?;

    // Assert
    let units = sink.units();
    assert_eq!(units.len(), 300);
    assert_eq!(units[0], "0: entry number 0");
    assert_eq!(units[299], "299: entry number 299");
    assert_eq!(report.bytes, contents.len());
    assert!(report.chunks >= contents.len() / DEFAULT_CHUNK_SIZE);
    assert!(chain.is_finished());
    Ok(())
}

#[test]
fn test_blocking_and_async_agree() -> anyhow::Result<()> {
    let contents = "α\nβ\n\nγ without newline";
    let file = Scratch::with_contents("agree", contents)?;
    let options = ReadOptions::with_chunk_size(3);

    let blocking = RecordingEmitter::<String>::new();
    read_file_blocking(&file.0, &mut numbering(&blocking)?, &options)?;

    let asynchronous = RecordingEmitter::<String>::new();
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut chain = numbering(&asynchronous)?;
        read_file(&file.0, &mut chain, &options).await
    })?;

    assert_eq!(blocking.units(), asynchronous.units());
    assert_eq!(
        blocking.units(),
        vec!["0: α", "1: β", "2: ", "3: γ without newline"]
    );
    Ok(())
}

#[tokio::test]
async fn test_missing_file_is_a_source_error() -> anyhow::Result<()> {
    let sink = RecordingEmitter::<String>::new();
    let mut chain = numbering(&sink)?;
    let path = std::env::temp_dir().join("cascade-exec-does-not-exist.txt");

    let err = read_file(&path, &mut chain, &ReadOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, CascadeError::SourceError(_)));
    assert!(!chain.is_finished());
    Ok(())
}

#[test]
fn test_blocking_missing_file_is_a_source_error() -> anyhow::Result<()> {
    let sink = RecordingEmitter::<String>::new();
    let mut chain = numbering(&sink)?;
    let path = std::env::temp_dir().join("cascade-exec-also-missing.txt");

    let err = read_file_blocking(&path, &mut chain, &ReadOptions::default()).unwrap_err();

    assert!(matches!(err, CascadeError::SourceError(_)));
    Ok(())
}
