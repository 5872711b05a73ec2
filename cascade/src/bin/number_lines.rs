// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Print every line of a file prefixed with its number.

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use cascade::{number_file, PipelineConfig, WriterEmitter, DEFAULT_CHUNK_SIZE};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "number-lines")]
#[command(about = "Print each line of a file prefixed with its number", long_about = None)]
struct Cli {
    /// File to read
    file: PathBuf,

    /// Line delimiter; `\n`, `\r` and `\t` escapes are understood
    #[arg(short, long, default_value = "\\n", value_parser = unescape)]
    delimiter: String,

    /// Number given to the first line
    #[arg(short, long, default_value_t = 0)]
    start: usize,

    /// Bytes read from the file at a time
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,
}

impl Cli {
    fn config(&self) -> PipelineConfig {
        PipelineConfig::default()
            .with_delimiter(self.delimiter.clone())
            .with_start(self.start)
            .with_chunk_size(self.chunk_size)
    }
}

fn unescape(raw: &str) -> Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => return Err(format!("unknown escape `\\{other}`")),
            None => return Err("trailing backslash".to_string()),
        }
    }
    Ok(out)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    let stdout = WriterEmitter::new(BufWriter::new(io::stdout()));
    let report = number_file(&cli.file, &config, stdout)
        .await
        .with_context(|| format!("failed to number lines of {}", cli.file.display()))?;

    tracing::info!(
        chunks = report.chunks,
        bytes = report.bytes,
        "finished {}",
        cli.file.display()
    );
    Ok(())
}
