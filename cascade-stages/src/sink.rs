// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Terminal stage and the targets it can emit to.

use cascade_core::{Downstream, Result, Stage};
use std::fmt::Display;
use std::io::{self, Write};

/// Side effect performed by a [`Sink`] for every unit it receives.
///
/// Implemented for any `FnMut(T) -> Result<()>`, so a closure is usually enough.
pub trait Emit<T> {
    /// Hand one unit to the outside world.
    ///
    /// # Errors
    /// Returns an error if the target rejects the unit.
    fn emit(&mut self, unit: T) -> Result<()>;

    /// Called once at end of stream.
    ///
    /// # Errors
    /// Returns an error if buffered output cannot be written.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T, F> Emit<T> for F
where
    F: FnMut(T) -> Result<()>,
{
    fn emit(&mut self, unit: T) -> Result<()> {
        self(unit)
    }
}

/// Writes each unit followed by a newline to any [`Write`] implementor.
#[derive(Debug)]
pub struct WriterEmitter<W> {
    writer: W,
}

impl<W: Write> WriterEmitter<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<T: Display, W: Write> Emit<T> for WriterEmitter<W> {
    fn emit(&mut self, unit: T) -> Result<()> {
        writeln!(self.writer, "{unit}")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Line-per-unit emitter on standard output.
pub type StdoutEmitter = WriterEmitter<io::Stdout>;

impl StdoutEmitter {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

/// Terminal stage: hands every unit to an [`Emit`] target and never emits downstream.
pub struct Sink<E> {
    emitter: E,
}

impl<E> Sink<E> {
    pub const fn new(emitter: E) -> Self {
        Self { emitter }
    }

    /// Access the emit target, e.g. to inspect what it recorded.
    pub const fn emitter(&self) -> &E {
        &self.emitter
    }
}

impl Sink<StdoutEmitter> {
    /// Print each unit on its own line.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(StdoutEmitter::stdout())
    }
}

impl<T, E> Stage<T> for Sink<E>
where
    E: Emit<T> + Send,
{
    fn name(&self) -> &str {
        "sink"
    }

    fn on_push(&mut self, unit: T, _downstream: &mut Downstream<'_, T>) -> Result<()> {
        self.emitter.emit(unit)
    }

    fn on_finalize(&mut self, _downstream: &mut Downstream<'_, T>) -> Result<()> {
        self.emitter.flush()
    }
}
