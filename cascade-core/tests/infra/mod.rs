// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(dead_code)]

use cascade_core::{CascadeError, Downstream, Result, Stage};
use parking_lot::Mutex;
use std::sync::Arc;

pub type Log = Arc<Mutex<Vec<String>>>;

pub fn new_log() -> Log {
    Arc::new(Mutex::new(Vec::new()))
}

/// Terminal stage recording every unit and its own finalization.
pub struct Collect {
    pub name: String,
    pub log: Log,
}

impl Collect {
    pub fn new(name: &str, log: &Log) -> Self {
        Self {
            name: name.to_string(),
            log: log.clone(),
        }
    }
}

impl Stage<String> for Collect {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_push(&mut self, unit: String, _downstream: &mut Downstream<'_, String>) -> Result<()> {
        self.log.lock().push(unit);
        Ok(())
    }

    fn on_finalize(&mut self, _downstream: &mut Downstream<'_, String>) -> Result<()> {
        self.log.lock().push(format!("{}: finalize", self.name));
        Ok(())
    }
}

/// Forwards units unchanged, recording finalization order.
pub struct Relay {
    pub name: String,
    pub log: Log,
}

impl Relay {
    pub fn new(name: &str, log: &Log) -> Self {
        Self {
            name: name.to_string(),
            log: log.clone(),
        }
    }
}

impl Stage<String> for Relay {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_push(&mut self, unit: String, downstream: &mut Downstream<'_, String>) -> Result<()> {
        downstream.emit(unit)
    }

    fn on_finalize(&mut self, _downstream: &mut Downstream<'_, String>) -> Result<()> {
        self.log.lock().push(format!("{}: finalize", self.name));
        Ok(())
    }
}

/// Holds everything back until finalize, then emits it as one unit.
pub struct Hold {
    pub buffer: String,
}

impl Stage<String> for Hold {
    fn name(&self) -> &str {
        "hold"
    }

    fn on_push(&mut self, unit: String, _downstream: &mut Downstream<'_, String>) -> Result<()> {
        self.buffer.push_str(&unit);
        Ok(())
    }

    fn on_finalize(&mut self, downstream: &mut Downstream<'_, String>) -> Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        downstream.emit(std::mem::take(&mut self.buffer))
    }
}

/// Rejects any unit equal to `poison`.
pub struct Reject {
    pub poison: String,
}

impl Stage<String> for Reject {
    fn name(&self) -> &str {
        "reject"
    }

    fn on_push(&mut self, unit: String, downstream: &mut Downstream<'_, String>) -> Result<()> {
        if unit == self.poison {
            return Err(CascadeError::transformation("reject", format!("refused '{unit}'")));
        }
        downstream.emit(unit)
    }
}

/// Stage whose priming always fails.
pub struct Unprimeable;

impl Stage<String> for Unprimeable {
    fn name(&self) -> &str {
        "unprimeable"
    }

    fn prime(&mut self) -> Result<()> {
        Err(CascadeError::configuration("cannot prime"))
    }

    fn on_push(&mut self, _unit: String, _downstream: &mut Downstream<'_, String>) -> Result<()> {
        Ok(())
    }
}
