//! Process-lifetime calculator state: the history log and memory register.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::models::HistoryEntry;

use super::error::{EngineError, Result};

/// Maximum number of entries retained in the history log.
pub const MAX_HISTORY: usize = 100;

/// Bounded, insertion-ordered log of completed calculations.
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    total: usize,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append at the tail, discarding the oldest entries beyond the cap.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        self.total += 1;
        while self.entries.len() > MAX_HISTORY {
            self.entries.pop_front();
        }
    }

    /// Up to `limit` most recent entries, newest first.
    pub fn query(&self, limit: usize) -> Vec<HistoryEntry> {
        self.entries
            .iter()
            .rev()
            .take(limit.min(MAX_HISTORY))
            .cloned()
            .collect()
    }

    /// Entries recorded since the log was created or last cleared.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.total = 0;
    }
}

/// Operations on the memory register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryOp {
    Store,
    Recall,
    Add,
    Subtract,
    Clear,
}

impl MemoryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Store => "store",
            Self::Recall => "recall",
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Clear => "clear",
        }
    }
}

impl FromStr for MemoryOp {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "store" => Ok(Self::Store),
            "recall" => Ok(Self::Recall),
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            "clear" => Ok(Self::Clear),
            _ => Err(EngineError::UnknownMemoryOperation),
        }
    }
}

impl fmt::Display for MemoryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single accumulator behind M+, M-, MR and MC.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MemoryRegister {
    value: f64,
}

impl MemoryRegister {
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Apply `op` with `operand` and return the register's new value.
    ///
    /// A result that is not finite is rejected and the register keeps its
    /// previous value.
    pub fn apply(&mut self, op: MemoryOp, operand: f64) -> Result<f64> {
        let next = match op {
            MemoryOp::Store => operand,
            MemoryOp::Recall => self.value,
            MemoryOp::Add => self.value + operand,
            MemoryOp::Subtract => self.value - operand,
            MemoryOp::Clear => 0.0,
        };
        if !next.is_finite() {
            return Err(EngineError::NonFiniteResult);
        }
        self.value = next;
        Ok(next)
    }
}

/// Everything the engine mutates, guarded together by one lock.
#[derive(Debug, Default)]
pub struct SessionState {
    pub history: HistoryLog,
    pub memory: MemoryRegister,
}
