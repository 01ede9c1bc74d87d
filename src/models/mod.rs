//! Request, response and record types for the calculator.
//!
//! # Records
//!
//! - [`HistoryEntry`]: Immutable log entry for one completed calculation.
//!
//! # Requests and responses
//!
//! Each engine operation takes an `*Input` and returns a `*Response`. Inputs
//! keep their fields optional or loosely typed so the engine, not the
//! deserializer, decides what is invalid and reports it as an
//! [`EngineError`](crate::engine::EngineError).
//!
//! - [`CalculateInput`] / [`CalculateResponse`]
//! - [`ScientificInput`] / [`ScientificResponse`]
//! - [`MemoryInput`] / [`MemoryResponse`]
//! - [`ConvertInput`] / [`ConvertResponse`]
//! - [`HistoryQuery`] / [`HistoryResponse`], [`ClearHistoryResponse`]

mod calculation;
mod conversion;
mod history;
mod lenient;
mod memory;
mod operand;

pub use calculation::*;
pub use conversion::*;
pub use history::*;
pub use memory::*;
pub use operand::*;
