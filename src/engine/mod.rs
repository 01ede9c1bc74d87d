//! The calculation engine.
//!
//! [`CalculatorEngine`] is the single entry point used by the HTTP layer and
//! the CLI. It owns the shared [`SessionState`] and composes the evaluator,
//! scientific dispatcher, unit tables and formatter into six operations.
//! Every operation validates and computes before taking the state lock, so a
//! failed request never touches history or memory.

mod error;
pub mod expression;
pub mod format;
pub mod scientific;
pub mod session;
pub mod units;

use std::sync::{Arc, Mutex, MutexGuard};

pub use error::{EngineError, Result};
pub use format::{format_number, plain_number};
pub use scientific::{AngleMode, ScientificOp};
pub use session::{HistoryLog, MemoryOp, MemoryRegister, SessionState, MAX_HISTORY};
pub use units::UnitCategory;

use crate::models::*;

/// History entries returned when no limit is given.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

pub struct CalculatorEngine {
    state: Arc<Mutex<SessionState>>,
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState::default())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().expect("session state lock poisoned")
    }

    fn record(&self, expression: String, result: f64) {
        self.lock()
            .history
            .append(HistoryEntry::new(expression, result));
    }

    // ============================================================
    // Arithmetic
    // ============================================================

    pub fn calculate(&self, input: CalculateInput) -> Result<CalculateResponse> {
        let raw = input
            .expression
            .filter(|e| !e.is_empty())
            .ok_or_else(|| EngineError::invalid_expression("Invalid expression"))?;

        let sanitized = expression::sanitize(&raw);
        let result = expression::evaluate_sanitized(&sanitized)?;

        self.record(sanitized.clone(), result);
        tracing::debug!(expression = %sanitized, result, "Evaluated expression");

        Ok(CalculateResponse {
            result,
            expression: sanitized,
            formatted: format_number(result),
        })
    }

    // ============================================================
    // Scientific functions
    // ============================================================

    pub fn scientific(&self, input: ScientificInput) -> Result<ScientificResponse> {
        let operand = input.value.ok_or(EngineError::InvalidNumber)?;
        let value = operand.to_f64()?;
        let angle = match input.angle.as_deref() {
            Some(mode) => mode.parse::<AngleMode>()?,
            None => AngleMode::default(),
        };

        let result = scientific::dispatch(&input.operation, value, angle)?;

        self.record(format!("{}({})", input.operation, operand), result);
        tracing::debug!(
            operation = %input.operation,
            value,
            angle = angle.as_str(),
            result,
            "Applied scientific function"
        );

        Ok(ScientificResponse {
            result,
            operation: input.operation,
            formatted: format_number(result),
        })
    }

    // ============================================================
    // Memory register
    // ============================================================

    pub fn memory(&self, input: MemoryInput) -> Result<MemoryResponse> {
        let op = input.operation.parse::<MemoryOp>()?;
        let operand = match &input.value {
            Some(value) => value.to_f64()?,
            None => 0.0,
        };

        let memory = self.lock().memory.apply(op, operand)?;
        tracing::debug!(operation = op.as_str(), memory, "Memory operation");

        Ok(MemoryResponse {
            memory,
            operation: input.operation,
            formatted: format_number(memory),
        })
    }

    // ============================================================
    // Unit conversion
    // ============================================================

    pub fn convert(&self, input: ConvertInput) -> Result<ConvertResponse> {
        let operand = input.value.ok_or(EngineError::InvalidNumber)?;
        let from_value = operand.to_f64()?;
        let category = input.category.parse::<UnitCategory>()?;

        let result = units::convert(category, from_value, &input.from_unit, &input.to_unit)?;
        if !result.is_finite() {
            return Err(EngineError::NonFiniteResult);
        }

        self.record(
            format!("{} {} → {}", operand, input.from_unit, input.to_unit),
            result,
        );
        tracing::debug!(
            category = category.as_str(),
            from_value,
            from_unit = %input.from_unit,
            to_unit = %input.to_unit,
            result,
            "Converted units"
        );

        Ok(ConvertResponse {
            result,
            from_value,
            from_unit: input.from_unit,
            to_unit: input.to_unit,
            formatted: format_number(result),
        })
    }

    // ============================================================
    // History
    // ============================================================

    pub fn history_query(&self, query: HistoryQuery) -> HistoryResponse {
        let limit = match query.limit {
            Some(0) | None => DEFAULT_HISTORY_LIMIT,
            Some(n) => (n as usize).min(MAX_HISTORY),
        };

        let state = self.lock();
        HistoryResponse {
            history: state.history.query(limit),
            total: state.history.total(),
        }
    }

    pub fn history_clear(&self) -> ClearHistoryResponse {
        self.lock().history.clear();
        tracing::info!("Calculation history cleared");

        ClearHistoryResponse {
            message: "History cleared".to_string(),
        }
    }

    /// Current value of the memory register.
    pub fn memory_value(&self) -> f64 {
        self.lock().memory.value()
    }
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CalculatorEngine {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_operations_leave_state_untouched() {
        let engine = CalculatorEngine::new();
        engine
            .memory(MemoryInput {
                operation: "store".to_string(),
                value: Some(Operand::from(7.0)),
            })
            .unwrap();

        assert!(engine
            .calculate(CalculateInput {
                expression: Some("5/0".to_string()),
            })
            .is_err());
        assert!(engine
            .memory(MemoryInput {
                operation: "add".to_string(),
                value: Some(Operand::from("abc")),
            })
            .is_err());

        assert_eq!(engine.history_query(HistoryQuery::default()).total, 0);
        assert_eq!(engine.memory_value(), 7.0);
    }

    #[test]
    fn clones_share_state() {
        let engine = CalculatorEngine::new();
        let other = engine.clone();

        other
            .calculate(CalculateInput {
                expression: Some("1+1".to_string()),
            })
            .unwrap();

        assert_eq!(engine.history_query(HistoryQuery::default()).total, 1);
    }
}
