//! Scientific function dispatch.

use std::f64::consts::{E, PI};
use std::fmt;
use std::str::FromStr;

use super::error::{EngineError, Result};

/// Largest `n` for which `n!` fits in an `f64`.
pub const MAX_FACTORIAL: f64 = 170.0;

/// How trigonometric operands and results are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AngleMode {
    #[default]
    Rad,
    Deg,
}

impl AngleMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rad => "rad",
            Self::Deg => "deg",
        }
    }
}

impl FromStr for AngleMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "rad" => Ok(Self::Rad),
            "deg" => Ok(Self::Deg),
            _ => Err(EngineError::InvalidAngleMode),
        }
    }
}

/// The supported single-operand functions and constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScientificOp {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log,
    Ln,
    Log2,
    Sqrt,
    Cbrt,
    Square,
    Cube,
    Pow10,
    Exp,
    Factorial,
    Abs,
    Floor,
    Ceil,
    Round,
    Pi,
    E,
}

impl ScientificOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Log2 => "log2",
            Self::Sqrt => "sqrt",
            Self::Cbrt => "cbrt",
            Self::Square => "square",
            Self::Cube => "cube",
            Self::Pow10 => "pow10",
            Self::Exp => "exp",
            Self::Factorial => "factorial",
            Self::Abs => "abs",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Round => "round",
            Self::Pi => "pi",
            Self::E => "e",
        }
    }

    /// Apply the operation to `value`.
    ///
    /// Forward trig functions take degrees in [`AngleMode::Deg`]; inverse trig
    /// functions return degrees in that mode.
    pub fn apply(&self, value: f64, angle: AngleMode) -> Result<f64> {
        let to_radians = |x: f64| match angle {
            AngleMode::Deg => x.to_radians(),
            AngleMode::Rad => x,
        };
        let from_radians = |x: f64| match angle {
            AngleMode::Deg => x.to_degrees(),
            AngleMode::Rad => x,
        };

        let result = match self {
            Self::Sin => to_radians(value).sin(),
            Self::Cos => to_radians(value).cos(),
            Self::Tan => to_radians(value).tan(),
            Self::Asin => from_radians(value.asin()),
            Self::Acos => from_radians(value.acos()),
            Self::Atan => from_radians(value.atan()),
            Self::Log => value.log10(),
            Self::Ln => value.ln(),
            Self::Log2 => value.log2(),
            Self::Sqrt => value.sqrt(),
            Self::Cbrt => value.cbrt(),
            Self::Square => value.powi(2),
            Self::Cube => value.powi(3),
            Self::Pow10 => 10f64.powf(value),
            Self::Exp => value.exp(),
            Self::Factorial => factorial(value)?,
            Self::Abs => value.abs(),
            Self::Floor => value.floor(),
            Self::Ceil => value.ceil(),
            Self::Round => value.round(),
            Self::Pi => PI,
            Self::E => E,
        };

        Ok(result)
    }
}

impl FromStr for ScientificOp {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        let op = match s {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" => Self::Asin,
            "acos" => Self::Acos,
            "atan" => Self::Atan,
            "log" => Self::Log,
            "ln" => Self::Ln,
            "log2" => Self::Log2,
            "sqrt" => Self::Sqrt,
            "cbrt" => Self::Cbrt,
            "square" => Self::Square,
            "cube" => Self::Cube,
            "pow10" => Self::Pow10,
            "exp" => Self::Exp,
            "factorial" => Self::Factorial,
            "abs" => Self::Abs,
            "floor" => Self::Floor,
            "ceil" => Self::Ceil,
            "round" => Self::Round,
            "pi" => Self::Pi,
            "e" => Self::E,
            _ => return Err(EngineError::UnknownOperation),
        };
        Ok(op)
    }
}

impl fmt::Display for ScientificOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `floor(value)!`, defined for `0..=170`.
pub fn factorial(value: f64) -> Result<f64> {
    let n = value.floor();
    if !(0.0..=MAX_FACTORIAL).contains(&n) {
        return Err(EngineError::FactorialOutOfRange);
    }
    Ok((2..=n as u32).fold(1.0, |acc, i| acc * f64::from(i)))
}

/// Resolve `operation` by name and apply it, rejecting non-finite results.
pub fn dispatch(operation: &str, value: f64, angle: AngleMode) -> Result<f64> {
    let op = operation.parse::<ScientificOp>()?;
    let result = op.apply(value, angle)?;
    if !result.is_finite() {
        return Err(EngineError::NonFiniteResult);
    }
    Ok(result)
}
