//! Four-function calculator with a session-scoped history
//!
//! The arithmetic itself is plain IEEE-754; the only rejected input is a
//! zero divisor. Every successful operation can be appended to the
//! calculator's history, which only ever grows until it is persisted or
//! dropped.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Calculator failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("could not convert string to float: '{0}'")]
    InvalidNumber(String),

    #[error("Cannot divide by zero!")]
    DivideByZero,
}

/// Supported binary operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Applies the operation to two operands
    pub fn apply(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(add(a, b)),
            Self::Subtract => Ok(subtract(a, b)),
            Self::Multiply => Ok(multiply(a, b)),
            Self::Divide => divide(a, b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            "multiply" => Ok(Self::Multiply),
            "divide" => Ok(Self::Divide),
            _ => Err(()),
        }
    }
}

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivideByZero);
    }
    Ok(a / b)
}

/// Parses a user-supplied operand
pub fn parse_operand(input: &str) -> Result<f64, CalcError> {
    let trimmed = input.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidNumber(trimmed.to_string()))
}

/// Renders a number the way history descriptions show it
///
/// Plain values keep a fractional part (`3.0`, `0.5`). Values below `1e-4`
/// or from `1e16` up use a signed exponent of at least two digits
/// (`1e-05`, `1.5e+20`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if value == 0.0 || (1e-4..1e16).contains(&magnitude) {
        return format!("{:?}", value);
    }

    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => formatted,
    }
}

/// One completed calculation
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    /// Human-readable form, e.g. `3.0 add 4.0`
    pub description: String,

    pub result: f64,
}

impl OperationRecord {
    pub fn new(description: impl Into<String>, result: f64) -> Self {
        Self {
            description: description.into(),
            result,
        }
    }

    /// Builds the record for `a <op> b = result`
    pub fn from_operation(a: f64, operation: Operation, b: f64, result: f64) -> Self {
        Self::new(
            format!("{} {} {}", format_number(a), operation, format_number(b)),
            result,
        )
    }
}

/// Calculator owning the history of the current session
#[derive(Debug, Default)]
pub struct Calculator {
    history: Vec<OperationRecord>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `a <op> b`; the history is left alone
    pub fn calculate(&self, a: f64, operation: Operation, b: f64) -> Result<f64, CalcError> {
        operation.apply(a, b)
    }

    /// Appends a record to the history
    pub fn log_operation(&mut self, record: OperationRecord) {
        tracing::info!(
            "Operation: {}, Result: {}",
            record.description,
            format_number(record.result)
        );
        self.history.push(record);
    }

    /// Operations logged so far, oldest first
    pub fn history(&self) -> &[OperationRecord] {
        &self.history
    }
}
