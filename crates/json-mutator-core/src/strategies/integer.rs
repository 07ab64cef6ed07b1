//! Integer leaf mutations: small arithmetic nudges and 32-bit boundary probes.
//!
//! Arithmetic runs in `i128` so both `i64` and `u64` sample values are exact;
//! a result outside the JSON integer range is reported as
//! [`MutateError::Overflow`].

use rand::Rng;
use serde_json::{Number, Value};

use super::{or_original, pick};
use crate::error::MutateError;
use crate::payload::Payload;
use crate::schema_utils::value_kind;

pub const INT32_MAX: i64 = i32::MAX as i64;
pub const INT32_MIN: i64 = i32::MIN as i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerMutation {
    /// Add 1-10.
    Add,
    /// Subtract 1-10.
    Subtract,
    /// Multiply by 1-3.
    Multiply,
    /// Floor-divide by 1-3.
    Divide,
    /// Force 2147483647.
    Int32Max,
    /// Force -2147483648.
    Int32Min,
    Zero,
}

/// Numeric operand of an arithmetic strategy.
#[derive(Debug, Clone, Copy)]
enum Operand {
    Int(i128),
    /// Float samples under an integer schema keep float arithmetic.
    Float(f64),
}

impl IntegerMutation {
    pub const ALL: [IntegerMutation; 7] = [
        IntegerMutation::Add,
        IntegerMutation::Subtract,
        IntegerMutation::Multiply,
        IntegerMutation::Divide,
        IntegerMutation::Int32Max,
        IntegerMutation::Int32Min,
        IntegerMutation::Zero,
    ];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        pick(&Self::ALL, rng)
    }

    fn operation(self) -> &'static str {
        match self {
            IntegerMutation::Add => "add",
            IntegerMutation::Subtract => "subtract",
            IntegerMutation::Multiply => "multiply",
            IntegerMutation::Divide => "divide",
            IntegerMutation::Int32Max => "int32_max",
            IntegerMutation::Int32Min => "int32_min",
            IntegerMutation::Zero => "zero",
        }
    }

    /// Apply to `value`. `path` locates the leaf for error reporting.
    pub fn apply<R: Rng + ?Sized>(
        self,
        value: &Value,
        path: &str,
        rng: &mut R,
    ) -> Result<Payload, MutateError> {
        match self {
            IntegerMutation::Int32Max => return Ok(Payload::Number(INT32_MAX.into())),
            IntegerMutation::Int32Min => return Ok(Payload::Number(INT32_MIN.into())),
            IntegerMutation::Zero => return Ok(Payload::Number(0i64.into())),
            _ => {}
        }

        let operand = operand(value, path)?;
        let amount: i64 = match self {
            IntegerMutation::Add | IntegerMutation::Subtract => rng.gen_range(1..=10),
            _ => rng.gen_range(1..=3),
        };

        match operand {
            Operand::Int(x) => {
                let k = i128::from(amount);
                let result = match self {
                    IntegerMutation::Add => x.checked_add(k),
                    IntegerMutation::Subtract => x.checked_sub(k),
                    IntegerMutation::Multiply => x.checked_mul(k),
                    _ => {
                        if k == 0 {
                            return Err(MutateError::DivisionByZero {
                                path: path.to_string(),
                            });
                        }
                        x.checked_div_euclid(k)
                    }
                };
                result
                    .and_then(to_json_integer)
                    .map(Payload::Number)
                    .ok_or_else(|| MutateError::Overflow {
                        path: path.to_string(),
                        operation: self.operation(),
                    })
            }
            Operand::Float(x) => {
                let k = amount as f64;
                let result = match self {
                    IntegerMutation::Add => x + k,
                    IntegerMutation::Subtract => x - k,
                    IntegerMutation::Multiply => x * k,
                    _ => {
                        if k == 0.0 {
                            return Err(MutateError::DivisionByZero {
                                path: path.to_string(),
                            });
                        }
                        (x / k).floor()
                    }
                };
                Ok(Payload::Float(result))
            }
        }
    }
}

/// Mutate a leaf under an `integer` schema.
pub fn mutate_integer<R: Rng + ?Sized>(value: &Value, path: &str, rng: &mut R) -> Payload {
    let strategy = IntegerMutation::random(rng);
    or_original(strategy.apply(value, path, rng), value)
}

fn operand(value: &Value, path: &str) -> Result<Operand, MutateError> {
    let non_numeric = || MutateError::NonNumericOperand {
        path: path.to_string(),
        found: value_kind(value),
    };
    let n = value.as_number().ok_or_else(non_numeric)?;
    if let Some(i) = n.as_i64() {
        return Ok(Operand::Int(i.into()));
    }
    if let Some(u) = n.as_u64() {
        return Ok(Operand::Int(u.into()));
    }
    n.as_f64().map(Operand::Float).ok_or_else(non_numeric)
}

fn to_json_integer(x: i128) -> Option<Number> {
    if let Ok(i) = i64::try_from(x) {
        return Some(i.into());
    }
    u64::try_from(x).ok().map(Number::from)
}
