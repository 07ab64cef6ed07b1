//! Floating-point leaf mutations.

use rand::Rng;
use serde_json::Value;

use super::{or_original, pick};
use crate::error::MutateError;
use crate::payload::Payload;
use crate::schema_utils::value_kind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberMutation {
    /// Add an offset in `[0.1, 1.0)`.
    Add,
    /// Subtract an offset in `[0.1, 1.0)`.
    Subtract,
    /// Multiply by a factor in `[1.1, 2.0)`.
    Multiply,
    /// Divide by a factor in `[1.1, 2.0)`.
    Divide,
    PositiveInfinity,
    NegativeInfinity,
    NaN,
}

impl NumberMutation {
    pub const ALL: [NumberMutation; 7] = [
        NumberMutation::Add,
        NumberMutation::Subtract,
        NumberMutation::Multiply,
        NumberMutation::Divide,
        NumberMutation::PositiveInfinity,
        NumberMutation::NegativeInfinity,
        NumberMutation::NaN,
    ];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        pick(&Self::ALL, rng)
    }

    pub fn apply<R: Rng + ?Sized>(
        self,
        value: &Value,
        path: &str,
        rng: &mut R,
    ) -> Result<Payload, MutateError> {
        let x = match self {
            NumberMutation::PositiveInfinity => return Ok(Payload::Float(f64::INFINITY)),
            NumberMutation::NegativeInfinity => return Ok(Payload::Float(f64::NEG_INFINITY)),
            NumberMutation::NaN => return Ok(Payload::Float(f64::NAN)),
            _ => value.as_f64().ok_or_else(|| MutateError::NonNumericOperand {
                path: path.to_string(),
                found: value_kind(value),
            })?,
        };

        let result = match self {
            NumberMutation::Add => x + rng.gen_range(0.1_f64..1.0),
            NumberMutation::Subtract => x - rng.gen_range(0.1_f64..1.0),
            NumberMutation::Multiply => x * rng.gen_range(1.1_f64..2.0),
            _ => {
                let divisor: f64 = rng.gen_range(1.1..2.0);
                if divisor == 0.0 {
                    return Err(MutateError::DivisionByZero {
                        path: path.to_string(),
                    });
                }
                x / divisor
            }
        };
        Ok(Payload::Float(result))
    }
}

/// Mutate a leaf under a `number` schema.
pub fn mutate_number<R: Rng + ?Sized>(value: &Value, path: &str, rng: &mut R) -> Payload {
    let strategy = NumberMutation::random(rng);
    or_original(strategy.apply(value, path, rng), value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(99)
    }

    fn float(payload: Payload) -> f64 {
        match payload {
            Payload::Float(f) => f,
            other => panic!("expected float, got {other:?}"),
        }
    }

    #[test]
    fn test_offsets_and_factors_stay_in_range() {
        let mut rng = rng();
        let v = json!(10.0);
        for _ in 0..100 {
            let add = float(NumberMutation::Add.apply(&v, "#", &mut rng).unwrap());
            assert!((10.05..11.0).contains(&add), "add: {add}");
            let sub = float(NumberMutation::Subtract.apply(&v, "#", &mut rng).unwrap());
            assert!(sub > 9.0 && sub < 9.95, "sub: {sub}");
            let mul = float(NumberMutation::Multiply.apply(&v, "#", &mut rng).unwrap());
            assert!((10.95..20.0).contains(&mul), "mul: {mul}");
            let div = float(NumberMutation::Divide.apply(&v, "#", &mut rng).unwrap());
            assert!(div > 5.0 && div < 9.1, "div: {div}");
        }
    }

    #[test]
    fn test_integer_sample_becomes_float() {
        let mut rng = rng();
        let out = NumberMutation::Add.apply(&json!(3), "#", &mut rng).unwrap();
        assert!(float(out) > 3.0);
    }

    #[test]
    fn test_non_finite_probes() {
        let mut rng = rng();
        let v = json!(1.5);
        assert_eq!(
            float(NumberMutation::PositiveInfinity.apply(&v, "#", &mut rng).unwrap()),
            f64::INFINITY
        );
        assert_eq!(
            float(NumberMutation::NegativeInfinity.apply(&v, "#", &mut rng).unwrap()),
            f64::NEG_INFINITY
        );
        assert!(float(NumberMutation::NaN.apply(&v, "#", &mut rng).unwrap()).is_nan());
    }

    #[test]
    fn test_non_numeric_arithmetic_recovers() {
        let mut rng = rng();
        let err = NumberMutation::Multiply
            .apply(&json!(true), "#/flag", &mut rng)
            .unwrap_err();
        assert!(matches!(
            err,
            MutateError::NonNumericOperand { found: "boolean", .. }
        ));

        // Whatever strategy is drawn, the result is the original or a float.
        for _ in 0..100 {
            let out = mutate_number(&json!(true), "#", &mut rng);
            assert!(
                out == Payload::Bool(true) || matches!(out, Payload::Float(_)),
                "got {out:?}"
            );
        }
    }
}
