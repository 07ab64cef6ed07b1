//! Per-type leaf mutation strategies.
//!
//! Each scalar schema type has an enum of mutation kinds with an `ALL` table.
//! A leaf mutation draws one kind uniformly from the table and applies it.
//! Strategies that can fail return [`MutateError`]; [`or_original`] recovers
//! those by keeping the sample value.

pub mod integer;
pub mod number;
pub mod string;

pub use integer::IntegerMutation;
pub use number::NumberMutation;
pub use string::StringMutation;

use rand::Rng;
use serde_json::Value;
use tracing::debug;

use crate::error::MutateError;
use crate::payload::Payload;

/// Uniform draw over a non-empty strategy table.
pub(crate) fn pick<T: Copy, R: Rng + ?Sized>(table: &[T], rng: &mut R) -> T {
    table[rng.gen_range(0..table.len())]
}

/// Boolean leaves are re-randomized; the current value is ignored.
pub fn mutate_boolean<R: Rng + ?Sized>(rng: &mut R) -> Payload {
    Payload::Bool(rng.gen())
}

/// Resolve a strategy result, falling back to the original value on error.
pub(crate) fn or_original(result: Result<Payload, MutateError>, original: &Value) -> Payload {
    match result {
        Ok(payload) => payload,
        Err(err) => {
            debug!(
                code = ?err.error_code(),
                path = err.path(),
                "{err}; keeping original value"
            );
            Payload::from(original)
        }
    }
}
