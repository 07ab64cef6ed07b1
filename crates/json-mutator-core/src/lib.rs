//! Schema-guided JSON payload mutation for fuzzing.
//!
//! Pairs a JSON Schema-like type descriptor with a valid sample value, walks
//! both in lockstep, and replaces each scalar leaf with the result of one
//! randomly chosen corruption strategy: boundary values, injection payloads,
//! type-breaking values. The output keeps the sample's container shape, so
//! it still parses, but its leaves are hostile.
//!
//! ```text
//! mutate(schema, sample, n) → [Payload; n]
//! ```
//!
//! # Quick start
//!
//! ```
//! use serde_json::json;
//!
//! let schema = json!({
//!     "type": "object",
//!     "properties": {
//!         "name": { "type": "string" },
//!         "tags": { "type": "array", "items": { "type": "string" } }
//!     }
//! });
//! let sample = json!({ "name": "Ada", "tags": ["a", "b"], "id": 7 });
//!
//! let payloads = json_mutator_core::mutate(&schema, &sample, 3);
//! assert_eq!(payloads.len(), 3);
//! for payload in &payloads {
//!     // Fields the schema does not describe are passed through untouched.
//!     assert!(*payload.get("id").unwrap() == json!(7));
//!     assert_eq!(payload.get("tags").unwrap().as_array().unwrap().len(), 2);
//! }
//! ```
//!
//! The engine never fails: mismatches between schema and sample resolve to
//! fixed fallback containers (see [`walker`]), and strategy errors such as
//! integer overflow revert the leaf to its original value.

pub mod config;
pub mod error;
pub mod payload;
pub mod schema_utils;
pub mod strategies;
pub mod walker;

pub use config::MutateOptions;
pub use error::{ErrorCode, MutateError};
pub use payload::{OutputFormat, Payload};
pub use schema_utils::build_path;
pub use walker::mutate_value;

use rand::Rng;
use serde_json::Value;
use tracing::debug;

/// Generate `iterations` independently mutated payloads using the
/// thread-local RNG.
///
/// Returns an empty vector when `iterations` is 0.
pub fn mutate(schema: &Value, sample: &Value, iterations: usize) -> Vec<Payload> {
    mutate_with_rng(schema, sample, iterations, &mut rand::thread_rng())
}

/// Like [`mutate`], drawing all randomness from `rng`.
///
/// # Example
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use serde_json::json;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let out = json_mutator_core::mutate_with_rng(
///     &json!({"type": "null"}),
///     &json!("anything"),
///     2,
///     &mut rng,
/// );
/// assert_eq!(out, vec![json_mutator_core::Payload::Null; 2]);
/// ```
pub fn mutate_with_rng<R: Rng + ?Sized>(
    schema: &Value,
    sample: &Value,
    iterations: usize,
    rng: &mut R,
) -> Vec<Payload> {
    debug!(iterations, "Generating mutated payloads");
    (0..iterations)
        .map(|_| mutate_value(schema, sample, rng))
        .collect()
}

/// Like [`mutate`], taking the iteration count from `options`.
pub fn mutate_with_options(schema: &Value, sample: &Value, options: &MutateOptions) -> Vec<Payload> {
    mutate(schema, sample, options.iterations)
}
