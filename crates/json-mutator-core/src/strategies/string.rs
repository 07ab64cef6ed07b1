//! String leaf mutations: case flips, reversal, terminator padding,
//! injection payloads, NUL bytes and wholesale replacement.

use std::borrow::Cow;

use rand::Rng;
use serde_json::Value;

use super::pick;
use crate::payload::Payload;

/// Appended by [`StringMutation::AppendScriptInjection`].
pub const SCRIPT_INJECTION: &str = "<script>alert('XSS')</script>";

/// Appended by [`StringMutation::AppendSqlInjection`].
pub const SQL_INJECTION: &str = "' OR '1'='1";

const TERMINATOR: char = '!';
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringMutation {
    /// Append 1-5 `!`.
    AppendTerminators,
    Uppercase,
    Lowercase,
    /// Reverse by Unicode scalar value.
    Reverse,
    AppendScriptInjection,
    AppendSqlInjection,
    /// Append a single `\0`.
    AppendNul,
    /// Discard the input; produce 5-15 random lowercase ASCII letters.
    RandomLowercase,
}

impl StringMutation {
    pub const ALL: [StringMutation; 8] = [
        StringMutation::AppendTerminators,
        StringMutation::Uppercase,
        StringMutation::Lowercase,
        StringMutation::Reverse,
        StringMutation::AppendScriptInjection,
        StringMutation::AppendSqlInjection,
        StringMutation::AppendNul,
        StringMutation::RandomLowercase,
    ];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        pick(&Self::ALL, rng)
    }

    pub fn apply<R: Rng + ?Sized>(self, input: &str, rng: &mut R) -> String {
        match self {
            StringMutation::AppendTerminators => {
                let count = rng.gen_range(1..=5);
                let mut out = String::with_capacity(input.len() + count);
                out.push_str(input);
                out.extend(std::iter::repeat(TERMINATOR).take(count));
                out
            }
            StringMutation::Uppercase => input.to_uppercase(),
            StringMutation::Lowercase => input.to_lowercase(),
            StringMutation::Reverse => input.chars().rev().collect(),
            StringMutation::AppendScriptInjection => format!("{input}{SCRIPT_INJECTION}"),
            StringMutation::AppendSqlInjection => format!("{input}{SQL_INJECTION}"),
            StringMutation::AppendNul => format!("{input}\0"),
            StringMutation::RandomLowercase => {
                let len = rng.gen_range(5..=15);
                (0..len)
                    .map(|_| char::from(LOWERCASE[rng.gen_range(0..LOWERCASE.len())]))
                    .collect()
            }
        }
    }
}

/// Mutate a leaf under a `string` schema.
///
/// Non-string values are mutated through their compact JSON text, so the
/// result is always a string.
pub fn mutate_string<R: Rng + ?Sized>(value: &Value, rng: &mut R) -> Payload {
    let text: Cow<'_, str> = match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    };
    Payload::String(StringMutation::random(rng).apply(&text, rng))
}
