//! Shared schema utilities for node classification and path construction.
//!
//! Provides two concerns used by the walker:
//! 1. **JSON Pointer escaping** (RFC 6901) for data keys with `/` or `~`,
//!    so diagnostics can name the exact data position.
//! 2. **Schema node classification**: reading the `type` discriminator of a
//!    schema node into a [`SchemaNode`].

use std::borrow::Cow;
use std::fmt;

use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// JSON Pointer escaping (RFC 6901)
// ---------------------------------------------------------------------------

/// Escape a single path segment per RFC 6901.
///
/// - `~` → `~0`
/// - `/` → `~1`
///
/// Returns `Cow::Borrowed` when no escaping is needed (the common case).
pub fn escape_pointer_segment(segment: &str) -> Cow<'_, str> {
    if segment.contains('~') || segment.contains('/') {
        Cow::Owned(segment.replace('~', "~0").replace('/', "~1"))
    } else {
        Cow::Borrowed(segment)
    }
}

/// Build a JSON Pointer path by appending one segment to a parent path.
///
/// # Example
/// ```
/// use json_mutator_core::build_path;
/// assert_eq!(build_path("#/users", "a/b"), "#/users/a~1b");
/// ```
pub fn build_path(parent: &str, segment: &str) -> String {
    let escaped = escape_pointer_segment(segment);
    let mut path = String::with_capacity(parent.len() + 1 + escaped.len());
    path.push_str(parent);
    path.push('/');
    path.push_str(&escaped);
    path
}

// ---------------------------------------------------------------------------
// Schema node classification
// ---------------------------------------------------------------------------

/// The `type` keywords the engine knows how to mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaType {
    String,
    Integer,
    Number,
    Boolean,
    Null,
    Array,
    Object,
}

impl SchemaType {
    /// Parse a `type` keyword value. Returns `None` for anything unrecognised.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "string" => Some(SchemaType::String),
            "integer" => Some(SchemaType::Integer),
            "number" => Some(SchemaType::Number),
            "boolean" => Some(SchemaType::Boolean),
            "null" => Some(SchemaType::Null),
            "array" => Some(SchemaType::Array),
            "object" => Some(SchemaType::Object),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SchemaType::String => "string",
            SchemaType::Integer => "integer",
            SchemaType::Number => "number",
            SchemaType::Boolean => "boolean",
            SchemaType::Null => "null",
            SchemaType::Array => "array",
            SchemaType::Object => "object",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a schema node tells the walker about the value paired with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchemaNode<'a> {
    /// A mapping with a recognised `type`.
    Typed(SchemaType, &'a Map<String, Value>),
    /// A mapping whose `type` is present but not one the engine handles.
    /// Holds the raw `type` value (which may not even be a string).
    Unsupported(&'a Value),
    /// A mapping without `type`.
    Wildcard,
    /// Not a mapping at all.
    Absent,
}

/// Classify a schema node by its `type` discriminator.
pub fn classify(schema: &Value) -> SchemaNode<'_> {
    let obj = match schema.as_object() {
        Some(o) => o,
        None => return SchemaNode::Absent,
    };

    match obj.get("type") {
        None => SchemaNode::Wildcard,
        Some(tag) => match tag.as_str().and_then(SchemaType::from_keyword) {
            Some(kind) => SchemaNode::Typed(kind, obj),
            None => SchemaNode::Unsupported(tag),
        },
    }
}

/// Short name of a value's JSON kind, for diagnostics.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
