//! Mutated payload tree and its textual rendering.
//!
//! `serde_json::Value` cannot hold non-finite floats, but the number strategies
//! deliberately produce `Infinity`, `-Infinity` and `NaN`. [`Payload`] mirrors
//! the JSON value vocabulary with one extra [`Payload::Float`] variant that may
//! carry those values, and a renderer that spells them as bare tokens.

use std::fmt;
use std::io::{self, Write};

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::{Number, Value};

/// A generated payload: the sample's shape with mutated leaves.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Null,
    Bool(bool),
    /// A JSON number carried over from the sample or produced by the
    /// integer strategies. Always finite.
    Number(Number),
    /// A float produced by the number strategies. May be non-finite.
    Float(f64),
    String(String),
    Array(Vec<Payload>),
    /// Object members in sample order.
    Object(Vec<(String, Payload)>),
}

/// Text layout for rendered payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Two-space indented, one member per line.
    #[default]
    Pretty,
    /// No insignificant whitespace.
    Compact,
}

impl Payload {
    pub fn is_null(&self) -> bool {
        matches!(self, Payload::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Payload::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Payload::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Payload::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Numeric view of either number variant.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Payload::Number(n) => n.as_f64(),
            Payload::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Payload]> {
        match self {
            Payload::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[(String, Payload)]> {
        match self {
            Payload::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Look up an object member by key. `None` for non-objects.
    pub fn get(&self, key: &str) -> Option<&Payload> {
        self.as_object()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Render to a string.
    pub fn to_json_string(&self, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec<u8> cannot fail.
        let _ = self.write_json(&mut buf, format);
        String::from_utf8(buf).unwrap_or_default()
    }

    /// Render to a writer.
    ///
    /// Strings and finite numbers are formatted exactly as `serde_json` does;
    /// non-finite floats are written as `NaN`, `Infinity` or `-Infinity`.
    pub fn write_json<W: Write + ?Sized>(&self, w: &mut W, format: OutputFormat) -> io::Result<()> {
        write_node(w, self, format, 0)
    }
}

impl From<&Value> for Payload {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Payload::Null,
            Value::Bool(b) => Payload::Bool(*b),
            Value::Number(n) => Payload::Number(n.clone()),
            Value::String(s) => Payload::String(s.clone()),
            Value::Array(items) => Payload::Array(items.iter().map(Payload::from).collect()),
            Value::Object(map) => Payload::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Payload::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::from(&value)
    }
}

impl PartialEq<Value> for Payload {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Payload::Null, Value::Null) => true,
            (Payload::Bool(a), Value::Bool(b)) => a == b,
            (Payload::Number(a), Value::Number(b)) => a == b,
            (Payload::Float(a), Value::Number(b)) => b.as_f64() == Some(*a),
            (Payload::String(a), Value::String(b)) => a == b,
            (Payload::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
            }
            (Payload::Object(a), Value::Object(b)) => {
                a.len() == b.len() && a.iter().all(|(k, v)| b.get(k).is_some_and(|bv| v == bv))
            }
            _ => false,
        }
    }
}

/// Standard serde serialization. Non-finite floats go through
/// `serialize_f64`, which `serde_json` writes as `null`.
impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Payload::Null => serializer.serialize_unit(),
            Payload::Bool(b) => serializer.serialize_bool(*b),
            Payload::Number(n) => n.serialize(serializer),
            Payload::Float(f) => serializer.serialize_f64(*f),
            Payload::String(s) => serializer.serialize_str(s),
            Payload::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Payload::Object(members) => {
                let mut map = serializer.serialize_map(Some(members.len()))?;
                for (k, v) in members {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string(OutputFormat::Compact))
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

const INDENT: &[u8] = b"  ";

fn write_node<W: Write + ?Sized>(
    w: &mut W,
    node: &Payload,
    format: OutputFormat,
    depth: usize,
) -> io::Result<()> {
    match node {
        Payload::Null => w.write_all(b"null"),
        Payload::Bool(b) => write!(w, "{b}"),
        Payload::Number(n) => write!(w, "{n}"),
        Payload::Float(f) => write_float(w, *f),
        Payload::String(s) => write_string(w, s),
        Payload::Array(items) => {
            if items.is_empty() {
                return w.write_all(b"[]");
            }
            w.write_all(b"[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    w.write_all(b",")?;
                }
                newline_indent(w, format, depth + 1)?;
                write_node(w, item, format, depth + 1)?;
            }
            newline_indent(w, format, depth)?;
            w.write_all(b"]")
        }
        Payload::Object(members) => {
            if members.is_empty() {
                return w.write_all(b"{}");
            }
            w.write_all(b"{")?;
            for (i, (key, value)) in members.iter().enumerate() {
                if i > 0 {
                    w.write_all(b",")?;
                }
                newline_indent(w, format, depth + 1)?;
                write_string(w, key)?;
                match format {
                    OutputFormat::Pretty => w.write_all(b": ")?,
                    OutputFormat::Compact => w.write_all(b":")?,
                }
                write_node(w, value, format, depth + 1)?;
            }
            newline_indent(w, format, depth)?;
            w.write_all(b"}")
        }
    }
}

fn newline_indent<W: Write + ?Sized>(w: &mut W, format: OutputFormat, depth: usize) -> io::Result<()> {
    if format == OutputFormat::Compact {
        return Ok(());
    }
    w.write_all(b"\n")?;
    for _ in 0..depth {
        w.write_all(INDENT)?;
    }
    Ok(())
}

fn write_string<W: Write + ?Sized>(w: &mut W, s: &str) -> io::Result<()> {
    serde_json::to_writer(&mut *w, s).map_err(io::Error::from)
}

fn write_float<W: Write + ?Sized>(w: &mut W, f: f64) -> io::Result<()> {
    if f.is_nan() {
        return w.write_all(b"NaN");
    }
    if f.is_infinite() {
        let token: &[u8] = if f > 0.0 { b"Infinity" } else { b"-Infinity" };
        return w.write_all(token);
    }
    match Number::from_f64(f) {
        Some(n) => write!(w, "{n}"),
        None => w.write_all(b"null"),
    }
}
