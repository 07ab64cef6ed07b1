//! Lockstep schema/sample walker.
//!
//! Descends a schema node and its sample value together, trusting the
//! schema's declared `type` over the sample's actual shape. Every
//! schema/sample combination has a defined result, so the walk is total:
//!
//! | Schema                    | Sample            | Result                          |
//! |---------------------------|-------------------|---------------------------------|
//! | `string`/`integer`/`number` | anything        | leaf strategy result            |
//! | `boolean`                 | anything          | random boolean                  |
//! | `null`                    | anything          | `null`                          |
//! | `array` + `items`         | array             | element-wise walk, same length  |
//! | `array` + `items`         | not an array      | `[]`                            |
//! | `array` without `items`   | anything          | `[]`                            |
//! | `object`                  | object            | declared keys walked, rest kept |
//! | `object`                  | not an object     | `{}`                            |
//! | unknown `type`            | anything          | unchanged (warning logged)      |
//! | no `type` / no schema     | object            | every member walked wildcard    |
//! | no `type` / no schema     | not an object     | unchanged                       |

use rand::Rng;
use serde_json::{Map, Value};
use tracing::warn;

use crate::payload::Payload;
use crate::schema_utils::{build_path, classify, SchemaNode, SchemaType};
use crate::strategies::{integer, mutate_boolean, number, string};

/// Run one traversal of `schema` over `value`, producing a fresh payload.
pub fn mutate_value<R: Rng + ?Sized>(schema: &Value, value: &Value, rng: &mut R) -> Payload {
    walk(schema, value, "#", rng)
}

fn walk<R: Rng + ?Sized>(schema: &Value, value: &Value, path: &str, rng: &mut R) -> Payload {
    match classify(schema) {
        SchemaNode::Typed(kind, obj) => walk_typed(kind, obj, value, path, rng),
        SchemaNode::Unsupported(tag) => {
            warn!(path, schema_type = %tag, "Unsupported schema type; passing value through");
            Payload::from(value)
        }
        SchemaNode::Wildcard | SchemaNode::Absent => match value.as_object() {
            Some(members) => walk_wildcard_members(members, path, rng),
            None => Payload::from(value),
        },
    }
}

fn walk_typed<R: Rng + ?Sized>(
    kind: SchemaType,
    schema: &Map<String, Value>,
    value: &Value,
    path: &str,
    rng: &mut R,
) -> Payload {
    match kind {
        SchemaType::String => string::mutate_string(value, rng),
        SchemaType::Integer => integer::mutate_integer(value, path, rng),
        SchemaType::Number => number::mutate_number(value, path, rng),
        SchemaType::Boolean => mutate_boolean(rng),
        SchemaType::Null => Payload::Null,
        SchemaType::Array => {
            let (Some(items), Some(elements)) = (schema.get("items"), value.as_array()) else {
                return Payload::Array(Vec::new());
            };
            Payload::Array(
                elements
                    .iter()
                    .enumerate()
                    .map(|(i, element)| walk(items, element, &build_path(path, &i.to_string()), rng))
                    .collect(),
            )
        }
        SchemaType::Object => {
            let Some(members) = value.as_object() else {
                return Payload::Object(Vec::new());
            };
            let properties = schema.get("properties").and_then(Value::as_object);
            Payload::Object(
                members
                    .iter()
                    .map(|(key, member)| {
                        let mutated = match properties.and_then(|p| p.get(key)) {
                            Some(sub_schema) => walk(sub_schema, member, &build_path(path, key), rng),
                            None => Payload::from(member),
                        };
                        (key.clone(), mutated)
                    })
                    .collect(),
            )
        }
    }
}

/// Walk every member of an object with an empty wildcard schema.
fn walk_wildcard_members<R: Rng + ?Sized>(
    members: &Map<String, Value>,
    path: &str,
    rng: &mut R,
) -> Payload {
    let wildcard = Value::Object(Map::new());
    Payload::Object(
        members
            .iter()
            .map(|(key, member)| {
                (
                    key.clone(),
                    walk(&wildcard, member, &build_path(path, key), rng),
                )
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn run(schema: Value, value: Value) -> Payload {
        let mut rng = StdRng::seed_from_u64(2024);
        mutate_value(&schema, &value, &mut rng)
    }

    #[test]
    fn test_null_schema_forces_null() {
        for sample in [json!(1), json!("x"), json!({"a": 1}), json!([1])] {
            assert_eq!(run(json!({"type": "null"}), sample), Payload::Null);
        }
    }

    #[test]
    fn test_array_without_items_is_empty() {
        assert_eq!(run(json!({"type": "array"}), json!([1, 2, 3])), Payload::Array(vec![]));
        assert_eq!(run(json!({"type": "array"}), json!("x")), Payload::Array(vec![]));
    }

    #[test]
    fn test_array_with_items_on_non_array_is_empty() {
        let schema = json!({"type": "array", "items": {"type": "integer"}});
        assert_eq!(run(schema, json!({"a": 1})), Payload::Array(vec![]));
    }

    #[test]
    fn test_array_with_items_preserves_length() {
        let schema = json!({"type": "array", "items": {"type": "boolean"}});
        let out = run(schema, json!([true, false, true, true]));
        let items = out.as_array().unwrap();
        assert_eq!(items.len(), 4);
        assert!(items.iter().all(|p| p.as_bool().is_some()));
    }

    #[test]
    fn test_object_on_non_object_is_empty() {
        assert_eq!(run(json!({"type": "object"}), json!(5)), Payload::Object(vec![]));
        assert_eq!(run(json!({"type": "object"}), json!(null)), Payload::Object(vec![]));
    }

    #[test]
    fn test_object_keeps_undeclared_fields_and_order() {
        let schema = json!({
            "type": "object",
            "properties": {
                "a": {"type": "null"},
                "missing": {"type": "string"}
            }
        });
        let out = run(schema, json!({"z": [1, 2], "a": "x", "b": 42}));
        assert_eq!(
            out,
            Payload::Object(vec![
                ("z".to_string(), Payload::from(&json!([1, 2]))),
                ("a".to_string(), Payload::Null),
                ("b".to_string(), Payload::from(&json!(42))),
            ])
        );
    }

    #[test]
    fn test_object_without_properties_copies_members() {
        let sample = json!({"a": "x", "n": {"deep": 1}});
        assert!(run(json!({"type": "object"}), sample.clone()) == sample);
        assert!(run(json!({"type": "object", "properties": 3}), sample.clone()) == sample);
    }

    #[test]
    fn test_unknown_type_passes_through() {
        let sample = json!({"k": [1, "two"]});
        assert!(run(json!({"type": "timestamp"}), sample.clone()) == sample);
        assert!(run(json!({"type": ["string", "null"]}), json!("s")) == json!("s"));
        assert!(run(json!({"type": 7}), json!(3.5)) == json!(3.5));
    }

    #[test]
    fn test_wildcard_recurses_objects_only() {
        let sample = json!({"a": 1, "b": {"c": "d"}, "e": [true]});
        assert!(run(json!({}), sample.clone()) == sample);
        assert!(run(json!({"items": {"type": "null"}}), json!([1])) == json!([1]));
        assert!(run(json!(null), sample.clone()) == sample);
        assert!(run(json!(false), json!("leaf")) == json!("leaf"));
    }

    #[test]
    fn test_nested_leaves_are_mutated() {
        let schema = json!({
            "type": "object",
            "properties": {
                "user": {
                    "type": "object",
                    "properties": {
                        "tags": {"type": "array", "items": {"type": "null"}}
                    }
                }
            }
        });
        let out = run(schema, json!({"user": {"tags": ["a", "b"], "id": 9}}));
        assert!(out == json!({"user": {"tags": [null, null], "id": 9}}));
    }

    #[test]
    fn test_string_leaf_always_yields_string() {
        let mut rng = StdRng::seed_from_u64(5);
        let schema = json!({"type": "string"});
        for sample in [json!("hello"), json!(12), json!(null), json!({"a": 1})] {
            for _ in 0..20 {
                let out = mutate_value(&schema, &sample, &mut rng);
                assert!(out.as_str().is_some(), "got {out:?}");
            }
        }
    }
}
