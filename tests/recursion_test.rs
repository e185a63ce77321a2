//! Tests for self-referential descriptors.

use serde_json::json;
use shapeguard::{
    from_failure, is, recursion, validate, Descriptor, IntoTypeRef, Kind, Props, Types, Value,
};

#[test]
fn test_optional_self_reference() {
    let t = recursion("T", |t| {
        Types::object(
            Props::new()
                .field("a", Types::number())
                .field("b", Types::maybe(t)),
        )
    });

    assert!(is(&Value::from(json!({"a": 1, "b": {"a": 2}})), &*t));

    let errors = from_failure(validate(&Value::from(json!({"a": 1, "b": {"a": "x"}})), &*t));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].context.keys(), vec!["b", "a"]);
    assert_eq!(
        errors[0].description,
        r#"Invalid value "x" supplied to : T/b: ?T/a: number"#
    );
}

#[test]
fn test_deep_input_is_followed() {
    let list = recursion("List", |list| {
        Types::object(
            Props::new()
                .field("head", Types::number())
                .field("tail", Types::maybe(list)),
        )
    });

    let mut value = json!({"head": 0});
    for i in 1..50 {
        value = json!({"head": i, "tail": value});
    }
    assert!(is(&Value::from(value), &*list));
}

#[test]
fn test_mutual_structure_through_union() {
    let expr = recursion("Expr", |expr| {
        Types::union(vec![
            Types::number().into_type_ref(),
            Types::object(
                Props::new()
                    .field("op", Types::literal("+"))
                    .field("args", Types::array(expr)),
            )
            .into_type_ref(),
        ])
    });

    assert_eq!(expr.name(), "Expr");
    assert!(is(&Value::from(json!(1)), &*expr));
    assert!(is(&Value::from(json!({"op": "+", "args": [1, {"op": "+", "args": [2, 3]}]})), &*expr));
    assert!(!is(&Value::from(json!({"op": "+", "args": [1, "2"]})), &*expr));

    // union failures collapse to a single error at the union itself
    let errors = from_failure(validate(&Value::from(json!({"op": "-", "args": []})), &*expr));
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].description,
        r#"Invalid value {"args":[],"op":"-"} supplied to : Expr"#
    );
}

#[test]
fn test_introspection_reaches_placeholder() {
    let t = recursion("T", |t| Types::array(t));
    let Kind::Array(item) = t.kind() else {
        panic!("expected array kind");
    };
    let Kind::Recursive(placeholder) = item.kind() else {
        panic!("expected recursive kind");
    };
    assert_eq!(placeholder.name(), "T");
    assert_eq!(placeholder.resolve().unwrap().name(), "T");
    assert!(is(&Value::from(json!([[], [[]]])), &*t));
    assert!(!is(&Value::from(json!([[1]])), &*t));
}

#[test]
fn test_parts_outlive_the_root() {
    let (child, owned) = {
        let t = recursion("T", |t| {
            Types::object(
                Props::new()
                    .field("a", Types::number())
                    .field("b", Types::maybe(t)),
            )
        });
        (t.properties().get("b").unwrap().clone(), shapeguard::ObjectType::clone(&t))
    };

    assert!(is(&Value::from(json!({"a": 2})), &*child));
    assert!(is(&Value::from(json!({"a": 1, "b": {"a": 2}})), &owned));
    assert!(!is(&Value::from(json!({"a": 1, "b": {"a": null}})), &owned));
}
