use serde_json::json;
use shapeguard::{
    from_failure, from_success, is, map, validate, Descriptor, DescriptorError, IntoTypeRef, Kind,
    Predicate, Props, TypeRef, Types, Value,
};
use stillwater::Validation;

fn string_ref() -> TypeRef {
    Types::string().into_type_ref()
}

fn number_ref() -> TypeRef {
    Types::number().into_type_ref()
}

// ====== array ======

#[test]
fn test_array_accumulates_every_element_error() {
    let t = Types::array(Types::number());
    let result = validate(&Value::from(json!([1, "a", 2, "b"])), &t);
    assert!(result.is_failure());

    if let Validation::Failure(errors) = result {
        assert_eq!(
            errors.descriptions(),
            vec![
                r#"Invalid value "a" supplied to : Array<number>/1: number"#,
                r#"Invalid value "b" supplied to : Array<number>/3: number"#,
            ]
        );
    }
}

#[test]
fn test_array_non_array_is_single_failure() {
    let t = Types::array(Types::number());
    let errors = from_failure(validate(&Value::from(json!({"0": 1})), &t));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].description, r#"Invalid value {"0":1} supplied to : Array<number>"#);
}

#[test]
fn test_array_returns_same_reference() {
    let t = Types::array(Types::string());
    let value = Value::from(json!(["a", "b"]));
    assert!(from_success(validate(&value, &t)).same(&value));
}

// ====== tuple ======

#[test]
fn test_tuple() {
    let t = Types::tuple(vec![string_ref(), number_ref()]);
    assert_eq!(t.name(), "[string, number]");
    assert!(is(&Value::from(json!(["a", 1])), &t));

    // extra elements are ignored
    assert!(is(&Value::from(json!(["a", 1, true])), &t));

    let errors = from_failure(validate(&Value::from(json!([1, 2])), &t));
    assert_eq!(
        errors[0].description,
        "Invalid value 1 supplied to : [string, number]/0: string"
    );
}

#[test]
fn test_tuple_missing_elements_are_undefined() {
    let t = Types::tuple(vec![string_ref(), number_ref()]);
    let errors = from_failure(validate(&Value::from(json!(["a"])), &t));
    assert_eq!(
        errors[0].description,
        "Invalid value undefined supplied to : [string, number]/1: number"
    );

    let optional = Types::tuple(vec![string_ref(), Types::maybe(Types::number()).into_type_ref()]);
    assert!(is(&Value::from(json!(["a"])), &optional));
}

// ====== union ======

#[test]
fn test_union_single_generic_error() {
    let t = Types::union(vec![string_ref(), number_ref()]);
    assert_eq!(t.name(), "(string | number)");

    let errors = from_failure(validate(&Value::from(true), &t));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].description, "Invalid value true supplied to : (string | number)");
}

#[test]
fn test_union_first_success_wins() {
    let doubled = Types::custom("number2", |v, c| {
        map(Types::number().validate(v, c), |n| {
            Value::from(n.as_f64().unwrap_or_default() * 2.0)
        })
    });
    let t = Types::union(vec![doubled.into_type_ref(), number_ref()]);
    assert_eq!(from_success(validate(&Value::from(2), &t)), Value::from(4));

    let t = Types::union(vec![number_ref(), Types::custom("never", |v, c| shapeguard::failure(v, c)).into_type_ref()]);
    assert_eq!(from_success(validate(&Value::from(2), &t)), Value::from(2));
}

// ====== intersection ======

#[test]
fn test_intersection_of_objects() {
    let a = Types::object(Props::new().field("a", Types::number()));
    let b = Types::object(Props::new().field("b", Types::number()));
    let t = Types::intersection(vec![a.clone().into_type_ref(), b.clone().into_type_ref()]).unwrap();
    assert_eq!(t.name(), "({ a: number } & { b: number })");

    let value = Value::from(json!({"a": 1, "b": 2}));
    let extracted = from_success(validate(&value, &t));
    assert!(extracted.same(&value));
    assert!(is(&extracted, &a));
    assert!(is(&extracted, &b));
}

#[test]
fn test_intersection_accumulates_at_same_depth() {
    let t = Types::intersection(vec![
        Types::object(Props::new().field("a", Types::number())).into_type_ref(),
        Types::object(Props::new().field("b", Types::number())).into_type_ref(),
    ])
    .unwrap();

    let errors = from_failure(validate(&Value::from(json!({})), &t));
    let descriptions: Vec<_> = errors.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(
        descriptions,
        vec![
            "Invalid value undefined supplied to : ({ a: number } & { b: number })/a: number",
            "Invalid value undefined supplied to : ({ a: number } & { b: number })/b: number",
        ]
    );
}

#[test]
fn test_empty_intersection_is_construction_error() {
    let err = Types::intersection(Vec::new()).err();
    assert_eq!(err, Some(DescriptorError::EmptyIntersection));
    assert_eq!(
        DescriptorError::EmptyIntersection.to_string(),
        "intersection requires at least one member type"
    );
}

// ====== maybe ======

#[test]
fn test_maybe() {
    let t = Types::maybe(Types::string());
    assert_eq!(t.name(), "?string");
    assert!(is(&Value::Null, &t));
    assert!(is(&Value::Undefined, &t));
    assert!(is(&Value::from("a"), &t));

    let errors = from_failure(validate(&Value::from(1), &t));
    assert_eq!(errors[0].description, "Invalid value 1 supplied to : ?string");
}

// ====== mapping ======

#[test]
fn test_mapping() {
    let t = Types::mapping(Types::string(), Types::number());
    assert!(is(&Value::from(json!({})), &t));
    assert!(is(&Value::from(json!({"a": 1, "b": 2})), &t));

    let errors = from_failure(validate(&Value::from(json!({"a": "x", "b": "y"})), &t));
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[1].context.keys(), vec!["b"]);

    let errors = from_failure(validate(&Value::from(1), &t));
    assert_eq!(errors[0].description, "Invalid value 1 supplied to : { [key: string]: number }");
}

#[test]
fn test_mapping_with_literal_domain() {
    let domain = Types::union(vec![Types::literal("a").into_type_ref(), Types::literal("b").into_type_ref()]);
    let t = Types::mapping(domain, Types::number());

    assert!(is(&Value::from(json!({"a": 1})), &t));
    let errors = from_failure(validate(&Value::from(json!({"c": 1})), &t));
    assert_eq!(
        errors[0].description,
        r#"Invalid value "c" supplied to : { [key: ("a" | "b")]: number }/c: ("a" | "b")"#
    );
}

// ====== refinement ======

#[test]
fn test_refinement() {
    let positive = Types::refinement(
        Types::number(),
        Predicate::named("positive", |v| v.as_f64().is_some_and(|n| n > 0.0)),
    );
    assert_eq!(positive.name(), "(number | positive)");
    assert!(is(&Value::from(1), &positive));
    assert!(!is(&Value::from(-1), &positive));
    assert!(!is(&Value::from("1"), &positive));

    let Kind::Refinement { inner, predicate } = positive.kind() else {
        panic!("expected refinement kind");
    };
    assert_eq!(inner.name(), "number");
    assert_eq!(predicate.name(), "positive");
}

#[test]
fn test_pattern_refinement() {
    let email = Types::refinement(Types::string(), Predicate::pattern("@").unwrap()).named("Email");
    assert!(is(&Value::from("a@b"), &email));

    let errors = from_failure(validate(&Value::from("ab"), &email));
    assert_eq!(errors[0].description, r#"Invalid value "ab" supplied to : Email"#);
}
