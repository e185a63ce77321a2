//! Structural object descriptors.
//!
//! This module provides [`Props`], the ordered field-name → descriptor
//! association, and the three descriptors built on it:
//! - [`ObjectType`]: every declared field must validate; undeclared keys are ignored
//! - [`ExactType`]: like `ObjectType`, but undeclared keys are errors
//! - [`ShapeType`]: only declared keys that are present are validated;
//!   undeclared keys are errors
//!
//! Field errors are accumulated in declaration order; a value that is not an
//! object at all fails once, without descending.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::context::{Context, ContextEntry};
use crate::error::ValidationError;
use crate::validation::{absorb, collect, failure, ValidationResult};
use crate::value::{Record, Value};

use super::primitive::NIL;
use super::traits::{Descriptor, IntoTypeRef, Kind, TypeRef};

/// Declared fields of an object descriptor, in declaration order.
///
/// # Example
///
/// ```rust
/// use shapeguard::{Props, Types};
///
/// let props = Props::new()
///     .field("name", Types::string())
///     .field("age", Types::maybe(Types::number()));
///
/// assert_eq!(props.len(), 2);
/// assert!(props.contains_key("age"));
/// ```
#[derive(Clone, Default)]
pub struct Props(IndexMap<String, TypeRef>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field; redeclaring a name replaces its descriptor in place.
    pub fn field(mut self, name: impl Into<String>, descriptor: impl IntoTypeRef) -> Self {
        self.0.insert(name.into(), descriptor.into_type_ref());
        self
    }

    pub fn get(&self, name: &str) -> Option<&TypeRef> {
        self.0.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &TypeRef> {
        self.0.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeRef)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The default object name, e.g. `{ a: number, b: string }`.
    pub(crate) fn type_name(&self) -> String {
        let fields: Vec<_> = self
            .iter()
            .map(|(key, descriptor)| format!("{}: {}", key, descriptor.name()))
            .collect();
        format!("{{ {} }}", fields.join(", "))
    }

    /// Validates every declared field, treating absent fields as `Undefined`.
    fn validate_fields(&self, fields: &Record, context: &Context, errors: &mut Vec<ValidationError>) {
        for (key, descriptor) in self.iter() {
            let field = fields.get(key).cloned().unwrap_or_default();
            let field_context = context.push(key, &**descriptor);
            absorb(descriptor.validate(&field, &field_context), errors);
        }
    }

    /// Reports every own key that is not declared, expecting `nil` there.
    fn check_additional(&self, fields: &Record, context: &Context, errors: &mut Vec<ValidationError>) {
        for (key, field) in fields {
            if !self.contains_key(key) {
                let key_context = context.push_entry(ContextEntry::new(key.as_str(), NIL));
                errors.push(ValidationError::new(field.clone(), key_context));
            }
        }
    }
}

impl<K: Into<String>> FromIterator<(K, TypeRef)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, TypeRef)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// A descriptor for objects with declared fields.
///
/// Missing fields validate as `Undefined`, so optional fields are declared
/// with `maybe`. Undeclared keys are neither validated nor reported.
///
/// # Example
///
/// ```rust
/// use shapeguard::{from_failure, validate, Props, Types, Value};
/// use serde_json::json;
///
/// let person = Types::object(
///     Props::new()
///         .field("name", Types::string())
///         .field("age", Types::number()),
/// );
///
/// assert!(validate(&Value::from(json!({"name": "Ann", "age": 40, "x": 1})), &person).is_success());
///
/// let errors = from_failure(validate(&Value::from(json!({"name": "Ann"})), &person));
/// assert_eq!(
///     errors[0].description,
///     "Invalid value undefined supplied to : { name: string, age: number }/age: number"
/// );
/// ```
#[derive(Clone)]
pub struct ObjectType {
    name: String,
    props: Props,
}

impl ObjectType {
    pub fn new(props: Props) -> Self {
        Self {
            name: props.type_name(),
            props,
        }
    }

    pub fn properties(&self) -> &Props {
        &self.props
    }
}

impl Descriptor for ObjectType {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, value: &Value, context: &Context) -> ValidationResult<Value> {
        let fields = match value.as_record() {
            Some(fields) => fields,
            None => return failure(value, context),
        };

        let mut errors = Vec::new();
        self.props.validate_fields(fields, context, &mut errors);
        collect(errors, value.clone())
    }

    fn kind(&self) -> Kind<'_> {
        Kind::Object(&self.props)
    }

    fn props(&self) -> Option<&Props> {
        Some(&self.props)
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// An object descriptor that also rejects undeclared keys.
///
/// Each undeclared key is reported at its own key with expected type `nil`,
/// alongside any declared-field errors.
#[derive(Clone)]
pub struct ExactType {
    name: String,
    props: Props,
}

impl ExactType {
    pub fn new(props: Props) -> Self {
        Self {
            name: format!("$Exact<{}>", props.type_name()),
            props,
        }
    }
}

impl Descriptor for ExactType {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, value: &Value, context: &Context) -> ValidationResult<Value> {
        let fields = match value.as_record() {
            Some(fields) => fields,
            None => return failure(value, context),
        };

        let mut errors = Vec::new();
        self.props.validate_fields(fields, context, &mut errors);
        self.props.check_additional(fields, context, &mut errors);
        collect(errors, value.clone())
    }

    fn kind(&self) -> Kind<'_> {
        Kind::Exact(&self.props)
    }

    fn props(&self) -> Option<&Props> {
        Some(&self.props)
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// A partial view of an object descriptor.
///
/// Declared keys are optional but, when present, must validate; undeclared
/// keys are rejected as in [`ExactType`]. If a field's validated value is not
/// the same as its input, the result is a new object with the validated
/// fields written over the original; otherwise the input itself is returned.
///
/// # Example
///
/// ```rust
/// use shapeguard::{from_success, is, validate, Props, Types, Value};
/// use serde_json::json;
///
/// let patch = Types::shape(Types::object(Props::new().field("a", Types::number())));
///
/// assert!(is(&Value::from(json!({})), &patch));
/// assert!(!is(&Value::from(json!({"a": 1, "b": 2})), &patch));
///
/// let value = Value::from(json!({"a": 1}));
/// assert!(from_success(validate(&value, &patch)).same(&value));
/// ```
#[derive(Clone)]
pub struct ShapeType {
    name: String,
    object: Arc<ObjectType>,
}

impl ShapeType {
    pub fn new(object: impl Into<Arc<ObjectType>>) -> Self {
        let object = object.into();
        Self {
            name: format!("$Shape<{}>", object.name()),
            object,
        }
    }

    pub fn object(&self) -> &Arc<ObjectType> {
        &self.object
    }
}

impl Descriptor for ShapeType {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, value: &Value, context: &Context) -> ValidationResult<Value> {
        let fields = match value.as_record() {
            Some(fields) => fields,
            None => return failure(value, context),
        };

        let props = self.object.properties();
        let mut errors = Vec::new();
        let mut changed = Record::new();
        for (key, descriptor) in props.iter() {
            let Some(field) = fields.get(key) else {
                continue;
            };
            let field_context = context.push(key, &**descriptor);
            if let Some(validated) = absorb(descriptor.validate(field, &field_context), &mut errors) {
                if !validated.same(field) {
                    changed.insert(key.to_string(), validated);
                }
            }
        }
        props.check_additional(fields, context, &mut errors);

        let accepted = if changed.is_empty() {
            value.clone()
        } else {
            value.with_fields(changed)
        };
        collect(errors, accepted)
    }

    fn kind(&self) -> Kind<'_> {
        Kind::Shape(&self.object)
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::validate;
    use crate::schema::Types;
    use crate::validation::{from_failure, from_success, map};
    use serde_json::json;

    fn descriptions(result: ValidationResult<Value>) -> Vec<String> {
        from_failure(result)
            .into_iter()
            .map(|e| e.description)
            .collect()
    }

    fn a_string() -> Props {
        Props::new().field("a", Types::string())
    }

    fn doubled() -> TypeRef {
        Types::custom("number2", |v, c| {
            map(Types::number().validate(v, c), |n| {
                Value::from(n.as_f64().unwrap_or_default() * 2.0)
            })
        })
        .into_type_ref()
    }

    #[test]
    fn test_object_names() {
        assert_eq!(ObjectType::new(a_string()).name(), "{ a: string }");
        assert_eq!(ObjectType::new(Props::new()).name(), "{  }");
        assert_eq!(
            ObjectType::new(a_string().field("b", Types::number())).name(),
            "{ a: string, b: number }"
        );
    }

    #[test]
    fn test_object_root_failure() {
        let t = ObjectType::new(Props::new().field("a", Types::number()));
        assert_eq!(
            descriptions(validate(&Value::from(1), &t)),
            vec!["Invalid value 1 supplied to : { a: number }"]
        );
    }

    #[test]
    fn test_object_ignores_undeclared_keys() {
        let t = ObjectType::new(a_string());
        let value = Value::from(json!({"a": "s", "extra": 2}));
        assert!(from_success(validate(&value, &t)).same(&value));
    }

    #[test]
    fn test_object_accumulates_in_declaration_order() {
        let t = ObjectType::new(a_string().field("b", Types::number()));
        assert_eq!(
            descriptions(validate(&Value::from(json!({"b": "x", "a": 1})), &t)),
            vec![
                "Invalid value 1 supplied to : { a: string, b: number }/a: string",
                r#"Invalid value "x" supplied to : { a: string, b: number }/b: number"#,
            ]
        );
    }

    #[test]
    fn test_object_returns_input_even_if_field_transforms() {
        let t = ObjectType::new(Props::new().field("a", doubled()));
        let value = Value::from(json!({"a": 1}));
        assert!(from_success(validate(&value, &t)).same(&value));
    }

    #[test]
    fn test_exact() {
        let t = ExactType::new(a_string());
        assert_eq!(t.name(), "$Exact<{ a: string }>");
        assert!(validate(&Value::from(json!({"a": "s"})), &t).is_success());
        assert_eq!(
            descriptions(validate(&Value::from(1), &t)),
            vec!["Invalid value 1 supplied to : $Exact<{ a: string }>"]
        );
        assert_eq!(
            descriptions(validate(&Value::from(json!({})), &t)),
            vec!["Invalid value undefined supplied to : $Exact<{ a: string }>/a: string"]
        );
        assert_eq!(
            descriptions(validate(&Value::from(json!({"a": 1})), &t)),
            vec!["Invalid value 1 supplied to : $Exact<{ a: string }>/a: string"]
        );
    }

    #[test]
    fn test_exact_additional_props() {
        let t = ExactType::new(a_string());
        assert_eq!(
            descriptions(validate(&Value::from(json!({"a": "s", "additional": 2})), &t)),
            vec!["Invalid value 2 supplied to : $Exact<{ a: string }>/additional: nil"]
        );
    }

    #[test]
    fn test_exact_reports_field_and_additional_errors_together() {
        let t = ExactType::new(a_string());
        assert_eq!(
            descriptions(validate(&Value::from(json!({"a": 1, "b": true})), &t)),
            vec![
                "Invalid value 1 supplied to : $Exact<{ a: string }>/a: string",
                "Invalid value true supplied to : $Exact<{ a: string }>/b: nil",
            ]
        );
    }

    #[test]
    fn test_exact_keeps_reference() {
        let t = ExactType::new(a_string());
        let value = Value::from(json!({"a": "s"}));
        assert!(from_success(validate(&value, &t)).same(&value));
    }

    #[test]
    fn test_shape() {
        let t = ShapeType::new(ObjectType::new(a_string()));
        assert_eq!(t.name(), "$Shape<{ a: string }>");
        assert!(validate(&Value::from(json!({})), &t).is_success());
        assert!(validate(&Value::from(json!({"a": "s"})), &t).is_success());
        assert_eq!(
            descriptions(validate(&Value::from(1), &t)),
            vec!["Invalid value 1 supplied to : $Shape<{ a: string }>"]
        );
        assert_eq!(
            descriptions(validate(&Value::from(json!({"a": 1})), &t)),
            vec!["Invalid value 1 supplied to : $Shape<{ a: string }>/a: string"]
        );
        assert_eq!(
            descriptions(validate(&Value::from(json!({"a": "s", "additional": 2})), &t)),
            vec!["Invalid value 2 supplied to : $Shape<{ a: string }>/additional: nil"]
        );
    }

    #[test]
    fn test_shape_same_reference_when_unchanged() {
        let t = ShapeType::new(ObjectType::new(a_string()));
        let value = Value::from(json!({"a": "s"}));
        assert!(from_success(validate(&value, &t)).same(&value));
    }

    #[test]
    fn test_shape_new_reference_when_changed() {
        let t = ShapeType::new(ObjectType::new(Props::new().field("a", doubled()).field("b", Types::string())));
        let value = Value::from(json!({"a": 1, "b": "x"}));
        let accepted = from_success(validate(&value, &t));
        assert!(!accepted.same(&value));
        assert_eq!(accepted, Value::from(json!({"a": 2, "b": "x"})));
        assert_eq!(value, Value::from(json!({"a": 1, "b": "x"})));
    }

    #[test]
    fn test_props_from_iter() {
        let props: Props = vec![
            ("x", Types::number().into_type_ref()),
            ("y", Types::number().into_type_ref()),
        ]
        .into_iter()
        .collect();
        assert_eq!(props.keys().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(props.type_name(), "{ x: number, y: number }");
    }
}
