//! Array and tuple descriptors.
//!
//! This module provides [`ArrayType`], which validates every element against
//! one descriptor, and [`TupleType`], which validates elements positionally.
//! Both check that the value is an array first and accumulate every element
//! error after that.

use crate::context::Context;
use crate::error::ValidationError;
use crate::validation::{absorb, collect, failure, ValidationResult};
use crate::value::Value;

use super::traits::{Descriptor, IntoTypeRef, Kind, TypeRef};

/// A descriptor for arrays whose elements all match one descriptor.
///
/// # Example
///
/// ```rust
/// use shapeguard::{from_failure, validate, Types, Value};
/// use serde_json::json;
///
/// let numbers = Types::array(Types::number());
///
/// assert!(validate(&Value::from(json!([1, 2, 3])), &numbers).is_success());
///
/// // Every bad element is reported
/// let errors = from_failure(validate(&Value::from(json!([1, "a", "b"])), &numbers));
/// assert_eq!(errors.len(), 2);
/// assert_eq!(
///     errors[0].description,
///     r#"Invalid value "a" supplied to : Array<number>/1: number"#
/// );
/// ```
#[derive(Clone)]
pub struct ArrayType {
    name: String,
    item: TypeRef,
}

impl ArrayType {
    pub fn new(item: impl IntoTypeRef) -> Self {
        let item = item.into_type_ref();
        Self {
            name: format!("Array<{}>", item.name()),
            item,
        }
    }

    /// Returns the element descriptor.
    pub fn item(&self) -> &TypeRef {
        &self.item
    }
}

impl Descriptor for ArrayType {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, value: &Value, context: &Context) -> ValidationResult<Value> {
        let items = match value.as_array() {
            Some(items) => items,
            None => return failure(value, context),
        };

        let mut errors: Vec<ValidationError> = Vec::new();
        for (index, item) in items.iter().enumerate() {
            let item_context = context.push(index.to_string(), &*self.item);
            absorb(self.item.validate(item, &item_context), &mut errors);
        }

        collect(errors, value.clone())
    }

    fn kind(&self) -> Kind<'_> {
        Kind::Array(&self.item)
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// A descriptor for arrays validated position by position.
///
/// Elements past the last declared position are ignored; missing elements
/// validate as `Undefined`.
#[derive(Clone)]
pub struct TupleType {
    name: String,
    types: Vec<TypeRef>,
}

impl TupleType {
    pub fn new(types: Vec<TypeRef>) -> Self {
        let names: Vec<_> = types.iter().map(|t| t.name()).collect();
        Self {
            name: format!("[{}]", names.join(", ")),
            types,
        }
    }

    pub fn types(&self) -> &[TypeRef] {
        &self.types
    }
}

impl Descriptor for TupleType {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, value: &Value, context: &Context) -> ValidationResult<Value> {
        let items = match value.as_array() {
            Some(items) => items,
            None => return failure(value, context),
        };

        let mut errors = Vec::new();
        for (index, item_type) in self.types.iter().enumerate() {
            let item = items.get(index).cloned().unwrap_or_default();
            let item_context = context.push(index.to_string(), &**item_type);
            absorb(item_type.validate(&item, &item_context), &mut errors);
        }

        collect(errors, value.clone())
    }

    fn kind(&self) -> Kind<'_> {
        Kind::Tuple(&self.types)
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
    use crate::validation::{from_failure, from_success};
    use serde_json::json;

    fn descriptions(result: ValidationResult<Value>) -> Vec<String> {
        from_failure(result)
            .into_iter()
            .map(|e| e.description)
            .collect()
    }

    #[test]
    fn test_array_name() {
        assert_eq!(ArrayType::new(Types::string()).name(), "Array<string>");
        assert_eq!(
            ArrayType::new(ArrayType::new(Types::number())).name(),
            "Array<Array<number>>"
        );
    }

    #[test]
    fn test_array_rejects_non_array_without_descending() {
        let t = ArrayType::new(Types::number());
        assert_eq!(
            descriptions(validate(&Value::from(1), &t)),
            vec!["Invalid value 1 supplied to : Array<number>"]
        );
        assert_eq!(
            descriptions(validate(&Value::from(json!({"0": 1})), &t)),
            vec![r#"Invalid value {"0":1} supplied to : Array<number>"#]
        );
    }

    #[test]
    fn test_array_accumulates_all_elements() {
        let t = ArrayType::new(Types::number());
        assert_eq!(
            descriptions(validate(&Value::from(json!(["a", 1, null])), &t)),
            vec![
                r#"Invalid value "a" supplied to : Array<number>/0: number"#,
                "Invalid value null supplied to : Array<number>/2: number",
            ]
        );
    }

    #[test]
    fn test_array_keeps_reference() {
        let t = ArrayType::new(Types::number());
        let value = Value::from(json!([1, 2]));
        assert!(from_success(validate(&value, &t)).same(&value));

        let empty = Value::from(json!([]));
        assert!(from_success(validate(&empty, &t)).same(&empty));
    }

    #[test]
    fn test_tuple_name() {
        let t = TupleType::new(vec![
            Types::string().into_type_ref(),
            Types::number().into_type_ref(),
        ]);
        assert_eq!(t.name(), "[string, number]");
        assert_eq!(TupleType::new(Vec::new()).name(), "[]");
    }

    #[test]
    fn test_tuple_positions() {
        let t = TupleType::new(vec![
            Types::string().into_type_ref(),
            Types::number().into_type_ref(),
        ]);
        assert!(validate(&Value::from(json!(["a", 1])), &t).is_success());
        assert_eq!(
            descriptions(validate(&Value::from(json!([1, 2])), &t)),
            vec!["Invalid value 1 supplied to : [string, number]/0: string"]
        );
        assert_eq!(
            descriptions(validate(&Value::from(json!([1, "b"])), &t)),
            vec![
                "Invalid value 1 supplied to : [string, number]/0: string",
                r#"Invalid value "b" supplied to : [string, number]/1: number"#,
            ]
        );
    }

    #[test]
    fn test_tuple_ignores_extra_and_checks_missing() {
        let t = TupleType::new(vec![
            Types::string().into_type_ref(),
            Types::number().into_type_ref(),
        ]);
        let value = Value::from(json!(["a", 1, "extra", {}]));
        assert!(from_success(validate(&value, &t)).same(&value));

        assert_eq!(
            descriptions(validate(&Value::from(json!(["a"])), &t)),
            vec!["Invalid value undefined supplied to : [string, number]/1: number"]
        );
    }
}
