//! Key-value mapping descriptors.

use crate::context::Context;
use crate::validation::{absorb, collect, failure, ValidationResult};
use crate::value::Value;

use super::traits::{Descriptor, IntoTypeRef, Kind, TypeRef};

/// A descriptor for objects used as dictionaries.
///
/// Every own key must match the domain descriptor (keys are validated as
/// strings) and every own value the codomain descriptor. Errors from both are
/// accumulated across all keys.
///
/// # Example
///
/// ```rust
/// use shapeguard::{from_failure, validate, Types, Value};
/// use serde_json::json;
///
/// let scores = Types::mapping(Types::string(), Types::number());
/// assert_eq!(shapeguard::Descriptor::name(&scores), "{ [key: string]: number }");
///
/// assert!(validate(&Value::from(json!({"alice": 3, "bob": 5})), &scores).is_success());
///
/// let errors = from_failure(validate(&Value::from(json!({"alice": "x"})), &scores));
/// assert_eq!(
///     errors[0].description,
///     r#"Invalid value "x" supplied to : { [key: string]: number }/alice: number"#
/// );
/// ```
#[derive(Clone)]
pub struct MappingType {
    name: String,
    domain: TypeRef,
    codomain: TypeRef,
}

impl MappingType {
    pub fn new(domain: impl IntoTypeRef, codomain: impl IntoTypeRef) -> Self {
        let domain = domain.into_type_ref();
        let codomain = codomain.into_type_ref();
        Self {
            name: format!("{{ [key: {}]: {} }}", domain.name(), codomain.name()),
            domain,
            codomain,
        }
    }

    pub fn domain(&self) -> &TypeRef {
        &self.domain
    }

    pub fn codomain(&self) -> &TypeRef {
        &self.codomain
    }
}

impl Descriptor for MappingType {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, value: &Value, context: &Context) -> ValidationResult<Value> {
        let fields = match value.as_record() {
            Some(fields) => fields,
            None => return failure(value, context),
        };

        let mut errors = Vec::new();
        for (key, field) in fields {
            let key_context = context.push(key.as_str(), &*self.domain);
            absorb(
                self.domain.validate(&Value::from(key.as_str()), &key_context),
                &mut errors,
            );

            let field_context = context.push(key.as_str(), &*self.codomain);
            absorb(self.codomain.validate(field, &field_context), &mut errors);
        }

        collect(errors, value.clone())
    }

    fn kind(&self) -> Kind<'_> {
        Kind::Mapping {
            domain: &self.domain,
            codomain: &self.codomain,
        }
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
