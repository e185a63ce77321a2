//! Key-extraction descriptors.

use indexmap::IndexSet;

use crate::context::Context;
use crate::validation::{failure, success, ValidationResult};
use crate::value::Value;

use super::traits::{Descriptor, IntoTypeRef, Kind, TypeRef};

/// Accepts the key names of another descriptor.
///
/// The value must be a string. If the wrapped descriptor declares fields
/// (objects, exact objects) it must also be one of those field names;
/// otherwise any string is accepted. The key set is captured when the
/// descriptor is built.
///
/// # Example
///
/// ```rust
/// use shapeguard::{is, Props, Types, Value};
///
/// let person = Types::object(Props::new().field("name", Types::string()).field("age", Types::number()));
/// let field = Types::keys(person);
///
/// assert!(is(&Value::from("age"), &field));
/// assert!(!is(&Value::from("email"), &field));
/// assert!(!is(&Value::from(1), &field));
/// ```
#[derive(Clone)]
pub struct KeysType {
    name: String,
    inner: TypeRef,
    keys: Option<IndexSet<String>>,
}

impl KeysType {
    pub fn new(inner: impl IntoTypeRef) -> Self {
        let inner = inner.into_type_ref();
        let keys = inner
            .props()
            .map(|props| props.keys().map(str::to_string).collect());
        Self {
            name: format!("$Keys<{}>", inner.name()),
            inner,
            keys,
        }
    }

    /// Returns the wrapped descriptor.
    pub fn inner(&self) -> &TypeRef {
        &self.inner
    }

    /// Returns the accepted keys, or `None` if any string is accepted.
    pub fn keys(&self) -> Option<&IndexSet<String>> {
        self.keys.as_ref()
    }
}

impl Descriptor for KeysType {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, value: &Value, context: &Context) -> ValidationResult<Value> {
        let Some(key) = value.as_str() else {
            return failure(value, context);
        };
        match &self.keys {
            Some(keys) if !keys.contains(key) => failure(value, context),
            _ => success(value.clone()),
        }
    }

    fn kind(&self) -> Kind<'_> {
        Kind::Keys(&self.inner)
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
