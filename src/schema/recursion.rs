//! Recursive descriptors.
//!
//! A recursive descriptor refers to itself. [`recursion`] ties the knot: it
//! hands the definition a placeholder ([`RecursiveType`]), builds the real
//! descriptor from it, then binds the placeholder to the result exactly once
//! before returning. Validation recurses only as deep as the input does.
//!
//! The placeholder keeps its body alive, so the pair forms a reference cycle
//! and a recursive descriptor is never freed. Descriptors are meant to live
//! for the whole process, and any part of one (a field, a clone of the body)
//! stays usable after the rest is dropped.

use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::api::crash;
use crate::context::Context;
use crate::validation::ValidationResult;
use crate::value::Value;

use super::traits::{Descriptor, Kind, TypeRef};

/// The self-reference handed to a recursive definition.
///
/// It delegates to the descriptor the definition produced.
pub struct RecursiveType {
    name: String,
    target: OnceLock<TypeRef>,
}

impl RecursiveType {
    fn new(name: String) -> Self {
        Self {
            name,
            target: OnceLock::new(),
        }
    }

    /// Returns the descriptor this placeholder stands for, once bound.
    pub fn resolve(&self) -> Option<TypeRef> {
        self.target.get().cloned()
    }

    fn bind(&self, target: TypeRef) {
        if self.target.set(target).is_err() {
            crash(&format!("recursive type {} bound twice", self.name));
        }
    }
}

impl Descriptor for RecursiveType {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, value: &Value, context: &Context) -> ValidationResult<Value> {
        match self.target.get() {
            Some(target) => target.validate(value, context),
            None => crash(&format!(
                "recursive type {} used before its definition was bound",
                self.name
            )),
        }
    }

    fn kind(&self) -> Kind<'_> {
        Kind::Recursive(self)
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// Defines a self-referential descriptor named `name`.
///
/// `definition` receives a reference to the descriptor being defined and
/// returns its body. The body is renamed to `name` before it is shared.
///
/// # Example
///
/// ```rust
/// use shapeguard::{from_failure, recursion, validate, Props, Types, Value};
/// use serde_json::json;
///
/// let node = recursion("Node", |node| {
///     Types::object(
///         Props::new()
///             .field("value", Types::number())
///             .field("next", Types::maybe(node)),
///     )
/// });
///
/// let list = Value::from(json!({"value": 1, "next": {"value": 2}}));
/// assert!(validate(&list, &*node).is_success());
///
/// let bad = Value::from(json!({"value": 1, "next": {"value": "x"}}));
/// let errors = from_failure(validate(&bad, &*node));
/// assert_eq!(
///     errors[0].description,
///     r#"Invalid value "x" supplied to : Node/next: ?Node/value: number"#
/// );
/// ```
pub fn recursion<D, F>(name: impl Into<String>, definition: F) -> Arc<D>
where
    D: Descriptor + 'static,
    F: FnOnce(TypeRef) -> D,
{
    let name = name.into();
    let placeholder = Arc::new(RecursiveType::new(name.clone()));
    let self_ref: TypeRef = placeholder.clone();

    let mut body = definition(self_ref);
    body.set_name(name);
    let body = Arc::new(body);

    let target: TypeRef = body.clone();
    placeholder.bind(target);
    debug!(name = body.name(), "bound recursive type");
    body
}
