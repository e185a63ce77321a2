//! Descriptor combinators for composing validation logic.
//!
//! This module provides combinators that compose descriptors over the same value:
//! - `union`: the first member that accepts the value wins
//! - `intersection`: every member must accept the value
//! - `maybe`: the value may be nil
//!
//! # Example
//!
//! ```rust
//! use shapeguard::{is, IntoTypeRef, Types, Value};
//!
//! let id = Types::union(vec![
//!     Types::string().into_type_ref(),
//!     Types::number().into_type_ref(),
//! ]);
//!
//! assert!(is(&Value::from("abc"), &id));
//! assert!(is(&Value::from(42), &id));
//! assert!(!is(&Value::from(true), &id));
//! ```

use crate::context::Context;
use crate::error::DescriptorError;
use crate::validation::{absorb, collect, failure, success, ValidationResult};
use crate::value::Value;

use super::traits::{Descriptor, IntoTypeRef, Kind, TypeRef};

/// How a [`CombinatorType`] composes its members.
#[derive(Clone)]
pub enum Combinator {
    /// The first member, in declaration order, that accepts the value wins.
    ///
    /// If every member rejects the value, a single error is raised at the
    /// union's own context; member errors are discarded.
    Union(Vec<TypeRef>),

    /// Every member must accept the value.
    ///
    /// Members validate at the same context and all of their errors are
    /// accumulated. On success the input value is returned unchanged.
    Intersection(Vec<TypeRef>),

    /// Nil is accepted outright; anything else is up to the inner descriptor.
    Maybe(TypeRef),
}

/// A descriptor built from other descriptors applied to the same value.
#[derive(Clone)]
pub struct CombinatorType {
    name: String,
    combinator: Combinator,
}

impl CombinatorType {
    pub fn union(types: Vec<TypeRef>) -> Self {
        Self {
            name: format!("({})", join_names(&types, " | ")),
            combinator: Combinator::Union(types),
        }
    }

    /// Returns [`DescriptorError::EmptyIntersection`] if `types` is empty.
    pub fn intersection(types: Vec<TypeRef>) -> Result<Self, DescriptorError> {
        if types.is_empty() {
            return Err(DescriptorError::EmptyIntersection);
        }
        Ok(Self {
            name: format!("({})", join_names(&types, " & ")),
            combinator: Combinator::Intersection(types),
        })
    }

    pub fn maybe(inner: impl IntoTypeRef) -> Self {
        let inner = inner.into_type_ref();
        Self {
            name: format!("?{}", inner.name()),
            combinator: Combinator::Maybe(inner),
        }
    }

    pub fn combinator(&self) -> &Combinator {
        &self.combinator
    }

    fn validate_union(types: &[TypeRef], value: &Value, context: &Context) -> ValidationResult<Value> {
        for member in types {
            let result = member.validate(value, context);
            if result.is_success() {
                return result;
            }
        }
        failure(value, context)
    }

    fn validate_intersection(
        types: &[TypeRef],
        value: &Value,
        context: &Context,
    ) -> ValidationResult<Value> {
        let mut errors = Vec::new();
        for member in types {
            absorb(member.validate(value, context), &mut errors);
        }
        collect(errors, value.clone())
    }

    fn validate_maybe(inner: &TypeRef, value: &Value, context: &Context) -> ValidationResult<Value> {
        if value.is_nil() {
            success(value.clone())
        } else {
            inner.validate(value, context)
        }
    }
}

fn join_names(types: &[TypeRef], separator: &str) -> String {
    types
        .iter()
        .map(|t| t.name())
        .collect::<Vec<_>>()
        .join(separator)
}

impl Descriptor for CombinatorType {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, value: &Value, context: &Context) -> ValidationResult<Value> {
        match &self.combinator {
            Combinator::Union(types) => Self::validate_union(types, value, context),
            Combinator::Intersection(types) => Self::validate_intersection(types, value, context),
            Combinator::Maybe(inner) => Self::validate_maybe(inner, value, context),
        }
    }

    fn kind(&self) -> Kind<'_> {
        match &self.combinator {
            Combinator::Union(types) => Kind::Union(types),
            Combinator::Intersection(types) => Kind::Intersection(types),
            Combinator::Maybe(inner) => Kind::Maybe(inner),
        }
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
