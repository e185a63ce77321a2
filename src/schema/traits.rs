//! The descriptor abstraction.
//!
//! This module provides the [`Descriptor`] trait shared by every type
//! descriptor, the [`Kind`] view used to walk a descriptor graph, and the
//! [`IntoTypeRef`] conversion that lets combinators accept owned descriptors,
//! `Arc`s and type-erased [`TypeRef`]s alike.

use std::fmt;
use std::sync::Arc;

use crate::context::Context;
use crate::validation::ValidationResult;
use crate::value::{Class, Value};

use super::object::{ObjectType, Props};
use super::primitive::Literal;
use super::recursion::RecursiveType;
use super::refinement::Predicate;

/// A shared, type-erased descriptor.
pub type TypeRef = Arc<dyn Descriptor>;

/// A named validator for untyped values.
///
/// Descriptors are immutable once built and safe to share across threads.
/// Validation never mutates the input; on success it returns the accepted
/// value, which is the input itself unless a descriptor had to build a copy.
///
/// # Example
///
/// ```rust
/// use shapeguard::{validate, Descriptor, Types, Value};
///
/// let tags = Types::array(Types::string());
/// assert_eq!(tags.name(), "Array<string>");
///
/// let result = validate(&Value::from(serde_json::json!(["a", "b"])), &tags);
/// assert!(result.is_success());
/// ```
pub trait Descriptor: Send + Sync {
    /// The name used in error paths and by introspection tooling.
    fn name(&self) -> &str;

    /// Validates `value` at `context`.
    fn validate(&self, value: &Value, context: &Context) -> ValidationResult<Value>;

    /// Returns the structural metadata of this descriptor.
    fn kind(&self) -> Kind<'_>;

    /// Returns the declared fields of object-like descriptors.
    fn props(&self) -> Option<&Props> {
        None
    }

    /// Overrides the name. Only called while a descriptor is being built.
    fn set_name(&mut self, name: String);

    /// Builder form of [`Descriptor::set_name`].
    fn named(mut self, name: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.set_name(name.into());
        self
    }
}

impl fmt::Debug for dyn Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor").field("name", &self.name()).finish()
    }
}

/// Conversion into a shared descriptor.
pub trait IntoTypeRef {
    fn into_type_ref(self) -> TypeRef;
}

impl<D: Descriptor + 'static> IntoTypeRef for D {
    fn into_type_ref(self) -> TypeRef {
        Arc::new(self)
    }
}

impl<D: Descriptor + 'static> IntoTypeRef for Arc<D> {
    fn into_type_ref(self) -> TypeRef {
        self
    }
}

impl IntoTypeRef for TypeRef {
    fn into_type_ref(self) -> TypeRef {
        self
    }
}

/// Introspection view over a descriptor, one variant per constructor.
pub enum Kind<'a> {
    Nil,
    Any,
    String,
    Number,
    Boolean,
    /// Any array, elements unchecked.
    RawArray,
    /// Any object, fields unchecked.
    RawObject,
    Function,
    Literal(&'a Literal),
    InstanceOf(&'a Arc<Class>),
    ClassOf(&'a Arc<Class>),
    Array(&'a TypeRef),
    Tuple(&'a [TypeRef]),
    Union(&'a [TypeRef]),
    Intersection(&'a [TypeRef]),
    Maybe(&'a TypeRef),
    Mapping {
        domain: &'a TypeRef,
        codomain: &'a TypeRef,
    },
    Refinement {
        inner: &'a TypeRef,
        predicate: &'a Predicate,
    },
    Object(&'a Props),
    Keys(&'a TypeRef),
    Exact(&'a Props),
    Shape(&'a Arc<ObjectType>),
    /// The self-reference handed to a recursive definition.
    Recursive(&'a RecursiveType),
    /// A user-defined validation function.
    Custom,
}

impl Kind<'_> {
    /// Returns the child descriptors, in declaration order.
    pub fn children(&self) -> Vec<&TypeRef> {
        match self {
            Kind::Array(t) | Kind::Maybe(t) | Kind::Keys(t) => vec![*t],
            Kind::Refinement { inner, .. } => vec![*inner],
            Kind::Tuple(types) | Kind::Union(types) | Kind::Intersection(types) => {
                types.iter().collect()
            }
            Kind::Mapping { domain, codomain } => vec![*domain, *codomain],
            Kind::Object(props) | Kind::Exact(props) => props.values().collect(),
            Kind::Shape(object) => object.properties().values().collect(),
            _ => Vec::new(),
        }
    }
}
