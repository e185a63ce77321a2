//! Type descriptors.
//!
//! A descriptor is a named runtime validator. This module provides the
//! [`Descriptor`] trait, the concrete descriptor types, and the [`Types`]
//! factory used to build them. Structural descriptors (arrays, tuples,
//! objects, mappings, intersections) accumulate every error they find rather
//! than stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use shapeguard::{validate, Props, Types, Value};
//! use serde_json::json;
//!
//! let person = Types::object(
//!     Props::new()
//!         .field("name", Types::string())
//!         .field("age", Types::number()),
//! );
//!
//! let result = validate(&Value::from(json!({"name": "Ada", "age": 36})), &person);
//! assert!(result.is_success());
//! ```

mod array;
mod combinators;
mod keys;
mod mapping;
mod object;
mod primitive;
mod recursion;
mod refinement;
mod traits;

use std::sync::Arc;

pub use array::{ArrayType, TupleType};
pub use combinators::{Combinator, CombinatorType};
pub use keys::KeysType;
pub use mapping::MappingType;
pub use object::{ExactType, ObjectType, Props, ShapeType};
pub use primitive::{
    ClassType, CustomType, InstanceOfType, Literal, LiteralType, Primitive, PrimitiveType,
    ValidatorFn,
};
pub use recursion::{recursion, RecursiveType};
pub use refinement::{Predicate, RefinementType};
pub use traits::{Descriptor, IntoTypeRef, Kind, TypeRef};

use crate::context::Context;
use crate::error::DescriptorError;
use crate::validation::ValidationResult;
use crate::value::{Class, Value};

/// Returns the name of `descriptor`.
pub fn get_type_name<D: Descriptor + ?Sized>(descriptor: &D) -> &str {
    descriptor.name()
}

/// Entry point for building descriptors.
///
/// Every constructor returns a concrete descriptor type. Use
/// [`Descriptor::named`] to override the generated name.
///
/// # Example
///
/// ```rust
/// use shapeguard::{is, Descriptor, IntoTypeRef, Types, Value};
///
/// let status = Types::union(vec![
///     Types::literal("active").into_type_ref(),
///     Types::literal("disabled").into_type_ref(),
/// ])
/// .named("Status");
///
/// assert_eq!(status.name(), "Status");
/// assert!(is(&Value::from("active"), &status));
/// assert!(!is(&Value::from("deleted"), &status));
/// ```
pub struct Types;

impl Types {
    /// Accepts `Undefined` and `Null`.
    pub fn nil() -> PrimitiveType {
        PrimitiveType::new(Primitive::Nil)
    }

    /// Accepts every value.
    pub fn any() -> PrimitiveType {
        PrimitiveType::new(Primitive::Any)
    }

    pub fn string() -> PrimitiveType {
        PrimitiveType::new(Primitive::String)
    }

    /// Accepts finite numbers.
    pub fn number() -> PrimitiveType {
        PrimitiveType::new(Primitive::Number)
    }

    pub fn boolean() -> PrimitiveType {
        PrimitiveType::new(Primitive::Boolean)
    }

    /// Accepts any array without checking its elements.
    pub fn arr() -> PrimitiveType {
        PrimitiveType::new(Primitive::Array)
    }

    /// Accepts any object or class instance without checking its fields.
    pub fn obj() -> PrimitiveType {
        PrimitiveType::new(Primitive::Object)
    }

    pub fn fun() -> PrimitiveType {
        PrimitiveType::new(Primitive::Function)
    }

    /// Accepts exactly one string, number or boolean.
    pub fn literal(value: impl Into<Literal>) -> LiteralType {
        LiteralType::new(value)
    }

    /// Accepts instances of `ctor` or of its subclasses.
    pub fn instance_of(ctor: &Arc<Class>) -> InstanceOfType {
        InstanceOfType::new(Arc::clone(ctor))
    }

    /// Accepts `ctor`'s constructor or a subclass constructor.
    pub fn class_of(ctor: &Arc<Class>) -> ClassType {
        ClassType::new(Arc::clone(ctor))
    }

    pub fn array(item: impl IntoTypeRef) -> ArrayType {
        ArrayType::new(item)
    }

    pub fn tuple(types: Vec<TypeRef>) -> TupleType {
        TupleType::new(types)
    }

    pub fn union(types: Vec<TypeRef>) -> CombinatorType {
        CombinatorType::union(types)
    }

    /// Fails with [`DescriptorError::EmptyIntersection`] when `types` is empty.
    pub fn intersection(types: Vec<TypeRef>) -> Result<CombinatorType, DescriptorError> {
        CombinatorType::intersection(types)
    }

    pub fn maybe(inner: impl IntoTypeRef) -> CombinatorType {
        CombinatorType::maybe(inner)
    }

    pub fn mapping(domain: impl IntoTypeRef, codomain: impl IntoTypeRef) -> MappingType {
        MappingType::new(domain, codomain)
    }

    pub fn refinement(inner: impl IntoTypeRef, predicate: Predicate) -> RefinementType {
        RefinementType::new(inner, predicate)
    }

    pub fn object(props: Props) -> ObjectType {
        ObjectType::new(props)
    }

    pub fn keys(inner: impl IntoTypeRef) -> KeysType {
        KeysType::new(inner)
    }

    /// Like [`Types::object`], but rejects keys outside `props`.
    pub fn exact(props: Props) -> ExactType {
        ExactType::new(props)
    }

    pub fn shape(object: impl Into<Arc<ObjectType>>) -> ShapeType {
        ShapeType::new(object)
    }

    /// See [`recursion`].
    pub fn recursion<D, F>(name: impl Into<String>, definition: F) -> Arc<D>
    where
        D: Descriptor + 'static,
        F: FnOnce(TypeRef) -> D,
    {
        recursion(name, definition)
    }

    pub fn custom<F>(name: impl Into<String>, validator: F) -> CustomType
    where
        F: Fn(&Value, &Context) -> ValidationResult<Value> + Send + Sync + 'static,
    {
        CustomType::new(name, validator)
    }
}
