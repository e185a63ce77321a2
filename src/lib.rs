//! # Shapeguard
//!
//! Runtime type descriptors for untyped values. A descriptor checks that a
//! dynamic [`Value`] has the expected shape and reports ALL the places where
//! it does not, each with the path from the root to the offending value.
//!
//! ## Overview
//!
//! Descriptors are built with the [`Types`] factory and composed freely:
//! arrays, tuples, objects, dictionaries, unions, intersections, refinements,
//! and self-referential definitions via [`recursion`]. Validation returns a
//! stillwater `Validation`, so every structural check accumulates its errors
//! instead of stopping at the first one.
//!
//! ## Core Types
//!
//! - [`Value`]: the untyped input (JSON plus functions and class instances)
//! - [`Descriptor`]: a named validator; [`TypeRef`] is the shared form
//! - [`Context`]: the path of (key, type name) hops to a value
//! - [`ValidationError`]: one failure with its value, context and description
//! - [`ValidationErrors`]: the non-empty list a failed validation carries
//!
//! ## Example
//!
//! ```rust
//! use shapeguard::{from_failure, validate, IntoTypeRef, Props, Types, Value};
//! use serde_json::json;
//!
//! let user = Types::object(
//!     Props::new()
//!         .field("name", Types::string())
//!         .field("age", Types::number())
//!         .field("tags", Types::array(Types::string())),
//! );
//!
//! let ok = Value::from(json!({"name": "Ada", "age": 36, "tags": ["admin"]}));
//! assert!(validate(&ok, &user).is_success());
//!
//! // Every problem is reported, not just the first
//! let bad = Value::from(json!({"name": 1, "tags": ["admin", 2]}));
//! let descriptions: Vec<_> = from_failure(validate(&bad, &user))
//!     .into_iter()
//!     .map(|e| e.description)
//!     .collect();
//! assert_eq!(
//!     descriptions,
//!     vec![
//!         "Invalid value 1 supplied to : { name: string, age: number, tags: Array<string> }/name: string",
//!         "Invalid value undefined supplied to : { name: string, age: number, tags: Array<string> }/age: number",
//!         "Invalid value 2 supplied to : { name: string, age: number, tags: Array<string> }/tags: Array<string>/1: string",
//!     ]
//! );
//!
//! // Descriptors compose through `IntoTypeRef`
//! let id = Types::union(vec![Types::string().into_type_ref(), Types::number().into_type_ref()]);
//! assert!(validate(&Value::from(7), &id).is_success());
//! ```

pub mod api;
pub mod context;
pub mod error;
pub mod schema;
pub mod validation;
pub mod value;

#[cfg(feature = "parallel")]
pub mod batch;

pub use api::{assert, crash, is, unsafe_validate, validate, validate_with_context, FAILURE_PREFIX};
pub use context::{get_context_entry, get_context_path, get_default_context, Context, ContextEntry};
pub use error::{get_default_description, DescriptorError, ValidationError, ValidationErrors};
pub use schema::{
    get_type_name, recursion, ArrayType, ClassType, Combinator, CombinatorType, CustomType,
    Descriptor, ExactType, InstanceOfType, IntoTypeRef, KeysType, Kind, Literal, LiteralType,
    MappingType, ObjectType, Predicate, Primitive, PrimitiveType, Props, RecursiveType,
    RefinementType, ShapeType, TupleType, TypeRef, Types, ValidatorFn,
};
pub use validation::{
    ap, chain, failure, failures, from_failure, from_success, into_result, is_failure,
    is_success, map, of, success, ValidationResult,
};
pub use value::{get_function_name, stringify, Class, Function, Instance, Record, Value};

#[cfg(feature = "parallel")]
pub use batch::validate_all;
