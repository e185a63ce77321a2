//! Primitive descriptors.
//!
//! This module provides the single-step descriptors: the irreducible
//! [`PrimitiveType`]s (`nil`, `any`, `string`, `number`, `boolean`, raw
//! arrays, raw objects and functions), [`LiteralType`], [`InstanceOfType`],
//! [`ClassType`] and the user-defined [`CustomType`].

use std::fmt;
use std::sync::Arc;

use crate::context::Context;
use crate::validation::{failure, success, ValidationResult};
use crate::value::{stringify, Class, Value};

use super::traits::{Descriptor, Kind};

/// Name of the `nil` descriptor, also used for rejected additional keys.
pub(crate) const NIL: &str = "nil";

/// The irreducible value categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// `Undefined` or `Null`.
    Nil,
    /// Anything at all.
    Any,
    String,
    /// A finite number; `NaN` and the infinities are rejected.
    Number,
    Boolean,
    /// Any array.
    Array,
    /// A plain object or class instance.
    Object,
    Function,
}

impl Primitive {
    pub fn name(self) -> &'static str {
        match self {
            Primitive::Nil => NIL,
            Primitive::Any => "any",
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
            Primitive::Array => "Array",
            Primitive::Object => "Object",
            Primitive::Function => "Function",
        }
    }

    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Primitive::Nil => value.is_nil(),
            Primitive::Any => true,
            Primitive::String => value.is_string(),
            Primitive::Number => matches!(value, Value::Number(n) if n.is_finite()),
            Primitive::Boolean => matches!(value, Value::Bool(_)),
            Primitive::Array => value.is_array(),
            Primitive::Object => value.is_object(),
            Primitive::Function => value.is_function(),
        }
    }
}

/// A descriptor for one of the [`Primitive`] categories.
///
/// # Example
///
/// ```rust
/// use shapeguard::{is, Types, Value};
///
/// assert!(is(&Value::from(1.5), &Types::number()));
/// assert!(!is(&Value::Number(f64::NAN), &Types::number()));
/// assert!(is(&Value::Undefined, &Types::nil()));
/// ```
#[derive(Debug, Clone)]
pub struct PrimitiveType {
    name: String,
    primitive: Primitive,
}

impl PrimitiveType {
    pub fn new(primitive: Primitive) -> Self {
        Self {
            name: primitive.name().to_string(),
            primitive,
        }
    }

    pub fn primitive(&self) -> Primitive {
        self.primitive
    }
}

impl Descriptor for PrimitiveType {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, value: &Value, context: &Context) -> ValidationResult<Value> {
        if self.primitive.accepts(value) {
            success(value.clone())
        } else {
            failure(value, context)
        }
    }

    fn kind(&self) -> Kind<'_> {
        match self.primitive {
            Primitive::Nil => Kind::Nil,
            Primitive::Any => Kind::Any,
            Primitive::String => Kind::String,
            Primitive::Number => Kind::Number,
            Primitive::Boolean => Kind::Boolean,
            Primitive::Array => Kind::RawArray,
            Primitive::Object => Kind::RawObject,
            Primitive::Function => Kind::Function,
        }
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// A single literal string, number or boolean.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl Literal {
    pub fn to_value(&self) -> Value {
        match self {
            Literal::String(s) => Value::String(s.clone()),
            Literal::Number(n) => Value::Number(*n),
            Literal::Boolean(b) => Value::Bool(*b),
        }
    }

    /// Strict equality with `value`.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Literal::String(a), Value::String(b)) => a == b,
            (Literal::Number(a), Value::Number(b)) => a == b,
            (Literal::Boolean(a), Value::Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&stringify(&self.to_value()))
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::String(s)
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Number(n)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Literal::Number(f64::from(n))
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Boolean(b)
    }
}

/// Matches exactly one literal value; named after its JSON encoding.
#[derive(Debug, Clone)]
pub struct LiteralType {
    name: String,
    value: Literal,
}

impl LiteralType {
    pub fn new(value: impl Into<Literal>) -> Self {
        let value = value.into();
        Self {
            name: value.to_string(),
            value,
        }
    }

    pub fn value(&self) -> &Literal {
        &self.value
    }
}

impl Descriptor for LiteralType {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, value: &Value, context: &Context) -> ValidationResult<Value> {
        if self.value.matches(value) {
            success(self.value.to_value())
        } else {
            failure(value, context)
        }
    }

    fn kind(&self) -> Kind<'_> {
        Kind::Literal(&self.value)
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// Accepts instances of a class or of its subclasses.
#[derive(Debug, Clone)]
pub struct InstanceOfType {
    name: String,
    ctor: Arc<Class>,
}

impl InstanceOfType {
    pub fn new(ctor: Arc<Class>) -> Self {
        Self {
            name: ctor.name().to_string(),
            ctor,
        }
    }

    pub fn ctor(&self) -> &Arc<Class> {
        &self.ctor
    }
}

impl Descriptor for InstanceOfType {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, value: &Value, context: &Context) -> ValidationResult<Value> {
        match value.as_instance() {
            Some(instance) if instance.class().is_a(&self.ctor) => success(value.clone()),
            _ => failure(value, context),
        }
    }

    fn kind(&self) -> Kind<'_> {
        Kind::InstanceOf(&self.ctor)
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// Accepts constructors that are a class or one of its subclasses.
///
/// The value itself must be a function; plain (non-constructor) functions
/// are rejected.
#[derive(Debug, Clone)]
pub struct ClassType {
    name: String,
    ctor: Arc<Class>,
}

impl ClassType {
    pub fn new(ctor: Arc<Class>) -> Self {
        Self {
            name: format!("Class<{}>", ctor.name()),
            ctor,
        }
    }

    pub fn ctor(&self) -> &Arc<Class> {
        &self.ctor
    }
}

impl Descriptor for ClassType {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, value: &Value, context: &Context) -> ValidationResult<Value> {
        let constructs = value
            .as_function()
            .and_then(|f| f.class())
            .is_some_and(|class| class.is_a(&self.ctor));
        if constructs {
            success(value.clone())
        } else {
            failure(value, context)
        }
    }

    fn kind(&self) -> Kind<'_> {
        Kind::ClassOf(&self.ctor)
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// Type alias for a user-supplied validation function.
pub type ValidatorFn = Arc<dyn Fn(&Value, &Context) -> ValidationResult<Value> + Send + Sync>;

/// A descriptor backed by an arbitrary validation function.
///
/// A custom validator may return a value different from its input; `$shape`
/// picks such changes up into a new object.
///
/// # Example
///
/// ```rust
/// use shapeguard::{from_success, map, validate, Descriptor, Types, Value};
///
/// let doubled = Types::custom("number2", |value, context| {
///     map(Types::number().validate(value, context), |n| {
///         Value::from(n.as_f64().unwrap_or_default() * 2.0)
///     })
/// });
///
/// assert_eq!(from_success(validate(&Value::from(2), &doubled)), Value::from(4));
/// ```
#[derive(Clone)]
pub struct CustomType {
    name: String,
    validator: ValidatorFn,
}

impl CustomType {
    pub fn new<F>(name: impl Into<String>, validator: F) -> Self
    where
        F: Fn(&Value, &Context) -> ValidationResult<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            validator: Arc::new(validator),
        }
    }
}

impl Descriptor for CustomType {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, value: &Value, context: &Context) -> ValidationResult<Value> {
        (self.validator)(value, context)
    }

    fn kind(&self) -> Kind<'_> {
        Kind::Custom
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
