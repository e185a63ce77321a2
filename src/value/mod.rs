//! The untyped input model.
//!
//! This module provides [`Value`], the dynamic value that type descriptors
//! validate, together with [`Class`], [`Function`] and [`Instance`] for the
//! callable and class-instance cases that plain JSON cannot express.
//!
//! Container variants are reference-counted so that validation can hand back
//! the very same value it was given. [`Value::same`] observes that identity.
//!
//! # Example
//!
//! ```rust
//! use shapeguard::Value;
//! use serde_json::json;
//!
//! let value = Value::from(json!({"name": "Alice", "tags": ["admin"]}));
//! assert!(value.is_object());
//! assert!(value.get("tags").is_array());
//! assert!(value.get("missing").is_undefined());
//!
//! let copy = value.clone();
//! assert!(copy.same(&value));
//! ```

mod stringify;

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

pub use stringify::{get_function_name, stringify};

/// An own-field map of an object or class instance, in insertion order.
pub type Record = IndexMap<String, Value>;

/// A dynamic value supplied to a type descriptor.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// An absent value, e.g. a missing object field.
    #[default]
    Undefined,
    /// An explicit null.
    Null,
    Bool(bool),
    /// Any IEEE-754 double, including the non-finite ones.
    Number(f64),
    String(String),
    Array(Arc<Vec<Value>>),
    Object(Arc<Record>),
    /// A callable, possibly a class constructor.
    Function(Arc<Function>),
    /// An object created by a [`Class`].
    Instance(Arc<Instance>),
}

impl Value {
    /// Creates an array value.
    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(Arc::new(items.into_iter().collect()))
    }

    /// Creates a plain object value from `(key, value)` pairs.
    pub fn object<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Object(Arc::new(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        ))
    }

    /// Returns true for `Undefined` and `Null`.
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true for plain objects and class instances.
    ///
    /// Arrays, functions and nil are not objects.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Instance(_))
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Value::Instance(i) => Some(i),
            _ => None,
        }
    }

    /// Returns the own fields of a plain object or class instance.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Object(fields) => Some(fields),
            Value::Instance(instance) => Some(&instance.fields),
            _ => None,
        }
    }

    /// Looks up an own field, yielding `Undefined` when absent or when this
    /// value has no fields at all.
    pub fn get(&self, key: &str) -> Value {
        self.as_record()
            .and_then(|fields| fields.get(key))
            .cloned()
            .unwrap_or(Value::Undefined)
    }

    /// Strict identity: primitives compare by value (`NaN` is never the same
    /// as itself), containers and callables by reference.
    pub fn same(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Arc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Arc::ptr_eq(a, b),
            (Value::Instance(a), Value::Instance(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Returns a copy of this record with `updates` written over its fields.
    ///
    /// Instances keep their class. Values without fields are returned as is.
    pub fn with_fields(&self, updates: Record) -> Value {
        match self {
            Value::Object(fields) => {
                let mut merged = Record::clone(fields);
                merged.extend(updates);
                Value::Object(Arc::new(merged))
            }
            Value::Instance(instance) => {
                let mut merged = instance.fields.clone();
                merged.extend(updates);
                Value::Instance(Arc::new(Instance {
                    class: Arc::clone(&instance.class),
                    fields: merged,
                }))
            }
            other => other.clone(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&stringify(self))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(Arc::new(items))
    }
}

impl From<Record> for Value {
    fn from(fields: Record) -> Self {
        Value::Object(Arc::new(fields))
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(Arc::new(f))
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::array(items.into_iter().map(Value::from))
            }
            serde_json::Value::Object(fields) => Value::object(fields),
        }
    }
}

/// A constructor and its place in an inheritance chain.
///
/// Classes compare by identity: two classes with the same name are still
/// distinct constructors.
#[derive(Debug)]
pub struct Class {
    name: String,
    parent: Option<Arc<Class>>,
}

impl Class {
    /// Creates a root class.
    pub fn new(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            parent: None,
        })
    }

    /// Creates a class that extends `parent`.
    pub fn extending(name: impl Into<String>, parent: &Arc<Class>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            parent: Some(Arc::clone(parent)),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&Arc<Class>> {
        self.parent.as_ref()
    }

    /// Returns true if `other` is a strict ancestor of this class.
    pub fn is_subclass_of(&self, other: &Class) -> bool {
        let mut current = self.parent.as_deref();
        while let Some(class) = current {
            if std::ptr::eq(class, other) {
                return true;
            }
            current = class.parent.as_deref();
        }
        false
    }

    /// Returns true if this class is `other` or one of its subclasses.
    pub fn is_a(&self, other: &Class) -> bool {
        std::ptr::eq(self, other) || self.is_subclass_of(other)
    }

    /// Creates an instance of this class with the given own fields.
    pub fn instantiate<K, V>(self: &Arc<Self>, fields: impl IntoIterator<Item = (K, V)>) -> Value
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Instance(Arc::new(Instance {
            class: Arc::clone(self),
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }))
    }

    /// Returns the constructor function of this class as a value.
    pub fn constructor(self: &Arc<Self>) -> Value {
        Value::Function(Arc::new(Function {
            name: self.name.clone(),
            display_name: None,
            arity: 0,
            class: Some(Arc::clone(self)),
        }))
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

/// An opaque callable handle.
///
/// Only the metadata used for naming and class checks is kept; the engine
/// never calls functions it validates.
#[derive(Debug)]
pub struct Function {
    name: String,
    display_name: Option<String>,
    arity: usize,
    class: Option<Arc<Class>>,
}

impl Function {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            arity,
            class: None,
        }
    }

    /// Creates an unnamed function of the given arity.
    pub fn anonymous(arity: usize) -> Self {
        Self::new("", arity)
    }

    /// Sets the display name, which takes precedence over the name in messages.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// The class this function constructs, if it is a constructor.
    pub fn class(&self) -> Option<&Arc<Class>> {
        self.class.as_ref()
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

/// An object created by a [`Class`].
#[derive(Debug, PartialEq)]
pub struct Instance {
    class: Arc<Class>,
    fields: Record,
}

impl Instance {
    pub fn class(&self) -> &Arc<Class> {
        &self.class
    }

    pub fn fields(&self) -> &Record {
        &self.fields
    }
}
