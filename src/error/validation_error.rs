//! Validation error types.
//!
//! This module provides [`ValidationError`] for a single failure and
//! [`ValidationErrors`] for accumulating failures across a structure.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::context::Context;
use crate::value::{stringify, Value};

/// Builds the default description: `Invalid value <value> supplied to <path>`.
pub fn get_default_description(value: &Value, context: &Context) -> String {
    format!("Invalid value {} supplied to {}", stringify(value), context)
}

/// A single validation failure.
///
/// - **value**: the raw input that was rejected
/// - **context**: the path from the root to the rejected value
/// - **description**: a human-readable message
///
/// # Example
///
/// ```rust
/// use shapeguard::{Context, Types, ValidationError, Value};
///
/// let error = ValidationError::new(Value::from(1), Context::root(&Types::string()));
/// assert_eq!(error.description, "Invalid value 1 supplied to : string");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// The offending input value.
    pub value: Value,
    /// Where in the structure the failure happened.
    pub context: Context,
    /// Human-readable message.
    pub description: String,
}

impl ValidationError {
    /// Creates an error with the default description.
    pub fn new(value: Value, context: Context) -> Self {
        let description = get_default_description(&value, &context);
        Self {
            value,
            context,
            description,
        }
    }

    /// Replaces the description and returns self for chaining.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl std::error::Error for ValidationError {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};

/// A non-empty, traversal-ordered collection of validation errors.
///
/// `ValidationErrors` implements `Semigroup`, so errors from sibling
/// validations combine in order:
///
/// ```rust
/// use shapeguard::{Context, Types, ValidationError, ValidationErrors, Value};
/// use stillwater::prelude::*;
///
/// let context = Context::root(&Types::number());
/// let first = ValidationErrors::single(ValidationError::new(Value::from("a"), context.clone()));
/// let second = ValidationErrors::single(ValidationError::new(Value::Null, context));
///
/// let combined = first.combine(second);
/// assert_eq!(combined.len(), 2);
/// assert_eq!(combined.first().value, Value::from("a"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(NonEmptyVec<ValidationError>);

impl ValidationErrors {
    pub fn single(error: ValidationError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Returns `None` when `errors` is empty.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        let mut errors = errors.into_iter();
        let head = errors.next()?;
        let all = errors.fold(NonEmptyVec::singleton(head), |acc, error| {
            acc.combine(NonEmptyVec::singleton(error))
        });
        Some(Self(all))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn first(&self) -> &ValidationError {
        self.0.head()
    }

    /// Returns every description in order.
    pub fn descriptions(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.description.as_str()).collect()
    }

    /// Returns the errors whose path ends at `key`.
    pub fn at_key(&self, key: &str) -> Vec<&ValidationError> {
        self.0
            .iter()
            .filter(|e| e.context.last().is_some_and(|entry| entry.key == key))
            .collect()
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0.into_vec()
    }
}

impl Semigroup for ValidationErrors {
    fn combine(self, other: Self) -> Self {
        ValidationErrors(self.0.combine(other.0))
    }
}

/// One description per line.
impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.descriptions().join("\n"))
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = Box<dyn Iterator<Item = &'a ValidationError> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationErrors>();
    assert_sync::<ValidationErrors>();
};
