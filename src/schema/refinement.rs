//! Refinement descriptors and predicates.
//!
//! A refinement narrows another descriptor with a boolean test. The test runs
//! only after the wrapped descriptor accepted the value, and a rejection is
//! reported against the raw input at the refinement's own context.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::context::Context;
use crate::error::DescriptorError;
use crate::validation::{chain, failure, success, ValidationResult};
use crate::value::Value;

use super::traits::{Descriptor, IntoTypeRef, Kind, TypeRef};

type PredicateFn = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A named boolean test over a value.
///
/// Anonymous predicates are named `<function1>`, matching how unnamed
/// one-argument callables are shown everywhere else.
///
/// # Example
///
/// ```rust
/// use shapeguard::{Predicate, Value};
///
/// let positive = Predicate::named("positive", |v| v.as_f64().is_some_and(|n| n > 0.0));
/// assert_eq!(positive.name(), "positive");
/// assert!(positive.test(&Value::from(3)));
///
/// let slug = Predicate::pattern("^[a-z-]+$").unwrap();
/// assert!(slug.test(&Value::from("hello-world")));
/// assert!(!slug.test(&Value::from("Hello")));
/// ```
#[derive(Clone)]
pub struct Predicate {
    name: Option<String>,
    test: PredicateFn,
}

impl Predicate {
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            name: None,
            test: Arc::new(test),
        }
    }

    pub fn named<F>(name: impl Into<String>, test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            test: Arc::new(test),
        }
    }

    /// A predicate accepting strings that match `pattern`, named after it.
    ///
    /// Non-string values never match.
    pub fn pattern(pattern: &str) -> Result<Self, DescriptorError> {
        let regex = Regex::new(pattern).map_err(|e| DescriptorError::invalid_pattern(pattern, e))?;
        Ok(Self::named(format!("/{}/", pattern), move |value| {
            value.as_str().is_some_and(|s| regex.is_match(s))
        }))
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("<function1>")
    }

    pub fn test(&self, value: &Value) -> bool {
        (self.test)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").field("name", &self.name()).finish()
    }
}

/// A descriptor that narrows another with a [`Predicate`].
///
/// # Example
///
/// ```rust
/// use shapeguard::{from_failure, validate, Predicate, Types, Value};
///
/// let positive = Types::refinement(
///     Types::number(),
///     Predicate::named("positive", |v| v.as_f64().is_some_and(|n| n > 0.0)),
/// );
///
/// assert!(validate(&Value::from(1), &positive).is_success());
///
/// let errors = from_failure(validate(&Value::from(-1), &positive));
/// assert_eq!(errors[0].description, "Invalid value -1 supplied to : (number | positive)");
/// ```
#[derive(Clone)]
pub struct RefinementType {
    name: String,
    inner: TypeRef,
    predicate: Predicate,
}

impl RefinementType {
    pub fn new(inner: impl IntoTypeRef, predicate: Predicate) -> Self {
        let inner = inner.into_type_ref();
        Self {
            name: format!("({} | {})", inner.name(), predicate.name()),
            inner,
            predicate,
        }
    }

    pub fn inner(&self) -> &TypeRef {
        &self.inner
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }
}

impl Descriptor for RefinementType {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, value: &Value, context: &Context) -> ValidationResult<Value> {
        chain(self.inner.validate(value, context), |refined| {
            if self.predicate.test(&refined) {
                success(refined)
            } else {
                // anchored to the raw input, not the inner descriptor's output
                failure(value, context)
            }
        })
    }

    fn kind(&self) -> Kind<'_> {
        Kind::Refinement {
            inner: &self.inner,
            predicate: &self.predicate,
        }
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
