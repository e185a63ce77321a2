//! The validation result algebra.
//!
//! [`ValidationResult`] is stillwater's `Validation` specialized to
//! [`ValidationErrors`]. The free functions here are the whole vocabulary the
//! combinators use to build, inspect and sequence results: `success`,
//! `failure`, `failures`, `map`, `chain` and `ap`, plus the `from_success`
//! escape hatch that turns a failure into a fatal abort.

use stillwater::prelude::*;
use stillwater::Validation;

use crate::api::crash;
use crate::context::Context;
use crate::error::{ValidationError, ValidationErrors};
use crate::value::Value;

/// Outcome of validating a value: the accepted value or every error found.
pub type ValidationResult<T> = Validation<T, ValidationErrors>;

/// Wraps a validated value.
pub fn success<T>(value: T) -> ValidationResult<T> {
    Validation::Success(value)
}

/// Alias of [`success`].
pub fn of<T>(value: T) -> ValidationResult<T> {
    success(value)
}

/// Fails with exactly one default-formatted error for `value` at `context`.
pub fn failure<T>(value: &Value, context: &Context) -> ValidationResult<T> {
    Validation::Failure(ValidationErrors::single(ValidationError::new(
        value.clone(),
        context.clone(),
    )))
}

/// Fails with a pre-built error list.
pub fn failures<T>(errors: ValidationErrors) -> ValidationResult<T> {
    Validation::Failure(errors)
}

/// Succeeds with `value` if `errors` is empty, otherwise fails with all of them.
pub(crate) fn collect<T>(errors: Vec<ValidationError>, value: T) -> ValidationResult<T> {
    match ValidationErrors::from_vec(errors) {
        Some(errors) => failures(errors),
        None => success(value),
    }
}

/// Appends the errors of a failed result to `errors`, returning the value of a
/// successful one.
pub(crate) fn absorb<T>(result: ValidationResult<T>, errors: &mut Vec<ValidationError>) -> Option<T> {
    match result {
        Validation::Success(value) => Some(value),
        Validation::Failure(e) => {
            errors.extend(e);
            None
        }
    }
}

pub fn is_success<T>(result: &ValidationResult<T>) -> bool {
    result.is_success()
}

pub fn is_failure<T>(result: &ValidationResult<T>) -> bool {
    result.is_failure()
}

/// Returns the errors of a failed result; empty for a success.
pub fn from_failure<T>(result: ValidationResult<T>) -> Vec<ValidationError> {
    match result {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.into_vec(),
    }
}

/// Extracts the validated value.
///
/// # Panics
///
/// Aborts through [`crash`] with every error description, one per line, if the
/// result is a failure. Use [`into_result`] to handle failures instead.
pub fn from_success<T>(result: ValidationResult<T>) -> T {
    match result {
        Validation::Success(value) => value,
        Validation::Failure(errors) => crash(&errors.to_string()),
    }
}

/// Converts to a standard `Result`.
pub fn into_result<T>(result: ValidationResult<T>) -> Result<T, ValidationErrors> {
    match result {
        Validation::Success(value) => Ok(value),
        Validation::Failure(errors) => Err(errors),
    }
}

/// Transforms the success payload; failures pass through untouched.
pub fn map<A, B, F>(result: ValidationResult<A>, f: F) -> ValidationResult<B>
where
    F: FnOnce(A) -> B,
{
    match result {
        Validation::Success(a) => Validation::Success(f(a)),
        Validation::Failure(errors) => Validation::Failure(errors),
    }
}

/// Sequences a dependent validation, short-circuiting on failure.
pub fn chain<A, B, F>(result: ValidationResult<A>, f: F) -> ValidationResult<B>
where
    F: FnOnce(A) -> ValidationResult<B>,
{
    match result {
        Validation::Success(a) => f(a),
        Validation::Failure(errors) => Validation::Failure(errors),
    }
}

/// Applies a wrapped function to a wrapped value.
///
/// When both sides failed, the function's errors come first.
pub fn ap<A, B, F>(result: ValidationResult<A>, f: ValidationResult<F>) -> ValidationResult<B>
where
    F: FnOnce(A) -> B,
{
    match (f, result) {
        (Validation::Success(f), Validation::Success(a)) => Validation::Success(f(a)),
        (Validation::Failure(fe), Validation::Failure(ae)) => Validation::Failure(fe.combine(ae)),
        (Validation::Failure(errors), _) | (_, Validation::Failure(errors)) => {
            Validation::Failure(errors)
        }
    }
}
