//! Batch validation on the rayon thread pool.
//!
//! # Feature Flag
//!
//! This module is only available when the `parallel` feature is enabled.

use rayon::prelude::*;

use crate::api::validate;
use crate::schema::Descriptor;
use crate::validation::ValidationResult;
use crate::value::Value;

/// Validates every value in `values` against `descriptor` in parallel.
///
/// Each value is validated independently at the root context. The results
/// line up with `values` index for index.
///
/// # Example
///
/// ```rust
/// use shapeguard::{validate_all, Types, Value};
///
/// let values = vec![Value::from(1), Value::from("two"), Value::from(3)];
/// let results = validate_all(&values, &Types::number());
///
/// let ok: Vec<bool> = results.iter().map(|r| r.is_success()).collect();
/// assert_eq!(ok, vec![true, false, true]);
/// ```
pub fn validate_all<D: Descriptor + ?Sized>(values: &[Value], descriptor: &D) -> Vec<ValidationResult<Value>> {
    values
        .par_iter()
        .map(|value| validate(value, descriptor))
        .collect()
}
