//! Validation entry points and the fatal escape hatch.
//!
//! These functions hold no state between calls. [`validate`] and [`is`] never
//! panic; [`unsafe_validate`], [`crash`] and [`assert`] are the only ways a
//! validation problem turns into a panic, and callers opt into them.

use tracing::{error, trace};

use crate::context::{get_default_context, Context};
use crate::schema::Descriptor;
use crate::validation::{from_success, ValidationResult};
use crate::value::Value;

/// Prefix carried by every panic raised through [`crash`].
pub const FAILURE_PREFIX: &str = "[shapeguard failure]";

/// Validates `value` against `descriptor` at an explicit starting context.
pub fn validate_with_context<D: Descriptor + ?Sized>(
    value: &Value,
    context: &Context,
    descriptor: &D,
) -> ValidationResult<Value> {
    trace!(descriptor = descriptor.name(), depth = context.len(), "validating");
    descriptor.validate(value, context)
}

/// Validates `value` against `descriptor` at the root context.
///
/// # Example
///
/// ```rust
/// use shapeguard::{from_failure, validate, Types, Value};
///
/// assert!(validate(&Value::from(1), &Types::number()).is_success());
///
/// let errors = from_failure(validate(&Value::from("a"), &Types::number()));
/// assert_eq!(errors[0].description, r#"Invalid value "a" supplied to : number"#);
/// ```
pub fn validate<D: Descriptor + ?Sized>(value: &Value, descriptor: &D) -> ValidationResult<Value> {
    validate_with_context(value, &get_default_context(descriptor), descriptor)
}

/// Validates and returns the accepted value.
///
/// # Panics
///
/// Aborts through [`crash`] with every error description, one per line, when
/// validation fails.
pub fn unsafe_validate<D: Descriptor + ?Sized>(value: &Value, descriptor: &D) -> Value {
    from_success(validate(value, descriptor))
}

/// Returns whether `descriptor` accepts `value`.
pub fn is<D: Descriptor + ?Sized>(value: &Value, descriptor: &D) -> bool {
    validate(value, descriptor).is_success()
}

/// Aborts the current thread with `message`.
///
/// The panic message is `"[shapeguard failure]\n"` followed by `message`.
///
/// ```rust,should_panic
/// shapeguard::crash("config is missing");
/// ```
pub fn crash(message: &str) -> ! {
    error!("{}", message);
    panic!("{}\n{}", FAILURE_PREFIX, message)
}

/// Aborts through [`crash`] unless `guard` holds.
///
/// `message` is only evaluated on failure; the default is `"Assert failed"`.
///
/// ```rust
/// use shapeguard::assert;
///
/// let retries = 3;
/// assert(retries < 5, None::<fn() -> String>);
/// assert(retries > 0, Some(|| format!("bad retry count {}", retries)));
/// ```
pub fn assert(guard: bool, message: Option<impl FnOnce() -> String>) {
    if !guard {
        let message = message.map_or_else(|| "Assert failed".to_string(), |f| f());
        crash(&message);
    }
}
