//! Error types for validation failures and descriptor construction.
//!
//! Validation failures are values ([`ValidationError`], accumulated into
//! [`ValidationErrors`]); misusing a combinator is reported separately, when
//! the combinator is called, as a [`DescriptorError`].

mod descriptor_error;
mod validation_error;

pub use descriptor_error::DescriptorError;
pub use validation_error::{get_default_description, ValidationError, ValidationErrors};
