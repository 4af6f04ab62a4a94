use miette::Diagnostic;
use num_traits::ToPrimitive;
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum IntegerError {
    #[error("{name} must be an integer, got `{value}`")]
    #[diagnostic(code(utils::not_integer))]
    NotInteger { name: &'static str, value: String },
    #[error("{name} is out of the 64-bit integer range, got `{value}`")]
    #[diagnostic(code(utils::integer_out_of_range))]
    OutOfRange { name: &'static str, value: String },
}

impl IntegerError {
    /// Name of the rejected argument.
    pub fn name(&self) -> &'static str {
        match self {
            IntegerError::NotInteger { name, .. } | IntegerError::OutOfRange { name, .. } => *name,
        }
    }
}

/// Checks that `value` holds a whole number representable as `i64` and returns it.
///
/// Floating point inputs are accepted only when finite and without a
/// fractional part, so `3.0` passes while `0.5`, `NaN` and infinities fail.
/// Whole numbers that don't fit in `i64` are [`IntegerError::OutOfRange`].
pub fn assert_integer<N: ToPrimitive + Display>(
    name: &'static str,
    value: N,
) -> Result<i64, IntegerError> {
    let whole = value
        .to_f64()
        .is_some_and(|float| float.is_finite() && float.fract() == 0.0);
    if !whole {
        return Err(IntegerError::NotInteger {
            name,
            value: value.to_string(),
        });
    }

    value.to_i64().ok_or_else(|| IntegerError::OutOfRange {
        name,
        value: value.to_string(),
    })
}
