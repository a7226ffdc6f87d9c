//! Arity inspection and arity argument validation.

use crate::error::{Error, Result};
use crate::value::{Function, Value};

/// Conversion of an arity argument into a parameter count.
///
/// Implemented for Rust integers, `f64` and host [`Value`]s so that the
/// factory accepts arities the way a dynamic host passes them, and rejects
/// negative, fractional, non-finite or non-numeric ones.
///
/// # Examples
///
/// ```rust
/// use curried::{ToArity, Value};
///
/// assert_eq!(3_i32.to_arity("example").unwrap(), 3);
/// assert_eq!(Value::from(2.0).to_arity("example").unwrap(), 2);
/// assert!((-1_i32).to_arity("example").is_err());
/// assert!(2.5_f64.to_arity("example").is_err());
/// assert!(Value::from("2").to_arity("example").is_err());
/// ```
pub trait ToArity {
    /// Validates `self` as an arity for `operation`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] unless `self` is a non-negative
    /// integer.
    fn to_arity(&self, operation: &'static str) -> Result<usize>;
}

fn invalid_arity(operation: &'static str, found: impl std::fmt::Display) -> Error {
    Error::invalid_argument(
        operation,
        format!("arity must be a non-negative integer, got {found}"),
    )
}

fn arity_out_of_range(operation: &'static str, found: impl std::fmt::Display) -> Error {
    Error::invalid_argument(
        operation,
        format!("arity exceeds the supported maximum, got {found}"),
    )
}

macro_rules! impl_to_arity_for_integer {
    ($($integer:ty),*) => {
        $(
            impl ToArity for $integer {
                fn to_arity(&self, operation: &'static str) -> Result<usize> {
                    usize::try_from(*self).map_err(|_| {
                        if i128::try_from(*self).is_ok_and(|wide| wide < 0) {
                            invalid_arity(operation, self)
                        } else {
                            arity_out_of_range(operation, self)
                        }
                    })
                }
            }
        )*
    };
}

impl_to_arity_for_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl ToArity for f64 {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn to_arity(&self, operation: &'static str) -> Result<usize> {
        let number = *self;
        if !(number.is_finite() && number >= 0.0 && number.fract() == 0.0) {
            return Err(invalid_arity(operation, Value::Number(number)));
        }
        // `usize::MAX as f64` rounds up to the first value that does not fit.
        if number >= usize::MAX as f64 {
            return Err(arity_out_of_range(operation, Value::Number(number)));
        }
        Ok(number as usize)
    }
}

impl ToArity for Value {
    fn to_arity(&self, operation: &'static str) -> Result<usize> {
        match self {
            Self::Number(number) => number.to_arity(operation),
            other => Err(invalid_arity(operation, other.type_name())),
        }
    }
}

impl<T: ToArity + ?Sized> ToArity for &T {
    fn to_arity(&self, operation: &'static str) -> Result<usize> {
        (**self).to_arity(operation)
    }
}

/// Narrows a value to a callable, the only argument check the engine makes.
pub(crate) fn require_function(value: Value, operation: &'static str) -> Result<Function> {
    match value {
        Value::Function(function) => Ok(function),
        other => Err(Error::invalid_argument(
            operation,
            format!("expected a callable, got {}", other.type_name()),
        )),
    }
}

/// The declared arity of an unwrapped callable, or what a wrapper still needs.
///
/// A wrapper that has accumulated arguments behaves like a callable whose
/// declared arity is its outstanding count.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `callable` is not a function.
pub(crate) fn declared_arity(callable: &Value, operation: &'static str) -> Result<usize> {
    match callable {
        Value::Function(function) => Ok(function.arity()),
        other => Err(Error::invalid_argument(
            operation,
            format!("expected a callable, got {}", other.type_name()),
        )),
    }
}

/// Returns the number of arguments a callable still accepts before invoking.
///
/// For an undecorated callable this is its declared arity; for a wrapper it is
/// `target_arity - accumulated`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `callable` is not a function.
///
/// # Examples
///
/// ```rust
/// use curried::{Value, arity_of, curry_with_arity, native};
///
/// let add = curry_with_arity(3, native!("add", |a, b, c| {
///     a.as_number().unwrap_or(0.0) + b.as_number().unwrap_or(0.0) + c.as_number().unwrap_or(0.0)
/// }))
/// .unwrap();
///
/// assert_eq!(arity_of(&add).unwrap(), 3);
/// let partial = add.call(&[Value::from(1)]).unwrap();
/// assert_eq!(arity_of(&partial).unwrap(), 2);
/// assert!(arity_of(Value::Null).is_err());
/// ```
pub fn arity_of(callable: impl Into<Value>) -> Result<usize> {
    declared_arity(&callable.into(), "arity_of")
}

/// Returns `true` if `callable` is a wrapper produced by the factory.
///
/// ```rust
/// use curried::{Value, curry, is_wrapped, native};
///
/// let identity = native!("identity", |value| value);
/// assert!(!is_wrapped(&identity));
/// assert!(is_wrapped(curry(&identity).unwrap()));
/// assert!(!is_wrapped(Value::from(1)));
/// ```
pub fn is_wrapped(callable: impl Into<Value>) -> bool {
    callable
        .into()
        .as_function()
        .is_some_and(Function::is_wrapped)
}
