//! Combinators over host callables.
//!
//! - [`compose`]: right-to-left composition (B combinator)
//! - [`pipe`]: left-to-right composition
//! - [`flip`]: swaps the first two arguments (C combinator)
//!
//! Each combinator builds a native function and wraps it with the style
//! [`resolve_style`] computes for its operands, so a composition of two
//! functions bound to the same object stays bound to it.

use crate::curry::{require_function, resolve_style};
use crate::error::Result;
use crate::value::{Function, Value};

/// Composes two callables right-to-left.
///
/// The result accepts `arity_of(inner)` arguments; its terminal call runs
/// `inner` with the call's receiver and arguments, then `outer` with the same
/// receiver and `inner`'s result.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidArgument`] when either operand is not
/// callable.
///
/// # Examples
///
/// ```
/// use curried::{Value, compose, native};
///
/// let add_one = native!("add_one", |x| x.as_number().unwrap_or(0.0) + 1.0);
/// let double = native!("double", |x| x.as_number().unwrap_or(0.0) * 2.0);
///
/// // compose(f, g)(x) = f(g(x))
/// let composed = compose(&add_one, &double).unwrap();
/// assert_eq!(composed.call(&[Value::from(5)]).unwrap(), Value::from(11));
/// ```
pub fn compose(outer: impl Into<Value>, inner: impl Into<Value>) -> Result<Function> {
    const OPERATION: &str = "compose";
    let outer = require_function(outer.into(), OPERATION)?;
    let inner = require_function(inner.into(), OPERATION)?;
    let arity = inner.arity();
    let style = resolve_style(&outer, &inner);
    tracing::trace!(outer = outer.name(), inner = inner.name(), style = %style.style(), "compose");

    let name = format!("{}.{}", outer.name(), inner.name());
    let composed = Function::native(name, arity, move |invocation| {
        let intermediate = inner.apply(invocation.receiver(), invocation.arguments())?;
        outer.apply(invocation.receiver(), &[intermediate])
    });
    style.wrap(arity, composed)
}

/// Composes two callables left-to-right: `pipe(f, g) = compose(g, f)`.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidArgument`] when either operand is not
/// callable.
///
/// # Examples
///
/// ```
/// use curried::{Value, native, pipe};
///
/// let add_one = native!("add_one", |x| x.as_number().unwrap_or(0.0) + 1.0);
/// let double = native!("double", |x| x.as_number().unwrap_or(0.0) * 2.0);
///
/// let piped = pipe(&add_one, &double).unwrap();
/// assert_eq!(piped.call(&[Value::from(5)]).unwrap(), Value::from(12));
/// ```
pub fn pipe(first: impl Into<Value>, second: impl Into<Value>) -> Result<Function> {
    compose(second, first)
}

/// Swaps the first two arguments of a callable.
///
/// The result accepts at least two arguments. Its style follows
/// [`resolve_style`] applied to the operand with itself, so flipping keeps a
/// bound or object-latched callable's style.
///
/// # Laws
///
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
/// - **Double flip identity**: `flip(flip(f))(a, b) == f(a, b)`
///
/// # Errors
///
/// Returns [`crate::Error::InvalidArgument`] when `function` is not callable.
///
/// # Examples
///
/// ```
/// use curried::{Value, flip, native};
///
/// let divide = native!("divide", |numerator, denominator| {
///     numerator.as_number().unwrap_or(f64::NAN) / denominator.as_number().unwrap_or(f64::NAN)
/// });
///
/// let flipped = flip(&divide).unwrap();
/// assert_eq!(flipped.call(&[Value::from(2), Value::from(10)]).unwrap(), Value::from(5));
/// ```
pub fn flip(function: impl Into<Value>) -> Result<Function> {
    const OPERATION: &str = "flip";
    let function = require_function(function.into(), OPERATION)?;
    let arity = function.arity().max(2);
    let style = resolve_style(&function, &function);
    tracing::trace!(function = function.name(), style = %style.style(), "flip");

    let name = format!("flip({})", function.name());
    let flipped = Function::native(name, arity, move |invocation| {
        let mut arguments = invocation.arguments().to_vec();
        if arguments.len() >= 2 {
            arguments.swap(0, 1);
        }
        function.apply(invocation.receiver(), &arguments)
    });
    style.wrap(arity, flipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curry::{Style, bind, object_curry};
    use crate::value::Object;
    use rstest::rstest;

    fn subtract() -> Function {
        crate::native!("subtract", |minuend, subtrahend| {
            minuend.as_number().unwrap_or(f64::NAN) - subtrahend.as_number().unwrap_or(f64::NAN)
        })
    }

    #[rstest]
    fn compose_takes_inner_arity() {
        let negate = crate::native!("negate", |x| -x.as_number().unwrap_or(f64::NAN));
        let composed = compose(&negate, subtract()).unwrap();
        assert_eq!(composed.arity(), 2);
        assert_eq!(composed.name(), "negate.subtract");
        assert_eq!(
            composed.call(&[Value::from(3), Value::from(10)]).unwrap(),
            Value::from(7)
        );
    }

    #[rstest]
    fn compose_rejects_non_callables() {
        let error = compose(Value::from(1), subtract()).unwrap_err();
        assert_eq!(error.to_string(), "compose: expected a callable, got number");
    }

    #[rstest]
    fn flip_of_bound_stays_bound() {
        let owner = Object::new();
        let bound = bind(&owner, subtract()).unwrap();
        let flipped = flip(&bound).unwrap();
        assert_eq!(flipped.style(), Some(Style::Bound));
    }

    #[rstest]
    fn flip_of_latched_stays_latched() {
        let flipped = flip(object_curry(subtract()).unwrap()).unwrap();
        assert_eq!(flipped.style(), Some(Style::ObjectLatched));
    }

    #[rstest]
    fn flip_widens_unary_functions() {
        let first = crate::native!("first", |value| value);
        let flipped = flip(&first).unwrap();
        assert_eq!(flipped.arity(), 2);
        assert_eq!(
            flipped.call(&[Value::from("a"), Value::from("b")]).unwrap(),
            Value::from("b")
        );
    }
}
