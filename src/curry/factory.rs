//! The six wrapper constructors.
//!
//! Each constructor validates its inputs up front, returns the input itself
//! when it is already a matching wrapper, and otherwise builds a fresh
//! wrapper around the undecorated original so wrappers never nest.

use crate::curry::arity::{ToArity, require_function};
use crate::curry::strategy::{ContextStrategy, Style};
use crate::curry::wrapper::Wrapper;
use crate::error::{Error, Result};
use crate::value::{Function, Value};

/// Builds a wrapper around `function`'s original that accepts `arity` more
/// arguments.
///
/// Arguments a partially applied `function` already holds stay in front, so
/// nothing supplied earlier is lost and the result reports `arity`.
fn rewrap(
    operation: &'static str,
    function: &Function,
    arity: usize,
    strategy: ContextStrategy,
) -> Result<Function> {
    let (original, prefix) = function.decompose();
    let target_arity = prefix
        .len()
        .checked_add(arity)
        .ok_or_else(|| Error::invalid_argument(operation, "arity too large"))?;

    tracing::trace!(
        operation,
        function = original.name(),
        style = %strategy.style(),
        arity,
        carried = prefix.len(),
        "wrapper constructed"
    );

    Ok(Function::from_wrapper(Wrapper::new(
        original,
        target_arity,
        prefix,
        strategy,
    )))
}

fn matching(function: &Function, style: Style, arity: usize) -> Option<&Wrapper> {
    function
        .wrapper()
        .filter(|wrapper| wrapper.style() == style && wrapper.outstanding() == arity)
}

fn reuse(operation: &'static str, function: &Function) -> Function {
    tracing::trace!(operation, function = function.name(), "reusing matching wrapper");
    function.clone()
}

fn require_context(context: Value, operation: &'static str) -> Result<Value> {
    if context.is_nullish() {
        return Err(Error::invalid_argument(
            operation,
            format!("context must not be {}", context.type_name()),
        ));
    }
    Ok(context)
}

/// Curries a callable at its declared arity.
///
/// Returns `function` itself when it already is a plain wrapper.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `function` is not callable.
///
/// # Examples
///
/// ```rust
/// use curried::{Function, Value, curry, native};
///
/// let join = curry(native!("join", |left, right| format!("{left}-{right}"))).unwrap();
///
/// let with_left = join.call(&[Value::from("a")]).unwrap();
/// let with_left = with_left.as_function().unwrap();
/// assert_eq!(with_left.call(&[Value::from("b")]).unwrap(), Value::from("a-b"));
/// assert_eq!(join.call(&[Value::from("a"), Value::from("b")]).unwrap(), Value::from("a-b"));
///
/// assert!(Function::ptr_eq(&curry(&join).unwrap(), &join));
/// ```
pub fn curry(function: impl Into<Value>) -> Result<Function> {
    const OPERATION: &str = "curry";
    let function = require_function(function.into(), OPERATION)?;
    let arity = function.arity();
    curry_function(OPERATION, &function, arity)
}

/// Curries a callable at an explicit arity.
///
/// The arity may be below, equal to or above the callable's declared arity.
/// Surplus arguments of a terminal call are discarded.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `arity` is not a non-negative
/// integer, `function` is not callable, or `arity` plus the arguments a
/// partially applied `function` already holds exceeds `usize::MAX`.
///
/// # Examples
///
/// ```rust
/// use curried::{Value, arity_of, curry_with_arity, native};
///
/// let sum = curry_with_arity(3, native!("sum", |a, b, c| {
///     [a, b, c].iter().filter_map(Value::as_number).sum::<f64>()
/// }))
/// .unwrap();
///
/// let one = sum.call(&[Value::from(1)]).unwrap();
/// let one = one.as_function().unwrap();
/// assert_eq!(arity_of(one).unwrap(), 2);
/// assert_eq!(one.call(&[Value::from(2), Value::from(3)]).unwrap(), Value::from(6));
///
/// let surplus = [1, 2, 3, 99].map(Value::from);
/// assert_eq!(sum.call(&surplus).unwrap(), Value::from(6));
/// ```
pub fn curry_with_arity(arity: impl ToArity, function: impl Into<Value>) -> Result<Function> {
    const OPERATION: &str = "curry_with_arity";
    let arity = arity.to_arity(OPERATION)?;
    let function = require_function(function.into(), OPERATION)?;
    curry_function(OPERATION, &function, arity)
}

fn curry_function(
    operation: &'static str,
    function: &Function,
    arity: usize,
) -> Result<Function> {
    if matching(function, Style::Plain, arity).is_some() {
        return Ok(reuse(operation, function));
    }
    rewrap(operation, function, arity, ContextStrategy::plain())
}

/// Binds a callable to a fixed context at its declared arity.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `context` is `Undefined` or `Null`
/// or `function` is not callable.
///
/// # Examples
///
/// ```rust
/// use curried::{Object, Value, bind, native};
///
/// let owner = Object::new();
/// owner.set("name", "owner");
/// let whose = bind(&owner, native!("whose", this => |suffix| {
///     let name = this.and_then(|receiver| receiver.as_object().map(|object| object.get("name")));
///     format!("{}{}", Value::from(name), suffix)
/// }))
/// .unwrap();
///
/// let stranger = Object::new();
/// stranger.set("whose", &whose);
/// assert_eq!(stranger.call_method("whose", &[Value::from("!")]).unwrap(), Value::from("owner!"));
/// ```
pub fn bind(context: impl Into<Value>, function: impl Into<Value>) -> Result<Function> {
    const OPERATION: &str = "bind";
    let context = require_context(context.into(), OPERATION)?;
    let function = require_function(function.into(), OPERATION)?;
    let arity = function.arity();
    bind_function(OPERATION, arity, context, &function)
}

/// Binds a callable to a fixed context at an explicit arity.
///
/// Returns `function` itself when it is already bound to the identical
/// context with the same outstanding arity.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `arity` is not a non-negative
/// integer, `context` is `Undefined` or `Null`, `function` is not callable,
/// or `arity` plus the arguments a partially applied `function` already
/// holds exceeds `usize::MAX`.
pub fn bind_with_context_and_arity(
    arity: impl ToArity,
    context: impl Into<Value>,
    function: impl Into<Value>,
) -> Result<Function> {
    const OPERATION: &str = "bind_with_context_and_arity";
    let arity = arity.to_arity(OPERATION)?;
    let context = require_context(context.into(), OPERATION)?;
    let function = require_function(function.into(), OPERATION)?;
    bind_function(OPERATION, arity, context, &function)
}

fn bind_function(
    operation: &'static str,
    arity: usize,
    context: Value,
    function: &Function,
) -> Result<Function> {
    let already_bound = matching(function, Style::Bound, arity)
        .and_then(Wrapper::bound_context)
        .is_some_and(|bound| bound.identical(&context));
    if already_bound {
        return Ok(reuse(operation, function));
    }
    rewrap(operation, function, arity, ContextStrategy::bound(context))
}

/// Curries a callable so that the first method-style call of each chain
/// latches its receiver.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `function` is not callable.
///
/// # Examples
///
/// ```rust
/// use curried::{Object, Value, native, object_curry};
///
/// let tag = object_curry(native!("tag", this => |first, second| {
///     let owner = this.and_then(|receiver| receiver.as_object().map(|object| object.get("id")));
///     format!("{}:{first}{second}", Value::from(owner))
/// }))
/// .unwrap();
///
/// let object = Object::new();
/// object.set("id", 7);
/// object.set("tag", &tag);
///
/// let partial = object.call_method("tag", &[Value::from("a")]).unwrap();
/// let partial = partial.as_function().unwrap();
/// assert_eq!(partial.call(&[Value::from("b")]).unwrap(), Value::from("7:ab"));
/// ```
pub fn object_curry(function: impl Into<Value>) -> Result<Function> {
    const OPERATION: &str = "object_curry";
    let function = require_function(function.into(), OPERATION)?;
    let arity = function.arity();
    object_curry_function(OPERATION, arity, &function)
}

/// Object-curries a callable at an explicit arity.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `arity` is not a non-negative
/// integer, `function` is not callable, or `arity` plus the arguments a
/// partially applied `function` already holds exceeds `usize::MAX`.
pub fn object_curry_with_arity(arity: impl ToArity, function: impl Into<Value>) -> Result<Function> {
    const OPERATION: &str = "object_curry_with_arity";
    let arity = arity.to_arity(OPERATION)?;
    let function = require_function(function.into(), OPERATION)?;
    object_curry_function(OPERATION, arity, &function)
}

fn object_curry_function(
    operation: &'static str,
    arity: usize,
    function: &Function,
) -> Result<Function> {
    if matching(function, Style::ObjectLatched, arity).is_some() {
        return Ok(reuse(operation, function));
    }
    rewrap(operation, function, arity, ContextStrategy::object_latched())
}
