//! Arity-aware partial application.
//!
//! This module is the engine: it turns host callables into wrappers that
//! collect arguments across a chain of calls and invoke the original once
//! enough have arrived.
//!
//! # Overview
//!
//! - [`curry`] / [`curry_with_arity`]: plain wrappers, context from the call site
//! - [`bind`] / [`bind_with_context_and_arity`]: context fixed at construction
//! - [`object_curry`] / [`object_curry_with_arity`]: context latched by the
//!   first method-style call of each chain
//! - [`arity_of`] / [`is_wrapped`]: inspection
//! - [`resolve_style`]: output style for combinators over two callables
//!
//! # Invocation
//!
//! Calling a wrapper with arguments `args`:
//!
//! ```text
//! combined = accumulated ++ args
//! combined.len() <  target_arity  =>  new wrapper holding combined
//! combined.len() >= target_arity  =>  original(combined[..target_arity])
//! ```
//!
//! A wrapper with `target_arity == 0` invokes on every call.
//!
//! # Laws
//!
//! - **Idempotence**: `curry(curry(f))` is the same function as `curry(f)`
//! - **Arity preservation**: `arity_of(curry(f)) == arity_of(f)`
//! - **Progressive application**: `curry(f)(a)(b)(c) == curry(f)(a, b, c) == f(a, b, c)`
//!
//! # Examples
//!
//! ```rust
//! use curried::{Object, Value, curry, native};
//!
//! let describe = curry(native!("describe", this => |first, second| {
//!     let owner = this.map_or(Value::Undefined, |receiver| receiver.as_object().map_or(Value::Undefined, |object| object.get("name")));
//!     format!("{owner}:{first}{second}")
//! }))
//! .unwrap();
//!
//! let object = Object::new();
//! object.set("name", "obj");
//! object.set("describe", &describe);
//!
//! // obj.describe(a)(b) runs with obj
//! let partial = object.call_method("describe", &[Value::from("a")]).unwrap();
//! let partial = partial.as_function().unwrap();
//! assert_eq!(partial.call(&[Value::from("b")]).unwrap(), Value::from("obj:ab"));
//!
//! // h = obj.describe; h(a)(b) runs without a context
//! let detached = describe.call(&[Value::from("a")]).unwrap();
//! let detached = detached.as_function().unwrap();
//! assert_eq!(detached.call(&[Value::from("b")]).unwrap(), Value::from("undefined:ab"));
//! ```

mod accumulator;
mod arity;
mod factory;
mod resolver;
mod strategy;
mod wrapper;

pub use arity::{ToArity, arity_of, is_wrapped};
pub use factory::{
    bind, bind_with_context_and_arity, curry, curry_with_arity, object_curry,
    object_curry_with_arity,
};
pub use resolver::{ResolvedStyle, resolve_style};
pub use strategy::Style;
pub use wrapper::Wrapper;

pub(crate) use arity::require_function;
