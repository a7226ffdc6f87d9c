//! # curried
//!
//! Arity-aware partial application for the callables of a dynamically typed
//! host.
//!
//! ## Overview
//!
//! A wrapped callable collects arguments across any number of calls and
//! invokes the original once it has received as many as its arity. Wrappers
//! differ in where the receiver of that final invocation comes from:
//!
//! - **Plain** ([`curry`]): the receiver of the call site, or of the most
//!   recent method-style call in the chain
//! - **Bound** ([`bind`]): a context fixed at construction
//! - **Object-latched** ([`object_curry`]): the receiver of the first
//!   method-style call in the chain
//!
//! Wrapping is idempotent: rewrapping a wrapper of the same style and arity
//! returns it unchanged, and wrappers never nest.
//!
//! ## Feature Flags
//!
//! - `compose`: [`compose`], [`pipe`] and [`flip`] over host callables
//!   (enabled by default)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use curried::prelude::*;
//!
//! let volume = curry(native!("volume", |width, height, depth| {
//!     let dimension = |value: Value| value.as_number().unwrap_or(f64::NAN);
//!     dimension(width) * dimension(height) * dimension(depth)
//! }))
//! .unwrap();
//!
//! let partial = volume.call(&[Value::from(2)]).unwrap();
//! let partial = partial.as_function().unwrap();
//! assert_eq!(arity_of(partial).unwrap(), 2);
//! assert_eq!(
//!     partial.call(&[Value::from(3), Value::from(4)]).unwrap(),
//!     Value::from(24)
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the value model, the constructors and the inspection helpers.
///
/// # Usage
///
/// ```rust
/// use curried::prelude::*;
/// ```
pub mod prelude {
    pub use crate::curry::{
        ResolvedStyle, Style, ToArity, arity_of, bind, bind_with_context_and_arity, curry,
        curry_with_arity, is_wrapped, object_curry, object_curry_with_arity, resolve_style,
    };
    pub use crate::error::{Error, Result};
    pub use crate::native;
    pub use crate::value::{Function, Invocation, IntoOutcome, Object, Value};

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

mod error;

pub mod curry;
pub mod value;

#[cfg(feature = "compose")]
pub mod compose;

pub use curry::{
    ResolvedStyle, Style, ToArity, Wrapper, arity_of, bind, bind_with_context_and_arity, curry,
    curry_with_arity, is_wrapped, object_curry, object_curry_with_arity, resolve_style,
};
pub use error::{Error, Result};
pub use value::{Function, Invocation, IntoOutcome, NativeFunction, Object, Value};

#[cfg(feature = "compose")]
pub use compose::{compose, flip, pipe};

// Values share state through `Rc` and `RefCell`; wrappers are confined to
// the thread that created them.
static_assertions::assert_not_impl_any!(Value: Send, Sync);
static_assertions::assert_not_impl_any!(Function: Send, Sync);
static_assertions::assert_impl_all!(Error: std::error::Error, Clone);
