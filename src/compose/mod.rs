//! Combinators that merge host callables into new wrappers.
//!
//! The combinators here are the reference users of [`resolve_style`]: each
//! one builds a native function around its operands and wraps the result in
//! the style their decorations call for.
//!
//! # Overview
//!
//! - [`compose`]: right-to-left composition, `compose(f, g)(x) = f(g(x))`
//! - [`pipe`]: left-to-right composition, `pipe(f, g)(x) = g(f(x))`
//! - [`flip`]: swaps the first two arguments
//!
//! # Examples
//!
//! ## Curried composition
//!
//! ```
//! use curried::{Value, compose, native};
//!
//! let add = native!("add", |left, right| {
//!     left.as_number().unwrap_or(f64::NAN) + right.as_number().unwrap_or(f64::NAN)
//! });
//! let double = native!("double", |x| x.as_number().unwrap_or(f64::NAN) * 2.0);
//!
//! // The composition takes the inner function's arity and curries it.
//! let add_then_double = compose(&double, &add).unwrap();
//! let partial = add_then_double.call(&[Value::from(1)]).unwrap();
//! let partial = partial.as_function().unwrap();
//! assert_eq!(partial.call(&[Value::from(2)]).unwrap(), Value::from(6));
//! ```
//!
//! ## Bound composition
//!
//! ```
//! use curried::{Object, Style, Value, bind, compose, native};
//!
//! let name = native!("name", this => || {
//!     this.and_then(|receiver| receiver.as_object().map(|object| object.get("name")))
//!         .unwrap_or_default()
//! });
//! let shout = native!("shout", |text| format!("{text}!"));
//!
//! let owner = Object::new();
//! owner.set("name", "ada");
//!
//! let composed = compose(bind(&owner, &shout).unwrap(), bind(&owner, &name).unwrap()).unwrap();
//! assert_eq!(composed.style(), Some(Style::Bound));
//! assert_eq!(composed.call(&[]).unwrap(), Value::from("ada!"));
//! ```
//!
//! [`resolve_style`]: crate::resolve_style

mod combinators;

pub use combinators::{compose, flip, pipe};
