//! The `native!` macro for defining host callables from closures.
//!
//! Host callables carry their declared arity as metadata. Rust closures do
//! not expose one at runtime, so the macro counts the listed parameters at
//! expansion time and registers the count with [`Function::native`].
//!
//! [`Function::native`]: crate::Function::native

/// Defines a native [`Function`](crate::Function) whose declared arity is the
/// number of listed parameters.
///
/// Each parameter is bound to the corresponding argument as an owned
/// [`Value`](crate::Value), or `Undefined` when the call supplied fewer. The
/// body may evaluate to anything implementing
/// [`IntoOutcome`](crate::IntoOutcome): a value convertible into a host value,
/// or a `Result` of one to raise an error.
///
/// # Forms
///
/// - `native!(|a, b| body)`: anonymous function
/// - `native!("name", |a, b| body)`: named function
/// - `native!("name", this => |a, b| body)`: binds the receiver as
///   `this: Option<Value>`
///
/// # Examples
///
/// ## Declared arity
///
/// ```
/// use curried::{Value, native};
///
/// let add = native!("add", |left, right| {
///     left.as_number().unwrap_or(f64::NAN) + right.as_number().unwrap_or(f64::NAN)
/// });
///
/// assert_eq!(add.arity(), 2);
/// assert_eq!(add.name(), "add");
/// assert_eq!(add.call(&[Value::from(2), Value::from(3)]).unwrap(), Value::from(5));
/// ```
///
/// ## Raising
///
/// ```
/// use curried::{Error, Value, native};
///
/// let strict = native!("strict", |value| {
///     if value.is_undefined() {
///         Err(Error::raise("missing value"))
///     } else {
///         Ok(value)
///     }
/// });
///
/// let error = strict.call(&[]).unwrap_err();
/// assert_eq!(error.raised_value(), Some(&Value::from("missing value")));
/// ```
///
/// ## Receiver
///
/// ```
/// use curried::{Object, Value, native};
///
/// let is_method = native!("is_method", this => || this.is_some());
/// let object = Object::new();
///
/// assert_eq!(is_method.call(&[]).unwrap(), Value::from(false));
/// assert_eq!(is_method.call_method(&object.into(), &[]).unwrap(), Value::from(true));
/// ```
#[macro_export]
macro_rules! native {
    (@count) => { 0usize };
    (@count $head:ident $($tail:ident)*) => { 1usize + $crate::native!(@count $($tail)*) };

    (@function $name:expr, $this:pat, [$($parameter:ident),*], $body:expr) => {
        $crate::Function::native(
            $name,
            $crate::native!(@count $($parameter)*),
            move |invocation: $crate::Invocation<'_>| {
                #[allow(unused_variables)]
                let $this: ::core::option::Option<$crate::Value> = invocation.receiver().cloned();
                #[allow(unused_mut, unused_variables)]
                let mut arguments = invocation.arguments().iter().cloned();
                $(
                    #[allow(unused_variables)]
                    let $parameter: $crate::Value = arguments.next().unwrap_or_default();
                )*
                $crate::IntoOutcome::into_outcome($body)
            },
        )
    };

    (|| $body:expr $(,)?) => {
        $crate::native!(@function "anonymous", _, [], $body)
    };
    (|$($parameter:ident),+ $(,)?| $body:expr $(,)?) => {
        $crate::native!(@function "anonymous", _, [$($parameter),+], $body)
    };
    ($name:literal, $this:ident => || $body:expr $(,)?) => {
        $crate::native!(@function $name, $this, [], $body)
    };
    ($name:literal, $this:ident => |$($parameter:ident),+ $(,)?| $body:expr $(,)?) => {
        $crate::native!(@function $name, $this, [$($parameter),+], $body)
    };
    ($name:literal, || $body:expr $(,)?) => {
        $crate::native!(@function $name, _, [], $body)
    };
    ($name:literal, |$($parameter:ident),+ $(,)?| $body:expr $(,)?) => {
        $crate::native!(@function $name, _, [$($parameter),+], $body)
    };
}
