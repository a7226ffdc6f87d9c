use std::fmt;
use std::rc::Rc;

use crate::curry::{Style, Wrapper};
use crate::error::Result;
use crate::value::{Object, Value};

type NativeBody = dyn Fn(Invocation<'_>) -> Result<Value>;

/// An undecorated host callable with a declared arity.
///
/// The declared arity is metadata, as in the host: a native function may be
/// called with fewer or more arguments than it declares, and reads missing
/// ones as `Undefined`.
pub struct NativeFunction {
    name: String,
    arity: usize,
    body: Box<NativeBody>,
}

impl NativeFunction {
    /// The name the function was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared parameter count.
    pub const fn arity(&self) -> usize {
        self.arity
    }

    pub(crate) fn invoke(&self, receiver: Option<&Value>, arguments: &[Value]) -> Result<Value> {
        (self.body)(Invocation {
            receiver,
            arguments,
        })
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// The receiver and arguments a native function is invoked with.
#[derive(Clone, Copy, Debug)]
pub struct Invocation<'a> {
    receiver: Option<&'a Value>,
    arguments: &'a [Value],
}

impl<'a> Invocation<'a> {
    /// The execution context, `None` for a call without one.
    pub const fn receiver(&self) -> Option<&'a Value> {
        self.receiver
    }

    /// The receiver as an object, if it is one.
    pub fn receiver_object(&self) -> Option<&'a Object> {
        self.receiver.and_then(Value::as_object)
    }

    /// All supplied arguments.
    pub const fn arguments(&self) -> &'a [Value] {
        self.arguments
    }

    /// The argument at `index`, `Undefined` when not supplied.
    pub fn argument(&self, index: usize) -> Value {
        self.arguments.get(index).cloned().unwrap_or_default()
    }

    /// Number of supplied arguments.
    pub const fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns `true` when no argument was supplied.
    pub const fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }
}

#[derive(Clone)]
enum FunctionKind {
    Native(Rc<NativeFunction>),
    Wrapped(Rc<Wrapper>),
}

/// A host callable: either a [`NativeFunction`] or a wrapper produced by the
/// factory in [`crate::curry`].
///
/// `Function` is a cheap reference-counted handle. Two handles are the same
/// function only if [`Function::ptr_eq`] says so.
///
/// # Examples
///
/// ```rust
/// use curried::{Function, Value};
///
/// let describe = Function::native("describe", 1, |invocation| {
///     Ok(Value::from(format!("got {}", invocation.argument(0))))
/// });
///
/// assert_eq!(describe.arity(), 1);
/// assert_eq!(describe.call(&[Value::from(7)]).unwrap(), Value::from("got 7"));
/// assert_eq!(describe.call(&[]).unwrap(), Value::from("got undefined"));
/// ```
#[derive(Clone)]
pub struct Function {
    kind: FunctionKind,
}

impl Function {
    /// Registers a native callable with an explicit declared arity.
    pub fn native<F>(name: impl Into<String>, arity: usize, body: F) -> Self
    where
        F: Fn(Invocation<'_>) -> Result<Value> + 'static,
    {
        Self {
            kind: FunctionKind::Native(Rc::new(NativeFunction {
                name: name.into(),
                arity,
                body: Box::new(body),
            })),
        }
    }

    pub(crate) fn from_wrapper(wrapper: Wrapper) -> Self {
        Self {
            kind: FunctionKind::Wrapped(Rc::new(wrapper)),
        }
    }

    pub(crate) fn from_native(native: Rc<NativeFunction>) -> Self {
        Self {
            kind: FunctionKind::Native(native),
        }
    }

    /// The undecorated original and the arguments already applied to it.
    pub(crate) fn decompose(&self) -> (Rc<NativeFunction>, Rc<[Value]>) {
        match &self.kind {
            FunctionKind::Native(native) => (Rc::clone(native), Rc::from(Vec::new())),
            FunctionKind::Wrapped(wrapper) => (
                Rc::clone(wrapper.original_native()),
                Rc::clone(wrapper.shared_accumulated()),
            ),
        }
    }

    /// The wrapper behind this function, if it was produced by the factory.
    pub fn wrapper(&self) -> Option<&Wrapper> {
        match &self.kind {
            FunctionKind::Wrapped(wrapper) => Some(wrapper),
            FunctionKind::Native(_) => None,
        }
    }

    /// The name of the undecorated callable.
    pub fn name(&self) -> &str {
        match &self.kind {
            FunctionKind::Native(native) => native.name(),
            FunctionKind::Wrapped(wrapper) => wrapper.original_native().name(),
        }
    }

    /// Declared arity of a native function, outstanding arity of a wrapper.
    pub fn arity(&self) -> usize {
        match &self.kind {
            FunctionKind::Native(native) => native.arity(),
            FunctionKind::Wrapped(wrapper) => wrapper.outstanding(),
        }
    }

    /// Returns `true` if this function was produced by the factory.
    pub const fn is_wrapped(&self) -> bool {
        matches!(self.kind, FunctionKind::Wrapped(_))
    }

    /// The style tag of a wrapper, `None` for an undecorated callable.
    pub fn style(&self) -> Option<Style> {
        self.wrapper().map(Wrapper::style)
    }

    /// The undecorated callable: itself, or the wrapper's original.
    pub fn original(&self) -> Self {
        match &self.kind {
            FunctionKind::Native(_) => self.clone(),
            FunctionKind::Wrapped(wrapper) => Self::from_native(Rc::clone(wrapper.original_native())),
        }
    }

    /// Returns `true` if both handles refer to the same callable.
    pub fn ptr_eq(left: &Self, right: &Self) -> bool {
        match (&left.kind, &right.kind) {
            (FunctionKind::Native(left), FunctionKind::Native(right)) => Rc::ptr_eq(left, right),
            (FunctionKind::Wrapped(left), FunctionKind::Wrapped(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }

    /// Invokes the function with an explicit execution context.
    ///
    /// `None` models a free call, `Some(receiver)` a method-style call.
    ///
    /// # Errors
    ///
    /// Propagates whatever the underlying callable returns.
    pub fn apply(&self, receiver: Option<&Value>, arguments: &[Value]) -> Result<Value> {
        match &self.kind {
            FunctionKind::Native(native) => native.invoke(receiver, arguments),
            FunctionKind::Wrapped(wrapper) => wrapper.invoke(receiver, arguments),
        }
    }

    /// Invokes the function as a free call.
    ///
    /// # Errors
    ///
    /// Propagates whatever the underlying callable returns.
    pub fn call(&self, arguments: &[Value]) -> Result<Value> {
        self.apply(None, arguments)
    }

    /// Invokes the function as a method of `receiver`.
    ///
    /// # Errors
    ///
    /// Propagates whatever the underlying callable returns.
    pub fn call_method(&self, receiver: &Value, arguments: &[Value]) -> Result<Value> {
        self.apply(Some(receiver), arguments)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FunctionKind::Native(native) => fmt::Debug::fmt(native.as_ref(), formatter),
            FunctionKind::Wrapped(wrapper) => fmt::Debug::fmt(wrapper.as_ref(), formatter),
        }
    }
}

/// Conversion of a native function body's result into a call outcome.
///
/// Used by [`native!`](crate::native) so bodies may evaluate to a plain value
/// or to a `Result` when they need to raise.
pub trait IntoOutcome {
    /// Converts into the outcome of a call.
    ///
    /// # Errors
    ///
    /// Returns the error carried by a `Result` body.
    fn into_outcome(self) -> Result<Value>;
}

impl<T: Into<Value>> IntoOutcome for Result<T> {
    fn into_outcome(self) -> Result<Value> {
        self.map(Into::into)
    }
}

macro_rules! impl_into_outcome {
    ($($source:ty),*) => {
        $(
            impl IntoOutcome for $source {
                fn into_outcome(self) -> Result<Value> {
                    Ok(Value::from(self))
                }
            }
        )*
    };
}

impl_into_outcome!(
    Value, (), bool, f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, String,
    &str, Object, Function
);
