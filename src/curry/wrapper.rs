//! The wrapper value and its invocation semantics.

use std::fmt;
use std::rc::Rc;

use crate::curry::accumulator::{Accumulation, accumulate};
use crate::curry::strategy::{ContextStrategy, Style};
use crate::error::Result;
use crate::value::{Function, NativeFunction, Value};

/// A curried, bound or object-latched decoration of a native callable.
///
/// Wrappers are immutable. Calling one either returns a new wrapper holding
/// the concatenated arguments or, once `target_arity` arguments are
/// available, invokes the original and returns its result.
///
/// Wrappers are obtained through the factory functions in [`crate::curry`]
/// and inspected through [`Function::wrapper`].
pub struct Wrapper {
    original: Rc<NativeFunction>,
    target_arity: usize,
    accumulated: Rc<[Value]>,
    strategy: ContextStrategy,
}

impl Wrapper {
    pub(crate) fn new(
        original: Rc<NativeFunction>,
        target_arity: usize,
        accumulated: Rc<[Value]>,
        strategy: ContextStrategy,
    ) -> Self {
        debug_assert!(accumulated.len() <= target_arity);
        Self {
            original,
            target_arity,
            accumulated,
            strategy,
        }
    }

    pub(crate) const fn original_native(&self) -> &Rc<NativeFunction> {
        &self.original
    }

    pub(crate) const fn shared_accumulated(&self) -> &Rc<[Value]> {
        &self.accumulated
    }

    /// The undecorated callable. Never itself a wrapper.
    pub fn original(&self) -> Function {
        Function::from_native(Rc::clone(&self.original))
    }

    /// Total number of arguments the original is invoked with.
    pub const fn target_arity(&self) -> usize {
        self.target_arity
    }

    /// Arguments collected so far, in call order.
    pub fn accumulated(&self) -> &[Value] {
        &self.accumulated
    }

    /// Arguments still needed before the original is invoked.
    pub fn outstanding(&self) -> usize {
        self.target_arity - self.accumulated.len()
    }

    /// The style tag.
    pub const fn style(&self) -> Style {
        self.strategy.style()
    }

    /// The fixed context of a `Bound` wrapper.
    pub const fn bound_context(&self) -> Option<&Value> {
        self.strategy.bound_context()
    }

    /// The latched context of an `ObjectLatched` wrapper, once established.
    pub const fn latched_context(&self) -> Option<&Value> {
        self.strategy.latched_context()
    }

    pub(crate) fn invoke(&self, receiver: Option<&Value>, supplied: &[Value]) -> Result<Value> {
        match accumulate(&self.accumulated, supplied, self.target_arity) {
            Accumulation::Waiting(combined) => {
                tracing::trace!(
                    function = self.original.name(),
                    style = %self.style(),
                    supplied = supplied.len(),
                    outstanding = self.target_arity - combined.len(),
                    "partial application"
                );
                let next = Self {
                    original: Rc::clone(&self.original),
                    target_arity: self.target_arity,
                    accumulated: combined,
                    strategy: self.strategy.advance(receiver),
                };
                Ok(Value::Function(Function::from_wrapper(next)))
            }
            Accumulation::Ready {
                arguments,
                discarded,
            } => {
                let context = self.strategy.select(receiver);
                tracing::debug!(
                    function = self.original.name(),
                    style = %self.style(),
                    arity = self.target_arity,
                    discarded,
                    has_context = context.is_some(),
                    "terminal invocation"
                );
                self.original.invoke(context.as_ref(), &arguments)
            }
        }
    }
}

impl fmt::Debug for Wrapper {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Wrapper")
            .field("original", &self.original.name())
            .field("target_arity", &self.target_arity)
            .field("accumulated", &self.accumulated.len())
            .field("style", &self.style())
            .finish_non_exhaustive()
    }
}
