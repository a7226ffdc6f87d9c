//! Style resolution for combinators that merge two callables into one.

use crate::curry::factory::{bind_with_context_and_arity, curry_with_arity, object_curry_with_arity};
use crate::curry::strategy::Style;
use crate::curry::wrapper::Wrapper;
use crate::error::Result;
use crate::value::{Function, Value};

/// The style a combinator's output wrapper takes.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedStyle {
    /// Context from the call site.
    Plain,
    /// Bound to the context both operands share.
    Bound(Value),
    /// Latched by the first method-style call.
    ObjectLatched,
}

impl ResolvedStyle {
    /// The style tag this resolution produces.
    pub const fn style(&self) -> Style {
        match self {
            Self::Plain => Style::Plain,
            Self::Bound(_) => Style::Bound,
            Self::ObjectLatched => Style::ObjectLatched,
        }
    }

    /// Wraps `function` at `arity` through the matching factory constructor.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] under the same conditions as
    /// the constructor it delegates to.
    pub fn wrap(&self, arity: usize, function: impl Into<Value>) -> Result<Function> {
        match self {
            Self::Plain => curry_with_arity(arity, function),
            Self::Bound(context) => bind_with_context_and_arity(arity, context, function),
            Self::ObjectLatched => object_curry_with_arity(arity, function),
        }
    }
}

fn is_latched(operand: Option<&Wrapper>) -> bool {
    operand.is_some_and(|wrapper| wrapper.style() == Style::ObjectLatched)
}

/// Computes the output style for a combinator over `left` and `right`.
///
/// Precedence, most specific first:
///
/// 1. either operand is object-latched: object-latched;
/// 2. both operands are bound to the identical context: bound to it;
/// 3. anything else, including non-wrapped operands: plain.
///
/// # Examples
///
/// ```rust
/// use curried::{Object, ResolvedStyle, bind, curry, native, object_curry, resolve_style};
///
/// let add = native!("add", |a, b| a.as_number().unwrap_or(0.0) + b.as_number().unwrap_or(0.0));
/// let owner = Object::new();
///
/// let bound = bind(&owner, &add).unwrap();
/// let latched = object_curry(&add).unwrap();
/// let plain = curry(&add).unwrap();
///
/// assert_eq!(resolve_style(&bound, &bound), ResolvedStyle::Bound(owner.into()));
/// assert_eq!(resolve_style(&plain, &latched), ResolvedStyle::ObjectLatched);
/// assert_eq!(resolve_style(&plain, &bound), ResolvedStyle::Plain);
/// ```
pub fn resolve_style(left: impl Into<Value>, right: impl Into<Value>) -> ResolvedStyle {
    let left = left.into();
    let right = right.into();
    let left = left.as_function().and_then(Function::wrapper);
    let right = right.as_function().and_then(Function::wrapper);

    if is_latched(left) || is_latched(right) {
        return ResolvedStyle::ObjectLatched;
    }

    match (
        left.and_then(Wrapper::bound_context),
        right.and_then(Wrapper::bound_context),
    ) {
        (Some(left), Some(right)) if left.identical(right) => ResolvedStyle::Bound(left.clone()),
        _ => ResolvedStyle::Plain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curry::factory::{bind, curry, object_curry};
    use crate::value::Object;
    use rstest::rstest;

    fn pair() -> Function {
        Function::native("pair", 2, |invocation| Ok(Value::from(invocation.len())))
    }

    #[rstest]
    fn unwrapped_operands_resolve_plain() {
        assert_eq!(resolve_style(pair(), pair()), ResolvedStyle::Plain);
        assert_eq!(resolve_style(Value::from(1), Value::Null), ResolvedStyle::Plain);
    }

    #[rstest]
    fn latched_beats_bound() {
        let context = Object::new();
        let bound = bind(&context, pair()).unwrap();
        let latched = object_curry(pair()).unwrap();
        assert_eq!(resolve_style(&bound, &latched), ResolvedStyle::ObjectLatched);
        assert_eq!(resolve_style(&latched, pair()), ResolvedStyle::ObjectLatched);
    }

    #[rstest]
    fn bound_to_distinct_contexts_is_plain() {
        let left = bind(Object::new(), pair()).unwrap();
        let right = bind(Object::new(), pair()).unwrap();
        assert_eq!(resolve_style(&left, &right), ResolvedStyle::Plain);
    }

    #[rstest]
    fn wrap_applies_the_resolved_style() {
        let context = Value::from(Object::new());
        let wrapped = ResolvedStyle::Bound(context.clone()).wrap(2, pair()).unwrap();
        assert_eq!(wrapped.style(), Some(Style::Bound));
        assert!(wrapped.wrapper().unwrap().bound_context().unwrap().identical(&context));

        let plain = ResolvedStyle::Plain.wrap(2, curry(pair()).unwrap()).unwrap();
        assert_eq!(plain.style(), Some(Style::Plain));
        assert_eq!(ResolvedStyle::ObjectLatched.style(), Style::ObjectLatched);
    }
}
