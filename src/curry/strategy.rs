//! Context strategies: which receiver a wrapped callable runs with.

use std::fmt;

use crate::value::Value;

/// The style tag carried by every wrapper.
///
/// | Style           | Terminal call runs with                                  |
/// |-----------------|----------------------------------------------------------|
/// | `Plain`         | the active call-site receiver of the chain               |
/// | `Bound`         | the bound context, always                                |
/// | `ObjectLatched` | the first method-call receiver of the chain, else call site |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Style {
    /// Context comes from the call site.
    Plain,
    /// Context fixed at construction.
    Bound,
    /// Context latched by the first method-style call of a chain.
    ObjectLatched,
}

impl fmt::Display for Style {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Plain => "plain",
            Self::Bound => "bound",
            Self::ObjectLatched => "object-latched",
        })
    }
}

/// Per-wrapper context state. Immutable: partial application derives the next
/// snapshot with [`ContextStrategy::advance`].
#[derive(Clone, Debug)]
pub(crate) enum ContextStrategy {
    /// `carried` is the receiver of the most recent method-style call in the
    /// chain, if any.
    Plain { carried: Option<Value> },
    Bound { context: Value },
    /// `latched` is set at most once per chain.
    ObjectLatched { latched: Option<Value> },
}

impl ContextStrategy {
    pub(crate) const fn plain() -> Self {
        Self::Plain { carried: None }
    }

    pub(crate) fn bound(context: Value) -> Self {
        Self::Bound { context }
    }

    pub(crate) const fn object_latched() -> Self {
        Self::ObjectLatched { latched: None }
    }

    pub(crate) const fn style(&self) -> Style {
        match self {
            Self::Plain { .. } => Style::Plain,
            Self::Bound { .. } => Style::Bound,
            Self::ObjectLatched { .. } => Style::ObjectLatched,
        }
    }

    pub(crate) const fn bound_context(&self) -> Option<&Value> {
        match self {
            Self::Bound { context } => Some(context),
            _ => None,
        }
    }

    pub(crate) const fn latched_context(&self) -> Option<&Value> {
        match self {
            Self::ObjectLatched { latched } => latched.as_ref(),
            _ => None,
        }
    }

    /// The context a call made with `receiver` resolves to.
    pub(crate) fn select(&self, receiver: Option<&Value>) -> Option<Value> {
        match self {
            Self::Plain { carried } => receiver.or(carried.as_ref()).cloned(),
            Self::Bound { context } => Some(context.clone()),
            Self::ObjectLatched { latched } => latched.as_ref().or(receiver).cloned(),
        }
    }

    /// The snapshot handed to the partial application produced by a call made
    /// with `receiver`.
    pub(crate) fn advance(&self, receiver: Option<&Value>) -> Self {
        match self {
            Self::Plain { .. } => Self::Plain {
                carried: self.select(receiver),
            },
            Self::Bound { .. } => self.clone(),
            Self::ObjectLatched { latched } => {
                if let (None, Some(receiver)) = (latched, receiver) {
                    tracing::debug!(%receiver, "latching receiver");
                }
                Self::ObjectLatched {
                    latched: self.select(receiver),
                }
            }
        }
    }
}
