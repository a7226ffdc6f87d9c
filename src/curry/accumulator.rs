//! Argument accumulation across a partial application chain.

use std::rc::Rc;

use smallvec::SmallVec;

use crate::value::Value;

/// Inline capacity covers the arities the library's wrapper modules use.
pub(crate) type ArgumentBuffer = SmallVec<[Value; 4]>;

/// Outcome of adding supplied arguments to an accumulated prefix.
#[derive(Debug)]
pub(crate) enum Accumulation {
    /// Still short of the target; the frozen combined list.
    Waiting(Rc<[Value]>),
    /// Target reached; exactly `target_arity` arguments.
    Ready {
        arguments: ArgumentBuffer,
        discarded: usize,
    },
}

/// Concatenates `supplied` onto `accumulated` and decides whether to invoke.
///
/// Surplus arguments from this call are never copied; `discarded` reports how
/// many were dropped.
pub(crate) fn accumulate(
    accumulated: &[Value],
    supplied: &[Value],
    target_arity: usize,
) -> Accumulation {
    debug_assert!(accumulated.len() <= target_arity);
    let needed = target_arity - accumulated.len();

    if supplied.len() < needed {
        let combined: Vec<Value> = accumulated.iter().chain(supplied).cloned().collect();
        return Accumulation::Waiting(combined.into());
    }

    let mut arguments = ArgumentBuffer::with_capacity(target_arity);
    arguments.extend(accumulated.iter().cloned());
    arguments.extend(supplied[..needed].iter().cloned());

    Accumulation::Ready {
        arguments,
        discarded: supplied.len() - needed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn values(numbers: &[i32]) -> Vec<Value> {
        numbers.iter().copied().map(Value::from).collect()
    }

    #[rstest]
    fn short_call_waits_with_concatenated_arguments() {
        let accumulated = values(&[1]);
        let Accumulation::Waiting(combined) = accumulate(&accumulated, &values(&[2]), 3) else {
            panic!("expected waiting");
        };
        assert_eq!(combined.as_ref(), values(&[1, 2]).as_slice());
    }

    #[rstest]
    fn exact_call_is_ready() {
        let Accumulation::Ready {
            arguments,
            discarded,
        } = accumulate(&values(&[1]), &values(&[2, 3]), 3)
        else {
            panic!("expected ready");
        };
        assert_eq!(arguments.as_slice(), values(&[1, 2, 3]).as_slice());
        assert_eq!(discarded, 0);
    }

    #[rstest]
    fn surplus_is_truncated() {
        let Accumulation::Ready {
            arguments,
            discarded,
        } = accumulate(&[], &values(&[1, 2, 3, 99]), 3)
        else {
            panic!("expected ready");
        };
        assert_eq!(arguments.as_slice(), values(&[1, 2, 3]).as_slice());
        assert_eq!(discarded, 1);
    }

    #[rstest]
    #[case(&[])]
    #[case(&[5, 6])]
    fn zero_target_is_always_ready(#[case] supplied: &[i32]) {
        let Accumulation::Ready {
            arguments,
            discarded,
        } = accumulate(&[], &values(supplied), 0)
        else {
            panic!("expected ready");
        };
        assert!(arguments.is_empty());
        assert_eq!(discarded, supplied.len());
    }

    #[rstest]
    fn empty_call_on_waiting_chain_keeps_waiting() {
        assert!(matches!(
            accumulate(&values(&[1]), &[], 2),
            Accumulation::Waiting(combined) if combined.len() == 1
        ));
    }
}
