//! Integration tests for `resolve_style` and `ResolvedStyle::wrap`.

use curried::{
    Function, Object, ResolvedStyle, Style, Value, bind, curry, native, object_curry,
    resolve_style,
};
use rstest::rstest;

#[derive(Clone, Copy, Debug)]
enum Operand {
    Unwrapped,
    Plain,
    BoundX,
    BoundY,
    Latched,
}

struct Contexts {
    x: Object,
    y: Object,
}

impl Contexts {
    fn new() -> Self {
        Self {
            x: Object::new(),
            y: Object::new(),
        }
    }

    fn build(&self, operand: Operand) -> Function {
        let pair = native!("pair", |left, right| format!("{left}{right}"));
        match operand {
            Operand::Unwrapped => pair,
            Operand::Plain => curry(pair).unwrap(),
            Operand::BoundX => bind(&self.x, pair).unwrap(),
            Operand::BoundY => bind(&self.y, pair).unwrap(),
            Operand::Latched => object_curry(pair).unwrap(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Expected {
    Plain,
    BoundX,
    BoundY,
    Latched,
}

#[rstest]
#[case(Operand::Plain, Operand::Plain, Expected::Plain)]
#[case(Operand::Plain, Operand::BoundX, Expected::Plain)]
#[case(Operand::Plain, Operand::Latched, Expected::Latched)]
#[case(Operand::BoundX, Operand::Plain, Expected::Plain)]
#[case(Operand::BoundX, Operand::BoundX, Expected::BoundX)]
#[case(Operand::BoundX, Operand::BoundY, Expected::Plain)]
#[case(Operand::BoundX, Operand::Latched, Expected::Latched)]
#[case(Operand::BoundY, Operand::BoundY, Expected::BoundY)]
#[case(Operand::BoundY, Operand::BoundX, Expected::Plain)]
#[case(Operand::Latched, Operand::Plain, Expected::Latched)]
#[case(Operand::Latched, Operand::BoundX, Expected::Latched)]
#[case(Operand::Latched, Operand::Latched, Expected::Latched)]
#[case(Operand::Unwrapped, Operand::Unwrapped, Expected::Plain)]
#[case(Operand::Unwrapped, Operand::BoundX, Expected::Plain)]
#[case(Operand::BoundX, Operand::Unwrapped, Expected::Plain)]
#[case(Operand::Unwrapped, Operand::Latched, Expected::Latched)]
fn resolution_table(#[case] left: Operand, #[case] right: Operand, #[case] expected: Expected) {
    let contexts = Contexts::new();
    let resolved = resolve_style(contexts.build(left), contexts.build(right));

    let expected = match expected {
        Expected::Plain => ResolvedStyle::Plain,
        Expected::BoundX => ResolvedStyle::Bound(Value::from(&contexts.x)),
        Expected::BoundY => ResolvedStyle::Bound(Value::from(&contexts.y)),
        Expected::Latched => ResolvedStyle::ObjectLatched,
    };
    assert_eq!(resolved, expected, "{left:?} with {right:?}");
}

#[rstest]
fn bound_to_identical_primitive_contexts() {
    let pair = native!("pair", |left, right| format!("{left}{right}"));
    let left = bind("ctx", &pair).unwrap();
    let right = bind("ctx", &pair).unwrap();
    assert_eq!(
        resolve_style(&left, &right),
        ResolvedStyle::Bound(Value::from("ctx"))
    );
}

#[rstest]
fn partial_wrappers_keep_their_style() {
    let contexts = Contexts::new();
    let partial = contexts
        .build(Operand::BoundX)
        .call(&[Value::from("a")])
        .unwrap();
    assert_eq!(
        resolve_style(&partial, contexts.build(Operand::BoundX)),
        ResolvedStyle::Bound(Value::from(&contexts.x))
    );
}

#[rstest]
#[case(ResolvedStyle::Plain, Style::Plain)]
#[case(ResolvedStyle::Bound(Value::from(1)), Style::Bound)]
#[case(ResolvedStyle::ObjectLatched, Style::ObjectLatched)]
fn wrap_uses_the_matching_constructor(#[case] resolved: ResolvedStyle, #[case] style: Style) {
    let pair = native!("pair", |left, right| format!("{left}{right}"));
    let wrapped = resolved.wrap(2, pair).unwrap();
    assert_eq!(wrapped.style(), Some(style));
    assert_eq!(resolved.style(), style);
    assert_eq!(
        wrapped.call(&[Value::from("a"), Value::from("b")]).unwrap(),
        Value::from("ab")
    );
}

#[rstest]
fn wrap_rejects_non_callables() {
    assert!(ResolvedStyle::Plain.wrap(1, Value::Null).is_err());
}
