//! The dynamic host value model.
//!
//! The engine works over the values of a dynamically typed host: every
//! argument, receiver and result is a [`Value`]. Objects and functions are
//! reference types and compare by identity; everything else compares by
//! value.
//!
//! # Examples
//!
//! ```rust
//! use curried::{Object, Value};
//!
//! let object = Object::new();
//! object.set("answer", 42);
//!
//! let first = Value::from(object.clone());
//! let second = Value::from(object);
//! assert!(first.identical(&second));
//! assert!(!Value::from(Object::new()).identical(&first));
//! assert_eq!(Value::from(1.5), Value::from(1.5));
//! ```

mod function;
mod native_macro;
mod object;

use std::fmt;
use std::rc::Rc;

pub use function::{Function, Invocation, IntoOutcome, NativeFunction};
pub use object::Object;

/// A dynamically typed host value.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absent value. Missing arguments read as `Undefined`.
    #[default]
    Undefined,
    /// The explicit empty value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double precision number.
    Number(f64),
    /// An immutable string.
    String(Rc<str>),
    /// A mutable property bag compared by identity.
    Object(Object),
    /// A callable, wrapped or not.
    Function(Function),
}

impl Value {
    /// Strict host equality.
    ///
    /// Primitives compare by value (`NaN` is never identical to anything),
    /// objects and functions by reference.
    pub fn identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            #[allow(clippy::float_cmp)]
            (Self::Number(left), Self::Number(right)) => left == right,
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Object(left), Self::Object(right)) => Object::ptr_eq(left, right),
            (Self::Function(left), Self::Function(right)) => Function::ptr_eq(left, right),
            _ => false,
        }
    }

    /// The host's name for the value's type.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Object(_) => "object",
            Self::Function(_) => "function",
        }
    }

    /// Returns `true` for `Undefined`.
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` for `Undefined` and `Null`.
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Returns `true` if the value can be invoked.
    pub const fn is_callable(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Returns the number, if the value is one.
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the boolean, if the value is one.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the string contents, if the value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the object, if the value is one.
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the function, if the value is callable.
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.identical(other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Null => formatter.write_str("null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Number(number) if number.is_nan() => formatter.write_str("NaN"),
            Self::Number(number) if number.is_infinite() => {
                formatter.write_str(if *number > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Self::Number(number) if number.fract() == 0.0 && number.abs() < 1e21 => {
                write!(formatter, "{number:.0}")
            }
            Self::Number(number) => write!(formatter, "{number}"),
            Self::String(text) => formatter.write_str(text),
            Self::Object(_) => formatter.write_str("[object Object]"),
            Self::Function(function) => write!(formatter, "[Function: {}]", function.name()),
        }
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Undefined
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

macro_rules! impl_from_lossless_number {
    ($($number:ty),*) => {
        $(
            impl From<$number> for Value {
                fn from(number: $number) -> Self {
                    Self::Number(f64::from(number))
                }
            }
        )*
    };
}

impl_from_lossless_number!(i8, i16, i32, u8, u16, u32, f32);

macro_rules! impl_from_wide_number {
    ($($number:ty),*) => {
        $(
            impl From<$number> for Value {
                #[allow(clippy::cast_precision_loss)]
                fn from(number: $number) -> Self {
                    Self::Number(number as f64)
                }
            }
        )*
    };
}

impl_from_wide_number!(i64, u64, isize, usize);

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(Rc::from(text))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(Rc::from(text))
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Self::Object(object)
    }
}

impl From<&Object> for Value {
    fn from(object: &Object) -> Self {
        Self::Object(object.clone())
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<&Function> for Value {
    fn from(function: &Function) -> Self {
        Self::Function(function.clone())
    }
}

impl From<&Self> for Value {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Undefined, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Undefined, "undefined")]
    #[case(Value::Null, "null")]
    #[case(Value::from(true), "true")]
    #[case(Value::from(6), "6")]
    #[case(Value::from(-0.5), "-0.5")]
    #[case(Value::from(f64::NAN), "NaN")]
    #[case(Value::from(f64::NEG_INFINITY), "-Infinity")]
    #[case(Value::from("text"), "text")]
    #[case(Value::from(Object::new()), "[object Object]")]
    fn display_follows_host_printing(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn nan_is_never_identical() {
        let nan = Value::from(f64::NAN);
        assert!(!nan.identical(&nan));
    }

    #[rstest]
    fn strings_compare_by_content() {
        assert!(Value::from("abc").identical(&Value::from(String::from("abc"))));
    }

    #[rstest]
    fn mixed_types_are_not_identical() {
        assert!(!Value::from(1).identical(&Value::from("1")));
        assert!(!Value::Undefined.identical(&Value::Null));
    }

    #[rstest]
    fn option_converts_none_to_undefined() {
        assert!(Value::from(None::<i32>).is_undefined());
        assert_eq!(Value::from(Some(3)), Value::from(3));
    }

    #[rstest]
    fn accessors_match_variant() {
        assert_eq!(Value::from(2).as_number(), Some(2.0));
        assert_eq!(Value::from(false).as_bool(), Some(false));
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert!(Value::Null.as_object().is_none());
        assert!(Value::Null.is_nullish());
        assert!(!Value::from(0).is_callable());
        assert_eq!(Value::from(0).type_name(), "number");
    }
}
