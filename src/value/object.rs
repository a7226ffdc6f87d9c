use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::value::Value;

/// A host object: a shared, mutable property bag with reference identity.
///
/// Cloning an `Object` clones the handle, not the properties. Objects are the
/// receivers of method-style calls made through [`Object::call_method`].
///
/// # Examples
///
/// ```rust
/// use curried::{Function, Object, Value};
///
/// let counter = Object::new();
/// counter.set("count", 2);
/// counter.set(
///     "read",
///     Function::native("read", 0, |invocation| {
///         let receiver = invocation.receiver().and_then(Value::as_object).cloned();
///         Ok(receiver.map_or(Value::Undefined, |object| object.get("count")))
///     }),
/// );
///
/// assert_eq!(counter.call_method("read", &[]).unwrap(), Value::from(2));
/// ```
#[derive(Clone, Default)]
pub struct Object {
    properties: Rc<RefCell<BTreeMap<String, Value>>>,
}

impl Object {
    /// Creates an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a property, `Undefined` when absent.
    pub fn get(&self, key: &str) -> Value {
        self.properties
            .borrow()
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    /// Writes a property, replacing any previous value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.properties
            .borrow_mut()
            .insert(key.into(), value.into());
    }

    /// Returns `true` if the property exists.
    pub fn has(&self, key: &str) -> bool {
        self.properties.borrow().contains_key(key)
    }

    /// Removes a property and returns its previous value.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.properties.borrow_mut().remove(key)
    }

    /// Property names in sorted order.
    pub fn keys(&self) -> Vec<String> {
        self.properties.borrow().keys().cloned().collect()
    }

    /// Returns `true` if both handles refer to the same object.
    pub fn ptr_eq(left: &Self, right: &Self) -> bool {
        Rc::ptr_eq(&left.properties, &right.properties)
    }

    /// Calls the function stored under `name` with this object as receiver.
    ///
    /// This is the host's `object.name(arguments...)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the property is not callable,
    /// and otherwise whatever the called function returns.
    pub fn call_method(&self, name: &str, arguments: &[Value]) -> Result<Value> {
        let property = self.get(name);
        let Value::Function(function) = property else {
            return Err(Error::invalid_argument(
                "call_method",
                format!("property `{name}` is {}, not a function", property.type_name()),
            ));
        };
        function.call_method(&Value::Object(self.clone()), arguments)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Values may point back at this object, so only keys are printed.
        formatter
            .debug_struct("Object")
            .field("keys", &self.keys())
            .finish()
    }
}
