//! Opaque event handler references

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A reference to anything registered against a lifecycle event.
///
/// Nothing checks that the value is callable; closures, function pointers
/// and plain values are all accepted. Cloning shares the same value.
#[derive(Clone)]
pub struct Handler {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Handler {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// True when both handles point at the same registered value.
    pub fn ptr_eq(&self, other: &Handler) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handler").field(&self.type_name).finish()
    }
}
