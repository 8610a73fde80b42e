//! Capability markers
//!
//! A layer never cares what concrete type sits behind its template or its
//! stacks, only that the value has the right capability. Templates are
//! checked as *types* through [`TypeRef`]; stacks are checked as *instances*
//! through the [`Component`] query interface.

use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

/// A capability a layer collaborator can be checked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    NaniteTemplate,
    OutputStack,
    InputStack,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NaniteTemplate => write!(f, "nanite template"),
            Self::OutputStack => write!(f, "output stack"),
            Self::InputStack => write!(f, "input stack"),
        }
    }
}

/// Marker for types nanites can be instantiated from.
///
/// Implement this on a type, then hand [`TypeRef::template`] to a layer.
pub trait NaniteTemplate: 'static {}

/// Anything a layer can be wired to.
///
/// The queries upcast to a stack trait object. They can only return
/// `Some(self)` when `Self` implements that stack trait, so a component
/// conforms to a stack capability only by implementing it. Use
/// [`component!`](crate::component) to write both the marker impls and
/// the matching queries in one place.
pub trait Component: fmt::Debug + Send + Sync + 'static {
    fn as_output_stack(&self) -> Option<&dyn OutputStack>;

    fn as_input_stack(&self) -> Option<&dyn InputStack>;
}

impl dyn Component {
    pub fn conforms_to(&self, capability: Capability) -> bool {
        match capability {
            Capability::OutputStack => self.as_output_stack().is_some(),
            Capability::InputStack => self.as_input_stack().is_some(),
            // templates are types, never instances
            Capability::NaniteTemplate => false,
        }
    }
}

/// A channel a layer writes to.
///
/// Implementors must also return `Some(self)` from
/// [`Component::as_output_stack`].
pub trait OutputStack: Component {}

/// A channel a layer reads from.
///
/// Implementors must also return `Some(self)` from
/// [`Component::as_input_stack`].
pub trait InputStack: Component {}

/// Implement [`Component`] and the listed stack markers for a type.
///
/// ```
/// #[derive(Debug)]
/// struct Queue;
/// nanomind_core::component!(Queue: InputStack + OutputStack);
///
/// #[derive(Debug)]
/// struct Label(&'static str);
/// nanomind_core::component!(Label);
/// ```
#[macro_export]
macro_rules! component {
    ($ty:ty: OutputStack + InputStack) => {
        $crate::component!($ty: InputStack + OutputStack);
    };
    ($ty:ty: InputStack + OutputStack) => {
        impl $crate::Component for $ty {
            fn as_output_stack(&self) -> ::core::option::Option<&dyn $crate::OutputStack> {
                ::core::option::Option::Some(self)
            }
            fn as_input_stack(&self) -> ::core::option::Option<&dyn $crate::InputStack> {
                ::core::option::Option::Some(self)
            }
        }
        impl $crate::OutputStack for $ty {}
        impl $crate::InputStack for $ty {}
    };
    ($ty:ty: OutputStack) => {
        impl $crate::Component for $ty {
            fn as_output_stack(&self) -> ::core::option::Option<&dyn $crate::OutputStack> {
                ::core::option::Option::Some(self)
            }
            fn as_input_stack(&self) -> ::core::option::Option<&dyn $crate::InputStack> {
                ::core::option::Option::None
            }
        }
        impl $crate::OutputStack for $ty {}
    };
    ($ty:ty: InputStack) => {
        impl $crate::Component for $ty {
            fn as_output_stack(&self) -> ::core::option::Option<&dyn $crate::OutputStack> {
                ::core::option::Option::None
            }
            fn as_input_stack(&self) -> ::core::option::Option<&dyn $crate::InputStack> {
                ::core::option::Option::Some(self)
            }
        }
        impl $crate::InputStack for $ty {}
    };
    ($ty:ty) => {
        impl $crate::Component for $ty {
            fn as_output_stack(&self) -> ::core::option::Option<&dyn $crate::OutputStack> {
                ::core::option::Option::None
            }
            fn as_input_stack(&self) -> ::core::option::Option<&dyn $crate::InputStack> {
                ::core::option::Option::None
            }
        }
    };
}

/// A reference to a type.
///
/// Only [`NaniteTemplate`] types can be referenced by type; anything else is
/// a bare name. Two references are equal when they name the same type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeRef {
    name: Arc<str>,
    template: Option<TypeId>,
}

impl TypeRef {
    /// Reference a nanite template type.
    pub fn template<T: NaniteTemplate>() -> Self {
        Self {
            name: Arc::from(std::any::type_name::<T>()),
            template: Some(TypeId::of::<T>()),
        }
    }

    /// A bare name that does not resolve to any template type.
    pub fn opaque(name: impl Into<String>) -> Self {
        Self {
            name: Arc::from(name.into()),
            template: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn conforms_to(&self, capability: Capability) -> bool {
        match capability {
            Capability::NaniteTemplate => self.template.is_some(),
            // stacks are instances, never types
            Capability::OutputStack | Capability::InputStack => false,
        }
    }

    pub fn is<T: 'static>(&self) -> bool {
        self.template == Some(TypeId::of::<T>())
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
