use std::{
    any::{Any, TypeId},
    fmt::{Debug, Formatter},
};

#[cfg(feature = "arc")]
mod types {
    use std::{any::Any, sync::Arc};

    /// A reference-counted pointer holding a service. The pointer type is
    /// determined by the feature flags passed to this crate.
    pub type Svc<T> = Arc<T>;

    /// A reference-counted service pointer holding an instance of `dyn Any`.
    pub type DynSvc = Arc<dyn Any + Send + Sync>;

    /// Implemented automatically on types that are capable of being a service.
    pub trait Service: Any + Send + Sync {}
    impl<T: ?Sized + Any + Send + Sync> Service for T {}
}

#[cfg(feature = "rc")]
mod types {
    use std::{any::Any, rc::Rc};

    /// A reference-counted pointer holding a service. The pointer type is
    /// determined by the feature flags passed to this crate.
    pub type Svc<T> = Rc<T>;

    /// A reference-counted service pointer holding an instance of `dyn Any`.
    pub type DynSvc = Rc<dyn Any>;

    /// Implemented automatically on types that are capable of being a service.
    pub trait Service: Any {}
    impl<T: ?Sized + Any> Service for T {}
}

pub use types::*;

#[cfg(feature = "arc")]
type FactoryFn = dyn Fn() -> DynSvc + Send + Sync;

#[cfg(feature = "rc")]
type FactoryFn = dyn Fn() -> DynSvc;

/// Type information about a service.
///
/// This is the identity used everywhere in this crate: descriptors, rules,
/// and registration counts are all keyed by the [`ServiceInfo`] of the
/// declared service interface. It can be created for unsized types, so
/// `ServiceInfo::of::<dyn Greeter>()` works as expected.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct ServiceInfo {
    id: TypeId,
    name: &'static str,
}

impl ServiceInfo {
    /// Creates a [`ServiceInfo`] for the given type.
    #[must_use]
    pub fn of<T: ?Sized + Any>() -> Self {
        ServiceInfo {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Gets the [`TypeId`] for this service.
    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Gets the full type name of this service, including its module path.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Gets the type name of this service without its module path or any
    /// `dyn` qualifier.
    ///
    /// Type parameters, if any, keep their full paths.
    #[must_use]
    pub fn base_name(&self) -> &'static str {
        let name = Self::unqualified(self.name);
        match Self::head(name).rfind("::") {
            Some(index) => &name[index + 2..],
            None => name,
        }
    }

    /// Gets the path of the module that declares this service, or an empty
    /// string for types without one (primitives, for instance).
    #[must_use]
    pub fn module_path(&self) -> &'static str {
        let name = Self::unqualified(self.name);
        match Self::head(name).rfind("::") {
            Some(index) => &name[..index],
            None => "",
        }
    }

    // Trait object names render as "dyn path::Trait".
    fn unqualified(name: &'static str) -> &'static str {
        name.strip_prefix("dyn ").unwrap_or(name)
    }

    // The name up to the first type parameter, so that paths inside generic
    // arguments are not mistaken for the type's own path.
    fn head(name: &'static str) -> &'static str {
        match name.find('<') {
            Some(index) => &name[..index],
            None => name,
        }
    }
}

/// A type-erased, reference-counted service factory.
///
/// Factories are stored by the collection and invoked by the container each
/// time an instance of the service is needed. Cloning a [`ServiceFactory`]
/// clones the pointer, not the factory itself, so clones share their
/// identity (see [`ServiceFactory::ptr_eq`]).
#[derive(Clone)]
pub struct ServiceFactory {
    func: Svc<FactoryFn>,
}

impl ServiceFactory {
    /// Creates a factory from a function producing the concrete service.
    #[must_use]
    pub fn new<S, F>(func: F) -> Self
    where
        S: Service,
        F: Service + Fn() -> S,
    {
        ServiceFactory {
            func: Svc::new(move || -> DynSvc { Svc::new(func()) }),
        }
    }

    /// Invokes the factory, producing a fresh service instance.
    #[must_use]
    pub fn invoke(&self) -> DynSvc {
        (self.func)()
    }

    /// Checks whether two factories share the same underlying function.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Svc::ptr_eq(&self.func, &other.func)
    }
}

impl Debug for ServiceFactory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("ServiceFactory(..)")
    }
}
