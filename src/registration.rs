use crate::{Service, ServiceFactory, ServiceInfo};
use derive_more::Display;
use std::any::Any;

/// Controls how long the container reuses an instance of a registered
/// service.
///
/// This is the lifetime spoken by registration providers. It is mapped onto
/// the collection's [`ServiceLifetime`](crate::ServiceLifetime) when the
/// registrations are applied.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display, Hash)]
pub enum Lifetime {
    /// One instance for the whole lifetime of the container.
    #[display(fmt = "singleton")]
    Singleton,

    /// One instance per logical scope.
    #[display(fmt = "scoped")]
    Scoped,

    /// A fresh instance on every request.
    #[display(fmt = "instance")]
    Instance,
}

/// A declarative instruction to bind a service interface to an
/// implementation or a factory under a [`Lifetime`].
///
/// Exactly one of the two binding kinds applies to any registration, which
/// the sum type guarantees by construction.
#[derive(Clone, Debug)]
pub enum Registration {
    /// Bind the interface to a concrete implementation type.
    Type {
        /// The service interface being bound.
        interface: ServiceInfo,

        /// The concrete type the container constructs for the interface.
        implementation: ServiceInfo,

        /// How long instances are reused.
        lifetime: Lifetime,
    },

    /// Bind the interface to a factory function.
    Factory {
        /// The service interface being bound.
        interface: ServiceInfo,

        /// The factory the container invokes to create instances.
        factory: ServiceFactory,

        /// How long instances are reused.
        lifetime: Lifetime,
    },
}

impl Registration {
    /// Creates a registration binding the interface `I` to the concrete type
    /// `S`.
    #[must_use]
    pub fn of<I, S>(lifetime: Lifetime) -> Self
    where
        I: ?Sized + Any,
        S: Service,
    {
        Registration::Type {
            interface: ServiceInfo::of::<I>(),
            implementation: ServiceInfo::of::<S>(),
            lifetime,
        }
    }

    /// Creates a registration binding the interface `I` to a factory
    /// producing `S`.
    #[must_use]
    pub fn with_factory<I, S, F>(factory: F, lifetime: Lifetime) -> Self
    where
        I: ?Sized + Any,
        S: Service,
        F: Service + Fn() -> S,
    {
        Registration::Factory {
            interface: ServiceInfo::of::<I>(),
            factory: ServiceFactory::new(factory),
            lifetime,
        }
    }

    /// Gets the identity of the service interface being bound.
    #[must_use]
    pub fn interface(&self) -> ServiceInfo {
        match self {
            Registration::Type { interface, .. }
            | Registration::Factory { interface, .. } => *interface,
        }
    }

    /// Gets the lifetime this registration asks for.
    #[must_use]
    pub fn lifetime(&self) -> Lifetime {
        match self {
            Registration::Type { lifetime, .. }
            | Registration::Factory { lifetime, .. } => *lifetime,
        }
    }
}

/// Produces the registrations for a group of related services.
///
/// Implementations are constructed fresh for every
/// [`add_registrations`](crate::AddRegistrations::add_registrations) call
/// via [`Default`], so they should be cheap, stateless descriptions of the
/// wiring.
pub trait ProvideRegistrations {
    /// Produces the registrations, in the order they should be applied.
    fn registrations(&self) -> Vec<Registration>;
}

/// Builds a `Vec` of type-binding [`Registration`]s.
///
/// ## Example
///
/// ```
/// use service_wiring::{registrations, Lifetime, Registration, Service};
///
/// trait Greeter: Service {}
///
/// struct EnglishGreeter;
/// impl Greeter for EnglishGreeter {}
///
/// struct GermanGreeter;
/// impl Greeter for GermanGreeter {}
///
/// let registrations: Vec<Registration> = registrations![
///     dyn Greeter => EnglishGreeter [Lifetime::Scoped],
///     dyn Greeter => GermanGreeter [Lifetime::Instance],
/// ];
/// assert_eq!(2, registrations.len());
/// ```
#[macro_export]
macro_rules! registrations {
    [
        $($interface:ty => $implementation:ty [$lifetime:expr]),*
        $(,)?
    ] => {
        ::std::vec![
            $($crate::Registration::of::<$interface, $implementation>($lifetime)),*
        ]
    };
}
