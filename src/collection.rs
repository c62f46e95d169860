use crate::{Service, ServiceFactory, ServiceInfo};
use derive_more::Display;
use std::any::Any;
use std::slice::Iter;

/// How long the container reuses an instance once it has been created.
///
/// This is the collection's native lifetime. The convention layer's
/// [`Lifetime`](crate::Lifetime) maps onto it during
/// [`add_registrations`](crate::AddRegistrations::add_registrations).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display, Hash)]
pub enum ServiceLifetime {
    /// The instance is created once and reused for every request.
    #[display(fmt = "singleton")]
    Singleton,

    /// The instance is created once per logical scope.
    #[display(fmt = "scoped")]
    Scoped,

    /// A fresh instance is created for every request.
    #[display(fmt = "transient")]
    Transient,
}

/// What the container instantiates when the service is requested.
#[derive(Clone, Debug)]
pub enum Implementation {
    /// Construct this concrete type.
    Type(ServiceInfo),

    /// Invoke this factory.
    Factory(ServiceFactory),
}

/// A single binding held by a [`ServiceCollection`].
#[derive(Clone, Debug)]
pub struct ServiceDescriptor {
    service: ServiceInfo,
    implementation: Implementation,
    lifetime: ServiceLifetime,
}

impl ServiceDescriptor {
    /// Creates a descriptor binding a service interface to an implementation
    /// under a lifetime.
    #[must_use]
    pub fn new(
        service: ServiceInfo,
        implementation: Implementation,
        lifetime: ServiceLifetime,
    ) -> Self {
        ServiceDescriptor {
            service,
            implementation,
            lifetime,
        }
    }

    /// Gets the identity of the service interface this binding is for.
    #[must_use]
    pub fn service(&self) -> ServiceInfo {
        self.service
    }

    /// Gets what the container instantiates for this binding.
    #[must_use]
    pub fn implementation(&self) -> &Implementation {
        &self.implementation
    }

    /// Gets the lifetime of instances created from this binding.
    #[must_use]
    pub fn lifetime(&self) -> ServiceLifetime {
        self.lifetime
    }
}

/// An ordered, append-only list of service bindings.
///
/// Multiple descriptors can be registered for the same service interface;
/// that is what enables multi-binding. Use
/// [`validate_registrations`](crate::ValidateRegistrations) to check the
/// registration counts that matter once wiring is complete.
#[derive(Default, Debug)]
pub struct ServiceCollection {
    descriptors: Vec<ServiceDescriptor>,
}

impl ServiceCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        ServiceCollection::default()
    }

    /// Appends a descriptor to the collection.
    pub fn add(&mut self, descriptor: ServiceDescriptor) {
        self.descriptors.push(descriptor);
    }

    /// Binds the interface `I` to the concrete type `S` under the given
    /// lifetime.
    pub fn add_service<I, S>(&mut self, lifetime: ServiceLifetime)
    where
        I: ?Sized + Any,
        S: Service,
    {
        self.add(ServiceDescriptor::new(
            ServiceInfo::of::<I>(),
            Implementation::Type(ServiceInfo::of::<S>()),
            lifetime,
        ));
    }

    /// Binds the interface `I` to a factory producing `S` under the given
    /// lifetime.
    pub fn add_factory<I, S, F>(&mut self, lifetime: ServiceLifetime, factory: F)
    where
        I: ?Sized + Any,
        S: Service,
        F: Service + Fn() -> S,
    {
        self.add(ServiceDescriptor::new(
            ServiceInfo::of::<I>(),
            Implementation::Factory(ServiceFactory::new(factory)),
            lifetime,
        ));
    }

    /// Binds the interface `I` to the concrete type `S` as a singleton.
    pub fn add_singleton<I, S>(&mut self)
    where
        I: ?Sized + Any,
        S: Service,
    {
        self.add_service::<I, S>(ServiceLifetime::Singleton);
    }

    /// Binds the interface `I` to the concrete type `S` with scoped lifetime.
    pub fn add_scoped<I, S>(&mut self)
    where
        I: ?Sized + Any,
        S: Service,
    {
        self.add_service::<I, S>(ServiceLifetime::Scoped);
    }

    /// Binds the interface `I` to the concrete type `S` with transient
    /// lifetime.
    pub fn add_transient<I, S>(&mut self)
    where
        I: ?Sized + Any,
        S: Service,
    {
        self.add_service::<I, S>(ServiceLifetime::Transient);
    }

    /// Counts the descriptors bound to the given service interface.
    ///
    /// Counting is strictly by declared service-interface identity. A
    /// concrete type registered as itself does not count towards the
    /// interfaces it implements.
    #[must_use]
    pub fn count_of(&self, service_info: ServiceInfo) -> usize {
        self.descriptors
            .iter()
            .filter(|descriptor| descriptor.service() == service_info)
            .count()
    }

    /// Iterates over the descriptors in registration order.
    pub fn iter(&self) -> Iter<'_, ServiceDescriptor> {
        self.descriptors.iter()
    }

    /// Gets the number of descriptors in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Checks whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl<'a> IntoIterator for &'a ServiceCollection {
    type Item = &'a ServiceDescriptor;
    type IntoIter = Iter<'a, ServiceDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Greeter: Service {}

    struct EnglishGreeter;
    impl Greeter for EnglishGreeter {}

    struct GermanGreeter;
    impl Greeter for GermanGreeter {}

    #[test]
    fn collection_keeps_registration_order() {
        let mut services = ServiceCollection::new();
        services.add_singleton::<dyn Greeter, EnglishGreeter>();
        services.add_transient::<GermanGreeter, GermanGreeter>();

        let mut recorded = Vec::new();
        for descriptor in &services {
            recorded.push(descriptor.service());
        }
        assert_eq!(
            vec![
                ServiceInfo::of::<dyn Greeter>(),
                ServiceInfo::of::<GermanGreeter>(),
            ],
            recorded
        );
    }

    #[test]
    fn collection_allows_duplicate_registrations() {
        let mut services = ServiceCollection::new();
        services.add_scoped::<dyn Greeter, EnglishGreeter>();
        services.add_scoped::<dyn Greeter, GermanGreeter>();

        assert_eq!(2, services.count_of(ServiceInfo::of::<dyn Greeter>()));
    }

    #[test]
    fn count_is_by_declared_interface_only() {
        let mut services = ServiceCollection::new();
        services.add_scoped::<dyn Greeter, EnglishGreeter>();
        services.add_scoped::<EnglishGreeter, EnglishGreeter>();

        assert_eq!(1, services.count_of(ServiceInfo::of::<dyn Greeter>()));
        assert_eq!(1, services.count_of(ServiceInfo::of::<EnglishGreeter>()));
        assert_eq!(0, services.count_of(ServiceInfo::of::<GermanGreeter>()));
    }

    #[test]
    fn factory_bindings_record_the_factory() {
        let mut services = ServiceCollection::new();
        services.add_factory::<dyn Greeter, EnglishGreeter, _>(
            ServiceLifetime::Transient,
            || EnglishGreeter,
        );

        let descriptor = services.iter().next().unwrap();
        assert_eq!(ServiceLifetime::Transient, descriptor.lifetime());
        match descriptor.implementation() {
            Implementation::Factory(factory) => {
                assert!(factory.invoke().is::<EnglishGreeter>());
            }
            Implementation::Type(info) => {
                panic!("expected a factory binding, found {}", info.name())
            }
        }
    }
}
