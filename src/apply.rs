use crate::{
    Implementation, Lifetime, ProvideRegistrations, Registration,
    ServiceCollection, ServiceDescriptor, ServiceLifetime,
};
use tracing::debug;

impl From<Lifetime> for ServiceLifetime {
    fn from(lifetime: Lifetime) -> Self {
        match lifetime {
            Lifetime::Singleton => ServiceLifetime::Singleton,
            Lifetime::Scoped => ServiceLifetime::Scoped,
            Lifetime::Instance => ServiceLifetime::Transient,
        }
    }
}

/// Batch-applies provided registrations to a [`ServiceCollection`].
pub trait AddRegistrations {
    /// Applies every registration produced by `P`, in order, to this
    /// collection.
    ///
    /// Each registration is appended independently under its mapped
    /// lifetime. Registrations already in the collection are never touched,
    /// and duplicate registrations are permitted.
    fn add_registrations<P>(&mut self) -> &mut Self
    where
        P: ProvideRegistrations + Default;
}

impl AddRegistrations for ServiceCollection {
    fn add_registrations<P>(&mut self) -> &mut Self
    where
        P: ProvideRegistrations + Default,
    {
        for registration in P::default().registrations() {
            let lifetime = ServiceLifetime::from(registration.lifetime());
            match registration {
                Registration::Type {
                    interface,
                    implementation,
                    ..
                } => {
                    debug!(
                        service = interface.name(),
                        implementation = implementation.name(),
                        %lifetime,
                        "registering service"
                    );
                    self.add(ServiceDescriptor::new(
                        interface,
                        Implementation::Type(implementation),
                        lifetime,
                    ));
                }
                Registration::Factory {
                    interface, factory, ..
                } => {
                    debug!(
                        service = interface.name(),
                        %lifetime,
                        "registering service factory"
                    );
                    self.add(ServiceDescriptor::new(
                        interface,
                        Implementation::Factory(factory),
                        lifetime,
                    ));
                }
            }
        }

        self
    }
}
