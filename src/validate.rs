use crate::{ProvideRegistrationRules, ServiceCollection, ServiceInfo};
use derive_more::{Display, Error};
use tracing::trace;

/// An error raised when a registration rule is violated.
///
/// Both variants signal a static wiring defect: they are raised once during
/// startup and are not meant to be recovered from.
#[derive(Debug, Display, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// A required service interface has no registrations.
    #[display(
        fmt = "{} requires {} to be implemented. Did you forget to register it?",
        "service_info.module_path()",
        "service_info.base_name()"
    )]
    Unregistered {
        /// The interface that is missing a registration.
        service_info: ServiceInfo,
    },

    /// A service interface constrained to a single registration has more
    /// than one.
    #[display(
        fmt = "{} requires {} to be implemented exactly once but multiple registrations have been found",
        "service_info.module_path()",
        "service_info.base_name()"
    )]
    MultipleRegistrations {
        /// The interface that is registered more than once.
        service_info: ServiceInfo,
    },
}

/// A result from validating registration rules against a collection.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates registration rules against a populated [`ServiceCollection`].
pub trait ValidateRegistrations {
    /// Checks every rule produced by `P`, in order, against this collection.
    ///
    /// Validation is a pure read: the collection is never mutated. Rules are
    /// checked sequentially and the first violation is returned; callers
    /// that need a full report must catch and continue across repeated
    /// calls.
    fn validate_registrations<P>(&self) -> ValidationResult<()>
    where
        P: ProvideRegistrationRules + Default;
}

impl ValidateRegistrations for ServiceCollection {
    fn validate_registrations<P>(&self) -> ValidationResult<()>
    where
        P: ProvideRegistrationRules + Default,
    {
        for rule in P::default().rules() {
            if rule.multiple_instances_allowed() {
                validate_at_least_once(self, rule.interface())?;
            } else {
                validate_exactly_once(self, rule.interface())?;
            }
        }

        Ok(())
    }
}

fn validate_at_least_once(
    services: &ServiceCollection,
    interface: ServiceInfo,
) -> ValidationResult<()> {
    let found = services.count_of(interface);
    trace!(service = interface.name(), found, "checking at-least-once rule");

    if found == 0 {
        return Err(ValidationError::Unregistered {
            service_info: interface,
        });
    }

    Ok(())
}

fn validate_exactly_once(
    services: &ServiceCollection,
    interface: ServiceInfo,
) -> ValidationResult<()> {
    let found = services.count_of(interface);
    trace!(service = interface.name(), found, "checking exactly-once rule");

    match found {
        0 => Err(ValidationError::Unregistered {
            service_info: interface,
        }),
        1 => Ok(()),
        _ => Err(ValidationError::MultipleRegistrations {
            service_info: interface,
        }),
    }
}
