use crate::ServiceInfo;
use std::any::Any;

/// A declarative expectation about how many registrations a service
/// interface must have once wiring is complete.
///
/// A rule describes an expectation, not an actual registration. Rules are
/// checked against a populated collection by
/// [`validate_registrations`](crate::ValidateRegistrations::validate_registrations).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct RegistrationRule {
    interface: ServiceInfo,
    multiple_instances_allowed: bool,
}

impl RegistrationRule {
    /// Creates a rule requiring the interface `I` to be registered exactly
    /// once.
    #[must_use]
    pub fn exactly_once<I: ?Sized + Any>() -> Self {
        RegistrationRule {
            interface: ServiceInfo::of::<I>(),
            multiple_instances_allowed: false,
        }
    }

    /// Creates a rule requiring the interface `I` to be registered at least
    /// once.
    #[must_use]
    pub fn at_least_once<I: ?Sized + Any>() -> Self {
        RegistrationRule {
            interface: ServiceInfo::of::<I>(),
            multiple_instances_allowed: true,
        }
    }

    /// Relaxes this rule to allow multiple registrations.
    #[must_use]
    pub fn allow_multiple_instances(self) -> Self {
        RegistrationRule {
            multiple_instances_allowed: true,
            ..self
        }
    }

    /// Gets the identity of the interface this rule is about.
    #[must_use]
    pub fn interface(&self) -> ServiceInfo {
        self.interface
    }

    /// Checks whether this rule permits more than one registration.
    #[must_use]
    pub fn multiple_instances_allowed(&self) -> bool {
        self.multiple_instances_allowed
    }
}

/// Produces the registration rules for a group of related services.
///
/// Implementations are constructed fresh for every
/// [`validate_registrations`](crate::ValidateRegistrations::validate_registrations)
/// call via [`Default`].
pub trait ProvideRegistrationRules {
    /// Produces the rules, in the order they should be checked.
    fn rules(&self) -> Vec<RegistrationRule>;
}

/// Builds a `Vec` of [`RegistrationRule`]s.
///
/// ## Example
///
/// ```
/// use service_wiring::{rules, RegistrationRule, Service};
///
/// trait Greeter: Service {}
/// trait Audit: Service {}
///
/// let rules: Vec<RegistrationRule> = rules![
///     dyn Greeter: exactly_once,
///     dyn Audit: at_least_once,
/// ];
/// assert!(!rules[0].multiple_instances_allowed());
/// assert!(rules[1].multiple_instances_allowed());
/// ```
#[macro_export]
macro_rules! rules {
    [
        $($interface:ty: $kind:ident),*
        $(,)?
    ] => {
        ::std::vec![
            $($crate::RegistrationRule::$kind::<$interface>()),*
        ]
    };
}
