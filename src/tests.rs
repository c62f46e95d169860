use crate::{
    registrations, rules, AddRegistrations, Implementation, Lifetime,
    ProvideRegistrationRules, ProvideRegistrations, Registration,
    RegistrationRule, Service, ServiceCollection, ServiceInfo,
    ValidateRegistrations, ValidationError,
};

trait Mailer: Service {
    fn send(&self) -> &'static str;
}

struct SmtpMailer;
impl Mailer for SmtpMailer {
    fn send(&self) -> &'static str {
        "smtp"
    }
}

struct LogMailer;
impl Mailer for LogMailer {
    fn send(&self) -> &'static str {
        "log"
    }
}

trait Clock: Service {}

struct SystemClock;
impl Clock for SystemClock {}

#[derive(Default)]
struct AppRegistrations;

impl ProvideRegistrations for AppRegistrations {
    fn registrations(&self) -> Vec<Registration> {
        vec![
            Registration::of::<dyn Mailer, SmtpMailer>(Lifetime::Scoped),
            Registration::with_factory::<dyn Mailer, _, _>(
                || LogMailer,
                Lifetime::Scoped,
            ),
            Registration::of::<dyn Clock, SystemClock>(Lifetime::Singleton),
        ]
    }
}

#[derive(Default)]
struct AppRules;

impl ProvideRegistrationRules for AppRules {
    fn rules(&self) -> Vec<RegistrationRule> {
        rules![
            dyn Clock: exactly_once,
            dyn Mailer: at_least_once,
        ]
    }
}

#[derive(Default)]
struct StrictMailerRules;

impl ProvideRegistrationRules for StrictMailerRules {
    fn rules(&self) -> Vec<RegistrationRule> {
        rules![
            dyn Clock: exactly_once,
            dyn Mailer: exactly_once,
        ]
    }
}

#[derive(Default)]
struct MacroRegistrations;

impl ProvideRegistrations for MacroRegistrations {
    fn registrations(&self) -> Vec<Registration> {
        registrations![
            dyn Mailer => SmtpMailer [Lifetime::Instance],
            dyn Clock => SystemClock [Lifetime::Singleton],
        ]
    }
}

#[test]
fn applied_registrations_validate_against_matching_rules() {
    let mut services = ServiceCollection::new();
    services.add_registrations::<AppRegistrations>();

    assert_eq!(3, services.len());
    services.validate_registrations::<AppRules>().unwrap();
}

#[test]
fn type_and_factory_registrations_land_as_distinct_descriptors() {
    let mut services = ServiceCollection::new();
    services.add_registrations::<AppRegistrations>();

    let mailers: Vec<_> = services
        .iter()
        .filter(|descriptor| {
            descriptor.service() == ServiceInfo::of::<dyn Mailer>()
        })
        .collect();
    assert_eq!(2, mailers.len());
    assert!(matches!(
        mailers[0].implementation(),
        Implementation::Type(info) if *info == ServiceInfo::of::<SmtpMailer>()
    ));
    assert!(matches!(
        mailers[1].implementation(),
        Implementation::Factory(_)
    ));
}

#[test]
fn validation_stops_at_the_first_violated_rule() {
    let mut services = ServiceCollection::new();
    services.add_registrations::<AppRegistrations>();

    // Both rules inspect the same collection; the mailer rule is violated,
    // the clock rule is not. The mailer rule comes second, so the clock rule
    // must have been checked and passed first.
    match services.validate_registrations::<StrictMailerRules>() {
        Err(ValidationError::MultipleRegistrations { service_info })
            if service_info == ServiceInfo::of::<dyn Mailer>() => {}
        other => {
            panic!("expected a multiple registrations error, got {other:?}")
        }
    }
}

#[test]
fn empty_collection_fails_the_first_rule_in_order() {
    let services = ServiceCollection::new();

    match services.validate_registrations::<AppRules>() {
        Err(ValidationError::Unregistered { service_info })
            if service_info == ServiceInfo::of::<dyn Clock>() => {}
        other => panic!("expected an unregistered error, got {other:?}"),
    }
}

#[test]
fn macro_built_registrations_apply_like_handwritten_ones() {
    let mut services = ServiceCollection::new();
    services.add_registrations::<MacroRegistrations>();

    services.validate_registrations::<StrictMailerRules>().unwrap();
    assert_eq!(1, services.count_of(ServiceInfo::of::<dyn Mailer>()));
    assert_eq!(1, services.count_of(ServiceInfo::of::<dyn Clock>()));
}

#[test]
fn applied_factories_produce_working_services() {
    let mut services = ServiceCollection::new();
    services.add_registrations::<AppRegistrations>();

    let factory = services
        .iter()
        .find_map(|descriptor| match descriptor.implementation() {
            Implementation::Factory(factory) => Some(factory),
            Implementation::Type(_) => None,
        })
        .unwrap();
    let mailer = factory.invoke().downcast::<LogMailer>().unwrap();
    assert_eq!("log", mailer.send());
}
