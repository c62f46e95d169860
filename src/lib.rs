//! # Service registration conventions.
//!
//! This crate is a small convention layer for wiring applications during
//! startup. It does two independent things:
//!
//! - **Batch registration:** describe how a group of services should be
//!   registered ([`Registration`]) and apply the whole batch to a
//!   [`ServiceCollection`] at once
//!   ([`add_registrations`](AddRegistrations::add_registrations)).
//! - **Wiring validation:** describe how many registrations each interface
//!   must end up with ([`RegistrationRule`]) and check a populated
//!   collection against those expectations
//!   ([`validate_registrations`](ValidateRegistrations::validate_registrations)).
//!
//! Both run once during startup, before any traffic. Resolving services out
//! of the collection is a concern for the container consuming it, not for
//! this crate.
//!
//! By default, service factories use thread-safe pointers. This is because
//! [`Arc<T>`](std::sync::Arc) is used to hold instances of the services.
//! This can be changed to [`Rc<T>`](std::rc::Rc) by disabling default
//! features and enabling the "rc" feature:
//!
//! ```text
//! [dependencies.service_wiring]
//! version = "*" # Replace with the version you want to use
//! default-features = false
//! features = ["rc"]
//! ```
//!
//! ## Lifetimes
//!
//! Registrations declare one of three [`Lifetime`]s, which map onto the
//! collection's native [`ServiceLifetime`]s when the batch is applied:
//!
//! - **[`Lifetime::Singleton`]:** one instance for the whole lifetime of
//!   the container.
//! - **[`Lifetime::Scoped`]:** one instance per logical scope.
//! - **[`Lifetime::Instance`]:** a fresh instance on every request
//!   (transient).
//!
//! ## Example
//!
//! ```
//! use service_wiring::{
//!     rules, AddRegistrations, Lifetime, ProvideRegistrationRules,
//!     ProvideRegistrations, Registration, RegistrationRule, Service,
//!     ServiceCollection, ServiceInfo, ValidateRegistrations,
//! };
//!
//! // This is our interface. Multiple structs can implement it, and the
//! // collection doesn't care which concrete type backs a registration as
//! // long as its identity is declared.
//! //
//! // The `Service` supertrait supplies the `Send`/`Sync` bounds required
//! // when compiling with the "arc" feature.
//! trait Greeter: Service {
//!     fn greet(&self) -> String;
//! }
//!
//! struct EnglishGreeter;
//! impl Greeter for EnglishGreeter {
//!     fn greet(&self) -> String {
//!         "Hello!".to_owned()
//!     }
//! }
//!
//! // A group of related registrations. Providers are constructed fresh for
//! // each call through `Default`, so they are usually unit structs.
//! #[derive(Default)]
//! struct GreetingRegistrations;
//!
//! impl ProvideRegistrations for GreetingRegistrations {
//!     fn registrations(&self) -> Vec<Registration> {
//!         vec![
//!             // Bind the interface to a concrete type...
//!             Registration::of::<dyn Greeter, EnglishGreeter>(
//!                 Lifetime::Scoped,
//!             ),
//!             // ...or to a factory.
//!             Registration::with_factory::<dyn Greeter, _, _>(
//!                 || EnglishGreeter,
//!                 Lifetime::Instance,
//!             ),
//!         ]
//!     }
//! }
//!
//! // The expectations the finished wiring must meet.
//! #[derive(Default)]
//! struct GreetingRules;
//!
//! impl ProvideRegistrationRules for GreetingRules {
//!     fn rules(&self) -> Vec<RegistrationRule> {
//!         rules![dyn Greeter: at_least_once]
//!     }
//! }
//!
//! let mut services = ServiceCollection::new();
//! services.add_registrations::<GreetingRegistrations>();
//! services.validate_registrations::<GreetingRules>().unwrap();
//!
//! assert_eq!(2, services.count_of(ServiceInfo::of::<dyn Greeter>()));
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![warn(missing_docs)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::doc_markdown
)]

#[cfg(not(any(feature = "arc", feature = "rc")))]
compile_error!(
    "Either the 'arc' or 'rc' feature must be enabled (but not both)."
);

#[cfg(all(feature = "arc", feature = "rc"))]
compile_error!(
    "The 'arc' and 'rc' features are mutually exclusive and cannot be enabled together."
);

mod apply;
mod collection;
mod registration;
mod rules;
mod service;
mod validate;

pub use apply::*;
pub use collection::*;
pub use registration::*;
pub use rules::*;
pub use service::*;
pub use validate::*;

#[cfg(test)]
mod tests;
