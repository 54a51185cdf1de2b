//! Use case orchestration for orgguard policies.
//!
//! This crate coordinates the settings and domain layers with the outside world. The
//! outside world is reached only through injected collaborators:
//! - [`ConfigSource`](orgguard_settings::ConfigSource) for layer documents
//! - [`EnablementOracle`] for the opt-in/opt-out decision
//! - [`GraphqlClient`] for repository content lookups
//!
//! Nothing here retries, times out, or installs a tracing subscriber.

#![forbid(unsafe_code)]

mod catalog;
mod error;
mod policy;
mod ports;
pub mod query;

#[cfg(test)]
mod test_support;

pub use catalog::CatalogPolicy;
pub use error::CheckError;
pub use policy::Policy;
pub use ports::{EnablementOracle, GraphqlClient, GraphqlRequest};
