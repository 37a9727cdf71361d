//! Configuration resolution for GoCD performance-test tooling
//!
//! This crate reads named environment overrides, applies documented
//! defaults, and exposes the results as typed accessors consumed by the
//! test orchestrator and install scripts. Three resolvers cover the three
//! variable namespaces:
//!
//! - [`SetupConfig`] — installation and load-shape parameters
//! - [`ServerConfig`] — server runtime parameters and derived URLs
//! - [`UpdateConfig`] — generic update intervals
//!
//! All resolvers read from an immutable [`EnvSource`] snapshot taken at
//! construction, so results are deterministic and testable without touching
//! the process environment. The one exception to "no side effects" is
//! [`SetupConfig::go_version`], which falls back to a blocking fetch of the
//! public releases manifest when `GO_VERSION` is unset.

pub mod env;
pub mod error;
pub mod logging;
pub mod releases;
pub mod server;
pub mod setup;
pub mod types;
pub mod updates;

pub use env::{EnvSource, Fallback};
pub use error::ConfigError;
pub use releases::{GoVersion, RELEASES_JSON_URL};
pub use server::ServerConfig;
pub use setup::SetupConfig;
pub use types::{Cadence, MaterialsRatio, ServerEnvironment};
pub use updates::UpdateConfig;
