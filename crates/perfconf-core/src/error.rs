//! Error types for configuration resolution

use thiserror::Error;

/// Errors surfaced by the resolvers.
///
/// Only two accessors can fail on their own: the required credential lookup
/// and the version-format check. The manifest variants cover the single
/// remote operation behind [`crate::SetupConfig::go_version`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable was absent from the environment.
    #[error("Missing {var} environment variable")]
    MissingRequiredConfig { var: &'static str },

    /// A resolved version string did not split into `<version>-<build>`.
    #[error("Wrong version format {value:?}, use 16.X.X-xxxx")]
    MalformedVersionFormat { value: String },

    /// The releases manifest could not be fetched.
    #[error("Failed to fetch releases manifest from {url}: {source}")]
    ManifestFetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The releases manifest body was not a JSON array of release records.
    #[error("Failed to parse releases manifest from {url}: {source}")]
    ManifestParse {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The releases manifest parsed but listed no versions.
    #[error("Releases manifest at {url} lists no versions")]
    EmptyManifest { url: String },
}
