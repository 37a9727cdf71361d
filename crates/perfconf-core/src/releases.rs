//! Remote releases manifest lookup
//!
//! The experimental download channel publishes a JSON array of release
//! records. When `GO_VERSION` is not set explicitly, the setup resolver
//! picks the greatest `go_full_version` from that manifest.

use std::fmt;

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

/// Manifest listing the versions available on the experimental channel.
pub const RELEASES_JSON_URL: &str = "https://download.gocd.io/experimental/releases.json";

/// One release record from the manifest. Unrecognized fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Full version string, e.g. `16.3.0-3183`.
    pub go_full_version: String,
}

/// A resolved server version, split into release and build parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoVersion {
    /// Numeric release part, e.g. `16.3.0`.
    pub release: String,
    /// Build qualifier, e.g. `3183`.
    pub build: String,
}

impl GoVersion {
    /// Split a `<release>-<build>` string at the first `-`.
    ///
    /// Fails with [`ConfigError::MalformedVersionFormat`] when the
    /// separator is absent. A second `-` stays in the build part.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.split_once('-') {
            Some((release, build)) => Ok(Self {
                release: release.to_string(),
                build: build.to_string(),
            }),
            None => Err(ConfigError::MalformedVersionFormat {
                value: raw.to_string(),
            }),
        }
    }
}

impl fmt::Display for GoVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.release, self.build)
    }
}

/// Fetch the manifest at `url` and return its greatest `go_full_version`.
///
/// One blocking GET, no retry, no caching. Ordering is a plain string
/// comparison, so versions with differing digit-group widths can mis-rank
/// ("16.9.0" sorts above "16.10.0"); set `GO_VERSION` to pin a build.
pub fn latest_version(url: &str) -> Result<String, ConfigError> {
    let releases = fetch_releases(url)?;
    debug!("releases manifest at {url} lists {} versions", releases.len());
    pick_latest(&releases).ok_or_else(|| ConfigError::EmptyManifest {
        url: url.to_string(),
    })
}

fn fetch_releases(url: &str) -> Result<Vec<Release>, ConfigError> {
    debug!("fetching releases manifest from {url}");
    let response = reqwest::blocking::get(url).map_err(|source| ConfigError::ManifestFetch {
        url: url.to_string(),
        source,
    })?;
    response.json().map_err(|source| ConfigError::ManifestParse {
        url: url.to_string(),
        source,
    })
}

fn pick_latest(releases: &[Release]) -> Option<String> {
    releases
        .iter()
        .map(|release| release.go_full_version.as_str())
        .max()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn releases(versions: &[&str]) -> Vec<Release> {
        versions
            .iter()
            .map(|v| Release {
                go_full_version: (*v).to_string(),
            })
            .collect()
    }

    #[test]
    fn test_parse_splits_release_and_build() {
        let version = GoVersion::parse("16.2.1-4444").unwrap();
        assert_eq!(version.release, "16.2.1");
        assert_eq!(version.build, "4444");
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        let err = GoVersion::parse("bad").unwrap_err();
        assert!(matches!(err, ConfigError::MalformedVersionFormat { value } if value == "bad"));
    }

    #[test]
    fn test_parse_splits_at_first_separator_only() {
        let version = GoVersion::parse("16.3.0-3183-exp").unwrap();
        assert_eq!(version.release, "16.3.0");
        assert_eq!(version.build, "3183-exp");
    }

    #[test]
    fn test_display_round_trips() {
        let version = GoVersion::parse("16.2.1-4444").unwrap();
        assert_eq!(version.to_string(), "16.2.1-4444");
    }

    #[test]
    fn test_pick_latest_takes_greatest_string() {
        let picked = pick_latest(&releases(&["16.1.0-2934", "16.3.0-3183", "16.2.1-4444"]));
        assert_eq!(picked.as_deref(), Some("16.3.0-3183"));
    }

    #[test]
    fn test_pick_latest_empty_manifest() {
        assert_eq!(pick_latest(&[]), None);
    }

    #[test]
    fn test_pick_latest_is_not_semver_aware() {
        // String ordering ranks 16.9.0 above 16.10.0.
        let picked = pick_latest(&releases(&["16.10.0-4100", "16.9.0-4000"]));
        assert_eq!(picked.as_deref(), Some("16.9.0-4000"));
    }

    #[test]
    fn test_release_record_ignores_extra_fields() {
        let json = r#"[{"go_full_version": "16.3.0-3183", "go_version": "16.3.0", "filename": "go-server"}]"#;
        let parsed: Vec<Release> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed[0].go_full_version, "16.3.0-3183");
    }
}
