//! Immutable environment snapshot and lookup primitives
//!
//! Resolvers never read `std::env` directly; they are handed an
//! [`EnvSource`] at construction. That keeps every accessor deterministic
//! with respect to the snapshot and lets tests build arbitrary environments
//! without mutating process state.

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::ConfigError;

/// Fallback applied when a variable is unset: either a literal default or a
/// lazily-invoked computation. Only the remote version lookup needs the
/// computed form; everything else goes through [`EnvSource::string_or`].
pub enum Fallback<'a> {
    /// A literal default value.
    Literal(&'a str),
    /// A computation run only when the variable is absent.
    Computed(&'a dyn Fn() -> Result<String, ConfigError>),
}

/// Read-only snapshot of environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    vars: HashMap<String, String>,
}

impl EnvSource {
    /// Snapshot the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// An empty snapshot. Combine with [`EnvSource::with_var`] in tests.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Return a copy of this snapshot with one variable set.
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Raw lookup.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Lookup with a literal default.
    pub fn string_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    /// Integer lookup with a typed default.
    ///
    /// A variable that is present but non-numeric resolves to zero rather
    /// than erroring; the default applies only when the variable is absent.
    pub fn int_or<T>(&self, key: &str, default: T) -> T
    where
        T: FromStr + Default,
    {
        match self.get(key) {
            Some(raw) => raw.trim().parse().unwrap_or_default(),
            None => default,
        }
    }

    /// Lookup that fails with [`ConfigError::MissingRequiredConfig`] when
    /// the variable is absent.
    pub fn required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.get(key)
            .map(str::to_string)
            .ok_or(ConfigError::MissingRequiredConfig { var: key })
    }

    /// Boolean flag rule: set only when the value is exactly `"Y"`.
    /// Any other value, including `"y"` and `"yes"`, reads as unset.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key) == Some("Y")
    }

    /// Lookup with an explicit [`Fallback`]. `Computed` fallbacks run only
    /// when the variable is absent.
    pub fn resolve(&self, key: &str, fallback: Fallback<'_>) -> Result<String, ConfigError> {
        if let Some(value) = self.get(key) {
            return Ok(value.to_string());
        }
        match fallback {
            Fallback::Literal(value) => Ok(value.to_string()),
            Fallback::Computed(compute) => compute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_string_or_prefers_set_value() {
        let env = EnvSource::empty().with_var("GIT_ROOT", "elsewhere");
        assert_eq!(env.string_or("GIT_ROOT", "gitrepos"), "elsewhere");
        assert_eq!(env.string_or("UNSET", "gitrepos"), "gitrepos");
    }

    #[test]
    fn test_int_or_default_when_absent() {
        let env = EnvSource::empty();
        assert_eq!(env.int_or("NO_OF_AGENTS", 10u64), 10);
    }

    #[test]
    fn test_int_or_parses_present_value() {
        let env = EnvSource::empty().with_var("NO_OF_AGENTS", "3");
        assert_eq!(env.int_or("NO_OF_AGENTS", 10u64), 3);
    }

    #[test]
    fn test_int_or_non_numeric_resolves_to_zero() {
        let env = EnvSource::empty().with_var("NO_OF_AGENTS", "lots");
        assert_eq!(env.int_or("NO_OF_AGENTS", 10u64), 0);
    }

    #[test]
    fn test_required_missing() {
        let env = EnvSource::empty();
        let err = env.required("TFS_PWD").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingRequiredConfig { var: "TFS_PWD" }
        ));
    }

    #[test]
    fn test_required_present() {
        let env = EnvSource::empty().with_var("TFS_PWD", "x");
        assert_eq!(env.required("TFS_PWD").unwrap(), "x");
    }

    #[test]
    fn test_flag_exact_y_only() {
        assert!(EnvSource::empty().with_var("INCLUDE_PLUGINS", "Y").flag("INCLUDE_PLUGINS"));
        assert!(!EnvSource::empty().with_var("INCLUDE_PLUGINS", "y").flag("INCLUDE_PLUGINS"));
        assert!(!EnvSource::empty().with_var("INCLUDE_PLUGINS", "yes").flag("INCLUDE_PLUGINS"));
        assert!(!EnvSource::empty().with_var("INCLUDE_PLUGINS", "1").flag("INCLUDE_PLUGINS"));
        assert!(!EnvSource::empty().flag("INCLUDE_PLUGINS"));
    }

    #[test]
    fn test_resolve_literal_fallback() {
        let env = EnvSource::empty();
        let value = env.resolve("DOWNLOAD_URL", Fallback::Literal("https://example.test")).unwrap();
        assert_eq!(value, "https://example.test");
    }

    #[test]
    fn test_resolve_computed_runs_only_when_absent() {
        let env = EnvSource::empty().with_var("GO_VERSION", "16.2.1-4444");
        let compute =
            || -> Result<String, ConfigError> { panic!("fallback must not run when the variable is set") };
        let value = env.resolve("GO_VERSION", Fallback::Computed(&compute)).unwrap();
        assert_eq!(value, "16.2.1-4444");

        let fetched = || Ok("16.3.0-3183".to_string());
        let value = EnvSource::empty()
            .resolve("GO_VERSION", Fallback::Computed(&fetched))
            .unwrap();
        assert_eq!(value, "16.3.0-3183");
    }

    #[test]
    #[serial]
    fn test_from_process_sees_set_variable() {
        unsafe { std::env::set_var("PERFCONF_SNAPSHOT_PROBE", "probe") };
        let env = EnvSource::from_process();
        assert_eq!(env.get("PERFCONF_SNAPSHOT_PROBE"), Some("probe"));
        unsafe { std::env::remove_var("PERFCONF_SNAPSHOT_PROBE") };

        // Snapshots are immutable: removal does not affect the taken copy.
        assert_eq!(env.get("PERFCONF_SNAPSHOT_PROBE"), Some("probe"));
    }
}
