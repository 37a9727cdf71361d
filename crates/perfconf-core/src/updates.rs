//! Generic update-interval parameters

use std::path::PathBuf;

use crate::env::EnvSource;
use crate::releases::RELEASES_JSON_URL;

/// Resolver for the update-interval namespace.
#[derive(Debug, Clone)]
pub struct UpdateConfig {
    env: EnvSource,
}

impl UpdateConfig {
    pub fn new(env: EnvSource) -> Self {
        Self { env }
    }

    /// The fixed releases manifest URL.
    pub fn releases_json_url(&self) -> &'static str {
        RELEASES_JSON_URL
    }

    /// Seconds between config updates. `CONFIG_UPDATE_INTERVAL`, default 5.
    pub fn config_update_interval(&self) -> u64 {
        self.env.int_or("CONFIG_UPDATE_INTERVAL", 5)
    }

    /// Seconds between SCM commits. `SCM_UPDATE_INTERVAL`, default 5.
    pub fn scm_commit_interval(&self) -> u64 {
        self.env.int_or("SCM_UPDATE_INTERVAL", 5)
    }

    /// Scratch directory for the running server. `SERVER_DIR`, default `/tmp`.
    pub fn server_dir(&self) -> PathBuf {
        PathBuf::from(self.env.string_or("SERVER_DIR", "/tmp"))
    }
}
