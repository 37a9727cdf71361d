//! Installation and load-shape parameters
//!
//! Everything the install scripts and the load generator need to lay a test
//! run out: how many pipelines and agents to create, where to install the
//! server and agents, which version to download, and how often the
//! generated materials should change.

use std::path::PathBuf;

use crate::env::{EnvSource, Fallback};
use crate::error::ConfigError;
use crate::releases::{self, GoVersion, RELEASES_JSON_URL};
use crate::types::{Cadence, MaterialsRatio};

/// Resolver for the installation/setup namespace.
///
/// `work_dir` stands in for the process working directory and anchors the
/// TEE command-line client paths; pass `std::env::current_dir()?` outside
/// of tests.
#[derive(Debug, Clone)]
pub struct SetupConfig {
    env: EnvSource,
    work_dir: PathBuf,
}

impl SetupConfig {
    pub fn new(env: EnvSource, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            env,
            work_dir: work_dir.into(),
        }
    }

    /// Pipeline names, `gocd.perf1` through `gocd.perfN`.
    pub fn pipelines(&self) -> Vec<String> {
        (1..=self.number_of_pipelines())
            .map(|i| format!("gocd.perf{i}"))
            .collect()
    }

    /// Agent names, `agent-1` through `agent-N`. `NO_OF_AGENTS`, default 10.
    pub fn agents(&self) -> Vec<String> {
        (1..=self.env.int_or("NO_OF_AGENTS", 10u64))
            .map(|i| format!("agent-{i}"))
            .collect()
    }

    /// JMeter thread-group ids, `1..=N`. `NO_OF_THREAD_GROUPS`, default 10.
    pub fn thread_groups(&self) -> Vec<u64> {
        (1..=self.env.int_or("NO_OF_THREAD_GROUPS", 10u64)).collect()
    }

    /// Load test duration in seconds. `LOAD_TEST_DURATION`, default 600.
    pub fn load_test_duration(&self) -> u64 {
        self.env.int_or("LOAD_TEST_DURATION", 600)
    }

    /// Host serving the generated git repositories.
    /// `GIT_REPOSITORY_HOST`, default `git://localhost`.
    pub fn git_repository_host(&self) -> String {
        self.env.string_or("GIT_REPOSITORY_HOST", "git://localhost")
    }

    /// Server install target: `SERVER_INSTALL_DIR` (default `.`) joined
    /// with `go-server`.
    pub fn server_install_dir(&self) -> PathBuf {
        PathBuf::from(self.env.string_or("SERVER_INSTALL_DIR", ".")).join("go-server")
    }

    /// Agents install target: `AGENTS_INSTALL_DIR` (default `.`) joined
    /// with `go-agents`.
    pub fn agents_install_dir(&self) -> PathBuf {
        PathBuf::from(self.env.string_or("AGENTS_INSTALL_DIR", ".")).join("go-agents")
    }

    /// Whether plugins get built and installed alongside the server.
    /// `INCLUDE_PLUGINS`, set only when exactly `Y`.
    pub fn include_plugins(&self) -> bool {
        self.env.flag("INCLUDE_PLUGINS")
    }

    /// Plugin source checkout. `PLUGIN_SRC_DIR`, default empty.
    pub fn plugin_src_dir(&self) -> PathBuf {
        PathBuf::from(self.env.string_or("PLUGIN_SRC_DIR", ""))
    }

    /// Tooling root. `TOOLS_DIR`, default `./tools`.
    pub fn tools_dir(&self) -> PathBuf {
        PathBuf::from(self.env.string_or("TOOLS_DIR", "./tools"))
    }

    /// JMeter installation under the tools root.
    pub fn jmeter_dir(&self) -> PathBuf {
        self.tools_dir().join("apache-jmeter-3.0")
    }

    /// JMeter launcher directory.
    pub fn jmeter_bin(&self) -> PathBuf {
        self.jmeter_dir().join("bin/")
    }

    /// TEE command-line client directory, anchored at the work dir.
    pub fn tee_dir(&self) -> PathBuf {
        self.work_dir.join("tools").join("TEE-CLC-14.0.3")
    }

    /// The `tf` executable inside [`SetupConfig::tee_dir`].
    pub fn tee_path(&self) -> PathBuf {
        self.tee_dir().join("tf")
    }

    /// Download channel for server and agent packages.
    /// `DOWNLOAD_URL`, default the experimental channel.
    pub fn download_url(&self) -> String {
        self.env
            .string_or("DOWNLOAD_URL", "https://download.gocd.io/experimental")
    }

    /// Version to install, split into release and build parts.
    ///
    /// `GO_VERSION` when set; otherwise the greatest version listed by the
    /// releases manifest (one blocking GET, see [`releases::latest_version`]).
    /// Either way the result must carry a `-` separator.
    pub fn go_version(&self) -> Result<GoVersion, ConfigError> {
        let fetch = || releases::latest_version(RELEASES_JSON_URL);
        let raw = self.env.resolve("GO_VERSION", Fallback::Computed(&fetch))?;
        GoVersion::parse(&raw)
    }

    /// Full config-save cycle: `CONFIG_SAVE_INTERVAL` (default 20) seconds
    /// between saves, `NUMBER_OF_CONFIG_SAVES` (default 30) saves.
    pub fn config_save_cadence(&self) -> Cadence {
        Cadence {
            interval: self.env.int_or("CONFIG_SAVE_INTERVAL", 20),
            times: self.env.int_or("NUMBER_OF_CONFIG_SAVES", 30),
        }
    }

    /// Directory the generated git repositories live under.
    /// `GIT_ROOT`, default `gitrepos`.
    pub fn git_root(&self) -> String {
        self.env.string_or("GIT_ROOT", "gitrepos")
    }

    /// One repository path per pipeline:
    /// `<git_root>/git-repo-<pipeline>`.
    pub fn git_repos(&self) -> Vec<String> {
        let root = self.git_root();
        self.pipelines()
            .iter()
            .map(|pipeline| format!("{root}/git-repo-{pipeline}"))
            .collect()
    }

    /// Git commit cycle: `GIT_COMMIT_INTERVAL` (default 5) seconds,
    /// `NUMBER_OF_COMMITS` (default 30) commits.
    pub fn git_commit_cadence(&self) -> Cadence {
        Cadence {
            interval: self.env.int_or("GIT_COMMIT_INTERVAL", 5),
            times: self.env.int_or("NUMBER_OF_COMMITS", 30),
        }
    }

    /// TFS check-in cycle: `TFS_COMMIT_INTERVAL` (default 60) seconds,
    /// `NUMBER_OF_TFS_COMMITS` (default 2) check-ins.
    pub fn tfs_commit_cadence(&self) -> Cadence {
        Cadence {
            interval: self.env.int_or("TFS_COMMIT_INTERVAL", 60),
            times: self.env.int_or("NUMBER_OF_TFS_COMMITS", 2),
        }
    }

    /// TFS account. `TFS_USER`, default `go.tfs.user@gmail.com`.
    pub fn tfs_user(&self) -> String {
        self.env.string_or("TFS_USER", "go.tfs.user@gmail.com")
    }

    /// TFS password. `TFS_PWD`, required — there is no safe default for a
    /// credential.
    pub fn tfs_pwd(&self) -> Result<String, ConfigError> {
        self.env.required("TFS_PWD")
    }

    /// TFS collection URL.
    /// `TFS_URL`, default `https://go-tfs-user.visualstudio.com`.
    pub fn tfs_url(&self) -> String {
        self.env
            .string_or("TFS_URL", "https://go-tfs-user.visualstudio.com")
    }

    /// Git/TFS material weighting. `GIT_MATERIAL_RATIO` (default 90) and
    /// `TFS_MATERIAL_RATIO` (default 10), independently resolved.
    pub fn materials_ratio(&self) -> MaterialsRatio {
        MaterialsRatio {
            git: self.env.int_or("GIT_MATERIAL_RATIO", 90),
            tfs: self.env.int_or("TFS_MATERIAL_RATIO", 10),
        }
    }

    fn number_of_pipelines(&self) -> u64 {
        self.env.int_or("NO_OF_PIPELINES", 10)
    }
}
