//! Get command implementation

use anyhow::{Result, bail};
use clap::Args;
use perfconf_core::{EnvSource, ServerConfig, SetupConfig, UpdateConfig};

/// Keys accepted by `perfconf get`, kebab-case accessor names.
const KEYS: &[&str] = &[
    "pipelines",
    "agents",
    "thread-groups",
    "load-test-duration",
    "git-repository-host",
    "server-install-dir",
    "agents-install-dir",
    "include-plugins",
    "plugin-src-dir",
    "tools-dir",
    "jmeter-dir",
    "jmeter-bin",
    "tee-dir",
    "tee-path",
    "download-url",
    "go-version",
    "config-save-cadence",
    "git-root",
    "git-repos",
    "git-commit-cadence",
    "tfs-commit-cadence",
    "tfs-user",
    "tfs-pwd",
    "tfs-url",
    "materials-ratio",
    "auth",
    "host",
    "port",
    "secure-port",
    "base-url",
    "url",
    "secure-url",
    "server-environment",
    "config-update-interval",
    "scm-commit-interval",
    "server-dir",
    "releases-json-url",
];

/// Print a single resolved value
///
/// Lists print one element per line; composite values print as JSON.
/// `get go-version` resolves against the releases manifest when
/// `GO_VERSION` is unset; every other key stays offline.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Key to resolve (kebab-case accessor name)
    key: String,
}

/// Execute the get command
pub fn execute(args: GetArgs) -> Result<()> {
    let env = EnvSource::from_process();
    let work_dir = std::env::current_dir()?;

    let setup = SetupConfig::new(env.clone(), work_dir);
    let server = ServerConfig::new(env.clone());
    let updates = UpdateConfig::new(env);

    match args.key.as_str() {
        "pipelines" => print_lines(&setup.pipelines()),
        "agents" => print_lines(&setup.agents()),
        "thread-groups" => {
            for id in setup.thread_groups() {
                println!("{id}");
            }
        }
        "load-test-duration" => println!("{}", setup.load_test_duration()),
        "git-repository-host" => println!("{}", setup.git_repository_host()),
        "server-install-dir" => println!("{}", setup.server_install_dir().display()),
        "agents-install-dir" => println!("{}", setup.agents_install_dir().display()),
        "include-plugins" => println!("{}", setup.include_plugins()),
        "plugin-src-dir" => println!("{}", setup.plugin_src_dir().display()),
        "tools-dir" => println!("{}", setup.tools_dir().display()),
        "jmeter-dir" => println!("{}", setup.jmeter_dir().display()),
        "jmeter-bin" => println!("{}", setup.jmeter_bin().display()),
        "tee-dir" => println!("{}", setup.tee_dir().display()),
        "tee-path" => println!("{}", setup.tee_path().display()),
        "download-url" => println!("{}", setup.download_url()),
        "go-version" => println!("{}", setup.go_version()?),
        "config-save-cadence" => print_json(&setup.config_save_cadence())?,
        "git-root" => println!("{}", setup.git_root()),
        "git-repos" => print_lines(&setup.git_repos()),
        "git-commit-cadence" => print_json(&setup.git_commit_cadence())?,
        "tfs-commit-cadence" => print_json(&setup.tfs_commit_cadence())?,
        "tfs-user" => println!("{}", setup.tfs_user()),
        "tfs-pwd" => println!("{}", setup.tfs_pwd()?),
        "tfs-url" => println!("{}", setup.tfs_url()),
        "materials-ratio" => print_json(&setup.materials_ratio())?,
        // Unset auth prints nothing; scripts treat empty output as "no credential".
        "auth" => {
            if let Some(auth) = server.auth() {
                println!("{auth}");
            }
        }
        "host" => println!("{}", server.host()),
        "port" => println!("{}", server.port()),
        "secure-port" => println!("{}", server.secure_port()),
        "base-url" => println!("{}", server.base_url()),
        "url" => println!("{}", server.url()),
        "secure-url" => println!("{}", server.secure_url()),
        "server-environment" => {
            for (name, value) in server.environment().to_env_pairs() {
                println!("{name}={value}");
            }
        }
        "config-update-interval" => println!("{}", updates.config_update_interval()),
        "scm-commit-interval" => println!("{}", updates.scm_commit_interval()),
        "server-dir" => println!("{}", updates.server_dir().display()),
        "releases-json-url" => println!("{}", updates.releases_json_url()),
        unknown => bail!("Unknown key {unknown:?}. Valid keys: {}", KEYS.join(", ")),
    }

    Ok(())
}

fn print_lines(values: &[String]) {
    for value in values {
        println!("{value}");
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
