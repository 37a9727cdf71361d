//! Show command implementation

use anyhow::Result;
use clap::Args;
use perfconf_core::{EnvSource, ServerConfig, SetupConfig, UpdateConfig};
use serde_json::json;

/// Show every resolved configuration value
///
/// Never touches the network: the version field is reported only when
/// `GO_VERSION` is set explicitly. Use `perfconf get go-version` to resolve
/// it against the releases manifest.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Execute the show command
pub fn execute(args: ShowArgs) -> Result<()> {
    let env = EnvSource::from_process();
    let work_dir = std::env::current_dir()?;

    let setup = SetupConfig::new(env.clone(), work_dir);
    let server = ServerConfig::new(env.clone());
    let updates = UpdateConfig::new(env.clone());

    // Only an explicit override is reported; no remote lookup here.
    let go_version = match env.get("GO_VERSION") {
        Some(_) => Some(setup.go_version()?),
        None => None,
    };

    if args.json {
        let output = json!({
            "setup": {
                "pipelines": setup.pipelines(),
                "agents": setup.agents(),
                "threadGroups": setup.thread_groups(),
                "loadTestDuration": setup.load_test_duration(),
                "gitRepositoryHost": setup.git_repository_host(),
                "serverInstallDir": setup.server_install_dir(),
                "agentsInstallDir": setup.agents_install_dir(),
                "includePlugins": setup.include_plugins(),
                "pluginSrcDir": setup.plugin_src_dir(),
                "toolsDir": setup.tools_dir(),
                "jmeterDir": setup.jmeter_dir(),
                "jmeterBin": setup.jmeter_bin(),
                "teeDir": setup.tee_dir(),
                "teePath": setup.tee_path(),
                "downloadUrl": setup.download_url(),
                "goVersion": go_version.as_ref().map(|v| json!({
                    "release": v.release,
                    "build": v.build,
                })),
                "configSaveCadence": setup.config_save_cadence(),
                "gitRoot": setup.git_root(),
                "gitRepos": setup.git_repos(),
                "gitCommitCadence": setup.git_commit_cadence(),
                "tfsCommitCadence": setup.tfs_commit_cadence(),
                "tfsUser": setup.tfs_user(),
                "tfsPwdSet": setup.tfs_pwd().is_ok(),
                "tfsUrl": setup.tfs_url(),
                "materialsRatio": setup.materials_ratio(),
            },
            "server": {
                "auth": server.auth(),
                "host": server.host(),
                "port": server.port(),
                "securePort": server.secure_port(),
                "baseUrl": server.base_url(),
                "url": server.url(),
                "secureUrl": server.secure_url(),
                "environment": server.environment(),
            },
            "updates": {
                "configUpdateInterval": updates.config_update_interval(),
                "scmCommitInterval": updates.scm_commit_interval(),
                "serverDir": updates.server_dir(),
                "releasesJsonUrl": updates.releases_json_url(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Setup:");
        println!("  pipelines: {}", setup.pipelines().join(", "));
        println!("  agents: {}", setup.agents().join(", "));
        let thread_groups: Vec<String> =
            setup.thread_groups().iter().map(u64::to_string).collect();
        println!("  thread_groups: {}", thread_groups.join(", "));
        println!("  load_test_duration: {}s", setup.load_test_duration());
        println!("  git_repository_host: {}", setup.git_repository_host());
        println!("  server_install_dir: {}", setup.server_install_dir().display());
        println!("  agents_install_dir: {}", setup.agents_install_dir().display());
        println!("  include_plugins: {}", setup.include_plugins());
        println!("  plugin_src_dir: {}", setup.plugin_src_dir().display());
        println!("  tools_dir: {}", setup.tools_dir().display());
        println!("  jmeter_dir: {}", setup.jmeter_dir().display());
        println!("  jmeter_bin: {}", setup.jmeter_bin().display());
        println!("  tee_dir: {}", setup.tee_dir().display());
        println!("  tee_path: {}", setup.tee_path().display());
        println!("  download_url: {}", setup.download_url());
        match &go_version {
            Some(version) => println!("  go_version: {version}"),
            None => println!("  go_version: (resolved from releases manifest)"),
        }
        let saves = setup.config_save_cadence();
        println!("  config_save_cadence: every {}s, {} times", saves.interval, saves.times);
        println!("  git_root: {}", setup.git_root());
        println!("  git_repos: {}", setup.git_repos().join(", "));
        let commits = setup.git_commit_cadence();
        println!("  git_commit_cadence: every {}s, {} times", commits.interval, commits.times);
        let checkins = setup.tfs_commit_cadence();
        println!("  tfs_commit_cadence: every {}s, {} times", checkins.interval, checkins.times);
        println!("  tfs_user: {}", setup.tfs_user());
        let pwd_status = if setup.tfs_pwd().is_ok() { "(set)" } else { "(not set)" };
        println!("  tfs_pwd: {pwd_status}");
        println!("  tfs_url: {}", setup.tfs_url());
        let ratio = setup.materials_ratio();
        println!("  materials_ratio: git {} / tfs {}", ratio.git, ratio.tfs);
        println!();
        println!("Server:");
        match server.auth() {
            Some(auth) => println!("  auth: {auth}"),
            None => println!("  auth: (not set)"),
        }
        println!("  host: {}", server.host());
        println!("  port: {}", server.port());
        println!("  secure_port: {}", server.secure_port());
        println!("  base_url: {}", server.base_url());
        println!("  url: {}", server.url());
        println!("  secure_url: {}", server.secure_url());
        println!("  environment:");
        for (name, value) in server.environment().to_env_pairs() {
            println!("    {name}={value}");
        }
        println!();
        println!("Updates:");
        println!("  config_update_interval: {}s", updates.config_update_interval());
        println!("  scm_commit_interval: {}s", updates.scm_commit_interval());
        println!("  server_dir: {}", updates.server_dir().display());
        println!("  releases_json_url: {}", updates.releases_json_url());
    }

    Ok(())
}
