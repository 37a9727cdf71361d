//! Integration tests for the show command

use assert_cmd::Command;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;

/// Every variable the resolvers recognize, scrubbed before each test.
const RECOGNIZED_VARS: &[&str] = &[
    "NO_OF_PIPELINES",
    "NO_OF_AGENTS",
    "NO_OF_THREAD_GROUPS",
    "LOAD_TEST_DURATION",
    "GIT_REPOSITORY_HOST",
    "SERVER_INSTALL_DIR",
    "AGENTS_INSTALL_DIR",
    "INCLUDE_PLUGINS",
    "PLUGIN_SRC_DIR",
    "TOOLS_DIR",
    "DOWNLOAD_URL",
    "GO_VERSION",
    "CONFIG_SAVE_INTERVAL",
    "NUMBER_OF_CONFIG_SAVES",
    "GIT_ROOT",
    "GIT_COMMIT_INTERVAL",
    "NUMBER_OF_COMMITS",
    "TFS_COMMIT_INTERVAL",
    "NUMBER_OF_TFS_COMMITS",
    "TFS_USER",
    "TFS_PWD",
    "TFS_URL",
    "GIT_MATERIAL_RATIO",
    "TFS_MATERIAL_RATIO",
    "AUTH",
    "GOCD_HOST",
    "GO_SERVER_PORT",
    "GO_SERVER_SSL_PORT",
    "PERF_SERVER_SSH_URL",
    "GO_SERVER_SYSTEM_PROPERTIES",
    "SERVER_MEM",
    "SERVER_MAX_MEM",
    "CONFIG_UPDATE_INTERVAL",
    "SCM_UPDATE_INTERVAL",
    "SERVER_DIR",
];

fn perfconf() -> Command {
    let mut cmd = Command::cargo_bin("perfconf").unwrap();
    for var in RECOGNIZED_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_show_text_defaults() {
    perfconf()
        .arg("show")
        .assert()
        .success()
        .stdout(contains("base_url: http://127.0.0.1:8153"))
        .stdout(contains("url: http://127.0.0.1:8153/go"))
        .stdout(contains("tfs_pwd: (not set)"))
        .stdout(contains("materials_ratio: git 90 / tfs 10"))
        .stdout(contains("server_dir: /tmp"))
        .stdout(contains("GO_SERVER_PORT=8153"));
}

#[test]
fn test_show_never_leaks_the_tfs_password() {
    perfconf()
        .env("TFS_PWD", "s3cret")
        .arg("show")
        .assert()
        .success()
        .stdout(contains("tfs_pwd: (set)"))
        .stdout(contains("s3cret").not());
}

#[test]
fn test_show_json_defaults() {
    let assert = perfconf().args(["show", "--json"]).assert().success();
    let output: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(output["setup"]["pipelines"].as_array().unwrap().len(), 10);
    assert_eq!(output["setup"]["pipelines"][0], "gocd.perf1");
    assert_eq!(output["setup"]["loadTestDuration"], 600);
    assert_eq!(output["setup"]["goVersion"], serde_json::Value::Null);
    assert_eq!(output["setup"]["materialsRatio"]["git"], 90);
    assert_eq!(output["server"]["baseUrl"], "http://127.0.0.1:8153");
    assert_eq!(output["server"]["environment"]["max_mem"], "8g");
    assert_eq!(output["updates"]["serverDir"], "/tmp");
    assert_eq!(output["updates"]["configUpdateInterval"], 5);
}

#[test]
fn test_show_json_reports_version_override_without_network() {
    let assert = perfconf()
        .env("GO_VERSION", "16.2.1-4444")
        .args(["show", "--json"])
        .assert()
        .success();
    let output: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(output["setup"]["goVersion"]["release"], "16.2.1");
    assert_eq!(output["setup"]["goVersion"]["build"], "4444");
}

#[test]
fn test_show_fails_on_malformed_version_override() {
    perfconf()
        .env("GO_VERSION", "bad")
        .arg("show")
        .assert()
        .failure()
        .stderr(contains("Wrong version format"));
}
