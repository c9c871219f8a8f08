#![allow(deprecated)] // TODO: migrate cargo_bin to cargo_bin_cmd!

mod common;

use assert_cmd::Command;
use common::TestEnv;
use predicates::prelude::*;
use serial_test::serial;
use std::path::Path;

const SERVICES_JSON: &str = r#"[
  {
    "metadata": {
      "name": "seyca",
      "labels": {"cloud.googleapis.com/location": "us-east1"}
    },
    "status": {
      "url": "https://seyca-xyz.a.run.app",
      "conditions": [{"type": "Ready", "status": "True"}]
    }
  },
  {
    "metadata": {"name": "tersasoft"},
    "status": {
      "url": "https://tersasoft-xyz.a.run.app",
      "conditions": [{"type": "Ready", "status": "False"}]
    }
  },
  {
    "metadata": {"name": "sandbox"},
    "status": {"conditions": []}
  }
]"#;

const REPOS_JSON: &str = r#"[
  {
    "name": "seyca_produccion",
    "url": "https://github.com/mbrt26/seyca_produccion",
    "description": "Producción",
    "updatedAt": "2025-05-20T08:30:00Z"
  },
  {
    "name": "notes",
    "url": "https://github.com/mbrt26/notes",
    "description": "",
    "updatedAt": "2024-01-01T00:00:00Z"
  }
]"#;

fn skyline(data_dir: &Path, gcloud: &Path, gh: &Path) -> Command {
    let mut cmd = Command::cargo_bin("skyline").unwrap();
    cmd.env_remove("SKYLINE_DATA_DIR")
        .env_remove("SKYLINE_TIMEOUT")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(data_dir)
        .arg("--gcloud-bin")
        .arg(gcloud)
        .arg("--gh-bin")
        .arg(gh);
    cmd
}

/// Missing CLIs still produce valid, empty snapshot files
#[test]
#[serial]
fn test_missing_tools_write_empty_snapshot() {
    let env = TestEnv::new();

    skyline(
        &env.data_dir(),
        &env.missing_tool("gcloud"),
        &env.missing_tool("gh"),
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("Found 0 services"))
    .stdout(predicate::str::contains("Found 0 repositories"))
    .stdout(predicate::str::contains("meta.json"))
    .stderr(predicate::str::contains("Cloud Run services unavailable"));

    assert_eq!(env.read("services.json"), "[]");
    assert_eq!(env.read("repos.json"), "[]");

    let meta = env.read_json("meta.json");
    assert_eq!(meta["project"], "appsindunnova");
    assert_eq!(meta["totalServices"], 0);
    assert_eq!(meta["totalRepos"], 0);
    assert_eq!(meta["healthyServices"], 0);
    assert_eq!(meta["unhealthyServices"], 0);
    assert!(meta["lastUpdate"].as_str().unwrap().ends_with('Z'));
}

/// Services and repositories are joined through the mapping table
#[cfg(unix)]
#[test]
#[serial]
fn test_refresh_with_fake_tools() {
    let env = TestEnv::new();
    let gcloud = env.fake_tool("gcloud", SERVICES_JSON, 0);
    let gh = env.fake_tool("gh", REPOS_JSON, 0);

    skyline(&env.data_dir(), &gcloud, &gh)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 services"))
        .stdout(predicate::str::contains("Found 2 repositories"));

    let services = env.read_json("services.json");
    assert_eq!(services[0]["name"], "seyca");
    assert_eq!(services[0]["status"], "True");
    assert_eq!(services[0]["region"], "us-east1");
    assert_eq!(
        services[0]["repo"],
        "https://github.com/mbrt26/seyca_produccion"
    );
    assert_eq!(services[0]["repoName"], "seyca_produccion");
    assert_eq!(services[1]["repo"], "https://github.com/mbrt26/tersaSoft");
    assert_eq!(services[2]["url"], "N/A");
    assert_eq!(services[2]["status"], "Unknown");
    assert_eq!(services[2]["region"], "us-central1");
    assert!(services[2]["repo"].is_null());
    assert!(services[2]["repoName"].is_null());

    let repos = env.read_json("repos.json");
    assert_eq!(repos[0]["cloudRunService"], "seyca-produccion");
    assert_eq!(repos[0]["description"], "Producción");
    assert!(repos[1]["cloudRunService"].is_null());

    let meta = env.read_json("meta.json");
    assert_eq!(meta["totalServices"], 3);
    assert_eq!(meta["totalRepos"], 2);
    assert_eq!(meta["healthyServices"], 1);
    assert_eq!(meta["unhealthyServices"], 2);
}

/// A broken service lister does not block the repository snapshot
#[cfg(unix)]
#[test]
#[serial]
fn test_failed_gcloud_keeps_repos() {
    let env = TestEnv::new();
    let gcloud = env.fake_tool("gcloud", "", 1);
    let gh = env.fake_tool("gh", REPOS_JSON, 0);

    skyline(&env.data_dir(), &gcloud, &gh).assert().success();

    assert_eq!(env.read("services.json"), "[]");
    assert_eq!(env.read_json("repos.json").as_array().unwrap().len(), 2);
    assert_eq!(env.read_json("meta.json")["totalRepos"], 2);
}

/// Identical tool output gives identical services and repos files
#[cfg(unix)]
#[test]
#[serial]
fn test_refresh_is_repeatable() {
    let env = TestEnv::new();
    let gcloud = env.fake_tool("gcloud", SERVICES_JSON, 0);
    let gh = env.fake_tool("gh", REPOS_JSON, 0);

    skyline(&env.data_dir(), &gcloud, &gh).assert().success();
    let services = env.read("services.json");
    let repos = env.read("repos.json");

    skyline(&env.data_dir(), &gcloud, &gh).assert().success();
    assert_eq!(env.read("services.json"), services);
    assert_eq!(env.read("repos.json"), repos);
}

/// Output directory is created with its parents
#[test]
#[serial]
fn test_creates_nested_data_dir() {
    let env = TestEnv::new();
    let nested = env.path().join("a").join("b").join("data");

    skyline(&nested, &env.missing_tool("gcloud"), &env.missing_tool("gh"))
        .assert()
        .success();

    assert!(nested.join("services.json").exists());
    assert!(nested.join("repos.json").exists());
    assert!(nested.join("meta.json").exists());
}

/// A data path that cannot be a directory fails the run
#[test]
#[serial]
fn test_unwritable_data_dir_fails() {
    let env = TestEnv::new();
    let blocker = env.path().join("data");
    std::fs::write(&blocker, "file in the way").unwrap();

    skyline(&blocker, &env.missing_tool("gcloud"), &env.missing_tool("gh"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to create"));
}
