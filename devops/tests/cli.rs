// End-to-end tests for the snow-devops binary.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MARKER: &str = "snowflake.yml";

/// Binary with an isolated home so no user configuration leaks in.
fn snow_devops(home: &Path) -> Result<Command> {
    let mut cmd = Command::cargo_bin("snow-devops")?;
    cmd.env("HOME", home)
        .env_remove("SNOW_DEVOPS_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("LOG_LEVEL")
        .env_remove("LOG_FORMAT")
        .env_remove("LOG_OUTPUT")
        .env_remove("LOG_FILE_PATH");
    Ok(cmd)
}

fn add_project(root: &Path, relative: &str) -> Result<()> {
    let dir = root.join(relative);
    fs::create_dir_all(&dir)?;
    fs::write(dir.join(MARKER), "definition_version: 2\n")?;
    Ok(())
}

#[test]
fn test_greet_default_name() -> Result<()> {
    let home = TempDir::new()?;
    snow_devops(home.path())?
        .arg("greet")
        .assert()
        .success()
        .stdout("Hello, Jane!\n");
    Ok(())
}

#[test]
fn test_greet_custom_name() -> Result<()> {
    let home = TempDir::new()?;
    snow_devops(home.path())?
        .args(["greet", "-n", "Ada"])
        .assert()
        .success()
        .stdout("Hello, Ada!\n");
    snow_devops(home.path())?
        .args(["greet", "--name", "Grace"])
        .assert()
        .success()
        .stdout("Hello, Grace!\n");
    Ok(())
}

#[test]
fn test_goodbye() -> Result<()> {
    let home = TempDir::new()?;
    snow_devops(home.path())?
        .args(["goodbye", "--name", "Bob"])
        .assert()
        .success()
        .stdout("Goodbye, Bob! 👋\n");
    Ok(())
}

#[test]
fn test_greet_json_output() -> Result<()> {
    let home = TempDir::new()?;
    let output = snow_devops(home.path())?
        .args(["greet", "--format", "json"])
        .output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json, serde_json::json!({"message": "Hello, Jane!"}));
    Ok(())
}

#[test]
fn test_list_projects_json() -> Result<()> {
    let home = TempDir::new()?;
    let root = TempDir::new()?;
    add_project(root.path(), "proj1")?;
    add_project(root.path(), "grp/proj2")?;

    let output = snow_devops(home.path())?
        .args(["--format", "json", "list-projects", "--root-folder"])
        .arg(root.path())
        .output()?;
    assert!(output.status.success(), "{output:?}");

    let grp_proj2 = Path::new("grp").join("proj2").display().to_string();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        json,
        serde_json::json!([
            {"name": "proj2", "path": grp_proj2},
            {"name": "proj1", "path": "proj1"},
        ])
    );
    Ok(())
}

#[test]
fn test_list_projects_table() -> Result<()> {
    let home = TempDir::new()?;
    let root = TempDir::new()?;
    add_project(root.path(), "analytics")?;
    add_project(root.path(), "pipelines/ingest")?;

    snow_devops(home.path())?
        .args(["list-projects", "-r"])
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("name"))
        .stdout(predicate::str::contains("analytics | analytics"))
        .stdout(predicate::str::contains(format!(
            "ingest    | {}",
            Path::new("pipelines").join("ingest").display()
        )));
    Ok(())
}

#[test]
fn test_list_projects_empty() -> Result<()> {
    let home = TempDir::new()?;
    let root = TempDir::new()?;

    snow_devops(home.path())?
        .args(["list-projects", "-r"])
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No Snowflake projects found"));

    snow_devops(home.path())?
        .args(["list-projects", "-f", "json", "-r"])
        .arg(root.path())
        .assert()
        .success()
        .stdout("[]\n");
    Ok(())
}

#[test]
fn test_list_projects_missing_root() -> Result<()> {
    let home = TempDir::new()?;
    let root = TempDir::new()?;

    snow_devops(home.path())?
        .args(["list-projects", "-r"])
        .arg(root.path().join("nope"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("does not exist"));
    Ok(())
}

#[test]
fn test_list_projects_root_is_file() -> Result<()> {
    let home = TempDir::new()?;
    let root = TempDir::new()?;
    let file = root.path().join(MARKER);
    fs::write(&file, "")?;

    snow_devops(home.path())?
        .args(["list-projects", "-r"])
        .arg(&file)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("is a file"));
    Ok(())
}

#[test]
fn test_list_projects_requires_root_folder() -> Result<()> {
    let home = TempDir::new()?;
    snow_devops(home.path())?
        .arg("list-projects")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--root-folder"));
    Ok(())
}

#[test]
fn test_config_file_sets_default_format() -> Result<()> {
    let home = TempDir::new()?;
    let config_dir = home.path().join(".snowflake");
    fs::create_dir_all(&config_dir)?;
    fs::write(config_dir.join("devops.yaml"), "output:\n  format: json\n")?;

    let output = snow_devops(home.path())?.arg("greet").output()?;
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["message"], "Hello, Jane!");

    // The flag still wins over the configured default.
    snow_devops(home.path())?
        .args(["greet", "--format", "table"])
        .assert()
        .success()
        .stdout("Hello, Jane!\n");
    Ok(())
}

#[test]
fn test_missing_explicit_config_fails() -> Result<()> {
    let home = TempDir::new()?;
    snow_devops(home.path())?
        .args(["--config"])
        .arg(home.path().join("absent.yaml"))
        .arg("greet")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("💡"));
    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let home = TempDir::new()?;
    let config = home.path().join("broken.yaml");
    fs::write(&config, "output: [json\n")?;

    snow_devops(home.path())?
        .arg("greet")
        .env("SNOW_DEVOPS_CONFIG", &config)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration file"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_follow_symlinks_flag() -> Result<()> {
    use std::os::unix::fs::symlink;

    let home = TempDir::new()?;
    let root = TempDir::new()?;
    add_project(root.path(), "real/app")?;
    symlink(root.path().join("real"), root.path().join("linked"))?;

    let default_run = snow_devops(home.path())?
        .args(["-f", "json", "list-projects", "-r"])
        .arg(root.path())
        .output()?;
    let json: serde_json::Value = serde_json::from_slice(&default_run.stdout)?;
    assert_eq!(json.as_array().map(Vec::len), Some(1));

    let followed = snow_devops(home.path())?
        .args(["-f", "json", "list-projects", "--follow-symlinks", "-r"])
        .arg(root.path())
        .output()?;
    let json: serde_json::Value = serde_json::from_slice(&followed.stdout)?;
    assert_eq!(
        json,
        serde_json::json!([
            {"name": "app", "path": "linked/app"},
            {"name": "app", "path": "real/app"},
        ])
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_follow_symlinks_flag_overrides_config() -> Result<()> {
    use std::os::unix::fs::symlink;

    let home = TempDir::new()?;
    let config_dir = home.path().join(".snowflake");
    fs::create_dir_all(&config_dir)?;
    fs::write(
        config_dir.join("devops.yaml"),
        "projects:\n  follow_symlinks: true\n",
    )?;

    let root = TempDir::new()?;
    add_project(root.path(), "real/app")?;
    symlink(root.path().join("real"), root.path().join("linked"))?;

    let configured = snow_devops(home.path())?
        .args(["-f", "json", "list-projects", "-r"])
        .arg(root.path())
        .output()?;
    let json: serde_json::Value = serde_json::from_slice(&configured.stdout)?;
    assert_eq!(json.as_array().map(Vec::len), Some(2));

    let disabled = snow_devops(home.path())?
        .args(["-f", "json", "list-projects", "--follow-symlinks=false", "-r"])
        .arg(root.path())
        .output()?;
    assert!(disabled.status.success(), "{disabled:?}");
    let json: serde_json::Value = serde_json::from_slice(&disabled.stdout)?;
    assert_eq!(
        json,
        serde_json::json!([{"name": "app", "path": "real/app"}])
    );
    Ok(())
}

#[test]
fn test_debug_logs_go_to_stderr() -> Result<()> {
    let home = TempDir::new()?;
    let root = TempDir::new()?;
    add_project(root.path(), "proj")?;

    snow_devops(home.path())?
        .args(["--debug", "-f", "json", "list-projects", "-r"])
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stderr(predicate::str::contains("found project"));
    Ok(())
}
