use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const INDEX: &str = r#"
[packages.app]
dependencies = ["zlib", "libfoo"]

[packages.libfoo]
dependencies = ["zlib"]

[packages.zlib]

[packages.attr]
"#;

#[allow(deprecated)]
fn deptree_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("deptree").unwrap();
    cmd.env("HOME", home.path()).env_remove("DEPTREE_INDEX");
    cmd
}

fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Deptree.toml"), INDEX).unwrap();
    tmp
}

#[test]
fn test_json_compact() {
    let tmp = project();
    deptree_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["json", "--compact", "zlib", "attr"])
        .assert()
        .success()
        .stdout("{\"attr\": {},\"zlib\": {}}\n");
}

#[test]
fn test_json_uses_config_indent_by_default() {
    let tmp = project();
    deptree_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["json", "libfoo"])
        .assert()
        .success()
        .stdout("{\n  \"libfoo\": {\n    \"zlib\": {}\n  }\n}\n");
}

#[test]
fn test_json_indent_flag_overrides_config() {
    let tmp = project();
    fs::create_dir_all(tmp.path().join(".deptree")).unwrap();
    fs::write(
        tmp.path().join(".deptree").join("config.toml"),
        "[output]\nindent = \"        \"\n",
    )
    .unwrap();

    deptree_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["json", "--indent", "\t", "zlib"])
        .assert()
        .success()
        .stdout("{\n\t\"zlib\": {}\n}\n");
}

#[test]
fn test_json_explicit_index_path() {
    let tmp = TempDir::new().unwrap();
    let index = tmp.path().join("custom.toml");
    fs::write(&index, INDEX).unwrap();

    deptree_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["--index", index.to_str().unwrap(), "json", "--compact", "app"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"app": {"libfoo": {"zlib": {}},"zlib": {}}}"#));
}

#[test]
fn test_json_unknown_distribution_fails() {
    let tmp = project();
    deptree_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["json", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown distribution: missing"));
}

#[test]
fn test_json_without_index_fails() {
    let tmp = TempDir::new().unwrap();
    deptree_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["json", "app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not find Deptree.toml"));
}
