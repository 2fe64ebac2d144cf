use std::path::Path;

use deptree_core::config::GlobalConfig;
use deptree_core::{Distribution, Distributions};
use deptree_ops::ops_check::check;
use deptree_ops::ops_json::{json, JsonOptions};
use deptree_ops::ops_tree::{tree, TreeOptions};
use deptree_ops::ops_why::{why, WhyOptions};
use deptree_ops::{index_resolver, locate_index};
use deptree_resolver::index::PackageIndex;
use deptree_resolver::resolver::IndexResolver;
use deptree_resolver::Resolver;
use deptree_util::errors::DeptreeError;
use tempfile::TempDir;

const INDEX: &str = r#"
[packages.app]
dependencies = ["zlib", "libfoo"]

[packages.libfoo]
dependencies = ["zlib"]

[packages.zlib]

[packages.attr]
"#;

fn resolver() -> IndexResolver {
    IndexResolver::new(PackageIndex::from_toml_str(INDEX).unwrap())
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

struct FailingResolver;

impl Resolver for FailingResolver {
    fn resolve(&self, _names: &[String]) -> Result<Distributions, DeptreeError> {
        Err(DeptreeError::UnknownDistribution {
            name: "nope".to_string(),
        })
    }
}

#[test]
fn json_compact() {
    let opts = JsonOptions {
        names: names(&["zlib", "attr"]),
        indent: String::new(),
    };
    assert_eq!(json(&resolver(), &opts).unwrap(), r#"{"attr": {},"zlib": {}}"#);
}

#[test]
fn json_pretty() {
    let opts = JsonOptions {
        names: names(&["libfoo"]),
        indent: "  ".to_string(),
    };
    assert_eq!(
        json(&resolver(), &opts).unwrap(),
        "{\n  \"libfoo\": {\n    \"zlib\": {}\n  }\n}"
    );
}

#[test]
fn json_propagates_resolver_error() {
    let opts = JsonOptions {
        names: names(&["x"]),
        indent: String::new(),
    };
    let err = json(&FailingResolver, &opts).unwrap_err();
    assert_eq!(err.to_string(), "Unknown distribution: nope");
}

#[test]
fn tree_output() {
    let opts = TreeOptions {
        names: names(&["app"]),
        depth: None,
    };
    assert_eq!(
        tree(&resolver(), &opts).unwrap(),
        "app\n├── libfoo\n│   └── zlib\n└── zlib\n"
    );
}

#[test]
fn tree_with_no_roots() {
    let opts = TreeOptions::default();
    assert_eq!(tree(&resolver(), &opts).unwrap(), "No distributions.\n");
}

#[test]
fn why_shows_path() {
    let opts = WhyOptions {
        names: names(&["app"]),
        target: "zlib".to_string(),
    };
    assert_eq!(
        why(&resolver(), &opts).unwrap(),
        "Path to zlib:\napp\n  libfoo\n    zlib\n"
    );
}

#[test]
fn why_not_found() {
    let opts = WhyOptions {
        names: names(&["attr"]),
        target: "zlib".to_string(),
    };
    assert!(why(&resolver(), &opts)
        .unwrap()
        .contains("'zlib' not found"));
}

#[test]
fn why_works_with_any_resolver() {
    struct Fixed;
    impl Resolver for Fixed {
        fn resolve(&self, _names: &[String]) -> Result<Distributions, DeptreeError> {
            Ok(std::iter::once(
                Distribution::new("root").with_dependencies([Distribution::new("dep")]),
            )
            .collect())
        }
    }
    let opts = WhyOptions {
        names: names(&["root"]),
        target: "dep".to_string(),
    };
    assert_eq!(why(&Fixed, &opts).unwrap(), "Path to dep:\nroot\n  dep\n");
}

#[test]
fn check_accepts_clean_index() {
    let index = PackageIndex::from_toml_str(INDEX).unwrap();
    assert_eq!(check(&index).unwrap(), "Index OK: 4 package(s)");
}

#[test]
fn check_reports_all_problems() {
    let index = PackageIndex::from_toml_str(
        r#"
[packages.a]
dependencies = ["b", "ghost"]

[packages.b]
dependencies = ["a"]
"#,
    )
    .unwrap();
    let msg = check(&index).unwrap_err().to_string();
    assert!(msg.contains("a depends on undefined package ghost"), "got: {msg}");
    assert!(msg.contains("cycle between a, b"), "got: {msg}");
}

#[test]
fn explicit_index_path_wins() {
    let cfg = GlobalConfig::default();
    let path = locate_index(Some(Path::new("/tmp/custom.toml")), &cfg, Path::new("/")).unwrap();
    assert_eq!(path, Path::new("/tmp/custom.toml"));
}

#[test]
fn config_index_path_used_before_discovery() {
    let mut cfg = GlobalConfig::default();
    cfg.index.path = Some("/srv/Deptree.toml".into());
    let path = locate_index(None, &cfg, Path::new("/")).unwrap();
    assert_eq!(path, Path::new("/srv/Deptree.toml"));
}

#[test]
fn index_discovered_from_parent_directory() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("Deptree.toml"), INDEX).unwrap();
    let nested = tmp.path().join("sub");
    std::fs::create_dir_all(&nested).unwrap();

    let resolver = index_resolver(None, &GlobalConfig::default(), &nested).unwrap();
    assert_eq!(resolver.index().len(), 4);
}

#[test]
fn missing_index_is_error() {
    let tmp = TempDir::new().unwrap();
    let err = locate_index(None, &GlobalConfig::default(), tmp.path()).unwrap_err();
    assert!(err.to_string().contains("Could not find Deptree.toml"));
}
