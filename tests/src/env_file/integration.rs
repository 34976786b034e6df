use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use stroom_env_common::error::{FileError, InventoryError, UpdateError};
use stroom_env_common::inventory::{Inventory, InventoryClient};
use stroom_env_core::editor::FsLineEditor;
use stroom_env_core::updater::EnvFileUpdater;
use tempfile::TempDir;

/// Inventory with a single service host.
struct SingleHost(String);

impl InventoryClient for SingleHost {
    fn get_inventory(&self) -> Result<Inventory, InventoryError> {
        let raw = json!({ "stroom_services": { "hosts": [self.0] } });
        Inventory::from_json(&raw.to_string())
    }
}

struct Stack {
    _tmp: TempDir,
    root: PathBuf,
}

impl Stack {
    fn with_env(content: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("stroom_core_test");
        let path = EnvFileUpdater::resolve_target_path(&root);
        fs::create_dir_all(path.parent().unwrap()).expect("create config dir");
        fs::write(&path, content).expect("write env file");
        Self { _tmp: tmp, root }
    }

    fn env_content(&self) -> String {
        fs::read_to_string(EnvFileUpdater::resolve_target_path(&self.root)).expect("read env file")
    }

    fn update(&self, fqdn: &str) -> Result<usize, UpdateError> {
        updater(fqdn).run(&self.root).map(|report| report.removed)
    }
}

fn updater(fqdn: &str) -> EnvFileUpdater {
    EnvFileUpdater::new(
        Box::new(SingleHost(fqdn.to_string())),
        Box::new(FsLineEditor),
        "stroom_services",
    )
}

#[test]
fn scenario_from_a_deployed_stack() {
    let stack = Stack::with_env("export FOO=bar\nexport HOST_IP=old.example.com\nexport BAZ=qux\n");

    let removed = stack.update("node1.cluster.local").unwrap();

    assert_eq!(removed, 1);
    assert_eq!(
        stack.env_content(),
        "export HOST_IP=node1.cluster.local\nexport FOO=bar\nexport BAZ=qux\n"
    );
}

#[test]
fn prior_content_is_preserved_in_order() {
    let contents = [
        "",
        "export FOO=bar\n",
        "# managed by stroom\n\nexport A=1\nexport B=\"two words\"\n",
        "export STROOM_HOST=node1\r\nexport HOST_IP_V6=::1\r\n",
        "export LAST=no-trailing-newline",
        "    export HOST_IP=indented-is-not-a-declaration\n",
    ];

    for content in contents {
        let stack = Stack::with_env(content);
        stack.update("node1.cluster.local").unwrap();
        assert_eq!(
            stack.env_content(),
            format!("export HOST_IP=node1.cluster.local\n{content}"),
            "content: {content:?}"
        );
    }
}

#[test]
fn existing_line_is_replaced_not_duplicated() {
    let stack = Stack::with_env("export A=1\nexport B=2\nexport HOST_IP=old.example.com\n");

    stack.update("node2.cluster.local").unwrap();

    let content = stack.env_content();
    let declarations: Vec<&str> = content
        .lines()
        .filter(|line| line.starts_with("export HOST_IP="))
        .collect();
    assert_eq!(declarations, vec!["export HOST_IP=node2.cluster.local"]);
    assert_eq!(content.lines().next(), Some("export HOST_IP=node2.cluster.local"));
}

#[test]
fn stale_lines_collapse_to_one() {
    let stack = Stack::with_env(
        "export HOST_IP=a\nexport FOO=bar\nexport HOST_IP=b\nexport HOST_IP=c\nexport BAZ=qux\n",
    );

    let removed = stack.update("node1.cluster.local").unwrap();

    assert_eq!(removed, 3);
    assert_eq!(
        stack.env_content(),
        "export HOST_IP=node1.cluster.local\nexport FOO=bar\nexport BAZ=qux\n"
    );
}

#[test]
fn repeated_runs_are_idempotent() {
    let stack = Stack::with_env("export FOO=bar\nexport HOST_IP=old.example.com\n");

    stack.update("node1.cluster.local").unwrap();
    let first = stack.env_content();
    stack.update("node1.cluster.local").unwrap();

    assert_eq!(stack.env_content(), first);
}

#[test]
fn new_fqdn_replaces_previous_run() {
    let stack = Stack::with_env("export FOO=bar\n");

    stack.update("node1.cluster.local").unwrap();
    stack.update("node2.cluster.local").unwrap();

    assert_eq!(
        stack.env_content(),
        "export HOST_IP=node2.cluster.local\nexport FOO=bar\n"
    );
}

#[test]
fn fqdn_is_written_verbatim() {
    let stack = Stack::with_env("");

    stack.update("node 1;$(whoami)").unwrap();

    assert_eq!(stack.env_content(), "export HOST_IP=node 1;$(whoami)\n");
}

#[test]
fn missing_stack_is_a_not_found_error() {
    let tmp = TempDir::new().unwrap();
    let root: &Path = tmp.path();

    let err = updater("node1.cluster.local").run(&root.join("missing")).unwrap_err();

    assert!(matches!(err, UpdateError::File(FileError::NotFound { .. })));
    assert!(!EnvFileUpdater::resolve_target_path(&root.join("missing")).exists());
}
