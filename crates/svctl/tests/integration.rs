use std::collections::BTreeSet;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

use svctl::{Controller, Executor, Invocation, Layout, ServiceError};

static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

fn temp_dir(name: &str) -> PathBuf {
	let n = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
	let dir = std::env::temp_dir().join(format!("svctl-test-{}-{}-{}", std::process::id(), n, name));
	let _ = std::fs::remove_dir_all(&dir);
	std::fs::create_dir_all(&dir).unwrap();
	dir
}

/// A fake `sv` that logs its argv and exits with whatever the script body says.
fn write_sv(dir: &Path, body: &str) -> PathBuf {
	let path = dir.join("sv");
	let script = format!("#!/bin/sh\necho \"$@\" >> \"{}\"\n{}\n", dir.join("sv.log").display(), body);
	std::fs::write(&path, script).unwrap();
	std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
	path
}

fn sv_calls(dir: &Path) -> Vec<String> {
	std::fs::read_to_string(dir.join("sv.log"))
		.unwrap_or_default()
		.lines()
		.map(|l| l.to_string())
		.collect()
}

struct Tree {
	root: PathBuf,
	layout: Layout,
}

impl Tree {
	fn new(name: &str, services: &[&str], sv_body: &str) -> Self {
		let root = temp_dir(name);
		let services_dir = root.join("etc-sv");
		let enabled_dir = root.join("var-service");
		std::fs::create_dir_all(&services_dir).unwrap();
		std::fs::create_dir_all(&enabled_dir).unwrap();
		for svc in services {
			std::fs::create_dir_all(services_dir.join(svc)).unwrap();
		}
		let sv_bin = write_sv(&root, sv_body);
		Self {
			root,
			layout: Layout {
				sv_bin,
				services_dir,
				enabled_dir,
			},
		}
	}

	fn controller(&self, debug: bool) -> Controller {
		Controller::new(self.layout.clone(), Executor::new(debug))
	}
}

impl Drop for Tree {
	fn drop(&mut self) {
		let _ = std::fs::remove_dir_all(&self.root);
	}
}

fn set(names: Vec<String>) -> BTreeSet<String> {
	names.into_iter().collect()
}

fn names(raw: &[&str]) -> BTreeSet<String> {
	raw.iter().map(|s| s.to_string()).collect()
}

// --- Layout ---

#[test]
fn layout_defaults() {
	let layout = Layout::default();
	assert_eq!(layout.sv_bin, PathBuf::from("/usr/bin/sv"));
	assert_eq!(layout.services_dir, PathBuf::from("/etc/sv"));
	assert_eq!(layout.enabled_dir, PathBuf::from("/var/service"));
}

#[test]
fn tree_keeps_sv_binary_apart_from_service_dirs() {
	let tree = Tree::new("tree-shape", &["alpha"], "exit 0");
	assert!(tree.layout.sv_bin.is_file());
	assert!(tree.layout.services_dir.is_dir());
	assert!(tree.layout.enabled_dir.is_dir());
	assert_ne!(tree.layout.sv_bin, tree.layout.services_dir);
	assert_ne!(tree.layout.sv_bin, tree.layout.enabled_dir);
	assert!(tree.controller(false).service("alpha").is_running());
	assert_eq!(sv_calls(&tree.root), vec!["status alpha"]);
}

// --- Executor ---

#[test]
fn executor_launch_failure_is_exit_one() {
	let dir = temp_dir("launch-fail");
	let outcome = Executor::new(true).run(Invocation::new(dir.join("missing-binary")).arg("status"));
	assert_eq!(outcome.code, 1);
	assert_eq!(outcome.trace.len(), 1);
	assert!(outcome.trace[0].starts_with("failed to start command"), "trace: {:?}", outcome.trace);

	let outcome = Executor::new(false).run(Invocation::new(dir.join("missing-binary")));
	assert_eq!(outcome.code, 1);
	assert!(outcome.trace.is_empty());
	let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn executor_nonzero_exit_recorded_in_debug() {
	let outcome = Executor::new(true).run(Invocation::new("sh").args(["-c", "exit 3"]));
	assert_eq!(outcome.code, 3);
	assert!(!outcome.success());
	assert!(outcome.trace[0].contains("non-zero exit: 3"));
}

#[test]
fn executor_explicit_redirect_is_honored() {
	let dir = temp_dir("redirect");
	let out = std::fs::File::create(dir.join("out")).unwrap();
	let outcome = Executor::new(true).run(Invocation::new("sh").args(["-c", "echo captured"]).stdout(out.into()));
	assert_eq!(outcome.code, 0);
	assert_eq!(std::fs::read_to_string(dir.join("out")).unwrap(), "captured\n");
	let _ = std::fs::remove_dir_all(&dir);
}

// --- State queries ---

#[test]
fn exists_and_enabled_reflect_filesystem() {
	let tree = Tree::new("exists", &["alpha"], "exit 0");
	let ctl = tree.controller(false);
	assert!(ctl.service("alpha").exists());
	assert!(!ctl.service("alpha").is_enabled());
	assert!(!ctl.service("beta").exists());
}

#[test]
fn running_follows_sv_status_exit() {
	let tree = Tree::new("running", &["foo", "bar"], "[ \"$2\" = foo ] && exit 2\nexit 0");
	let ctl = tree.controller(false);
	assert!(!ctl.service("foo").is_running());
	assert!(ctl.service("bar").is_running());
	assert_eq!(sv_calls(&tree.root), vec!["status foo", "status bar"]);
}

#[test]
fn running_false_when_sv_missing() {
	let mut tree = Tree::new("sv-missing", &["foo"], "exit 0");
	tree.layout.sv_bin = tree.root.join("nope");
	assert!(!tree.controller(true).service("foo").is_running());
}

#[test]
fn start_and_stop_invoke_sv() {
	let tree = Tree::new("start-stop", &["foo"], "[ \"$1\" = stop ] && exit 1\nexit 0");
	let ctl = tree.controller(false);
	assert!(ctl.service("foo").start());
	assert!(!ctl.service("foo").stop());
	assert_eq!(sv_calls(&tree.root), vec!["start foo", "stop foo"]);
}

// --- Mutators ---

#[test]
fn enable_then_is_enabled() {
	let tree = Tree::new("enable", &["alpha"], "exit 0");
	let ctl = tree.controller(false);
	let alpha = ctl.service("alpha");
	alpha.enable().unwrap();
	assert!(alpha.is_enabled());
	let link = tree.layout.enabled_dir.join("alpha");
	assert_eq!(std::fs::read_link(&link).unwrap(), tree.layout.services_dir.join("alpha"));
}

#[test]
fn enable_twice_fails_and_keeps_link() {
	let tree = Tree::new("enable-twice", &["alpha"], "exit 0");
	let ctl = tree.controller(false);
	ctl.service("alpha").enable().unwrap();
	let before = std::fs::read_link(tree.layout.enabled_dir.join("alpha")).unwrap();

	let err = ctl.service("alpha").enable().unwrap_err();
	assert!(matches!(err, ServiceError::AlreadyEnabled(ref n) if n == "alpha"));
	assert_eq!(std::fs::read_link(tree.layout.enabled_dir.join("alpha")).unwrap(), before);
}

#[test]
fn enable_over_dangling_entry_is_io_error() {
	let tree = Tree::new("enable-dangling", &["alpha"], "exit 0");
	std::os::unix::fs::symlink(tree.root.join("gone"), tree.layout.enabled_dir.join("alpha")).unwrap();
	let err = tree.controller(false).service("alpha").enable().unwrap_err();
	assert!(matches!(err, ServiceError::Io { .. }), "got {}", err);
}

#[test]
fn enable_missing_service_fails_fast() {
	let tree = Tree::new("enable-missing", &[], "exit 0");
	let err = tree.controller(false).service("ghost").enable().unwrap_err();
	assert!(matches!(err, ServiceError::Missing(_)));
	assert!(!tree.layout.enabled_dir.join("ghost").exists());
	assert_eq!(err.to_string(), "service `ghost` does not exist");
}

#[test]
fn disable_then_not_enabled() {
	let tree = Tree::new("disable", &["alpha"], "exit 1");
	let ctl = tree.controller(false);
	ctl.service("alpha").enable().unwrap();
	ctl.service("alpha").disable().unwrap();
	assert!(!ctl.service("alpha").is_enabled());
	assert!(ctl.service("alpha").exists());
}

#[test]
fn disable_not_enabled_fails() {
	let tree = Tree::new("disable-not-enabled", &["alpha"], "exit 0");
	let err = tree.controller(false).service("alpha").disable().unwrap_err();
	assert!(matches!(err, ServiceError::NotEnabled(_)));
}

#[test]
fn enabled_root_symlink_is_resolved() {
	let tree = Tree::new("symlinked-root", &["alpha"], "exit 0");
	let real = tree.root.join("runsvdir-default");
	std::fs::create_dir_all(&real).unwrap();
	let link = tree.root.join("current");
	std::os::unix::fs::symlink(&real, &link).unwrap();

	let layout = Layout {
		enabled_dir: link,
		..tree.layout.clone()
	};
	let ctl = Controller::new(layout, Executor::new(false));
	let alpha = ctl.service("alpha");
	assert_eq!(alpha.enabled_path(), std::fs::canonicalize(&real).unwrap().join("alpha"));
	alpha.enable().unwrap();
	assert!(real.join("alpha").exists());
	assert_eq!(set(ctl.enabled_services().unwrap()), names(&["alpha"]));
}

// --- Listing ---

#[test]
fn list_all_matches_directory() {
	let tree = Tree::new("list-all", &["alpha", "beta", "gamma"], "exit 0");
	std::fs::create_dir_all(tree.layout.services_dir.join(".hidden")).unwrap();
	let ctl = tree.controller(false);
	assert_eq!(set(ctl.all_services().unwrap()), names(&["alpha", "beta", "gamma"]));
}

#[test]
fn list_enabled_and_disabled() {
	let tree = Tree::new("list-split", &["alpha", "beta"], "exit 0");
	std::os::unix::fs::symlink(
		tree.layout.services_dir.join("alpha"),
		tree.layout.enabled_dir.join("alpha"),
	)
	.unwrap();
	let ctl = tree.controller(false);
	assert_eq!(set(ctl.enabled_services().unwrap()), names(&["alpha"]));
	assert_eq!(set(ctl.disabled_services().unwrap()), names(&["beta"]));
}

#[test]
fn list_missing_root_is_empty() {
	let mut tree = Tree::new("list-missing", &[], "exit 0");
	tree.layout.services_dir = tree.root.join("absent");
	assert!(tree.controller(false).all_services().unwrap().is_empty());
}

#[test]
fn list_root_that_is_a_file_errors() {
	let mut tree = Tree::new("list-file", &[], "exit 0");
	let file = tree.root.join("plain");
	std::fs::write(&file, "x").unwrap();
	tree.layout.services_dir = file;
	let err = tree.controller(false).all_services().unwrap_err();
	assert!(err.to_string().starts_with("failed to read"));
}
