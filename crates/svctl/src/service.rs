use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ServiceError;
use crate::exec::{Executor, Invocation, Outcome};
use crate::layout::Layout;

/// Entry point to a supervision tree: lists services and hands out
/// [`Service`] views bound to a single name.
#[derive(Debug, Clone)]
pub struct Controller {
	layout: Layout,
	executor: Executor,
}

impl Controller {
	pub fn new(layout: Layout, executor: Executor) -> Self {
		Self { layout, executor }
	}

	pub fn service(&self, name: impl Into<String>) -> Service<'_> {
		Service {
			controller: self,
			name: name.into(),
		}
	}

	/// Names of every defined service. Unordered.
	pub fn all_services(&self) -> Result<Vec<String>, ServiceError> {
		list_dir(&self.layout.services_dir)
	}

	/// Names of every entry in the enable directory. Unordered.
	pub fn enabled_services(&self) -> Result<Vec<String>, ServiceError> {
		list_dir(&self.layout.enabled_dir)
	}

	/// Defined services with no enable entry. Unordered.
	pub fn disabled_services(&self) -> Result<Vec<String>, ServiceError> {
		let enabled = self.enabled_services()?;
		Ok(self
			.all_services()?
			.into_iter()
			.filter(|name| !enabled.contains(name))
			.collect())
	}

	fn sv(&self, action: &str, name: &str) -> Outcome {
		self.executor
			.run(Invocation::new(&self.layout.sv_bin).args([action, name]))
	}
}

/// One service, looked up fresh on every call.
#[derive(Debug, Clone)]
pub struct Service<'a> {
	controller: &'a Controller,
	name: String,
}

impl Service<'_> {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn service_path(&self) -> PathBuf {
		self.controller.layout.services_dir.join(&self.name)
	}

	/// The enable entry. The enable root is resolved through symlinks first,
	/// falling back to the configured path if that fails.
	pub fn enabled_path(&self) -> PathBuf {
		let root = &self.controller.layout.enabled_dir;
		let resolved = match fs::canonicalize(root) {
			Ok(path) => path,
			Err(e) => {
				if self.controller.executor.debug() {
					tracing::debug!("failed to evaluate service path {}: {}", root.display(), e);
				}
				root.clone()
			}
		};
		resolved.join(&self.name)
	}

	/// Any stat error, not just "not found", counts as absent.
	pub fn exists(&self) -> bool {
		valid_name(&self.name) && fs::metadata(self.service_path()).is_ok()
	}

	/// Any stat error, not just "not found", counts as absent.
	pub fn is_enabled(&self) -> bool {
		valid_name(&self.name) && fs::metadata(self.enabled_path()).is_ok()
	}

	/// `sv status <name>` exited 0.
	pub fn is_running(&self) -> bool {
		self.controller.sv("status", &self.name).success()
	}

	/// Link the enable entry to the service definition.
	pub fn enable(&self) -> Result<(), ServiceError> {
		if !self.exists() {
			return Err(ServiceError::Missing(self.name.clone()));
		}
		if self.is_enabled() {
			return Err(ServiceError::AlreadyEnabled(self.name.clone()));
		}
		let target = self.service_path();
		let link = self.enabled_path();
		std::os::unix::fs::symlink(&target, &link).map_err(|e| {
			ServiceError::io(format!("failed to link {} -> {}", link.display(), target.display()), e)
		})
	}

	/// Remove the enable entry. Does not stop the service.
	pub fn disable(&self) -> Result<(), ServiceError> {
		if !self.exists() {
			return Err(ServiceError::Missing(self.name.clone()));
		}
		if !self.is_enabled() {
			return Err(ServiceError::NotEnabled(self.name.clone()));
		}
		let link = self.enabled_path();
		fs::remove_file(&link).map_err(|e| ServiceError::io(format!("failed to remove {}", link.display()), e))
	}

	pub fn start(&self) -> bool {
		self.controller.sv("start", &self.name).success()
	}

	pub fn stop(&self) -> bool {
		self.controller.sv("stop", &self.name).success()
	}
}

/// A name that stays inside its parent directory when joined.
fn valid_name(name: &str) -> bool {
	!name.is_empty() && name != "." && name != ".." && !name.contains('/')
}

/// Base names one level down. Hidden entries are skipped; a missing
/// directory lists as empty.
fn list_dir(dir: &Path) -> Result<Vec<String>, ServiceError> {
	let entries = match fs::read_dir(dir) {
		Ok(entries) => entries,
		Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
		Err(e) => return Err(ServiceError::io(format!("failed to read {}", dir.display()), e)),
	};

	let mut names = Vec::new();
	for entry in entries {
		let entry = entry.map_err(|e| ServiceError::io(format!("failed to read {}", dir.display()), e))?;
		let name = entry.file_name().to_string_lossy().into_owned();
		if name.starts_with('.') {
			continue;
		}
		names.push(name);
	}
	Ok(names)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_valid_name() {
		assert!(valid_name("sshd"));
		assert!(valid_name("agetty-tty1"));
		assert!(!valid_name(""));
		assert!(!valid_name("."));
		assert!(!valid_name(".."));
		assert!(!valid_name("/etc/passwd"));
		assert!(!valid_name("a/b"));
	}

	#[test]
	fn test_paths_follow_layout() {
		let layout = Layout {
			sv_bin: "/bin/false".into(),
			services_dir: "/nonexistent/sv".into(),
			enabled_dir: "/nonexistent/service".into(),
		};
		let controller = Controller::new(layout, Executor::new(false));
		let svc = controller.service("sshd");
		assert_eq!(svc.service_path(), PathBuf::from("/nonexistent/sv/sshd"));
		assert_eq!(svc.enabled_path(), PathBuf::from("/nonexistent/service/sshd"));
		assert!(!svc.exists());
		assert!(!svc.is_enabled());
	}

	#[test]
	fn test_invalid_name_never_exists() {
		let controller = Controller::new(Layout::default(), Executor::new(false));
		assert!(!controller.service("/").exists());
		assert!(matches!(controller.service("..").enable(), Err(ServiceError::Missing(_))));
	}
}
