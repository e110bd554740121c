use serde::Deserialize;
use std::path::PathBuf;

/// Where the supervision tree lives on disk and which binary controls it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Layout {
	pub sv_bin: PathBuf,
	pub services_dir: PathBuf,
	/// May itself be a symlink to the real run directory.
	pub enabled_dir: PathBuf,
}

impl Default for Layout {
	fn default() -> Self {
		Self {
			sv_bin: PathBuf::from("/usr/bin/sv"),
			services_dir: PathBuf::from("/etc/sv"),
			enabled_dir: PathBuf::from("/var/service"),
		}
	}
}
