use serde::Deserialize;
use std::path::PathBuf;
use svctl::Layout;

// ── Global config (/etc/void/config.toml) ───────────────────────────────────

#[derive(Debug, Clone, Deserialize, Default)]
pub struct GlobalConfig {
	#[serde(default)]
	pub service: Layout,
	#[serde(default)]
	pub workspace: WorkspaceConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WorkspaceConfig {
	/// Falls back to `GOPATH` when unset.
	pub root: Option<PathBuf>,
	#[serde(default = "default_origin")]
	pub origin: String,
}

impl Default for WorkspaceConfig {
	fn default() -> Self {
		Self { root: None, origin: default_origin() }
	}
}

fn default_origin() -> String { "github.com".to_string() }

pub fn config_path() -> PathBuf {
	match std::env::var_os("VOID_CONFIG") {
		Some(path) if !path.is_empty() => PathBuf::from(path),
		_ => PathBuf::from("/etc/void/config.toml"),
	}
}

pub fn parse_config(content: &str) -> Result<GlobalConfig, toml::de::Error> {
	toml::from_str(content)
}

pub fn load_global_config() -> GlobalConfig {
	let path = config_path();
	if path.exists() {
		match std::fs::read_to_string(&path) {
			Ok(content) => match parse_config(&content) {
				Ok(config) => return config,
				Err(e) => tracing::warn!("failed to parse {}: {}", path.display(), e),
			},
			Err(e) => tracing::warn!("failed to read {}: {}", path.display(), e),
		}
	}
	GlobalConfig::default()
}

/// `VOID_DEBUG` set to anything non-empty.
pub fn debug_enabled() -> bool {
	std::env::var_os("VOID_DEBUG").is_some_and(|v| !v.is_empty())
}
