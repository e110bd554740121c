use std::io;
use std::path::{Component, Path, PathBuf};

/// Make `path` absolute against `cwd` and drop `.`/`..` lexically, without
/// touching the filesystem (symlinks are not resolved).
pub fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
	let joined = if path.is_absolute() { path.to_path_buf() } else { cwd.join(path) };
	let mut out = PathBuf::new();
	for component in joined.components() {
		match component {
			Component::CurDir => {}
			Component::ParentDir => {
				out.pop();
			}
			other => out.push(other.as_os_str()),
		}
	}
	out
}

/// `<root>/src/<origin>/<container>/<repo>`, where repo and container are the
/// last two components of `project`.
pub fn import_path(root: &Path, origin: &str, project: &Path) -> Option<PathBuf> {
	let repo = project.file_name()?;
	let container = project.parent()?.file_name()?;
	Some(root.join("src").join(origin).join(container).join(repo))
}

/// Rename `project` to `dest`, creating the destination's parents first.
pub fn move_checkout(project: &Path, dest: &Path) -> io::Result<()> {
	if let Some(parent) = dest.parent() {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::rename(project, dest)
}
