use std::path::PathBuf;

use flagscan::FlagDef;

use super::CommandSpec;
use crate::context::Context;
use crate::helpers::{self, EXIT_FAILURE, EXIT_OK};
use crate::workspace;

pub const SPEC: CommandSpec = CommandSpec {
	name: "workspace convert",
	synopsis: "Move a checkout into the workspace root and link it back",
	usage: "void workspace convert [PATH]",
	flags,
	run,
};

fn flags(ctx: &Context) -> Vec<FlagDef> {
	vec![FlagDef::value("origin", "Source origin").with_default(ctx.workspace.origin.clone())]
}

fn workspace_root(ctx: &Context) -> Option<PathBuf> {
	ctx.workspace.root.clone().or_else(|| {
		std::env::var_os("GOPATH")
			.filter(|v| !v.is_empty())
			.map(PathBuf::from)
	})
}

fn run(ctx: &Context, args: &[String]) -> i32 {
	let Some(parsed) = helpers::parse_args(ctx, &SPEC, args) else {
		return EXIT_FAILURE;
	};

	let cwd = match std::env::current_dir() {
		Ok(cwd) => cwd,
		Err(e) => {
			ctx.ui.error(&format!("Failed to determine current working directory: {}", e));
			return EXIT_FAILURE;
		}
	};
	let Some(root) = workspace_root(ctx) else {
		ctx.ui.error("Workspace root is not set (configure workspace.root or GOPATH)!");
		return EXIT_FAILURE;
	};
	let origin = match parsed.value("origin") {
		Some(origin) if !origin.is_empty() => origin.to_string(),
		_ => {
			ctx.ui.error("Source origin is required for relocation!");
			return EXIT_FAILURE;
		}
	};

	let project = match parsed.positionals.as_slice() {
		[] => cwd.clone(),
		[path] => PathBuf::from(path),
		_ => {
			ctx.ui.error("Only single project can be converted at once.");
			return EXIT_FAILURE;
		}
	};
	let project = workspace::absolutize(&cwd, &project);

	if let Err(e) = std::fs::metadata(&project) {
		ctx.ui.error(&format!("Failed to stat project directory: {}", e));
		return EXIT_FAILURE;
	}
	if std::fs::symlink_metadata(&project).is_ok_and(|m| m.file_type().is_symlink()) {
		ctx.ui.error(&format!("Project directory is already a symlink: {}", project.display()));
		return EXIT_FAILURE;
	}
	if std::fs::metadata(project.join(".git")).is_err() {
		ctx.ui.error(&format!(
			"Given project directory is not a git repository: {}",
			project.display()
		));
		return EXIT_FAILURE;
	}

	let Some(dest) = workspace::import_path(&root, &origin, &project) else {
		ctx.ui.error(&format!(
			"Cannot determine container directory from path: {}",
			project.display()
		));
		return EXIT_FAILURE;
	};
	if std::fs::symlink_metadata(&dest).is_ok() {
		ctx.ui.error(&format!(
			"Cannot relocate project. Destination already exists: {}",
			dest.display()
		));
		return EXIT_FAILURE;
	}

	tracing::debug!("relocating {} -> {}", project.display(), dest.display());
	if let Err(e) = workspace::move_checkout(&project, &dest) {
		ctx.ui.error(&format!("Failed to relocate project: {}", e));
		return EXIT_FAILURE;
	}
	if let Err(e) = std::os::unix::fs::symlink(&dest, &project) {
		ctx.ui.error(&format!("Failed to symlink project to original location: {}", e));
		return EXIT_FAILURE;
	}

	let label = dest.strip_prefix(root.join("src").join(&origin)).unwrap_or(&dest);
	ctx.ui.info(&format!("Successfully relocated project `{}`!", label.display()));
	EXIT_OK
}
