//! Shared steps for command handlers. Each one reports its own failure
//! through the UI, so handlers only need to bail out with `EXIT_FAILURE`.

use flagscan::ParsedArgs;
use svctl::{Controller, Executor};

use crate::commands::CommandSpec;
use crate::context::Context;

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

pub fn require_root(ctx: &Context) -> bool {
	if !ctx.root {
		ctx.ui.error("This command must be run as `root`!");
	}
	ctx.root
}

pub fn parse_args(ctx: &Context, spec: &CommandSpec, args: &[String]) -> Option<ParsedArgs> {
	match flagscan::parse(&(spec.flags)(ctx), args) {
		Ok(parsed) => Some(parsed),
		Err(e) => {
			ctx.ui.error(&format!("Failed to setup {} command: {}", spec.group(), e));
			None
		}
	}
}

/// Exactly one positional.
pub fn single_service(ctx: &Context, parsed: &ParsedArgs) -> Option<String> {
	match parsed.positionals.as_slice() {
		[name] => Some(name.clone()),
		_ => {
			ctx.ui.error("Failed to setup service command: Single service name required!");
			None
		}
	}
}

pub fn no_positionals(ctx: &Context, spec: &CommandSpec, parsed: &ParsedArgs) -> bool {
	if parsed.positionals.is_empty() {
		return true;
	}
	ctx.ui.error(&format!(
		"Failed to setup {} command: Unexpected arguments: {}",
		spec.group(),
		parsed.positionals.join(" ")
	));
	false
}

pub fn controller(ctx: &Context) -> Controller {
	Controller::new(ctx.layout.clone(), Executor::new(ctx.debug))
}
