use flagscan::FlagDef;

use super::CommandSpec;
use crate::context::Context;
use crate::helpers::{self, EXIT_FAILURE, EXIT_OK};

pub const SPEC: CommandSpec = CommandSpec {
	name: "service status",
	synopsis: "Display status of services (all by default)",
	usage: "void service status [NAME ...]",
	flags,
	run,
};

fn flags(_ctx: &Context) -> Vec<FlagDef> {
	Vec::new()
}

/// Running services print as info, stopped ones as warnings. Every name is
/// checked against the enabled set before anything is queried.
fn run(ctx: &Context, args: &[String]) -> i32 {
	if !helpers::require_root(ctx) {
		return EXIT_FAILURE;
	}
	let Some(parsed) = helpers::parse_args(ctx, &SPEC, args) else {
		return EXIT_FAILURE;
	};

	let controller = helpers::controller(ctx);
	let mut enabled = match controller.enabled_services() {
		Ok(names) => names,
		Err(e) => {
			ctx.ui.error(&format!("Failed to list enabled services: {}", e));
			return EXIT_FAILURE;
		}
	};
	enabled.sort();

	let names = if parsed.positionals.is_empty() {
		enabled.clone()
	} else {
		parsed.positionals
	};

	if let Some(name) = names.iter().find(|n| enabled.binary_search(*n).is_err()) {
		ctx.ui.error(&format!("Service name is not an enabled service: {}", name));
		return EXIT_FAILURE;
	}

	for name in &names {
		if controller.service(name.as_str()).is_running() {
			ctx.ui.info(name);
		} else {
			ctx.ui.warn(name);
		}
	}
	EXIT_OK
}
