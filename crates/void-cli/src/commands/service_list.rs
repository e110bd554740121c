use flagscan::FlagDef;

use super::CommandSpec;
use crate::context::Context;
use crate::helpers::{self, EXIT_FAILURE, EXIT_OK};

pub const SPEC: CommandSpec = CommandSpec {
	name: "service list",
	synopsis: "List services",
	usage: "void service list",
	flags,
	run,
};

fn flags(_ctx: &Context) -> Vec<FlagDef> {
	vec![
		FlagDef::switch("enabled", "Display enabled services"),
		FlagDef::switch("disabled", "Display disabled services"),
	]
}

fn run(ctx: &Context, args: &[String]) -> i32 {
	if !helpers::require_root(ctx) {
		return EXIT_FAILURE;
	}
	let Some(parsed) = helpers::parse_args(ctx, &SPEC, args) else {
		return EXIT_FAILURE;
	};
	if !helpers::no_positionals(ctx, &SPEC, &parsed) {
		return EXIT_FAILURE;
	}

	let controller = helpers::controller(ctx);
	let mut enabled = match controller.enabled_services() {
		Ok(names) => names,
		Err(e) => {
			ctx.ui.error(&format!("Failed to list enabled services: {}", e));
			return EXIT_FAILURE;
		}
	};
	enabled.sort();

	if parsed.is_set("enabled") {
		for name in &enabled {
			ctx.ui.info(name);
		}
		return EXIT_OK;
	}

	if parsed.is_set("disabled") {
		let mut disabled = match controller.disabled_services() {
			Ok(names) => names,
			Err(e) => {
				ctx.ui.error(&format!("Failed to list disabled services: {}", e));
				return EXIT_FAILURE;
			}
		};
		disabled.sort();
		for name in &disabled {
			ctx.ui.error(name);
		}
		return EXIT_OK;
	}

	let mut all = match controller.all_services() {
		Ok(names) => names,
		Err(e) => {
			ctx.ui.error(&format!("Failed to list all services: {}", e));
			return EXIT_FAILURE;
		}
	};
	all.sort();

	for name in &all {
		if enabled.binary_search(name).is_ok() {
			ctx.ui.info(name);
		} else {
			ctx.ui.error(name);
		}
	}
	EXIT_OK
}
