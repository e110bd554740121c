use flagscan::FlagDef;

use super::CommandSpec;
use crate::context::Context;
use crate::helpers::{self, EXIT_FAILURE, EXIT_OK};

pub const SPEC: CommandSpec = CommandSpec {
	name: "service enable",
	synopsis: "Enable a system service",
	usage: "void service enable NAME",
	flags,
	run,
};

fn flags(_ctx: &Context) -> Vec<FlagDef> {
	vec![FlagDef::switch("start", "Start service after enabling")]
}

fn run(ctx: &Context, args: &[String]) -> i32 {
	if !helpers::require_root(ctx) {
		return EXIT_FAILURE;
	}
	let Some(parsed) = helpers::parse_args(ctx, &SPEC, args) else {
		return EXIT_FAILURE;
	};
	let Some(name) = helpers::single_service(ctx, &parsed) else {
		return EXIT_FAILURE;
	};

	let controller = helpers::controller(ctx);
	let service = controller.service(name.as_str());
	if !service.exists() {
		ctx.ui.error(&format!("Service `{}` does not exist!", name));
		return EXIT_FAILURE;
	}
	if service.is_enabled() {
		ctx.ui.error(&format!("Service `{}` is already enabled!", name));
		return EXIT_FAILURE;
	}
	if let Err(e) = service.enable() {
		ctx.ui.error(&format!("Failed to enable service: {}", e));
		return EXIT_FAILURE;
	}
	ctx.ui.info(&format!("Enabled service: {}", name));

	if parsed.is_set("start") && !service.is_running() {
		ctx.ui.warn(&format!("Starting service `{}`...", name));
		if !service.start() {
			ctx.ui.error(&format!("Failed to start service `{}`!", name));
			return EXIT_FAILURE;
		}
		ctx.ui.info(&format!("Started service: {}", name));
	}
	EXIT_OK
}
