use flagscan::FlagDef;

use super::CommandSpec;
use crate::context::Context;
use crate::helpers::{self, EXIT_FAILURE, EXIT_OK};

pub const SPEC: CommandSpec = CommandSpec {
	name: "service disable",
	synopsis: "Disable a system service",
	usage: "void service disable NAME",
	flags,
	run,
};

fn flags(_ctx: &Context) -> Vec<FlagDef> {
	Vec::new()
}

/// Stops a running service before unlinking it; a failed stop leaves the
/// link in place.
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
	if !service.is_enabled() {
		ctx.ui.error(&format!("Service `{}` is not enabled!", name));
		return EXIT_FAILURE;
	}
	if service.is_running() {
		ctx.ui.warn(&format!("Service `{}` is running. Stopping...", name));
		if !service.stop() {
			ctx.ui.error(&format!("Failed to stop service `{}`!", name));
			return EXIT_FAILURE;
		}
	}
	if let Err(e) = service.disable() {
		ctx.ui.error(&format!("Failed to disable service: {}", e));
		return EXIT_FAILURE;
	}
	ctx.ui.info(&format!("Disabled service: {}", name));
	EXIT_OK
}
