mod service_disable;
mod service_enable;
mod service_list;
mod service_status;
mod workspace_convert;

use flagscan::{render_usage, FlagDef};

use crate::context::Context;
use crate::helpers::{EXIT_FAILURE, EXIT_OK};
use crate::{APP_NAME, VERSION};

/// A subcommand: its help text, its flags and its handler.
pub struct CommandSpec {
	/// Space separated, e.g. `service enable`.
	pub name: &'static str,
	pub synopsis: &'static str,
	pub usage: &'static str,
	pub flags: fn(&Context) -> Vec<FlagDef>,
	pub run: fn(&Context, &[String]) -> i32,
}

impl CommandSpec {
	/// First word of the name.
	pub fn group(&self) -> &'static str {
		self.name.split(' ').next().unwrap_or(self.name)
	}

	pub fn help(&self, ctx: &Context) -> String {
		render_usage(self.synopsis, self.usage, &(self.flags)(ctx))
	}
}

pub static COMMANDS: &[CommandSpec] = &[
	service_disable::SPEC,
	service_enable::SPEC,
	service_list::SPEC,
	service_status::SPEC,
	workspace_convert::SPEC,
];

/// Match the leading words of `args` against the table; returns the command
/// and the remaining arguments.
pub fn find(args: &[String]) -> Option<(&'static CommandSpec, &[String])> {
	COMMANDS.iter().find_map(|spec| {
		let words = spec.name.split(' ').count();
		if args.len() < words {
			return None;
		}
		let head = args[..words].join(" ");
		(head == spec.name).then(|| (spec, &args[words..]))
	})
}

pub fn usage(prefix: Option<&str>) -> String {
	let listed: Vec<&CommandSpec> = COMMANDS
		.iter()
		.filter(|spec| prefix.map_or(true, |p| spec.group() == p))
		.collect();
	let width = listed.iter().map(|s| s.name.len()).max().unwrap_or(0);
	let mut out = format!("Usage: {} [--version] [--help] <command> [<args>]\n\nAvailable commands are:\n", APP_NAME);
	for spec in listed {
		out.push_str(&format!("    {:<width$}    {}\n", spec.name, spec.synopsis, width = width));
	}
	out
}

/// Route argv (program name already stripped) to a handler and return the
/// process exit code.
pub fn dispatch(ctx: &Context, args: &[String]) -> i32 {
	let first = match args.first() {
		Some(first) => first.as_str(),
		None => {
			ctx.ui.output(&usage(None));
			return EXIT_FAILURE;
		}
	};

	match first {
		"help" | "-h" | "--help" => {
			ctx.ui.output(&usage(None));
			return EXIT_OK;
		}
		"version" | "-v" | "--version" => {
			ctx.ui.output(&format!("{} {}", APP_NAME, VERSION));
			return EXIT_OK;
		}
		_ => {}
	}

	if let Some((spec, rest)) = find(args) {
		if rest.iter().any(|a| a == "-h" || a == "--help") {
			ctx.ui.output(&spec.help(ctx));
			return EXIT_OK;
		}
		tracing::debug!("running `{}` with {:?}", spec.name, rest);
		return (spec.run)(ctx, rest);
	}

	if COMMANDS.iter().any(|spec| spec.group() == first) {
		ctx.ui.output(&usage(Some(first)));
	} else {
		ctx.ui.error(&format!("unknown command: {}", args.join(" ")));
		ctx.ui.output(&usage(None));
	}
	EXIT_FAILURE
}
