use tracing::Level;

use void::ui::ColoredUi;
use void::{commands, config, Context};

fn main() {
	let debug = config::debug_enabled();
	tracing_subscriber::fmt()
		.with_max_level(if debug { Level::DEBUG } else { Level::WARN })
		.with_writer(std::io::stderr)
		.with_target(false)
		.without_time()
		.init();

	let ui = ColoredUi::new();
	let ctx = Context::new(config::load_global_config(), &ui, debug, svctl::is_root());

	let args: Vec<String> = std::env::args().skip(1).collect();
	std::process::exit(commands::dispatch(&ctx, &args));
}
