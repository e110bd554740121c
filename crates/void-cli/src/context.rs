use svctl::Layout;

use crate::config::{GlobalConfig, WorkspaceConfig};
use crate::ui::Ui;

/// Everything a command handler needs, built once in `main`.
pub struct Context<'a> {
	pub layout: Layout,
	pub workspace: WorkspaceConfig,
	pub ui: &'a dyn Ui,
	pub debug: bool,
	/// Effective uid was 0 at startup.
	pub root: bool,
}

impl<'a> Context<'a> {
	pub fn new(config: GlobalConfig, ui: &'a dyn Ui, debug: bool, root: bool) -> Self {
		Self {
			layout: config.service,
			workspace: config.workspace,
			ui,
			debug,
			root,
		}
	}
}
