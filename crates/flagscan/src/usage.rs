use crate::flag::FlagDef;

/// Help text for a subcommand.
///
/// Descriptions line up one column past the longest flag name.
pub fn render_usage(synopsis: &str, usage: &str, defs: &[FlagDef]) -> String {
	let width = defs.iter().map(|d| d.name.len()).max().unwrap_or(0) + 1;
	let mut out = format!("{}\n\nUsage: {}\n", synopsis, usage);
	for def in defs {
		out.push_str(&format!("    --{:<width$}{}\n", def.name, def.description, width = width));
	}
	out
}
