use crate::flag::{FlagDef, ParsedArgs, ResolvedFlag};

/// The only way a parse can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
	/// The flag name (dash group already stripped) is not declared.
	UnknownFlag(String),
}

impl std::fmt::Display for ParseError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ParseError::UnknownFlag(name) => write!(f, "unknown flag `{}`", name),
		}
	}
}

impl std::error::Error for ParseError {}

enum ScanState {
	Normal,
	/// The named flag is waiting for the next token as its value.
	Pending(String),
	Done,
}

/// Scan then fill defaults.
pub fn parse<S: AsRef<str>>(defs: &[FlagDef], args: &[S]) -> Result<ParsedArgs, ParseError> {
	let mut parsed = scan(defs, args)?;
	fill_defaults(defs, &mut parsed);
	Ok(parsed)
}

/// Single left-to-right pass over `args`. Does not apply defaults.
///
/// Exactly one dash group is stripped (`--` or `-`), so `---x` looks up `-x`.
/// A valued flag without `=value` takes the next token verbatim, even when
/// that token starts with a dash. A valued flag left pending at the end of
/// input is kept with an empty value. Repeated flags: the last one wins.
pub fn scan<S: AsRef<str>>(defs: &[FlagDef], args: &[S]) -> Result<ParsedArgs, ParseError> {
	let mut parsed = ParsedArgs::default();
	let mut state = ScanState::Normal;
	let mut tokens = args.iter().map(|a| a.as_ref());

	loop {
		state = match state {
			ScanState::Done => break,
			ScanState::Pending(name) => match tokens.next() {
				Some(token) => {
					if let Some(flag) = parsed.flags.get_mut(&name) {
						flag.value = token.to_string();
					}
					ScanState::Normal
				}
				None => ScanState::Done,
			},
			ScanState::Normal => match tokens.next() {
				Some(token) => scan_token(defs, token, &mut parsed)?,
				None => ScanState::Done,
			},
		};
	}

	Ok(parsed)
}

fn scan_token(defs: &[FlagDef], token: &str, parsed: &mut ParsedArgs) -> Result<ScanState, ParseError> {
	let body = match token.strip_prefix("--").or_else(|| token.strip_prefix('-')) {
		Some(body) => body,
		None => {
			parsed.positionals.push(token.to_string());
			return Ok(ScanState::Normal);
		}
	};

	let (name, inline) = match body.split_once('=') {
		Some((name, value)) => (name, Some(value)),
		None => (body, None),
	};

	let def = defs
		.iter()
		.find(|d| d.name == name)
		.ok_or_else(|| ParseError::UnknownFlag(name.to_string()))?;

	let mut next = ScanState::Normal;
	let value = if def.boolean {
		String::new()
	} else if let Some(value) = inline {
		value.to_string()
	} else {
		next = ScanState::Pending(def.name.clone());
		String::new()
	};

	parsed.flags.insert(
		def.name.clone(),
		ResolvedFlag {
			def: def.clone(),
			value,
		},
	);
	Ok(next)
}

/// Add every declared flag that is absent and has a non-empty default.
/// Flags already present are left untouched, so running this twice is a no-op.
pub fn fill_defaults(defs: &[FlagDef], parsed: &mut ParsedArgs) {
	for def in defs {
		if parsed.flags.contains_key(&def.name) {
			continue;
		}
		if let Some(default) = def.effective_default() {
			parsed.flags.insert(
				def.name.clone(),
				ResolvedFlag {
					def: def.clone(),
					value: default.to_string(),
				},
			);
		}
	}
}
