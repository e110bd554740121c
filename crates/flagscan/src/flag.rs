use std::collections::BTreeMap;

/// A flag accepted by a subcommand. Declared once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagDef {
	pub name: String,
	pub description: String,
	pub default: Option<String>,
	pub boolean: bool,
}

impl FlagDef {
	/// A boolean flag; only its presence matters.
	pub fn switch(name: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			description: description.into(),
			default: None,
			boolean: true,
		}
	}

	/// A flag that carries a value, inline or as the following token.
	pub fn value(name: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			description: description.into(),
			default: None,
			boolean: false,
		}
	}

	pub fn with_default(mut self, default: impl Into<String>) -> Self {
		self.default = Some(default.into());
		self
	}

	/// The default, if one was declared and it is non-empty.
	pub fn effective_default(&self) -> Option<&str> {
		self.default.as_deref().filter(|d| !d.is_empty())
	}
}

/// A declared flag together with the value it resolved to.
///
/// Booleans resolve to the empty string: presence in [`ParsedArgs::flags`]
/// is the signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFlag {
	pub def: FlagDef,
	pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
	pub flags: BTreeMap<String, ResolvedFlag>,
	pub positionals: Vec<String>,
}

impl ParsedArgs {
	pub fn get(&self, name: &str) -> Option<&ResolvedFlag> {
		self.flags.get(name)
	}

	pub fn is_set(&self, name: &str) -> bool {
		self.flags.contains_key(name)
	}

	pub fn value(&self, name: &str) -> Option<&str> {
		self.flags.get(name).map(|f| f.value.as_str())
	}
}
