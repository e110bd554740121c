use std::cell::RefCell;

use owo_colors::OwoColorize;

/// Where user-facing lines go.
pub trait Ui {
	fn output(&self, message: &str);
	fn info(&self, message: &str);
	fn warn(&self, message: &str);
	fn error(&self, message: &str);
}

/// Terminal UI: info in green on stdout, warnings in yellow and errors in red
/// on stderr. Colour is off when `NO_COLOR` is set.
pub struct ColoredUi {
	color: bool,
}

impl ColoredUi {
	pub fn new() -> Self {
		Self { color: std::env::var_os("NO_COLOR").is_none() }
	}
}

impl Default for ColoredUi {
	fn default() -> Self {
		Self::new()
	}
}

impl Ui for ColoredUi {
	fn output(&self, message: &str) {
		println!("{}", message);
	}

	fn info(&self, message: &str) {
		if self.color {
			println!("{}", message.green());
		} else {
			println!("{}", message);
		}
	}

	fn warn(&self, message: &str) {
		if self.color {
			eprintln!("{}", message.yellow());
		} else {
			eprintln!("{}", message);
		}
	}

	fn error(&self, message: &str) {
		if self.color {
			eprintln!("{}", message.red());
		} else {
			eprintln!("{}", message);
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
	Output,
	Info,
	Warn,
	Error,
}

/// Keeps every line in memory, for embedding and tests.
#[derive(Default)]
pub struct MemoryUi {
	lines: RefCell<Vec<(Level, String)>>,
}

impl MemoryUi {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn lines(&self) -> Vec<(Level, String)> {
		self.lines.borrow().clone()
	}

	pub fn messages(&self, level: Level) -> Vec<String> {
		self.lines
			.borrow()
			.iter()
			.filter(|(l, _)| *l == level)
			.map(|(_, m)| m.clone())
			.collect()
	}

	fn push(&self, level: Level, message: &str) {
		self.lines.borrow_mut().push((level, message.to_string()));
	}
}

impl Ui for MemoryUi {
	fn output(&self, message: &str) {
		self.push(Level::Output, message);
	}

	fn info(&self, message: &str) {
		self.push(Level::Info, message);
	}

	fn warn(&self, message: &str) {
		self.push(Level::Warn, message);
	}

	fn error(&self, message: &str) {
		self.push(Level::Error, message);
	}
}
