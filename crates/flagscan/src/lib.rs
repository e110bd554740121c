//! # flagscan
//!
//! A deliberately small flag scanner for subcommand-style CLIs.
//!
//! Each subcommand declares its flags up front; `parse` turns raw argv into
//! resolved flags plus ordered positionals. Flags may be boolean switches or
//! take a value, either inline (`--origin=example.org`) or from the next token
//! (`--origin example.org`). Declared defaults are filled in after the scan so
//! an explicit value always wins.
//!
//! ```rust
//! use flagscan::{parse, FlagDef};
//!
//! let defs = vec![
//! 	FlagDef::switch("start", "Start service after enabling"),
//! 	FlagDef::value("origin", "Source origin").with_default("github.com"),
//! ];
//! let args: Vec<String> = vec!["--start".into(), "sshd".into()];
//!
//! let parsed = parse(&defs, &args).unwrap();
//! assert!(parsed.is_set("start"));
//! assert_eq!(parsed.value("origin"), Some("github.com"));
//! assert_eq!(parsed.positionals, vec!["sshd".to_string()]);
//! ```

pub mod flag;
pub mod parser;
pub mod usage;

pub use flag::{FlagDef, ParsedArgs, ResolvedFlag};
pub use parser::{fill_defaults, parse, scan, ParseError};
pub use usage::render_usage;
