//! # svctl
//!
//! Service state for runit-style supervision trees.
//!
//! A service is never stored anywhere; it is read off the filesystem on every
//! call. Its definition lives in `<services_dir>/<name>`, it is enabled when
//! `<enabled_dir>/<name>` exists (a symlink to the definition), and it is
//! running when `sv status <name>` exits 0.
//!
//! ```rust,no_run
//! use svctl::{Controller, Executor, Layout};
//!
//! let controller = Controller::new(Layout::default(), Executor::new(false));
//! let sshd = controller.service("sshd");
//! if sshd.exists() && !sshd.is_enabled() {
//! 	sshd.enable().unwrap();
//! }
//! println!("running: {}", sshd.is_running());
//! ```

pub mod error;
pub mod exec;
pub mod layout;
pub mod service;

pub use error::ServiceError;
pub use exec::{Executor, Invocation, Outcome};
pub use layout::Layout;
pub use service::{Controller, Service};

/// True when the effective user is root.
pub fn is_root() -> bool {
	nix::unistd::geteuid().is_root()
}
