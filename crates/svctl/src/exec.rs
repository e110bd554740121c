use std::ffi::{OsStr, OsString};
use std::os::unix::process::ExitStatusExt;
use std::process::{Command, Stdio};

/// A child process to run: program, arguments and optional stream redirects.
///
/// Streams left unset are discarded, or connected to the parent's own
/// stdout/stderr when the executor runs in debug mode.
#[derive(Debug)]
pub struct Invocation {
	program: OsString,
	args: Vec<OsString>,
	stdout: Option<Stdio>,
	stderr: Option<Stdio>,
}

impl Invocation {
	pub fn new(program: impl AsRef<OsStr>) -> Self {
		Self {
			program: program.as_ref().to_os_string(),
			args: Vec::new(),
			stdout: None,
			stderr: None,
		}
	}

	pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
		self.args.push(arg.as_ref().to_os_string());
		self
	}

	pub fn args<I, S>(mut self, args: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<OsStr>,
	{
		self.args.extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
		self
	}

	pub fn stdout(mut self, stdout: Stdio) -> Self {
		self.stdout = Some(stdout);
		self
	}

	pub fn stderr(mut self, stderr: Stdio) -> Self {
		self.stderr = Some(stderr);
		self
	}

	fn describe(&self) -> String {
		let mut parts = vec![self.program.to_string_lossy().into_owned()];
		parts.extend(self.args.iter().map(|a| a.to_string_lossy().into_owned()));
		parts.join(" ")
	}
}

/// What one child process run amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
	pub code: i32,
	/// Debug lines recorded during the run; always empty without debug.
	pub trace: Vec<String>,
}

impl Outcome {
	pub fn success(&self) -> bool {
		self.code == 0
	}
}

/// Runs child processes to completion and folds the result into one exit code.
///
/// Single attempt, blocking, no timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Executor {
	debug: bool,
}

impl Executor {
	pub fn new(debug: bool) -> Self {
		Self { debug }
	}

	pub fn debug(&self) -> bool {
		self.debug
	}

	/// Run the invocation and wait for it.
	///
	/// - launch failure: code 1
	/// - non-zero exit: that code, unchanged
	/// - no exit code but not a success (killed by a signal): code 1
	pub fn run(&self, invocation: Invocation) -> Outcome {
		let mut outcome = Outcome {
			code: 1,
			trace: Vec::new(),
		};
		let described = invocation.describe();

		let default_stream = || if self.debug { Stdio::inherit() } else { Stdio::null() };
		let mut cmd = Command::new(&invocation.program);
		cmd.args(&invocation.args)
			.stdin(Stdio::null())
			.stdout(invocation.stdout.unwrap_or_else(default_stream))
			.stderr(invocation.stderr.unwrap_or_else(default_stream));

		let mut child = match cmd.spawn() {
			Ok(child) => child,
			Err(e) => {
				self.trace(&mut outcome, format!("failed to start command `{}` - {}", described, e));
				return outcome;
			}
		};

		let status = match child.wait() {
			Ok(status) => status,
			Err(e) => {
				self.trace(&mut outcome, format!("failed to wait on command `{}` - {}", described, e));
				return outcome;
			}
		};

		let mut code = status.code().unwrap_or(0);
		if code != 0 {
			self.trace(&mut outcome, format!("command returned non-zero exit: {} (`{}`)", code, described));
		}
		if code == 0 && !status.success() {
			let cause = match status.signal() {
				Some(sig) => format!(" (terminated by signal {})", sig),
				None => String::new(),
			};
			self.trace(
				&mut outcome,
				format!(
					"exit code returned 0 but process state does not show success{}. Setting exit code to 1.",
					cause
				),
			);
			code = 1;
		}

		outcome.code = code;
		outcome
	}

	fn trace(&self, outcome: &mut Outcome, line: String) {
		if self.debug {
			tracing::debug!("{}", line);
			outcome.trace.push(line);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_describe_joins_program_and_args() {
		let inv = Invocation::new("/usr/bin/sv").args(["status", "sshd"]);
		assert_eq!(inv.describe(), "/usr/bin/sv status sshd");
	}

	#[test]
	fn test_success_exit() {
		let outcome = Executor::new(true).run(Invocation::new("true"));
		assert_eq!(outcome.code, 0);
		assert!(outcome.trace.is_empty());
	}

	#[test]
	fn test_exit_code_is_propagated() {
		let outcome = Executor::new(false).run(Invocation::new("sh").args(["-c", "exit 7"]));
		assert_eq!(outcome.code, 7);
		assert!(outcome.trace.is_empty());
	}

	#[test]
	fn test_signal_is_not_success() {
		let outcome = Executor::new(true).run(Invocation::new("sh").args(["-c", "kill -9 $$"]));
		assert_eq!(outcome.code, 1);
		assert!(outcome.trace[0].contains("does not show success"));
	}
}
