use std::io;

/// Errors from service mutations and directory listings.
#[derive(Debug)]
pub enum ServiceError {
	/// No definition directory for the service.
	Missing(String),
	/// Enable link already present.
	AlreadyEnabled(String),
	/// Enable link absent.
	NotEnabled(String),
	/// Filesystem failure, with what was being attempted.
	Io { context: String, source: io::Error },
}

impl ServiceError {
	pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
		ServiceError::Io {
			context: context.into(),
			source,
		}
	}
}

impl std::fmt::Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ServiceError::Missing(name) => write!(f, "service `{}` does not exist", name),
			ServiceError::AlreadyEnabled(name) => write!(f, "service `{}` is already enabled", name),
			ServiceError::NotEnabled(name) => write!(f, "service `{}` is not enabled", name),
			ServiceError::Io { context, source } => write!(f, "{}: {}", context, source),
		}
	}
}

impl std::error::Error for ServiceError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			ServiceError::Io { source, .. } => Some(source),
			_ => None,
		}
	}
}
