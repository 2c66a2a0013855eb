pub trait ResultExt<T> {
	/// Logs the error, if any, and discards it.
	fn ok_or_log(self) -> Option<T>;

	/// Like `ok_or_log`, naming what failed.
	fn ok_or_log_context(self, context: &str) -> Option<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
	fn ok_or_log(self) -> Option<T> {
		self.inspect_err(|err| tracing::error!(error = %err)).ok()
	}

	fn ok_or_log_context(self, context: &str) -> Option<T> {
		self
			.inspect_err(|err| tracing::error!(error = %err, "{context}"))
			.ok()
	}
}
