/// Returned when another subscriber was installed before ours.
#[derive(thiserror::Error, Debug)]
#[error("a global tracing subscriber is already installed")]
struct SubscriberTaken;

fn max_level() -> tracing::Level {
	if cfg!(debug_assertions) {
		tracing::Level::DEBUG
	} else {
		tracing::Level::INFO
	}
}

fn install_fmt_subscriber() -> anyhow::Result<()> {
	let subscriber = tracing_subscriber::fmt().with_max_level(max_level()).finish();
	tracing::subscriber::set_global_default(subscriber).map_err(|_| SubscriberTaken)?;
	Ok(())
}

/// Sends spans and events to the browser console, or to stdout off the web.
#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn install_subscriber() -> anyhow::Result<()> {
	tracing_wasm::try_set_as_global_default().or_else(|_| install_fmt_subscriber())
}

#[cfg(not(all(target_arch = "wasm32", feature = "csr")))]
fn install_subscriber() -> anyhow::Result<()> {
	install_fmt_subscriber()
}

fn init_diagnostics() -> anyhow::Result<()> {
	install_subscriber()?;

	#[cfg(feature = "log")]
	tracing_log::LogTracer::init()?;

	Ok(())
}

fn main() {
	#[cfg(all(target_arch = "wasm32", feature = "csr"))]
	console_error_panic_hook::set_once();

	if let Err(error) = init_diagnostics() {
		tracing::warn!(%error, "diagnostics disabled");
	}

	leptos::mount::mount_to_body(sketchpad::App)
}
