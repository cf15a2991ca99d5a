// Copyright 2023-2025 Irreducible Inc.

/// Installs a global `tracing` subscriber that prints spans and events to stderr.
///
/// The filter is read from `RUST_LOG` and defaults to `info`. Calling this more than once is
/// harmless; later calls leave the first subscriber in place.
pub fn init_tracing() {
	use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.try_init();
}
