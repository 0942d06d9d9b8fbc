//! Tracing subscriber setup for hosts and demos.

/// Installs a formatted `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; without it only errors are shown, plus
/// `info` from the slider crates. Calling this more than once is harmless:
/// later calls leave the first subscriber in place.
pub fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,value_slider=info,value_slider_ui=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
