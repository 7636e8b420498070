#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Install a JSON subscriber writing to `log_dir/kanada-trace.jsonl`.
/// Only the first call has an effect.
///
/// `RUST_LOG` overrides the default filter, which keeps conversion spans
/// (`parse`, `dictionary`) and dictionary paging events.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, "kanada-trace.jsonl");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        // keep the writer alive for the rest of the process
        std::mem::forget(guard);

        tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("kanada=debug,kanada_core=debug")
                }),
            )
            .init();

        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            log_dir = %log_dir.display(),
            "kanada tracing started"
        );
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
