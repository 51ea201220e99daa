use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info,table_core=info,sqlx=warn,sea_orm=warn";

/// Filter directives: `TABLE_LOG`, then `RUST_LOG`, then [`DEFAULT_FILTER`].
fn filter_directives() -> String {
    std::env::var("TABLE_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_FILTER.to_owned())
}

/// Install the process-wide JSON subscriber.
///
/// Event fields are flattened into the top-level object and the target is
/// kept, so `table_core::services::turns` lines can be filtered downstream.
/// A second call is a no-op.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_new(filter_directives()).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .json()
        .flatten_event(true)
        .with_current_span(false)
        .with_span_list(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
