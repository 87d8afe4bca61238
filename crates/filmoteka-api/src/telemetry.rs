//! Tracing initialization.

use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize console tracing with a compact format. The filter defaults to
/// crate-level debug and can be overridden through `RUST_LOG`.
pub fn init_tracing() {
    let console_fmt = tracing_subscriber::fmt::layer().event_format(
        Format::default()
            .compact()
            .with_target(false)
            .without_time(),
    );

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "filmoteka_api=debug,filmoteka_db=debug,filmoteka_storage=debug,filmoteka_tmdb=debug,tower_http=debug".into()
                }),
        )
        .with(console_fmt)
        .init();
}
