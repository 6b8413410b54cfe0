use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Subscriber for the CLI. Events go to stderr so stdout stays machine-readable.
pub fn init_tracing(json: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("e2e_fixtures=info,db_infra=info,migration=info,sqlx=warn,sea_orm=warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry.with(fmt_layer.json()).init();
    } else {
        registry.with(fmt_layer.without_time()).init();
    }
}
