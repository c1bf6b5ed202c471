use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Install the process-wide `tracing` subscriber.  `env_filter` accepts anything `EnvFilter`
/// understands, from a bare level (`info`) to per-crate directives (`lb_gen=debug,warn`).
pub fn setup(env_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(env_filter))
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .compact()
        .init();
}
