use tracing_subscriber::EnvFilter;

/// Install the process-wide fmt subscriber used by every SkipSim binary.
///
/// `env_filter` accepts anything `EnvFilter` understands, from a bare level (`"debug"`) to
/// per-target directives (`"info,ss_gen=trace"`).  An unparseable filter falls back to `info`.
pub fn setup(env_filter: &str) {
    let filter = EnvFilter::try_new(env_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
