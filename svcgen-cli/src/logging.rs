use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,svcgen=info";
const VERBOSE_FILTER: &str = "warn,svcgen=debug";

/// Initialise the global `tracing` subscriber with a standard `fmt` layer.
///
/// Respects `RUST_LOG`; otherwise falls back to `warn,svcgen=info`, or to
/// `debug` for the svcgen crates when `verbose` is set. Logs go to stderr
/// so that `--dry-run` output stays clean.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
