//! Tracing subscriber setup. Logs go to stderr so stdout stays clean for JSON.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` directives are kept and
/// `legal_scout` is raised to info, or debug when `verbose`.
pub fn init(verbose: bool, json: bool) {
    let level = if verbose { "debug" } else { "info" };
    let mut filter = EnvFilter::from_default_env();
    for target in ["legal_scout", "legal_scout_server"] {
        if let Ok(directive) = format!("{target}={level}").parse() {
            filter = filter.add_directive(directive);
        }
    }

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    // A second init (e.g. in tests) is not an error worth surfacing.
    if json {
        let _ = builder.json().try_init();
    } else {
        let _ = builder.try_init();
    }
}
