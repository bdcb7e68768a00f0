//! Tracing subscriber setup

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `harvester_meter=trace`)
pub const LOG_ENV: &str = "HARVESTER_LOG";

const DEFAULT_FILTER: &str = "warn";

static TRACING_INIT: OnceLock<()> = OnceLock::new();

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to stderr. Later calls do nothing.
pub fn init_tracing(json: bool) {
    let _ = TRACING_INIT.get_or_init(|| {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .with_target(false);

        let result = if json {
            builder
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .try_init()
        } else {
            builder.compact().try_init()
        };
        let _ = result;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_tracing(false);
        init_tracing(true);
        assert!(TRACING_INIT.get().is_some());
    }
}
