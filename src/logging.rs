use crate::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Builds the log filter from `RUST_LOG` if set, otherwise from the configured level.
pub fn env_filter(rust_log: Option<&str>, configured_level: &str) -> Result<EnvFilter> {
    let directives = rust_log.unwrap_or(configured_level);

    EnvFilter::try_new(directives).map_err(|e| {
        Error::config(format!(
            "Invalid log filter '{}': {}. Use a level (error, warn, info, debug, trace) or directives such as 'lineart_proxy=debug,tower_http=info'",
            directives, e
        ))
    })
}

/// Installs the JSON tracing subscriber.
pub fn init(filter: EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, "info")]
    #[case(Some("debug"), "info")]
    #[case(Some("lineart_proxy=debug,tower_http=info"), "info")]
    #[case(Some("warn,lineart_proxy::server=trace"), "info")]
    fn test_valid_filters(#[case] rust_log: Option<&str>, #[case] level: &str) {
        assert!(env_filter(rust_log, level).is_ok());
    }

    #[test]
    fn test_rust_log_takes_precedence() {
        let filter = env_filter(Some("lineart_proxy=debug"), "error").unwrap();
        assert!(filter.to_string().contains("lineart_proxy=debug"));
    }

    #[rstest]
    #[case(None, "verbose=[")]
    #[case(Some("lineart_proxy=loud"), "info")]
    fn test_invalid_filters(#[case] rust_log: Option<&str>, #[case] level: &str) {
        assert!(matches!(env_filter(rust_log, level), Err(Error::Config(_))));
    }
}
