pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod gateway;
pub mod handlers;
pub mod inventory;
pub mod models;

use tracing_subscriber::{filter::Directive, EnvFilter};

const DEFAULT_FILTER: &str = "info,play_with_containers=debug";

/// Target for one-shot startup diagnostics; enabled at `info` whatever `RUST_LOG` says.
pub const STARTUP_TARGET: &str = "startup";

/// Structured logging to stderr, shared by both binaries. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    let filter = directives
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

    match format!("{STARTUP_TARGET}=info").parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_target_survives_quiet_filter() {
        let rendered = env_filter(Some("warn")).to_string();
        assert!(rendered.contains("warn"));
        assert!(rendered.contains("startup=info"));
    }

    #[test]
    fn default_filter_applies_without_rust_log() {
        let rendered = env_filter(None).to_string();
        assert!(rendered.contains("play_with_containers=debug"));
        assert!(rendered.contains("startup=info"));
    }
}
