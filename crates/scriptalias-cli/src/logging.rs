//! Tracing setup.
//!
//! Output format is controlled by `SCRIPTALIAS_LOG_FORMAT`:
//!
//! - `text` (default): standard `tracing-subscriber` flat output
//! - `json`: one JSON object per event
//!
//! ```bash
//! SCRIPTALIAS_LOG=debug scriptalias generate Tools.dll
//! SCRIPTALIAS_LOG=scriptalias_codegen=trace SCRIPTALIAS_LOG_FORMAT=json scriptalias generate Tools.dll
//! ```
//!
//! The subscriber is only installed when `SCRIPTALIAS_LOG` (or `RUST_LOG`)
//! is set. Output goes to stderr so generated source on stdout stays clean.

use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn from_env() -> Self {
        match std::env::var("SCRIPTALIAS_LOG_FORMAT")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// `SCRIPTALIAS_LOG` takes precedence over `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("SCRIPTALIAS_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Install the global subscriber. Does nothing unless logging was requested.
pub fn init_tracing() {
    let requested =
        std::env::var("SCRIPTALIAS_LOG").is_ok() || std::env::var("RUST_LOG").is_ok();
    if !requested {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Json => fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Text => fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }
}
