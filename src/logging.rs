// Copyright 2019 TiKV Project Authors. Licensed under MIT or Apache-2.0.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr. `RUST_LOG` overrides the default `info` filter.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
