//! Pica command-line driver.
//!
//! The binary (`pica`) is a thin wrapper: argument parsing lives in [`cli`],
//! and each subcommand in [`commands`] turns source text into output text or
//! a diagnostic, leaving all I/O to `main`.

pub mod cli;
pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber if `RUST_LOG` is set.
///
/// Safe to call more than once. Enable with e.g.
/// `RUST_LOG=pica_parse=trace` or `RUST_LOG=pica_eval=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
