//! Bilisp runtime - evaluator, builtins and REPL support
//!
//! This crate provides the execution side of Bilisp:
//! - S-expression evaluator
//! - Builtin arithmetic and list primitives
//! - REPL configuration and logging setup

pub mod builtins;
pub mod config;
pub mod evaluator;

use std::sync::Once;

use bilisp::{ParseError, Value, parse, read};

// Re-export evaluator entry points
pub use evaluator::{eval, reduce};

// Re-export builtin dispatch
pub use builtins::apply;

pub use config::ReplConfig;

/// Parse, read and evaluate one line of input.
pub fn eval_str(input: &str) -> Result<Value, ParseError> {
    let tree = parse(input)?;
    Ok(eval(read(&tree)))
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=bilisp=debug` or
/// `RUST_LOG=bilisp_runtime=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
