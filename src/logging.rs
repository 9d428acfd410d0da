//! # Logging
//!
//! Structured logging uses the `tracing` crate. The library itself only emits
//! `debug` spans around each entry point and `trace` events per field; binaries decide
//! what to show through `RUST_LOG`.
//!
//! ```bash
//! # Entry points and bind failures
//! RUST_LOG=paramex=debug,paramex_core=debug cargo run -p paramex-sample
//!
//! # Every field decision (skipped, not found, bound)
//! RUST_LOG=trace cargo run -p paramex-sample
//! ```
//!
//! With `RUST_LOG=trace` a header bind reads like:
//!
//! ```text
//! TRACE extract_headers: Bound source="headers" record="paramex_sample::model::HeaderParams" field="name" key="name"
//! TRACE extract_headers: Not found field="nick" key="nick"
//! DEBUG extract_headers: Bind failed source="headers" key="age" error=error unmarshalling [x] into [i64] due to invalid digit found in string
//! ```

/// Initializes the global subscriber: `RUST_LOG` filtering, compact output, no targets.
///
/// Call once per process.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
