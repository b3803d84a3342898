//! Module index generator.
//!
//! Reads a parsed program tree (XML as emitted by the front end, or the JSON
//! form of [`modidx_tree::Element`]), resolves it with
//! [`modidx_resolve::resolve`], and writes the index as JSON.
//!
//! ```text
//! tree file ──► input::index_source() ──► ModuleIndex ──► commands::render()
//! ```

pub mod commands;
pub mod input;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variables read for the log filter, in priority order.
pub const LOG_ENV_VARS: [&str; 2] = ["MODIDX_LOG", "RUST_LOG"];

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `MODIDX_LOG=modidx_resolve=debug` (or `RUST_LOG`); nothing is
/// installed when neither is set. Output goes to stderr as an indented tree
/// of phase spans.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let Some(directives) = LOG_ENV_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok())
        else {
            return;
        };
        tracing_subscriber::registry()
            .with(EnvFilter::new(directives))
            .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
            .init();
    });
}
