//! Tracing subscriber for the `resgen` binary.

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Variables read for filter directives, first match wins.
const FILTER_VARS: [&str; 2] = ["RESGEN_LOG", "RUST_LOG"];

/// Install a hierarchical subscriber on stderr.
///
/// Does nothing unless `RESGEN_LOG` or `RUST_LOG` is set, e.g.
/// `RESGEN_LOG=resgen_analysis=debug`. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Some(filter) = env_filter() else {
            return;
        };
        let layer = HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_bracketed_fields(true);
        // Another subscriber may already be installed by an embedding host.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init();
    });
}

fn env_filter() -> Option<EnvFilter> {
    FILTER_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .map(EnvFilter::new)
}
