use log::LevelFilter;
use std::env;

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Timed pretty logger at `info`, with `RUST_LOG` directives layered on top.
pub fn init() {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.filter_level(DEFAULT_LEVEL);
    if let Some(spec) = env_filters(env::var("RUST_LOG").ok()) {
        builder.parse_filters(&spec);
    }
    builder.init();
}

fn env_filters(rust_log: Option<String>) -> Option<String> {
    rust_log.filter(|spec| !spec.trim().is_empty())
}
