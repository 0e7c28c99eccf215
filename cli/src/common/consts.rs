/// used when neither `--trace` nor `RUST_LOG` is given
pub const DEFAULT_LOG_FILTER: &str = "hot_props=warn,backend=warn";
pub const DEBUG_LOG_FILTER: &str = "hot_props=debug,backend=debug";
pub const TRACE_LOG_FILTER: &str = "hot_props=trace,backend=trace,reqwest=debug";
