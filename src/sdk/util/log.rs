use env_logger::{Builder, Env};

/// Default filter is `info`; `RUST_LOG` overrides it.
pub fn init_logging() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .format_module_path(false)
        .init();
}
