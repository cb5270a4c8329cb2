//! Logger bootstrap.
//!
//! Installs `env_logger` as the `log` backend. `RUST_LOG` filters as usual;
//! without it everything at `info` and above is shown.

/// Install the global logger. Calling it twice is harmless.
pub fn init() {
    let result = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init();

    if result.is_err() {
        log::warn!("a logger is already set, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_keeps_the_first_logger() {
        init();
        // A second install finds the logger set and only warns.
        init();
        log::info!("still logging");
    }
}
