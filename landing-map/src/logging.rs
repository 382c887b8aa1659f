//! Logger setup for native and web hosts.

/// Installs the logger for the current target.
///
/// On native targets this is `env_logger` with `info` as the default filter, on the web logs
/// go to the browser console and panics are reported there too. Repeated calls are ignored.
pub fn init_logger() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let env = env_logger::Env::default().default_filter_or("info");
        if env_logger::Builder::from_env(env).try_init().is_err() {
            log::debug!("Logger is already initialized");
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        if console_log::init_with_level(log::Level::Info).is_err() {
            log::debug!("Logger is already initialized");
        }
    }
}
