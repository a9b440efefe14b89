use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the global tracing subscriber. Safe to call more than once;
/// only the first call does anything.
pub fn init_logging() {
    INIT.call_once(|| {
        cfg_if::cfg_if! {
            if #[cfg(target_arch = "wasm32")] {
                console_error_panic_hook::set_once();
                tracing_wasm::set_as_global_default();
                // `log` records from dependencies go to the browser console too
                let _ = console_log::init_with_level(log::Level::Warn);
            } else {
                let _ = tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
                    .try_init();
            }
        }
    });
}
