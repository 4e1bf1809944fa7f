#[cfg(target_arch = "wasm32")]
mod console {
    use log::{Level, Log, Metadata, Record};

    pub struct ConsoleLogger;

    pub static LOGGER: ConsoleLogger = ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Debug
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                crate::log(&format!("[{}] {}", record.level(), record.args()));
            }
        }

        fn flush(&self) {}
    }
}

/// Routes the `log` macros to the browser console, or to stderr when running
/// natively. Calling it more than once is harmless.
#[cfg(target_arch = "wasm32")]
pub fn init_logger() {
    if log::set_logger(&console::LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Debug);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_logger() {
    use std::io::Write;

    let _ = env_logger::builder()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .is_test(cfg!(test))
        .try_init();
}
