/// Implements [`log::Log`] by writing to the browser console.
pub struct ConsoleLogger {
    filter: log::LevelFilter,
}

impl ConsoleLogger {
    /// Install a new `ConsoleLogger`, piping all [`log`] events to the console.
    pub fn init(filter: log::LevelFilter) -> Result<(), log::SetLoggerError> {
        log::set_max_level(filter);
        log::set_boxed_logger(Box::new(Self::new(filter)))
    }

    pub fn new(filter: log::LevelFilter) -> Self {
        Self { filter }
    }
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let msg = format_record(record);
        match record.level() {
            log::Level::Trace => console::trace(&msg),
            log::Level::Debug => console::debug(&msg),
            log::Level::Info => console::info(&msg),
            log::Level::Warn => console::warn(&msg),
            // console.error crashes some wasm hosts; errors go through warn
            log::Level::Error => console::warn(&msg),
        }
    }

    fn flush(&self) {}
}

fn format_record(record: &log::Record<'_>) -> String {
    match record.level() {
        log::Level::Error => format!("ERROR: [{}] {}", record.target(), record.args()),
        _ => format!("[{}] {}", record.target(), record.args()),
    }
}

mod console {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = console)]
        pub fn trace(s: &str);

        #[wasm_bindgen(js_namespace = console)]
        pub fn debug(s: &str);

        #[wasm_bindgen(js_namespace = console)]
        pub fn info(s: &str);

        #[wasm_bindgen(js_namespace = console)]
        pub fn warn(s: &str);
    }
}
