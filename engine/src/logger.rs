use std::sync::OnceLock;

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn format_line(&self, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        match &self.prefix {
            Some(prefix) => format!("[{}][{}] {}", timestamp, prefix, message),
            None => format!("[{}] {}", timestamp, message),
        }
    }
}

/// Installs the process-wide logger. The first call wins; later calls keep
/// the prefix that is already in place.
pub fn init(prefix: Option<&str>) {
    LOGGER.get_or_init(|| Logger {
        prefix: prefix.map(str::to_string),
    });
}

/// Messages logged before `init` are dropped.
pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        println!("{}", logger.format_line(message));
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
