use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Stdout,
    Stderr,
    Silent,
}

pub struct Logger {
    prefix: Option<String>,
    output: LogOutput,
}

impl Logger {
    fn new(prefix: Option<String>, output: LogOutput) -> Self {
        Self { prefix, output }
    }

    pub fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message)
        } else {
            format!("[{}][{}:{}] {}", timestamp, file_name, line, message)
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        match self.output {
            LogOutput::Stdout => println!("{}", self.format_line(file, line, message)),
            LogOutput::Stderr => eprintln!("{}", self.format_line(file, line, message)),
            LogOutput::Silent => {}
        }
    }
}

pub fn init_logger(prefix: Option<String>, output: LogOutput) {
    LOGGER.get_or_init(|| Logger::new(prefix, output));
}

// Lines logged before init_logger are dropped.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
