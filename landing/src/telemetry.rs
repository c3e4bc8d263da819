//! `tracing` setup for the browser.
//!
//! The fmt subscriber formats as usual; [`ConsoleMakeWriter`] hands each
//! finished line to the `console` method matching the event level so the
//! browser's devtools filters keep working.

use std::io;
use std::str::FromStr;

use tracing::{Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(level: &str) {
    let filter = parse_level(level);
    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(filter)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .try_init();

    if installed.is_ok() {
        tracing::debug!(%filter, "telemetry ready");
    }
}

/// Unknown level names fall back to `info`.
pub fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level.trim()).unwrap_or(LevelFilter::INFO)
}

/// Which `console.*` function receives a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
    Log,
}

impl From<Level> for ConsoleMethod {
    fn from(level: Level) -> Self {
        if level == Level::ERROR {
            ConsoleMethod::Error
        } else if level == Level::WARN {
            ConsoleMethod::Warn
        } else if level == Level::INFO {
            ConsoleMethod::Info
        } else if level == Level::DEBUG {
            ConsoleMethod::Debug
        } else {
            ConsoleMethod::Log
        }
    }
}

pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::from(*meta.level()))
    }
}

/// Buffers one formatted event and emits it on drop.
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buffer: Vec::new(),
        }
    }

    /// Buffered text without the trailing newline the formatter appends.
    fn line(&self) -> String {
        String::from_utf8_lossy(&self.buffer).trim_end().to_string()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = self.line();
        if !line.is_empty() {
            emit(self.method, &line);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(method: ConsoleMethod, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match method {
        ConsoleMethod::Error => console::error_1(&value),
        ConsoleMethod::Warn => console::warn_1(&value),
        ConsoleMethod::Info => console::info_1(&value),
        ConsoleMethod::Debug => console::debug_1(&value),
        ConsoleMethod::Log => console::log_1(&value),
    }
}

// Native builds (unit tests) have no console object.
#[cfg(not(target_arch = "wasm32"))]
fn emit(_method: ConsoleMethod, line: &str) {
    eprintln!("{}", line);
}
