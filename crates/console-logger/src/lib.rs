//! Console Logger
//!
//! `tracing` subscriber for WASM frontends. Every formatted event is written
//! as one line to the browser console, routed to `console.error`,
//! `console.warn` or `console.log` by level.

use std::fmt;
use std::io;

use chrono::Utc;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Errors raised while installing the logger
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Install the console subscriber as the global default.
///
/// Events above `max_level` are dropped. Calling this twice returns
/// [`LoggerError::AlreadyInitialized`] instead of panicking.
pub fn init(max_level: Level) -> Result<(), LoggerError> {
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_ansi(false)
        .with_target(true)
        .with_timer(WallClock)
        .with_writer(ConsoleMakeWriter::default())
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))
}

/// Timestamp from `chrono` (std's clock is unavailable on wasm32)
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl FormatTime for WallClock {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Utc::now().format("%H:%M:%S%.3f"))
    }
}

/// Console method an event line is sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Log,
}

impl ConsoleMethod {
    pub fn for_level(level: &Level) -> Self {
        if *level == Level::ERROR {
            ConsoleMethod::Error
        } else if *level == Level::WARN {
            ConsoleMethod::Warn
        } else {
            ConsoleMethod::Log
        }
    }
}

/// Where finished lines go
pub type LineSink = fn(ConsoleMethod, &str);

fn emit_to_console(method: ConsoleMethod, line: &str) {
    let value = JsValue::from_str(line);
    match method {
        ConsoleMethod::Error => web_sys::console::error_1(&value),
        ConsoleMethod::Warn => web_sys::console::warn_1(&value),
        ConsoleMethod::Log => web_sys::console::log_1(&value),
    }
}

/// `MakeWriter` handing out one buffered writer per event
#[derive(Clone, Copy)]
pub struct ConsoleMakeWriter {
    sink: LineSink,
}

impl Default for ConsoleMakeWriter {
    fn default() -> Self {
        Self { sink: emit_to_console }
    }
}

impl ConsoleMakeWriter {
    /// Writer factory that delivers lines to `sink` instead of the console
    pub fn with_sink(sink: LineSink) -> Self {
        Self { sink }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Log, self.sink)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::for_level(meta.level()), self.sink)
    }
}

/// Buffers one formatted event and emits it when dropped
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
    sink: LineSink,
}

impl ConsoleWriter {
    fn new(method: ConsoleMethod, sink: LineSink) -> Self {
        Self {
            method,
            buffer: Vec::new(),
            sink,
        }
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
        if self.buffer.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.buffer);
        (self.sink)(self.method, text.trim_end_matches(['\r', '\n']));
    }
}
