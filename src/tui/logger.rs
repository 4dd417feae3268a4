//! In-memory `log` backend. The TUI owns the terminal, so records are kept in a
//! bounded buffer and shown in an overlay instead of being written to stderr.

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Shared handle to the buffered log lines.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogBuffer {
    pub const DEFAULT_CAPACITY: usize = 200;

    pub fn new(capacity: usize) -> Self {
        Self { lines: Arc::new(Mutex::new(VecDeque::new())), capacity: capacity.max(1) }
    }

    /// Register a logger feeding this buffer as the global `log` backend.
    pub fn install(&self, level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = BufferLogger { buffer: self.clone(), level };
        log::set_boxed_logger(Box::new(logger)).map(|()| log::set_max_level(level))
    }

    pub fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push_back(line);
            while lines.len() > self.capacity {
                lines.pop_front();
            }
        }
    }

    /// Copy of the most recent `n` lines, oldest first.
    pub fn recent(&self, n: usize) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => {
                let start = lines.len().saturating_sub(n);
                lines.iter().skip(start).cloned().collect()
            }
            Err(_) => Vec::new(),
        }
    }

    /// Remove and return every buffered line.
    pub fn drain(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(mut lines) => lines.drain(..).collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|l| l.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

struct BufferLogger {
    buffer: LogBuffer,
    level: LevelFilter,
}

impl Log for BufferLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.buffer.push(format!("{:<5} {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_keeps_only_the_newest_lines() {
        let buf = LogBuffer::new(3);
        for i in 0..5 {
            buf.push(format!("line {i}"));
        }
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.recent(2), vec!["line 3".to_string(), "line 4".to_string()]);
        assert_eq!(buf.drain().len(), 3);
        assert!(buf.is_empty());
    }

    #[test]
    fn logger_respects_level() {
        let buf = LogBuffer::new(10);
        let logger = BufferLogger { buffer: buf.clone(), level: LevelFilter::Info };
        logger.log(&Record::builder().level(log::Level::Debug).args(format_args!("hidden")).build());
        logger.log(&Record::builder().level(log::Level::Info).args(format_args!("shown")).build());
        assert_eq!(buf.recent(10), vec!["INFO  shown".to_string()]);
    }
}
