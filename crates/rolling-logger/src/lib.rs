//! Rolling Logger
//!
//! File logger for Tauri applications: size-rotated log files in the app log
//! directory plus a circular buffer of the most recent lines.
//!
//! `init_logger` installs a `tracing-subscriber` fmt subscriber; records from
//! the `log` facade are forwarded to it as well.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;

/// Rotate once the active file would grow past this
pub const MAX_FILE_BYTES: u64 = 1024 * 1024;
/// Rotated files kept next to the active one (`name.log.1` ..= `name.log.N`)
pub const KEEP_FILES: usize = 3;
/// Lines kept in memory for `recent_lines`
pub const RING_CAPACITY: usize = 500;

static SINK: OnceLock<LogSink> = OnceLock::new();

#[derive(Debug)]
pub enum LoggerError {
    Io(io::Error),
    AlreadyInitialized,
    NotInitialized,
    Subscriber(String),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::Io(e) => write!(f, "Log file error: {}", e),
            LoggerError::AlreadyInitialized => write!(f, "Logger already initialized"),
            LoggerError::NotInitialized => write!(f, "Logger not initialized"),
            LoggerError::Subscriber(msg) => write!(f, "Failed to install subscriber: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {}

impl From<io::Error> for LoggerError {
    fn from(e: io::Error) -> Self {
        LoggerError::Io(e)
    }
}

// ========================
// Circular Buffer
// ========================

/// Fixed-capacity buffer of log lines; the oldest line falls out first
#[derive(Debug, Clone)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Split formatted output into lines and keep the non-empty ones
    pub fn push_text(&mut self, text: &str) {
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            self.push(line.to_string());
        }
    }

    /// Up to `n` most recent lines, oldest first
    pub fn recent(&self, n: usize) -> Vec<String> {
        let skip = self.lines.len().saturating_sub(n);
        self.lines.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// ========================
// Rotating File
// ========================

/// Append-only log file that rotates by size
#[derive(Debug)]
pub struct RollingFile {
    dir: PathBuf,
    base_name: String,
    max_bytes: u64,
    keep: usize,
    file: File,
    written: u64,
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

impl RollingFile {
    pub fn open(dir: &Path, base_name: &str, max_bytes: u64, keep: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.log", base_name));
        let file = open_append(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            dir: dir.to_path_buf(),
            base_name: base_name.to_string(),
            max_bytes,
            keep,
            file,
            written,
        })
    }

    /// Index 0 is the active file, 1.. are rotated ones
    pub fn path(&self, index: usize) -> PathBuf {
        if index == 0 {
            self.dir.join(format!("{}.log", self.base_name))
        } else {
            self.dir.join(format!("{}.log.{}", self.base_name, index))
        }
    }

    pub fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        self.file.write_all(buf)?;
        self.written += buf.len() as u64;
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.keep == 0 {
            self.file = File::create(self.path(0))?;
            self.written = 0;
            return Ok(());
        }

        let oldest = self.path(self.keep);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.keep).rev() {
            let from = self.path(index);
            if from.exists() {
                fs::rename(&from, self.path(index + 1))?;
            }
        }
        fs::rename(self.path(0), self.path(1))?;

        self.file = open_append(&self.path(0))?;
        self.written = 0;
        Ok(())
    }
}

// ========================
// Subscriber Sink
// ========================

#[derive(Debug)]
struct SinkState {
    file: RollingFile,
    ring: RingBuffer,
}

/// Shared destination for formatted log output
#[derive(Debug, Clone)]
pub struct LogSink {
    state: Arc<Mutex<SinkState>>,
}

impl LogSink {
    pub fn open(dir: &Path, base_name: &str) -> io::Result<Self> {
        let file = RollingFile::open(dir, base_name, MAX_FILE_BYTES, KEEP_FILES)?;
        Ok(Self::from_file(file, RING_CAPACITY))
    }

    pub fn from_file(file: RollingFile, ring_capacity: usize) -> Self {
        Self {
            state: Arc::new(Mutex::new(SinkState {
                file,
                ring: RingBuffer::new(ring_capacity),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SinkState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn recent(&self, n: usize) -> Vec<String> {
        self.lock().ring.recent(n)
    }
}

/// Writer handed out per event by the subscriber
pub struct SinkWriter {
    sink: LogSink,
}

impl Write for SinkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.sink.lock();
        state.file.write_all(buf)?;
        state.ring.push_text(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sink.lock().file.flush()
    }
}

impl<'a> MakeWriter<'a> for LogSink {
    type Writer = SinkWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SinkWriter { sink: self.clone() }
    }
}

/// Local wall-clock timestamps
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

// ========================
// Global Logger
// ========================

/// Install the global logger writing to `<log_dir>/<app_name>.log`
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), LoggerError> {
    let sink = LogSink::open(&log_dir, app_name)?;
    SINK.set(sink.clone())
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    tracing_subscriber::fmt()
        .with_writer(sink)
        .with_ansi(false)
        .with_timer(LocalTime)
        .with_max_level(tracing::Level::INFO)
        .try_init()
        .map_err(|e| LoggerError::Subscriber(e.to_string()))?;

    tracing::info!(app = app_name, dir = %log_dir.display(), "logger initialized");
    Ok(())
}

fn sink() -> Result<&'static LogSink, LoggerError> {
    SINK.get().ok_or(LoggerError::NotInitialized)
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    sink()?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn warn(msg: &str) -> Result<(), LoggerError> {
    sink()?;
    tracing::warn!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), LoggerError> {
    sink()?;
    tracing::error!("{}", msg);
    Ok(())
}

/// Most recent `n` log lines, oldest first (empty before `init_logger`)
pub fn recent_lines(n: usize) -> Vec<String> {
    sink().map(|s| s.recent(n)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut ring = RingBuffer::new(3);
        for i in 1..=5 {
            ring.push(format!("line {}", i));
        }
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.recent(10), vec!["line 3", "line 4", "line 5"]);
        assert_eq!(ring.recent(2), vec!["line 4", "line 5"]);
    }

    #[test]
    fn test_ring_buffer_splits_text() {
        let mut ring = RingBuffer::new(10);
        ring.push_text("first\nsecond\n\n");
        assert_eq!(ring.recent(10), vec!["first", "second"]);
    }

    #[test]
    fn test_ring_buffer_zero_capacity() {
        let mut ring = RingBuffer::new(0);
        ring.push("ignored".to_string());
        assert!(ring.is_empty());
    }

    #[test]
    fn test_rolling_file_rotates_by_size() {
        let dir = tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "app", 16, 2).unwrap();

        file.write_all(b"0123456789\n").unwrap();
        assert!(!file.path(1).exists());

        file.write_all(b"abcdefghij\n").unwrap();
        assert!(file.path(1).exists());
        assert_eq!(fs::read_to_string(file.path(1)).unwrap(), "0123456789\n");
        assert_eq!(fs::read_to_string(file.path(0)).unwrap(), "abcdefghij\n");
    }

    #[test]
    fn test_rolling_file_keeps_limited_history() {
        let dir = tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "app", 4, 2).unwrap();
        for line in ["aaaa", "bbbb", "cccc", "dddd"] {
            file.write_all(line.as_bytes()).unwrap();
        }
        file.flush().unwrap();

        assert_eq!(fs::read_to_string(file.path(0)).unwrap(), "dddd");
        assert_eq!(fs::read_to_string(file.path(1)).unwrap(), "cccc");
        assert_eq!(fs::read_to_string(file.path(2)).unwrap(), "bbbb");
        assert!(!file.path(3).exists());
    }

    #[test]
    fn test_rolling_file_appends_to_existing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("app.log"), "earlier\n").unwrap();
        let mut file = RollingFile::open(dir.path(), "app", 1024, 2).unwrap();
        file.write_all(b"later\n").unwrap();
        file.flush().unwrap();
        assert_eq!(fs::read_to_string(file.path(0)).unwrap(), "earlier\nlater\n");
    }

    #[test]
    fn test_sink_writer_tees_to_file_and_ring() {
        let dir = tempdir().unwrap();
        let file = RollingFile::open(dir.path(), "app", 1024, 1).unwrap();
        let sink = LogSink::from_file(file, 10);

        let mut writer = sink.make_writer();
        writer.write_all(b"2026-01-01 INFO token issued\n").unwrap();
        writer.flush().unwrap();

        assert_eq!(sink.recent(5), vec!["2026-01-01 INFO token issued"]);
        let on_disk = fs::read_to_string(dir.path().join("app.log")).unwrap();
        assert!(on_disk.contains("token issued"));
    }

    #[test]
    fn test_helpers_require_init() {
        // No test calls init_logger, so the global sink stays empty
        assert!(matches!(info("x"), Err(LoggerError::NotInitialized)));
        assert!(recent_lines(5).is_empty());
    }
}
