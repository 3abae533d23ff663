//! crates/debug-output/src/echo.rs
//! Plain-text echo of errors, warnings, and internal problems.
//!
//! Echo output is independent of the filtered message stream: it goes to
//! stderr or a log file when [`EchoConfig`] says so, regardless of what the
//! client enabled. Writes go through a [`MessageSink`] so line termination
//! is handled in one place.

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use logging_sink::{EchoLine, LineMode, MessageSink};

use crate::config::EchoConfig;
use crate::error::ErrorCode;

/// Prefix for general echo lines.
pub const ECHO_PREFIX: &str = "gl";
/// Prefix for warnings.
pub const WARNING_PREFIX: &str = "gl warning";
/// Prefix for client errors.
pub const USER_ERROR_PREFIX: &str = "gl: User error";

/// Number of internal problems printed per process.
pub const MAX_PROBLEM_REPORTS: u32 = 50;

type BoxedWriter = Box<dyn Write + Send>;

/// Destination for echo lines, shared by every context in the process.
///
/// A configured log file is created on the first printed line, not when
/// the echo is built. Identical client errors are collapsed across every
/// context sharing the echo.
pub struct Echo {
    verbose: bool,
    log_file: Option<PathBuf>,
    inner: Mutex<EchoInner>,
}

struct EchoInner {
    sink: Option<MessageSink<BoxedWriter>>,
    throttle: ErrorEchoThrottle,
}

impl EchoInner {
    fn write(&mut self, log_file: Option<&Path>, line: EchoLine<'_>, mode: LineMode) {
        let sink = self
            .sink
            .get_or_insert_with(|| MessageSink::new(open_target(log_file)));
        let _ = sink.write_with_mode(line, mode);
    }
}

/// Opens `log_file` for writing, falling back to stderr when it cannot be
/// created.
fn open_target(log_file: Option<&Path>) -> BoxedWriter {
    match log_file.map(File::create) {
        Some(Ok(file)) => Box::new(file),
        Some(Err(_)) | None => Box::new(io::stderr()),
    }
}

impl fmt::Debug for Echo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Echo")
            .field("verbose", &self.verbose)
            .field("log_file", &self.log_file)
            .finish_non_exhaustive()
    }
}

impl Echo {
    /// Echo for `config`. The target is resolved when the first line is
    /// printed.
    #[must_use]
    pub fn from_config(config: &EchoConfig) -> Self {
        Self {
            verbose: config.verbose,
            log_file: config.log_file().map(Path::to_path_buf),
            inner: Mutex::new(EchoInner {
                sink: None,
                throttle: ErrorEchoThrottle::new(),
            }),
        }
    }

    /// Echo writing to an arbitrary writer.
    #[must_use]
    pub fn with_writer<W>(verbose: bool, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            verbose,
            log_file: None,
            inner: Mutex::new(EchoInner {
                sink: Some(MessageSink::new(Box::new(writer))),
                throttle: ErrorEchoThrottle::new(),
            }),
        }
    }

    /// Echo that discards everything.
    #[must_use]
    pub fn silent() -> Self {
        Self::with_writer(false, io::sink())
    }

    /// Process-wide echo built from [`EchoConfig::global`].
    pub fn global() -> Arc<Self> {
        static GLOBAL: OnceLock<Arc<Echo>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Self::from_config(EchoConfig::global()))))
    }

    /// Returns `true` when lines are printed.
    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }

    fn lock(&self) -> MutexGuard<'_, EchoInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Prints `prefix: text` when verbose. Write failures are ignored.
    pub fn emit(&self, prefix: &str, text: &str, mode: LineMode) {
        if !self.verbose {
            return;
        }
        self.lock()
            .write(self.log_file.as_deref(), EchoLine::new(prefix, text), mode);
    }

    /// Decides whether a client error raised at `site` should be printed.
    ///
    /// A repeat of the previous `(code, site)` pair is only counted. A new
    /// pair first prints the summary of the repeats it ends.
    pub fn should_output_error(&self, code: ErrorCode, site: &'static str) -> bool {
        if !self.verbose {
            return false;
        }
        let mut inner = self.lock();
        if inner.throttle.count_repeat(code, site) {
            return false;
        }
        if let Some(summary) = inner.throttle.restart(code, site) {
            inner.write(
                self.log_file.as_deref(),
                EchoLine::new(ECHO_PREFIX, &summary),
                LineMode::WithNewline,
            );
        }
        true
    }

    /// Prints the summary of pending error repeats, if any.
    pub fn flush_repeats(&self) {
        if !self.verbose {
            return;
        }
        let mut inner = self.lock();
        if let Some(summary) = inner.throttle.take_summary() {
            inner.write(
                self.log_file.as_deref(),
                EchoLine::new(ECHO_PREFIX, &summary),
                LineMode::WithNewline,
            );
        }
    }

    /// Client errors counted since the last printed one.
    #[must_use]
    pub fn pending_repeats(&self) -> u32 {
        self.lock().throttle.pending_repeats()
    }
}

/// Collapses runs of identical client errors.
///
/// An error repeating the previous `(code, site)` pair is counted instead
/// of printed; the count becomes a single summary line before the next
/// different error or warning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorEchoThrottle {
    last: Option<(ErrorCode, &'static str)>,
    repeats: u32,
}

impl ErrorEchoThrottle {
    /// Creates an empty throttle.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: None,
            repeats: 0,
        }
    }

    /// Counts the error if it repeats the previous pair; returns whether it did.
    pub fn count_repeat(&mut self, code: ErrorCode, site: &'static str) -> bool {
        if self.last == Some((code, site)) {
            self.repeats += 1;
            return true;
        }
        false
    }

    /// Makes `(code, site)` the current pair, returning the summary of the
    /// run it ends.
    pub fn restart(&mut self, code: ErrorCode, site: &'static str) -> Option<String> {
        let summary = self.take_summary();
        self.last = Some((code, site));
        summary
    }

    /// Summary line for pending repeats; resets the count.
    pub fn take_summary(&mut self) -> Option<String> {
        if self.repeats == 0 {
            return None;
        }
        let repeats = std::mem::take(&mut self.repeats);
        self.last
            .map(|(code, _)| format!("{repeats} similar {} errors", code.name()))
    }

    /// Errors counted since the last printed one.
    #[must_use]
    pub const fn pending_repeats(&self) -> u32 {
        self.repeats
    }
}

/// Counter admitting a bounded number of reports.
#[derive(Debug)]
pub struct ReportLimiter {
    issued: AtomicU32,
    limit: u32,
}

impl ReportLimiter {
    /// Limiter admitting `limit` reports.
    #[must_use]
    pub const fn new(limit: u32) -> Self {
        Self {
            issued: AtomicU32::new(0),
            limit,
        }
    }

    /// Claims one report slot, returning `false` once the limit is spent.
    pub fn admit(&self) -> bool {
        self.issued
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |issued| {
                (issued < self.limit).then_some(issued + 1)
            })
            .is_ok()
    }
}

static PROBLEMS: ReportLimiter = ReportLimiter::new(MAX_PROBLEM_REPORTS);

/// Prints an internal implementation fault to stderr.
///
/// At most [`MAX_PROBLEM_REPORTS`] reports are printed per process. Returns
/// whether this one was.
pub fn problem(args: fmt::Arguments<'_>) -> bool {
    if !PROBLEMS.admit() {
        return false;
    }
    let prefix = format!("{} {} implementation error", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    let report = format!("Please report at {}", env!("CARGO_PKG_REPOSITORY"));
    let text = args.to_string();
    let mut sink = MessageSink::new(io::stderr());
    let _ = sink.write_all([EchoLine::new(&prefix, &text), EchoLine::new("", &report)]);
    true
}
