//! # Rotating File Logger
//!
//! A size-based rotating file logger. Records are written synchronously to a
//! single log file; once the next record would push that file to the
//! configured byte threshold, the file is rolled into a fixed-depth chain of
//! numbered backups (`app.log.1` is the newest, `app.log.N` the oldest) and a
//! fresh, empty `app.log` takes its place.
//!
//! Two pieces make up the crate:
//!
//! * [`Sink`] owns the open file (or the unbuffered standard error stream when
//!   no path is configured), formats records, and decides when and how to
//!   roll over.
//! * [`Logger`] wraps a [`Sink`] with a minimum [`Severity`] and exposes one
//!   method per level. Calls below the minimum are dropped before any
//!   formatting happens.
//!
//! ## Example
//!
//! ```rust
//! use rotating_file_logger::{LoggerBuilder, RotationSize, Severity};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dir = tempfile::tempdir()?;
//!     let logger = LoggerBuilder::new(dir.path().join("app.log"))
//!         .level(Severity::Info)
//!         .max_size(RotationSize::KB(256))
//!         .backup_count(5)
//!         .build()?;
//!
//!     logger.info(&[&"server started on port", &8080])?;
//!     logger.debug(&[&"filtered out, never formatted"])?;
//!     logger.error(&[&"upstream unavailable:", &"timeout"])?;
//!
//!     logger.close()?;
//!     Ok(())
//! }
//! ```
use {
    chrono::Local,
    regex::Regex,
    std::{
        ffi::OsString,
        fmt::{self, Display},
        fs,
        io::{self, Write as _},
        path::{Path, PathBuf},
        str::FromStr,
        sync::{Mutex, MutexGuard, PoisonError},
    },
};

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

/// Timestamp prefix of every record, in local time.
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Permission bits used when creating a log file and no explicit mode was
/// configured. The process umask still applies.
#[cfg(unix)]
const DEFAULT_CREATE_MODE: u32 = 0o777;

/// Convenient result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Ordered classification of message importance.
///
/// `Trace < Debug < Info < Warning < Error < Critical`. A [`Logger`] accepts
/// a call iff its severity is greater than or equal to the configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Severity {
    /// All severities, lowest first.
    pub const ALL: [Severity; 6] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    /// The short tag written in front of every record of this severity.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Trace => "[T]",
            Severity::Debug => "[D]",
            Severity::Info => "[I]",
            Severity::Warning => "[W]",
            Severity::Error => "[E]",
            Severity::Critical => "[C]",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = Error;

    /// Parse a severity name, ignoring ASCII case. `warn` is accepted as an
    /// alias for `warning`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Severity::Trace),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "critical" => Ok(Severity::Critical),
            _ => Err(Error::InvalidSeverity(s.to_string())),
        }
    }
}

/// Size thresholds for rotating log files in various units.
///
/// This is a convenience over [`SinkBuilder::max_bytes`]; both end up as the
/// same byte threshold.
///
/// # Examples
/// ```
/// use rotating_file_logger::{RotationSize, SinkBuilder};
///
/// let dir = tempfile::tempdir().unwrap();
/// // Rotate when the next record would take the file to 100 MB
/// let sink = SinkBuilder::new(dir.path().join("large.log"))
///     .max_size(RotationSize::MB(100))
///     .backup_count(3)
///     .build()
///     .unwrap();
/// assert!(sink.is_rotating());
/// ```
#[derive(Debug, Clone)]
pub enum RotationSize {
    /// Raw byte count
    Bytes(u64),
    /// Kilobytes (1 KB = 1024 bytes)
    KB(u64),
    /// Megabytes (1 MB = 1024 KB = 1,048,576 bytes)
    MB(u64),
    /// Gigabytes (1 GB = 1024 MB = 1,073,741,824 bytes)
    GB(u64),
}

impl RotationSize {
    /// Get the threshold in bytes, saturating at `u64::MAX`.
    fn bytes(&self) -> u64 {
        match self {
            RotationSize::Bytes(b) => *b,
            RotationSize::KB(kb) => kb.saturating_mul(1024),
            RotationSize::MB(mb) => mb.saturating_mul(1024 * 1024),
            RotationSize::GB(gb) => gb.saturating_mul(1024 * 1024 * 1024),
        }
    }
}

/// Immutable configuration of a sink.
#[derive(Debug, Clone)]
struct SinkMeta {
    /// Path of the current log file. Empty means standard error.
    base_path: PathBuf,
    /// Size threshold in bytes. Values `<= 0` disable rotation.
    max_bytes: i64,
    /// Number of rotated files to retain. Values `<= 0` disable rotation.
    backup_count: i64,
    /// Explicit permissions applied to every log file this sink creates
    /// (Unix-like systems only).
    file_mode: Option<u32>,
    /// Matches `{file name}.{index}` in the log directory. Compiled once when
    /// the sink is built.
    backup_pattern: Option<Regex>,
}

/// Where formatted records end up.
#[derive(Debug)]
enum Destination {
    /// Unbuffered standard error; never rotated.
    Stderr(io::Stderr),
    /// The current log file, opened for append.
    File(fs::File),
    /// No open file: reopening after the last rollover failed.
    Detached,
}

impl Destination {
    fn write_record(&mut self, record: &[u8]) -> io::Result<()> {
        match self {
            Destination::Stderr(stderr) => stderr.write_all(record),
            Destination::File(file) => file.write_all(record),
            Destination::Detached => Err(io::Error::new(io::ErrorKind::NotFound, "log file is not open")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Destination::Stderr(stderr) => stderr.flush(),
            Destination::File(file) => file.flush(),
            Destination::Detached => Ok(()),
        }
    }
}

impl SinkMeta {
    fn new<P: AsRef<Path>>(base_path: P) -> Self {
        SinkMeta {
            base_path: base_path.as_ref().to_path_buf(),
            max_bytes: 0,
            backup_count: 0,
            file_mode: None,
            backup_pattern: None,
        }
    }

    /// Compile the pattern used to find rotated files of this sink, if the
    /// base path has a UTF-8 file name.
    fn compile_backup_pattern(&self) -> Result<Option<Regex>> {
        let Some(filename) = self.base_path.file_name().and_then(|name| name.to_str()) else {
            return Ok(None);
        };
        Regex::new(&format!(r"^{}\.(\d+)$", regex::escape(filename)))
            .map(Some)
            .map_err(|err| Error::Internal(err.to_string()))
    }

    fn is_stderr(&self) -> bool {
        self.base_path.as_os_str().is_empty()
    }

    fn is_rotating(&self) -> bool {
        !self.is_stderr() && self.max_bytes > 0 && self.backup_count > 0
    }

    /// Path of the `index`-th rotated file, e.g. `app.log.2`.
    fn backup_path(&self, index: i64) -> PathBuf {
        let mut name = OsString::from(self.base_path.as_os_str());
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    /// Open the current log file for append, creating it if absent.
    fn open_log_file(&self) -> Result<fs::File> {
        let mut open_options = fs::OpenOptions::new();
        open_options.append(true).create(true);
        #[cfg(unix)]
        open_options.mode(self.file_mode.unwrap_or(DEFAULT_CREATE_MODE));

        let log_file = open_options.open(&self.base_path).map_err(|source| Error::Open {
            path: self.base_path.clone(),
            source,
        })?;

        self.set_permissions(&self.base_path)?;

        Ok(log_file)
    }

    /// Set the permissions for a file based on the configured file mode.
    ///
    /// Only has an effect when a mode was configured via
    /// [`SinkBuilder::file_mode`] and the platform is Unix-like. Unlike the
    /// creation mode, this is not subject to the process umask.
    fn set_permissions(&self, path: &Path) -> Result<()> {
        if let Some(mode) = self.file_mode {
            #[cfg(unix)]
            {
                fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(|source| {
                    Error::SetPermissions {
                        path: path.to_path_buf(),
                        source,
                    }
                })?
            }
            #[cfg(not(unix))]
            {
                tracing::warn!(
                    path = %path.display(),
                    mode = %format_args!("{mode:o}"),
                    "setting file permissions is not supported on this platform"
                );
            }
        }
        Ok(())
    }

    /// Check if the pending record should go to a fresh file.
    ///
    /// Holds iff rotation is enabled and the current size plus the exact
    /// length of the pending record reaches `max_bytes`.
    fn should_rollover(&self, destination: &Destination, record_len: usize) -> Result<bool> {
        let file = match destination {
            Destination::File(file) if self.is_rotating() => file,
            _ => return Ok(false),
        };
        let current_size = file
            .metadata()
            .map_err(|source| Error::Stat {
                path: self.base_path.clone(),
                source,
            })?
            .len();
        let pending = current_size.saturating_add(record_len as u64);
        Ok(pending >= self.max_bytes.unsigned_abs())
    }

    /// Shift the backup chain up by one and reopen the current file.
    ///
    /// Failed removes and renames are reported through `tracing` and otherwise
    /// ignored, so logging continues even when retention is degraded. If the
    /// fresh file cannot be opened the old handle, which now names a rotated
    /// file, is closed and the sink is left detached until a later open
    /// succeeds.
    fn rollover(&self, destination: &mut Destination) -> Result<()> {
        if self.backup_count <= 0 {
            return Ok(());
        }
        tracing::debug!(
            path = %self.base_path.display(),
            backup_count = self.backup_count,
            "rolling over log file"
        );

        // Highest index first so no backup is overwritten before it moves.
        for index in (0..self.backup_count).rev() {
            let source = if index == 0 {
                self.base_path.clone()
            } else {
                self.backup_path(index)
            };
            let target = self.backup_path(index + 1);

            if target.exists() {
                if let Err(err) = remove_file(&target) {
                    tracing::warn!(error = %err, "failed to evict rotated log file");
                }
            }
            if let Err(err) = rename_file(&source, &target) {
                tracing::warn!(error = %err, "failed to shift rotated log file");
            }
        }

        if let Err(err) = self.prune_stale_backups() {
            tracing::warn!(error = %err, "failed to prune stale rotated log files");
        }

        match self.open_log_file() {
            Ok(file) => {
                *destination = Destination::File(file);
                Ok(())
            }
            Err(err) => {
                *destination = Destination::Detached;
                Err(err)
            }
        }
    }

    /// Remove rotated files whose index is above `backup_count`.
    ///
    /// These only exist when an earlier run retained more backups than this
    /// one does; the regular shift never creates them.
    fn prune_stale_backups(&self) -> Result<()> {
        let Some(pattern) = &self.backup_pattern else {
            return Ok(());
        };
        let directory = match self.base_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let entries = fs::read_dir(directory).map_err(|source| Error::ReadDir {
            path: directory.to_path_buf(),
            source,
        })?;
        for entry in entries.flatten() {
            let index = entry
                .file_name()
                .to_str()
                .and_then(|name| pattern.captures(name))
                .and_then(|captures| captures.get(1))
                .and_then(|index| index.as_str().parse::<i64>().ok());
            match index {
                Some(index) if index > self.backup_count => {
                    if let Err(err) = remove_file(&entry.path()) {
                        tracing::warn!(error = %err, "failed to remove stale rotated log file");
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}

fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|source| Error::Remove {
        path: path.to_path_buf(),
        source,
    })
}

/// Rename `from` to `to`; a missing `from` is not an error.
fn rename_file(from: &Path, to: &Path) -> Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(Error::Rename {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        }),
    }
}

/// Render the fields of one record, each preceded by a space, plus the
/// trailing newline.
fn format_fields(fields: &[&dyn Display]) -> String {
    let mut body = String::new();
    for field in fields {
        body.push(' ');
        body.push_str(&field.to_string());
    }
    body.push('\n');
    body
}

/// Prefix a rendered body with the current local time.
fn stamp(body: &str) -> String {
    format!("{}{body}", Local::now().format(TIMESTAMP_FORMAT))
}

/// The write-and-rotate engine.
///
/// A sink owns exactly one destination: either the log file at its base path,
/// opened for append, or the unbuffered standard error stream when the base
/// path is empty. Every record is written synchronously; the whole
/// check-rotate-write sequence runs under one lock, so a sink can be shared
/// between threads without two callers racing a rollover.
///
/// Rotated files are named `{base}.1` (newest) through `{base}.{backup_count}`
/// (oldest).
#[derive(Debug)]
pub struct Sink {
    meta: SinkMeta,
    writer: Mutex<Destination>,
}

impl Sink {
    /// Create a sink with the given rotation settings.
    ///
    /// An empty `base_path` binds the sink to standard error and never fails.
    /// Otherwise the file is opened for append and created if missing.
    ///
    /// # Errors
    /// [`Error::Open`] if the log file cannot be opened.
    pub fn new<P: AsRef<Path>>(base_path: P, max_bytes: i64, backup_count: i64) -> Result<Self> {
        SinkBuilder::new(base_path)
            .max_bytes(max_bytes)
            .backup_count(backup_count)
            .build()
    }

    fn from_meta(mut meta: SinkMeta) -> Result<Self> {
        meta.backup_pattern = meta.compile_backup_pattern()?;
        let destination = if meta.is_stderr() {
            Destination::Stderr(io::stderr())
        } else {
            Destination::File(meta.open_log_file()?)
        };
        Ok(Sink {
            meta,
            writer: Mutex::new(destination),
        })
    }

    /// Write one record made of `fields`, rolling the file over first if the
    /// record would take it to the size threshold.
    ///
    /// The line written is `<date> <time> <field0> <field1> ...\n`.
    ///
    /// # Errors
    /// * [`Error::Stat`] if the size check fails; nothing is written.
    /// * [`Error::Write`] if appending the record fails.
    /// * [`Error::Open`] if the fresh file cannot be opened after a rollover,
    ///   or cannot be reopened on a later call; nothing is written.
    ///
    /// Failures while shifting backups are never returned.
    pub fn emit(&self, fields: &[&dyn Display]) -> Result<()> {
        let body = format_fields(fields);
        let mut destination = self.lock();
        // Stamped under the lock so timestamps in the file never go backwards.
        let record = stamp(&body);
        self.write_locked(&mut destination, record.as_bytes())
    }

    fn write_record(&self, record: &[u8]) -> Result<()> {
        let mut destination = self.lock();
        self.write_locked(&mut destination, record)
    }

    fn lock(&self) -> MutexGuard<'_, Destination> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_locked(&self, destination: &mut Destination, record: &[u8]) -> Result<()> {
        if matches!(*destination, Destination::Detached) {
            *destination = Destination::File(self.meta.open_log_file()?);
        }

        if self.meta.should_rollover(destination, record.len())? {
            self.meta.rollover(destination)?;
        }

        destination.write_record(record).map_err(Error::Write)
    }

    /// Path of the current log file, or `None` when writing to standard error.
    pub fn path(&self) -> Option<&Path> {
        if self.meta.is_stderr() {
            None
        } else {
            Some(&self.meta.base_path)
        }
    }

    /// Whether a rollover can ever happen for this sink.
    pub fn is_rotating(&self) -> bool {
        self.meta.is_rotating()
    }

    /// Flush and close the sink, syncing the log file to disk.
    pub fn close(self) -> Result<()> {
        let mut destination = self.writer.into_inner().unwrap_or_else(PoisonError::into_inner);
        destination.flush().map_err(Error::Write)?;
        if let Destination::File(file) = &destination {
            file.sync_all().map_err(Error::Write)?;
        }
        Ok(())
    }
}

/// Each `write` call is one pre-formatted record: it goes through the same
/// rollover check as [`Sink::emit`] but gets no timestamp.
impl io::Write for &Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_record(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().flush()
    }
}

impl io::Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (&*self).write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        (&*self).flush()
    }
}

/// Provides a fluent interface for configuring [`Sink`] instances.
///
/// # Default Configuration
///
/// * No rotation (`max_bytes` and `backup_count` are both 0)
/// * New files created with mode `0o777`, subject to umask
///
/// # Examples
/// ```rust
/// use rotating_file_logger::{RotationSize, SinkBuilder};
///
/// let dir = tempfile::tempdir().unwrap();
/// let sink = SinkBuilder::new(dir.path().join("app.log"))
///     .max_size(RotationSize::MB(10))
///     .backup_count(5)
///     .build()
///     .unwrap();
/// sink.emit(&[&"[I]", &"ready"]).unwrap();
/// ```
pub struct SinkBuilder {
    meta: SinkMeta,
}

impl SinkBuilder {
    /// Create a new sink builder. An empty path selects standard error.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        SinkBuilder {
            meta: SinkMeta::new(base_path),
        }
    }

    /// Set the size threshold in bytes. Values `<= 0` disable rotation.
    pub fn max_bytes(self, max_bytes: i64) -> Self {
        Self {
            meta: SinkMeta { max_bytes, ..self.meta },
        }
    }

    /// Set the size threshold in units.
    pub fn max_size(self, size: RotationSize) -> Self {
        let max_bytes = i64::try_from(size.bytes()).unwrap_or(i64::MAX);
        self.max_bytes(max_bytes)
    }

    /// Set the number of rotated files to keep. Values `<= 0` disable
    /// rotation.
    pub fn backup_count(self, backup_count: i64) -> Self {
        Self {
            meta: SinkMeta {
                backup_count,
                ..self.meta
            },
        }
    }

    /// Set the file permissions for log files (Unix-like systems only).
    /// This sets the file mode bits in octal notation like when using chmod.
    /// For example, 0o644 for rw-r--r-- permissions.
    pub fn file_mode(self, mode: u32) -> Self {
        Self {
            meta: SinkMeta {
                file_mode: Some(mode),
                ..self.meta
            },
        }
    }

    /// Build the sink.
    pub fn build(self) -> Result<Sink> {
        Sink::from_meta(self.meta)
    }
}

/// A leveled front end over a [`Sink`].
///
/// Each level method takes the record's fields as `&dyn Display` values. When
/// the level is below the configured minimum the call returns `Ok(())`
/// without formatting or writing anything. Otherwise the level tag is
/// prepended and the record goes to [`Sink::emit`], whose errors are returned
/// unchanged.
#[derive(Debug)]
pub struct Logger {
    level: Severity,
    sink: Sink,
}

impl Logger {
    /// Wrap `sink`, dropping every call below `level`.
    pub fn new(level: Severity, sink: Sink) -> Self {
        Logger { level, sink }
    }

    /// The configured minimum severity.
    pub fn level(&self) -> Severity {
        self.level
    }

    /// Whether a call at `severity` would reach the sink.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.level
    }

    /// The underlying sink.
    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    /// Log `fields` at `severity`.
    pub fn log(&self, severity: Severity, fields: &[&dyn Display]) -> Result<()> {
        if !self.enabled(severity) {
            return Ok(());
        }
        let tag = severity.tag();
        let mut record: Vec<&dyn Display> = Vec::with_capacity(fields.len() + 1);
        record.push(&tag);
        record.extend_from_slice(fields);
        self.sink.emit(&record)
    }

    /// Log `fields` at [`Severity::Trace`], tagged `[T]`.
    pub fn trace(&self, fields: &[&dyn Display]) -> Result<()> {
        self.log(Severity::Trace, fields)
    }

    /// Log `fields` at [`Severity::Debug`], tagged `[D]`.
    pub fn debug(&self, fields: &[&dyn Display]) -> Result<()> {
        self.log(Severity::Debug, fields)
    }

    /// Log `fields` at [`Severity::Info`], tagged `[I]`.
    pub fn info(&self, fields: &[&dyn Display]) -> Result<()> {
        self.log(Severity::Info, fields)
    }

    /// Log `fields` at [`Severity::Warning`], tagged `[W]`.
    pub fn warning(&self, fields: &[&dyn Display]) -> Result<()> {
        self.log(Severity::Warning, fields)
    }

    /// Log `fields` at [`Severity::Error`], tagged `[E]`.
    pub fn error(&self, fields: &[&dyn Display]) -> Result<()> {
        self.log(Severity::Error, fields)
    }

    /// Log `fields` at [`Severity::Critical`], tagged `[C]`.
    pub fn critical(&self, fields: &[&dyn Display]) -> Result<()> {
        self.log(Severity::Critical, fields)
    }

    /// Flush and close the underlying sink.
    pub fn close(self) -> Result<()> {
        self.sink.close()
    }
}

/// Builder for a [`Logger`] and its [`Sink`] in one go.
///
/// The minimum level defaults to [`Severity::Trace`], i.e. everything is
/// logged.
pub struct LoggerBuilder {
    level: Severity,
    sink: SinkBuilder,
}

impl LoggerBuilder {
    /// Create a new logger builder. An empty path selects standard error.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        LoggerBuilder {
            level: Severity::Trace,
            sink: SinkBuilder::new(base_path),
        }
    }

    /// Set the minimum severity.
    pub fn level(self, level: Severity) -> Self {
        Self { level, ..self }
    }

    /// See [`SinkBuilder::max_bytes`].
    pub fn max_bytes(self, max_bytes: i64) -> Self {
        Self {
            sink: self.sink.max_bytes(max_bytes),
            ..self
        }
    }

    /// See [`SinkBuilder::max_size`].
    pub fn max_size(self, size: RotationSize) -> Self {
        Self {
            sink: self.sink.max_size(size),
            ..self
        }
    }

    /// See [`SinkBuilder::backup_count`].
    pub fn backup_count(self, backup_count: i64) -> Self {
        Self {
            sink: self.sink.backup_count(backup_count),
            ..self
        }
    }

    /// See [`SinkBuilder::file_mode`].
    pub fn file_mode(self, mode: u32) -> Self {
        Self {
            sink: self.sink.file_mode(mode),
            ..self
        }
    }

    /// Build the logger, opening the log file.
    pub fn build(self) -> Result<Logger> {
        Ok(Logger::new(self.level, self.sink.build()?))
    }
}

/// Errors that can occur when using the logger.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to open log file '{}': {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("Failed to stat log file '{}': {source}", .path.display())]
    Stat { path: PathBuf, source: io::Error },
    #[error("Failed to write log record: {0}")]
    Write(#[source] io::Error),
    #[error("Failed to rename file from '{}' to '{}': {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
    #[error("Failed to remove file '{}': {source}", .path.display())]
    Remove { path: PathBuf, source: io::Error },
    #[error("Failed to read directory '{}': {source}", .path.display())]
    ReadDir { path: PathBuf, source: io::Error },
    #[error("Failed to set file permissions for '{}': {source}", .path.display())]
    SetPermissions { path: PathBuf, source: io::Error },
    #[error("Invalid severity: {0}")]
    InvalidSeverity(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Write(source) => source,
            err => io::Error::other(err),
        }
    }
}
