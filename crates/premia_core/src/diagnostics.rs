//! Injected logging capability.
//!
//! Components receive an `Arc<dyn Diagnostics>` at construction instead of
//! writing to a process-wide logger directly. Production code passes
//! [`TracingDiagnostics`], which forwards to `tracing`; tests pass
//! [`MemoryDiagnostics`] and assert on the recorded entries.
//!
//! Only the message text and its severity are part of the contract.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{error, info, warn};

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Informational (e.g. component initialised)
    Info,
    /// Recoverable condition (e.g. insufficient chart data)
    Warn,
    /// Caught failure
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warn => write!(f, "WARN"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// Logging capability injected into each component.
pub trait Diagnostics: Send + Sync {
    /// Record an informational message.
    fn info(&self, message: &str);

    /// Record a warning.
    fn warn(&self, message: &str);

    /// Record an error.
    fn error(&self, message: &str);

    /// Record a message at the given severity.
    fn log(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => self.info(message),
            Severity::Warn => self.warn(message),
            Severity::Error => self.error(message),
        }
    }
}

/// Forwards messages to `tracing` under the `premia` target.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use premia_core::diagnostics::{Diagnostics, TracingDiagnostics};
///
/// let diagnostics: Arc<dyn Diagnostics> = TracingDiagnostics::shared("report");
/// diagnostics.info("ReportGenerator initialized");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TracingDiagnostics {
    component: &'static str,
}

impl TracingDiagnostics {
    /// Create a forwarder tagging every event with `component`.
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }

    /// Create a forwarder already wrapped for injection.
    pub fn shared(component: &'static str) -> Arc<dyn Diagnostics> {
        Arc::new(Self::new(component))
    }

    /// Component name attached to events.
    pub fn component(&self) -> &'static str {
        self.component
    }
}

impl Diagnostics for TracingDiagnostics {
    fn info(&self, message: &str) {
        info!(target: "premia", component = self.component, "{}", message);
    }

    fn warn(&self, message: &str) {
        warn!(target: "premia", component = self.component, "{}", message);
    }

    fn error(&self, message: &str) {
        error!(target: "premia", component = self.component, "{}", message);
    }
}

/// A recorded diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEntry {
    /// Severity of the message
    pub severity: Severity,
    /// Message text
    pub message: String,
}

/// Records messages in memory for deterministic assertions.
///
/// # Examples
/// ```
/// use premia_core::diagnostics::{Diagnostics, MemoryDiagnostics, Severity};
///
/// let diagnostics = MemoryDiagnostics::new();
/// diagnostics.error("Error calculating option premium: strike is zero");
/// assert_eq!(diagnostics.count(Severity::Error), 1);
/// assert_eq!(diagnostics.count(Severity::Warn), 0);
/// ```
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    entries: Mutex<Vec<DiagnosticEntry>>,
}

impl MemoryDiagnostics {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty recorder wrapped in an `Arc`.
    ///
    /// Keep a clone of the returned `Arc` to inspect entries after handing
    /// the recorder to a component.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<DiagnosticEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, severity: Severity, message: &str) {
        self.lock().push(DiagnosticEntry {
            severity,
            message: message.to_string(),
        });
    }

    /// Snapshot of all recorded entries in arrival order.
    pub fn entries(&self) -> Vec<DiagnosticEntry> {
        self.lock().clone()
    }

    /// Messages recorded at `severity`.
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|entry| entry.severity == severity)
            .map(|entry| entry.message.clone())
            .collect()
    }

    /// Number of messages recorded at `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        self.lock()
            .iter()
            .filter(|entry| entry.severity == severity)
            .count()
    }

    /// Whether any message at `severity` contains `needle`.
    pub fn contains(&self, severity: Severity, needle: &str) -> bool {
        self.lock()
            .iter()
            .any(|entry| entry.severity == severity && entry.message.contains(needle))
    }

    /// Drop all recorded entries.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn info(&self, message: &str) {
        self.push(Severity::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Severity::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(Severity::Error, message);
    }
}
