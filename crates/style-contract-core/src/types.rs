//! Core types for lint violations and results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source span of a node within its stylesheet.
///
/// The core never knows file paths; the host combines a span with the file
/// it handed the tree in from to produce full attributions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Line number (1-indexed, 0 when unknown).
    pub line: usize,
    /// Column number (1-indexed, 0 when unknown).
    pub column: usize,
    /// Byte offset in the source (for miette integration).
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Span {
    /// Creates a new span from line and column.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length for this span.
    #[must_use]
    pub fn with_range(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// A lint violation found during analysis.
///
/// Violations are produced and handed to the host immediately; nothing is
/// retained across stylesheets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "SC001").
    pub code: String,
    /// Rule name (e.g., "layout-related-properties").
    pub rule: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Span of the triggering declaration or rule.
    pub span: Span,
    /// Human-readable message.
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        span: Span,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            span,
            message: message.into(),
        }
    }

    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} {} at {}:{}\n",
            self.code, self.rule, self.span.line, self.span.column,
        );
        for line in self.message.lines() {
            let _ = writeln!(output, "  {line}");
        }
        output
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let summary = self.message.lines().next().unwrap_or("");
        write!(
            f,
            "{}:{}: {} [{}] {}",
            self.span.line, self.span.column, self.severity, self.code, summary
        )
    }
}

/// Converts a Violation to a miette Diagnostic for rich error display.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(v: &Violation) -> Self {
        Self {
            message: format!("[{}] {}", v.code, v.message),
            span: SourceSpan::from((v.span.offset, v.span.length)),
            label_message: v.rule.clone(),
        }
    }
}

/// Result of running a rule set over one stylesheet tree.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found, sorted by span.
    pub violations: Vec<Violation>,
    /// Number of rules that ran.
    pub rules_run: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any error-severity violations.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == Severity::Error)
    }

    /// Returns true if no violations were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Formats all violations as a human-readable multi-line report.
    #[must_use]
    pub fn format_report(&self) -> String {
        use std::fmt::Write;
        let mut report = String::new();
        for v in &self.violations {
            let _ = writeln!(report, "{}", v.format());
        }
        let _ = writeln!(
            report,
            "Found {} violation(s) from {} rule(s)",
            self.violations.len(),
            self.rules_run
        );
        report
    }
}

/// A broken calling contract inside rule wiring.
///
/// These indicate a defect in a rule's own implementation, not a stylesheet
/// authoring problem. They are surfaced immediately as errors and are never
/// converted into [`Violation`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PreconditionError {
    /// A rule relation was checked against a root rule.
    #[error("relation check invoked on a root rule")]
    RelationOnRootRule,

    /// Governing roots were requested for a root rule.
    #[error("governing roots requested for a root rule")]
    GoverningRootsOfRootRule,
}
