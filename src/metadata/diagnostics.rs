//! Problem collection for configuration type descriptions.
//!
//! Describing a configuration type never stops at the first violation. Every validator
//! records what it finds into a shared [`Problems`] sink and continues, so that a single
//! description reports all structural, annotation, signature and binding issues of a type
//! together. Only the boundary operation [`Problems::throw_if_has_errors`] turns the
//! collected errors into a hard [`crate::Error`].
//!
//! # Key Components
//!
//! - [`Problems`] - Append-only container for problem entries
//! - [`Problem`] - Individual entry with severity, kind, subject and message
//! - [`ProblemSeverity`] - Severity level (Warning, Error)
//! - [`ProblemKind`] - Which check produced the entry
//! - [`Subject`] - The offending type or method
//! - [`Monitor`] - Observer notified the moment a problem is recorded
//!
//! # Usage Examples
//!
//! ```rust
//! use confscope::prelude::*;
//!
//! let config = TypeBuilder::class("com.example", "Config")
//!     .abstract_type()
//!     .default_constructor()
//!     .method(MethodBuilder::setter("Port", TypeSignature::I4).config("port"))
//!     .build()?;
//!
//! let problems = describe(&config).problems().clone();
//! assert!(problems.has_errors());
//! assert_eq!(problems.by_kind(ProblemKind::Structural).len(), 1);
//! assert!(problems.throw_if_has_errors("com.example.Config").is_err());
//! # Ok::<(), confscope::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! [`Problems`] uses `boxcar::Vec` internally, so validators append through a shared
//! reference. Appending is crate-private: the finished container is [`Send`] and [`Sync`]
//! and is exposed read-only as part of [`crate::metadata::configuration::TypeMetadata`].

use std::fmt::{self, Write};

use strum::{Display, EnumCount, EnumIter};

use crate::Result;

/// Severity level of a problem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProblemSeverity {
    /// Discouraged but usable declaration.
    ///
    /// Warnings never make a description invalid.
    Warning,

    /// Violation that makes the description unusable for binding.
    Error,
}

impl fmt::Display for ProblemSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemSeverity::Warning => write!(f, "WARN"),
            ProblemSeverity::Error => write!(f, "ERROR"),
        }
    }
}

/// The check that produced a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum ProblemKind {
    /// Type is not instantiable: abstract, not public, or without a public no-arg
    /// constructor.
    Structural,
    /// Missing, empty or self-conflicting annotation data on a method.
    Annotation,
    /// Wrong parameter count or return type for the accessor role.
    Signature,
    /// No setter, or more than one candidate setter, for a getter-declared attribute.
    Binding,
    /// Two methods resolve to the same attribute name.
    DuplicateAttribute,
    /// A type declares no configuration attributes at all.
    EmptyType,
    /// An annotated method is not public or is static.
    Visibility,
    /// An attribute is reachable only through deprecated property names.
    Deprecation,
}

/// The type or method a problem refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Subject {
    /// Full name of a type
    Type(String),
    /// Generic signature string of a method
    Method(String),
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Type(name) => write!(f, "type {name}"),
            Subject::Method(signature) => write!(f, "method {signature}"),
        }
    }
}

/// A single recorded problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// Severity level of this problem.
    pub severity: ProblemSeverity,

    /// Check that produced this problem.
    pub kind: ProblemKind,

    /// The offending type or method.
    pub subject: Subject,

    /// Human-readable description of the issue.
    pub message: String,
}

impl Problem {
    /// Creates a new problem entry.
    ///
    /// # Arguments
    ///
    /// * `severity` - Severity level of the problem
    /// * `kind` - Check that found the problem
    /// * `subject` - Offending type or method
    /// * `message` - Human-readable description
    pub fn new(
        severity: ProblemSeverity,
        kind: ProblemKind,
        subject: Subject,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            kind,
            subject,
            message: message.into(),
        }
    }

    /// Creates an error-level problem.
    pub fn error(kind: ProblemKind, subject: Subject, message: impl Into<String>) -> Self {
        Self::new(ProblemSeverity::Error, kind, subject, message)
    }

    /// Creates a warning-level problem.
    pub fn warning(kind: ProblemKind, subject: Subject, message: impl Into<String>) -> Self {
        Self::new(ProblemSeverity::Warning, kind, subject, message)
    }

    /// Returns true if this problem is error-level.
    pub fn is_error(&self) -> bool {
        self.severity == ProblemSeverity::Error
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.kind, self.message)
    }
}

/// Observer notified once per recorded problem, at the moment it is recorded.
///
/// Monitors enable live diagnostics without changing what ends up in the final
/// [`Problems`] list.
pub trait Monitor: Send + Sync {
    /// Called for each error-level problem.
    fn on_error(&self, problem: &Problem);

    /// Called for each warning-level problem.
    fn on_warning(&self, _problem: &Problem) {}
}

/// Monitor that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullMonitor;

impl Monitor for NullMonitor {
    fn on_error(&self, _problem: &Problem) {}
}

/// Append-only container for problem entries.
///
/// Preserves the order in which problems were recorded. Only the describe pipeline
/// appends; outside the crate a container is read-only:
///
/// ```compile_fail
/// use confscope::prelude::*;
///
/// let config = TypeBuilder::class("com.example", "Config").build().unwrap();
/// let metadata = describe(&config);
/// metadata.problems().push(Problem::error(
///     ProblemKind::Structural,
///     Subject::Type("com.example.Config".into()),
///     "injected",
/// ));
/// ```
#[derive(Debug)]
pub struct Problems {
    entries: boxcar::Vec<Problem>,
}

impl Default for Problems {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Problems {
    fn clone(&self) -> Self {
        let cloned = Problems::new();
        for problem in self.iter() {
            cloned.entries.push(problem.clone());
        }
        cloned
    }
}

impl Problems {
    /// Creates a new empty container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: boxcar::Vec::new(),
        }
    }

    /// Appends a problem.
    pub(crate) fn push(&self, problem: Problem) {
        tracing::debug!(
            severity = %problem.severity,
            kind = %problem.kind,
            subject = %problem.subject,
            "{}",
            problem.message
        );
        self.entries.push(problem);
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.count() == 0
    }

    /// Returns the total number of problems.
    pub fn count(&self) -> usize {
        self.entries.count()
    }

    /// Returns true if any error-level problem has been recorded.
    pub fn has_errors(&self) -> bool {
        self.iter().any(Problem::is_error)
    }

    /// Returns the number of error-level problems.
    pub fn error_count(&self) -> usize {
        self.iter().filter(|p| p.is_error()).count()
    }

    /// Returns the number of warning-level problems.
    pub fn warning_count(&self) -> usize {
        self.iter().filter(|p| !p.is_error()).count()
    }

    /// Returns an iterator over all problems in recording order.
    pub fn iter(&self) -> impl Iterator<Item = &Problem> {
        self.entries.iter().map(|(_, p)| p)
    }

    /// Returns all errors as a vector.
    pub fn errors(&self) -> Vec<&Problem> {
        self.iter().filter(|p| p.is_error()).collect()
    }

    /// Returns all warnings as a vector.
    pub fn warnings(&self) -> Vec<&Problem> {
        self.iter().filter(|p| !p.is_error()).collect()
    }

    /// Returns problems of one kind.
    pub fn by_kind(&self, kind: ProblemKind) -> Vec<&Problem> {
        self.iter().filter(|p| p.kind == kind).collect()
    }

    /// Fails with [`crate::Error::ConfigurationDescription`] if any error was recorded.
    ///
    /// The error report enumerates every recorded error, one per line.
    ///
    /// # Arguments
    ///
    /// * `type_name` - Full name of the described type, used in the error message
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ConfigurationDescription`] when [`Problems::has_errors`]
    /// is true.
    pub fn throw_if_has_errors(&self, type_name: &str) -> Result<()> {
        if !self.has_errors() {
            return Ok(());
        }

        let problems: Vec<Problem> = self.errors().into_iter().cloned().collect();
        let mut report = String::new();
        for (i, problem) in problems.iter().enumerate() {
            let _ = writeln!(report, "  {}) {}", i + 1, problem);
        }

        Err(crate::Error::ConfigurationDescription {
            type_name: type_name.to_string(),
            report,
            problems,
        })
    }

    /// Formats a summary of all problems for display.
    pub fn summary(&self) -> String {
        let mut output = String::new();

        let error_count = self.error_count();
        let warning_count = self.warning_count();

        let _ = writeln!(
            output,
            "Problems: {} error(s), {} warning(s)",
            error_count, warning_count
        );

        if error_count > 0 {
            output.push_str("\nErrors:\n");
            for problem in self.errors() {
                let _ = writeln!(output, "  {problem}");
            }
        }

        if warning_count > 0 {
            output.push_str("\nWarnings:\n");
            for problem in self.warnings() {
                let _ = writeln!(output, "  {problem}");
            }
        }

        output
    }
}

impl fmt::Display for Problems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}
