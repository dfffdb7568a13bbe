//! Per-description validation context.
//!
//! One [`ValidationContext`] exists per top-level describe call. It owns the problem list
//! and the monitor reference, so validators only need `&ValidationContext` to record what
//! they find. Nothing in it is shared between calls.

use crate::metadata::{
    diagnostics::{Monitor, Problem, ProblemKind, Problems, Subject},
    method::Method,
    typesystem::TypeRc,
    validation::config::ValidationConfig,
};

/// State shared by all validators during one description
pub(crate) struct ValidationContext<'a> {
    /// Type being described
    pub target: &'a TypeRc,
    /// Full name of the target, computed once
    pub type_name: String,
    /// Active configuration
    pub config: &'a ValidationConfig,
    monitor: &'a dyn Monitor,
    problems: Problems,
}

impl<'a> ValidationContext<'a> {
    pub fn new(target: &'a TypeRc, config: &'a ValidationConfig, monitor: &'a dyn Monitor) -> Self {
        ValidationContext {
            target,
            type_name: target.fullname(),
            config,
            monitor,
            problems: Problems::new(),
        }
    }

    /// Notify the monitor, then append
    pub fn record(&self, problem: Problem) {
        if problem.is_error() {
            self.monitor.on_error(&problem);
        } else {
            self.monitor.on_warning(&problem);
        }
        self.problems.push(problem);
    }

    /// Record an error against the target type
    pub fn type_error(&self, kind: ProblemKind, message: String) {
        self.record(Problem::error(
            kind,
            Subject::Type(self.type_name.clone()),
            message,
        ));
    }

    /// Record an error against a method
    pub fn method_error(&self, kind: ProblemKind, method: &Method, message: String) {
        self.record(Problem::error(
            kind,
            Subject::Method(method.generic_string()),
            message,
        ));
    }

    /// Record a warning against a method
    pub fn method_warning(&self, kind: ProblemKind, method: &Method, message: String) {
        self.record(Problem::warning(
            kind,
            Subject::Method(method.generic_string()),
            message,
        ));
    }

    pub fn has_errors(&self) -> bool {
        self.problems.has_errors()
    }

    pub fn into_problems(self) -> Problems {
        self.problems
    }
}
