use std::sync::Mutex;

use crate::metadata::diagnostics::{Monitor, Problem};

/// Monitor that keeps a copy of every notification.
#[derive(Debug, Default)]
pub struct RecordingMonitor {
    errors: Mutex<Vec<Problem>>,
    warnings: Mutex<Vec<Problem>>,
}

impl RecordingMonitor {
    pub fn errors(&self) -> Vec<Problem> {
        self.errors.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<Problem> {
        self.warnings.lock().unwrap().clone()
    }
}

impl Monitor for RecordingMonitor {
    fn on_error(&self, problem: &Problem) {
        self.errors.lock().unwrap().push(problem.clone());
    }

    fn on_warning(&self, problem: &Problem) {
        self.warnings.lock().unwrap().push(problem.clone());
    }
}
