use critic_base::{file_diagnostics_have_errors, FileDiagnostic};
use parking_lot::Mutex;

use crate::fault::CheckerFault;

/// Where a batch of diagnostics came from: the declaration's position in the
/// walk and the checker's position in the checker list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmitKey {
    pub decl: usize,
    pub checker: usize,
}

/// Append-only collector shared by every checker call of one run.
///
/// Appends may come from several threads. `finish` orders batches by
/// [`EmitKey`], which reproduces the sequential walk order no matter how the
/// calls were scheduled.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    batches: Mutex<Vec<(EmitKey, Vec<FileDiagnostic>)>>,
    faults: Mutex<Vec<(EmitKey, CheckerFault)>>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, key: EmitKey, diagnostics: Vec<FileDiagnostic>) {
        if diagnostics.is_empty() {
            return;
        }
        self.batches.lock().push((key, diagnostics));
    }

    pub fn record_fault(&self, key: EmitKey, fault: CheckerFault) {
        self.faults.lock().push((key, fault));
    }

    /// Number of diagnostics appended so far.
    pub fn len(&self) -> usize {
        self.batches.lock().iter().map(|(_, batch)| batch.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn finish(self) -> LintReport {
        let mut batches = self.batches.into_inner();
        batches.sort_by_key(|(key, _)| *key);
        let mut faults = self.faults.into_inner();
        faults.sort_by_key(|(key, _)| *key);
        LintReport {
            diagnostics: batches.into_iter().flat_map(|(_, batch)| batch).collect(),
            faults: faults.into_iter().map(|(_, fault)| fault).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    pub diagnostics: Vec<FileDiagnostic>,
    pub faults: Vec<CheckerFault>,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty() && self.faults.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        file_diagnostics_have_errors(&self.diagnostics)
    }

    pub fn by_checker<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a FileDiagnostic> {
        self.diagnostics
            .iter()
            .filter(move |diag| diag.diagnostic.code == code)
    }
}
