mod diagnostics;

pub use diagnostics::{
    file_diagnostics_have_errors, Diagnostic, DiagnosticSeverity, FileDiagnostic, Position, Span,
};
