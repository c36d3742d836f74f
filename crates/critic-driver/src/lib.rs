#![deny(clippy::unwrap_used)]

mod config;

use std::time::Instant;

use critic_base::DiagnosticSeverity;
use critic_hir::Program;
use critic_lint::{default_checkers, run_checkers, Checker, CheckerFault, LintReport, RunOptions};

pub use config::{LintConfig, TRACE_TIMING_ENV};

macro_rules! timing_step {
    ($trace:expr, $label:expr, $block:expr) => {{
        let _t0 = if $trace { Some(Instant::now()) } else { None };
        let result = $block;
        if let Some(t0) = _t0 {
            tracing::info!(
                step = $label,
                elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0,
                "timing"
            );
        }
        result
    }};
}

#[derive(Debug, thiserror::Error)]
pub enum CriticError {
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("{} checker fault(s), first: {}", .0.len(), first_fault(.0))]
    CheckerFaults(Vec<CheckerFault>),
}

fn first_fault(faults: &[CheckerFault]) -> String {
    faults
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}

/// Runs the bundled checkers over `program` as configured.
pub fn lint_program(program: &Program, config: &LintConfig) -> Result<LintReport, CriticError> {
    let checkers = default_checkers();
    lint_program_with(program, &checkers, config)
}

/// Runs an explicit checker list over `program`.
///
/// Faults are reported inside the [`LintReport`] unless `fail_on_fault` is
/// set, in which case any fault turns the run into
/// [`CriticError::CheckerFaults`]. With `warnings_as_errors` every diagnostic
/// is promoted to [`DiagnosticSeverity::Error`].
pub fn lint_program_with(
    program: &Program,
    checkers: &[Box<dyn Checker>],
    config: &LintConfig,
) -> Result<LintReport, CriticError> {
    let trace = config.trace_timing_enabled();
    let options = RunOptions {
        parallel: config.parallel,
    };
    let mut report = timing_step!(
        trace,
        "run_checkers",
        run_checkers(program, checkers, options)
    );
    if config.warnings_as_errors {
        for diag in &mut report.diagnostics {
            diag.diagnostic.severity = DiagnosticSeverity::Error;
        }
    }
    if config.fail_on_fault && !report.faults.is_empty() {
        return Err(CriticError::CheckerFaults(report.faults));
    }
    Ok(report)
}
