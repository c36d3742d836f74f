use std::panic::{self, AssertUnwindSafe};

use critic_hir::{FuncDecl, Program, SourceFile};
use rayon::prelude::*;

use crate::checker::{CheckContext, Checker};
use crate::fault::{panic_message, CheckerFault};
use crate::sink::{DiagnosticSink, EmitKey, LintReport};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Run checkers on the rayon pool. The resulting report is identical to
    /// a sequential run.
    pub parallel: bool,
}

/// Visits every declaration of `program` once per checker and collects what
/// the checkers report.
///
/// Sequential runs are declaration-major: each declaration is handed to every
/// checker, in list order, before the walk moves on. A checker that panics on
/// a declaration loses that call's diagnostics and is recorded as a
/// [`CheckerFault`]; the walk continues.
pub fn run_checkers(
    program: &Program,
    checkers: &[Box<dyn Checker>],
    options: RunOptions,
) -> LintReport {
    let decls: Vec<(&SourceFile, &FuncDecl)> = program.decls().collect();
    tracing::debug!(
        checkers = checkers.len(),
        decls = decls.len(),
        uses = program.uses.len(),
        parallel = options.parallel,
        "running checkers"
    );

    let sink = DiagnosticSink::new();
    if options.parallel {
        checkers
            .par_iter()
            .enumerate()
            .for_each(|(checker_index, checker)| {
                for (decl_index, &(file, decl)) in decls.iter().enumerate() {
                    let key = EmitKey {
                        decl: decl_index,
                        checker: checker_index,
                    };
                    visit_one(program, file, decl, key, checker.as_ref(), &sink);
                }
            });
    } else {
        for (decl_index, &(file, decl)) in decls.iter().enumerate() {
            for (checker_index, checker) in checkers.iter().enumerate() {
                let key = EmitKey {
                    decl: decl_index,
                    checker: checker_index,
                };
                visit_one(program, file, decl, key, checker.as_ref(), &sink);
            }
        }
    }

    let report = sink.finish();
    tracing::debug!(
        diagnostics = report.diagnostics.len(),
        faults = report.faults.len(),
        "checkers finished"
    );
    report
}

fn visit_one(
    program: &Program,
    file: &SourceFile,
    decl: &FuncDecl,
    key: EmitKey,
    checker: &dyn Checker,
    sink: &DiagnosticSink,
) {
    let info = checker.info();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut cx = CheckContext::new(program, file, info.name);
        checker.visit_func_decl(&mut cx, decl);
        cx.into_emitted()
    }));
    match outcome {
        Ok(emitted) => sink.append(key, emitted),
        Err(payload) => {
            let fault = CheckerFault {
                checker: info.name,
                decl: decl.name.name.clone(),
                path: file.path.clone(),
                message: panic_message(payload.as_ref()),
            };
            tracing::warn!(
                checker = info.name,
                decl = %fault.decl,
                path = %fault.path,
                "checker panicked: {}",
                fault.message
            );
            sink.record_fault(key, fault);
        }
    }
}
