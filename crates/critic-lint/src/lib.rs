#![deny(clippy::unwrap_used)]

//! Checker framework: the [`Checker`] trait, the declaration walk that drives
//! checkers, the sink that collects their diagnostics, and the bundled
//! checkers.

mod checker;
pub mod checkers;
mod fault;
mod sink;
mod walk;

pub use checker::{CheckContext, Checker, CheckerInfo, CheckerTag};
pub use checkers::{default_checkers, BoolFuncPrefixChecker, UnusedParamChecker};
pub use fault::CheckerFault;
pub use sink::{DiagnosticSink, EmitKey, LintReport};
pub use walk::{run_checkers, RunOptions};
