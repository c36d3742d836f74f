//! Detects unused parameters and suggests naming them `_`.
//!
//! Before: `func f(a int, b float64)` where `b` is never read.
//!
//! After: `func f(a int, _ float64)`

use critic_hir::{FuncDecl, Ident, SymbolId};
use rustc_hash::FxHashMap;

use crate::checker::{CheckContext, Checker, CheckerInfo, CheckerTag};

pub(crate) const UNNAMED_MESSAGE: &str = "consider to name parameters as `_`";

static INFO: CheckerInfo = CheckerInfo {
    name: "unusedParam",
    tags: &[CheckerTag::Experimental],
    summary: "Detects unused params and suggests to name them as `_`",
    before: "func f(a int, b float64) // b isn't used inside function body",
    after: "func f(a int, _ float64)",
};

#[derive(Debug, Clone, Copy, Default)]
pub struct UnusedParamChecker;

impl Checker for UnusedParamChecker {
    fn info(&self) -> &'static CheckerInfo {
        &INFO
    }

    fn visit_func_decl(&self, cx: &mut CheckContext<'_>, decl: &FuncDecl) {
        if decl.body.is_none() || decl.params.num_fields() == 0 {
            return;
        }

        let mut unused: FxHashMap<SymbolId, &Ident> = FxHashMap::default();
        for field in &decl.params {
            if field.is_unnamed() {
                cx.warn(field.span, UNNAMED_MESSAGE);
                return;
            }
            for ident in &field.names {
                if !ident.is_discard() {
                    unused.insert(ident.symbol, ident);
                }
            }
        }
        if unused.is_empty() {
            return;
        }

        // Uses may sit in closures or deferred calls anywhere in the program,
        // so resolve against the whole table rather than the body subtree.
        for entry in cx.uses() {
            if unused.remove(&entry.symbol()).is_some() && unused.is_empty() {
                return;
            }
        }

        for ident in decl.params.iter().flat_map(|field| field.names.iter()) {
            if unused.remove(&ident.symbol).is_some() {
                cx.warn(
                    ident.span,
                    format!(
                        "parameter `{}` isn't used, consider to name it as `_`",
                        ident.name
                    ),
                );
            }
        }
    }
}
