//! Detects functions that return only a bool and suggests an Is/Has/Contains
//! prefix for their name.
//!
//! Before: `func Enabled() bool`
//!
//! After: `func IsEnabled() bool`

use critic_hir::FuncDecl;

use crate::checker::{CheckContext, Checker, CheckerInfo, CheckerTag};

pub(crate) const MESSAGE: &str = "consider to add Is/Has/Contains prefix to function name";

/// Process-termination verbs read fine without a predicate prefix.
const EXCLUDED: &[&str] = &["exit", "quit"];

const PREFIXES: &[&str] = &[
    "is", "has", "contains", "check", "get", "should", "need", "may",
];

static INFO: CheckerInfo = CheckerInfo {
    name: "boolFuncPrefix",
    tags: &[CheckerTag::Experimental, CheckerTag::VeryOpinionated],
    summary: "Detects functions returning only bool and suggests an Is/Has/Contains name prefix",
    before: "func Enabled() bool",
    after: "func IsEnabled() bool",
};

#[derive(Debug, Clone, Copy, Default)]
pub struct BoolFuncPrefixChecker;

impl Checker for BoolFuncPrefixChecker {
    fn info(&self) -> &'static CheckerInfo {
        &INFO
    }

    fn visit_func_decl(&self, cx: &mut CheckContext<'_>, decl: &FuncDecl) {
        if decl.params.num_fields() > 0 || decl.results.num_fields() != 1 {
            return;
        }
        let Some(result) = decl.results.fields.first() else {
            return;
        };
        if !cx.is_bool(&result.ty) {
            return;
        }
        if has_proper_prefix(&decl.name.name) {
            tracing::trace!(name = %decl.name.name, "predicate name accepted");
            return;
        }
        cx.warn(decl.span, MESSAGE);
    }
}

/// Whether `name` already reads as a predicate, compared case-insensitively.
pub fn has_proper_prefix(name: &str) -> bool {
    let name = name.to_lowercase();
    EXCLUDED.contains(&name.as_str()) || PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use critic_hir::{ProgramBuilder, TypeKind};

    use super::*;
    use crate::walk::{run_checkers, RunOptions};

    fn flagged(build: impl FnOnce(&mut ProgramBuilder)) -> Vec<String> {
        let mut builder = ProgramBuilder::new();
        build(&mut builder);
        let program = builder.finish();
        let checkers: Vec<Box<dyn Checker>> = vec![Box::new(BoolFuncPrefixChecker)];
        run_checkers(&program, &checkers, RunOptions::default())
            .diagnostics
            .into_iter()
            .map(|diag| diag.diagnostic.message)
            .collect()
    }

    #[test]
    fn flags_unprefixed_bool_getter() {
        let messages = flagged(|b| {
            b.func("main.go", "Enabled").result("bool").finish();
        });
        assert_eq!(messages, vec![MESSAGE.to_string()]);
    }

    #[test]
    fn accepts_prefixed_and_excluded_names() {
        for name in ["IsEnabled", "hasItems", "CONTAINSKey", "Exit", "quit", "Getter"] {
            let messages = flagged(|b| {
                b.func("main.go", name).result("bool").finish();
            });
            assert!(messages.is_empty(), "{name} should not be flagged");
        }
    }

    #[test]
    fn exclusion_is_exact_not_prefix() {
        let messages = flagged(|b| {
            b.func("main.go", "Exited").result("bool").finish();
            b.func("main.go", "Quitting").result("bool").finish();
        });
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn prefix_must_lead_the_name() {
        let messages = flagged(|b| {
            b.func("main.go", "ThisIsOk").result("bool").finish();
        });
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn parameters_exempt_the_declaration() {
        let messages = flagged(|b| {
            b.func("main.go", "Validate")
                .param(&["x"], "int")
                .result("bool")
                .finish();
            b.func("main.go", "Ready").param(&[], "int").result("bool").finish();
        });
        assert!(messages.is_empty());
    }

    #[test]
    fn multiple_results_are_never_flagged() {
        let messages = flagged(|b| {
            b.func("main.go", "Lookup").result("int").result("bool").finish();
            b.func("main.go", "Both")
                .named_result(&["a", "b"], "bool")
                .finish();
        });
        assert!(messages.is_empty());
    }

    #[test]
    fn single_named_bool_result_counts_as_one() {
        let messages = flagged(|b| {
            b.func("main.go", "Ready").named_result(&["ok"], "bool").finish();
        });
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn non_primitive_or_unresolved_results_are_skipped() {
        let messages = flagged(|b| {
            b.func("main.go", "Flagged").result("Flag").finish();
            b.func("main.go", "Pointer").result("*bool").finish();
            b.func("main.go", "Unknown")
                .result_with_kind("bool", None)
                .finish();
            b.func("main.go", "Ready")
                .param_with_kind(&["x"], "mystery", None)
                .result("bool")
                .finish();
            b.func("main.go", "Count")
                .result_with_kind("int", Some(TypeKind::Named("int".to_string())))
                .finish();
        });
        assert!(messages.is_empty());
    }

    #[test]
    fn reports_at_declaration_start() {
        let mut builder = ProgramBuilder::new();
        builder.func("a.go", "Helper").body().finish();
        builder.func("a.go", "Valid").result("bool").finish();
        let program = builder.finish();
        let checkers: Vec<Box<dyn Checker>> = vec![Box::new(BoolFuncPrefixChecker)];
        let report = run_checkers(&program, &checkers, RunOptions::default());
        assert_eq!(report.diagnostics.len(), 1);
        let diag = &report.diagnostics[0];
        assert_eq!(diag.path, "a.go");
        assert_eq!(diag.diagnostic.code, "boolFuncPrefix");
        assert_eq!(diag.diagnostic.span.start.line, 4);
        assert_eq!(diag.diagnostic.span.start.column, 1);
    }

    #[test]
    fn info_carries_tags() {
        let info = BoolFuncPrefixChecker.info();
        assert!(info.has_tag(CheckerTag::Experimental));
        assert!(info.has_tag(CheckerTag::VeryOpinionated));
    }
}
