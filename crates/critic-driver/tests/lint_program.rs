use critic_base::DiagnosticSeverity;
use critic_driver::{lint_program, lint_program_with, CriticError, LintConfig};
use critic_hir::{FuncDecl, Program, ProgramBuilder};
use critic_lint::{default_checkers, CheckContext, Checker, CheckerInfo};

fn program() -> Program {
    let mut builder = ProgramBuilder::new();
    builder.func("flags.go", "Verbose").result("bool").finish();
    builder
        .func("flags.go", "apply")
        .param(&["opts"], "Options")
        .param(&["_"], "int")
        .param(&["strict"], "bool")
        .uses(&["opts"])
        .finish();
    builder.finish()
}

#[test]
fn default_config_reports_both_checkers() {
    let config = LintConfig::from_toml_str("").expect("parse config");
    let report = lint_program(&program(), &config).expect("lint");
    let listing: Vec<String> = report
        .diagnostics
        .iter()
        .map(|diag| {
            let start = diag.diagnostic.span.start;
            format!(
                "{}:{}:{} {}",
                diag.path, start.line, start.column, diag.diagnostic.message
            )
        })
        .collect();
    insta::assert_snapshot!(listing.join("\n"), @r"
flags.go:1:1 consider to add Is/Has/Contains prefix to function name
flags.go:3:33 parameter `strict` isn't used, consider to name it as `_`
");
}

#[test]
fn parallel_config_gives_the_same_report() {
    let sequential = lint_program(&program(), &LintConfig::default()).expect("lint");
    let config = LintConfig::from_toml_str("[lint]\nparallel = true\n").expect("parse config");
    let parallel = lint_program(&program(), &config).expect("lint");
    assert_eq!(sequential, parallel);
}

#[test]
fn diagnostics_serialize_for_machine_matching() {
    let report = lint_program(&program(), &LintConfig::default()).expect("lint");
    let json = serde_json::to_value(&report.diagnostics).expect("serialize");
    assert_eq!(json[0]["path"], "flags.go");
    assert_eq!(json[0]["diagnostic"]["code"], "boolFuncPrefix");
    assert_eq!(json[1]["diagnostic"]["code"], "unusedParam");
    assert_eq!(json[1]["diagnostic"]["severity"], "warning");
    assert_eq!(json[1]["diagnostic"]["span"]["start"]["line"], 3);
}

static FRAGILE_INFO: CheckerInfo = CheckerInfo {
    name: "fragile",
    tags: &[],
    summary: "Panics on every declaration with a body",
    before: "",
    after: "",
};

struct FragileChecker;

impl Checker for FragileChecker {
    fn info(&self) -> &'static CheckerInfo {
        &FRAGILE_INFO
    }

    fn visit_func_decl(&self, _cx: &mut CheckContext<'_>, decl: &FuncDecl) {
        if decl.body.is_some() {
            panic!("no bodies allowed");
        }
    }
}

#[test]
fn faults_are_reported_unless_configured_to_fail() {
    let mut checkers = default_checkers();
    checkers.push(Box::new(FragileChecker));

    let report =
        lint_program_with(&program(), &checkers, &LintConfig::default()).expect("lint");
    assert_eq!(report.faults.len(), 1);
    assert_eq!(report.diagnostics.len(), 2);

    let config = LintConfig::from_toml_str("[lint]\nfail-on-fault = true\n").expect("parse");
    let err = lint_program_with(&program(), &checkers, &config).expect_err("fault must fail");
    let CriticError::CheckerFaults(faults) = &err else {
        panic!("expected checker faults, got {err:?}");
    };
    assert_eq!(faults.len(), 1);
    assert_eq!(faults[0].decl, "apply");
    assert_eq!(
        err.to_string(),
        "1 checker fault(s), first: checker `fragile` panicked on `apply` in flags.go: no bodies allowed"
    );
}

#[test]
fn warnings_as_errors_promotes_every_diagnostic() {
    let report = lint_program(&program(), &LintConfig::default()).expect("lint");
    assert!(!report.has_errors());

    let config =
        LintConfig::from_toml_str("[lint]\nwarnings-as-errors = true\n").expect("parse config");
    let promoted = lint_program(&program(), &config).expect("lint");
    assert!(promoted.has_errors());
    assert_eq!(promoted.diagnostics.len(), report.diagnostics.len());
    assert!(promoted
        .diagnostics
        .iter()
        .all(|diag| diag.diagnostic.severity == DiagnosticSeverity::Error));

    let json = serde_json::to_value(&promoted.diagnostics).expect("serialize");
    assert_eq!(json[0]["diagnostic"]["severity"], "error");
}

#[test]
fn trace_timing_does_not_change_the_report() {
    let quiet = lint_program(&program(), &LintConfig::default()).expect("lint");
    let config = LintConfig::from_toml_str("[lint]\ntrace-timing = true\n").expect("parse config");
    assert!(config.trace_timing_enabled());
    let traced = lint_program(&program(), &config).expect("lint");
    assert_eq!(quiet, traced);
}
