use critic_base::{Diagnostic, FileDiagnostic, Span};
use critic_hir::{FuncDecl, Program, SourceFile, TypeClassifier, TypeExpr, UseTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckerTag {
    Experimental,
    VeryOpinionated,
}

/// Static description of a checker. Tags are informational; selecting
/// checkers by tag is up to the embedder.
#[derive(Debug)]
pub struct CheckerInfo {
    pub name: &'static str,
    pub tags: &'static [CheckerTag],
    pub summary: &'static str,
    pub before: &'static str,
    pub after: &'static str,
}

impl CheckerInfo {
    pub fn has_tag(&self, tag: CheckerTag) -> bool {
        self.tags.contains(&tag)
    }
}

pub trait Checker: Send + Sync {
    fn info(&self) -> &'static CheckerInfo;

    /// Called once per function declaration. Checkers report through `cx`
    /// and never mutate the program.
    fn visit_func_decl(&self, cx: &mut CheckContext<'_>, decl: &FuncDecl);
}

/// What a checker sees while visiting one declaration.
pub struct CheckContext<'a> {
    program: &'a Program,
    file: &'a SourceFile,
    code: &'static str,
    emitted: Vec<FileDiagnostic>,
}

impl<'a> CheckContext<'a> {
    pub(crate) fn new(program: &'a Program, file: &'a SourceFile, code: &'static str) -> Self {
        Self {
            program,
            file,
            code,
            emitted: Vec::new(),
        }
    }

    pub fn uses(&self) -> &'a UseTable {
        &self.program.uses
    }

    pub fn is_bool(&self, ty: &TypeExpr) -> bool {
        self.program.types.is_bool(ty)
    }

    /// Reports a warning at `span`, tagged with the running checker's name.
    pub fn warn(&mut self, span: Span, message: impl Into<String>) {
        let diagnostic = Diagnostic::warning(self.code, message, span);
        tracing::trace!(
            checker = self.code,
            path = %self.file.path,
            line = span.start.line,
            column = span.start.column,
            message = %diagnostic.message,
            "diagnostic"
        );
        self.emitted.push(FileDiagnostic {
            path: self.file.path.clone(),
            diagnostic,
        });
    }

    pub(crate) fn into_emitted(self) -> Vec<FileDiagnostic> {
        self.emitted
    }
}
