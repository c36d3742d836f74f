//! Deterministic construction of resolved programs.
//!
//! `ProgramBuilder` stands in for a front end: it lays every declaration out
//! as Go-style source text (`func Name(a, b int) bool {`), assigns spans from
//! that layout, allocates fresh [`SymbolId`]s for every introduced name, and
//! resolves body uses against the declaration's own parameters by name, the
//! way a scope-aware resolver would for a single function.

use critic_base::{Position, Span};

use crate::decl::{Body, Field, FieldList, FuncDecl, Ident, SourceFile, TypeExpr};
use crate::ids::{SymbolId, TypeExprId};
use crate::program::Program;
use crate::types::{BasicKind, TypeKind, TypeTable};
use crate::uses::UseTable;

#[derive(Debug, Default)]
pub struct ProgramBuilder {
    files: Vec<FileState>,
    uses: UseTable,
    types: TypeTable,
    next_symbol: u32,
    next_type_expr: u32,
}

#[derive(Debug)]
struct FileState {
    file: SourceFile,
    next_line: usize,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fresh_symbol(&mut self) -> SymbolId {
        let id = SymbolId::from_raw(self.next_symbol);
        self.next_symbol += 1;
        id
    }

    fn fresh_type_expr(&mut self) -> TypeExprId {
        let id = TypeExprId::from_raw(self.next_type_expr);
        self.next_type_expr += 1;
        id
    }

    fn file_index(&mut self, path: &str) -> usize {
        if let Some(index) = self.files.iter().position(|state| state.file.path == path) {
            return index;
        }
        self.files.push(FileState {
            file: SourceFile {
                path: path.to_string(),
                decls: Vec::new(),
            },
            next_line: 1,
        });
        self.files.len() - 1
    }

    /// Starts a function declaration appended to `path`.
    pub fn func(&mut self, path: &str, name: &str) -> FuncBuilder<'_> {
        FuncBuilder {
            program: self,
            path: path.to_string(),
            name: name.to_string(),
            params: Vec::new(),
            results: Vec::new(),
            body: None,
        }
    }

    /// Records a use of `symbol` at an explicit location, e.g. from a closure
    /// or deferred block the builder's layout does not model.
    pub fn record_use(&mut self, name: &str, symbol: SymbolId, span: Span) {
        self.uses.record(Ident {
            name: name.to_string(),
            span,
            symbol,
        });
    }

    pub fn finish(self) -> Program {
        Program {
            files: self.files.into_iter().map(|state| state.file).collect(),
            uses: self.uses,
            types: self.types,
        }
    }
}

#[derive(Debug)]
struct FieldSpec {
    names: Vec<String>,
    ty: String,
    kind: Option<TypeKind>,
}

impl FieldSpec {
    fn new(names: &[&str], ty: &str, kind: Option<TypeKind>) -> Self {
        Self {
            names: names.iter().map(|name| name.to_string()).collect(),
            ty: ty.to_string(),
            kind,
        }
    }
}

/// Resolves a type spelling the way the front end's type table would.
/// Lower-case names that are not predeclared stay unresolved.
fn resolve_type_text(text: &str) -> Option<TypeKind> {
    if let Some(kind) = BasicKind::from_name(text) {
        return Some(TypeKind::Basic(kind));
    }
    let first = text.chars().next()?;
    if matches!(first, '*' | '[')
        || text.starts_with("map[")
        || text.starts_with("func(")
        || text.starts_with("chan ")
    {
        return Some(TypeKind::Composite);
    }
    if first.is_ascii_uppercase() || text.contains('.') {
        return Some(TypeKind::Named(text.to_string()));
    }
    None
}

#[must_use = "call `finish` to add the declaration to the program"]
pub struct FuncBuilder<'a> {
    program: &'a mut ProgramBuilder,
    path: String,
    name: String,
    params: Vec<FieldSpec>,
    results: Vec<FieldSpec>,
    body: Option<Vec<String>>,
}

impl FuncBuilder<'_> {
    /// Adds a parameter group. An empty `names` slice declares an unnamed group.
    pub fn param(mut self, names: &[&str], ty: &str) -> Self {
        self.params
            .push(FieldSpec::new(names, ty, resolve_type_text(ty)));
        self
    }

    pub fn param_with_kind(mut self, names: &[&str], ty: &str, kind: Option<TypeKind>) -> Self {
        self.params.push(FieldSpec::new(names, ty, kind));
        self
    }

    /// Adds an unnamed result.
    pub fn result(mut self, ty: &str) -> Self {
        self.results.push(FieldSpec::new(&[], ty, resolve_type_text(ty)));
        self
    }

    pub fn named_result(mut self, names: &[&str], ty: &str) -> Self {
        self.results
            .push(FieldSpec::new(names, ty, resolve_type_text(ty)));
        self
    }

    pub fn result_with_kind(mut self, ty: &str, kind: Option<TypeKind>) -> Self {
        self.results.push(FieldSpec::new(&[], ty, kind));
        self
    }

    /// Gives the declaration a body.
    pub fn body(mut self) -> Self {
        self.body.get_or_insert_with(Vec::new);
        self
    }

    /// Gives the declaration a body that references `names`, one per line.
    /// Names resolve to this declaration's parameters first, then to the
    /// function itself; anything else resolves to a fresh outer symbol.
    pub fn uses(mut self, names: &[&str]) -> Self {
        self.body
            .get_or_insert_with(Vec::new)
            .extend(names.iter().map(|name| name.to_string()));
        self
    }

    pub fn finish(self) -> FuncHandle {
        let FuncBuilder {
            program,
            path,
            name,
            params,
            results,
            body,
        } = self;

        let file_index = program.file_index(&path);
        let line = program.files[file_index].next_line;
        let mut cursor = LineCursor::new(line);

        cursor.skip("func ");
        let name_ident = Ident {
            span: cursor.advance(&name),
            name: name.clone(),
            symbol: program.fresh_symbol(),
        };

        cursor.skip("(");
        let params = lay_out_fields(program, &mut cursor, params);
        cursor.skip(")");

        let results = if results.is_empty() {
            FieldList::default()
        } else if results.len() == 1 && results[0].names.is_empty() {
            cursor.skip(" ");
            lay_out_fields(program, &mut cursor, results)
        } else {
            cursor.skip(" (");
            let list = lay_out_fields(program, &mut cursor, results);
            cursor.skip(")");
            list
        };

        let (body, end, next_line) = match body {
            Some(used_names) => {
                cursor.skip(" ");
                let brace = cursor.advance("{");
                let mut body_line = line;
                for used in used_names {
                    body_line += 1;
                    let symbol = params
                        .iter()
                        .flat_map(|field| field.names.iter())
                        .find(|param| param.name == used)
                        .map(|param| param.symbol)
                        .or_else(|| (used == name_ident.name).then_some(name_ident.symbol))
                        .unwrap_or_else(|| program.fresh_symbol());
                    let span = Span::on_line(body_line, 2, used.chars().count());
                    program.record_use(&used, symbol, span);
                }
                let close = Position::new(body_line + 1, 1);
                let body = Body {
                    span: Span::new(brace.start, close),
                };
                (Some(body), close, body_line + 3)
            }
            None => (None, cursor.last_position(), line + 2),
        };

        let handle = FuncHandle {
            name: name_ident.name.clone(),
            symbol: name_ident.symbol,
            params: params
                .iter()
                .flat_map(|field| field.names.iter())
                .map(|param| (param.name.clone(), param.symbol))
                .collect(),
        };

        let state = &mut program.files[file_index];
        state.next_line = next_line;
        state.file.decls.push(FuncDecl {
            name: name_ident,
            params,
            results,
            body,
            span: Span::new(Position::new(line, 1), end),
        });
        handle
    }
}

fn lay_out_fields(
    program: &mut ProgramBuilder,
    cursor: &mut LineCursor,
    specs: Vec<FieldSpec>,
) -> FieldList {
    let mut fields = Vec::with_capacity(specs.len());
    for (index, spec) in specs.into_iter().enumerate() {
        if index > 0 {
            cursor.skip(", ");
        }
        let start = cursor.position();
        let mut names = Vec::with_capacity(spec.names.len());
        for (name_index, name) in spec.names.into_iter().enumerate() {
            if name_index > 0 {
                cursor.skip(", ");
            }
            names.push(Ident {
                span: cursor.advance(&name),
                name,
                symbol: program.fresh_symbol(),
            });
        }
        if !names.is_empty() {
            cursor.skip(" ");
        }
        let ty_span = cursor.advance(&spec.ty);
        let id = program.fresh_type_expr();
        if let Some(kind) = spec.kind {
            program.types.insert(id, kind);
        }
        fields.push(Field {
            names,
            ty: TypeExpr {
                id,
                text: spec.ty,
                span: ty_span,
            },
            span: Span::new(start, ty_span.end),
        });
    }
    FieldList { fields }
}

struct LineCursor {
    line: usize,
    column: usize,
}

impl LineCursor {
    fn new(line: usize) -> Self {
        Self { line, column: 1 }
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn last_position(&self) -> Position {
        Position::new(self.line, self.column.saturating_sub(1).max(1))
    }

    fn advance(&mut self, text: &str) -> Span {
        let len = text.chars().count();
        let span = Span::on_line(self.line, self.column, len);
        self.column += len;
        span
    }

    fn skip(&mut self, text: &str) {
        self.column += text.chars().count();
    }
}

/// Symbols allocated for one built declaration.
#[derive(Debug, Clone)]
pub struct FuncHandle {
    pub name: String,
    pub symbol: SymbolId,
    pub params: Vec<(String, SymbolId)>,
}

impl FuncHandle {
    /// Symbol of the first parameter spelled `name`.
    pub fn param(&self, name: &str) -> Option<SymbolId> {
        self.params
            .iter()
            .find(|(param, _)| param == name)
            .map(|(_, symbol)| *symbol)
    }
}
