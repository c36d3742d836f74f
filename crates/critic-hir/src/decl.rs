use critic_base::Span;
use serde::Serialize;

use crate::ids::{SymbolId, TypeExprId};

/// Binding name that marks a parameter as intentionally unused.
pub const DISCARD_NAME: &str = "_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ident {
    pub name: String,
    pub span: Span,
    pub symbol: SymbolId,
}

impl Ident {
    pub fn is_discard(&self) -> bool {
        self.name == DISCARD_NAME
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeExpr {
    pub id: TypeExprId,
    /// Source spelling, kept for messages and debugging only.
    pub text: String,
    pub span: Span,
}

/// One parameter or result group, e.g. `a, b int`. `names` is empty for an
/// unnamed group such as the `int` in `func(int)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub names: Vec<Ident>,
    pub ty: TypeExpr,
    pub span: Span,
}

impl Field {
    pub fn is_unnamed(&self) -> bool {
        self.names.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldList {
    pub fields: Vec<Field>,
}

impl FieldList {
    /// Number of declared entries: every name counts, and an unnamed group
    /// counts once.
    pub fn num_fields(&self) -> usize {
        self.fields
            .iter()
            .map(|field| field.names.len().max(1))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Body {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuncDecl {
    pub name: Ident,
    pub params: FieldList,
    pub results: FieldList,
    /// `None` for declarations without an implementation (external or
    /// interface signatures).
    pub body: Option<Body>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    pub path: String,
    pub decls: Vec<FuncDecl>,
}
