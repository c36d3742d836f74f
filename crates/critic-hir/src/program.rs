use crate::decl::{FuncDecl, SourceFile};
use crate::types::TypeTable;
use crate::uses::UseTable;

/// A fully resolved program: declarations per file, plus the program-wide use
/// and type tables.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub files: Vec<SourceFile>,
    pub uses: UseTable,
    pub types: TypeTable,
}

impl Program {
    /// Every declaration paired with its file, in file order then
    /// declaration order.
    pub fn decls(&self) -> impl Iterator<Item = (&SourceFile, &FuncDecl)> {
        self.files
            .iter()
            .flat_map(|file| file.decls.iter().map(move |decl| (file, decl)))
    }
}
