#![deny(clippy::unwrap_used)]

//! Resolved program model consumed by checkers.
//!
//! Everything here is produced by a front end and handed to checkers read-only:
//! function declarations whose identifiers carry a [`SymbolId`], a global
//! [`UseTable`] mapping every identifier use to the symbol it resolves to, and a
//! [`TypeTable`] classifying type expressions.

mod builder;
mod decl;
mod ids;
mod program;
mod types;
mod uses;

pub use builder::{FuncBuilder, FuncHandle, ProgramBuilder};
pub use decl::{Body, Field, FieldList, FuncDecl, Ident, SourceFile, TypeExpr, DISCARD_NAME};
pub use ids::{SymbolId, TypeExprId};
pub use program::Program;
pub use types::{BasicKind, TypeClassifier, TypeKind, TypeTable};
pub use uses::{Use, UseTable};
