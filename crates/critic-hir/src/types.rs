use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::decl::TypeExpr;
use crate::ids::TypeExprId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BasicKind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    String,
}

impl BasicKind {
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "bool" => BasicKind::Bool,
            "int" => BasicKind::Int,
            "int8" => BasicKind::Int8,
            "int16" => BasicKind::Int16,
            "int32" | "rune" => BasicKind::Int32,
            "int64" => BasicKind::Int64,
            "uint" => BasicKind::Uint,
            "uint8" | "byte" => BasicKind::Uint8,
            "uint16" => BasicKind::Uint16,
            "uint32" => BasicKind::Uint32,
            "uint64" => BasicKind::Uint64,
            "float32" => BasicKind::Float32,
            "float64" => BasicKind::Float64,
            "string" => BasicKind::String,
            _ => return None,
        };
        Some(kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TypeKind {
    Basic(BasicKind),
    /// A declared type; never the primitive even when its underlying type is.
    Named(String),
    /// Pointers, slices, maps, function types and the like.
    Composite,
}

/// Type information exposed by the front end.
pub trait TypeClassifier {
    /// Resolved type of `expr`, or `None` if the front end could not resolve it.
    fn type_of(&self, expr: &TypeExpr) -> Option<&TypeKind>;

    /// Whether `expr` is the primitive boolean type. Unresolved types are not.
    fn is_bool(&self, expr: &TypeExpr) -> bool {
        matches!(self.type_of(expr), Some(TypeKind::Basic(BasicKind::Bool)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeTable {
    kinds: FxHashMap<TypeExprId, TypeKind>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: TypeExprId, kind: TypeKind) {
        self.kinds.insert(id, kind);
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl TypeClassifier for TypeTable {
    fn type_of(&self, expr: &TypeExpr) -> Option<&TypeKind> {
        self.kinds.get(&expr.id)
    }
}
