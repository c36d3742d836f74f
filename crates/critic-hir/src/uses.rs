use serde::Serialize;

use crate::decl::Ident;
use crate::ids::SymbolId;

/// One identifier use site and the symbol it resolves to (`ident.symbol`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Use {
    pub ident: Ident,
}

impl Use {
    pub fn symbol(&self) -> SymbolId {
        self.ident.symbol
    }
}

/// Program-wide table of identifier uses, in the order the front end recorded
/// them. Many uses may resolve to the same symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UseTable {
    uses: Vec<Use>,
}

impl UseTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, ident: Ident) {
        self.uses.push(Use { ident });
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Use> {
        self.uses.iter()
    }

    pub fn len(&self) -> usize {
        self.uses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uses.is_empty()
    }
}

impl<'a> IntoIterator for &'a UseTable {
    type Item = &'a Use;
    type IntoIter = std::slice::Iter<'a, Use>;

    fn into_iter(self) -> Self::IntoIter {
        self.uses.iter()
    }
}
