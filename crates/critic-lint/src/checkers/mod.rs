//! Bundled checkers.

mod bool_func_prefix;
mod unused_param;

pub use bool_func_prefix::{has_proper_prefix, BoolFuncPrefixChecker};
pub use unused_param::UnusedParamChecker;

use crate::checker::Checker;

/// Every bundled checker, in reporting order.
pub fn default_checkers() -> Vec<Box<dyn Checker>> {
    vec![Box::new(BoolFuncPrefixChecker), Box::new(UnusedParamChecker)]
}
