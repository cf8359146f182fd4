//! Type reference helpers.

use crate::NameExt;
use apollo_parser::cst;

/// Extension trait for type references (`String`, `[User!]!`, ...).
pub trait TypeExt {
    /// The innermost named type, with list and non-null wrappers removed.
    fn named_type_name(&self) -> Option<String>;
}

impl TypeExt for cst::Type {
    fn named_type_name(&self) -> Option<String> {
        match self {
            cst::Type::NamedType(named) => named.name_text(),
            cst::Type::ListType(list) => list.ty()?.named_type_name(),
            cst::Type::NonNullType(non_null) => {
                if let Some(named) = non_null.named_type() {
                    named.name_text()
                } else {
                    non_null.list_type()?.ty()?.named_type_name()
                }
            }
        }
    }
}
