use crate::types::TypeAnnotation;

/// A variable declared by an operation.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub name: String,
    pub var_type: Option<TypeAnnotation>,

    /// True when the caller must supply this variable: its type is non-null
    /// and the operation gives it no default value.
    pub required: bool,
}
