/// The kind of SDL definition a [`GraphQLType`](crate::types::GraphQLType)
/// comes from. Built-in scalars are [`GraphQLTypeKind::Scalar`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphQLTypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl GraphQLTypeKind {
    /// The keyword that introduces (or, after `extend`, extends) a definition
    /// of this kind.
    pub fn sdl_keyword(&self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::InputObject => "input",
            Self::Interface => "interface",
            Self::Object => "type",
            Self::Scalar => "scalar",
            Self::Union => "union",
        }
    }
}
impl std::fmt::Display for GraphQLTypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.sdl_keyword())
    }
}
