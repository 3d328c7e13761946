use crate::loc;

/// Represents a custom
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars) defined
/// within some [`Schema`](crate::schema::Schema).
///
/// The built-in scalars are represented by their own [`GraphQLType`]
/// variants (e.g. [`GraphQLType::Int`]) and never by a `ScalarType`.
///
/// [`GraphQLType`]: crate::types::GraphQLType
/// [`GraphQLType::Int`]: crate::types::GraphQLType::Int
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
