use crate::loc;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) members: Vec<String>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    /// An ordered list of the names of each member type of this union.
    ///
    /// Members added from type extensions appear after the members of the
    /// original definition.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.iter().map(|name| name.as_str()).collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
