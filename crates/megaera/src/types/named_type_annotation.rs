use crate::schema::Schema;
use crate::types::GraphQLType;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_name: String,
}
impl NamedTypeAnnotation {
    /// Look up the [`GraphQLType`] this annotation names.
    ///
    /// Returns `None` when the annotation was built by hand against a name
    /// the [`Schema`] does not define.
    pub fn graphql_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        schema.lookup_type(self.type_name.as_str())
    }

    pub fn graphql_type_name(&self) -> &str {
        self.type_name.as_str()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
impl std::fmt::Display for NamedTypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            self.type_name,
            if self.nullable { "" } else { "!" },
        )
    }
}
