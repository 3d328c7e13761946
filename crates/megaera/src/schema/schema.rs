use crate::ast;
use crate::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Represents a fully built and immutable GraphQL schema.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: Option<String>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Look up a type by name.
    pub fn lookup_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    /// Returns the root type for the given kind of operation, if the schema
    /// defines one.
    ///
    /// This factors in any `schema { ... }` block that overrides the default
    /// `Query`/`Mutation`/`Subscription` root type names.
    pub fn root_operation_type(&self, kind: OperationKind) -> Option<&GraphQLType> {
        let type_name = match kind {
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Query => self.query_type.as_deref(),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }?;
        self.lookup_type(type_name)
    }

    /// Resolve an AST type reference (e.g. a variable's declared type) into a
    /// [`TypeAnnotation`] against this schema.
    ///
    /// Returns `None` if the innermost named type is not defined.
    pub fn type_from_ast(&self, ast_type: &ast::query::Type) -> Option<TypeAnnotation> {
        let annot = TypeAnnotation::from_ast_type(ast_type);
        let type_name = annot.innermost_named_type_annotation().graphql_type_name();
        if self.types.contains_key(type_name) {
            Some(annot)
        } else {
            None
        }
    }

    /// Returns an [`IndexMap`] containing all types defined within this
    /// [`Schema`], in definition order.
    ///
    /// [^note] This map includes both types defined while building this
    /// [`Schema`] as well as the built-in scalar types (which come first).
    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }
}
