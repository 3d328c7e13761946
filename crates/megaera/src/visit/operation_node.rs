use crate::ast;
use crate::OperationKind;

/// A uniform view over the four shapes an operation definition can take in
/// the AST (`query`, `mutation`, `subscription`, and the anonymous `{ ... }`
/// shorthand).
#[derive(Clone, Debug)]
pub struct OperationNode<'doc> {
    pub definition: &'doc ast::query::OperationDefinition,
    pub kind: OperationKind,
    pub name: Option<&'doc str>,
    pub position: graphql_parser::Pos,
    pub selection_set: &'doc ast::query::SelectionSet,
    pub variable_definitions: &'doc [ast::query::VariableDefinition],
}
impl<'doc> OperationNode<'doc> {
    pub fn from_ast(definition: &'doc ast::query::OperationDefinition) -> Self {
        use ast::query::OperationDefinition;
        match definition {
            OperationDefinition::Mutation(mutation) => Self {
                definition,
                kind: OperationKind::Mutation,
                name: mutation.name.as_deref(),
                position: mutation.position,
                selection_set: &mutation.selection_set,
                variable_definitions: mutation.variable_definitions.as_slice(),
            },

            OperationDefinition::Query(query) => Self {
                definition,
                kind: OperationKind::Query,
                name: query.name.as_deref(),
                position: query.position,
                selection_set: &query.selection_set,
                variable_definitions: query.variable_definitions.as_slice(),
            },

            OperationDefinition::SelectionSet(selection_set) => Self {
                definition,
                kind: OperationKind::Query,
                name: None,
                position: selection_set.span.0,
                selection_set,
                variable_definitions: &[],
            },

            OperationDefinition::Subscription(subscription) => Self {
                definition,
                kind: OperationKind::Subscription,
                name: subscription.name.as_deref(),
                position: subscription.position,
                selection_set: &subscription.selection_set,
                variable_definitions: subscription.variable_definitions.as_slice(),
            },
        }
    }
}
