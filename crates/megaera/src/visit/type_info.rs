use crate::OperationKind;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;

/// Tracks the GraphQL type resolved at the current position of a document
/// walk.
///
/// Two parallel stacks are maintained: the output type of each open scope
/// (an operation, fragment definition, field, or inline fragment) and the
/// composite type whose fields may be selected inside that scope.
#[derive(Debug)]
pub struct TypeInfo<'schema> {
    parent_type_stack: Vec<Option<&'schema GraphQLType>>,
    schema: &'schema Schema,
    type_stack: Vec<Option<TypeAnnotation>>,
}
impl<'schema> TypeInfo<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            parent_type_stack: vec![],
            schema,
            type_stack: vec![],
        }
    }

    /// The output type resolved for the innermost open scope, or `None` when
    /// that position could not be resolved against the schema.
    pub fn current_type(&self) -> Option<&TypeAnnotation> {
        self.type_stack.last().and_then(|type_| type_.as_ref())
    }

    /// The composite type whose fields are selectable within the innermost
    /// open scope.
    pub fn parent_type(&self) -> Option<&'schema GraphQLType> {
        self.parent_type_stack.last().copied().flatten()
    }

    pub fn schema(&self) -> &'schema Schema {
        self.schema
    }

    pub(crate) fn enter_field(&mut self, field_name: &str) {
        let field_type =
            if field_name == "__typename" {
                Some(TypeAnnotation::named("String", false))
            } else {
                self.parent_type()
                    .and_then(|parent_type| parent_type.fields())
                    .and_then(|fields| fields.get(field_name))
                    .map(|field| field.type_annotation().clone())
            };
        self.push(field_type);
    }

    pub(crate) fn enter_fragment_definition(&mut self, type_condition: &str) {
        let fragment_type = self.schema.lookup_type(type_condition)
            .map(|_| TypeAnnotation::named(type_condition, true));
        self.push(fragment_type);
    }

    /// A branch of an inline fragment is only taken once the runtime object
    /// matched its type condition, so the condition's type is non-null here.
    pub(crate) fn enter_inline_fragment(&mut self, type_condition: Option<&str>) {
        let fragment_type = match type_condition {
            Some(type_name) => self.schema.lookup_type(type_name)
                .map(|_| TypeAnnotation::named(type_name, false)),
            None => self.current_type().cloned(),
        };
        self.push(fragment_type);
    }

    pub(crate) fn enter_operation(&mut self, kind: OperationKind) {
        let root_type = self.schema.root_operation_type(kind)
            .map(|root_type| TypeAnnotation::named(root_type.name(), true));
        self.push(root_type);
    }

    pub(crate) fn leave(&mut self) {
        self.type_stack.pop();
        self.parent_type_stack.pop();
    }

    fn push(&mut self, type_: Option<TypeAnnotation>) {
        let composite_type = type_.as_ref()
            .and_then(|annot| {
                annot.innermost_named_type_annotation().graphql_type(self.schema)
            })
            .filter(|graphql_type| graphql_type.is_composite());
        log::trace!(
            "Entering scope typed `{}`.",
            type_.as_ref().map_or("<unknown>".to_string(), |t| t.to_string()),
        );
        self.parent_type_stack.push(composite_type);
        self.type_stack.push(type_);
    }
}
