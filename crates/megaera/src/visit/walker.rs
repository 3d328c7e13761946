use crate::ast;
use crate::schema::Schema;
use crate::visit::OperationNode;
use crate::visit::TypeInfo;
use crate::visit::Visitor;

/// Walk every definition of `document` depth-first, in source order, calling
/// the matching [`Visitor`] hooks with type information resolved against
/// `schema`.
pub fn walk_document<'doc, V: Visitor<'doc>>(
    schema: &Schema,
    document: &'doc ast::query::Document,
    visitor: &mut V,
) -> Result<(), V::Error> {
    let mut type_info = TypeInfo::new(schema);
    for def in &document.definitions {
        match def {
            ast::query::Definition::Operation(op_def) => {
                let operation = OperationNode::from_ast(op_def);
                type_info.enter_operation(operation.kind);
                visitor.enter_operation(&type_info, &operation)?;
                walk_selection_set(&mut type_info, operation.selection_set, visitor)?;
                visitor.leave_operation(&type_info, &operation)?;
                type_info.leave();
            },

            ast::query::Definition::Fragment(fragment) => {
                let ast::query::TypeCondition::On(type_condition) =
                    &fragment.type_condition;
                type_info.enter_fragment_definition(type_condition.as_str());
                visitor.enter_fragment_definition(&type_info, fragment)?;
                walk_selection_set(&mut type_info, &fragment.selection_set, visitor)?;
                visitor.leave_fragment_definition(&type_info, fragment)?;
                type_info.leave();
            },
        }
    }
    Ok(())
}

fn walk_selection_set<'doc, V: Visitor<'doc>>(
    type_info: &mut TypeInfo<'_>,
    selection_set: &'doc ast::query::SelectionSet,
    visitor: &mut V,
) -> Result<(), V::Error> {
    for selection in &selection_set.items {
        match selection {
            ast::query::Selection::Field(field) => {
                type_info.enter_field(field.name.as_str());
                visitor.enter_field(type_info, field)?;
                walk_selection_set(type_info, &field.selection_set, visitor)?;
                visitor.leave_field(type_info, field)?;
                type_info.leave();
            },

            ast::query::Selection::FragmentSpread(spread) => {
                visitor.enter_fragment_spread(type_info, spread)?;
            },

            ast::query::Selection::InlineFragment(inline_fragment) => {
                let type_condition = inline_fragment.type_condition.as_ref()
                    .map(|ast::query::TypeCondition::On(type_name)| type_name.as_str());
                type_info.enter_inline_fragment(type_condition);
                visitor.enter_inline_fragment(type_info, inline_fragment)?;
                walk_selection_set(type_info, &inline_fragment.selection_set, visitor)?;
                visitor.leave_inline_fragment(type_info, inline_fragment)?;
                type_info.leave();
            },
        }
    }
    Ok(())
}
