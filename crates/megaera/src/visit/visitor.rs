use crate::ast;
use crate::visit::OperationNode;
use crate::visit::TypeInfo;

/// Hooks invoked by [`walk_document()`](crate::visit::walk_document).
///
/// Every hook defaults to doing nothing. The [`TypeInfo`] passed to an
/// `enter_*` hook has already been advanced to the node being entered; the
/// one passed to a `leave_*` hook has not yet been rewound. Returning an
/// error from any hook aborts the walk.
pub trait Visitor<'doc> {
    type Error;

    fn enter_field(
        &mut self,
        _type_info: &TypeInfo<'_>,
        _field: &'doc ast::query::Field,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn leave_field(
        &mut self,
        _type_info: &TypeInfo<'_>,
        _field: &'doc ast::query::Field,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_fragment_definition(
        &mut self,
        _type_info: &TypeInfo<'_>,
        _fragment: &'doc ast::query::FragmentDefinition,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn leave_fragment_definition(
        &mut self,
        _type_info: &TypeInfo<'_>,
        _fragment: &'doc ast::query::FragmentDefinition,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_fragment_spread(
        &mut self,
        _type_info: &TypeInfo<'_>,
        _spread: &'doc ast::query::FragmentSpread,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_inline_fragment(
        &mut self,
        _type_info: &TypeInfo<'_>,
        _inline_fragment: &'doc ast::query::InlineFragment,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn leave_inline_fragment(
        &mut self,
        _type_info: &TypeInfo<'_>,
        _inline_fragment: &'doc ast::query::InlineFragment,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_operation(
        &mut self,
        _type_info: &TypeInfo<'_>,
        _operation: &OperationNode<'doc>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn leave_operation(
        &mut self,
        _type_info: &TypeInfo<'_>,
        _operation: &OperationNode<'doc>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}
