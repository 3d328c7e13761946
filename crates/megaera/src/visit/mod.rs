//! Schema-aware traversal of executable documents.
//!
//! [`walk_document()`] visits every operation, fragment definition, field,
//! fragment spread, and inline fragment in source order, keeping a
//! [`TypeInfo`] up to date so that each [`Visitor`] hook can ask for the
//! GraphQL type resolved at the position being visited.

mod operation_node;
mod type_info;
mod visitor;
mod walker;

pub use operation_node::OperationNode;
pub use type_info::TypeInfo;
pub use visitor::Visitor;
pub use walker::walk_document;
