//! The resolved form of an executable document: one [`Selector`] tree per
//! operation and per fragment definition.

#[allow(clippy::module_inception)]
mod content;
mod fragment;
mod operation;
mod selector;
mod variable;

pub use content::Content;
pub use fragment::Fragment;
pub use operation::Operation;
pub use selector::Selection;
pub use selector::Selector;
pub use variable::Variable;

#[cfg(test)]
mod tests;
