use crate::content::Selector;
use crate::content::Variable;
use crate::loc;
use crate::OperationKind;

#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub kind: OperationKind,
    pub selector: Selector,
    pub variables: Vec<Variable>,

    /// The operation definition printed back to GraphQL source.
    pub source: String,
    pub def_location: loc::FilePosition,
}
impl Operation {
    pub fn name(&self) -> &str {
        self.selector.name.as_str()
    }
}
