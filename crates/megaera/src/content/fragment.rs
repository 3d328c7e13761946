use crate::content::Selector;
use crate::loc;

#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub selector: Selector,
    pub type_condition: String,

    /// The fragment definition printed back to GraphQL source.
    pub source: String,
    pub def_location: loc::FilePosition,
}
impl Fragment {
    pub fn name(&self) -> &str {
        self.selector.name.as_str()
    }
}
