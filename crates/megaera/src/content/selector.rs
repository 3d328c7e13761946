use crate::types::TypeAnnotation;

/// One position of a selection tree.
///
/// At the root of an [`Operation`](crate::content::Operation) or
/// [`Fragment`](crate::content::Fragment) the name is the definition's own
/// name. Everywhere else it is the field's response key (its alias if one was
/// given).
#[derive(Clone, Debug, PartialEq)]
pub struct Selector {
    pub name: String,
    pub output_type: Option<TypeAnnotation>,
    pub fields: Vec<Selection>,
    pub inline_fragments: Vec<Selector>,
}
impl Selector {
    pub fn new(name: impl Into<String>, output_type: Option<TypeAnnotation>) -> Self {
        Self {
            name: name.into(),
            output_type,
            fields: vec![],
            inline_fragments: vec![],
        }
    }

    /// Names of the fragments spread directly into this selector's fields,
    /// in source order. Spreads nested in child fields or inline fragments
    /// are not included.
    pub fn fragment_refs(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().filter_map(|selection| match selection {
            Selection::FragmentRef(name) => Some(name.as_str()),
            Selection::Field(_) => None,
        })
    }

    /// A selector with neither fields nor inline fragments renders from its
    /// type alone.
    pub fn is_leaf(&self) -> bool {
        self.fields.is_empty() && self.inline_fragments.is_empty()
    }

    pub fn with_field(mut self, field: Selector) -> Self {
        self.fields.push(Selection::Field(field));
        self
    }

    pub fn with_fragment_ref(mut self, fragment_name: impl Into<String>) -> Self {
        self.fields.push(Selection::FragmentRef(fragment_name.into()));
        self
    }

    pub fn with_inline_fragment(mut self, inline_fragment: Selector) -> Self {
        self.inline_fragments.push(inline_fragment);
        self
    }
}

/// An entry of [`Selector::fields`]: either a literal field subtree or a
/// by-name reference to a fragment definition.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Selector),
    FragmentRef(String),
}
