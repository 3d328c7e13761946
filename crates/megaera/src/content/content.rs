use crate::content::Fragment;
use crate::content::Operation;
use crate::content::Selection;
use crate::content::Selector;
use crate::emitter::GenerationError;
use crate::schema::Schema;
use indexmap::IndexMap;
use indexmap::IndexSet;

/// Every operation and fragment defined by one document, resolved against a
/// [`Schema`].
///
/// Operations keep declaration order. Fragments are keyed by name and also
/// iterate in declaration order.
#[derive(Clone, Debug)]
pub struct Content<'schema> {
    pub schema: &'schema Schema,
    pub operations: Vec<Operation>,
    pub fragments: IndexMap<String, Fragment>,
}
impl<'schema> Content<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            schema,
            operations: vec![],
            fragments: IndexMap::new(),
        }
    }

    /// Every fragment reachable from `selector`, directly or through other
    /// fragments, listed in fragment declaration order.
    ///
    /// A fragment that spreads itself (directly or transitively) is listed
    /// once.
    pub fn fragment_dependencies(
        &self,
        selector: &Selector,
    ) -> Result<Vec<&str>, GenerationError> {
        let mut reached = IndexSet::new();
        self.collect_fragment_dependencies(selector, &mut reached)?;
        Ok(
            self.fragments.keys()
                .map(|name| name.as_str())
                .filter(|name| reached.contains(*name))
                .collect()
        )
    }

    fn collect_fragment_dependencies<'a>(
        &'a self,
        selector: &'a Selector,
        reached: &mut IndexSet<&'a str>,
    ) -> Result<(), GenerationError> {
        for selection in &selector.fields {
            match selection {
                Selection::Field(field) =>
                    self.collect_fragment_dependencies(field, reached)?,

                Selection::FragmentRef(fragment_name) => {
                    let fragment = self.fragments.get(fragment_name).ok_or_else(|| {
                        GenerationError::UndefinedFragment {
                            fragment_name: fragment_name.to_string(),
                            referrer: selector.name.to_string(),
                        }
                    })?;
                    if reached.insert(fragment_name.as_str()) {
                        self.collect_fragment_dependencies(&fragment.selector, reached)?;
                    }
                },
            }
        }
        for inline_fragment in &selector.inline_fragments {
            self.collect_fragment_dependencies(inline_fragment, reached)?;
        }
        Ok(())
    }

    pub fn insert_fragment(&mut self, fragment: Fragment) -> Option<Fragment> {
        self.fragments.insert(fragment.name().to_string(), fragment)
    }

    pub fn push_operation(&mut self, operation: Operation) {
        self.operations.push(operation);
    }
}
