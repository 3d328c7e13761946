use crate::ast;
use crate::content::Content;
use crate::content::Fragment;
use crate::content::Operation;
use crate::content::Selection;
use crate::content::Selector;
use crate::content::Variable;
use crate::loc;
use crate::OperationKind;
use crate::resolver::DocumentError;
use crate::schema::Schema;
use crate::visit::OperationNode;
use crate::visit::TypeInfo;
use crate::visit::Visitor;
use crate::visit::walk_document;
use std::path::Path;

type Result<T> = std::result::Result<T, DocumentError>;

/// Resolve every operation and fragment definition of `document` into a
/// [`Selector`] tree typed against `schema`.
///
/// `file_path` is only used to label source locations in errors and in the
/// resulting [`Content`].
pub fn resolve<'schema>(
    schema: &'schema Schema,
    document: &ast::query::Document,
    file_path: Option<&Path>,
) -> Result<Content<'schema>> {
    let mut resolver = Resolver {
        content: Content::new(schema),
        file_path,
        stack: vec![],
    };
    walk_document(schema, document, &mut resolver)?;
    log::debug!(
        "Resolved {} operation(s) and {} fragment(s).",
        resolver.content.operations.len(),
        resolver.content.fragments.len(),
    );
    Ok(resolver.content)
}

/// Parse `document_src` and [`resolve()`] it.
pub fn resolve_str<'schema>(
    schema: &'schema Schema,
    document_src: &str,
    file_path: Option<&Path>,
) -> Result<Content<'schema>> {
    let document = ast::query::parse(document_src)
        .map_err(|err| DocumentError::ParseError {
            file: file_path.map(|path| path.to_path_buf()),
            err: err.to_string(),
        })?;
    resolve(schema, &document, file_path)
}

enum Scope {
    Field,
    Fragment {
        def_location: loc::FilePosition,
        source: String,
        type_condition: String,
    },
    InlineFragment,
    Operation {
        def_location: loc::FilePosition,
        kind: OperationKind,
        source: String,
        variables: Vec<Variable>,
    },
}

/// An open scope of the walk along with the selector being built for it.
struct Frame {
    scope: Scope,
    selector: Selector,
}

struct Resolver<'schema, 'path> {
    content: Content<'schema>,
    file_path: Option<&'path Path>,
    stack: Vec<Frame>,
}
impl<'schema, 'path> Resolver<'schema, 'path> {
    fn check_unique_name(
        &self,
        name: &str,
        def_location: &loc::FilePosition,
    ) -> Result<()> {
        let first_location =
            self.content.operations.iter()
                .find(|op| op.name() == name)
                .map(|op| &op.def_location)
                .or_else(|| {
                    self.content.fragments.get(name)
                        .map(|fragment| &fragment.def_location)
                });

        match first_location {
            Some(first_location) => Err(DocumentError::DuplicateDefinition {
                name: name.to_string(),
                first_location: first_location.clone(),
                second_location: def_location.clone(),
            }),
            None => Ok(()),
        }
    }

    fn file_position(&self, pos: graphql_parser::Pos) -> loc::FilePosition {
        loc::FilePosition::from_pos(self.file_path, pos)
    }

    fn pop_frame(&mut self) -> Frame {
        match self.stack.pop() {
            Some(frame) => frame,
            None => unreachable!("leaving a scope that was never entered"),
        }
    }

    fn top_selector(&mut self) -> &mut Selector {
        match self.stack.last_mut() {
            Some(frame) => &mut frame.selector,
            None => unreachable!("selections only occur inside a definition"),
        }
    }
}
impl<'doc> Visitor<'doc> for Resolver<'_, '_> {
    type Error = DocumentError;

    fn enter_field(
        &mut self,
        type_info: &TypeInfo<'_>,
        field: &'doc ast::query::Field,
    ) -> Result<()> {
        let name = field.alias.as_ref().unwrap_or(&field.name);
        self.stack.push(Frame {
            scope: Scope::Field,
            selector: Selector::new(name, type_info.current_type().cloned()),
        });
        Ok(())
    }

    fn leave_field(
        &mut self,
        _type_info: &TypeInfo<'_>,
        _field: &'doc ast::query::Field,
    ) -> Result<()> {
        let frame = self.pop_frame();
        self.top_selector().fields.push(Selection::Field(frame.selector));
        Ok(())
    }

    fn enter_fragment_definition(
        &mut self,
        type_info: &TypeInfo<'_>,
        fragment: &'doc ast::query::FragmentDefinition,
    ) -> Result<()> {
        let def_location = self.file_position(fragment.position);
        self.check_unique_name(fragment.name.as_str(), &def_location)?;

        let ast::query::TypeCondition::On(type_condition) = &fragment.type_condition;
        self.stack.push(Frame {
            scope: Scope::Fragment {
                def_location,
                source: fragment.to_string().trim_end().to_string(),
                type_condition: type_condition.to_string(),
            },
            selector: Selector::new(
                fragment.name.as_str(),
                type_info.current_type().cloned(),
            ),
        });
        Ok(())
    }

    fn leave_fragment_definition(
        &mut self,
        _type_info: &TypeInfo<'_>,
        _fragment: &'doc ast::query::FragmentDefinition,
    ) -> Result<()> {
        let Frame { scope, selector } = self.pop_frame();
        if let Scope::Fragment { def_location, source, type_condition } = scope {
            log::debug!("Resolved fragment `{}` on `{type_condition}`.", selector.name);
            self.content.insert_fragment(Fragment {
                selector,
                type_condition,
                source,
                def_location,
            });
        }
        Ok(())
    }

    fn enter_fragment_spread(
        &mut self,
        _type_info: &TypeInfo<'_>,
        spread: &'doc ast::query::FragmentSpread,
    ) -> Result<()> {
        self.top_selector().fields.push(
            Selection::FragmentRef(spread.fragment_name.to_string())
        );
        Ok(())
    }

    fn enter_inline_fragment(
        &mut self,
        type_info: &TypeInfo<'_>,
        inline_fragment: &'doc ast::query::InlineFragment,
    ) -> Result<()> {
        let Some(ast::query::TypeCondition::On(type_name)) =
            &inline_fragment.type_condition else {
            return Err(DocumentError::MissingTypeCondition {
                location: self.file_position(inline_fragment.position),
            });
        };
        self.stack.push(Frame {
            scope: Scope::InlineFragment,
            selector: Selector::new(type_name, type_info.current_type().cloned()),
        });
        Ok(())
    }

    fn leave_inline_fragment(
        &mut self,
        _type_info: &TypeInfo<'_>,
        _inline_fragment: &'doc ast::query::InlineFragment,
    ) -> Result<()> {
        let frame = self.pop_frame();
        self.top_selector().inline_fragments.push(frame.selector);
        Ok(())
    }

    fn enter_operation(
        &mut self,
        type_info: &TypeInfo<'_>,
        operation: &OperationNode<'doc>,
    ) -> Result<()> {
        let def_location = self.file_position(operation.position);
        let Some(name) = operation.name else {
            return Err(DocumentError::MissingName {
                kind: operation.kind,
                location: def_location,
            });
        };
        self.check_unique_name(name, &def_location)?;

        let schema = type_info.schema();
        let variables = operation.variable_definitions.iter().map(|var_def| {
            let non_null = matches!(var_def.var_type, ast::query::Type::NonNullType(_));
            Variable {
                name: var_def.name.to_string(),
                var_type: schema.type_from_ast(&var_def.var_type),
                required: non_null && var_def.default_value.is_none(),
            }
        }).collect();

        self.stack.push(Frame {
            scope: Scope::Operation {
                def_location,
                kind: operation.kind,
                source: operation.definition.to_string().trim_end().to_string(),
                variables,
            },
            selector: Selector::new(name, type_info.current_type().cloned()),
        });
        Ok(())
    }

    fn leave_operation(
        &mut self,
        _type_info: &TypeInfo<'_>,
        _operation: &OperationNode<'doc>,
    ) -> Result<()> {
        let Frame { scope, selector } = self.pop_frame();
        if let Scope::Operation { def_location, kind, source, variables } = scope {
            log::debug!("Resolved {} `{}`.", kind.keyword(), selector.name);
            self.content.push_operation(Operation {
                kind,
                selector,
                variables,
                source,
                def_location,
            });
        }
        Ok(())
    }
}
