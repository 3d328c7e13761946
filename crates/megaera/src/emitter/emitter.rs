use crate::content::Content;
use crate::content::Fragment;
use crate::content::Operation;
use crate::content::Selection;
use crate::content::Selector;
use crate::content::Variable;
use crate::emitter::GenerationError;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;

type Result<T> = std::result::Result<T, GenerationError>;

const INDENT: &str = "  ";

/// Whether a rendered type may carry a trailing `| null`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nullability {
    /// Follow the nullability of the GraphQL type being rendered.
    Default,

    /// Render the outermost layer as non-null regardless of the GraphQL type.
    ForceNonNull,
}

/// Render every fragment and operation of `content` as TypeScript.
pub fn emit(content: &Content<'_>) -> Result<String> {
    Emitter::new(content).emit()
}

/// Renders resolved [`Content`] as TypeScript declarations.
pub struct Emitter<'content, 'schema> {
    content: &'content Content<'schema>,
}
impl<'content, 'schema> Emitter<'content, 'schema> {
    pub fn new(content: &'content Content<'schema>) -> Self {
        Self { content }
    }

    /// Fragments come first (in declaration order) so that every operation
    /// can interpolate the fragment constants it depends on.
    pub fn emit(&self) -> Result<String> {
        let mut sections = vec![];
        for fragment in self.content.fragments.values() {
            sections.push(self.emit_fragment(fragment)?);
        }
        for operation in &self.content.operations {
            sections.push(self.emit_operation(operation)?);
        }
        log::debug!(
            "Emitted {} fragment(s) and {} operation(s).",
            self.content.fragments.len(),
            self.content.operations.len(),
        );
        Ok(format!("{}\n", sections.join("\n\n")))
    }

    fn emit_fragment(&self, fragment: &Fragment) -> Result<String> {
        // Validates that every fragment this one spreads is defined.
        self.content.fragment_dependencies(&fragment.selector)?;

        let name = fragment.name();
        Ok(format!(
            "const {name} = `#graphql\n{}`\n\nexport type {name} = {}",
            escape_template_literal(fragment.source.as_str()),
            self.render_selector(&fragment.selector, 0, Nullability::ForceNonNull)?,
        ))
    }

    fn emit_operation(&self, operation: &Operation) -> Result<String> {
        let name = operation.name();
        if operation.source.trim().is_empty() {
            return Err(GenerationError::EmptySource {
                operation_name: name.to_string(),
            });
        }

        let mut query_src = String::new();
        for dependency in self.content.fragment_dependencies(&operation.selector)? {
            query_src.push_str(format!("${{{dependency}}}\n").as_str());
        }
        query_src.push_str(escape_template_literal(operation.source.as_str()).as_str());

        Ok(format!(
            "export const {name} = `#graphql\n{query_src}` as string & {name}\n\n\
            export type {name} = ({}) => {}",
            self.render_variables(operation.variables.as_slice())?,
            self.render_selector(&operation.selector, 0, Nullability::ForceNonNull)?,
        ))
    }

    fn render_variables(&self, variables: &[Variable]) -> Result<String> {
        if variables.is_empty() {
            return Ok(String::new());
        }

        let mut rendered = vec![];
        for variable in variables {
            rendered.push(format!(
                "{}{}: {}",
                variable.name,
                if variable.required { "" } else { "?" },
                self.render_type(variable.var_type.as_ref(), Nullability::Default)?,
            ));
        }
        Ok(format!("vars: {{ {} }}", rendered.join(", ")))
    }

    /// Render the shape selected by `selector`, indenting nested records as
    /// if the selector itself sits `depth` levels deep.
    ///
    /// A selector without fields or inline fragments renders from its type
    /// alone (see [`Emitter::render_type()`]). Otherwise the result is the
    /// intersection of a record of its fields, a reference to each spread
    /// fragment, and an alternation of its inline fragments. List layers of
    /// the selector's type wrap that intersection in `Array<...>`.
    pub fn render_selector(
        &self,
        selector: &Selector,
        depth: usize,
        nullability: Nullability,
    ) -> Result<String> {
        if selector.is_leaf() {
            return self.render_type(selector.output_type.as_ref(), nullability);
        }

        let mut parts = vec![];

        let mut field_lines = vec![];
        for selection in &selector.fields {
            if let Selection::Field(field) = selection {
                field_lines.push(format!(
                    "{}{}: {}",
                    INDENT.repeat(depth + 1),
                    field.name,
                    self.render_selector(field, depth + 1, Nullability::Default)?,
                ));
            }
        }
        if !field_lines.is_empty() {
            parts.push(format!("{{\n{}\n{}}}", field_lines.join("\n"), INDENT.repeat(depth)));
        }

        parts.extend(selector.fragment_refs().map(|name| name.to_string()));

        if !selector.inline_fragments.is_empty() {
            let mut branch_lines = vec![];
            let mut any_nullable = false;
            for branch in &selector.inline_fragments {
                any_nullable |= branch.output_type.as_ref().is_some_and(|t| t.nullable());
                branch_lines.push(format!(
                    "{}| {}",
                    INDENT.repeat(depth + 1),
                    self.render_selector(branch, depth + 1, Nullability::ForceNonNull)?,
                ));
            }
            if any_nullable {
                branch_lines.push(format!("{}| null", INDENT.repeat(depth + 1)));
            }
            parts.push(format!("(\n{}\n{})", branch_lines.join("\n"), INDENT.repeat(depth)));
        }

        let shape = parts.join(" & ");
        Ok(match &selector.output_type {
            Some(output_type) => wrap_composite(output_type, shape, nullability),
            None => shape,
        })
    }

    /// Render a GraphQL type that has no selection applied to it.
    ///
    /// An unresolved (`None`) type renders as `unknown`. Custom scalars
    /// render as `string`. Object and input object types render as a
    /// single-line record of all of their fields.
    pub fn render_type(
        &self,
        type_annotation: Option<&TypeAnnotation>,
        nullability: Nullability,
    ) -> Result<String> {
        self.render_type_impl(type_annotation, nullability, &mut vec![])
    }

    fn render_type_impl(
        &self,
        type_annotation: Option<&TypeAnnotation>,
        nullability: Nullability,
        expanding: &mut Vec<&'schema str>,
    ) -> Result<String> {
        let Some(type_annotation) = type_annotation else {
            return Ok("unknown".to_string());
        };
        let null_suffix =
            if nullability == Nullability::Default && type_annotation.nullable() {
                " | null"
            } else {
                ""
            };

        let named_annot = match type_annotation {
            TypeAnnotation::List(list_annot) => {
                let item = self.render_type_impl(
                    Some(list_annot.inner_type_annotation()),
                    Nullability::Default,
                    expanding,
                )?;
                return Ok(if item.contains(' ') {
                    format!("({item})[]{null_suffix}")
                } else {
                    format!("{item}[]{null_suffix}")
                });
            },
            TypeAnnotation::Named(named_annot) => named_annot,
        };

        let unrenderable = || GenerationError::UnrenderableType {
            type_annotation: type_annotation.to_string(),
        };
        let graphql_type = named_annot.graphql_type(self.content.schema)
            .ok_or_else(unrenderable)?;

        Ok(match graphql_type {
            GraphQLType::Bool => format!("boolean{null_suffix}"),
            GraphQLType::Float | GraphQLType::Int => format!("number{null_suffix}"),
            GraphQLType::ID
                | GraphQLType::Scalar(_)
                | GraphQLType::String => format!("string{null_suffix}"),

            GraphQLType::Enum(enum_type) => enum_type.values()
                .keys()
                .map(|value| format!("'{value}'"))
                .collect::<Vec<_>>()
                .join(" | "),

            GraphQLType::InputObject(input_type) => {
                let fields = input_type.fields().values()
                    .map(|field| (field.name(), field.type_annotation()));
                self.render_record(input_type.name(), fields, expanding)?
            },

            GraphQLType::Object(object_type) => {
                let fields = object_type.fields().values()
                    .map(|field| (field.name(), field.type_annotation()));
                self.render_record(object_type.name(), fields, expanding)?
            },

            GraphQLType::Interface(_) | GraphQLType::Union(_) =>
                return Err(unrenderable()),
        })
    }

    fn render_record(
        &self,
        type_name: &'schema str,
        fields: impl Iterator<Item = (&'schema str, &'schema TypeAnnotation)>,
        expanding: &mut Vec<&'schema str>,
    ) -> Result<String> {
        if expanding.contains(&type_name) {
            return Ok("unknown".to_string());
        }

        expanding.push(type_name);
        let mut rendered = vec![];
        for (field_name, field_type) in fields {
            let field_type = self.render_type_impl(
                Some(field_type),
                Nullability::Default,
                expanding,
            )?;
            rendered.push(format!("{field_name}: {field_type}"));
        }
        expanding.pop();

        Ok(format!("{{{}}}", rendered.join(", ")))
    }
}

/// Wrap a rendered selection shape in one `Array<...>` per list layer of
/// `output_type`, adding `| null` to each nullable layer.
fn wrap_composite(
    output_type: &TypeAnnotation,
    shape: String,
    nullability: Nullability,
) -> String {
    let null_suffix =
        if nullability == Nullability::Default && output_type.nullable() {
            " | null"
        } else {
            ""
        };

    match output_type {
        TypeAnnotation::List(list_annot) => format!(
            "Array<{}>{null_suffix}",
            wrap_composite(list_annot.inner_type_annotation(), shape, Nullability::Default),
        ),
        TypeAnnotation::Named(_) => format!("{shape}{null_suffix}"),
    }
}

fn escape_template_literal(source: &str) -> String {
    source
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}
