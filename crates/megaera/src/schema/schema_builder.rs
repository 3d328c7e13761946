use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::OperationKind;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [`Schema`] from one or more SDL sources.
///
/// Type extensions are collected while loading and applied when
/// [`SchemaBuilder::build()`] is called, so an `extend type` may appear in a
/// source loaded before the one that defines the type.
#[derive(Debug)]
pub struct SchemaBuilder {
    extensions: Vec<(loc::FilePosition, ast::schema::TypeExtension)>,
    mutation_type: Option<NamedTypeDefLocation>,
    query_type: Option<NamedTypeDefLocation>,
    str_load_counter: u16,
    subscription_type: Option<NamedTypeDefLocation>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        for (ext_location, ext) in std::mem::take(&mut self.extensions) {
            self.apply_type_extension(ext_location, ext)?;
        }

        self.check_type_references()?;

        let query_type = self.resolve_root_type_name(
            OperationKind::Query,
            self.query_type.clone(),
        )?;
        let mutation_type = self.resolve_root_type_name(
            OperationKind::Mutation,
            self.mutation_type.clone(),
        )?;
        let subscription_type = self.resolve_root_type_name(
            OperationKind::Subscription,
            self.subscription_type.clone(),
        )?;

        log::debug!(
            "Built schema with {} types (query: {query_type:?}, mutation: \
            {mutation_type:?}, subscription: {subscription_type:?}).",
            self.types.len(),
        );

        Ok(Schema {
            mutation_type,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        Self::new().load_file(file_path)
    }

    pub fn from_str(
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        Self::new().load_str(file_path, content)
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(Some(file_path), file_content)?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path.to_path_buf()
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc = ast::schema::parse(content.as_ref())
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            })?;

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    pub fn new() -> Self {
        Self {
            extensions: vec![],
            mutation_type: None,
            query_type: None,
            str_load_counter: 0,
            subscription_type: None,
            types: IndexMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    fn add_new_type(
        &mut self,
        type_name: &str,
        type_loc: &loc::FilePosition,
        type_: GraphQLType,
    ) -> Result<()> {
        if let Some(conflicting_type) = self.types.get(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: conflicting_type.def_location(),
                def2: type_loc.to_owned().into(),
            });
        }

        log::trace!("Registered `{type_name}` ({}).", type_.type_kind());
        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    fn apply_type_extension(
        &mut self,
        ext_location: loc::FilePosition,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;
        let file_path = ext_location.file.clone();
        let ext_type_name = match &ext {
            TypeExtension::Enum(ext) => ext.name.as_str(),
            TypeExtension::InputObject(ext) => ext.name.as_str(),
            TypeExtension::Interface(ext) => ext.name.as_str(),
            TypeExtension::Object(ext) => ext.name.as_str(),
            TypeExtension::Scalar(ext) => ext.name.as_str(),
            TypeExtension::Union(ext) => ext.name.as_str(),
        }.to_string();

        let Some(existing_type) = self.types.get_mut(ext_type_name.as_str()) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name: ext_type_name,
                extension_location: ext_location,
            });
        };

        match (existing_type, ext) {
            (GraphQLType::Enum(enum_type), TypeExtension::Enum(ext)) => {
                for value in ext.values {
                    add_enum_value(enum_type, file_path.as_deref(), value)?;
                }
            },

            (GraphQLType::InputObject(input_type), TypeExtension::InputObject(ext)) => {
                for field in ext.fields {
                    add_input_field(input_type, file_path.as_deref(), field)?;
                }
            },

            (GraphQLType::Interface(iface_type), TypeExtension::Interface(ext)) => {
                for field in ext.fields {
                    add_field(&mut iface_type.0, file_path.as_deref(), field)?;
                }
            },

            (GraphQLType::Object(obj_type), TypeExtension::Object(ext)) => {
                obj_type.0.interfaces.extend(ext.implements_interfaces);
                for field in ext.fields {
                    add_field(&mut obj_type.0, file_path.as_deref(), field)?;
                }
            },

            // Scalar extensions only add directives, which are not tracked.
            (GraphQLType::Scalar(_), TypeExtension::Scalar(_)) => (),

            (GraphQLType::Union(union_type), TypeExtension::Union(ext)) => {
                union_type.members.extend(ext.types);
            },

            (existing_type, _) => return Err(SchemaBuildError::InvalidExtensionType {
                type_name: ext_type_name.to_owned(),
                type_kind: existing_type.type_kind(),
                extension_location: ext_location,
            }),
        }

        Ok(())
    }

    /// Every named type referenced by a field, input field, union member, or
    /// implemented interface must be defined somewhere in the schema.
    fn check_type_references(&self) -> Result<()> {
        let check = |type_name: &str, referrer: String, location: &loc::FilePosition| {
            if self.types.contains_key(type_name) {
                Ok(())
            } else {
                Err(SchemaBuildError::UndefinedTypeReference {
                    type_name: type_name.to_string(),
                    referrer,
                    location: location.to_owned(),
                })
            }
        };

        for type_ in self.types.values() {
            match type_ {
                GraphQLType::InputObject(input_type) => {
                    for field in input_type.fields().values() {
                        check(
                            field.type_annotation()
                                .innermost_named_type_annotation()
                                .graphql_type_name(),
                            format!("{}.{}", input_type.name(), field.name()),
                            field.def_location(),
                        )?;
                    }
                },

                GraphQLType::Interface(InterfaceType(data))
                | GraphQLType::Object(ObjectType(data)) => {
                    for iface_name in &data.interfaces {
                        check(iface_name, data.name.to_owned(), &data.def_location)?;
                    }
                    for field in data.fields.values() {
                        check(
                            field.type_annotation()
                                .innermost_named_type_annotation()
                                .graphql_type_name(),
                            format!("{}.{}", data.name, field.name()),
                            field.def_location(),
                        )?;
                    }
                },

                GraphQLType::Union(union_type) => {
                    for member_name in union_type.member_type_names() {
                        check(
                            member_name,
                            union_type.name().to_string(),
                            union_type.def_location(),
                        )?;
                    }
                },

                GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String => (),
            }
        }

        Ok(())
    }

    fn resolve_root_type_name(
        &self,
        operation: OperationKind,
        explicit_def: Option<NamedTypeDefLocation>,
    ) -> Result<Option<String>> {
        if let Some(def) = explicit_def {
            return match self.types.get(def.type_name.as_str()) {
                Some(GraphQLType::Object(_)) => Ok(Some(def.type_name)),
                _ => Err(SchemaBuildError::UndefinedOperationType {
                    operation,
                    type_name: def.type_name,
                    location: def.def_location,
                }),
            };
        }

        let default_name = operation.to_string();
        Ok(match self.types.get(default_name.as_str()) {
            Some(GraphQLType::Object(_)) => Some(default_name),
            _ => None,
        })
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                let ext_location = loc::FilePosition::from_pos(
                    Some(file_path),
                    type_extension_position(&type_ext),
                );
                self.extensions.push((ext_location, type_ext));
                Ok(())
            },
            // Directive definitions have no bearing on the shape of
            // selected data.
            Definition::DirectiveDefinition(_) => Ok(()),
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: &Path,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let root_defs = [
            (OperationKind::Query, schema_def.query),
            (OperationKind::Mutation, schema_def.mutation),
            (OperationKind::Subscription, schema_def.subscription),
        ];

        for (operation, type_name) in root_defs {
            let Some(type_name) = type_name else {
                continue;
            };
            let typedef_loc = NamedTypeDefLocation::from_pos(
                type_name,
                file_path,
                schema_def.position,
            );
            let slot = match operation {
                OperationKind::Query => &mut self.query_type,
                OperationKind::Mutation => &mut self.mutation_type,
                OperationKind::Subscription => &mut self.subscription_type,
            };
            if let Some(existing_typedef_loc) = slot {
                return Err(SchemaBuildError::DuplicateOperationTypeDefinition {
                    operation,
                    location1: existing_typedef_loc.def_location.clone(),
                    location2: typedef_loc.def_location,
                });
            }
            *slot = Some(typedef_loc);
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: &Path,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        match type_def {
            TypeDefinition::Enum(enum_def) => {
                let def_location = loc::FilePosition::from_pos(
                    Some(file_path),
                    enum_def.position,
                );
                let mut enum_type = EnumType {
                    def_location: def_location.clone(),
                    name: enum_def.name.to_owned(),
                    values: IndexMap::new(),
                };
                for value in enum_def.values {
                    add_enum_value(&mut enum_type, Some(file_path), value)?;
                }
                self.add_new_type(
                    enum_def.name.as_str(),
                    &def_location,
                    GraphQLType::Enum(enum_type),
                )
            },

            TypeDefinition::InputObject(inputobj_def) => {
                let def_location = loc::FilePosition::from_pos(
                    Some(file_path),
                    inputobj_def.position,
                );
                let mut input_type = InputObjectType {
                    def_location: def_location.clone(),
                    fields: IndexMap::new(),
                    name: inputobj_def.name.to_owned(),
                };
                for field in inputobj_def.fields {
                    add_input_field(&mut input_type, Some(file_path), field)?;
                }
                self.add_new_type(
                    inputobj_def.name.as_str(),
                    &def_location,
                    GraphQLType::InputObject(input_type),
                )
            },

            TypeDefinition::Interface(iface_def) => {
                let def_location = loc::FilePosition::from_pos(
                    Some(file_path),
                    iface_def.position,
                );
                let mut data = ObjectOrInterfaceTypeData {
                    def_location: def_location.clone(),
                    fields: IndexMap::new(),
                    interfaces: vec![],
                    name: iface_def.name.to_owned(),
                };
                for field in iface_def.fields {
                    add_field(&mut data, Some(file_path), field)?;
                }
                self.add_new_type(
                    iface_def.name.as_str(),
                    &def_location,
                    GraphQLType::Interface(InterfaceType(data)),
                )
            },

            TypeDefinition::Object(obj_def) => {
                let def_location = loc::FilePosition::from_pos(
                    Some(file_path),
                    obj_def.position,
                );
                let mut data = ObjectOrInterfaceTypeData {
                    def_location: def_location.clone(),
                    fields: IndexMap::new(),
                    interfaces: obj_def.implements_interfaces,
                    name: obj_def.name.to_owned(),
                };
                for field in obj_def.fields {
                    add_field(&mut data, Some(file_path), field)?;
                }
                self.add_new_type(
                    obj_def.name.as_str(),
                    &def_location,
                    GraphQLType::Object(ObjectType(data)),
                )
            },

            TypeDefinition::Scalar(scalar_def) => {
                let def_location = loc::FilePosition::from_pos(
                    Some(file_path),
                    scalar_def.position,
                );
                self.add_new_type(
                    scalar_def.name.as_str(),
                    &def_location,
                    GraphQLType::Scalar(ScalarType {
                        def_location: def_location.clone(),
                        name: scalar_def.name.to_owned(),
                    }),
                )
            },

            TypeDefinition::Union(union_def) => {
                let def_location = loc::FilePosition::from_pos(
                    Some(file_path),
                    union_def.position,
                );
                self.add_new_type(
                    union_def.name.as_str(),
                    &def_location,
                    GraphQLType::Union(UnionType {
                        def_location: def_location.clone(),
                        members: union_def.types,
                        name: union_def.name.to_owned(),
                    }),
                )
            },
        }
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn add_enum_value(
    enum_type: &mut EnumType,
    file_path: Option<&Path>,
    value: ast::schema::EnumValue,
) -> Result<()> {
    let def_location = loc::FilePosition::from_pos(file_path, value.position);
    if let Some(existing_value) = enum_type.values.get(value.name.as_str()) {
        return Err(SchemaBuildError::DuplicateEnumValueDefinition {
            enum_name: enum_type.name.to_owned(),
            value_name: value.name,
            value_def1: existing_value.def_location.clone(),
            value_def2: def_location,
        });
    }
    enum_type.values.insert(value.name.to_owned(), EnumValue {
        def_location,
        name: value.name,
    });
    Ok(())
}

fn add_field(
    data: &mut ObjectOrInterfaceTypeData,
    file_path: Option<&Path>,
    field: ast::schema::Field,
) -> Result<()> {
    let def_location = loc::FilePosition::from_pos(file_path, field.position);
    if let Some(existing_field) = data.fields.get(field.name.as_str()) {
        return Err(SchemaBuildError::DuplicateFieldDefinition {
            type_name: data.name.to_owned(),
            field_name: field.name,
            field_def1: existing_field.def_location.clone(),
            field_def2: def_location,
        });
    }
    data.fields.insert(field.name.to_owned(), Field {
        def_location,
        name: field.name,
        parent_type_name: data.name.to_owned(),
        type_annotation: TypeAnnotation::from_ast_type(&field.field_type),
    });
    Ok(())
}

fn add_input_field(
    input_type: &mut InputObjectType,
    file_path: Option<&Path>,
    field: ast::schema::InputValue,
) -> Result<()> {
    let def_location = loc::FilePosition::from_pos(file_path, field.position);
    if let Some(existing_field) = input_type.fields.get(field.name.as_str()) {
        return Err(SchemaBuildError::DuplicateFieldDefinition {
            type_name: input_type.name.to_owned(),
            field_name: field.name,
            field_def1: existing_field.def_location.clone(),
            field_def2: def_location,
        });
    }
    input_type.fields.insert(field.name.to_owned(), InputField {
        def_location,
        has_default_value: field.default_value.is_some(),
        name: field.name,
        type_annotation: TypeAnnotation::from_ast_type(&field.value_type),
    });
    Ok(())
}

fn type_extension_position(ext: &ast::schema::TypeExtension) -> graphql_parser::Pos {
    use ast::schema::TypeExtension;
    match ext {
        TypeExtension::Enum(ext) => ext.position,
        TypeExtension::InputObject(ext) => ext.position,
        TypeExtension::Interface(ext) => ext.position,
        TypeExtension::Object(ext) => ext.position,
        TypeExtension::Scalar(ext) => ext.position,
        TypeExtension::Union(ext) => ext.position,
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error(
        "The `{enum_name}` enum defines the `{value_name}` value more than \
        once ({value_def1} and {value_def2})"
    )]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_name: String,
        value_def1: loc::FilePosition,
        value_def2: loc::FilePosition,
    },

    #[error(
        "The `{type_name}` type defines the `{field_name}` field more than \
        once ({field_def1} and {field_def2})"
    )]
    DuplicateFieldDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::FilePosition,
        field_def2: loc::FilePosition,
    },

    #[error(
        "The {operation} root operation type was declared more than once \
        ({location1} and {location2})"
    )]
    DuplicateOperationTypeDefinition {
        operation: OperationKind,
        location1: loc::FilePosition,
        location2: loc::FilePosition,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined ({def1} and {def2})")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error(
        "Attempted to extend the `{type_name}` type at {extension_location}, \
        but it is not defined anywhere"
    )]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_location: loc::FilePosition,
    },

    #[error(
        "`extend` at {extension_location} does not match the kind of \
        `{type_name}`, which is defined with `{type_kind}`"
    )]
    InvalidExtensionType {
        type_name: String,
        type_kind: crate::types::GraphQLTypeKind,
        extension_location: loc::FilePosition,
    },

    #[error("Error parsing schema `{}`: {err}", file.display())]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error(
        "The {operation} root operation type is declared as `{type_name}` at \
        {location}, but no object type with that name is defined"
    )]
    UndefinedOperationType {
        operation: OperationKind,
        type_name: String,
        location: loc::FilePosition,
    },

    #[error("`{referrer}` at {location} refers to the undefined type `{type_name}`")]
    UndefinedTypeReference {
        type_name: String,
        referrer: String,
        location: loc::FilePosition,
    },
}

/// Represents the file location of a given type's definition in the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::FilePosition,
    pub type_name: String,
}
impl NamedTypeDefLocation {
    pub(crate) fn from_pos(
        type_name: String,
        file: &Path,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(Some(file), pos),
            type_name,
        }
    }
}
