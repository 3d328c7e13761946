use crate::loc;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;

/// Represents a defined GraphQL type
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType),
    Int,
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}
impl GraphQLType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> loc::SchemaDefLocation {
        match self {
            GraphQLType::Bool
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::String =>
                loc::SchemaDefLocation::GraphQLBuiltIn,
            GraphQLType::Enum(t) => t.def_location().clone().into(),
            GraphQLType::InputObject(t) => t.def_location().clone().into(),
            GraphQLType::Interface(t) => t.def_location().clone().into(),
            GraphQLType::Object(t) => t.def_location().clone().into(),
            GraphQLType::Scalar(t) => t.def_location().clone().into(),
            GraphQLType::Union(t) => t.def_location().clone().into(),
        }
    }

    /// The fields selectable on this type, if it is an object or interface
    /// type.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            GraphQLType::Interface(t) => Some(t.fields()),
            GraphQLType::Object(t) => Some(t.fields()),
            _ => None,
        }
    }

    /// Composite types are the ones a selection set may be applied to.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            GraphQLType::Interface(_)
                | GraphQLType::Object(_)
                | GraphQLType::Union(_),
        )
    }

    pub fn name(&self) -> &str {
        match self {
            GraphQLType::Bool => "Boolean",
            GraphQLType::Enum(t) => t.name(),
            GraphQLType::Float => "Float",
            GraphQLType::ID => "ID",
            GraphQLType::InputObject(t) => t.name(),
            GraphQLType::Int => "Int",
            GraphQLType::Interface(t) => t.name(),
            GraphQLType::Object(t) => t.name(),
            GraphQLType::Scalar(t) => t.name(),
            GraphQLType::String => "String",
            GraphQLType::Union(t) => t.name(),
        }
    }

    pub fn type_kind(&self) -> GraphQLTypeKind {
        match self {
            GraphQLType::Bool
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String => GraphQLTypeKind::Scalar,
            GraphQLType::Enum(_) => GraphQLTypeKind::Enum,
            GraphQLType::InputObject(_) => GraphQLTypeKind::InputObject,
            GraphQLType::Interface(_) => GraphQLTypeKind::Interface,
            GraphQLType::Object(_) => GraphQLTypeKind::Object,
            GraphQLType::Union(_) => GraphQLTypeKind::Union,
        }
    }
}
