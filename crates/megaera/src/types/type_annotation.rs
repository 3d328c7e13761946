use crate::ast;
use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;

/// Represents the annotated type of a [`Field`](crate::types::Field),
/// [`Variable`](crate::content::Variable), or resolved
/// [`Selector`](crate::content::Selector) position.
///
/// GraphQL's non-null wrapper is folded into each layer's `nullable` flag:
/// `[String!]` is a nullable list annotation around a non-nullable named
/// annotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    pub fn from_ast_type(ast_type: &ast::query::Type) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(ast_type: &ast::query::Type, nullable: bool) -> Self {
        match ast_type {
            ast::query::Type::ListType(inner) =>
                Self::List(ListTypeAnnotation {
                    inner_type: Box::new(Self::from_ast_type_impl(inner, true)),
                    nullable,
                }),

            ast::query::Type::NamedType(name) =>
                Self::Named(NamedTypeAnnotation {
                    nullable,
                    type_name: name.to_string(),
                }),

            ast::query::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            Self::List(ListTypeAnnotation { inner_type, .. })
                => inner_type.innermost_named_type_annotation(),
            Self::Named(named_annot)
                => named_annot,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn list(inner: TypeAnnotation, nullable: bool) -> Self {
        Self::List(ListTypeAnnotation {
            inner_type: Box::new(inner),
            nullable,
        })
    }

    pub fn named(type_name: impl AsRef<str>, nullable: bool) -> Self {
        Self::Named(NamedTypeAnnotation {
            nullable,
            type_name: type_name.as_ref().to_string(),
        })
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null) at
    /// its outermost layer.
    pub fn nullable(&self) -> bool {
        match self {
            Self::List(ListTypeAnnotation { nullable, .. }) => *nullable,
            Self::Named(NamedTypeAnnotation { nullable, .. }) => *nullable,
        }
    }

    /// A copy of this annotation with the outermost layer's nullability
    /// replaced.
    pub fn with_nullable(&self, nullable: bool) -> Self {
        match self {
            Self::List(annot) => Self::List(ListTypeAnnotation {
                inner_type: annot.inner_type.clone(),
                nullable,
            }),
            Self::Named(annot) => Self::Named(NamedTypeAnnotation {
                nullable,
                type_name: annot.type_name.clone(),
            }),
        }
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(annot) => annot.fmt(f),
            Self::Named(annot) => annot.fmt(f),
        }
    }
}
