use crate::types::TypeAnnotation;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListTypeAnnotation {
    pub(crate) inner_type: Box<TypeAnnotation>,
    pub(crate) nullable: bool,
}
impl ListTypeAnnotation {
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner_type
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
impl std::fmt::Display for ListTypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}]{}",
            self.inner_type,
            if self.nullable { "" } else { "!" },
        )
    }
}
