use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum GenerationError {
    #[error("The `{operation_name}` operation has no source text to embed")]
    EmptySource {
        operation_name: String,
    },

    #[error("`{referrer}` spreads the fragment `{fragment_name}`, which is not defined")]
    UndefinedFragment {
        fragment_name: String,
        referrer: String,
    },

    #[error("Cannot generate a TypeScript type from the GraphQL type `{type_annotation}`")]
    UnrenderableType {
        type_annotation: String,
    },
}
