use crate::emitter::GenerationError;
use crate::resolver::DocumentError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CodegenError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}
