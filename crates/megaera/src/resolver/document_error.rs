use crate::loc;
use crate::OperationKind;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons an executable document could not be resolved into
/// [`Content`](crate::content::Content).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DocumentError {
    #[error(
        "`{name}` is defined more than once ({first_location} and \
        {second_location})"
    )]
    DuplicateDefinition {
        name: String,
        first_location: loc::FilePosition,
        second_location: loc::FilePosition,
    },

    #[error("The {} at {location} must be given a name", kind.keyword())]
    MissingName {
        kind: OperationKind,
        location: loc::FilePosition,
    },

    #[error("The inline fragment at {location} must have a type condition")]
    MissingTypeCondition {
        location: loc::FilePosition,
    },

    #[error(
        "Error parsing document{}: {err}",
        file.as_ref().map_or(String::new(), |f| format!(" `{}`", f.display())),
    )]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },
}
