use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Read a GraphQL source (schema or executable document) from disk as UTF-8.
pub fn read_content<P: AsRef<Path>>(file_path: P) -> Result<String, ReadContentError> {
    let file_path = file_path.as_ref();
    if file_path.is_dir() {
        return Err(ReadContentError::IsADirectory(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)
        .map_err(|err| ReadContentError::Io {
            file_path: file_path.to_path_buf(),
            kind: err.kind(),
            message: err.to_string(),
        })?;

    String::from_utf8(bytes)
        .map_err(|err| ReadContentError::NotUtf8 {
            file_path: file_path.to_path_buf(),
            valid_up_to: err.utf8_error().valid_up_to(),
        })
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ReadContentError {
    #[error("`{}` is a directory, not a GraphQL source file", .0.display())]
    IsADirectory(PathBuf),

    #[error("Failed to read `{}`: {message}", file_path.display())]
    Io {
        file_path: PathBuf,
        kind: std::io::ErrorKind,
        message: String,
    },

    #[error("`{}` is not valid UTF-8 past byte {valid_up_to}", file_path.display())]
    NotUtf8 {
        file_path: PathBuf,
        valid_up_to: usize,
    },
}
