use crate::codegen::CodegenError;
use crate::emitter;
use crate::resolver;
use crate::schema::Schema;
use std::path::Path;

/// TypeScript generated for one GraphQL document.
#[derive(Clone, Debug, PartialEq)]
pub struct Generated {
    pub code: String,
    pub num_fragments: usize,
    pub num_operations: usize,
}

/// Parse, resolve, and emit the document `document_src`.
///
/// Nothing is produced for a document that fails at any stage.
pub fn generate(
    schema: &Schema,
    document_src: &str,
    file_path: Option<&Path>,
) -> Result<Generated, CodegenError> {
    let content = resolver::resolve_str(schema, document_src, file_path)?;
    let code = emitter::emit(&content)?;
    Ok(Generated {
        code,
        num_fragments: content.fragments.len(),
        num_operations: content.operations.len(),
    })
}
