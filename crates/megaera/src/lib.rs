pub mod ast;
mod codegen;
pub mod content;
mod emitter;
pub mod file_reader;
pub mod loc;
mod operation_kind;
mod resolver;
pub mod schema;
pub mod types;
pub mod visit;

pub use codegen::CodegenError;
pub use codegen::generate;
pub use codegen::Generated;
pub use emitter::emit;
pub use emitter::Emitter;
pub use emitter::GenerationError;
pub use emitter::Nullability;
pub use operation_kind::OperationKind;
pub use resolver::DocumentError;
pub use resolver::resolve;
pub use resolver::resolve_str;
pub use schema::Schema;
pub use schema::SchemaBuildError;
pub use schema::SchemaBuilder;
