#[allow(clippy::module_inception)]
mod emitter;
mod generation_error;

pub use emitter::emit;
pub use emitter::Emitter;
pub use emitter::Nullability;
pub use generation_error::GenerationError;
