mod document_error;
#[allow(clippy::module_inception)]
mod resolver;

pub use document_error::DocumentError;
pub use resolver::resolve;
pub use resolver::resolve_str;

#[cfg(test)]
mod tests;
