mod codegen_error;
mod generate;

pub use codegen_error::CodegenError;
pub use generate::generate;
pub use generate::Generated;

#[cfg(test)]
mod tests;
