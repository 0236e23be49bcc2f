pub mod codegen;
pub mod engine;

pub use crate::domain::ports::{CodeGenerator, Storage};
pub use crate::domain::schema::{registered_schemas, RecordSchema};
pub use crate::utils::error::Result;
