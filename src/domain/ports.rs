use crate::domain::schema::RecordSchema;
use crate::utils::error::Result;

pub trait Storage {
    /// Writes `data` under `path` relative to the backend's root and returns the full location.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}

pub trait CodeGenerator {
    fn generate(&self, schemas: &[RecordSchema]) -> Result<String>;
}
