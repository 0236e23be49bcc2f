use crate::domain::ports::{CodeGenerator, Storage};
use crate::domain::schema::RecordSchema;
use crate::utils::error::Result;

pub struct GeneratorEngine<G: CodeGenerator, S: Storage> {
    generator: G,
    storage: S,
}

impl<G: CodeGenerator, S: Storage> GeneratorEngine<G, S> {
    pub fn new(generator: G, storage: S) -> Self {
        Self { generator, storage }
    }

    /// Renders `schemas` without touching storage.
    pub fn render(&self, schemas: &[RecordSchema]) -> Result<String> {
        tracing::info!("Rendering {} record(s)", schemas.len());
        self.generator.generate(schemas)
    }

    pub fn run(&self, schemas: &[RecordSchema], file_name: &str) -> Result<String> {
        let header = self.render(schemas)?;
        tracing::debug!("Rendered {} bytes", header.len());

        let output_path = self.storage.write_file(file_name, header.as_bytes())?;
        tracing::info!("Header written to {}", output_path);

        Ok(output_path)
    }
}
