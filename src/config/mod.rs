pub mod cli;
pub mod toml_config;

use crate::core::codegen::{CppHeaderGenerator, TypeMap, DEFAULT_INCLUDE_GUARD};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_identifier, validate_non_empty_string, validate_path, validate_relative_file_name,
    validate_type_spelling, Validate,
};

pub const DEFAULT_OUTPUT_PATH: &str = "./generated";
pub const DEFAULT_FILE_NAME: &str = "GeneratedClasses.hpp";

/// Fully resolved options for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSettings {
    pub output_path: String,
    pub file_name: String,
    pub include_guard: String,
    pub classes: Vec<String>,
    pub types: TypeMap,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            include_guard: DEFAULT_INCLUDE_GUARD.to_string(),
            classes: Vec::new(),
            types: TypeMap::default(),
            verbose: false,
            json_logs: false,
        }
    }
}

impl GenerationSettings {
    pub fn build_generator(&self) -> CppHeaderGenerator {
        CppHeaderGenerator::new()
            .with_include_guard(self.include_guard.clone())
            .with_types(self.types.clone())
            .with_class_filter(self.classes.clone())
    }
}

impl Validate for GenerationSettings {
    fn validate(&self) -> Result<()> {
        validate_path("output.path", &self.output_path)?;
        validate_non_empty_string("output.file_name", &self.file_name)?;
        validate_relative_file_name("output.file_name", &self.file_name)?;
        validate_identifier("output.include_guard", &self.include_guard)?;
        validate_type_spelling("types.text", &self.types.text)?;
        validate_type_spelling("types.integer", &self.types.integer)?;
        validate_type_spelling("types.boolean", &self.types.boolean)?;
        for name in &self.classes {
            validate_non_empty_string("classes.include", name)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
pub use self::cli_args::CliConfig;

#[cfg(feature = "cli")]
mod cli_args {
    use super::GenerationSettings;
    use clap::Parser;

    #[derive(Debug, Clone, Default, Parser)]
    #[command(name = "record-gen")]
    #[command(about = "Generate a C++ header for the Address and User records")]
    pub struct CliConfig {
        /// Directory the header is written to [default: ./generated]
        #[arg(long)]
        pub output_path: Option<String>,

        /// Header file name [default: GeneratedClasses.hpp]
        #[arg(long)]
        pub file_name: Option<String>,

        /// Preprocessor symbol for the include guard [default: GENERATED_CLASSES_HPP]
        #[arg(long)]
        pub include_guard: Option<String>,

        /// Only emit these records (comma separated)
        #[arg(long, value_delimiter = ',')]
        pub classes: Vec<String>,

        /// Path to a TOML configuration file
        #[arg(short, long)]
        pub config: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub json_logs: bool,

        /// Print the header to stdout instead of writing it
        #[arg(long)]
        pub dry_run: bool,
    }

    impl CliConfig {
        /// Layers explicitly given flags over `base`.
        pub fn apply(&self, mut base: GenerationSettings) -> GenerationSettings {
            if let Some(path) = &self.output_path {
                base.output_path = path.clone();
            }
            if let Some(file_name) = &self.file_name {
                base.file_name = file_name.clone();
            }
            if let Some(guard) = &self.include_guard {
                base.include_guard = guard.clone();
            }
            if !self.classes.is_empty() {
                base.classes = self.classes.clone();
            }
            base.verbose |= self.verbose;
            base.json_logs |= self.json_logs;
            base
        }
    }
}
