pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig, GenerationSettings};

pub use core::{codegen::CppHeaderGenerator, engine::GeneratorEngine};
pub use domain::model::{Address, User};
pub use domain::schema::{registered_schemas, FieldDescriptor, FieldType, RecordSchema, Schema};
pub use utils::error::{GenError, Result};
