use crate::utils::error::{GenError, Result};
use regex::Regex;
use std::path::{Component, Path};
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn identifier_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("static regex"))
}

// Qualified names with optional template arguments, e.g. `std::int32_t` or `std::basic_string<char>`.
fn type_spelling_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(::)?[A-Za-z_][A-Za-z0-9_]*(::[A-Za-z_][A-Za-z0-9_]*)*(<[A-Za-z0-9_:, <>]+>)?$")
            .expect("static regex")
    })
}

// Multi-word fundamental types such as `unsigned int` or `long long`.
fn builtin_type_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(unsigned|signed|short|long|int|char|double|float)( (unsigned|signed|short|long|int|char|double|float))*$",
        )
        .expect("static regex")
    })
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A file name must stay below its output directory: relative, with no `..` components.
pub fn validate_relative_file_name(field_name: &str, value: &str) -> Result<()> {
    validate_path(field_name, value)?;

    let escapes = Path::new(value).components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Must be a relative path inside the output directory".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_identifier(field_name: &str, value: &str) -> Result<()> {
    if !identifier_regex().is_match(value) {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Must be a C++ identifier (letters, digits, underscores)".to_string(),
        });
    }
    Ok(())
}

pub fn validate_type_spelling(field_name: &str, value: &str) -> Result<()> {
    if !type_spelling_regex().is_match(value) && !builtin_type_regex().is_match(value) {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Must be a C++ type name such as `int` or `std::int32_t`".to_string(),
        });
    }
    Ok(())
}
