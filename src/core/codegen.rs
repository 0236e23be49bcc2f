//! Renders record schemas as a single C++ header.
//!
//! Every record becomes a `class` with public members, a defaulted
//! constructor and destructor, and an all-fields constructor. Records are
//! emitted in the order given, and a record may only embed records that were
//! emitted before it.

use crate::domain::ports::CodeGenerator;
use crate::domain::schema::{FieldType, RecordSchema};
use crate::utils::error::{GenError, Result};
use std::collections::HashSet;
use std::fmt::{self, Write as _};

pub const DEFAULT_INCLUDE_GUARD: &str = "GENERATED_CLASSES_HPP";

const INCLUDES: [&str; 5] = [
    "string",
    "vector",
    "unordered_set",
    "unordered_map",
    "utility",
];

/// C++ spellings for the scalar field types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMap {
    pub text: String,
    pub integer: String,
    pub boolean: String,
}

impl Default for TypeMap {
    fn default() -> Self {
        Self {
            text: "std::string".to_string(),
            integer: "int".to_string(),
            boolean: "bool".to_string(),
        }
    }
}

impl TypeMap {
    pub fn cpp_type(&self, field_type: &FieldType) -> String {
        match field_type {
            FieldType::Text => self.text.clone(),
            FieldType::Integer => self.integer.clone(),
            FieldType::Boolean => self.boolean.clone(),
            FieldType::Sequence(inner) => format!("std::vector<{}>", self.cpp_type(inner)),
            FieldType::Set(inner) => format!("std::unordered_set<{}>", self.cpp_type(inner)),
            FieldType::Map(key, value) => format!(
                "std::unordered_map<{}, {}>",
                self.cpp_type(key),
                self.cpp_type(value)
            ),
            FieldType::Record(name) => (*name).to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CppHeaderGenerator {
    include_guard: String,
    types: TypeMap,
    class_filter: Option<Vec<String>>,
}

impl Default for CppHeaderGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CppHeaderGenerator {
    pub fn new() -> Self {
        Self {
            include_guard: DEFAULT_INCLUDE_GUARD.to_string(),
            types: TypeMap::default(),
            class_filter: None,
        }
    }

    pub fn with_include_guard(mut self, guard: impl Into<String>) -> Self {
        self.include_guard = guard.into();
        self
    }

    pub fn with_types(mut self, types: TypeMap) -> Self {
        self.types = types;
        self
    }

    /// Restricts output to the named records. An empty list means no restriction.
    pub fn with_class_filter(mut self, names: Vec<String>) -> Self {
        self.class_filter = if names.is_empty() { None } else { Some(names) };
        self
    }

    fn select<'a>(&self, schemas: &'a [RecordSchema]) -> Result<Vec<&'a RecordSchema>> {
        let Some(filter) = &self.class_filter else {
            return Ok(schemas.iter().collect());
        };

        for name in filter {
            if !schemas.iter().any(|s| s.name == name) {
                return Err(GenError::UnknownClassFilter { name: name.clone() });
            }
        }

        Ok(schemas
            .iter()
            .filter(|s| filter.iter().any(|name| name == s.name))
            .collect())
    }

    fn render_class(&self, schema: &RecordSchema, out: &mut String) -> fmt::Result {
        let name = schema.name;
        let typed: Vec<(String, &FieldType, &str)> = schema
            .fields
            .iter()
            .map(|f| (self.types.cpp_type(&f.field_type), &f.field_type, f.name))
            .collect();

        writeln!(out, "class {} {{", name)?;
        writeln!(out, "public:")?;
        for (cpp_type, field_type, field) in &typed {
            if field_type.is_scalar() {
                writeln!(out, "    {} {}{{}};", cpp_type, field)?;
            } else {
                writeln!(out, "    {} {};", cpp_type, field)?;
            }
        }
        out.push('\n');
        writeln!(out, "    {}() = default;", name)?;
        writeln!(out, "    ~{}() = default;", name)?;

        if !typed.is_empty() {
            let params: Vec<String> = typed
                .iter()
                .map(|(cpp_type, _, field)| format!("{} {}", cpp_type, field))
                .collect();
            let inits: Vec<String> = typed
                .iter()
                .map(|(_, field_type, field)| {
                    if field_type.is_scalar() {
                        format!("{0}({0})", field)
                    } else {
                        format!("{0}(std::move({0}))", field)
                    }
                })
                .collect();
            writeln!(
                out,
                "    {}({}) : {} {{}}",
                name,
                params.join(", "),
                inits.join(", ")
            )?;
        }

        writeln!(out, "}};")
    }

    fn render_header(&self, selected: &[&RecordSchema], out: &mut String) -> fmt::Result {
        writeln!(out, "#ifndef {}", self.include_guard)?;
        writeln!(out, "#define {}", self.include_guard)?;
        out.push('\n');
        for include in INCLUDES {
            writeln!(out, "#include <{}>", include)?;
        }
        out.push('\n');

        for schema in selected {
            tracing::debug!(class = schema.name, fields = schema.fields.len(), "Rendering class");
            self.render_class(schema, out)?;
            out.push('\n');
        }

        writeln!(out, "#endif // {}", self.include_guard)
    }
}

impl CodeGenerator for CppHeaderGenerator {
    fn generate(&self, schemas: &[RecordSchema]) -> Result<String> {
        let selected = self.select(schemas)?;

        let mut emitted: HashSet<&str> = HashSet::new();
        for schema in &selected {
            if let Some(missing) = schema
                .dependencies()
                .into_iter()
                .find(|dep| !emitted.contains(dep))
            {
                return Err(GenError::UnknownRecord {
                    class: schema.name.to_string(),
                    record: missing.to_string(),
                });
            }
            emitted.insert(schema.name);
        }

        let mut out = String::new();
        // fmt::Write for String never returns Err.
        self.render_header(&selected, &mut out)
            .expect("writing to a String is infallible");
        Ok(out)
    }
}
