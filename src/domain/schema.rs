use crate::domain::model::{Address, User};

/// Shape of a single record field, independent of any target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Integer,
    Boolean,
    Sequence(Box<FieldType>),
    Set(Box<FieldType>),
    Map(Box<FieldType>, Box<FieldType>),
    Record(&'static str),
}

impl FieldType {
    pub fn sequence(inner: FieldType) -> Self {
        FieldType::Sequence(Box::new(inner))
    }

    pub fn set(inner: FieldType) -> Self {
        FieldType::Set(Box::new(inner))
    }

    pub fn map(key: FieldType, value: FieldType) -> Self {
        FieldType::Map(Box::new(key), Box::new(value))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, FieldType::Integer | FieldType::Boolean)
    }

    fn collect_records(&self, out: &mut Vec<&'static str>) {
        match self {
            FieldType::Text | FieldType::Integer | FieldType::Boolean => {}
            FieldType::Sequence(inner) | FieldType::Set(inner) => inner.collect_records(out),
            FieldType::Map(key, value) => {
                key.collect_records(out);
                value.collect_records(out);
            }
            FieldType::Record(name) => {
                if !out.contains(name) {
                    out.push(*name);
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub field_type: FieldType,
}

impl FieldDescriptor {
    pub fn new(name: &'static str, field_type: FieldType) -> Self {
        Self { name, field_type }
    }
}

/// Static field metadata for a record type.
pub trait Schema {
    const NAME: &'static str;

    fn fields() -> Vec<FieldDescriptor>;
}

impl Schema for Address {
    const NAME: &'static str = "Address";

    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("street", FieldType::Text),
            FieldDescriptor::new("city", FieldType::Text),
            FieldDescriptor::new("zipCode", FieldType::Text),
        ]
    }
}

impl Schema for User {
    const NAME: &'static str = "User";

    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("name", FieldType::Text),
            FieldDescriptor::new("age", FieldType::Integer),
            FieldDescriptor::new("emails", FieldType::sequence(FieldType::Text)),
            FieldDescriptor::new("addresses", FieldType::Record(Address::NAME)),
            FieldDescriptor::new("favoriteNumbers", FieldType::set(FieldType::Integer)),
        ]
    }
}

/// Type-erased schema, so records of different types can be listed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    pub name: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

impl RecordSchema {
    pub fn of<T: Schema>() -> Self {
        Self {
            name: T::NAME,
            fields: T::fields(),
        }
    }

    /// Record names referenced by this schema's fields, in first-seen order.
    pub fn dependencies(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        for field in &self.fields {
            field.field_type.collect_records(&mut out);
        }
        out
    }
}

/// Every record the crate defines, dependencies first.
pub fn registered_schemas() -> Vec<RecordSchema> {
    vec![RecordSchema::of::<Address>(), RecordSchema::of::<User>()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_schemas_order() {
        let names: Vec<_> = registered_schemas().iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Address", "User"]);
    }

    #[test]
    fn test_user_fields() {
        let user = RecordSchema::of::<User>();
        let names: Vec<_> = user.fields.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec!["name", "age", "emails", "addresses", "favoriteNumbers"]
        );
        assert_eq!(user.fields[3].field_type, FieldType::Record("Address"));
    }

    #[test]
    fn test_dependencies() {
        assert!(RecordSchema::of::<Address>().dependencies().is_empty());
        assert_eq!(RecordSchema::of::<User>().dependencies(), vec!["Address"]);

        let nested = RecordSchema {
            name: "Directory",
            fields: vec![
                FieldDescriptor::new(
                    "byCity",
                    FieldType::map(FieldType::Text, FieldType::sequence(FieldType::Record("User"))),
                ),
                FieldDescriptor::new("owner", FieldType::Record("User")),
            ],
        };
        assert_eq!(nested.dependencies(), vec!["User"]);
    }
}
