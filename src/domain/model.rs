use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub zip_code: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            zip_code: zip_code.into(),
        }
    }
}

/// A user owns exactly one `Address` by value; `addresses` is not a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub age: i32,
    pub emails: Vec<String>,
    pub addresses: Address,
    pub favorite_numbers: HashSet<i32>,
}

impl User {
    pub fn new<E, F>(
        name: impl Into<String>,
        age: i32,
        emails: E,
        addresses: Address,
        favorite_numbers: F,
    ) -> Self
    where
        E: IntoIterator,
        E::Item: Into<String>,
        F: IntoIterator<Item = i32>,
    {
        Self {
            name: name.into(),
            age,
            emails: emails.into_iter().map(Into::into).collect(),
            addresses,
            favorite_numbers: favorite_numbers.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_default_is_empty() {
        let address = Address::default();
        assert!(address.street.is_empty());
        assert!(address.city.is_empty());
        assert!(address.zip_code.is_empty());
    }

    #[test]
    fn test_address_new_keeps_fields() {
        let address = Address::new("1 Main", "Springfield", "not-a-zip");
        assert_eq!(address.street, "1 Main");
        assert_eq!(address.city, "Springfield");
        assert_eq!(address.zip_code, "not-a-zip");
    }

    #[test]
    fn test_user_default() {
        let user = User::default();
        assert_eq!(user.name, "");
        assert_eq!(user.age, 0);
        assert!(user.emails.is_empty());
        assert_eq!(user.addresses, Address::default());
        assert!(user.favorite_numbers.is_empty());
    }

    #[test]
    fn test_user_accepts_negative_age_and_empty_collections() {
        let user = User::new("", -5, Vec::<String>::new(), Address::default(), Vec::<i32>::new());
        assert_eq!(user.age, -5);
        assert!(user.emails.is_empty());
        assert!(user.favorite_numbers.is_empty());
    }

    #[test]
    fn test_fields_are_mutable_after_construction() {
        let mut user = User::default();
        user.addresses.city = "Shelbyville".to_string();
        user.emails.push("b@y.org".to_string());
        assert_eq!(user.addresses.city, "Shelbyville");
        assert_eq!(user.emails, vec!["b@y.org"]);
    }
}
