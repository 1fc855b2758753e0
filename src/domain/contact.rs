use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,

    /// Keys found in the contact file that the book does not use itself.
    /// They are written back untouched.
    pub extra: Map<String, Value>,
}

/// Fields stored under the contact name in the contact file.
#[derive(Debug, Serialize)]
pub struct Details<'a> {
    pub phone: &'a str,
    pub email: &'a str,
    pub address: &'a str,

    #[serde(flatten)]
    pub extra: &'a Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct OwnedDetails {
    pub phone: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub address: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Contact {
    pub fn new(name: String, phone: String, email: String, address: String) -> Self {
        Contact {
            name,
            phone,
            email,
            address,
            extra: Map::new(),
        }
    }

    pub fn from_details(name: String, details: OwnedDetails) -> Self {
        Contact {
            name,
            phone: details.phone,
            email: details.email,
            address: details.address,
            extra: details.extra,
        }
    }

    pub fn details(&self) -> Details<'_> {
        Details {
            phone: &self.phone,
            email: &self.email,
            address: &self.address,
            extra: &self.extra,
        }
    }

    /// Case-insensitive comparison used for uniqueness and lookup.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// `query` is expected to be lowercased already. The phone is compared
    /// as stored, so letters in a phone only match lowercase queries.
    pub fn matches_query(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self.phone.contains(query)
            || self.email.to_lowercase().contains(query)
    }

    pub fn update_phone(&mut self, phone: &str) -> bool {
        update_field(&mut self.phone, phone)
    }

    pub fn update_email(&mut self, email: &str) -> bool {
        update_field(&mut self.email, email)
    }

    pub fn update_address(&mut self, address: &str) -> bool {
        update_field(&mut self.address, address)
    }
}

// Blank input keeps the current value
fn update_field(field: &mut String, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    *field = value.to_string();
    true
}
