use super::*;

use crate::domain::contact::OwnedDetails;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::PathBuf;

pub struct JsonStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.into(),
        }
    }
}

impl ContactStore for JsonStorage {
    fn load(&self) -> Result<Option<Vec<Contact>>, AppError> {
        if !fs::exists(&self.path)? {
            return Ok(None);
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        let contacts = contacts_from_json(&data)?;
        tracing::debug!(path = %self.path.display(), count = contacts.len(), "read contact file");
        Ok(Some(contacts))
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let json_contact = contacts_to_json(contacts)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(json_contact.as_bytes())?;

        tracing::debug!(path = %self.path.display(), count = contacts.len(), "wrote contact file");
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}

/// Pretty-printed with two-space indentation, keys in list order.
pub fn contacts_to_json(contacts: &[Contact]) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(&ContactMap(contacts))?)
}

pub fn contacts_from_json(data: &str) -> Result<Vec<Contact>, AppError> {
    let ContactEntries(contacts) = serde_json::from_str(data)?;
    Ok(contacts)
}

// The file is a JSON object keyed by contact name. Going through a Vec
// instead of a map type keeps the order the entries were written in.
struct ContactMap<'a>(&'a [Contact]);

impl Serialize for ContactMap<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter().map(|c| (&c.name, c.details())))
    }
}

struct ContactEntries(Vec<Contact>);

impl<'de> Deserialize<'de> for ContactEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ContactEntriesVisitor)
    }
}

struct ContactEntriesVisitor;

impl<'de> Visitor<'de> for ContactEntriesVisitor {
    type Value = ContactEntries;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping contact names to their details")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let capacity = map.size_hint().unwrap_or(0);
        let mut contacts: Vec<Contact> = Vec::with_capacity(capacity);
        let mut slots: HashMap<String, usize> = HashMap::with_capacity(capacity);

        while let Some((name, details)) = map.next_entry::<String, OwnedDetails>()? {
            // A repeated key keeps its first position and its last value
            match slots.get(&name) {
                Some(&idx) => contacts[idx] = Contact::from_details(name, details),
                None => {
                    slots.insert(name.clone(), contacts.len());
                    contacts.push(Contact::from_details(name, details));
                }
            }
        }

        Ok(ContactEntries(contacts))
    }
}
