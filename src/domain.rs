pub mod contact;
pub mod manager;

use crate::errors::AppError;
use crate::storage::ContactStore;
use contact::Contact;

/// How the contact file was found at startup.
///
/// A corrupted or unreadable file still yields an empty contact list, but
/// callers can tell it apart from a first run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded { count: usize },
    Absent,
    Recovered { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(String),
    Cancelled,
}

/// Contacts sorted for display, with the size of the whole list.
#[derive(Debug)]
pub struct Listing<'a> {
    pub contacts: Vec<&'a Contact>,
    pub total: usize,
}

impl LoadStatus {
    pub fn is_recovered(&self) -> bool {
        matches!(self, LoadStatus::Recovered { .. })
    }
}

/// Only `y` and `yes` (any case) confirm a destructive action.
pub fn is_confirmation(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
