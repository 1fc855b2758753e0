use super::*;

use std::cell::RefCell;

/// Keeps the saved list in memory. Nothing survives the process.
#[derive(Default)]
pub struct MemStorage {
    data: RefCell<Option<Vec<Contact>>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            data: RefCell::new(Some(contacts)),
        }
    }
}

impl ContactStore for MemStorage {
    fn load(&self) -> Result<Option<Vec<Contact>>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.borrow_mut() = Some(contacts.to_vec());
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
