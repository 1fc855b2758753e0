pub mod memory;
pub mod stores;

use crate::prelude::{AppError, Contact};

pub const DEFAULT_STORAGE_PATH: &str = "contacts.json";

pub trait ContactStore {
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Vec<Contact>>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}
