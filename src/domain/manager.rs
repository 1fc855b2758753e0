use super::*;

/// In-memory contact list bound to the storage it is persisted to.
///
/// Every successful mutation writes the whole list back through `storage`.
pub struct ContactManager {
    pub mem: Vec<Contact>,
    pub storage: Box<dyn ContactStore>,
}

impl ContactManager {
    pub fn new(storage: Box<dyn ContactStore>) -> Self {
        Self {
            mem: Vec::new(),
            storage,
        }
    }

    /// Builds a manager and loads whatever the storage holds.
    pub fn open(storage: Box<dyn ContactStore>) -> (Self, LoadStatus) {
        let mut manager = Self::new(storage);
        let status = manager.load();
        (manager, status)
    }

    /// Replaces the in-memory list with the stored one. A file that cannot be
    /// read or parsed leaves the list empty instead of failing.
    pub fn load(&mut self) -> LoadStatus {
        match self.storage.load() {
            Ok(Some(contacts)) => {
                self.mem = contacts;
                tracing::info!(count = self.mem.len(), "contacts loaded");
                LoadStatus::Loaded {
                    count: self.mem.len(),
                }
            }
            Ok(None) => {
                self.mem.clear();
                tracing::info!(medium = self.storage.get_medium(), "no stored contacts");
                LoadStatus::Absent
            }
            Err(e) => {
                self.mem.clear();
                tracing::warn!(error = %e, "stored contacts are unreadable, starting empty");
                LoadStatus::Recovered {
                    reason: e.to_string(),
                }
            }
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.mem)
    }

    pub fn storage(&self) -> &dyn ContactStore {
        self.storage.as_ref()
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.mem
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    /// Checks a candidate name without adding anything. Used to reject a bad
    /// name before asking for the remaining fields.
    pub fn validate_new_name(&self, name: &str) -> Result<(), AppError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(AppError::Validation("Name cannot be empty!".to_string()));
        }

        if self.mem.iter().any(|c| c.name_matches(name)) {
            return Err(AppError::Validation(format!(
                "Contact '{}' already exists!",
                name
            )));
        }
        Ok(())
    }

    pub fn add_contact(
        &mut self,
        name: &str,
        phone: &str,
        email: &str,
        address: &str,
    ) -> Result<String, AppError> {
        self.validate_new_name(name)?;

        let phone = phone.trim();
        if phone.is_empty() {
            return Err(AppError::Validation(
                "Phone number is required!".to_string(),
            ));
        }

        let contact = Contact::new(
            name.trim().to_string(),
            phone.to_string(),
            email.trim().to_string(),
            address.trim().to_string(),
        );
        let stored_name = contact.name.clone();

        self.mem.push(contact);
        self.save()?;

        tracing::info!(name = %stored_name, "contact added");
        Ok(stored_name)
    }

    fn position_by_name(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.mem.iter().position(|c| c.name_matches(name))
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Contact> {
        self.position_by_name(name).map(|idx| &self.mem[idx])
    }

    pub fn get_by_name(&self, name: &str) -> Result<&Contact, AppError> {
        self.find_by_name(name)
            .ok_or_else(|| AppError::NotFound(name.trim().to_string()))
    }

    /// Substring search over name, phone and email, in list order.
    pub fn search(&self, query: &str) -> Result<Vec<&Contact>, AppError> {
        let query = query.trim().to_lowercase();

        if query.is_empty() {
            return Err(AppError::Validation(
                "Search query cannot be empty!".to_string(),
            ));
        }

        let matches: Vec<&Contact> = self
            .mem
            .iter()
            .filter(|c| c.matches_query(&query))
            .collect();

        tracing::debug!(query = %query, matches = matches.len(), "search");
        Ok(matches)
    }

    /// Blank values keep the current field. The list is saved even when
    /// nothing changed.
    pub fn update_contact(
        &mut self,
        name: &str,
        new_phone: &str,
        new_email: &str,
        new_address: &str,
    ) -> Result<String, AppError> {
        let idx = self
            .position_by_name(name)
            .ok_or_else(|| AppError::NotFound(name.trim().to_string()))?;

        let contact = &mut self.mem[idx];
        let phone_changed = contact.update_phone(new_phone);
        let email_changed = contact.update_email(new_email);
        let address_changed = contact.update_address(new_address);
        let stored_name = contact.name.clone();

        self.save()?;

        tracing::info!(
            name = %stored_name,
            phone_changed,
            email_changed,
            address_changed,
            "contact updated"
        );
        Ok(stored_name)
    }

    pub fn delete_contact(
        &mut self,
        name: &str,
        confirmation: &str,
    ) -> Result<DeleteOutcome, AppError> {
        let idx = self
            .position_by_name(name)
            .ok_or_else(|| AppError::NotFound(name.trim().to_string()))?;

        if !is_confirmation(confirmation) {
            tracing::debug!(name = %self.mem[idx].name, "deletion cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        let removed = self.mem.remove(idx);
        self.save()?;

        tracing::info!(name = %removed.name, "contact deleted");
        Ok(DeleteOutcome::Deleted(removed.name))
    }

    /// All contacts ordered by name. The comparison is case-sensitive, so
    /// "Bob" sorts before "alice".
    pub fn view_all(&self) -> Listing<'_> {
        let mut contacts: Vec<&Contact> = self.mem.iter().collect();
        contacts.sort_by(|a, b| a.name.cmp(&b.name));

        Listing {
            total: contacts.len(),
            contacts,
        }
    }
}
