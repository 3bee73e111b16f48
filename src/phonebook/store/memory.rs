use super::{decode, encode, ContactStore};
use crate::error::{PhonebookError, Result};
use crate::model::Contact;

/// In-memory storage for testing.
///
/// Keeps the encoded text rather than the contacts themselves, so whatever the
/// directory writes has to survive the same encoding the file store uses.
#[derive(Default)]
pub struct InMemoryStore {
    content: Option<String>,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `content`, as if read from a file.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            fail_writes: false,
        }
    }

    /// Make every subsequent `save` fail with a write error.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw stored text, if anything has been written.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl ContactStore for InMemoryStore {
    fn load(&self) -> Result<Option<Vec<Contact>>> {
        self.content
            .as_deref()
            .map(|content| decode(content, &self.location()))
            .transpose()
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        if self.fail_writes {
            return Err(PhonebookError::StorageWrite {
                location: self.location(),
                source: std::io::Error::other("writes disabled"),
            });
        }
        self.content = Some(encode(contacts)?);
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// `count` distinct contacts: surnames `Surname 1..=count`, names `Name 1..=count`.
    pub fn numbered_contacts(count: usize) -> Vec<Contact> {
        (1..=count)
            .map(|i| {
                Contact::new(
                    format!("Surname {}", i),
                    format!("Name {}", i),
                    "",
                    "Org",
                    format!("{}", 1000 + i),
                    "",
                )
            })
            .collect()
    }

    pub fn store_with(contacts: &[Contact]) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        store.save(contacts).unwrap();
        store
    }
}
