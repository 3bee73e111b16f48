//! # Directory
//!
//! [`Directory`] owns the ordered list of contacts and keeps it in step with a
//! [`ContactStore`]. Insertion order is display order is stored order.
//!
//! Contacts are loaded once when the directory is opened. Every mutating call writes
//! the whole list back before returning, so after any successful call the store and the
//! in-memory list are equal. If that write fails, the mutation stays applied in memory
//! and the error is returned; nothing is retried.

use crate::error::Result;
use crate::model::Contact;
use crate::page;
use crate::search::Criteria;
use crate::store::ContactStore;
use log::{debug, warn};

pub const DEFAULT_PAGE_SIZE: usize = 5;

pub struct Directory<S: ContactStore> {
    store: S,
    contacts: Vec<Contact>,
    page_size: usize,
}

impl<S: ContactStore> Directory<S> {
    /// Open a directory over `store` with the default page size.
    pub fn open(store: S) -> Result<Self> {
        Self::with_page_size(store, DEFAULT_PAGE_SIZE)
    }

    /// Open a directory over `store`. A page size of 0 is treated as 1.
    ///
    /// Fails if the store holds something that is not a valid contact list; a
    /// directory is never handed out half loaded.
    pub fn with_page_size(store: S, page_size: usize) -> Result<Self> {
        let mut directory = Self {
            store,
            contacts: Vec::new(),
            page_size: page_size.max(1),
        };
        directory.load()?;
        Ok(directory)
    }

    /// Replace the in-memory list with what the store holds.
    ///
    /// An empty store (nothing written yet) leaves the list as it is. On error the
    /// list is untouched.
    pub fn load(&mut self) -> Result<()> {
        if let Some(contacts) = self.store.load()? {
            debug!(
                "Directory loaded {} contacts from {}",
                contacts.len(),
                self.store.location()
            );
            self.contacts = contacts;
        }
        Ok(())
    }

    /// Write the whole list to the store.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.contacts)
    }

    /// Append `contact` and save. Returns the new contact's zero-based index.
    pub fn add_contact(&mut self, contact: Contact) -> Result<usize> {
        self.contacts.push(contact);
        let index = self.contacts.len() - 1;
        debug!("Added contact at index {}", index);
        self.save()?;
        Ok(index)
    }

    /// Replace the contact at zero-based `index` and save.
    ///
    /// An index outside the list is ignored: nothing changes, nothing is saved and
    /// `Ok(false)` is returned. Callers that care can check the flag.
    pub fn edit_contact(&mut self, index: usize, contact: Contact) -> Result<bool> {
        let len = self.contacts.len();
        let Some(slot) = self.contacts.get_mut(index) else {
            warn!(
                "Ignoring edit of contact {}: directory has {} contacts",
                index, len
            );
            return Ok(false);
        };
        *slot = contact;
        debug!("Replaced contact at index {}", index);
        self.save()?;
        Ok(true)
    }

    /// Contacts matching every term in `criteria`, in directory order.
    pub fn search_contacts(&self, criteria: &Criteria) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|contact| criteria.matches(contact))
            .collect()
    }

    /// Contacts on 1-based `page`. Page 0 and pages past the end are empty.
    pub fn list_page(&self, page: usize) -> &[Contact] {
        match page::page_bounds(page, self.page_size, self.contacts.len()) {
            Some(range) => &self.contacts[range],
            None => &[],
        }
    }

    /// Zero-based position of the first contact on `page`.
    pub fn page_offset(&self, page: usize) -> usize {
        page.saturating_sub(1).saturating_mul(self.page_size)
    }

    pub fn page_count(&self) -> usize {
        page::page_count(self.page_size, self.contacts.len())
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
