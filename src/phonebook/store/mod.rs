//! # Storage Layer
//!
//! The [`ContactStore`] trait is the seam between the [`Directory`] and wherever its
//! contacts live. The directory only ever loads the whole list and writes the whole
//! list back, so the trait is deliberately small.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One UTF-8 JSON file holding every contact
//!   - Writes go to a temporary sibling file which is then renamed over the target
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Holds the encoded text, so tests exercise the same format as the file store
//!   - Can be told to fail writes
//!
//! ## Storage Format
//!
//! ```text
//! [
//!     {
//!         "surname": "Ivanov",
//!         "name": "Ivan",
//!         "patronymic": "Ivanovich",
//!         "organization": "Acme",
//!         "work_phone": "123",
//!         "personal_phone": "456"
//!     }
//! ]
//! ```
//!
//! A single JSON array, four-space indentation, non-ASCII text written as-is so the
//! file stays readable and editable by hand.
//!
//! [`Directory`]: crate::directory::Directory

use crate::error::{PhonebookError, Result};
use crate::model::Contact;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

pub mod fs;
pub mod memory;

const INDENT: &[u8] = b"    ";

/// Abstract interface for contact storage.
pub trait ContactStore {
    /// Read every stored contact, in stored order.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Vec<Contact>>>;

    /// Replace the stored contacts with `contacts`.
    fn save(&mut self, contacts: &[Contact]) -> Result<()>;

    /// Human readable description of where contacts are kept.
    fn location(&self) -> String;
}

/// Encode contacts into the on-disk text format.
pub fn encode(contacts: &[Contact]) -> Result<String> {
    let records: Vec<Value> = contacts
        .iter()
        .map(|contact| Value::Object(contact.to_serializable()))
        .collect();

    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    records.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| {
        PhonebookError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// Decode the on-disk text format. `location` is only used in error messages.
pub fn decode(content: &str, location: &str) -> Result<Vec<Contact>> {
    let format_error = |reason: String| PhonebookError::StorageFormat {
        location: location.to_string(),
        reason,
    };

    let value: Value = serde_json::from_str(content).map_err(|e| format_error(e.to_string()))?;
    let Value::Array(records) = value else {
        return Err(format_error("expected a JSON array of contacts".to_string()));
    };

    records
        .iter()
        .enumerate()
        .map(|(position, record)| {
            let map = record
                .as_object()
                .ok_or_else(|| format_error(format!("entry {} is not an object", position)))?;
            Contact::from_serializable(map)
                .map_err(|e| format_error(format!("entry {}: {}", position, e)))
        })
        .collect()
}
