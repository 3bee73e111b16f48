use super::{decode, encode, ContactStore};
use crate::error::{PhonebookError, Result};
use crate::model::Contact;
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Stores contacts in a single JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: std::io::Error) -> PhonebookError {
        PhonebookError::StorageWrite {
            location: self.location(),
            source,
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("phonebook");
        let tmp_name = format!(".{}-{}.tmp", file_name, Uuid::new_v4());
        match self.path.parent() {
            Some(parent) => parent.join(tmp_name),
            None => PathBuf::from(tmp_name),
        }
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
            }
        }
        Ok(())
    }
}

impl ContactStore for FileStore {
    fn load(&self) -> Result<Option<Vec<Contact>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No contact file at {}, starting empty", self.location());
                return Ok(None);
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(PhonebookError::StorageFormat {
                    location: self.location(),
                    reason: "file is not valid UTF-8".to_string(),
                });
            }
            Err(e) => return Err(PhonebookError::Io(e)),
        };

        let contacts = decode(&content, &self.location())?;
        debug!("Loaded {} contacts from {}", contacts.len(), self.location());
        Ok(Some(contacts))
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        let content = encode(contacts)?;
        self.ensure_parent()?;

        // Atomic write: the target is either the old file or the new one, never a
        // partial write.
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            self.write_error(e)
        })?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(self.write_error(e));
        }

        debug!("Saved {} contacts to {}", contacts.len(), self.location());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
