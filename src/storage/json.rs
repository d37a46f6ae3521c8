use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::store::AddressBook;

use super::{JsonAddressBook, LoadError, Storage};

/// Keeps the book as one pretty-printed JSON document
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonStorage {
    fn read(&self) -> Result<Option<AddressBook>, LoadError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no data file yet");
                return Ok(None);
            }
            Err(source) => {
                return Err(LoadError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let document: JsonAddressBook = serde_json::from_str(&text)?;
        let book = document.into_model()?;
        info!(
            path = %self.path.display(),
            persons = book.persons().len(),
            sales = book.properties_for_sale().len(),
            rentals = book.properties_for_rent().len(),
            "loaded address book"
        );
        Ok(Some(book))
    }

    fn save(&self, book: &AddressBook) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&JsonAddressBook::from(book))
            .context("failed to serialize address book")?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        debug!(path = %self.path.display(), "saved address book");
        Ok(())
    }
}
