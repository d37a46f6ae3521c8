pub mod adapted;
pub mod json;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::ValidationError;
use crate::store::AddressBook;

pub use adapted::JsonAddressBook;
pub use json::JsonStorage;

/// Why a stored book could not be installed. Nothing is loaded when any of these occur.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("data file is not a valid address book document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("{entity}'s {field} field is missing!")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error(transparent)]
    IllegalValue(#[from] ValidationError),

    #[error("Persons list contains duplicate person(s).")]
    DuplicatePersons,

    #[error("Properties list contains duplicate property(ies).")]
    DuplicateProperties,
}

/// Where the book is kept between runs
pub trait Storage {
    /// Load the stored book, or `None` when nothing has been stored yet
    fn read(&self) -> Result<Option<AddressBook>, LoadError>;

    /// Replace whatever is stored with `book`
    fn save(&self, book: &AddressBook) -> anyhow::Result<()>;
}
