//! Parse, execute and persist: the path every line of input takes.

use thiserror::Error;
use tracing::{debug, warn};

use crate::commands::{CommandError, CommandResult};
use crate::parser::{parse_command, ParseError};
use crate::storage::Storage;
use crate::store::{AddressBook, Model};

#[derive(Debug, Error)]
pub enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Could not save data to file: {0:#}")]
    Save(anyhow::Error),
}

/// Runs user commands against the in-memory book and saves after each success
#[derive(Debug)]
pub struct Logic<S> {
    model: Model,
    storage: S,
}

impl<S: Storage> Logic<S> {
    pub fn new(book: AddressBook, storage: S) -> Self {
        Self {
            model: Model::new(book),
            storage,
        }
    }

    /// Start from whatever `storage` holds; a missing or unreadable store starts empty.
    pub fn load(storage: S) -> Self {
        let book = match storage.read() {
            Ok(Some(book)) => book,
            Ok(None) => AddressBook::new(),
            Err(err) => {
                warn!(error = %err, "could not load data file, starting with an empty book");
                AddressBook::new()
            }
        };
        Self::new(book, storage)
    }

    pub fn execute(&mut self, line: &str) -> Result<CommandResult, LogicError> {
        let command = parse_command(line)?;
        let result = command.execute(&mut self.model)?;
        self.save()?;
        debug!(exit = result.exit, "command finished");
        Ok(result)
    }

    pub fn save(&self) -> Result<(), LogicError> {
        self.storage
            .save(self.model.book())
            .map_err(LogicError::Save)
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
