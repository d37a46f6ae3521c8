use std::marker::PhantomData;

use tracing::info;

use crate::store::{Entity, Model};

use super::{CommandError, CommandResult};

pub const DELETE_PERSON_WORD: &str = "delete";
pub const DELETE_SALE_WORD: &str = "delete-sale";
pub const DELETE_RENT_WORD: &str = "delete-rent";

pub const DELETE_USAGE: &str = "delete, delete-sale, delete-rent: Deletes the entry identified by \
    its index number in the displayed list.\n\
    Parameters: INDEX (must be a positive integer)\n\
    Example: delete-sale 1";

/// Removes the entity shown at a one-based position of the current view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand<T> {
    index: usize,
    kind: PhantomData<T>,
}

impl<T: Entity> DeleteCommand<T> {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            kind: PhantomData,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = model
            .filtered_get::<T>(self.index)
            .cloned()
            .ok_or(CommandError::InvalidIndex { kind: T::KIND })?;

        model.delete(&target)?;
        info!(kind = T::KIND, index = self.index, "entity deleted");
        Ok(CommandResult::new(format!("Deleted {}: {}", T::KIND, target)))
    }
}
