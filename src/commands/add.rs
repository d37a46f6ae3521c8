use tracing::info;

use crate::store::{Entity, Model};

use super::{CommandError, CommandResult};

pub const ADD_PERSON_WORD: &str = "add";
pub const ADD_SALE_WORD: &str = "add-sale";
pub const ADD_RENT_WORD: &str = "add-rent";

pub const ADD_PERSON_USAGE: &str = "add: Adds a person to the book. \
    Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [b/BIRTHDAY] [r/REMARK] [t/TAG]...\n\
    Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 t/friends";

pub const ADD_SALE_USAGE: &str = "add-sale: Adds a property for sale to the list. \
    Parameters: a/ADDRESS t/TOWN pt/TYPE s/SIZE br/BEDROOMS ba/BATHROOMS pr/PRICE ld/LISTING_DATE\n\
    Example: add-sale a/123 Main St t/Central Town pt/House s/150.0 br/3 ba/2 pr/300000.0 ld/2024-10-01";

pub const ADD_RENT_USAGE: &str = "add-rent: Adds a property for rent to the list. \
    Parameters: a/ADDRESS t/TOWN pt/TYPE s/SIZE br/BEDROOMS ba/BATHROOMS pr/PRICE af/AVAILABLE_FROM [r/REMARK]\n\
    Example: add-rent a/456 Elm St t/Downtown pt/Apartment s/100.0 br/2 ba/1 pr/1500.0 af/2024-12-01 r/Close to metro";

/// Adds one entity, refusing anything the book already holds.
///
/// The same command serves persons, sale listings and rentals; the entity
/// kind decides which list is checked and which message is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct AddCommand<T> {
    to_add: T,
}

impl<T: Entity> AddCommand<T> {
    pub fn new(entity: T) -> Self {
        Self { to_add: entity }
    }

    pub fn entity(&self) -> &T {
        &self.to_add
    }

    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if model.has(&self.to_add) {
            return Err(CommandError::Duplicate { kind: T::KIND });
        }

        let feedback = format!("New {} added: {}", T::KIND, self.to_add);
        model.add(self.to_add)?;
        info!(kind = T::KIND, "entity added");
        Ok(CommandResult::new(feedback))
    }
}
