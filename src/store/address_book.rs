use crate::models::{Person, PropertyForRent, PropertyForSale};

use super::entity::Entity;
use super::unique_list::{CollectionError, UniqueList};

/// Owner of every collection in the book: persons, sale listings and rentals
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    pub(super) persons: UniqueList<Person>,
    pub(super) properties_for_sale: UniqueList<PropertyForSale>,
    pub(super) properties_for_rent: UniqueList<PropertyForRent>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has<T: Entity>(&self, entity: &T) -> bool {
        T::list(self).contains(entity)
    }

    pub fn add<T: Entity>(&mut self, entity: T) -> Result<(), CollectionError> {
        T::list_mut(self).add(entity)
    }

    pub fn remove<T: Entity>(&mut self, entity: &T) -> Result<T, CollectionError> {
        T::list_mut(self).remove(entity)
    }

    pub fn set<T: Entity>(&mut self, target: &T, replacement: T) -> Result<(), CollectionError> {
        T::list_mut(self).set_element(target, replacement)
    }

    pub fn entries<T: Entity>(&self) -> &[T] {
        T::list(self).as_slice()
    }

    /// Replace every list with the contents of `data`
    pub fn reset_data(&mut self, data: &AddressBook) -> Result<(), CollectionError> {
        self.persons.replace_all(data.persons().to_vec())?;
        self.properties_for_sale
            .replace_all(data.properties_for_sale().to_vec())?;
        self.properties_for_rent
            .replace_all(data.properties_for_rent().to_vec())?;
        Ok(())
    }

    pub fn persons(&self) -> &[Person] {
        self.persons.as_slice()
    }

    pub fn properties_for_sale(&self) -> &[PropertyForSale] {
        self.properties_for_sale.as_slice()
    }

    pub fn properties_for_rent(&self) -> &[PropertyForRent] {
        self.properties_for_rent.as_slice()
    }
}
