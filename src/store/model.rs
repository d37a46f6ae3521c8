use std::cmp::Ordering;

use tracing::debug;

use crate::models::{Person, PropertyForRent, PropertyForSale};

use super::address_book::AddressBook;
use super::entity::Entity;
use super::filtered::{show_all, FilteredList, Predicate};
use super::unique_list::CollectionError;

/// Filtered views over the book's lists, one per entity kind
#[derive(Debug, Default)]
pub struct Views {
    pub(super) persons: FilteredList<Person>,
    pub(super) properties_for_sale: FilteredList<PropertyForSale>,
    pub(super) properties_for_rent: FilteredList<PropertyForRent>,
}

/// The in-memory state commands operate on: the address book plus what is
/// currently shown of it.
///
/// Every mutating method refreshes the affected view before returning, so
/// [`Model::filtered`] always reflects the latest contents.
#[derive(Debug)]
pub struct Model {
    book: AddressBook,
    views: Views,
}

impl Model {
    pub fn new(book: AddressBook) -> Self {
        debug!(
            persons = book.persons().len(),
            sales = book.properties_for_sale().len(),
            rentals = book.properties_for_rent().len(),
            "initializing model"
        );
        let mut model = Self {
            book,
            views: Views::default(),
        };
        model.refresh::<Person>();
        model.refresh::<PropertyForSale>();
        model.refresh::<PropertyForRent>();
        model
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn has<T: Entity>(&self, entity: &T) -> bool {
        self.book.has(entity)
    }

    /// Add an entity and reset its view to show everything
    pub fn add<T: Entity>(&mut self, entity: T) -> Result<(), CollectionError> {
        self.book.add(entity)?;
        self.update_filter::<T>(show_all());
        Ok(())
    }

    pub fn delete<T: Entity>(&mut self, target: &T) -> Result<T, CollectionError> {
        let removed = self.book.remove(target)?;
        self.refresh::<T>();
        Ok(removed)
    }

    pub fn set<T: Entity>(&mut self, target: &T, replacement: T) -> Result<(), CollectionError> {
        self.book.set(target, replacement)?;
        self.refresh::<T>();
        Ok(())
    }

    pub fn sort<T, F>(&mut self, compare: F)
    where
        T: Entity,
        F: FnMut(&T, &T) -> Ordering,
    {
        T::list_mut(&mut self.book).sort_by(compare);
        self.refresh::<T>();
    }

    pub fn reset_data(&mut self, data: &AddressBook) -> Result<(), CollectionError> {
        self.book.reset_data(data)?;
        self.refresh::<Person>();
        self.refresh::<PropertyForSale>();
        self.refresh::<PropertyForRent>();
        Ok(())
    }

    pub fn update_filter<T: Entity>(&mut self, predicate: Predicate<T>) {
        T::view_mut(&mut self.views).set_predicate(predicate, T::list(&self.book));
    }

    /// Entities of kind `T` accepted by the current predicate, in list order
    pub fn filtered<T: Entity>(&self) -> Vec<&T> {
        T::view(&self.views).items(T::list(&self.book))
    }

    /// Entity at a one-based position of the current view
    pub fn filtered_get<T: Entity>(&self, one_based: usize) -> Option<&T> {
        let index = one_based.checked_sub(1)?;
        T::view(&self.views).get(index, T::list(&self.book))
    }

    fn refresh<T: Entity>(&mut self) {
        T::view_mut(&mut self.views).refresh(T::list(&self.book));
    }
}
