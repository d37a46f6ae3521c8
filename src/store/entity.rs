use std::fmt;

use crate::models::{Person, PropertyForRent, PropertyForSale};

use super::address_book::AddressBook;
use super::filtered::FilteredList;
use super::model::Views;
use super::unique_list::{Unique, UniqueList};

/// An entity kind held by the book.
///
/// Ties a type to its list in [`AddressBook`] and its view in the model, so
/// that add, delete and filter are written once for all three kinds.
pub trait Entity: Unique + Clone + fmt::Display + 'static {
    fn list(book: &AddressBook) -> &UniqueList<Self>;
    fn list_mut(book: &mut AddressBook) -> &mut UniqueList<Self>;
    fn view(views: &Views) -> &FilteredList<Self>;
    fn view_mut(views: &mut Views) -> &mut FilteredList<Self>;
}

impl Entity for Person {
    fn list(book: &AddressBook) -> &UniqueList<Self> {
        &book.persons
    }

    fn list_mut(book: &mut AddressBook) -> &mut UniqueList<Self> {
        &mut book.persons
    }

    fn view(views: &Views) -> &FilteredList<Self> {
        &views.persons
    }

    fn view_mut(views: &mut Views) -> &mut FilteredList<Self> {
        &mut views.persons
    }
}

impl Entity for PropertyForSale {
    fn list(book: &AddressBook) -> &UniqueList<Self> {
        &book.properties_for_sale
    }

    fn list_mut(book: &mut AddressBook) -> &mut UniqueList<Self> {
        &mut book.properties_for_sale
    }

    fn view(views: &Views) -> &FilteredList<Self> {
        &views.properties_for_sale
    }

    fn view_mut(views: &mut Views) -> &mut FilteredList<Self> {
        &mut views.properties_for_sale
    }
}

impl Entity for PropertyForRent {
    fn list(book: &AddressBook) -> &UniqueList<Self> {
        &book.properties_for_rent
    }

    fn list_mut(book: &mut AddressBook) -> &mut UniqueList<Self> {
        &mut book.properties_for_rent
    }

    fn view(views: &Views) -> &FilteredList<Self> {
        &views.properties_for_rent
    }

    fn view_mut(views: &mut Views) -> &mut FilteredList<Self> {
        &mut views.properties_for_rent
    }
}
