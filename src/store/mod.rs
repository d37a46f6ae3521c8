pub mod address_book;
pub mod entity;
pub mod filtered;
pub mod model;
pub mod unique_list;

pub use address_book::AddressBook;
pub use entity::Entity;
pub use filtered::{show_all, FilteredList, Predicate};
pub use model::{Model, Views};
pub use unique_list::{CollectionError, Unique, UniqueList};
