pub mod error;
pub mod person;
pub mod property;

pub use error::ValidationError;
pub use person::{Address, Birthday, Email, Name, Person, Phone, Remark, Tag};
pub use property::{
    parse_date, Property, PropertyDetails, PropertyForRent, PropertyForSale, Rent, Sale,
    DATE_FORMAT,
};
