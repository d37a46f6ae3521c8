//! Typical entities shared by unit tests.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::{
    Address, Email, Name, Person, Phone, PropertyDetails, PropertyForRent, PropertyForSale, Remark,
    Tag,
};
use crate::store::AddressBook;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn person(name: &str, phone: &str, email: &str, address: &str, tags: &[&str]) -> Person {
    Person::new(
        Name::parse(name).unwrap(),
        Phone::parse(phone).unwrap(),
        Email::parse(email).unwrap(),
        Address::parse(address).unwrap(),
        None,
        tags.iter().map(|tag| Tag::parse(tag).unwrap()).collect::<BTreeSet<_>>(),
        Remark::default(),
    )
}

pub fn alice() -> Person {
    person(
        "Alice Pauline",
        "94351253",
        "alice@example.com",
        "123, Jurong West Ave 6, #08-111",
        &["friends"],
    )
}

pub fn bob() -> Person {
    person(
        "Bob Choo",
        "22222222",
        "bob@example.com",
        "Block 123, Bobby Street 3",
        &["husband", "friend"],
    )
}

fn downtown_condo() -> PropertyDetails {
    PropertyDetails::new("123, Downtown Ave", "Downtown", "Condo", 100.5, 2, 1, 600_000.0).unwrap()
}

fn uptown_apartment() -> PropertyDetails {
    PropertyDetails::new("456, Uptown St", "Uptown", "Apartment", 200.0, 3, 2, 800_000.0).unwrap()
}

pub fn sale_amy() -> PropertyForSale {
    PropertyForSale::for_sale(downtown_condo(), date(2024, 11, 15))
}

pub fn sale_bob() -> PropertyForSale {
    PropertyForSale::for_sale(uptown_apartment(), date(2024, 11, 15))
}

pub fn rent_amy() -> PropertyForRent {
    let details =
        PropertyDetails::new("123, Downtown Ave", "Downtown", "Condo", 100.5, 2, 1, 3000.0).unwrap();
    PropertyForRent::for_rent(details, date(2024, 11, 15), None)
}

pub fn rent_bob() -> PropertyForRent {
    let details =
        PropertyDetails::new("456, Uptown St", "Uptown", "Apartment", 200.0, 3, 2, 4500.0).unwrap();
    PropertyForRent::for_rent(details, date(2024, 11, 15), Some("Close to metro".into()))
}

pub fn typical_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add(alice()).unwrap();
    book.add(bob()).unwrap();
    book.add(sale_amy()).unwrap();
    book.add(sale_bob()).unwrap();
    book.add(rent_amy()).unwrap();
    book.add(rent_bob()).unwrap();
    book
}
