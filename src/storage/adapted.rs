//! JSON shapes of the stored book.
//!
//! Every field is optional on the way in so that an absent field can be
//! reported by name instead of as a generic serde error.

use serde::{Deserialize, Serialize};

use crate::models::{
    parse_date, Address, Birthday, Email, Name, Person, Phone, Property, PropertyDetails,
    PropertyForRent, PropertyForSale, Remark, Tag,
};
use crate::store::AddressBook;

use super::LoadError;

fn required<T>(value: Option<T>, entity: &'static str, field: &'static str) -> Result<T, LoadError> {
    value.ok_or(LoadError::MissingField { entity, field })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonPerson {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<&Person> for JsonPerson {
    fn from(person: &Person) -> Self {
        Self {
            name: Some(person.name().to_string()),
            phone: Some(person.phone().to_string()),
            email: Some(person.email().to_string()),
            address: Some(person.address().to_string()),
            birthday: person.birthday().map(|birthday| birthday.to_string()),
            remark: Some(person.remark().to_string()),
            tags: person.tags().iter().map(Tag::to_string).collect(),
        }
    }
}

impl JsonPerson {
    pub fn into_model(self) -> Result<Person, LoadError> {
        const ENTITY: &str = "Person";
        let name = Name::parse(&required(self.name, ENTITY, "name")?)?;
        let phone = Phone::parse(&required(self.phone, ENTITY, "phone")?)?;
        let email = Email::parse(&required(self.email, ENTITY, "email")?)?;
        let address = Address::parse(&required(self.address, ENTITY, "address")?)?;
        let birthday = match self.birthday {
            Some(text) => Birthday::parse(&text)?,
            None => None,
        };
        let tags = self
            .tags
            .iter()
            .map(|tag| Tag::parse(tag))
            .collect::<Result<_, _>>()?;
        let remark = Remark::new(self.remark.unwrap_or_default());
        Ok(Person::new(name, phone, email, address, birthday, tags, remark))
    }
}

/// Listing fields shared by both property shapes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonPropertyDetails {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub number_of_bedrooms: Option<i32>,
    #[serde(default)]
    pub number_of_bathrooms: Option<i32>,
    #[serde(default)]
    pub price: Option<f64>,
}

const SALE: &str = "PropertyForSale";
const RENT: &str = "PropertyForRent";

impl From<&PropertyDetails> for JsonPropertyDetails {
    fn from(details: &PropertyDetails) -> Self {
        Self {
            address: Some(details.address().to_string()),
            town: Some(details.town().to_string()),
            property_type: Some(details.property_type().to_string()),
            size: Some(details.size()),
            number_of_bedrooms: i32::try_from(details.bedrooms()).ok(),
            number_of_bathrooms: i32::try_from(details.bathrooms()).ok(),
            price: Some(details.price()),
        }
    }
}

impl JsonPropertyDetails {
    /// `entity` names the record kind in missing-field errors
    fn into_model(self, entity: &'static str) -> Result<PropertyDetails, LoadError> {
        Ok(PropertyDetails::new(
            required(self.address, entity, "address")?,
            required(self.town, entity, "town")?,
            required(self.property_type, entity, "propertyType")?,
            required(self.size, entity, "size")?,
            required(self.number_of_bedrooms, entity, "numberOfBedrooms")?,
            required(self.number_of_bathrooms, entity, "numberOfBathrooms")?,
            required(self.price, entity, "price")?,
        )?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonPropertyForSale {
    #[serde(flatten)]
    pub details: JsonPropertyDetails,
    #[serde(default)]
    pub listing_date: Option<String>,
}

impl From<&PropertyForSale> for JsonPropertyForSale {
    fn from(property: &PropertyForSale) -> Self {
        Self {
            details: property.details().into(),
            listing_date: Some(property.listing_date().to_string()),
        }
    }
}

impl JsonPropertyForSale {
    pub fn into_model(self) -> Result<PropertyForSale, LoadError> {
        let details = self.details.into_model(SALE)?;
        let listing_date = required(self.listing_date, SALE, "listingDate")?;
        Ok(Property::for_sale(
            details,
            parse_date("listingDate", &listing_date)?,
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonPropertyForRent {
    #[serde(flatten)]
    pub details: JsonPropertyDetails,
    #[serde(default)]
    pub available_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl From<&PropertyForRent> for JsonPropertyForRent {
    fn from(property: &PropertyForRent) -> Self {
        Self {
            details: property.details().into(),
            available_from: Some(property.available_from().to_string()),
            remark: property.remark().map(str::to_string),
        }
    }
}

impl JsonPropertyForRent {
    pub fn into_model(self) -> Result<PropertyForRent, LoadError> {
        let details = self.details.into_model(RENT)?;
        let available_from = required(self.available_from, RENT, "availableFrom")?;
        Ok(Property::for_rent(
            details,
            parse_date("availableFrom", &available_from)?,
            self.remark,
        ))
    }
}

/// The whole stored document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAddressBook {
    #[serde(default)]
    pub persons: Vec<JsonPerson>,
    #[serde(default)]
    pub properties_for_sale: Vec<JsonPropertyForSale>,
    #[serde(default)]
    pub properties_for_rent: Vec<JsonPropertyForRent>,
}

impl From<&AddressBook> for JsonAddressBook {
    fn from(book: &AddressBook) -> Self {
        Self {
            persons: book.persons().iter().map(JsonPerson::from).collect(),
            properties_for_sale: book
                .properties_for_sale()
                .iter()
                .map(JsonPropertyForSale::from)
                .collect(),
            properties_for_rent: book
                .properties_for_rent()
                .iter()
                .map(JsonPropertyForRent::from)
                .collect(),
        }
    }
}

impl JsonAddressBook {
    /// Rebuild the book record by record, stopping at the first invalid or duplicate entry.
    pub fn into_model(self) -> Result<AddressBook, LoadError> {
        let mut book = AddressBook::new();
        for person in self.persons {
            book.add(person.into_model()?)
                .map_err(|_| LoadError::DuplicatePersons)?;
        }
        for property in self.properties_for_sale {
            book.add(property.into_model()?)
                .map_err(|_| LoadError::DuplicateProperties)?;
        }
        for property in self.properties_for_rent {
            book.add(property.into_model()?)
                .map_err(|_| LoadError::DuplicateProperties)?;
        }
        Ok(book)
    }
}
