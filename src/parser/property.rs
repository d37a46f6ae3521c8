use chrono::NaiveDate;

use crate::commands::add::{ADD_RENT_USAGE, ADD_SALE_USAGE};
use crate::commands::list::LIST_PROPERTIES_USAGE;
use crate::commands::{AddCommand, ListPropertiesCommand};
use crate::models::{Property, PropertyDetails, PropertyForRent, PropertyForSale};
use crate::store::Entity;

use super::error::ParseError;
use super::fields::{parse_date, parse_double, parse_int};
use super::syntax::{
    Prefix, RequiredField, ADD_RENT_FIELDS, ADD_SALE_FIELDS, PREFIX_ADDRESS, PREFIX_AVAILABLE_FROM,
    PREFIX_BATHROOMS, PREFIX_BEDROOMS, PREFIX_LISTING_DATE, PREFIX_PRICE, PREFIX_PROPERTY_TYPE,
    PREFIX_REMARK, PREFIX_SIZE, PREFIX_TOWN,
};
use super::tokenizer::{tokenize, ArgumentMultimap};

pub fn parse_add_sale(args: &str) -> Result<AddCommand<PropertyForSale>, ParseError> {
    let prefixes = [
        PREFIX_ADDRESS,
        PREFIX_TOWN,
        PREFIX_PROPERTY_TYPE,
        PREFIX_SIZE,
        PREFIX_BEDROOMS,
        PREFIX_BATHROOMS,
        PREFIX_PRICE,
        PREFIX_LISTING_DATE,
    ];
    let map = tokenize(args, &prefixes);
    check_shape(&map, &ADD_SALE_FIELDS, &prefixes, ADD_SALE_USAGE)?;

    let (details, listing_date) = listing_fields(&map, &ADD_SALE_FIELDS)?;
    Ok(AddCommand::new(Property::for_sale(details, listing_date)))
}

pub fn parse_add_rent(args: &str) -> Result<AddCommand<PropertyForRent>, ParseError> {
    let prefixes = [
        PREFIX_ADDRESS,
        PREFIX_TOWN,
        PREFIX_PROPERTY_TYPE,
        PREFIX_SIZE,
        PREFIX_BEDROOMS,
        PREFIX_BATHROOMS,
        PREFIX_PRICE,
        PREFIX_AVAILABLE_FROM,
        PREFIX_REMARK,
    ];
    let map = tokenize(args, &prefixes);
    check_shape(&map, &ADD_RENT_FIELDS, &prefixes, ADD_RENT_USAGE)?;

    let (details, available_from) = listing_fields(&map, &ADD_RENT_FIELDS)?;
    let remark = map.value(PREFIX_REMARK).map(str::to_string);
    Ok(AddCommand::new(Property::for_rent(
        details,
        available_from,
        remark,
    )))
}

/// `list-sale` and `list-rent` share one grammar: an optional town
pub fn parse_list_properties<K: 'static>(
    args: &str,
) -> Result<ListPropertiesCommand<K>, ParseError>
where
    Property<K>: Entity,
{
    let map = tokenize(args, &[PREFIX_TOWN]);
    if !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: LIST_PROPERTIES_USAGE,
        });
    }
    map.verify_no_duplicates(&[PREFIX_TOWN])?;
    match map.value(PREFIX_TOWN) {
        Some("") => Err(ParseError::InvalidFormat {
            usage: LIST_PROPERTIES_USAGE,
        }),
        town => Ok(ListPropertiesCommand::new(town.map(str::to_string))),
    }
}

fn check_shape(
    map: &ArgumentMultimap,
    required: &[RequiredField],
    single_valued: &[Prefix],
    usage: &'static str,
) -> Result<(), ParseError> {
    if !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat { usage });
    }
    if let Some(field) = map.first_missing(required) {
        return Err(ParseError::MissingField { field });
    }
    map.verify_no_duplicates(single_valued)
}

/// The seven shared listing fields followed by the kind's date
fn listing_fields(
    map: &ArgumentMultimap,
    fields: &[RequiredField; 8],
) -> Result<(PropertyDetails, NaiveDate), ParseError> {
    let [address, town, property_type, size, bedrooms, bathrooms, price, date] = *fields;

    let size = parse_double(size.1, map.require(size)?)?;
    let bedrooms = parse_int(bedrooms.1, map.require(bedrooms)?)?;
    let bathrooms = parse_int(bathrooms.1, map.require(bathrooms)?)?;
    let price = parse_double(price.1, map.require(price)?)?;
    let date = parse_date(date.1, map.require(date)?)?;

    let details = PropertyDetails::new(
        map.require(address)?,
        map.require(town)?,
        map.require(property_type)?,
        size,
        bedrooms,
        bathrooms,
        price,
    )?;
    Ok((details, date))
}
