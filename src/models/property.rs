use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;

use super::error::ValidationError;

/// Calendar date format used for every date field, on the command line and on disk
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date for the named field
pub fn parse_date(field: &'static str, text: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate { field })
}

fn require_text(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank { field });
    }
    Ok(value)
}

fn require_count(field: &'static str, value: i32) -> Result<u32, ValidationError> {
    if value < 0 {
        return Err(ValidationError::NegativeCount { field });
    }
    Ok(value.unsigned_abs())
}

/// Fields shared by every listing, whether it is for sale or for rent
#[derive(Debug, Clone)]
pub struct PropertyDetails {
    address: String,
    town: String,
    property_type: String,
    /// Floor area in square meters
    size: f64,
    bedrooms: u32,
    bathrooms: u32,
    price: f64,
}

impl PropertyDetails {
    /// Validate and build the shared listing fields
    pub fn new(
        address: impl Into<String>,
        town: impl Into<String>,
        property_type: impl Into<String>,
        size: f64,
        bedrooms: i32,
        bathrooms: i32,
        price: f64,
    ) -> Result<Self, ValidationError> {
        let address = require_text("address", address.into())?;
        let town = require_text("town", town.into())?;
        let property_type = require_text("type", property_type.into())?;

        if !size.is_finite() {
            return Err(ValidationError::NotFinite { field: "size" });
        }
        if size <= 0.0 {
            return Err(ValidationError::NonPositiveSize);
        }
        let bedrooms = require_count("bedrooms", bedrooms)?;
        let bathrooms = require_count("bathrooms", bathrooms)?;
        if !price.is_finite() {
            return Err(ValidationError::NotFinite { field: "price" });
        }
        if price < 0.0 {
            return Err(ValidationError::NegativePrice);
        }

        Ok(Self {
            address,
            town,
            property_type,
            size,
            bedrooms,
            bathrooms,
            price,
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn town(&self) -> &str {
        &self.town
    }

    pub fn property_type(&self) -> &str {
        &self.property_type
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn bedrooms(&self) -> u32 {
        self.bedrooms
    }

    pub fn bathrooms(&self) -> u32 {
        self.bathrooms
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

// Floats compare by bit pattern so that equality stays reflexive and agrees with Hash.
impl PartialEq for PropertyDetails {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
            && self.town == other.town
            && self.property_type == other.property_type
            && self.size.to_bits() == other.size.to_bits()
            && self.bedrooms == other.bedrooms
            && self.bathrooms == other.bathrooms
            && self.price.to_bits() == other.price.to_bits()
    }
}

impl Eq for PropertyDetails {}

impl Hash for PropertyDetails {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
        self.town.hash(state);
        self.property_type.hash(state);
        self.size.to_bits().hash(state);
        self.bedrooms.hash(state);
        self.bathrooms.hash(state);
        self.price.to_bits().hash(state);
    }
}

impl fmt::Display for PropertyDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Property[address={}, town={}, type={}, size={:.2}, bedrooms={}, bathrooms={}, price={:.2}]",
            self.address,
            self.town,
            self.property_type,
            self.size,
            self.bedrooms,
            self.bathrooms,
            self.price
        )
    }
}

/// Terms of a listing offered for sale
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sale {
    listing_date: NaiveDate,
}

impl fmt::Display for Sale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listing Date: {}", self.listing_date)
    }
}

/// Terms of a listing offered for rent.
///
/// The remark is free text attached to the listing and does not take part in
/// equality or hashing: two rentals that differ only by remark are the same
/// listing.
#[derive(Debug, Clone)]
pub struct Rent {
    available_from: NaiveDate,
    remark: Option<String>,
}

impl PartialEq for Rent {
    fn eq(&self, other: &Self) -> bool {
        self.available_from == other.available_from
    }
}

impl Eq for Rent {}

impl Hash for Rent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.available_from.hash(state);
    }
}

impl fmt::Display for Rent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Available From: {}", self.available_from)?;
        if let Some(remark) = &self.remark {
            write!(f, ", Remark: {}", remark)?;
        }
        Ok(())
    }
}

/// A listing: the shared property details plus kind-specific terms
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Property<T> {
    details: PropertyDetails,
    terms: T,
}

pub type PropertyForSale = Property<Sale>;
pub type PropertyForRent = Property<Rent>;

impl<T> Property<T> {
    pub fn details(&self) -> &PropertyDetails {
        &self.details
    }

    pub fn terms(&self) -> &T {
        &self.terms
    }
}

impl Property<Sale> {
    pub fn for_sale(details: PropertyDetails, listing_date: NaiveDate) -> Self {
        Self {
            details,
            terms: Sale { listing_date },
        }
    }

    pub fn listing_date(&self) -> NaiveDate {
        self.terms.listing_date
    }
}

impl Property<Rent> {
    /// A blank remark is stored as no remark at all
    pub fn for_rent(details: PropertyDetails, available_from: NaiveDate, remark: Option<String>) -> Self {
        let remark = remark.filter(|text| !text.trim().is_empty());
        Self {
            details,
            terms: Rent {
                available_from,
                remark,
            },
        }
    }

    pub fn available_from(&self) -> NaiveDate {
        self.terms.available_from
    }

    pub fn remark(&self) -> Option<&str> {
        self.terms.remark.as_deref()
    }
}

impl<T: fmt::Display> fmt::Display for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.details, self.terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn details() -> PropertyDetails {
        PropertyDetails::new("123 Main St", "Central Town", "Apartment", 85.5, 3, 2, 500_000.0).unwrap()
    }

    #[test]
    fn valid_details_keep_every_field() {
        let details = details();
        assert_eq!(details.address(), "123 Main St");
        assert_eq!(details.town(), "Central Town");
        assert_eq!(details.property_type(), "Apartment");
        assert_eq!(details.size(), 85.5);
        assert_eq!(details.bedrooms(), 3);
        assert_eq!(details.bathrooms(), 2);
        assert_eq!(details.price(), 500_000.0);
    }

    #[rstest]
    #[case("", "Town", "Condo", 10.0, 1, 1, 1.0, ValidationError::Blank { field: "address" })]
    #[case("1 St", "  ", "Condo", 10.0, 1, 1, 1.0, ValidationError::Blank { field: "town" })]
    #[case("1 St", "Town", "", 10.0, 1, 1, 1.0, ValidationError::Blank { field: "type" })]
    #[case("1 St", "Town", "Condo", 0.0, 1, 1, 1.0, ValidationError::NonPositiveSize)]
    #[case("1 St", "Town", "Condo", -3.0, 1, 1, 1.0, ValidationError::NonPositiveSize)]
    #[case("1 St", "Town", "Condo", f64::NAN, 1, 1, 1.0, ValidationError::NotFinite { field: "size" })]
    #[case("1 St", "Town", "Condo", 10.0, -1, 1, 1.0, ValidationError::NegativeCount { field: "bedrooms" })]
    #[case("1 St", "Town", "Condo", 10.0, 1, -2, 1.0, ValidationError::NegativeCount { field: "bathrooms" })]
    #[case("1 St", "Town", "Condo", 10.0, 1, 1, -0.5, ValidationError::NegativePrice)]
    #[case("1 St", "Town", "Condo", 10.0, 1, 1, f64::INFINITY, ValidationError::NotFinite { field: "price" })]
    fn invalid_details_are_rejected(
        #[case] address: &str,
        #[case] town: &str,
        #[case] kind: &str,
        #[case] size: f64,
        #[case] bedrooms: i32,
        #[case] bathrooms: i32,
        #[case] price: f64,
        #[case] expected: ValidationError,
    ) {
        let err = PropertyDetails::new(address, town, kind, size, bedrooms, bathrooms, price).unwrap_err();
        assert_eq!(err, expected);
    }

    #[test]
    fn zero_rooms_and_free_listing_are_allowed() {
        assert!(PropertyDetails::new("Lot 4", "Outskirts", "Land", 400.0, 0, 0, 0.0).is_ok());
    }

    #[test]
    fn sale_equality_includes_listing_date() {
        let first = PropertyForSale::for_sale(details(), date(2024, 10, 1));
        let same = PropertyForSale::for_sale(details(), date(2024, 10, 1));
        let relisted = PropertyForSale::for_sale(details(), date(2024, 11, 1));

        assert_eq!(first, same);
        assert_ne!(first, relisted);
    }

    #[test]
    fn rent_equality_ignores_remark() {
        let quiet = PropertyForRent::for_rent(details(), date(2024, 10, 1), None);
        let noted = PropertyForRent::for_rent(details(), date(2024, 10, 1), Some("Great view".into()));
        let later = PropertyForRent::for_rent(details(), date(2024, 12, 1), None);

        assert_eq!(quiet, noted);
        assert_ne!(quiet, later);
    }

    #[test]
    fn blank_rent_remark_is_dropped() {
        let rent = PropertyForRent::for_rent(details(), date(2024, 10, 1), Some("   ".into()));
        assert_eq!(rent.remark(), None);
    }

    #[test]
    fn display_embeds_every_field() {
        let sale = PropertyForSale::for_sale(details(), date(2024, 10, 1));
        assert_eq!(
            sale.to_string(),
            "Property[address=123 Main St, town=Central Town, type=Apartment, size=85.50, \
             bedrooms=3, bathrooms=2, price=500000.00], Listing Date: 2024-10-01"
        );

        let rent = PropertyForRent::for_rent(details(), date(2024, 10, 1), Some("Great view".into()));
        assert!(rent.to_string().ends_with("Available From: 2024-10-01, Remark: Great view"));
    }

    #[rstest]
    #[case("2024-02-30")]
    #[case("01/10/2024")]
    #[case("")]
    fn bad_dates_fail_to_parse(#[case] text: &str) {
        assert_eq!(
            parse_date("listing date", text),
            Err(ValidationError::InvalidDate { field: "listing date" })
        );
    }
}
