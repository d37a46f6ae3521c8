use std::fmt;

/// Marker that introduces a field in command arguments, e.g. `a/` in `a/123 Main St`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(text: &'static str) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// Person fields
pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_BIRTHDAY: Prefix = Prefix::new("b/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_REMARK: Prefix = Prefix::new("r/");

// Property fields. `t/` is the town here; person and property commands never share a prefix set.
pub const PREFIX_TOWN: Prefix = Prefix::new("t/");
pub const PREFIX_PROPERTY_TYPE: Prefix = Prefix::new("pt/");
pub const PREFIX_SIZE: Prefix = Prefix::new("s/");
pub const PREFIX_BEDROOMS: Prefix = Prefix::new("br/");
pub const PREFIX_BATHROOMS: Prefix = Prefix::new("ba/");
pub const PREFIX_PRICE: Prefix = Prefix::new("pr/");
pub const PREFIX_LISTING_DATE: Prefix = Prefix::new("ld/");
pub const PREFIX_AVAILABLE_FROM: Prefix = Prefix::new("af/");

/// A required prefix and the field name reported when it is absent
pub type RequiredField = (Prefix, &'static str);

pub const ADD_PERSON_FIELDS: [RequiredField; 4] = [
    (PREFIX_NAME, "name"),
    (PREFIX_PHONE, "phone"),
    (PREFIX_EMAIL, "email"),
    (PREFIX_ADDRESS, "address"),
];

pub const ADD_SALE_FIELDS: [RequiredField; 8] = [
    (PREFIX_ADDRESS, "address"),
    (PREFIX_TOWN, "town"),
    (PREFIX_PROPERTY_TYPE, "type"),
    (PREFIX_SIZE, "size"),
    (PREFIX_BEDROOMS, "bedrooms"),
    (PREFIX_BATHROOMS, "bathrooms"),
    (PREFIX_PRICE, "price"),
    (PREFIX_LISTING_DATE, "listing date"),
];

pub const ADD_RENT_FIELDS: [RequiredField; 8] = [
    (PREFIX_ADDRESS, "address"),
    (PREFIX_TOWN, "town"),
    (PREFIX_PROPERTY_TYPE, "type"),
    (PREFIX_SIZE, "size"),
    (PREFIX_BEDROOMS, "bedrooms"),
    (PREFIX_BATHROOMS, "bathrooms"),
    (PREFIX_PRICE, "price"),
    (PREFIX_AVAILABLE_FROM, "available from"),
];
