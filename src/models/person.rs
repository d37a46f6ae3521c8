use std::collections::BTreeSet;
use std::fmt;

use chrono::{Local, NaiveDate};

use super::error::ValidationError;
use super::property::parse_date;

macro_rules! text_field {
    ($name:ident) => {
        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

fn is_ascii_alnum(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Alphanumeric runs joined by single separator characters, e.g. `a.b-c`
fn is_joined_alnum(text: &str, separators: &[char]) -> bool {
    text.split(|c| separators.contains(&c)).all(is_ascii_alnum)
}

/// A person's full name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let mut chars = text.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_alphanumeric())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == ' ');
        if !valid {
            return Err(ValidationError::InvalidName);
        }
        Ok(Self(text.to_string()))
    }
}

text_field!(Name);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        if text.len() < 3 || !text.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhone);
        }
        Ok(Self(text.to_string()))
    }
}

text_field!(Phone);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let (local, domain) = text.split_once('@').ok_or(ValidationError::InvalidEmail)?;
        if !is_joined_alnum(local, &['+', '_', '.', '-']) {
            return Err(ValidationError::InvalidEmail);
        }

        let labels: Vec<&str> = domain.split('.').collect();
        let labels_valid = labels.iter().all(|label| is_joined_alnum(label, &['-']));
        let last_long_enough = labels.last().is_some_and(|label| label.len() >= 2);
        if !labels_valid || !last_long_enough {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(Self(text.to_string()))
    }
}

text_field!(Email);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::Blank { field: "address" });
        }
        Ok(Self(text.to_string()))
    }
}

text_field!(Address);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        if !is_ascii_alnum(text) {
            return Err(ValidationError::InvalidTag);
        }
        Ok(Self(text.to_string()))
    }
}

text_field!(Tag);

/// Free-form note about a person, possibly empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Remark(String);

impl Remark {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

text_field!(Remark);

/// Earliest birthday the book accepts
pub fn earliest_birthday() -> NaiveDate {
    NaiveDate::from_ymd_opt(1908, 5, 23).unwrap_or(NaiveDate::MIN)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse an optional birthday, bounded by today's local date.
    ///
    /// An empty string means the person has no recorded birthday.
    pub fn parse(text: &str) -> Result<Option<Self>, ValidationError> {
        Self::parse_as_of(text, Local::now().date_naive())
    }

    pub fn parse_as_of(text: &str, today: NaiveDate) -> Result<Option<Self>, ValidationError> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        let date = parse_date("birthday", text)?;
        let earliest = earliest_birthday();
        if date < earliest || date > today {
            return Err(ValidationError::DateOutOfRange {
                field: "birthday",
                earliest,
                latest: today,
            });
        }
        Ok(Some(Self(date)))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A contact in the book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    birthday: Option<Birthday>,
    tags: BTreeSet<Tag>,
    remark: Remark,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        birthday: Option<Birthday>,
        tags: BTreeSet<Tag>,
        remark: Remark,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            birthday,
            tags,
            remark,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn remark(&self) -> &Remark {
        &self.remark
    }

    /// Two entries describe the same person when their names match,
    /// whatever their other details
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }

    pub fn with_remark(&self, remark: Remark) -> Self {
        Self {
            remark,
            ..self.clone()
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}",
            self.name, self.phone, self.email, self.address
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, "; Birthday: {}", birthday)?;
        }
        if !self.remark.is_empty() {
            write!(f, "; Remark: {}", self.remark)?;
        }
        f.write_str("; Tags: ")?;
        for tag in &self.tags {
            write!(f, "[{}]", tag)?;
        }
        Ok(())
    }
}
