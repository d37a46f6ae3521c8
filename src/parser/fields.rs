//! Conversions from raw field text to typed values.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::{parse_date as parse_model_date, Tag};

use super::error::ParseError;

pub fn parse_double(field: &'static str, value: &str) -> Result<f64, ParseError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or(ParseError::InvalidNumber { field })
}

pub fn parse_int(field: &'static str, value: &str) -> Result<i32, ParseError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidNumber { field })
}

pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ParseError> {
    Ok(parse_model_date(field, value)?)
}

/// One-based index, digits only
pub fn parse_index(value: &str) -> Result<usize, ParseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    match trimmed.parse::<usize>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(ParseError::InvalidIndex),
    }
}

pub fn parse_tags(values: &[String]) -> Result<BTreeSet<Tag>, ParseError> {
    values
        .iter()
        .map(|value| Tag::parse(value.trim()).map_err(ParseError::from))
        .collect()
}
