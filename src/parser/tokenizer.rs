use std::collections::HashMap;

use super::error::ParseError;
use super::syntax::{Prefix, RequiredField};

/// Argument text split into the values of each prefix plus the leading preamble
#[derive(Debug, Default)]
pub struct ArgumentMultimap {
    values: HashMap<Prefix, Vec<String>>,
    preamble: String,
}

impl ArgumentMultimap {
    /// Last value given for `prefix`
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Name of the first field in `required` that has no value
    pub fn first_missing(&self, required: &[RequiredField]) -> Option<&'static str> {
        required
            .iter()
            .find(|(prefix, _)| self.value(*prefix).is_none())
            .map(|(_, field)| *field)
    }

    /// Value of a required field
    pub fn require(&self, (prefix, field): RequiredField) -> Result<&str, ParseError> {
        self.value(prefix).ok_or(ParseError::MissingField { field })
    }

    pub fn verify_no_duplicates(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let repeated: Vec<&str> = prefixes
            .iter()
            .filter(|prefix| self.all_values(**prefix).len() > 1)
            .map(Prefix::as_str)
            .collect();
        if repeated.is_empty() {
            return Ok(());
        }
        Err(ParseError::DuplicatePrefix {
            prefixes: repeated.join(" "),
        })
    }
}

/// Split `args` on the given prefixes.
///
/// A prefix only counts when it starts the text or follows whitespace, so
/// `pr/` never also matches as `r/`. Values and the preamble are trimmed.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|&prefix| {
            args.match_indices(prefix.as_str())
                .filter(move |(start, _)| {
                    args[..*start]
                        .chars()
                        .next_back()
                        .map_or(true, char::is_whitespace)
                })
                .map(move |(start, _)| (start, prefix))
        })
        .collect();
    positions.sort_by_key(|(start, _)| *start);
    positions.dedup_by_key(|(start, _)| *start);

    let preamble_end = positions.first().map_or(args.len(), |(start, _)| *start);
    let mut map = ArgumentMultimap {
        values: HashMap::new(),
        preamble: args[..preamble_end].trim().to_string(),
    };

    for (i, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        let value = args[value_start..value_end].trim().to_string();
        map.values.entry(*prefix).or_default().push(value);
    }

    map
}
