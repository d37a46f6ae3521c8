use std::marker::PhantomData;

use crate::models::{Person, Property};
use crate::store::{show_all, Entity, Model, Unique};

use super::CommandResult;

pub const LIST_PERSONS_WORD: &str = "list";
pub const FIND_WORD: &str = "find";
pub const LIST_SALE_WORD: &str = "list-sale";
pub const LIST_RENT_WORD: &str = "list-rent";

pub const FIND_USAGE: &str = "find: Finds all persons whose names contain any of the specified \
    keywords (case-insensitive) and displays them as a list with index numbers.\n\
    Parameters: KEYWORD [MORE_KEYWORDS]...\n\
    Example: find alice bob charlie";

pub const LIST_PROPERTIES_USAGE: &str = "list-sale, list-rent: Lists properties, optionally only \
    those in the given town (case-insensitive).\n\
    Parameters: [t/TOWN]\n\
    Example: list-rent t/Downtown";

/// Numbered lines for every entity in the current view
fn render<T: Entity>(model: &Model) -> String {
    model
        .filtered::<T>()
        .iter()
        .enumerate()
        .map(|(i, entity)| format!("{}. {}", i + 1, entity))
        .collect::<Vec<_>>()
        .join("\n")
}

fn listing<T: Entity>(model: &Model, header: String) -> CommandResult {
    let body = render::<T>(model);
    if body.is_empty() {
        CommandResult::new(header)
    } else {
        CommandResult::new(format!("{header}\n{body}"))
    }
}

pub fn list_persons(model: &mut Model) -> CommandResult {
    model.update_filter::<Person>(show_all());
    listing::<Person>(model, "Listed all persons".to_string())
}

/// Shows persons whose name contains any keyword as a whole word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn execute(self, model: &mut Model) -> CommandResult {
        let keywords = self.keywords;
        model.update_filter::<Person>(Box::new(move |person: &Person| {
            person
                .name()
                .as_str()
                .split_whitespace()
                .any(|word| keywords.iter().any(|k| word.eq_ignore_ascii_case(k)))
        }));
        let count = model.filtered::<Person>().len();
        listing::<Person>(model, format!("{count} persons listed!"))
    }
}

/// Shows listings of one kind, optionally restricted to a town
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPropertiesCommand<K> {
    town: Option<String>,
    kind: PhantomData<K>,
}

impl<K: 'static> ListPropertiesCommand<K>
where
    Property<K>: Entity,
{
    pub fn new(town: Option<String>) -> Self {
        Self {
            town,
            kind: PhantomData,
        }
    }

    pub fn town(&self) -> Option<&str> {
        self.town.as_deref()
    }

    pub fn execute(self, model: &mut Model) -> CommandResult {
        let header = match &self.town {
            Some(town) => format!("Listed every {} in {}", <Property<K> as Unique>::KIND, town),
            None => format!("Listed every {}", <Property<K> as Unique>::KIND),
        };
        match self.town {
            Some(town) => model.update_filter::<Property<K>>(Box::new(move |p: &Property<K>| {
                p.details().town().eq_ignore_ascii_case(&town)
            })),
            None => model.update_filter::<Property<K>>(show_all()),
        }
        listing::<Property<K>>(model, header)
    }
}
