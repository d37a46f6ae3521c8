//! Turns one line of user input into a [`Command`].
//!
//! The first word picks the command; the rest is split on the field
//! prefixes that command understands (see [`syntax`]) and each value is
//! converted and validated before the command is built. Nothing here
//! touches the book, so a failed parse never changes any data.

pub mod error;
pub mod fields;
pub mod person;
pub mod property;
pub mod syntax;
pub mod tokenizer;

use crate::commands::add::{ADD_PERSON_WORD, ADD_RENT_WORD, ADD_SALE_WORD};
use crate::commands::delete::{DELETE_PERSON_WORD, DELETE_RENT_WORD, DELETE_SALE_WORD, DELETE_USAGE};
use crate::commands::list::{FIND_WORD, LIST_PERSONS_WORD, LIST_RENT_WORD, LIST_SALE_WORD};
use crate::commands::remark::REMARK_WORD;
use crate::commands::{
    Command, DeleteCommand, SortOrder, CLEAR_WORD, EXIT_WORD, HELP_USAGE, HELP_WORD, SORT_USAGE,
    SORT_WORD,
};
use crate::store::Entity;

pub use error::ParseError;

use fields::parse_index;

pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::InvalidFormat { usage: HELP_USAGE });
    }
    let (word, args) = input
        .split_once(char::is_whitespace)
        .unwrap_or((input, ""));

    let command = match word {
        ADD_PERSON_WORD => Command::AddPerson(person::parse_add_person(args)?),
        ADD_SALE_WORD => Command::AddSale(property::parse_add_sale(args)?),
        ADD_RENT_WORD => Command::AddRent(property::parse_add_rent(args)?),
        DELETE_PERSON_WORD => Command::DeletePerson(parse_delete(args)?),
        DELETE_SALE_WORD => Command::DeleteSale(parse_delete(args)?),
        DELETE_RENT_WORD => Command::DeleteRent(parse_delete(args)?),
        LIST_PERSONS_WORD => Command::ListPersons,
        FIND_WORD => Command::Find(person::parse_find(args)?),
        LIST_SALE_WORD => Command::ListSales(property::parse_list_properties(args)?),
        LIST_RENT_WORD => Command::ListRents(property::parse_list_properties(args)?),
        REMARK_WORD => Command::Remark(person::parse_remark(args)?),
        SORT_WORD => Command::Sort(parse_sort_order(args)?),
        CLEAR_WORD => Command::Clear,
        HELP_WORD => Command::Help,
        EXIT_WORD => Command::Exit,
        unknown => return Err(ParseError::UnknownCommand(unknown.to_string())),
    };
    Ok(command)
}

fn parse_delete<T: Entity>(args: &str) -> Result<DeleteCommand<T>, ParseError> {
    parse_index(args)
        .map(DeleteCommand::new)
        .map_err(|_| ParseError::InvalidFormat {
            usage: DELETE_USAGE,
        })
}

fn parse_sort_order(args: &str) -> Result<SortOrder, ParseError> {
    match args.trim().to_ascii_lowercase().as_str() {
        "" => Err(ParseError::InvalidFormat { usage: SORT_USAGE }),
        "asc" => Ok(SortOrder::Ascending),
        "desc" => Ok(SortOrder::Descending),
        _ => Err(ParseError::InvalidChoice {
            field: "sort order",
            allowed: "asc, desc",
        }),
    }
}
