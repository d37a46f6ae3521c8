pub mod add;
pub mod delete;
pub mod list;
pub mod remark;

use thiserror::Error;
use tracing::debug;

use crate::models::{Person, PropertyForRent, PropertyForSale, Rent, Sale};
use crate::store::{AddressBook, CollectionError, Model};

pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use list::{FindCommand, ListPropertiesCommand};
pub use remark::RemarkCommand;

pub const SORT_WORD: &str = "sort";
pub const CLEAR_WORD: &str = "clear";
pub const HELP_WORD: &str = "help";
pub const EXIT_WORD: &str = "exit";

pub const SORT_USAGE: &str = "sort: Sorts persons by name.\n\
    Parameters: asc|desc\n\
    Example: sort desc";

pub const HELP_USAGE: &str = "help: Shows every command and its parameters.\n\
    Example: help";

/// Outcome of a successful command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Message shown to the user
    pub feedback: String,
    /// The application should save and stop
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: false,
        }
    }

    fn exiting(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("This {kind} already exists in the book")]
    Duplicate { kind: &'static str },

    #[error("The {kind} index provided is invalid")]
    InvalidIndex { kind: &'static str },

    #[error(transparent)]
    Collection(#[from] CollectionError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// A parsed, ready-to-run user action
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddPerson(AddCommand<Person>),
    AddSale(AddCommand<PropertyForSale>),
    AddRent(AddCommand<PropertyForRent>),
    DeletePerson(DeleteCommand<Person>),
    DeleteSale(DeleteCommand<PropertyForSale>),
    DeleteRent(DeleteCommand<PropertyForRent>),
    ListPersons,
    Find(FindCommand),
    ListSales(ListPropertiesCommand<Sale>),
    ListRents(ListPropertiesCommand<Rent>),
    Remark(RemarkCommand),
    Sort(SortOrder),
    Clear,
    Help,
    Exit,
}

impl Command {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        debug!(command = ?self, "executing command");
        match self {
            Command::AddPerson(command) => command.execute(model),
            Command::AddSale(command) => command.execute(model),
            Command::AddRent(command) => command.execute(model),
            Command::DeletePerson(command) => command.execute(model),
            Command::DeleteSale(command) => command.execute(model),
            Command::DeleteRent(command) => command.execute(model),
            Command::ListPersons => Ok(list::list_persons(model)),
            Command::Find(command) => Ok(command.execute(model)),
            Command::ListSales(command) => Ok(command.execute(model)),
            Command::ListRents(command) => Ok(command.execute(model)),
            Command::Remark(command) => command.execute(model),
            Command::Sort(order) => Ok(sort_persons(model, order)),
            Command::Clear => {
                model.reset_data(&AddressBook::new())?;
                Ok(CommandResult::new("Address book has been cleared!"))
            }
            Command::Help => Ok(CommandResult::new(help_text())),
            Command::Exit => Ok(CommandResult::exiting(
                "Exiting Address Book as requested ...",
            )),
        }
    }
}

fn sort_persons(model: &mut Model, order: SortOrder) -> CommandResult {
    match order {
        SortOrder::Ascending => {
            model.sort::<Person, _>(|a, b| a.name().cmp(b.name()));
            CommandResult::new("Sorted persons by name in ascending order")
        }
        SortOrder::Descending => {
            model.sort::<Person, _>(|a, b| b.name().cmp(a.name()));
            CommandResult::new("Sorted persons by name in descending order")
        }
    }
}

pub fn help_text() -> String {
    [
        add::ADD_PERSON_USAGE,
        add::ADD_SALE_USAGE,
        add::ADD_RENT_USAGE,
        list::FIND_USAGE,
        list::LIST_PROPERTIES_USAGE,
        delete::DELETE_USAGE,
        remark::REMARK_USAGE,
        SORT_USAGE,
        "list: Lists all persons.",
        "clear: Removes every person and property.",
        "exit: Saves and exits the program.",
    ]
    .join("\n\n")
}
