use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Contact and property listing book
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about)]
pub struct Config {
    /// JSON file the book is loaded from and saved to
    #[arg(
        long,
        env = "PROPERTY_BOOK_DATA",
        default_value = "data/addressbook.json"
    )]
    pub data_file: PathBuf,

    /// Log filter directive, e.g. `info` or `property_book=debug`
    #[arg(long = "log", env = "PROPERTY_BOOK_LOG", default_value = "warn")]
    pub log_filter: String,

    /// Run this one command and exit instead of reading commands from stdin
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Config {
    /// The one-shot command line, if one was given
    pub fn one_shot(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }

    /// Log filter, falling back to `warn` when the directive does not parse
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["property-book"]).unwrap();
        assert_eq!(config.data_file, PathBuf::from("data/addressbook.json"));
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.one_shot(), None);
    }

    #[test]
    fn trailing_words_form_one_command() {
        let config = Config::try_parse_from([
            "property-book",
            "--data-file",
            "/tmp/book.json",
            "list-rent",
            "t/Downtown",
        ])
        .unwrap();
        assert_eq!(config.data_file, PathBuf::from("/tmp/book.json"));
        assert_eq!(config.one_shot().as_deref(), Some("list-rent t/Downtown"));
    }
}
