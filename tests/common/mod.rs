#![allow(dead_code)]

use property_book::storage::JsonStorage;
use property_book::Logic;
use tempfile::TempDir;

pub const ADD_AMY: &str =
    "add n/Amy Bee p/85355255 e/amy@gmail.com a/123, Jurong West Ave 6, #08-111 t/friend";
pub const ADD_BOB: &str = "add n/Bob Choo p/22222222 e/bob@example.com a/Block 123, Bobby Street 3";

pub const ADD_SALE: &str =
    "add-sale a/123 Main St t/Central Town pt/Apartment s/85.5 br/3 ba/2 pr/500000.0 ld/2024-10-01";
pub const ADD_RENT: &str =
    "add-rent a/456 Elm St t/Downtown pt/Apartment s/100.0 br/2 ba/1 pr/1500.0 af/2024-12-01 r/Close to metro";

/// A fresh book saved to a file inside a temporary directory
pub struct Session {
    pub dir: TempDir,
    pub logic: Logic<JsonStorage>,
}

impl Session {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let logic = Logic::load(JsonStorage::new(dir.path().join("data/addressbook.json")));
        Self { dir, logic }
    }

    pub fn storage(&self) -> JsonStorage {
        self.logic.storage().clone()
    }

    /// Run a command that must succeed and return its feedback
    pub fn run(&mut self, line: &str) -> String {
        match self.logic.execute(line) {
            Ok(result) => result.feedback,
            Err(err) => panic!("`{line}` failed: {err}"),
        }
    }

    /// Run a command that must fail and return its message
    pub fn fail(&mut self, line: &str) -> String {
        match self.logic.execute(line) {
            Ok(result) => panic!("`{line}` unexpectedly succeeded: {}", result.feedback),
            Err(err) => err.to_string(),
        }
    }
}
