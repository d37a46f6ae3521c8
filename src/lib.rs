pub mod commands;
pub mod config;
pub mod logic;
pub mod models;
pub mod parser;
pub mod storage;
pub mod store;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use logic::{Logic, LogicError};
