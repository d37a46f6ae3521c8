use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use property_book::storage::{JsonStorage, Storage};
use property_book::{Config, Logic};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so they never mix with command output
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(io::stderr)
        .init();

    info!("🏠 Property Book");
    info!(data_file = %config.data_file.display(), "using data file");

    let mut logic = Logic::load(JsonStorage::new(&config.data_file));

    if let Some(line) = config.one_shot() {
        return run_once(&mut logic, &line);
    }
    run_interactive(&mut logic)
}

fn run_once<S: Storage>(logic: &mut Logic<S>, line: &str) -> anyhow::Result<()> {
    match logic.execute(line) {
        Ok(result) => {
            println!("{}", result.feedback);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn run_interactive<S: Storage>(logic: &mut Logic<S>) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("Welcome! Type `help` to see every command.");

    loop {
        print!("> ");
        stdout.flush().context("failed to flush stdout")?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read command")?;
        if read == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match logic.execute(&line) {
            Ok(result) => {
                println!("{}", result.feedback);
                if result.exit {
                    return Ok(());
                }
            }
            Err(err) => println!("{err}"),
        }
    }

    // Every successful command has already been saved
    info!("end of input");
    Ok(())
}
