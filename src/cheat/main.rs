use cheat::api::CheatApi;
use cheat::commands::{CmdMessage, MessageLevel};
use cheat::error::{CheatError, Result};
use cheat::model::Record;
use cheat::prompt::{Prompt, StdinPrompt};
use cheat::render;
use cheat::store::fs::CsvStore;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // The two usage branches touch no data and must not seed the store.
        None => {
            print_usage();
            Ok(())
        }
        Some(Commands::Delete { query: None }) => {
            println!("Usage: cheat delete <query>");
            Ok(())
        }
        Some(Commands::Add) => handle_add(&mut init_api()?, &mut StdinPrompt),
        Some(Commands::Delete { query: Some(query) }) => {
            handle_delete(&mut init_api()?, &query, &mut StdinPrompt)
        }
        Some(Commands::Search(tokens)) => {
            let term = tokens.into_iter().next().unwrap_or_default();
            handle_search(&init_api()?, &term)
        }
    }
}

fn resolve_data_dir() -> Result<PathBuf> {
    // CHEAT_DATA_DIR is primarily for tests, to isolate user state.
    if let Ok(dir) = std::env::var("CHEAT_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = ProjectDirs::from("com", "cheat", "cheat")
        .ok_or_else(|| CheatError::Store("could not determine user data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_api() -> Result<CheatApi<CsvStore>> {
    let store = CsvStore::new(resolve_data_dir()?);
    store.ensure_seeded()?;
    Ok(CheatApi::new(store))
}

fn handle_search(api: &CheatApi<CsvStore>, term: &str) -> Result<()> {
    let result = api.search(term)?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(api: &mut CheatApi<CsvStore>, prompt: &mut dyn Prompt) -> Result<()> {
    println!("{}", "Interactive add mode".blue());
    let tool = prompt.ask("Tool")?;
    let command = prompt.ask("Command")?;
    let description = prompt.ask("Description")?;
    let tags = prompt.ask("Tags")?;

    let result = api.add_record(Record::new(tool, command, description, tags))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut CheatApi<CsvStore>, query: &str, prompt: &mut dyn Prompt) -> Result<()> {
    let found = api.find_deletable(query)?;
    if found.listed_records.is_empty() {
        println!("{}", "No match found.".red());
        return Ok(());
    }

    print_records(&found.listed_records);
    let answer = prompt.ask("Delete these entries? (yes/no)")?;
    if !answer.eq_ignore_ascii_case("yes") {
        println!("Cancelled.");
        return Ok(());
    }

    let result = api.delete_records(&found.matched_positions)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_usage() {
    println!("Usage: cheat <term>            Search stored commands");
    println!("       cheat add              Add a new command interactively");
    println!("       cheat delete <query>   Delete commands matching <query>");
}

fn print_records(records: &[Record]) {
    if records.is_empty() {
        println!("{}", "No results found.".red());
        return;
    }
    println!("{}", render::record_table(records));
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
