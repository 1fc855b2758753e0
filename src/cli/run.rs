use super::Console;
use crate::{
    domain::DeleteOutcome,
    helper::{self, MENU_RULE_WIDTH},
    prelude::{
        AppError, ContactManager,
        command::{Cli, MENU_OPTIONS, MenuChoice, parse_menu_choice},
        stores::JsonStorage,
    },
};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let storage = JsonStorage::new(&cli.file);
    let (mut manager, status) = ContactManager::open(Box::new(storage));

    if status.is_recovered() {
        tracing::warn!(path = %cli.file.display(), ?status, "contact file ignored");
    } else {
        tracing::debug!(path = %cli.file.display(), ?status, "contact file opened");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    run_menu(&mut manager, &mut console)
}

fn init_tracing(level: &str) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(level)
        .map_err(|e| AppError::Config(format!("invalid log level '{}': {}", level, e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

/// Runs the menu until the user exits or the input ends.
///
/// Validation and lookup failures are printed and the loop goes on. Storage
/// failures are returned to the caller.
pub fn run_menu<R: BufRead, W: Write>(
    manager: &mut ContactManager,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    console.say("Welcome to Contact Book Manager!")?;

    loop {
        show_menu(console)?;

        let Some(action) = console.prompt("Choose an option (1-6): ")? else {
            tracing::debug!("input closed at menu");
            return Ok(());
        };

        let result = match parse_menu_choice(&action) {
            Ok(MenuChoice::AddContact) => add_contact(manager, console),
            Ok(MenuChoice::ViewContacts) => view_contacts(manager, console),
            Ok(MenuChoice::SearchContact) => search_contact(manager, console),
            Ok(MenuChoice::UpdateContact) => update_contact(manager, console),
            Ok(MenuChoice::DeleteContact) => delete_contact(manager, console),
            Ok(MenuChoice::Exit) => {
                console.say("\nThank you for using Contact Book Manager!")?;
                console.say("All contacts have been saved automatically.")?;
                return Ok(());
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {}
            Err(e) if e.is_recoverable() => console.error(&e)?,
            Err(e) => return Err(e),
        }

        console.get_input("\nPress Enter to continue...")?;
    }
}

fn show_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), AppError> {
    let rule = "=".repeat(MENU_RULE_WIDTH);

    console.say(&format!("\n{}", rule))?;
    console.say("CONTACT BOOK MANAGER")?;
    console.say(&rule)?;
    for option in MENU_OPTIONS {
        console.say(option)?;
    }
    console.say(&rule)
}

fn add_contact<R: BufRead, W: Write>(
    manager: &mut ContactManager,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    console.say("\n=== ADD NEW CONTACT ===")?;

    let name = console.get_input("Enter contact name: ")?;
    manager.validate_new_name(&name)?;

    let phone = console.get_input("Enter phone number: ")?;
    let email = console.get_input("Enter email address: ")?;
    let address = console.get_input("Enter address: ")?;

    let name = manager.add_contact(&name, &phone, &email, &address)?;
    console.say(&format!("SUCCESS: Contact '{}' added successfully!", name))
}

fn view_contacts<R: BufRead, W: Write>(
    manager: &ContactManager,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    if manager.is_empty() {
        return console.say("\nNo contacts found!");
    }

    let listing = manager.view_all();

    console.say("\n=== CONTACT LIST ===")?;
    console.say(&helper::contact_table(&listing.contacts))?;
    console.say(&format!("\nTotal contacts: {}", listing.total))
}

fn search_contact<R: BufRead, W: Write>(
    manager: &ContactManager,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    if manager.is_empty() {
        return console.say("\nNo contacts to search!");
    }

    console.say("\n=== SEARCH CONTACT ===")?;
    let query = console.get_input("Enter name or phone number to search: ")?;

    let matches = manager.search(&query)?;
    if matches.is_empty() {
        return console.say("No contacts found matching your search!");
    }

    console.say(&format!("\nFound {} match(es):", matches.len()))?;
    console.say(&helper::contact_table(&matches))
}

fn update_contact<R: BufRead, W: Write>(
    manager: &mut ContactManager,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    if manager.is_empty() {
        return console.say("\nNo contacts to update!");
    }

    console.say("\n=== UPDATE CONTACT ===")?;
    let name = console.get_input("Enter the name of the contact to update: ")?;

    let current = manager.get_by_name(&name)?.clone();

    console.say(&format!("\nCurrent details for '{}':", current.name))?;
    console.say(&helper::display_details(&current))?;
    console.say("\nEnter new details (press Enter to keep current value):")?;

    let new_phone = console.get_input(&format!("Phone ({}): ", current.phone))?;
    let new_email = console.get_input(&format!("Email ({}): ", current.email))?;
    let new_address = console.get_input(&format!("Address ({}): ", current.address))?;

    let name = manager.update_contact(&current.name, &new_phone, &new_email, &new_address)?;
    console.say(&format!("SUCCESS: Contact '{}' updated successfully!", name))
}

fn delete_contact<R: BufRead, W: Write>(
    manager: &mut ContactManager,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    if manager.is_empty() {
        return console.say("\nNo contacts to delete!");
    }

    console.say("\n=== DELETE CONTACT ===")?;
    let name = console.get_input("Enter the name of the contact to delete: ")?;

    let target = manager.get_by_name(&name)?.clone();

    console.say("\nContact to delete:")?;
    console.say(&helper::display_contact(&target))?;

    let consent = console.get_input(&format!(
        "\nAre you sure you want to delete '{}'? (y/N): ",
        target.name
    ))?;

    match manager.delete_contact(&target.name, &consent)? {
        DeleteOutcome::Deleted(name) => {
            console.say(&format!("SUCCESS: Contact '{}' deleted successfully!", name))
        }
        DeleteOutcome::Cancelled => console.say("Deletion cancelled."),
    }
}
