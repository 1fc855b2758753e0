use crate::errors::AppError;
use crate::storage::DEFAULT_STORAGE_PATH;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Interactive contact book manager")]
pub struct Cli {
    /// Contact file to load at startup and save after every change
    #[arg(short, long, default_value = DEFAULT_STORAGE_PATH)]
    pub file: PathBuf,

    /// Log filter written to stderr (error, warn, info, debug, trace)
    #[arg(long, default_value = "error")]
    pub log_level: String,
}

/// Menu entries, selected by their number.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    AddContact,
    ViewContacts,
    SearchContact,
    UpdateContact,
    DeleteContact,
    Exit,
}

pub const MENU_OPTIONS: [&str; 6] = [
    "1. Add Contact",
    "2. View All Contacts",
    "3. Search Contact",
    "4. Update Contact",
    "5. Delete Contact",
    "6. Exit",
];

pub fn parse_menu_choice(input: &str) -> Result<MenuChoice, AppError> {
    match input.trim() {
        "1" => Ok(MenuChoice::AddContact),
        "2" => Ok(MenuChoice::ViewContacts),
        "3" => Ok(MenuChoice::SearchContact),
        "4" => Ok(MenuChoice::UpdateContact),
        "5" => Ok(MenuChoice::DeleteContact),
        "6" => Ok(MenuChoice::Exit),
        other => Err(AppError::ParseCommand(other.to_string())),
    }
}
