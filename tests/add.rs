use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn add_contact() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    // Add a contact, then exit
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .current_dir(dir.path())
        .write_stdin("1\nAlice\n08031234567\nalice@example.com\n1 Main St\n\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "SUCCESS: Contact 'Alice' added successfully!",
        ))
        .stdout(predicate::str::contains("Thank you for using Contact Book Manager!"));

    let saved = fs::read_to_string(dir.path().join("contacts.json"))?;
    assert_eq!(
        saved,
        "{\n  \"Alice\": {\n    \"phone\": \"08031234567\",\n    \"email\": \"alice@example.com\",\n    \"address\": \"1 Main St\"\n  }\n}"
    );

    // Attempt to add the same name in another case
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .current_dir(dir.path())
        .write_stdin("1\nalice\n\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ERROR: Contact 'alice' already exists!",
        ));

    assert_eq!(fs::read_to_string(dir.path().join("contacts.json"))?, saved);
    Ok(())
}

#[test]
fn invalid_inputs() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    // INVALID MENU CHOICE
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .current_dir(dir.path())
        .write_stdin("add\n\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ERROR: Invalid choice! Please select 1-6.",
        ));

    // EMPTY NAME
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .current_dir(dir.path())
        .write_stdin("1\n   \n\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ERROR: Name cannot be empty!"));

    // EMPTY PHONE
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .current_dir(dir.path())
        .write_stdin("1\nBob\n\nbob@example.com\n\n\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ERROR: Phone number is required!"));

    // Nothing was ever saved
    assert!(!dir.path().join("contacts.json").exists());
    Ok(())
}
