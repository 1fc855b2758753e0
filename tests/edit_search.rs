use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use tempfile::tempdir;

#[test]
fn edit_search() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("book.json");

    // Add two contacts
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--file")
        .arg(&file)
        .write_stdin(
            "1\nAlice Dept. Computer Science\n08031234567\nalice@example.com\n\n\n\
             1\nWayne\n08062866694\njackie73@lopez.com\n\n\n6\n",
        )
        .assert()
        .success()
        .stdout(contains("Contact 'Wayne' added successfully!"));

    // Search by part of the name and by email domain
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--file")
        .arg(&file)
        .write_stdin("3\ncomputer\n\n3\nLOPEZ.COM\n\n6\n")
        .assert()
        .success()
        .stdout(contains("Alice Dept. Computer Science"))
        .stdout(contains("jackie73@lopez.com"));

    // Edit the contact (change phone only)
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--file")
        .arg(&file)
        .write_stdin("4\nalice dept. computer science\n09123456789\n\n\n\n6\n")
        .assert()
        .success()
        .stdout(contains("Phone (08031234567): "))
        .stdout(contains(
            "SUCCESS: Contact 'Alice Dept. Computer Science' updated successfully!",
        ));

    let saved = fs::read_to_string(&file)?;
    assert!(saved.contains("\"phone\": \"09123456789\""));
    assert!(saved.contains("\"email\": \"alice@example.com\""));

    // The new number is searchable
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--file")
        .arg(&file)
        .write_stdin("3\n0912\n\n6\n")
        .assert()
        .success()
        .stdout(contains("Found 1 match(es):"));

    Ok(())
}
