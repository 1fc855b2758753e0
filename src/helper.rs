use crate::domain::contact::Contact;

pub const MENU_RULE_WIDTH: usize = 50;
pub const TABLE_RULE_WIDTH: usize = 90;

pub fn table_header() -> String {
    format!(
        "{:<20} {:<15} {:<25} {:<30}\n{}",
        "Name",
        "Phone",
        "Email",
        "Address",
        "-".repeat(TABLE_RULE_WIDTH)
    )
}

pub fn table_row(contact: &Contact) -> String {
    format!(
        "{:<20} {:<15} {:<25} {:<30}",
        contact.name, contact.phone, contact.email, contact.address
    )
}

/// Header, rule and one row per contact.
pub fn contact_table(contacts: &[&Contact]) -> String {
    let mut table = table_header();
    for contact in contacts {
        table.push('\n');
        table.push_str(&table_row(contact));
    }
    table
}

pub fn display_details(contact: &Contact) -> String {
    format!(
        "Phone: {}\n\
        Email: {}\n\
        Address: {}",
        contact.phone, contact.email, contact.address
    )
}

pub fn display_contact(contact: &Contact) -> String {
    format!("Name: {}\n{}", contact.name, display_details(contact))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_table_row_padding() {
        let contact = Contact::new(
            "Uche".to_string(),
            "012345678901".to_string(),
            "ucheuche@gmail.com".to_string(),
            "".to_string(),
        );

        let row = table_row(&contact);

        assert_eq!(row.len(), 20 + 1 + 15 + 1 + 25 + 1 + 30);
        assert!(row.starts_with("Uche                 012345678901    ucheuche@gmail.com"));
    }

    #[test]
    fn long_values_are_not_truncated() {
        let contact = Contact::new(
            "A name well past twenty characters".to_string(),
            "1".to_string(),
            "".to_string(),
            "".to_string(),
        );

        assert!(table_row(&contact).starts_with("A name well past twenty characters 1 "));
    }

    #[test]
    fn check_display_contact() {
        let contact = Contact::new(
            "Mom".to_string(),
            "98765432109".to_string(),
            "mom@example.com".to_string(),
            "4 Home Ln".to_string(),
        );

        assert_eq!(
            display_contact(&contact),
            "Name: Mom\nPhone: 98765432109\nEmail: mom@example.com\nAddress: 4 Home Ln"
        );
    }
}
