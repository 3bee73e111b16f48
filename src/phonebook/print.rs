use colored::Colorize;
use phonebook::model::Contact;

pub(crate) fn success(message: &str) {
    println!("{}", message.green());
}

pub(crate) fn warning(message: &str) {
    println!("{}", message.yellow());
}

pub(crate) fn info(message: &str) {
    println!("{}", message.dimmed());
}

fn format_contact(contact: &Contact) -> String {
    format!(
        "{} {} {}, {}, Work: {}, Personal: {}",
        contact.surname(),
        contact.name(),
        contact.patronymic(),
        contact.organization(),
        contact.work_phone(),
        contact.personal_phone()
    )
}

/// Rows numbered from `first_number`, so numbers match what `edit` expects.
pub(crate) fn print_numbered(contacts: &[Contact], first_number: usize) {
    for (i, contact) in contacts.iter().enumerate() {
        let number = format!("{}.", first_number + i);
        println!("{} {}", number.yellow(), format_contact(contact));
    }
}

pub(crate) fn print_matches(contacts: &[&Contact]) {
    if contacts.is_empty() {
        info("No contacts found.");
        return;
    }
    for contact in contacts {
        println!("{}", format_contact(contact));
    }
}
