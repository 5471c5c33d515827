/// Handlers for contact and phone commands
/// 
/// This module implements `add`, `change`, `phone`, `remove-phone`, `delete`
/// and `all`. Extra trailing arguments are ignored.

use crate::commands::{require, CommandError, CommandResult};
use crate::domain::{AddressBook, PhoneNumber, Record};

/// `add [name] [phone]`: create the contact if needed, then append the phone
/// 
/// The phone is validated before anything is created, so a rejected phone
/// never leaves an empty contact behind.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult {
    require(args, 2, "add [name] [phone]")?;
    let (name, phone) = (&args[0], &args[1]);
    
    let phone = PhoneNumber::new(phone.as_str())?;
    
    let message = match book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone.as_str())?;
            "Contact updated."
        }
        None => {
            let mut record = Record::new(name.as_str())?;
            record.add_phone(phone.as_str())?;
            book.add_record(record);
            "Contact added."
        }
    };
    
    Ok(message.to_string())
}

/// `change [name] [old phone] [new phone]`
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult {
    require(args, 3, "change [name] [old phone] [new phone]")?;
    let (name, old, new) = (&args[0], &args[1], &args[2]);
    
    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::contact_not_found(name))?;
    
    match record.edit_phone(old, new)? {
        Some(_) => Ok(format!(
            "Phone number updated for {} from {} to {}.",
            name, old, new
        )),
        None => Err(CommandError::NotFound(format!(
            "Phone number {} not found for {}.",
            old, name
        ))),
    }
}

/// `phone [name]`: list a contact's phones
pub fn show_phones(args: &[String], book: &AddressBook) -> CommandResult {
    require(args, 1, "phone [name]")?;
    let name = &args[0];
    
    let record = book
        .find(name)
        .ok_or_else(|| CommandError::contact_not_found(name))?;
    
    Ok(record
        .phones_display()
        .unwrap_or_else(|| format!("No phone numbers for {}.", name)))
}

/// `remove-phone [name] [phone]`: drop every copy of a phone from a contact
pub fn remove_phone(args: &[String], book: &mut AddressBook) -> CommandResult {
    require(args, 2, "remove-phone [name] [phone]")?;
    let (name, phone) = (&args[0], &args[1]);
    
    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::contact_not_found(name))?;
    
    if record.find_phone(phone).is_none() {
        return Err(CommandError::NotFound(format!(
            "Phone number {} not found for {}.",
            phone, name
        )));
    }
    
    record.remove_phone(phone);
    Ok(format!("Phone number {} removed for {}.", phone, name))
}

/// `delete [name]`
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult {
    require(args, 1, "delete [name]")?;
    let name = &args[0];
    
    book.delete(name)
        .map(|_| format!("Contact '{}' deleted.", name))
        .ok_or_else(|| CommandError::contact_not_found(name))
}

/// `all`: one line per contact
pub fn show_all(book: &AddressBook) -> CommandResult {
    if book.is_empty() {
        return Ok("Address book is empty.".to_string());
    }
    
    Ok(book
        .records()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}
