/// Handlers for birthday commands: `add-birthday`, `show-birthday`, `birthdays`

use chrono::NaiveDate;
use crate::commands::{require, CommandError, CommandResult};
use crate::domain::{AddressBook, DomainError, BIRTHDAY_FORMAT, DEFAULT_WINDOW_DAYS};

/// `add-birthday [name] [DD.MM.YYYY]`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult {
    require(args, 2, "add-birthday [name] [birthday]")?;
    let (name, birthday) = (&args[0], &args[1]);
    
    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::contact_not_found(name))?;
    
    record.add_birthday(birthday)?;
    Ok(format!("Birthday added for {}.", name))
}

/// `show-birthday [name]`
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult {
    require(args, 1, "show-birthday [name]")?;
    let name = &args[0];
    
    let record = book
        .find(name)
        .ok_or_else(|| CommandError::contact_not_found(name))?;
    
    match record.birthday() {
        Some(birthday) => Ok(format!("{}'s birthday: {}", name, birthday)),
        None => Err(CommandError::NotFound(format!("No birthday set for {}.", name))),
    }
}

/// `birthdays [days]`: who to congratulate in the coming days
/// 
/// The window defaults to a week. `today` is passed in by the caller so the
/// listing is deterministic.
pub fn birthdays(args: &[String], book: &AddressBook, today: NaiveDate) -> CommandResult {
    let window_days = match args.first() {
        Some(raw) => parse_window(raw)?,
        None => DEFAULT_WINDOW_DAYS,
    };
    
    let upcoming = book.upcoming_birthdays(today, window_days);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays within the specified days.".to_string());
    }
    
    Ok(upcoming
        .iter()
        .map(|u| {
            format!(
                "Name: {}, Next Birthday: {}, Days Until Birthday: {}",
                u.name,
                u.congratulation_date.format(BIRTHDAY_FORMAT),
                u.days_until
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

fn parse_window(raw: &str) -> Result<i64, DomainError> {
    raw.parse::<u16>()
        .map(i64::from)
        .map_err(|_| DomainError::InvalidWindow(raw.to_string()))
}
