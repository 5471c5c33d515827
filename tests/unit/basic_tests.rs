/// Basic unit tests to verify core functionality through the public API
use chrono::NaiveDate;
use contact_book::*;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    fn line(input: &str) -> ParsedLine {
        parse_input(input).expect("non-blank line")
    }

    #[test]
    fn test_record_creation() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_birthday("15.06.1985").unwrap();

        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890, birthday: 15.06.1985"
        );
    }

    #[test]
    fn test_edit_phone_only_mutates_on_exact_match() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();

        // Same digits with a trailing space are not the same phone
        assert_eq!(record.edit_phone("1234567890 ", "0987654321"), Ok(None));
        assert_eq!(record.phones()[0].as_str(), "1234567890");
    }

    #[test]
    fn test_upcoming_birthdays_example_week() {
        let mut book = AddressBook::new();
        let mut john = Record::new("John").unwrap();
        john.add_birthday("15.06.1970").unwrap();
        book.add_record(john);
        book.add_record(Record::new("NoBirthday").unwrap());

        let monday = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let upcoming = book.upcoming_birthdays(monday, DEFAULT_WINDOW_DAYS);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "John");
        assert_eq!(
            upcoming[0].congratulation_date,
            NaiveDate::from_ymd_opt(2024, 6, 17).unwrap()
        );
        assert_eq!(upcoming[0].days_until, 7);

        let saturday = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        // The birthday is today (a Saturday), so it is congratulated on Monday
        assert_eq!(book.upcoming_birthdays(saturday, DEFAULT_WINDOW_DAYS)[0].days_until, 2);
    }

    #[test]
    fn test_command_errors_never_escape_dispatch() {
        let mut book = AddressBook::new();
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        let replies: Vec<Reply> = [
            "add",
            "add John 12",
            "change John 1 2",
            "phone",
            "phone Nobody",
            "add-birthday Nobody 01.01.2000",
            "show-birthday Nobody",
            "birthdays never",
            "delete Nobody",
            "remove-phone Nobody 1234567890",
        ]
        .iter()
        .map(|input| dispatch(&line(input), &mut book, today))
        .collect();

        assert!(replies.iter().all(|r| matches!(r, Reply::Continue(_))));
        assert!(book.is_empty());
    }

    #[test]
    fn test_help_lists_commands() {
        let mut book = AddressBook::new();
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        match dispatch(&line("help"), &mut book, today) {
            Reply::Continue(text) => {
                for command in ["add", "change", "phone", "all", "add-birthday", "show-birthday", "birthdays"] {
                    assert!(text.contains(command), "help should mention {command}");
                }
            }
            Reply::Exit(_) => panic!("help must not end the session"),
        }
    }
}
