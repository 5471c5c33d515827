/// Basic integration tests
use contact_book::*;
use tempfile::TempDir;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    async fn run_script(data_path: std::path::PathBuf, script: &str) -> String {
        let bot = AssistantBot::new(data_path).expect("Failed to create assistant");
        let mut output = Vec::new();
        bot.run_with(script.as_bytes(), &mut output)
            .await
            .expect("Session failed");
        String::from_utf8(output).expect("Output is UTF-8")
    }

    #[tokio::test]
    async fn test_session_persists_between_runs() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = dir.path().join("addressbook.json");

        let output = run_script(
            data_path.clone(),
            "add John 1234567890\nadd John 5555555555\nadd-birthday John 15.06.1985\nadd Jane 0987654321\nclose\n",
        )
        .await;
        assert!(output.starts_with("Welcome to the assistant bot!\n"));
        assert!(output.contains("Contact added."));
        assert!(output.contains("Contact updated."));
        assert!(output.contains("Birthday added for John."));
        assert!(output.ends_with("Good bye!\n"));

        let output = run_script(data_path, "all\nexit\n").await;
        assert!(output.contains(
            "Contact name: Jane, phones: 0987654321\nContact name: John, phones: 1234567890; 5555555555, birthday: 15.06.1985\n"
        ));
    }

    #[tokio::test]
    async fn test_book_saved_when_input_ends() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = dir.path().join("addressbook.json");

        run_script(data_path.clone(), "add John 1234567890\n").await;

        let bot = AssistantBot::new(data_path).expect("Failed to reload");
        assert_eq!(bot.book().len(), 1);
        assert!(bot.book().find("John").is_some());
    }

    #[tokio::test]
    async fn test_invalid_input_keeps_session_alive() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = dir.path().join("addressbook.json");

        let output = run_script(
            data_path,
            "fly\nadd John\nadd John 12\nphone Nobody\nhello\nexit\n",
        )
        .await;

        assert!(output.contains("Invalid command.\n"));
        assert!(output.contains("Invalid command format. Usage: add [name] [phone]\n"));
        assert!(output.contains("Invalid value: Invalid phone number '12': expected exactly 10 digits\n"));
        assert!(output.contains("Contact 'Nobody' not found.\n"));
        assert!(output.contains("How can I help you?\n"));
    }

    #[test]
    fn test_round_trip_preserves_every_record() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let storage = JsonFileStorage::new(dir.path().join("addressbook.json"));

        let mut book = AddressBook::new();
        for i in 0..25u32 {
            let mut record = Record::new(format!("Contact{i}")).unwrap();
            record.add_phone(&format!("{:010}", i)).unwrap();
            record.add_phone(&format!("{:010}", i * 1000 + 7)).unwrap();
            if i % 2 == 0 {
                record.add_birthday(&format!("{:02}.{:02}.19{:02}", i % 28 + 1, i % 12 + 1, 50 + i)).unwrap();
            }
            book.add_record(record);
        }

        storage.save(&book).expect("Failed to save");
        let loaded = storage.load().expect("Failed to load");

        assert_eq!(loaded.len(), 25);
        let original: Vec<String> = book.records().map(ToString::to_string).collect();
        let restored: Vec<String> = loaded.records().map(ToString::to_string).collect();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_corrupt_book_is_fatal_at_startup() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = dir.path().join("addressbook.json");
        std::fs::write(&data_path, "{\"records\": [").expect("Failed to write");

        let result = AssistantBot::new(data_path);
        assert!(matches!(result, Err(BotError::Storage(StorageError::Serialization(_)))));
    }

    #[test]
    fn test_save_through_bot() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = dir.path().join("addressbook.json");

        let mut bot = AssistantBot::new(data_path.clone()).expect("Failed to create assistant");
        bot.book_mut().add_record(Record::new("John").unwrap());
        bot.save().expect("Failed to save");

        assert_eq!(bot.storage().path(), data_path.as_path());
        let reloaded = AssistantBot::new(data_path).expect("Failed to reload");
        assert_eq!(reloaded.book(), bot.book());
    }
}
