//! Library integration tests.

use groupcheck::persist::{FileStorage, MemoryStorage};
use groupcheck::state::{ChecklistStore, GroupType};
use groupcheck::GroupCheckError;
use tempfile::TempDir;

#[test]
fn error_types_are_public() {
    let err = GroupCheckError::UnknownGroup { id: 40 };
    assert!(err.to_string().contains("40"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> groupcheck::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use groupcheck::cli::{Cli, Commands};

    let cli = Cli::parse_from(["groupcheck", "order", "--json"]);

    if let Some(Commands::Order(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Order command");
    }
}

#[test]
fn state_survives_reload_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("state.json");

    let mut store = ChecklistStore::load(FileStorage::new(&path));
    store.update_settings(GroupType::Alphabetic, 5);
    store.toggle_check(5).unwrap();
    store.toggle_check(2).unwrap();
    store.update_note(2, "needs a spare key").unwrap();

    let reloaded = ChecklistStore::load(FileStorage::new(&path));
    assert_eq!(reloaded.snapshot(), store.snapshot());
    assert_eq!(reloaded.group_name(5), "E班");
    assert_eq!(reloaded.checked_in_order(), vec![5, 2]);
}

#[test]
fn failed_writes_leave_memory_state_authoritative() {
    let mut storage = MemoryStorage::new();
    storage.set_fail_writes(true);
    let mut store = ChecklistStore::new(storage);

    store.toggle_check(1).unwrap();

    assert_eq!(store.first_checked(), Some(1));
    assert!(store.storage().contents().is_none());
}
