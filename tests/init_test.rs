use tome::kb::types::Category;
use tome::kb::Database;

#[test]
fn first_open_seeds_every_collection() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path().join("kb.db")).unwrap();

    assert_eq!(db.users().get_all().len(), 2);
    assert_eq!(db.categories().get_all().len(), 4);
    assert_eq!(db.entries().get_all().len(), 2);
}

#[test]
fn restart_never_overwrites_existing_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kb.db");

    {
        let db = Database::open(&path).unwrap();
        db.categories().add(Category::new("Peripherals")).unwrap();
        db.entries().delete("102").unwrap();
        db.settings().set_header_color("#004481").unwrap();
    }

    // Reopening runs the same seed-once init over an existing store
    let db = Database::open(&path).unwrap();
    let categories = db.categories().get_all();
    assert_eq!(categories.len(), 5);
    assert!(categories.iter().any(|c| c.name == "Peripherals"));

    let entries = db.entries().get_all();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "101");

    assert_eq!(db.settings().header_color(), "#004481");
}

#[test]
fn emptied_collections_stay_empty_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kb.db");

    {
        let db = Database::open(&path).unwrap();
        db.entries().delete("101").unwrap();
        db.entries().delete("102").unwrap();
        assert!(db.entries().get_all().is_empty());
    }

    // An empty-but-initialized collection must not be reseeded
    let db = Database::open(&path).unwrap();
    assert!(db.entries().get_all().is_empty());
}
