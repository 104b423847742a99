use small_store::{FileCatalog, Session, ShellState};
use std::io::Cursor;
use tempfile::TempDir;

fn run_script(catalog: FileCatalog, script: &str) -> (Session<FileCatalog, Vec<u8>>, String) {
    let mut session = Session::new(catalog, Vec::new());
    session.load().unwrap();
    session.run(Cursor::new(script.to_string())).unwrap();
    let output = String::from_utf8(session.output().clone()).unwrap();
    (session, output)
}

#[test]
fn test_manager_adds_then_customer_reviews() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("inventory.txt");

    let script = "\
1
1
1
Pen
1.50
Stationeries
3
4
4
2
2
Pen
Ann
7
Writes well
1
4
3
3
2
";
    let (session, output) = run_script(FileCatalog::new(&path), script);

    assert!(session.state().is_finished());
    assert!(output.contains("Item added successfully!"));
    assert!(output.contains("Inventory for Category: Stationeries\nName: Pen, Price: 1.50"));
    assert!(output.contains(
        "Item details:\nName: Pen, Price: 1.50, Category: Stationeries\nNo reviews yet.\n"
    ));
    assert!(output.contains("Review added successfully!"));
    assert!(output.contains("Reviews:\nCustomer: Ann, Rating: 7/5\nComment: Writes well\n"));
    assert!(output.contains("Logging off customer view..."));
    assert!(output.ends_with("Quitting...\n"));

    let pen = session.inventory().find_item("Pen").unwrap();
    assert_eq!(pen.reviews().len(), 1);

    let persisted = std::fs::read_to_string(&path).unwrap();
    assert_eq!(persisted, "Pen 1.50 Stationeries\n");
}

#[test]
fn test_removed_items_stay_in_catalog_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("inventory.txt");
    std::fs::write(
        &path,
        "Pen 1.50 Stationeries\nPen 2.00 Stationeries\nPhone 300 Electronics\n",
    )
    .unwrap();

    let script = "1\n1\n2\nPen\n3\n4\n4\n3\n2\n";
    let (session, output) = run_script(FileCatalog::new(&path), script);

    assert_eq!(session.inventory().len(), 1);
    assert!(session.inventory().find_item("Pen").is_none());
    assert!(output.contains("Item removed successfully!"));
    assert!(output.contains("Inventory for Category: Stationeries\n"));
    assert!(!output.contains("No items found in the inventory."));

    let persisted = std::fs::read_to_string(&path).unwrap();
    assert_eq!(persisted.lines().count(), 3);
}

#[test]
fn test_empty_inventory_listing_and_invalid_inputs() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.txt");

    let script = "x\n1\n9\n2\n1\n1\n1\nq\n5\n";
    let (session, output) = run_script(FileCatalog::new(&path), script);

    assert!(output.contains("Invalid choice. Please try again."));
    assert!(output.contains(
        "Inventory for Category: Electronics\nNo items found in the inventory.\n"
    ));
    assert!(output.contains("Invalid category choice."));
    assert!(!path.exists());
    // Input ran out while the customer menu was showing.
    assert!(!session.state().is_finished());
    assert_ne!(session.state(), &ShellState::LoggedOut);
}
