use memo_core::store::{Store, StoreError};

#[test]
fn add_folder_selects_it() -> Result<(), StoreError> {
    let mut store = Store::new();

    let first = store.add_folder("Work")?;
    assert_eq!(first, 0);
    assert_eq!(store.current_folder(), Some(0));

    let second = store.add_folder("Personal")?;
    assert_eq!(second, 1);
    assert_eq!(store.current_folder(), Some(1));
    assert_eq!(store.current_note(), None);

    Ok(())
}

#[test]
fn empty_folder_name_is_rejected() {
    let mut store = Store::new();
    let before = store.clone();

    assert_eq!(store.add_folder(""), Err(StoreError::InvalidName));
    assert_eq!(store.add_folder("   "), Err(StoreError::InvalidName));
    assert_eq!(store, before);
}

#[test]
fn duplicate_folder_name_is_rejected() {
    let mut store = Store::new();
    store.add_folder("Work").unwrap();
    let before = store.clone();

    assert_eq!(
        store.add_folder("Work"),
        Err(StoreError::DuplicateFolder("Work".into()))
    );
    assert_eq!(store, before);
}

#[test]
fn delete_folder_clamps_selection() -> Result<(), StoreError> {
    let mut store = Store::new();
    store.add_folder("A")?;
    store.add_folder("B")?;
    store.add_folder("C")?;
    assert_eq!(store.current_folder(), Some(2));

    store.delete_folder(2)?;
    assert_eq!(store.current_folder(), Some(1));
    assert_eq!(store.current_note(), None);

    store.delete_folder(0)?;
    assert_eq!(store.current_folder(), Some(0));
    assert_eq!(store.folders()[0].name, "B");

    Ok(())
}

#[test]
fn deleting_last_folder_clears_selection() -> Result<(), StoreError> {
    let mut store = Store::new();
    store.add_folder("Only")?;

    store.delete_folder(0)?;
    assert_eq!(store.current_folder(), None);
    assert_eq!(store.current_note(), None);
    assert!(store.folders().is_empty());

    Ok(())
}

#[test]
fn delete_folder_out_of_range_is_rejected() {
    let mut store = Store::new();
    store.add_folder("Work").unwrap();
    let before = store.clone();

    assert_eq!(store.delete_folder(1), Err(StoreError::FolderIndex(1)));
    assert_eq!(store, before);
}

#[test]
fn folder_switch_resets_note_selection() -> Result<(), StoreError> {
    let mut store = Store::new();
    store.add_folder("Work")?;
    store.add_folder("Personal")?;
    store.add_note(1, "Groceries")?;
    assert_eq!(store.current_note(), Some(0));

    store.select_folder(Some(0));
    assert_eq!(store.current_folder(), Some(0));
    assert_eq!(store.current_note(), None);

    Ok(())
}

#[test]
fn add_note_validates_folder_and_title() {
    let mut store = Store::new();
    store.add_folder("Work").unwrap();
    let before = store.clone();

    assert_eq!(store.add_note(0, ""), Err(StoreError::InvalidName));
    assert_eq!(store.add_note(5, "Standup"), Err(StoreError::FolderIndex(5)));
    assert_eq!(store, before);
}

#[test]
fn delete_note_clamps_note_selection() -> Result<(), StoreError> {
    let mut store = Store::new();
    store.add_folder("Work")?;
    store.add_note(0, "First")?;
    store.add_note(0, "Second")?;
    store.add_note(0, "Third")?;
    assert_eq!(store.current_note(), Some(2));

    store.delete_note(0, 2)?;
    assert_eq!(store.current_note(), Some(1));

    store.delete_note(0, 0)?;
    store.delete_note(0, 0)?;
    assert_eq!(store.current_note(), None);

    Ok(())
}

#[test]
fn set_note_content_overwrites_in_place() -> Result<(), StoreError> {
    let mut store = Store::new();
    store.add_folder("Work")?;
    store.add_note(0, "Standup")?;

    store.set_note_content(0, 0, "Discuss blockers")?;
    assert_eq!(store.folders()[0].notes[0].content, "Discuss blockers");
    assert_eq!(store.selected_note().unwrap().title, "Standup");

    Ok(())
}

#[test]
fn set_note_content_out_of_range_is_rejected() {
    let mut store = Store::new();
    store.add_folder("Work").unwrap();
    store.add_note(0, "Standup").unwrap();
    let before = store.clone();

    assert_eq!(
        store.set_note_content(0, 3, "text"),
        Err(StoreError::NoteIndex(3))
    );
    assert_eq!(
        store.set_note_content(9, 0, "text"),
        Err(StoreError::FolderIndex(9))
    );
    assert_eq!(store, before);
}

#[test]
fn out_of_range_selection_becomes_none() {
    let mut store = Store::new();
    store.add_folder("Work").unwrap();

    store.select_folder(Some(7));
    assert_eq!(store.current_folder(), None);

    store.select_folder(Some(0));
    store.select_note(Some(3));
    assert_eq!(store.current_note(), None);
}
