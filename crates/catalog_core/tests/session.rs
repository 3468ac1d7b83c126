use std::path::{Path, PathBuf};

use catalog_core::{ImageHandle, PhotoSession, ValidationError};
use pretty_assertions::assert_eq;

fn handle(n: usize) -> ImageHandle {
    ImageHandle::new(format!("/camera/IMG_{n:04}.jpg"))
}

fn names(session: &PhotoSession) -> Vec<&str> {
    session
        .entries()
        .iter()
        .map(|entry| entry.display_name.as_str())
        .collect()
}

fn session_with(item: &str, photos: usize) -> PhotoSession {
    let mut session = PhotoSession::new();
    session.set_item_name(item);
    for n in 0..photos {
        session.append(handle(n)).unwrap();
    }
    session
}

#[test]
fn append_names_entries_by_position() {
    let mut session = PhotoSession::new();
    session.set_item_name("widget");
    for n in 1..=5 {
        let entry = session.append(handle(n)).unwrap();
        assert_eq!(entry.display_name, format!("widget_{n}"));
    }
    assert_eq!(session.len(), 5);
}

#[test]
fn append_without_item_name_fails_and_keeps_entries() {
    let mut session = session_with("widget", 2);
    session.set_item_name("   ");

    let err = session.append(handle(9)).unwrap_err();

    assert_eq!(err, ValidationError::EmptyItemName);
    assert_eq!(names(&session), vec!["widget_1", "widget_2"]);
}

#[test]
fn append_rejects_item_name_with_path_separator() {
    let mut session = PhotoSession::new();
    session.set_item_name("shelf/box");

    let err = session.append(handle(1)).unwrap_err();

    assert!(matches!(err, ValidationError::ForbiddenCharacter { found: '/', .. }));
    assert!(session.is_empty());
}

#[test]
fn delete_middle_renumbers_remaining() {
    let mut session = session_with("widget", 3);
    assert_eq!(names(&session), vec!["widget_1", "widget_2", "widget_3"]);

    let removed = session.delete(1).unwrap();

    assert_eq!(removed.display_name, "widget_2");
    assert_eq!(names(&session), vec!["widget_1", "widget_2"]);
    // The second entry is the photo originally captured third.
    assert_eq!(session.entries()[1].handle, handle(2));
}

#[test]
fn delete_renumbering_is_gapless_for_every_index() {
    for index in 0..4 {
        let mut session = session_with("lamp", 4);
        session.delete(index).unwrap();
        for (i, entry) in session.entries().iter().enumerate() {
            assert_eq!(entry.display_name, format!("lamp_{}", i + 1));
        }
    }
}

#[test]
fn delete_discards_custom_names() {
    let mut session = session_with("desk", 3);
    session.rename(2, "desk drawer").unwrap();

    session.delete(0).unwrap();

    assert_eq!(names(&session), vec!["desk_1", "desk_2"]);
}

#[test]
fn rename_keeps_typed_name() {
    let mut session = session_with("chair", 2);

    session.rename(0, "chair front").unwrap();

    assert_eq!(names(&session), vec!["chair front", "chair_2"]);
}

#[test]
fn rename_rejects_bad_input() {
    let mut session = session_with("chair", 1);

    assert_eq!(
        session.rename(0, "  "),
        Err(ValidationError::EmptyPhotoName)
    );
    assert!(session.rename(0, "a:b").is_err());
    assert_eq!(
        session.rename(3, "x"),
        Err(ValidationError::IndexOutOfRange { index: 3, len: 1 })
    );
    assert_eq!(names(&session), vec!["chair_1"]);
}

#[test]
fn rename_rejects_name_of_another_photo() {
    let mut session = session_with("chair", 2);

    assert_eq!(
        session.rename(0, "chair_2"),
        Err(ValidationError::DuplicatePhotoName {
            name: "chair_2".to_string()
        })
    );
    assert_eq!(
        session.rename(0, "CHAIR_2"),
        Err(ValidationError::DuplicatePhotoName {
            name: "CHAIR_2".to_string()
        })
    );
    assert_eq!(names(&session), vec!["chair_1", "chair_2"]);

    // Renaming an entry to its own name (in any case) is fine.
    session.rename(1, "Chair_2").unwrap();
    assert_eq!(names(&session), vec!["chair_1", "Chair_2"]);
}

#[test]
fn delete_out_of_range_leaves_session_alone() {
    let mut session = session_with("chair", 2);

    assert_eq!(
        session.delete(2).unwrap_err(),
        ValidationError::IndexOutOfRange { index: 2, len: 2 }
    );
    assert_eq!(session.len(), 2);
}

#[test]
fn changing_item_name_does_not_rename_existing_entries() {
    let mut session = session_with("chair", 1);

    session.set_item_name("stool");
    session.append(handle(7)).unwrap();

    assert_eq!(names(&session), vec!["chair_1", "stool_2"]);
}

#[test]
fn clear_empties_but_keeps_item_name() {
    let mut session = session_with("chair", 3);

    session.clear();

    assert!(session.is_empty());
    assert_eq!(session.item_name(), "chair");
}

#[test]
fn snapshot_requires_photos() {
    let session = session_with("chair", 0);
    assert_eq!(
        session.snapshot(Path::new("/out")),
        Err(ValidationError::NoPhotos)
    );

    let session = session_with("chair", 2);
    let request = session.snapshot(Path::new("/out")).unwrap();
    assert_eq!(request.item_name, "chair");
    assert_eq!(request.destination, PathBuf::from("/out"));
    assert_eq!(request.entries, session.entries().to_vec());
}

#[test]
fn snapshot_rejects_colliding_names() {
    let mut session = session_with("chair", 2);
    session.rename(1, "chair_3").unwrap();
    session.append(handle(3)).unwrap();
    assert_eq!(names(&session), vec!["chair_1", "chair_3", "chair_3"]);

    assert_eq!(
        session.snapshot(Path::new("/out")),
        Err(ValidationError::DuplicatePhotoName {
            name: "chair_3".to_string()
        })
    );
}
