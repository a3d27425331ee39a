use retrotodo_core::{
    CommitError, CommitOutcome, DatePickerEvent, DraftMode, PhotoRef, TodoDate, TodoListStore,
};
use uuid::Uuid;

fn day(year: i32, month: u32, day: u32) -> TodoDate {
    TodoDate::from_ymd(year, month, day).unwrap()
}

fn store() -> TodoListStore {
    TodoListStore::with_date(day(2024, 1, 5))
}

fn commit(store: &mut TodoListStore, title: &str) -> Uuid {
    store.set_text(title);
    store.add_or_update().unwrap().id()
}

fn titles(store: &TodoListStore) -> Vec<&str> {
    store.items().iter().map(|item| item.title.as_str()).collect()
}

#[test]
fn new_store_is_empty_in_compose_mode() {
    let store = store();
    assert!(store.is_empty());
    assert_eq!(store.mode(), DraftMode::Compose);
    assert_eq!(store.draft().text(), "");
    assert_eq!(store.draft().photo(), None);
}

#[test]
fn compose_commit_creates_trimmed_item_with_draft_fields() {
    let mut store = store();
    store.set_text("  buy milk  ");
    store.set_photo(PhotoRef::new("file:///photos/milk.jpg").unwrap());

    let outcome = store.add_or_update().unwrap();
    let CommitOutcome::Created(id) = outcome else {
        panic!("expected create, got {outcome:?}");
    };

    let item = store.get(id).unwrap();
    assert_eq!(item.title, "buy milk");
    assert_eq!(item.date, day(2024, 1, 5));
    assert_eq!(
        item.photo.as_ref().map(PhotoRef::as_str),
        Some("file:///photos/milk.jpg")
    );
}

#[test]
fn compose_commit_prepends() {
    let mut store = store();
    commit(&mut store, "A");
    commit(&mut store, "B");
    assert_eq!(titles(&store), vec!["B", "A"]);

    commit(&mut store, "C");
    assert_eq!(titles(&store), vec!["C", "B", "A"]);
}

#[test]
fn edit_commit_preserves_id_and_position() {
    let mut store = store();
    commit(&mut store, "A");
    let b = commit(&mut store, "B");
    commit(&mut store, "C");

    store.begin_edit(b).unwrap();
    assert_eq!(store.mode(), DraftMode::Edit(b));
    assert_eq!(store.draft().text(), "B");

    store.set_text("X");
    store.set_date(day(2025, 12, 31));
    let outcome = store.add_or_update().unwrap();

    assert_eq!(outcome, CommitOutcome::Updated(b));
    assert_eq!(titles(&store), vec!["C", "X", "A"]);
    assert_eq!(store.items()[1].id, b);
    assert_eq!(store.items()[1].date, day(2025, 12, 31));
    assert_eq!(store.len(), 3);
}

#[test]
fn edit_commit_can_replace_and_drop_photo() {
    let mut store = store();
    store.set_text("with photo");
    store.set_photo(PhotoRef::new("file:///a.jpg").unwrap());
    let id = store.add_or_update().unwrap().id();

    store.begin_edit(id).unwrap();
    assert_eq!(store.draft().photo().map(PhotoRef::as_str), Some("file:///a.jpg"));
    store.clear_photo();
    store.add_or_update().unwrap();

    assert_eq!(store.get(id).unwrap().photo, None);
}

#[test]
fn size_counts_only_compose_commits() {
    let mut store = store();
    let mut compose_commits = 0;
    let mut ids = Vec::new();

    for round in 0..12 {
        if round % 3 == 2 {
            let target = ids[round % ids.len()];
            store.begin_edit(target).unwrap();
            store.set_text(format!("edited {round}"));
            store.add_or_update().unwrap();
        } else {
            ids.push(commit(&mut store, &format!("item {round}")));
            compose_commits += 1;
        }
        assert_eq!(store.len(), compose_commits);
    }
}

#[test]
fn whitespace_commit_is_rejected_and_draft_kept() {
    let mut store = store();
    commit(&mut store, "keep");
    store.set_text("   ");
    store.set_photo(PhotoRef::new("file:///b.jpg").unwrap());

    let err = store.add_or_update().unwrap_err();
    assert_eq!(err, CommitError::EmptyTitle);
    assert_eq!(titles(&store), vec!["keep"]);
    assert_eq!(store.draft().text(), "   ");
    assert_eq!(store.draft().photo().map(PhotoRef::as_str), Some("file:///b.jpg"));
}

#[test]
fn rejected_edit_commit_stays_in_edit_mode() {
    let mut store = store();
    let id = commit(&mut store, "original");
    store.begin_edit(id).unwrap();
    store.set_text("");

    assert_eq!(store.add_or_update().unwrap_err(), CommitError::EmptyTitle);
    assert_eq!(store.mode(), DraftMode::Edit(id));
    assert_eq!(store.get(id).unwrap().title, "original");
}

#[test]
fn successful_commit_resets_draft_but_keeps_date() {
    let mut store = store();
    let id = commit(&mut store, "first");

    store.begin_edit(id).unwrap();
    store.set_date(day(2030, 6, 15));
    store.set_photo(PhotoRef::new("file:///c.jpg").unwrap());
    store.add_or_update().unwrap();

    let draft = store.draft();
    assert_eq!(draft.edit_target(), None);
    assert_eq!(draft.text(), "");
    assert_eq!(draft.photo(), None);
    assert_eq!(draft.date(), day(2030, 6, 15));

    let next = commit(&mut store, "second");
    assert_ne!(next, id);
    assert_eq!(store.len(), 2);
}

#[test]
fn remove_is_idempotent() {
    let mut store = store();
    let a = commit(&mut store, "A");
    commit(&mut store, "B");

    assert!(store.remove(a));
    let after_first = store.items().to_vec();
    assert!(!store.remove(a));
    assert_eq!(store.items(), after_first.as_slice());
    assert_eq!(titles(&store), vec!["B"]);
}

#[test]
fn remove_unknown_id_is_noop() {
    let mut store = store();
    commit(&mut store, "A");
    assert!(!store.remove(Uuid::new_v4()));
    assert_eq!(store.len(), 1);
}

#[test]
fn begin_edit_unknown_id_leaves_draft_unchanged() {
    let mut store = store();
    commit(&mut store, "A");
    store.set_text("typing");
    let before = store.draft().clone();

    assert!(store.begin_edit(Uuid::new_v4()).is_none());
    assert_eq!(store.draft(), &before);
}

#[test]
fn commit_after_target_removed_creates_new_item() {
    let mut store = store();
    let a = commit(&mut store, "A");
    store.begin_edit(a).unwrap();
    assert!(store.remove(a));

    store.set_text("A again");
    let outcome = store.add_or_update().unwrap();
    assert!(matches!(outcome, CommitOutcome::Created(id) if id != a));
    assert_eq!(titles(&store), vec!["A again"]);
}

#[test]
fn cancel_edit_returns_to_compose_mode() {
    let mut store = store();
    let a = commit(&mut store, "A");
    store.begin_edit(a).unwrap();

    store.cancel_edit();
    assert_eq!(store.mode(), DraftMode::Compose);
    assert_eq!(store.draft().text(), "");

    commit(&mut store, "B");
    assert_eq!(titles(&store), vec!["B", "A"]);
}

#[test]
fn date_picker_dismissal_keeps_date_and_closes_picker() {
    let mut store = store();
    store.open_date_picker();
    assert!(store.draft().is_date_picker_open());

    assert!(!store.apply_date_picker(DatePickerEvent::Dismissed));
    assert!(!store.draft().is_date_picker_open());
    assert_eq!(store.draft().date(), day(2024, 1, 5));

    store.open_date_picker();
    assert!(store.apply_date_picker(DatePickerEvent::Selected(day(2024, 2, 29))));
    assert!(!store.draft().is_date_picker_open());
    assert_eq!(store.draft().date(), day(2024, 2, 29));
}

#[test]
fn later_photo_overwrites_earlier_one() {
    let mut store = store();
    store.set_photo(PhotoRef::new("file:///camera.jpg").unwrap());
    store.set_photo(PhotoRef::new("file:///gallery.jpg").unwrap());
    assert_eq!(
        store.draft().photo().map(PhotoRef::as_str),
        Some("file:///gallery.jpg")
    );
}

#[test]
fn generated_ids_are_unique() {
    let mut store = store();
    let ids = (0..500)
        .map(|index| commit(&mut store, &format!("item {index}")))
        .collect::<std::collections::HashSet<_>>();
    assert_eq!(ids.len(), 500);
    assert_eq!(store.len(), 500);
}
