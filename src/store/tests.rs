use super::*;
use crate::error::StoreError;
use crate::model::{PostId, UserId};

#[test]
fn empty_store_has_no_records() {
    let store = GraphStore::new();
    assert_eq!(store.user_count(), 0);
    assert_eq!(store.post_count(), 0);
    assert_eq!(store.comment_count(), 0);
}

#[test]
fn seeded_store_resolves_fixed_ids() {
    let store = GraphStore::with_seed_data();
    assert_eq!(store.user_count(), 3);
    assert_eq!(store.post_count(), 3);
    assert_eq!(store.comment_count(), 4);

    let jeff = store.user(&UserId::from("1")).expect("seed user 1");
    assert_eq!(jeff.name, "Jeff");
    assert_eq!(jeff.age, None);

    let post = store.post(&PostId::from("3")).expect("seed post 3");
    assert_eq!(post.author, UserId::from("2"));
}

#[test]
fn created_user_is_indexed() {
    let mut store = GraphStore::new();
    let id = store
        .create_user("Ada", "ada@example.com", Some(36))
        .expect("create user")
        .id
        .clone();

    let user = store.user(&id).expect("lookup by fresh id");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.age, Some(36));
}

#[test]
fn fresh_ids_are_unique() {
    let mut store = GraphStore::new();
    let a = store.create_user("A", "a@example.com", None).expect("a").id.clone();
    let b = store.create_user("B", "b@example.com", None).expect("b").id.clone();
    assert_ne!(a, b);
}

#[test]
fn failed_create_leaves_indexes_untouched() {
    let mut store = GraphStore::with_seed_data();
    let err = store
        .create_post("orphan", "body", false, UserId::from("nope"))
        .expect_err("author must not resolve");
    assert!(matches!(err, StoreError::NotFound { .. }));
    assert_eq!(store.post_count(), 3);
    assert!(store.post(&PostId::from("nope")).is_none());
}

#[test]
fn records_come_back_in_insertion_order() {
    let mut store = GraphStore::new();
    for n in 0..5 {
        store
            .create_user(format!("user-{n}"), format!("u{n}@example.com"), None)
            .expect("create user");
    }
    let names: Vec<&str> = store
        .users(None)
        .iter()
        .map(|user| user.name.as_str())
        .collect();
    assert_eq!(names, vec!["user-0", "user-1", "user-2", "user-3", "user-4"]);
}
