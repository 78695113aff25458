mod common;
mod support;

use contacts_backend::db::require_db;
use contacts_backend::domain::contact::ContactFields;
use contacts_backend::errors::domain::{DomainError, NotFoundKind};
use contacts_backend::repos::contacts::{self, PAGE_SIZE};

use crate::support::factory::contact_fields;
use crate::support::memory_state;

#[tokio::test]
async fn create_validates_before_writing() {
    let state = memory_state().await;
    let db = require_db(&state).unwrap();

    let err = contacts::create(db, ContactFields::new("Ada", "", "555", ""))
        .await
        .unwrap_err();
    let errors = match err {
        DomainError::InvalidFields(errors) => errors,
        other => panic!("expected field errors, got {other:?}"),
    };
    assert_eq!(errors.get("last_name"), Some("Last name is required."));
    assert_eq!(errors.get("email"), Some("Email is required."));
    assert_eq!(errors.len(), 2);
    assert_eq!(contacts::count(db).await.unwrap(), 0);
}

#[tokio::test]
async fn insert_skips_validation() {
    let state = memory_state().await;
    let db = require_db(&state).unwrap();

    let contact = contacts::insert(db, ContactFields::default()).await.unwrap();
    assert_eq!(contact.first_name, "");
    assert!(contacts::exists(db, contact.id).await.unwrap());
}

#[tokio::test]
async fn whitespace_counts_as_present() {
    let state = memory_state().await;
    let db = require_db(&state).unwrap();

    let contact = contacts::create(db, ContactFields::new(" ", " ", " ", " "))
        .await
        .unwrap();
    assert_eq!(contacts::fetch_by_id(db, contact.id).await.unwrap(), contact);
}

#[tokio::test]
async fn missing_rows_are_contact_not_found() {
    let state = memory_state().await;
    let db = require_db(&state).unwrap();

    let is_contact_not_found =
        |e: DomainError| matches!(e, DomainError::NotFound(NotFoundKind::Contact, _));

    assert!(is_contact_not_found(
        contacts::fetch_by_id(db, 404).await.unwrap_err()
    ));
    assert!(is_contact_not_found(
        contacts::update(db, 404, contact_fields("ghost")).await.unwrap_err()
    ));
    assert!(is_contact_not_found(contacts::delete(db, 404).await.unwrap_err()));
    assert!(!contacts::exists(db, 404).await.unwrap());
}

#[tokio::test]
async fn list_pages_hold_at_most_page_size() {
    let state = memory_state().await;
    let db = require_db(&state).unwrap();

    for _ in 0..(PAGE_SIZE + 3) {
        contacts::create(db, contact_fields("page")).await.unwrap();
    }

    let first = contacts::list(db, 1).await.unwrap();
    let second = contacts::list(db, 2).await.unwrap();
    assert_eq!(first.len() as u64, PAGE_SIZE);
    assert_eq!(second.len(), 3);
    assert!(first.last().unwrap().id < second[0].id);
    assert_eq!(contacts::list(db, 0).await.unwrap(), first);
    assert!(contacts::list(db, 3).await.unwrap().is_empty());
}

#[tokio::test]
async fn list_far_past_the_end_is_empty() {
    let state = memory_state().await;
    let db = require_db(&state).unwrap();

    for _ in 0..3 {
        contacts::create(db, contact_fields("far")).await.unwrap();
    }

    let last_bindable_page = i64::MAX as u64 / PAGE_SIZE;
    for page in [
        last_bindable_page,
        last_bindable_page + 1,
        1_000_000_000_000_000_000,
        u64::MAX,
    ] {
        assert!(
            contacts::list(db, page).await.unwrap().is_empty(),
            "page {page} should be empty"
        );
    }
    assert_eq!(contacts::list(db, 1).await.unwrap().len(), 3);
}

#[tokio::test]
async fn search_matches_each_field() {
    let state = memory_state().await;
    let db = require_db(&state).unwrap();

    let ada = contacts::create(
        db,
        ContactFields::new("Ada", "Lovelace", "555-1815", "ada@engine.example"),
    )
    .await
    .unwrap();
    let grace = contacts::create(
        db,
        ContactFields::new("Grace", "Hopper", "555-1906", "grace@navy.example"),
    )
    .await
    .unwrap();

    for (term, expected) in [
        ("Ada", vec![ada.id]),
        ("Hop", vec![grace.id]),
        ("1906", vec![grace.id]),
        ("engine", vec![ada.id]),
        ("555", vec![ada.id, grace.id]),
        ("", vec![ada.id, grace.id]),
        ("nobody", vec![]),
    ] {
        let ids: Vec<i64> = contacts::search(db, term)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, expected, "search term {term:?}");
    }
}

#[tokio::test]
async fn exists_by_email_honours_excluded_id() {
    let state = memory_state().await;
    let db = require_db(&state).unwrap();

    let contact = contacts::create(db, contact_fields("owner")).await.unwrap();
    let email = contact.email.clone();

    assert!(contacts::exists_by_email(db, &email, None).await.unwrap());
    assert!(!contacts::exists_by_email(db, &email, Some(contact.id))
        .await
        .unwrap());
    assert!(contacts::exists_by_email(db, &email, Some(contact.id + 1))
        .await
        .unwrap());
    assert!(!contacts::exists_by_email(db, "nobody@example.test", None)
        .await
        .unwrap());
}

#[tokio::test]
async fn update_replaces_every_field() {
    let state = memory_state().await;
    let db = require_db(&state).unwrap();

    let contact = contacts::create(db, contact_fields("before")).await.unwrap();
    let replacement = contact_fields("after");
    let updated = contacts::update(db, contact.id, replacement.clone())
        .await
        .unwrap();

    assert_eq!(updated.id, contact.id);
    assert_eq!(updated.first_name, replacement.first_name);
    assert_eq!(updated.email, replacement.email);
    assert_eq!(contacts::fetch_by_id(db, contact.id).await.unwrap(), updated);
    assert_eq!(contacts::count(db).await.unwrap(), 1);
}
